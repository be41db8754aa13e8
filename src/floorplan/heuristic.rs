use std::hash::{DefaultHasher, Hash, Hasher};
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use super::catalog::{room_guide, GENERAL_RECOMMENDATIONS, LAYOUT_ISSUES};
use crate::models::{LayoutIssue, RoomAnalysis, RoomKind};

/// Rooms reported by the heuristic with their area bounds in square meters.
const ROOM_AREAS: [(RoomKind, RangeInclusive<u32>); 5] = [
    (RoomKind::LivingRoom, 15..=35),
    (RoomKind::Bedroom, 10..=20),
    (RoomKind::Kitchen, 5..=10),
    (RoomKind::Bathroom, 3..=6),
    (RoomKind::DiningRoom, 8..=16),
];

/// Analysis body before it is bound to an upload.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicAnalysis {
    pub total_area: f64,
    pub rooms: Vec<RoomAnalysis>,
    pub issues: Vec<LayoutIssue>,
    pub general_recommendations: Vec<String>,
}

/// Plausible layout analysis derived from the file contents alone.
///
/// The generator is seeded from a hash of `content`, so the same upload always
/// yields the same rooms and issues.
pub fn analyze(content: &[u8]) -> HeuristicAnalysis {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let mut rng = StdRng::seed_from_u64(hasher.finish());

    let rooms: Vec<RoomAnalysis> = ROOM_AREAS
        .iter()
        .map(|(kind, range)| {
            let guide = room_guide(*kind);
            RoomAnalysis {
                kind: *kind,
                name: guide.name.to_string(),
                area: rng.gen_range(range.clone()) as f64,
                tips: guide.tips.iter().map(|t| t.to_string()).collect(),
            }
        })
        .collect();

    let issue_count = rng.gen_range(2..=3);
    let mut picked = sample(&mut rng, LAYOUT_ISSUES.len(), issue_count).into_vec();
    picked.sort_unstable();
    let issues = picked
        .into_iter()
        .map(|i| {
            let guide = &LAYOUT_ISSUES[i];
            LayoutIssue {
                key: guide.key.to_string(),
                name: guide.name.to_string(),
                tips: guide.tips.iter().map(|t| t.to_string()).collect(),
            }
        })
        .collect();

    HeuristicAnalysis {
        total_area: rooms.iter().map(|r| r.area).sum(),
        rooms,
        issues,
        general_recommendations: GENERAL_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
    }
}
