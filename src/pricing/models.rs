use serde::{Deserialize, Serialize};

use super::rates::{AREA_PER_DOOR_M2, CEILING_HEIGHT_M, KITCHEN_BATHROOM_SHARE};

/// Quantities estimated from the floor area alone.
///
/// No real floorplan is available at pricing time, so the footprint is
/// treated as a square with four walls and the kitchen plus bathroom as a
/// square occupying a fixed share of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub area: f64,
    pub wall_area: f64,
    pub kitchen_bathroom_perimeter: f64,
    pub door_count: f64,
}

impl Geometry {
    pub fn from_area(area: f64) -> Self {
        Self {
            area,
            wall_area: area.sqrt() * 4.0 * CEILING_HEIGHT_M,
            kitchen_bathroom_perimeter: (area * KITCHEN_BATHROOM_SHARE).sqrt() * 4.0,
            door_count: (area / AREA_PER_DOOR_M2).ceil(),
        }
    }
}

/// Cost summary of a quotation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub materials_cost: f64,
    pub labor_cost: f64,
    pub design_cost: f64,
    pub total_cost: f64,
}

impl CostBreakdown {
    /// Calculate total cost from components
    pub fn calculate_total(&mut self) {
        self.total_cost = self.materials_cost + self.labor_cost + self.design_cost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_for_hundred_square_meters() {
        let geometry = Geometry::from_area(100.0);
        assert!((geometry.wall_area - 112.0).abs() < 1e-9);
        assert!((geometry.kitchen_bathroom_perimeter - 20f64.sqrt() * 4.0).abs() < 1e-9);
        assert_eq!(geometry.door_count, 7.0);
    }

    #[test]
    fn test_door_count_rounds_up() {
        assert_eq!(Geometry::from_area(15.0).door_count, 1.0);
        assert_eq!(Geometry::from_area(15.5).door_count, 2.0);
        assert_eq!(Geometry::from_area(3.0).door_count, 1.0);
    }
}
