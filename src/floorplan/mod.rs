//! Floorplan layout analysis: room and issue catalogs plus the seeded heuristic
//! used when no advisor reply is available.

pub mod catalog;
pub mod heuristic;

pub use heuristic::{analyze, HeuristicAnalysis};
