pub mod calculator;
pub mod models;
pub mod rates;

pub use calculator::{calculate, estimate};
pub use models::{CostBreakdown, Geometry};
