pub mod comparison;
pub mod floorplan;
pub mod health;
pub mod metrics_handler;
pub mod pricing;
pub mod requirements;
