//! Static price table.
//!
//! Each catalog's `Other` variant carries the fallback price of its class, so
//! unknown or missing choices never fail a calculation.

use crate::models::{DoorWindowMaterial, FloorMaterial, KitchenBathroomMaterial, Style, WallMaterial};

/// Labor cost per square meter before the style factor
pub const BASE_LABOR_RATE: f64 = 200.0;
/// Design service cost per square meter
pub const BASE_DESIGN_RATE: f64 = 100.0;

pub const CEILING_HEIGHT_M: f64 = 2.8;
pub const KITCHEN_BATHROOM_SHARE: f64 = 0.2;
pub const AREA_PER_DOOR_M2: f64 = 15.0;

impl FloorMaterial {
    /// Price per square meter
    pub fn unit_price(&self) -> f64 {
        match self {
            Self::WoodFloor => 300.0,
            Self::CeramicTile => 200.0,
            Self::Marble => 800.0,
            Self::Other => 250.0,
        }
    }
}

impl WallMaterial {
    /// Price per square meter of wall
    pub fn unit_price(&self) -> f64 {
        match self {
            Self::LatexPaint => 60.0,
            Self::Wallpaper => 80.0,
            Self::DiatomMud => 120.0,
            Self::Other => 80.0,
        }
    }
}

impl KitchenBathroomMaterial {
    /// Price per meter of countertop
    pub fn unit_price(&self) -> f64 {
        match self {
            Self::StandardCounter => 1000.0,
            Self::QuartzCounter => 1500.0,
            Self::MarbleCounter => 2500.0,
            Self::Other => 1200.0,
        }
    }
}

impl DoorWindowMaterial {
    /// Price per door
    pub fn unit_price(&self) -> f64 {
        match self {
            Self::SolidWoodDoor => 2000.0,
            Self::CompositeDoor => 1200.0,
            Self::AluminumAlloy => 1500.0,
            Self::Other => 1300.0,
        }
    }
}

impl Style {
    /// Multiplier on the base labor rate for the style's construction difficulty.
    pub fn complexity_factor(&self) -> f64 {
        match self {
            Self::ModernMinimalist => 1.0,
            Self::Nordic => 1.1,
            Self::ChineseTraditional => 1.3,
            Self::American => 1.2,
            Self::Industrial => 1.15,
            Self::Other => 1.2,
        }
    }
}
