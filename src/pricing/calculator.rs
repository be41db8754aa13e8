use chrono::Utc;

use crate::error::ValidationError;
use crate::models::{Detail, ItemizedCosts, Quotation, Requirement};
use crate::pricing::models::{CostBreakdown, Geometry};
use crate::pricing::rates::{BASE_DESIGN_RATE, BASE_LABOR_RATE};

/// Itemized estimate for a requirement, before it is bound to an id.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub breakdown: CostBreakdown,
    pub details: Vec<Detail>,
}

/// Price a requirement.
///
/// Deterministic in everything but the generated id and timestamp. Storing
/// the result is left to the caller.
pub fn calculate(requirement: &Requirement) -> Result<Quotation, ValidationError> {
    let estimate = estimate(requirement)?;
    let breakdown = estimate.breakdown;

    Ok(Quotation {
        id: format!("quote_{}", uuid::Uuid::new_v4().simple()),
        project_id: requirement.project_id.clone(),
        requirement_id: requirement.id.clone(),
        name: format!("{} style renovation quote", requirement.style().label()),
        total_price: breakdown.total_cost,
        itemized_costs: ItemizedCosts {
            materials: breakdown.materials_cost,
            labor: breakdown.labor_cost,
            design: breakdown.design_cost,
            other: 0.0,
        },
        details: estimate.details,
        created_at: Utc::now(),
    })
}

/// Compute the cost breakdown and the six line items of a requirement.
pub fn estimate(requirement: &Requirement) -> Result<Estimate, ValidationError> {
    let area = validated_area(requirement.basic_info.area)?;
    let geometry = Geometry::from_area(area);

    let materials = &requirement.material_choices;
    let floor = materials.floor_material.unwrap_or_default();
    let wall = materials.wall_material.unwrap_or_default();
    let kitchen_bathroom = materials.kitchen_bathroom_material.unwrap_or_default();
    let door_window = materials.door_window_material.unwrap_or_default();
    let style = requirement.style();
    let factor = style.complexity_factor();

    let floor_item = Detail::new("Floor materials", floor.label(), floor.unit_price(), area);
    let wall_item = Detail::new("Wall materials", wall.label(), wall.unit_price(), geometry.wall_area);
    let kitchen_bathroom_item = Detail::new(
        "Kitchen and bathroom materials",
        kitchen_bathroom.label(),
        kitchen_bathroom.unit_price(),
        geometry.kitchen_bathroom_perimeter,
    );
    let door_window_item = Detail::new(
        "Doors and windows",
        door_window.label(),
        door_window.unit_price(),
        geometry.door_count,
    );

    let mut breakdown = CostBreakdown {
        materials_cost: floor_item.total
            + wall_item.total
            + kitchen_bathroom_item.total
            + door_window_item.total,
        labor_cost: BASE_LABOR_RATE * area * factor,
        design_cost: BASE_DESIGN_RATE * area,
        total_cost: 0.0,
    };
    breakdown.calculate_total();
    if !breakdown.total_cost.is_finite() {
        return Err(ValidationError::AreaTooLarge(area));
    }

    let labor_item = Detail {
        item: "Labor".to_string(),
        description: format!("{} style (complexity factor: {})", style.label(), factor),
        unit_price: BASE_LABOR_RATE * factor,
        quantity: area,
        total: breakdown.labor_cost,
    };
    let design_item = Detail {
        item: "Design".to_string(),
        description: "Design service fee".to_string(),
        unit_price: BASE_DESIGN_RATE,
        quantity: area,
        total: breakdown.design_cost,
    };

    Ok(Estimate {
        breakdown,
        details: vec![
            floor_item,
            wall_item,
            kitchen_bathroom_item,
            door_window_item,
            labor_item,
            design_item,
        ],
    })
}

fn validated_area(area: Option<f64>) -> Result<f64, ValidationError> {
    match area {
        None => Err(ValidationError::MissingArea),
        Some(a) if !a.is_finite() || a <= 0.0 => Err(ValidationError::InvalidArea(a)),
        Some(a) => Ok(a),
    }
}

impl From<&Quotation> for CostBreakdown {
    fn from(quotation: &Quotation) -> Self {
        Self {
            materials_cost: quotation.itemized_costs.materials,
            labor_cost: quotation.itemized_costs.labor,
            design_cost: quotation.itemized_costs.design,
            total_cost: quotation.total_price,
        }
    }
}
