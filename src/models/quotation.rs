use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cost split of a quotation. The four parts add up to the total price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemizedCosts {
    pub materials: f64,
    pub labor: f64,
    #[serde(default)]
    pub design: f64,
    #[serde(default)]
    pub other: f64,
}

impl ItemizedCosts {
    pub fn sum(&self) -> f64 {
        self.materials + self.labor + self.design + self.other
    }
}

/// One line item of a quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    pub item: String,
    pub description: String,
    pub unit_price: f64,
    pub quantity: f64,
    pub total: f64,
}

impl Detail {
    pub fn new(item: impl Into<String>, description: impl Into<String>, unit_price: f64, quantity: f64) -> Self {
        Self {
            item: item.into(),
            description: description.into(),
            unit_price,
            quantity,
            total: unit_price * quantity,
        }
    }
}

/// Price estimate derived from a requirement. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    #[serde(rename = "_id")]
    pub id: String,
    pub project_id: String,
    pub requirement_id: String,
    pub name: String,
    pub total_price: f64,
    pub itemized_costs: ItemizedCosts,
    pub details: Vec<Detail>,
    pub created_at: DateTime<Utc>,
}
