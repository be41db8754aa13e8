use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::quotation::Quotation;

/// Price position of a quotation relative to the average of its comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceLevel {
    #[serde(rename = "below average")]
    BelowAverage,
    #[serde(rename = "near average")]
    NearAverage,
    #[serde(rename = "above average")]
    AboveAverage,
}

/// Qualitative label attached when a cost share crosses a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostFeature {
    #[serde(rename = "high material cost share")]
    HighMaterialShare,
    #[serde(rename = "low material cost share")]
    LowMaterialShare,
    #[serde(rename = "high labor share")]
    HighLaborShare,
    #[serde(rename = "low labor share")]
    LowLaborShare,
    #[serde(rename = "higher design service share")]
    HigherDesignShare,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
    pub price_range: f64,
    /// Range over minimum, as a rounded whole percentage
    pub price_range_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryValue {
    pub id: String,
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryComparison {
    pub min_cost: f64,
    pub max_cost: f64,
    pub avg_cost: f64,
    pub values: Vec<CategoryValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComparison {
    pub materials: CategoryComparison,
    pub labor: CategoryComparison,
    pub design: CategoryComparison,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationAnalysis {
    pub id: String,
    pub name: String,
    pub total_price: f64,
    /// Deviation from the average in percent, one decimal
    pub price_difference: f64,
    pub price_level: PriceLevel,
    pub features: Vec<CostFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub summary: PriceSummary,
    pub cost_comparison: CostComparison,
    pub quotation_analysis: Vec<QuotationAnalysis>,
    pub recommendations: Vec<String>,
}

/// Report contrasting two or more quotation snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub quotations: Vec<Quotation>,
    pub analysis: Analysis,
    pub created_at: DateTime<Utc>,
}
