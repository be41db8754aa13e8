//! Quotation comparison analyzer.
//!
//! Pure derivation of summary statistics, per-category spreads and
//! qualitative labels from two or more quotation snapshots. All thresholds
//! are strict, so a value sitting exactly on a boundary lands in the default
//! bucket.

use chrono::Utc;

use crate::error::ValidationError;
use crate::models::{
    Analysis, CategoryComparison, CategoryValue, Comparison, CostComparison, CostFeature,
    PriceLevel, PriceSummary, Quotation, QuotationAnalysis,
};

/// Deviation from the average, in percent, beyond which a price is not "near average"
const PRICE_LEVEL_BAND: f64 = 10.0;
const HIGH_MATERIAL_SHARE: f64 = 0.6;
const LOW_MATERIAL_SHARE: f64 = 0.4;
const HIGH_LABOR_SHARE: f64 = 0.4;
const LOW_LABOR_SHARE: f64 = 0.2;
const HIGH_DESIGN_SHARE: f64 = 0.15;
/// Relative spread above which quotations are considered far apart
const SPREAD_THRESHOLD: f64 = 0.3;

pub const WIDE_PRICE_SPREAD: &str =
    "Prices differ considerably between quotations; compare their materials and craftsmanship in detail";
pub const NARROW_PRICE_SPREAD: &str =
    "Prices are close; weigh service quality and the contractor's reputation";
pub const MATERIAL_SPREAD: &str =
    "Material costs vary considerably; verify material brands, models and quality grades";
pub const LABOR_SPREAD: &str =
    "Labor costs vary considerably; ask about crew size, experience and workmanship";

/// Build a comparison report over the given quotation snapshots.
pub fn compare(quotations: Vec<Quotation>, name: Option<String>) -> Result<Comparison, ValidationError> {
    let analysis = analyze(&quotations)?;
    let created_at = Utc::now();
    let name = name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| format!("Quotation comparison {}", created_at.format("%Y-%m-%d")));

    Ok(Comparison {
        id: format!("comparison_{}", uuid::Uuid::new_v4().simple()),
        name,
        quotations,
        analysis,
        created_at,
    })
}

/// Derive the analysis of two or more quotations.
pub fn analyze(quotations: &[Quotation]) -> Result<Analysis, ValidationError> {
    if quotations.len() < 2 {
        return Err(ValidationError::InsufficientQuotations(quotations.len()));
    }

    let totals: Vec<f64> = quotations.iter().map(|q| q.total_price).collect();
    let (min_price, max_price, avg_price) = min_max_avg(&totals);
    let price_range = max_price - min_price;
    let range_ratio = ratio(price_range, min_price);

    let summary = PriceSummary {
        min_price,
        max_price,
        avg_price,
        price_range,
        price_range_ratio: round_half_up(range_ratio * 100.0, 0),
    };

    let cost_comparison = CostComparison {
        materials: compare_category(quotations, |q| q.itemized_costs.materials),
        labor: compare_category(quotations, |q| q.itemized_costs.labor),
        design: compare_category(quotations, |q| q.itemized_costs.design),
    };

    let quotation_analysis = quotations
        .iter()
        .map(|q| analyze_quotation(q, avg_price))
        .collect();

    let mut recommendations = Vec::new();
    if range_ratio > SPREAD_THRESHOLD {
        recommendations.push(WIDE_PRICE_SPREAD.to_string());
    } else {
        recommendations.push(NARROW_PRICE_SPREAD.to_string());
    }
    if spread(&cost_comparison.materials) > SPREAD_THRESHOLD {
        recommendations.push(MATERIAL_SPREAD.to_string());
    }
    if spread(&cost_comparison.labor) > SPREAD_THRESHOLD {
        recommendations.push(LABOR_SPREAD.to_string());
    }

    Ok(Analysis {
        summary,
        cost_comparison,
        quotation_analysis,
        recommendations,
    })
}

fn compare_category(quotations: &[Quotation], cost: impl Fn(&Quotation) -> f64) -> CategoryComparison {
    let costs: Vec<f64> = quotations.iter().map(&cost).collect();
    let (min_cost, max_cost, avg_cost) = min_max_avg(&costs);

    CategoryComparison {
        min_cost,
        max_cost,
        avg_cost,
        values: quotations
            .iter()
            .map(|q| CategoryValue {
                id: q.id.clone(),
                name: q.name.clone(),
                value: cost(q),
            })
            .collect(),
    }
}

fn analyze_quotation(quotation: &Quotation, avg_price: f64) -> QuotationAnalysis {
    let difference = ratio(quotation.total_price - avg_price, avg_price) * 100.0;

    let price_level = if difference < -PRICE_LEVEL_BAND {
        PriceLevel::BelowAverage
    } else if difference > PRICE_LEVEL_BAND {
        PriceLevel::AboveAverage
    } else {
        PriceLevel::NearAverage
    };

    QuotationAnalysis {
        id: quotation.id.clone(),
        name: quotation.name.clone(),
        total_price: quotation.total_price,
        price_difference: round_half_up(difference, 1),
        price_level,
        features: cost_features(quotation),
    }
}

fn cost_features(quotation: &Quotation) -> Vec<CostFeature> {
    let total = quotation.total_price;
    let mut features = Vec::new();
    // shares of a zero total carry no information
    if total <= 0.0 {
        return features;
    }

    let costs = &quotation.itemized_costs;
    let material_share = costs.materials / total;
    if material_share > HIGH_MATERIAL_SHARE {
        features.push(CostFeature::HighMaterialShare);
    } else if material_share < LOW_MATERIAL_SHARE {
        features.push(CostFeature::LowMaterialShare);
    }

    let labor_share = costs.labor / total;
    if labor_share > HIGH_LABOR_SHARE {
        features.push(CostFeature::HighLaborShare);
    } else if labor_share < LOW_LABOR_SHARE {
        features.push(CostFeature::LowLaborShare);
    }

    if costs.design / total > HIGH_DESIGN_SHARE {
        features.push(CostFeature::HigherDesignShare);
    }

    features
}

/// (max - min) / avg of a category, 0 when the average is not positive.
fn spread(category: &CategoryComparison) -> f64 {
    ratio(category.max_cost - category.min_cost, category.avg_cost)
}

/// Division that yields 0 instead of a non-finite value for a non-positive denominator.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn min_max_avg(values: &[f64]) -> (f64, f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = values.iter().sum::<f64>() / values.len() as f64;
    (min, max, avg)
}

/// Round to `decimals` places with halves going up, so -2.25 becomes -2.2.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale + 0.5).floor() / scale
}
