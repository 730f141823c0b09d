//! Investment report returned by the model, typed to the requested schema.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Expected appreciation of a recommended area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthRating {
    High,
    Moderate,
    Stable,
    Risky,
}

impl GrowthRating {
    pub const ALL: [GrowthRating; 4] = [
        GrowthRating::High,
        GrowthRating::Moderate,
        GrowthRating::Stable,
        GrowthRating::Risky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthRating::High => "High",
            GrowthRating::Moderate => "Moderate",
            GrowthRating::Stable => "Stable",
            GrowthRating::Risky => "Risky",
        }
    }
}

impl fmt::Display for GrowthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One society or project the model recommends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedArea {
    pub name: String,
    /// Possession, balloting and down-payment notes.
    pub description: String,
    pub average_price: String,
    pub growth_rating: GrowthRating,
}

/// Projected value for one year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: String,
    /// Value in local currency units (PKR).
    pub estimated_value: f64,
}

/// Full report, parsed verbatim from the model's JSON text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateReport {
    pub summary: String,
    pub best_areas: Vec<RecommendedArea>,
    pub hidden_costs: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub investment_plan: Vec<ProjectionPoint>,
    pub advice_for_budget: String,
}
