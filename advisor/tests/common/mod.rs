//! Shared fixtures for advisor integration tests.

#![allow(dead_code)]

use advisor::{InvestmentHorizon, PaymentMode, PropertyType, UserPreferences};

/// A report shaped exactly like the requested schema.
pub const SAMPLE_REPORT: &str = r#"{
  "summary": "Bahria Town Lahore and DHA Phase 9 Prism fit a 2 Crore budget.",
  "adviceForBudget": "Realistic for a 10 Marla possession plot; no own required.",
  "bestAreas": [
    {
      "name": "DHA Phase 9 Prism",
      "description": "Possession available, NOC approved by LDA.",
      "averagePrice": "1.9 Crore",
      "growthRating": "High"
    },
    {
      "name": "Lahore Smart City",
      "description": "Unballoted files, 25% down payment.",
      "averagePrice": "45 Lac",
      "growthRating": "Risky"
    }
  ],
  "hiddenCosts": ["CVT 2%", "Transfer fee", "Agent commission 1%"],
  "pros": ["Secure title", "Developed infrastructure"],
  "cons": ["Slow development in new blocks"],
  "investmentPlan": [
    {"year": "2025", "estimatedValue": 20000000},
    {"year": "2026", "estimatedValue": 22000000},
    {"year": "2027", "estimatedValue": 24200000},
    {"year": "2028", "estimatedValue": 26600000},
    {"year": "2029", "estimatedValue": 29300000}
  ]
}"#;

pub fn sample_prefs() -> UserPreferences {
    UserPreferences {
        budget: "2 Crore".to_string(),
        location: "DHA Lahore".to_string(),
        property_type: PropertyType::Plot,
        duration: InvestmentHorizon::LongTerm,
        payment_mode: PaymentMode::Installments,
    }
}
