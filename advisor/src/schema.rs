//! Response schema for Gemini structured output (OpenAPI subset, upper-case type names).
//!
//! Kept in sync with [`crate::report::RealEstateReport`]: every required key here
//! is a non-optional field there.

use serde_json::{json, Value};

use crate::report::GrowthRating;

/// MIME type requested for the response body text.
pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// Top-level keys the model must always return.
pub const REQUIRED_KEYS: [&str; 7] = [
    "summary",
    "bestAreas",
    "hiddenCosts",
    "pros",
    "cons",
    "investmentPlan",
    "adviceForBudget",
];

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

/// Schema for [`crate::report::RealEstateReport`].
pub fn report_schema() -> Value {
    let ratings: Vec<&str> = GrowthRating::ALL.iter().map(|r| r.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A concise executive summary of the investment potential, mentioning key societies."
            },
            "adviceForBudget": {
                "type": "STRING",
                "description": "Specific advice: Is the budget realistic? Does it require 'Own' payment? Is it enough for a possession plot?"
            },
            "bestAreas": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "description": {
                            "type": "STRING",
                            "description": "Include details like Possession status, Balloting status, or Down Payment req."
                        },
                        "averagePrice": { "type": "STRING" },
                        "growthRating": { "type": "STRING", "enum": ratings }
                    },
                    "required": ["name", "description", "averagePrice", "growthRating"]
                }
            },
            "hiddenCosts": string_array(),
            "pros": string_array(),
            "cons": string_array(),
            "investmentPlan": {
                "type": "ARRAY",
                "description": "Projected value of the property over the next 5 years starting from current year.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "year": { "type": "STRING" },
                        "estimatedValue": {
                            "type": "NUMBER",
                            "description": "Estimated value in local currency numbers (e.g. 5000000)"
                        }
                    },
                    "required": ["year", "estimatedValue"]
                }
            }
        },
        "required": REQUIRED_KEYS
    })
}
