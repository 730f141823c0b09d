//! Prompt construction for the investment report request.
//!
//! Pure functions: the same preferences and year always yield the same text.
//! The schema itself travels separately in the request (see [`crate::schema`]);
//! the prompt only tells the model to follow it.

use chrono::Datelike;

use crate::preferences::{PaymentMode, UserPreferences};

/// Local terminology the model must apply when reading and writing prices and listings.
const MARKET_CONTEXT: &[&str] = &[
    "\"File\": Refers to an unallocated land file in a society. Crucial to check for \"Balloting\" status (allocated vs unallocated).",
    "\"Own\" or \"Profit\": The premium amount paid above the official booking price for high-demand files/plots.",
    "\"Installments\": Usually implies booking a new plot/file in a developing society (e.g., Blue World, Capital Smart City, Bahria projects).",
    "\"Possession\": Whether the land is ready for construction or still under development.",
    "\"NOC\": (No Objection Certificate) from authorities (LDA, CDA, KDA, RDA, SBCA) is critical for safety.",
    "Currency: Prices are often quoted in \"Crore\" (10 Million) or \"Lac\" (100,000).",
];

/// Builds the prompt using the current calendar year as the projection start.
pub fn build_prompt(prefs: &UserPreferences) -> String {
    build_prompt_for_year(prefs, chrono::Local::now().year())
}

/// Builds the prompt with an explicit projection start year.
pub fn build_prompt_for_year(prefs: &UserPreferences, start_year: i32) -> String {
    let context = MARKET_CONTEXT
        .iter()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n");

    let installment_note = match prefs.payment_mode {
        PaymentMode::Installments => {
            "\n   - \"Installments\" is selected: mention the typical down payment percentage in the description."
        }
        PaymentMode::Cash => "",
    };

    format!(
        "Act as a world-class Real Estate Investment Advisor specializing in the Pakistan market.
Analyze the following user request:
- Budget: {budget}
- Location/City: {location}
- Property Type: {property_type}
- Payment Mode: {payment_mode}
- Investment Horizon: {duration}

Context for Pakistan Real Estate:
{context}

Provide a detailed investment report in JSON format:
1. **Best Areas/Societies**: Identify specific societies (e.g., DHA, Bahria, Smart Cities) or projects in/near {location} that fit the budget.{installment_note}
2. **Financial Projections**: Estimate 5-year value growth based on Pakistan's inflation and real estate trends, starting from {start_year} ({start_year}-{end_year}).
3. **Hidden Costs**: List costs specific to this region (e.g., Transfer fees, CVT, Stamp duty, TMA taxes, Membership fees, Agent commission).
4. **Pros & Cons**: Provide honest risks (e.g., \"File\" trading risks, development delays, litigation) and benefits.

Return the data in strict JSON format matching the schema.
",
        budget = prefs.budget,
        location = prefs.location,
        property_type = prefs.property_type,
        payment_mode = prefs.payment_mode,
        duration = prefs.duration,
        end_year = start_year + 4,
    )
}
