//! Plain-text rendering of a [`RealEstateReport`] for the terminal.
//!
//! Growth ratings are coloured when `color` is on (High green, Moderate blue,
//! Stable grey, Risky yellow). Projection values are shown in Lac/Crore.

use advisor::{GrowthRating, ProjectionPoint, RealEstateReport, UserPreferences};
use crossterm::style::Stylize;

const INDENT: &str = "  ";
const LAC: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

#[derive(Clone, Copy, Debug, Default)]
pub struct DisplayOptions {
    pub color: bool,
}

/// `2.5 Crore`, `45 Lac`, or the plain rounded number below one Lac.
///
/// The unit is picked after rounding to two decimals, so `9_999_999` is `1 Crore`.
pub fn format_pkr(value: f64) -> String {
    fn round2(v: f64) -> f64 {
        (v * 100.0).round() / 100.0
    }
    fn trimmed(v: f64) -> String {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
    let abs = value.abs();
    if round2(abs / CRORE) >= 1.0 {
        format!("{} Crore", trimmed(value / CRORE))
    } else if round2(abs / LAC) >= 1.0 {
        format!("{} Lac", trimmed(value / LAC))
    } else {
        format!("{:.0}", value)
    }
}

fn rating_label(rating: GrowthRating, opts: DisplayOptions) -> String {
    let label = rating.as_str();
    if !opts.color {
        return format!("[{}]", label);
    }
    let styled = match rating {
        GrowthRating::High => label.green(),
        GrowthRating::Moderate => label.blue(),
        GrowthRating::Stable => label.grey(),
        GrowthRating::Risky => label.yellow(),
    };
    format!("[{}]", styled.bold())
}

fn heading(title: &str, opts: DisplayOptions) -> String {
    if opts.color {
        title.bold().to_string()
    } else {
        title.to_string()
    }
}

fn bullet_section(lines: &mut Vec<String>, title: &str, items: &[String], opts: DisplayOptions) {
    lines.push(heading(title, opts));
    if items.is_empty() {
        lines.push(format!("{}(none)", INDENT));
    }
    for item in items {
        lines.push(format!("{}- {}", INDENT, item));
    }
    lines.push(String::new());
}

/// One row per year with the change relative to the first projected value.
fn projection_rows(plan: &[ProjectionPoint]) -> Vec<String> {
    let base = plan.first().map(|p| p.estimated_value).unwrap_or(0.0);
    plan.iter()
        .map(|p| {
            let change = if base > 0.0 {
                format!("{:+.1}%", (p.estimated_value - base) / base * 100.0)
            } else {
                "-".to_string()
            };
            format!(
                "{}{:<6} {:>14}  {:>8}",
                INDENT,
                p.year,
                format_pkr(p.estimated_value),
                change
            )
        })
        .collect()
}

/// Header line echoing the submitted preferences.
pub fn format_preferences(prefs: &UserPreferences) -> String {
    format!(
        "{} in {} | {} | {} | {}",
        prefs.budget, prefs.location, prefs.property_type, prefs.payment_mode, prefs.duration
    )
}

/// Full multi-line report.
pub fn format_report(report: &RealEstateReport, opts: DisplayOptions) -> String {
    let mut lines = Vec::new();

    lines.push(heading("Summary", opts));
    lines.push(format!("{}{}", INDENT, report.summary));
    lines.push(String::new());

    lines.push(heading("Budget Advice", opts));
    lines.push(format!("{}{}", INDENT, report.advice_for_budget));
    lines.push(String::new());

    lines.push(heading("Recommended Areas", opts));
    if report.best_areas.is_empty() {
        lines.push(format!("{}(none)", INDENT));
    }
    for (i, area) in report.best_areas.iter().enumerate() {
        lines.push(format!(
            "{}{}. {} {} (avg. {})",
            INDENT,
            i + 1,
            area.name,
            rating_label(area.growth_rating, opts),
            area.average_price
        ));
        lines.push(format!("{}{}{}", INDENT, INDENT, area.description));
    }
    lines.push(String::new());

    lines.push(heading("5-Year Projection", opts));
    if report.investment_plan.is_empty() {
        lines.push(format!("{}(none)", INDENT));
    }
    lines.extend(projection_rows(&report.investment_plan));
    lines.push(String::new());

    bullet_section(&mut lines, "Hidden Costs", &report.hidden_costs, opts);
    bullet_section(&mut lines, "Pros", &report.pros, opts);
    bullet_section(&mut lines, "Cons", &report.cons, opts);

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
