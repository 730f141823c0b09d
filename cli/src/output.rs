//! JSON output for `--json`: stdout or `--file`, compact or `--pretty`.

use std::io::Write;
use std::path::Path;

use advisor::{RealEstateReport, UserPreferences};
use serde_json::{json, Value};

use crate::CliError;

/// Envelope written for a finished report: the submitted preferences and the report.
pub fn report_json(prefs: &UserPreferences, report: &RealEstateReport) -> Result<Value, CliError> {
    Ok(json!({
        "preferences": serde_json::to_value(prefs)?,
        "report": serde_json::to_value(report)?,
    }))
}

pub fn render_json(value: &Value, pretty: bool) -> Result<String, CliError> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(s)
}

/// Writes JSON to stdout or to the given file. When pretty is true, multi-line; else one line.
pub fn write_json_output(value: &Value, file: Option<&Path>, pretty: bool) -> Result<(), CliError> {
    let s = render_json(value, pretty)?;
    match file {
        Some(path) => std::fs::write(path, format!("{}\n", s))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", s)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
