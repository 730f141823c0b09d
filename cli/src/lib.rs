//! Library for the `estate-advisor` binary: terminal rendering, the interactive
//! form and JSON output. `main.rs` wires these to clap and the advisor session.

pub mod display;
pub mod form;
pub mod output;

pub use display::{format_pkr, format_preferences, format_report, DisplayOptions};
pub use form::{is_quit_command, FormPrompter};
pub use output::{report_json, write_json_output};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Advisor(#[from] advisor::AdvisorError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
