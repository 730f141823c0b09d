//! Advisor error types.
//!
//! Returned by the Gemini client, the report requester and the session. Every
//! variant carries enough text to be shown to the user as-is.

use thiserror::Error;

/// Error raised while collecting preferences or requesting a report.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// `API_KEY` is not set (or empty) when building the Gemini client.
    #[error("API_KEY environment variable is missing")]
    MissingApiKey,

    /// HTTP request could not be sent or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// Provider answered with a non-success status.
    #[error("Gemini API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Provider answered but the first candidate carried no text.
    #[error("No data returned from AI")]
    EmptyResponse,

    /// Returned text is not a report matching the requested schema.
    #[error("invalid report JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Form submitted without the required fields.
    #[error("missing required field(s): {}", .0.join(", "))]
    IncompleteForm(Vec<&'static str>),

    /// A report request is already in flight.
    #[error("a report request is already in progress")]
    Busy,
}
