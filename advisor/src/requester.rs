//! Report requester: preferences in, typed report out, one model call.

use std::sync::Arc;

use tracing::debug;

use crate::error::AdvisorError;
use crate::llm::{GenerateRequest, LlmClient};
use crate::preferences::UserPreferences;
use crate::prompt::build_prompt;
use crate::report::RealEstateReport;
use crate::schema::{report_schema, RESPONSE_MIME_TYPE};

/// Builds the prompt and schema for a preference record and parses the answer.
///
/// No retries: a provider error, an empty answer or unparsable JSON is returned
/// to the caller as-is.
#[derive(Clone)]
pub struct ReportRequester {
    llm: Arc<dyn LlmClient>,
}

impl ReportRequester {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Request that would be sent for `prefs` (prompt uses the current year).
    pub fn build_request(prefs: &UserPreferences) -> GenerateRequest {
        GenerateRequest {
            prompt: build_prompt(prefs),
            response_schema: report_schema(),
            response_mime_type: RESPONSE_MIME_TYPE.to_string(),
        }
    }

    /// Issues one generation call and parses the text into a report.
    pub async fn generate_real_estate_advice(
        &self,
        prefs: &UserPreferences,
    ) -> Result<RealEstateReport, AdvisorError> {
        let request = Self::build_request(prefs);
        let response = self.llm.generate(&request).await?;
        let text = response
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or(AdvisorError::EmptyResponse)?;
        debug!(text_len = text.len(), "parsing report");
        parse_report(&text)
    }
}

/// Parses the model's JSON text into a report.
pub fn parse_report(text: &str) -> Result<RealEstateReport, AdvisorError> {
    Ok(serde_json::from_str(text)?)
}
