//! # Advisor
//!
//! Real-estate investment advisor core: collect preferences, ask a hosted model
//! for a schema-constrained report, and hand back a typed [`RealEstateReport`].
//!
//! ## Flow
//!
//! [`PreferenceForm`] → (submit) → [`ReportRequester`] → [`LlmClient`] → [`RealEstateReport`].
//! [`AdvisorSession`] wraps the requester with a loading flag so only one request
//! is in flight.
//!
//! ## Main modules
//!
//! - [`preferences`]: [`UserPreferences`], [`PropertyType`], [`InvestmentHorizon`], [`PaymentMode`].
//! - [`form`]: [`PreferenceForm`] field state and submit guard.
//! - [`report`]: [`RealEstateReport`], [`RecommendedArea`], [`ProjectionPoint`], [`GrowthRating`].
//! - [`prompt`]: [`build_prompt`] with local market terminology.
//! - [`schema`]: [`report_schema`] for Gemini structured output.
//! - [`llm`]: [`LlmClient`] trait, [`GeminiClient`], [`MockLlm`].
//! - [`requester`]: [`ReportRequester`].
//! - [`session`]: [`AdvisorSession`], [`Outcome`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use advisor::{GeminiClient, PreferenceForm, ReportRequester};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), advisor::AdvisorError> {
//! let form = PreferenceForm::new()
//!     .with_budget("2 Crore")
//!     .with_location("DHA Lahore");
//! let prefs = form.try_preferences()?;
//! let requester = ReportRequester::new(Arc::new(GeminiClient::from_env()?));
//! let report = requester.generate_real_estate_advice(&prefs).await?;
//! println!("{}", report.summary);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod form;
pub mod llm;
pub mod preferences;
pub mod prompt;
pub mod report;
pub mod requester;
pub mod schema;
pub mod session;

pub use error::AdvisorError;
pub use form::PreferenceForm;
pub use llm::{GeminiClient, GenerateRequest, LlmClient, LlmResponse, LlmUsage, MockLlm};
pub use preferences::{InvestmentHorizon, PaymentMode, PropertyType, UserPreferences};
pub use prompt::{build_prompt, build_prompt_for_year};
pub use report::{GrowthRating, ProjectionPoint, RealEstateReport, RecommendedArea};
pub use requester::{parse_report, ReportRequester};
pub use schema::{report_schema, RESPONSE_MIME_TYPE};
pub use session::{AdvisorSession, Outcome};
