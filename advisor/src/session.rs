//! Advisor session: one in-flight request at a time, gated by a loading flag.
//!
//! Mirrors what a report screen keeps: whether a request is running and the
//! last outcome (report or error text). Nothing is cached across submissions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tracing::info;

use crate::error::AdvisorError;
use crate::preferences::UserPreferences;
use crate::report::RealEstateReport;
use crate::requester::ReportRequester;

/// Result of the last finished submission.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Report(RealEstateReport),
    /// Error message for display.
    Error(String),
}

/// Clears the loading flag when the request finishes or its future is dropped.
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

pub struct AdvisorSession {
    requester: ReportRequester,
    loading: AtomicBool,
    outcome: Mutex<Option<Outcome>>,
}

impl AdvisorSession {
    pub fn new(requester: ReportRequester) -> Self {
        Self {
            requester,
            loading: AtomicBool::new(false),
            outcome: Mutex::new(None),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Last finished outcome; `None` before the first submission finishes or while loading.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.outcome
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_outcome(&self, outcome: Option<Outcome>) {
        *self.outcome.lock().unwrap_or_else(|e| e.into_inner()) = outcome;
    }

    /// Requests a report for `prefs`.
    ///
    /// Fails with [`AdvisorError::Busy`] without calling the model when another
    /// submission is still loading.
    pub async fn submit(&self, prefs: UserPreferences) -> Result<RealEstateReport, AdvisorError> {
        if self
            .loading
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AdvisorError::Busy);
        }
        let _guard = LoadingGuard(&self.loading);
        self.set_outcome(None);

        info!(
            location = %prefs.location,
            property_type = %prefs.property_type,
            payment_mode = %prefs.payment_mode,
            "requesting investment report"
        );
        let result = self.requester.generate_real_estate_advice(&prefs).await;
        match &result {
            Ok(report) => self.set_outcome(Some(Outcome::Report(report.clone()))),
            Err(e) => self.set_outcome(Some(Outcome::Error(e.to_string()))),
        }
        result
    }
}
