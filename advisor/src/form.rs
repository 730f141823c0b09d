//! Preference form: transient field state plus the submit guard.
//!
//! The form never talks to the network. On submit it hands the assembled
//! [`UserPreferences`] to a caller-supplied handler, and only when budget and
//! location are filled in.

use crate::error::AdvisorError;
use crate::preferences::{InvestmentHorizon, PaymentMode, PropertyType, UserPreferences};

/// Field state for one preference form.
///
/// Defaults: empty budget and location, `Residential`, `Medium Term (3-5 years)`, `Cash`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreferenceForm {
    budget: String,
    location: String,
    property_type: PropertyType,
    horizon: InvestmentHorizon,
    payment_mode: PaymentMode,
}

impl PreferenceForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn budget(&self) -> &str {
        &self.budget
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    pub fn horizon(&self) -> InvestmentHorizon {
        self.horizon
    }

    pub fn payment_mode(&self) -> PaymentMode {
        self.payment_mode
    }

    pub fn set_budget(&mut self, budget: impl Into<String>) {
        self.budget = budget.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_property_type(&mut self, property_type: PropertyType) {
        self.property_type = property_type;
    }

    pub fn set_horizon(&mut self, horizon: InvestmentHorizon) {
        self.horizon = horizon;
    }

    pub fn set_payment_mode(&mut self, payment_mode: PaymentMode) {
        self.payment_mode = payment_mode;
    }

    /// Set budget (builder).
    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.set_budget(budget);
        self
    }

    /// Set location (builder).
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.set_location(location);
        self
    }

    /// Set property type (builder).
    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = property_type;
        self
    }

    /// Set investment horizon (builder).
    pub fn with_horizon(mut self, horizon: InvestmentHorizon) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set payment mode (builder).
    pub fn with_payment_mode(mut self, payment_mode: PaymentMode) -> Self {
        self.payment_mode = payment_mode;
        self
    }

    /// Names of required fields that are still empty (whitespace counts as empty).
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.budget.trim().is_empty() {
            missing.push("budget");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        missing
    }

    /// True when budget and location are both non-empty.
    pub fn is_submittable(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Assembled record with trimmed budget and location, or `None` when incomplete.
    pub fn preferences(&self) -> Option<UserPreferences> {
        if !self.is_submittable() {
            return None;
        }
        Some(UserPreferences {
            budget: self.budget.trim().to_string(),
            location: self.location.trim().to_string(),
            property_type: self.property_type,
            duration: self.horizon,
            payment_mode: self.payment_mode,
        })
    }

    /// Like [`preferences`](Self::preferences) but reports which fields are missing.
    pub fn try_preferences(&self) -> Result<UserPreferences, AdvisorError> {
        self.preferences()
            .ok_or_else(|| AdvisorError::IncompleteForm(self.missing_fields()))
    }

    /// Submit guard: calls `on_submit` once with the record when the form is complete.
    ///
    /// Returns `None` without calling the handler when budget or location is empty.
    pub fn submit<F, R>(&self, on_submit: F) -> Option<R>
    where
        F: FnOnce(UserPreferences) -> R,
    {
        self.preferences().map(on_submit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_initial_form_state() {
        let form = PreferenceForm::new();
        assert_eq!(form.budget(), "");
        assert_eq!(form.location(), "");
        assert_eq!(form.property_type(), PropertyType::Residential);
        assert_eq!(form.horizon(), InvestmentHorizon::MediumTerm);
        assert_eq!(form.payment_mode(), PaymentMode::Cash);
    }

    #[test]
    fn submit_without_budget_does_not_call_handler() {
        let form = PreferenceForm::new().with_location("Bahria Town Karachi");
        let mut called = false;
        let out = form.submit(|_| called = true);
        assert!(out.is_none());
        assert!(!called);
        assert_eq!(form.missing_fields(), vec!["budget"]);
    }

    #[test]
    fn whitespace_only_location_is_missing() {
        let form = PreferenceForm::new().with_budget("50 Lac").with_location("   ");
        assert!(!form.is_submittable());
        assert_eq!(form.missing_fields(), vec!["location"]);
    }

    #[test]
    fn submit_passes_assembled_record_once() {
        let form = PreferenceForm::new()
            .with_budget("  2 Crore ")
            .with_location("DHA Lahore")
            .with_property_type(PropertyType::Plot)
            .with_horizon(InvestmentHorizon::LongTerm)
            .with_payment_mode(PaymentMode::Installments);

        let mut calls = 0;
        let prefs = form
            .submit(|p| {
                calls += 1;
                p
            })
            .expect("form is complete");
        assert_eq!(calls, 1);
        assert_eq!(prefs.budget, "2 Crore");
        assert_eq!(prefs.location, "DHA Lahore");
        assert_eq!(prefs.property_type, PropertyType::Plot);
        assert_eq!(prefs.duration, InvestmentHorizon::LongTerm);
        assert_eq!(prefs.payment_mode, PaymentMode::Installments);
    }

    #[test]
    fn try_preferences_reports_both_missing_fields() {
        let err = PreferenceForm::new().try_preferences().unwrap_err();
        match err {
            AdvisorError::IncompleteForm(fields) => assert_eq!(fields, vec!["budget", "location"]),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn setters_update_fields() {
        let mut form = PreferenceForm::new();
        form.set_budget("1 Crore");
        form.set_location("Gulberg");
        form.set_property_type(PropertyType::Commercial);
        form.set_horizon(InvestmentHorizon::ShortTerm);
        form.set_payment_mode(PaymentMode::Installments);
        let prefs = form.preferences().unwrap();
        assert_eq!(prefs.property_type, PropertyType::Commercial);
        assert_eq!(prefs.duration, InvestmentHorizon::ShortTerm);
    }
}
