use tracing::debug;

use super::client::QuoteClient;
use super::domain::{MortgageApplication, MortgageOption, QuoteRequest};
use super::validation::{validate, FieldErrors};

/// How a submission attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Backend answered; the option list was replaced.
    Quoted,
    /// Validation failed; the backend was never contacted.
    Invalid,
    /// Request was issued but failed; the option list was cleared and the
    /// top-level error set.
    Failed,
    /// A submission is already in flight; this attempt was refused.
    Pending,
}

/// Submission orchestrator owning the form state for one applicant.
///
/// All mutation goes through `&mut self`, so the only suspension point is the
/// network await inside [`submit`](Self::submit) and no locking is needed. There is
/// no cancellation: a response always lands in whatever state the session holds by
/// then.
#[derive(Debug, Default)]
pub struct QuoteSession {
    application: MortgageApplication,
    field_errors: FieldErrors,
    options: Vec<MortgageOption>,
    api_error: Option<String>,
    in_flight: bool,
}

impl QuoteSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_application(application: MortgageApplication) -> Self {
        Self {
            application,
            ..Self::default()
        }
    }

    pub fn application(&self) -> &MortgageApplication {
        &self.application
    }

    pub fn application_mut(&mut self) -> &mut MortgageApplication {
        &mut self.application
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn options(&self) -> &[MortgageOption] {
        &self.options
    }

    pub fn api_error(&self) -> Option<&str> {
        self.api_error.as_deref()
    }

    /// True while a request is outstanding; the submit control stays disabled for
    /// the whole window.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Validate and, when clean, issue exactly one request to the backend.
    pub async fn submit(&mut self, client: &QuoteClient) -> SubmitOutcome {
        if self.in_flight {
            debug!("submission refused, request already in flight");
            return SubmitOutcome::Pending;
        }

        self.api_error = None;
        self.field_errors = validate(&self.application);
        if !self.field_errors.is_empty() {
            return SubmitOutcome::Invalid;
        }

        let request = QuoteRequest::from_application(&self.application);
        self.in_flight = true;
        let result = client.calculate(&request).await;
        self.in_flight = false;

        match result {
            Ok(options) => {
                self.options = options;
                SubmitOutcome::Quoted
            }
            Err(error) => {
                self.options.clear();
                self.api_error = Some(error.user_message());
                SubmitOutcome::Failed
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn force_in_flight(&mut self, value: bool) {
        self.in_flight = value;
    }

    #[cfg(test)]
    pub(crate) fn seed_options(&mut self, options: Vec<MortgageOption>) {
        self.options = options;
    }
}
