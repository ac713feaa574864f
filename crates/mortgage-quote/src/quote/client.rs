use tracing::{debug, info};

use super::domain::{MortgageOption, QuoteRequest};
use crate::config::ApiConfig;

/// Message shown when a failure response carries nothing usable.
pub const FALLBACK_ERROR: &str = "An error occurred while calculating mortgage options";

/// Failure surfaced to the form as a single top-level message.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// The backend answered with a non-success status; the message was extracted
    /// from the response body.
    #[error("{0}")]
    Rejected(String),
    /// The request never completed or the success body could not be decoded.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl QuoteError {
    /// The one string the form displays. Transport failures carry no extractable
    /// message, so they collapse to the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            QuoteError::Rejected(message) => message.clone(),
            QuoteError::Transport(_) => FALLBACK_ERROR.to_string(),
        }
    }
}

/// Thin HTTP client for the rate-calculation backend.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl QuoteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one `POST {base_url}/mortgage/calculate` and decode the option list.
    ///
    /// No retry, no timeout, no cancellation: the caller owns the single-in-flight
    /// discipline.
    pub async fn calculate(&self, request: &QuoteRequest) -> Result<Vec<MortgageOption>, QuoteError> {
        let url = format!("{}/mortgage/calculate", self.base_url);
        debug!(%url, loan_value = request.loan_value, "requesting mortgage quotes");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();

        if status.is_success() {
            let options = response.json::<Vec<MortgageOption>>().await?;
            info!(count = options.len(), "received mortgage options");
            return Ok(options);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(%status, "quote request rejected");
        Err(QuoteError::Rejected(extract_error_message(&body)))
    }
}

/// Pull a displayable message out of a failure body.
///
/// The backend answers with either a JSON array of messages, a single JSON string,
/// or something unparseable; the first two are rendered, the rest collapse to the
/// generic fallback.
fn extract_error_message(body: &str) -> String {
    if let Ok(messages) = serde_json::from_str::<Vec<String>>(body) {
        if !messages.is_empty() {
            return messages.join(", ");
        }
    }
    if let Ok(message) = serde_json::from_str::<String>(body) {
        if !message.trim().is_empty() {
            return message;
        }
    }
    FALLBACK_ERROR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_message_arrays_with_commas() {
        assert_eq!(
            extract_error_message(r#"["bad state","bad score"]"#),
            "bad state, bad score"
        );
    }

    #[test]
    fn passes_single_string_bodies_through() {
        assert_eq!(
            extract_error_message(r#""Down payment cannot exceed property price""#),
            "Down payment cannot exceed property price"
        );
    }

    #[test]
    fn falls_back_on_unparseable_bodies() {
        assert_eq!(extract_error_message("<html>boom</html>"), FALLBACK_ERROR);
        assert_eq!(extract_error_message(""), FALLBACK_ERROR);
        assert_eq!(extract_error_message("[]"), FALLBACK_ERROR);
        assert_eq!(extract_error_message(r#"{"error":"nested"}"#), FALLBACK_ERROR);
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = QuoteClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }
}
