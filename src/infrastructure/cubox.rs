// src/infrastructure/cubox.rs
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{debug, instrument, warn};

use crate::application::MemoGateway;
use crate::constants::{CUBOX_BASE_URL, SAVE_PATH, UNKNOWN_ERROR};
use crate::domain::memo::CuboxResponse;
use crate::domain::{SaveMemoError, SaveMemoOutcome, SaveMemoRequest};
use crate::util::text::redact_last_segment;

/// [`MemoGateway`] backed by the Cubox HTTP API
#[derive(Debug, Clone)]
pub struct CuboxClient {
    http: Client,
    base_url: String,
}

impl CuboxClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(CUBOX_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn save_url(&self, api_key: &str) -> String {
        format!("{}{}/{}", self.base_url, SAVE_PATH, api_key)
    }

    fn send(&self, api_key: &str, request: &SaveMemoRequest) -> Result<(), SaveMemoError> {
        let url = self.save_url(api_key);
        debug!(url = %redact_last_segment(&url), "POST save request");

        // without_url keeps the API key out of error texts
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| SaveMemoError::Transport(e.without_url().to_string()))?;

        let body = response
            .text()
            .map_err(|e| SaveMemoError::Transport(e.without_url().to_string()))?;
        interpret_response(&body)
    }
}

/// Map a response body to success or the remote's complaint
pub fn interpret_response(body: &str) -> Result<(), SaveMemoError> {
    let response: CuboxResponse = serde_json::from_str(body)
        .map_err(|e| SaveMemoError::MalformedResponse(e.to_string()))?;

    if response.is_success() {
        return Ok(());
    }

    debug!(code = ?response.code, "Remote rejected save");
    let message = response
        .message_text()
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
    Err(SaveMemoError::Rejected(message))
}

impl MemoGateway for CuboxClient {
    #[instrument(level = "debug", skip_all, fields(title = %request.title))]
    fn save_memo(&self, api_key: &str, request: &SaveMemoRequest) -> SaveMemoOutcome {
        match self.send(api_key, request) {
            Ok(()) => SaveMemoOutcome::succeeded(),
            Err(e) => {
                warn!(error = %e, "Save call failed");
                SaveMemoOutcome::failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_client_when_building_url_then_targets_cubox() {
        let client = CuboxClient::new().unwrap();

        assert_eq!(client.save_url("abc"), "https://cubox.pro/c/api/save/abc");
    }

    #[test]
    fn given_base_url_with_trailing_slash_when_building_url_then_has_single_slash() {
        let client = CuboxClient::with_base_url("http://localhost:9/").unwrap();

        assert_eq!(client.save_url("k"), "http://localhost:9/c/api/save/k");
    }

    #[test]
    fn given_code_200_when_interpreting_then_succeeds() {
        assert_eq!(interpret_response(r#"{"code":200,"message":""}"#), Ok(()));
    }

    #[test]
    fn given_float_code_200_when_interpreting_then_succeeds() {
        assert_eq!(interpret_response(r#"{"code":200.0}"#), Ok(()));
    }

    #[test]
    fn given_numeric_message_when_interpreting_then_rejects_with_rendered_message() {
        assert_eq!(
            interpret_response(r#"{"code":400,"message":42}"#),
            Err(SaveMemoError::Rejected("42".to_string()))
        );
    }

    #[test]
    fn given_other_code_with_message_when_interpreting_then_rejects_with_message() {
        assert_eq!(
            interpret_response(r#"{"code":400,"message":"x"}"#),
            Err(SaveMemoError::Rejected("x".to_string()))
        );
    }

    #[test]
    fn given_other_code_without_message_when_interpreting_then_reports_unknown_error() {
        assert_eq!(
            interpret_response(r#"{"code":-1}"#),
            Err(SaveMemoError::Rejected("Unknown error".to_string()))
        );
        assert_eq!(
            interpret_response(r#"{"code":500,"message":""}"#),
            Err(SaveMemoError::Rejected("Unknown error".to_string()))
        );
    }

    #[test]
    fn given_missing_code_when_interpreting_then_rejects() {
        assert!(matches!(
            interpret_response(r#"{"message":"odd"}"#),
            Err(SaveMemoError::Rejected(m)) if m == "odd"
        ));
    }

    #[test]
    fn given_non_json_body_when_interpreting_then_reports_malformed_response() {
        let err = interpret_response("<html>").unwrap_err();

        assert!(matches!(err, SaveMemoError::MalformedResponse(_)));
        assert!(err.to_string().starts_with("Malformed response: "));
    }
}
