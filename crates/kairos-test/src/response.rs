//! Captured response with assertion helpers.

use http::StatusCode;
use serde::de::DeserializeOwned;

use kairos_core::Response;

/// A dispatched response, captured for assertions.
#[derive(Debug, Clone)]
pub struct TestResponse {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

impl TestResponse {
    /// Captures a response envelope.
    #[must_use]
    pub fn from_response(response: &Response) -> Self {
        Self {
            status: response.status(),
            content_type: response.content_type(),
            body: response.body().to_string(),
        }
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the status code as a number.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the content type the transport would send.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Returns the body as text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Returns the `message` field of a JSON success body, if present.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.json_field("message")
    }

    /// Returns the `reason` field of a JSON error body, if present.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.json_field("reason")
    }

    fn json_field(&self, name: &str) -> Option<String> {
        let value: serde_json::Value = self.json().ok()?;
        value.get(name)?.as_str().map(ToString::to_string)
    }
}
