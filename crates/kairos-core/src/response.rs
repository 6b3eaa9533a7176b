//! Outbound response envelope.

use bytes::Bytes;
use http::{header, StatusCode};
use http_body_util::Full;
use serde_json::json;

/// Transport-decoupled outbound response.
///
/// Built once by a handler (or by the dispatch boundary for errors) and
/// converted to a wire response exactly once via [`Response::into_http`].
/// The content type defaults to `application/json`; [`Response::html`] is
/// the one constructor that overrides it.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

impl Response {
    /// Creates a response with the given body and status.
    #[must_use]
    pub fn new(body: impl Into<String>, status: StatusCode) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.into(),
        }
    }

    /// Creates a 200 response with the payload wrapped as `{"message": ...}`.
    #[must_use]
    pub fn json(message: &str) -> Self {
        Self::new(json!({ "message": message }).to_string(), StatusCode::OK)
    }

    /// Creates an error response rendering `{"reason": message}`.
    #[must_use]
    pub fn error(message: &str, status: StatusCode) -> Self {
        Self::new(json!({ "reason": message }).to_string(), status)
    }

    /// Creates a 200 text/html response with the payload wrapped in the
    /// fixed page skeleton.
    #[must_use]
    pub fn html(payload: &str) -> Self {
        let body = format!(
            "\n<html>\n    <head><title>Time Server</title></head>\n    \
             <body>\n        <div>{payload}</div>\n    </body>\n</html>\n"
        );
        Self {
            status: StatusCode::OK,
            content_type: "text/html",
            body,
        }
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the content type that will be sent.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// Returns the body as text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Converts the envelope into a wire response.
    ///
    /// This is the only place the envelope touches `http` response types;
    /// handlers never build wire responses themselves.
    #[must_use]
    pub fn into_http(self) -> http::Response<Full<Bytes>> {
        http::Response::builder()
            .status(self.status)
            .header(header::CONTENT_TYPE, self.content_type)
            .body(Full::new(Bytes::from(self.body)))
            .unwrap_or_else(|_| {
                http::Response::new(Full::new(Bytes::from_static(b"server error")))
            })
    }
}
