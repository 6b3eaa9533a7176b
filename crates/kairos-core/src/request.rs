//! Inbound request envelope.

use bytes::Bytes;
use http::{HeaderMap, Method};
use serde_json::Value;

use kairos_router::Params;

use crate::{AppError, RequestId};

/// Transport-decoupled view of an inbound HTTP request.
///
/// The server constructs one per connection request from the collected
/// hyper parts; tests construct them directly. Path parameters are absent
/// until the dispatcher installs the matcher's captures, which happens
/// exactly once per request, before the handler runs.
#[derive(Debug)]
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
    id: RequestId,
    params: Option<Params>,
}

impl Request {
    /// Creates a request with an empty body.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
            id: RequestId::new(),
            params: None,
        }
    }

    /// Creates a request from already-collected wire parts.
    #[must_use]
    pub fn from_parts(method: Method, path: impl Into<String>, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            method,
            path: path.into(),
            headers,
            body,
            id: RequestId::new(),
            params: None,
        }
    }

    /// Replaces the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the request headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the raw body bytes.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns the identifier assigned to this request.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        self.id
    }

    /// Installs the matcher's captured path parameters.
    ///
    /// Called by the dispatcher after a successful route match, before the
    /// handler is invoked.
    pub fn set_params(&mut self, params: Params) {
        self.params = Some(params);
    }

    /// Returns the named path parameter captured by the route pattern.
    ///
    /// Fails with a validation error when the matcher never ran or the
    /// pattern has no capture group with this name; a handler asking for a
    /// parameter its route does not capture is a wiring mistake surfaced to
    /// the client as a 400.
    pub fn path_param(&self, name: &str) -> Result<&str, AppError> {
        self.params
            .as_ref()
            .and_then(|params| params.get(name))
            .ok_or_else(|| AppError::validation("required path param not provided"))
    }

    /// Parses the body as JSON, best effort.
    ///
    /// An empty body, a payload that is not valid JSON, or the JSON string
    /// `""` all degrade to an empty object. Everything else is returned as
    /// parsed; deciding whether the shape is acceptable is the binder's job.
    #[must_use]
    pub fn body_json(&self) -> Value {
        if self.body.is_empty() {
            return Value::Object(serde_json::Map::new());
        }
        let parsed = match serde_json::from_slice::<Value>(&self.body) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(request_id = %self.id, error = %err, "invalid request json");
                return Value::Object(serde_json::Map::new());
            }
        };
        match parsed {
            Value::String(s) if s.is_empty() => Value::Object(serde_json::Map::new()),
            other => other,
        }
    }
}
