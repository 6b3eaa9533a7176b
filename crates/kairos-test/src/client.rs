//! The in-memory client.

use bytes::Bytes;
use http::Method;

use kairos_core::Request;
use kairos_server::Dispatcher;

use crate::response::TestResponse;

/// Drives a dispatcher with synthetic requests.
///
/// Requests go through exactly the path production traffic takes past the
/// transport layer: envelope construction, route matching, parameter
/// installation, handler invocation and error rendering.
#[must_use]
pub struct TestClient {
    dispatcher: Dispatcher,
}

impl TestClient {
    /// Creates a client over a finished dispatcher.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Sends a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Method::GET, path, Bytes::new()).await
    }

    /// Sends a POST request with a raw body.
    pub async fn post(&self, path: &str, body: impl Into<Bytes>) -> TestResponse {
        self.send(Method::POST, path, body.into()).await
    }

    /// Sends a POST request with a JSON body.
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> TestResponse {
        self.send(Method::POST, path, Bytes::from(body.to_string()))
            .await
    }

    /// Sends a request with an arbitrary method and body.
    pub async fn send(&self, method: Method, path: &str, body: Bytes) -> TestResponse {
        let request = Request::new(method, path).with_body(body);
        let response = self.dispatcher.dispatch(request).await;
        TestResponse::from_response(&response)
    }
}

#[cfg(test)]
mod tests {
    use kairos_core::{AppError, Response};
    use kairos_router::Router;
    use kairos_server::HandlerRegistry;

    use super::*;

    fn client() -> TestClient {
        let mut router = Router::new();
        router.add_route(Method::GET, r"/ping", "ping").unwrap();
        router.add_route(Method::POST, r"/echo", "echo").unwrap();

        let mut handlers = HandlerRegistry::new();
        handlers.register("ping", |_req| async {
            Ok::<_, AppError>(Response::json("pong"))
        });
        handlers.register("echo", |req: Request| async move {
            let body = req.body_json();
            Ok(Response::new(body.to_string(), http::StatusCode::OK))
        });

        TestClient::new(Dispatcher::new(router, handlers))
    }

    #[tokio::test]
    async fn get_goes_through_the_dispatcher() {
        let response = client().get("/ping").await;
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.text(), r#"{"message":"pong"}"#);
    }

    #[tokio::test]
    async fn post_json_carries_the_body() {
        let response = client()
            .post_json("/echo", &serde_json::json!({"tz": "UTC"}))
            .await;
        assert_eq!(response.status_code(), 200);
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value, serde_json::json!({"tz": "UTC"}));
    }

    #[tokio::test]
    async fn unrouted_requests_get_the_fixed_404() {
        let response = client().get("/nope/nope").await;
        assert_eq!(response.status_code(), 404);
        assert_eq!(response.text(), "not found");
    }
}
