//! Request dispatch: the boundary where errors become responses.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use http::StatusCode;

use kairos_core::{Request, Response};
use kairos_router::Router;

use crate::registry::HandlerRegistry;

/// Routes a request and invokes its handler, converting every failure
/// mode into a response.
///
/// Failure handling:
///
/// - no route matches: fixed `not found` 404;
/// - route matches but no handler is registered: fixed `server error` 500,
///   escalated (the table and the registry disagree, a wiring bug);
/// - handler returns a structured error: rendered via
///   [`kairos_core::AppError::to_response`];
/// - handler returns an internal error or panics: fixed `server error`
///   500, AND the failure is logged at ERROR level with the request id.
///   The client gets an answer and the fault still reaches operations.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    router: Arc<Router>,
    handlers: Arc<HandlerRegistry>,
}

impl Dispatcher {
    /// Creates a dispatcher over a finished route table and registry.
    #[must_use]
    pub fn new(router: Router, handlers: HandlerRegistry) -> Self {
        Self {
            router: Arc::new(router),
            handlers: Arc::new(handlers),
        }
    }

    /// Returns the route table.
    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Dispatches one request to completion.
    ///
    /// Path parameters are installed on the request exactly once, after the
    /// match and before the handler runs.
    pub async fn dispatch(&self, mut request: Request) -> Response {
        let method = request.method().clone();
        let path = request.path().to_string();
        let request_id = request.id();

        let Some(route_match) = self.router.match_route(&method, &path) else {
            tracing::debug!(%request_id, %method, path, "no route matched");
            return Response::new("not found", StatusCode::NOT_FOUND);
        };

        let operation_id = route_match.operation_id().to_string();
        let Some(handler) = self.handlers.get(&operation_id) else {
            tracing::error!(%request_id, operation_id, "route matched but no handler registered");
            return Response::new("server error", StatusCode::INTERNAL_SERVER_ERROR);
        };

        request.set_params(route_match.into_params());

        match AssertUnwindSafe(handler(request)).catch_unwind().await {
            Ok(Ok(response)) => {
                tracing::debug!(%request_id, operation_id, status = %response.status(), "handled");
                response
            }
            Ok(Err(error)) if error.is_unexpected() => {
                tracing::error!(%request_id, operation_id, error = %error, "handler failed");
                Response::new("server error", StatusCode::INTERNAL_SERVER_ERROR)
            }
            Ok(Err(error)) => {
                tracing::debug!(%request_id, operation_id, error = %error, "request rejected");
                error.to_response()
            }
            Err(panic) => {
                tracing::error!(
                    %request_id,
                    operation_id,
                    panic = panic_message(panic.as_ref()),
                    "handler panicked"
                );
                Response::new("server error", StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}
