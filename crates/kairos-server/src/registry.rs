//! Handler registration.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use kairos_core::{AppError, Request, Response};

/// Boxed future returned by an erased handler.
pub type BoxedHandlerResult = Pin<Box<dyn Future<Output = Result<Response, AppError>> + Send>>;

/// A type-erased async handler.
pub type ErasedHandler = Arc<dyn Fn(Request) -> BoxedHandlerResult + Send + Sync>;

/// Maps operation ids to their handlers.
///
/// Handlers take the request envelope and return `Result<Response,
/// AppError>`; binding the body to a model is the handler's business, via
/// the model binder. Registration happens once at startup, before the
/// registry is handed to the dispatcher.
///
/// # Example
///
/// ```rust
/// use kairos_core::{AppError, Request, Response};
/// use kairos_server::HandlerRegistry;
///
/// async fn render_server_time(_req: Request) -> Result<Response, AppError> {
///     Ok(Response::html("2024-12-20 00:19:00"))
/// }
///
/// let mut registry = HandlerRegistry::new();
/// registry.register("renderServerTime", render_server_time);
/// assert!(registry.contains("renderServerTime"));
/// ```
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<String, ErasedHandler>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under an operation id.
    ///
    /// A second registration under the same id replaces the first.
    pub fn register<F, Fut>(&mut self, operation_id: impl Into<String>, handler: F)
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response, AppError>> + Send + 'static,
    {
        let erased: ErasedHandler = Arc::new(move |request| Box::pin(handler(request)));
        self.handlers.insert(operation_id.into(), erased);
    }

    /// Looks up the handler for an operation id.
    #[must_use]
    pub fn get(&self, operation_id: &str) -> Option<&ErasedHandler> {
        self.handlers.get(operation_id)
    }

    /// Returns true if an operation id has a handler.
    #[must_use]
    pub fn contains(&self, operation_id: &str) -> bool {
        self.handlers.contains_key(operation_id)
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("operations", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
