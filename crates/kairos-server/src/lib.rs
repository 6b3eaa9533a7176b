//! # Kairos Server
//!
//! HTTP transport and dispatch for the Kairos time service:
//!
//! - [`ServerConfig`] - builder-style server settings
//! - [`HandlerRegistry`] - operation id to async handler mapping
//! - [`Dispatcher`] - route match, handler invocation, error conversion
//! - [`Server`] - hyper/tokio accept loop with graceful shutdown
//!
//! The dispatcher is the boundary where structured errors become
//! responses. Unexpected failures (internal errors, panics) are answered
//! with a generic 500 and escalated to the log at ERROR level; they are
//! never swallowed and never leak their message to the client.

#![doc(html_root_url = "https://docs.rs/kairos-server/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod dispatch;
mod registry;
mod server;
pub mod shutdown;

pub use config::{ServerConfig, ServerConfigBuilder, DEFAULT_HTTP_ADDR};
pub use dispatch::Dispatcher;
pub use registry::HandlerRegistry;
pub use server::{Server, ServerError};
pub use shutdown::{ConnectionGuard, ConnectionSet, ShutdownSignal};
