//! # Kairos
//!
//! A small HTTP service reporting the current time and date/time
//! differences across IANA timezones.
//!
//! This facade crate re-exports the workspace and wires the application:
//! [`app`] builds the route table, the handlers and the dispatcher the
//! `kairosd` binary serves.
//!
//! # Components
//!
//! - [`kairos_core`] - error taxonomy and request/response envelope
//! - [`kairos_router`] - ordered regex route table
//! - [`kairos_bind`] - declarative JSON model binder
//! - [`kairos_time`] - timezone domain and bindable models
//! - [`kairos_server`] - HTTP transport, dispatcher, lifecycle
//!
//! # Example
//!
//! ```rust,no_run
//! use kairos::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let dispatcher = kairos::app::build_dispatcher()?;
//!     let server = Server::new(ServerConfig::default(), dispatcher);
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/kairos/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;

pub use kairos_bind as bind;
pub use kairos_core as core;
pub use kairos_router as router;
pub use kairos_server as server;
pub use kairos_time as time;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use kairos_bind::{accessor, Bindable, Field, FieldKind};
    pub use kairos_core::{AppError, AppResult, Request, RequestId, Response};
    pub use kairos_router::{Params, RouteMatch, Router};
    pub use kairos_server::{
        Dispatcher, HandlerRegistry, Server, ServerConfig, ShutdownSignal,
    };
    pub use kairos_time::{DateModel, DatesDiffModel, TimezoneModel};
}
