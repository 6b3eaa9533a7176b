//! # Kairos Core
//!
//! Core types for the Kairos time service:
//!
//! - [`AppError`] - The single structured error type carrying message + status
//! - [`Request`] - Transport-decoupled view of an inbound HTTP request
//! - [`Response`] - Immutable outbound response with named constructors
//! - [`RequestId`] - UUID v7 identifier for log correlation
//!
//! Handlers and models raise [`AppError`] near the point of detection and
//! never format HTTP responses themselves; the dispatch boundary is the only
//! place errors are rendered.

#![doc(html_root_url = "https://docs.rs/kairos-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod context;
mod error;
mod request;
mod response;

pub use context::RequestId;
pub use error::{AppError, AppResult};
pub use request::Request;
pub use response::Response;
