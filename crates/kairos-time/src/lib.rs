//! # Kairos Time
//!
//! The domain layer of the time service: IANA zone resolution, fixed-format
//! date parsing, display formatting, and the three bindable request models
//! ([`TimezoneModel`], [`DateModel`], [`DatesDiffModel`]).
//!
//! Everything here raises [`kairos_core::AppError`] near the point of
//! detection; nothing formats HTTP responses.

#![doc(html_root_url = "https://docs.rs/kairos-time/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod models;
mod zone;

pub use clock::{format_display, format_duration, parse_date_input, DISPLAY_FORMAT};
pub use models::{DateModel, DatesDiffModel, TimezoneModel};
pub use zone::resolve_zone;
