//! # Kairos Router
//!
//! Ordered route table for the Kairos time service. Routes are regular
//! expressions with named capture groups, registered once at startup and
//! scanned in registration order; the first route whose method and anchored
//! pattern both match wins. Registration order is therefore the
//! disambiguation rule for overlapping patterns (`/UTC` vs
//! `/Europe/Moscow`), so tables are written most-specific-first.
//!
//! Patterns are anchored by the router itself: a registered pattern can
//! never prefix-match a longer path.

#![doc(html_root_url = "https://docs.rs/kairos-router/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod params;
mod router;

pub use params::Params;
pub use router::{PatternError, RouteMatch, Router};
