//! # Kairos Test
//!
//! In-memory test client. Drives a [`kairos_server::Dispatcher`] directly,
//! so the whole route-match/bind/handle/error-render pipeline is exercised
//! without binding a socket.
//!
//! # Example
//!
//! ```rust,ignore
//! use kairos_test::TestClient;
//!
//! let client = TestClient::new(dispatcher);
//! let response = client.get("/UTC").await;
//! assert_eq!(response.status_code(), 200);
//! ```

#![doc(html_root_url = "https://docs.rs/kairos-test/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod response;

pub use client::TestClient;
pub use response::TestResponse;
