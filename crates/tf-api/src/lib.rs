//! Typed REST clients for the Teamflow backend.
//!
//! One module per resource; every method maps 1:1 to an endpoint and
//! returns the server's response envelope.

mod client;
mod envelope;
mod error;
mod http;
pub mod resources;

pub use client::ApiClient;
pub use envelope::{ItemEnvelope, ListEnvelope};
pub use error::{ApiResult, ClientError};
pub use http::HttpClient;
