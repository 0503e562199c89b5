//! `reqwest` backend for the Graph API client.
//!
//! [`ReqwestTransport`] implements [`fbgraph_core::transport::Transport`]
//! over a shared [`reqwest::Client`], attaching the access token as a bearer
//! credential on every request.

mod transport;

pub use transport::{DEFAULT_TIMEOUT_SECS, ReqwestTransport, TransportConfig};

#[cfg(test)]
mod tests;
