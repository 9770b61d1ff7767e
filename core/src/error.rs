//! Error types for the endpoint.
//!
//! # Design
//! There is deliberately no status-code taxonomy here: non-2xx responses are
//! returned as [`crate::HttpResponse`] data for the caller to interpret. The
//! only failures the endpoint itself can produce are a base URL or path that
//! does not parse, and a transport error surfaced by the pool.

use std::fmt;

/// Errors returned by [`crate::HttpEndpoint`] and [`crate::Pool`]
/// implementations.
#[derive(Debug)]
pub enum EndpointError {
    /// The base URL or a joined request path could not be parsed.
    InvalidUrl(String),

    /// The underlying pool failed to complete the HTTP round-trip.
    Transport(String),
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointError::InvalidUrl(msg) => write!(f, "invalid URL: {msg}"),
            EndpointError::Transport(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

impl std::error::Error for EndpointError {}
