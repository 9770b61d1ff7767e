//! Plain-data HTTP types shared by the endpoint and the pool.
//!
//! # Design
//! Responses are described as plain data with owned fields (`String`, `Vec`)
//! so they can be constructed freely in tests and carried across the `Pool`
//! trait boundary without lifetime concerns. Status interpretation is left to
//! the caller: a 404 or 500 is still an `HttpResponse`, not an error.

use std::collections::HashMap;
use std::fmt;

/// Header mapping, name to value. Per-call overrides are merged into the
/// endpoint defaults with [`crate::endpoint::merge_headers`].
pub type Headers = HashMap<String, String>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

/// An HTTP response described as plain data.
///
/// Returned by [`crate::pool::Pool`] implementations. Success and failure
/// semantics of the status code are entirely the caller's concern.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
