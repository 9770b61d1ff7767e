//! API credentials.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// An opaque key/secret pair, passed through to the pool on every request.
///
/// The pool turns it into an HTTP basic `Authorization` header; the endpoint
/// itself never inspects it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    pub fn new(key: &str, secret: &str) -> Self {
        Self {
            key: key.to_string(),
            secret: secret.to_string(),
        }
    }

    /// The `Authorization` header value for HTTP basic auth.
    pub fn basic_header(&self) -> String {
        let raw = format!("{}:{}", self.key, self.secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

// The secret must not leak through debug logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}
