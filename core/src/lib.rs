//! Thin client for a remote time-series data API.
//!
//! # Overview
//! [`HttpEndpoint`] normalizes a host/scheme/port triple into a `/v2/` base
//! URL, carries the default headers and credentials, and forwards each HTTP
//! verb call to a [`Pool`] — the collaborator that owns connection reuse, TLS,
//! and wire-level HTTP. The production pool is [`UreqPool`] over a blocking
//! `ureq::Agent`.
//!
//! # Design
//! - The endpoint is request/response plumbing only: no retries, no caching,
//!   no status-code interpretation. 4xx/5xx responses come back as
//!   [`HttpResponse`] data.
//! - Per-call header overrides merge over the endpoint defaults; the endpoint
//!   itself is never mutated after construction.
//! - [`make_url_args`] serializes query parameters (repeated keys for lists,
//!   bracket-indexed sub-keys for maps, lowercase literal bools, omitted
//!   nones) into a string callers append to the request path.

pub mod auth;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod params;
pub mod pool;

pub use auth::Credentials;
pub use endpoint::{construct_url, merge_headers, HttpEndpoint, USER_AGENT};
pub use error::EndpointError;
pub use http::{Headers, HttpMethod, HttpResponse};
pub use params::{make_url_args, ParamValue};
pub use pool::{Pool, UreqPool};
