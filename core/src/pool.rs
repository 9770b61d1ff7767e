//! The HTTP pool contract and its production `ureq` implementation.
//!
//! # Design
//! The endpoint never performs I/O itself; it hands every request to a
//! [`Pool`]. The production pool wraps a `ureq::Agent`, which owns connection
//! reuse and TLS. Tests substitute a recording pool to observe exactly what
//! the endpoint forwards.

use crate::auth::Credentials;
use crate::error::EndpointError;
use crate::http::{Headers, HttpMethod, HttpResponse};

/// The collaborator that performs actual network I/O.
///
/// Each verb receives the fully joined URL, the request body (`data` is empty
/// for GET and DELETE), the merged headers, and the credentials. Calls block
/// until the response is read; non-2xx statuses are returned as data.
pub trait Pool {
    fn get(
        &self,
        url: &str,
        data: &str,
        headers: &Headers,
        auth: &Credentials,
    ) -> Result<HttpResponse, EndpointError>;

    fn post(
        &self,
        url: &str,
        data: &str,
        headers: &Headers,
        auth: &Credentials,
    ) -> Result<HttpResponse, EndpointError>;

    fn put(
        &self,
        url: &str,
        data: &str,
        headers: &Headers,
        auth: &Credentials,
    ) -> Result<HttpResponse, EndpointError>;

    fn delete(
        &self,
        url: &str,
        data: &str,
        headers: &Headers,
        auth: &Credentials,
    ) -> Result<HttpResponse, EndpointError>;
}

/// Blocking pool over a shared `ureq::Agent`. Cloning shares the agent and
/// its connection pool.
#[derive(Clone)]
pub struct UreqPool {
    agent: ureq::Agent,
}

impl UreqPool {
    /// Build an agent with status-code-as-error disabled so 4xx/5xx
    /// responses are returned as data rather than `Err`, leaving status
    /// interpretation to the caller.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    fn call(
        &self,
        method: HttpMethod,
        url: &str,
        data: &str,
        headers: &Headers,
        auth: &Credentials,
    ) -> Result<HttpResponse, EndpointError> {
        let result = match method {
            // ureq's GET/DELETE builders carry no body; the endpoint always
            // forwards an empty `data` for these verbs anyway.
            HttpMethod::Get | HttpMethod::Delete => {
                let mut req = match method {
                    HttpMethod::Get => self.agent.get(url),
                    _ => self.agent.delete(url),
                };
                for (name, value) in headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                req.header("Authorization", auth.basic_header()).call()
            }
            HttpMethod::Post | HttpMethod::Put => {
                let mut req = match method {
                    HttpMethod::Post => self.agent.post(url),
                    _ => self.agent.put(url),
                };
                for (name, value) in headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                req.header("Authorization", auth.basic_header())
                    .send(data.as_bytes())
            }
        };
        let mut response = result.map_err(|e| EndpointError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        log::debug!("{method} {url} -> {status}");
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| EndpointError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl Default for UreqPool {
    fn default() -> Self {
        Self::new()
    }
}

impl Pool for UreqPool {
    fn get(
        &self,
        url: &str,
        data: &str,
        headers: &Headers,
        auth: &Credentials,
    ) -> Result<HttpResponse, EndpointError> {
        self.call(HttpMethod::Get, url, data, headers, auth)
    }

    fn post(
        &self,
        url: &str,
        data: &str,
        headers: &Headers,
        auth: &Credentials,
    ) -> Result<HttpResponse, EndpointError> {
        self.call(HttpMethod::Post, url, data, headers, auth)
    }

    fn put(
        &self,
        url: &str,
        data: &str,
        headers: &Headers,
        auth: &Credentials,
    ) -> Result<HttpResponse, EndpointError> {
        self.call(HttpMethod::Put, url, data, headers, auth)
    }

    fn delete(
        &self,
        url: &str,
        data: &str,
        headers: &Headers,
        auth: &Credentials,
    ) -> Result<HttpResponse, EndpointError> {
        self.call(HttpMethod::Delete, url, data, headers, auth)
    }
}
