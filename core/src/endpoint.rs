//! The HTTP endpoint wrapping one remote time-series API.
//!
//! # Design
//! `HttpEndpoint` holds the normalized base URL, the default header map, and
//! the credential pair, and forwards every verb call to its [`Pool`]. It is
//! immutable after construction: per-call header overrides produce a merged
//! copy, never a mutation. The pool is a type parameter (defaulting to the
//! production [`UreqPool`]) so tests can observe exactly what gets forwarded.

use url::Url;

use crate::auth::Credentials;
use crate::error::EndpointError;
use crate::http::{Headers, HttpMethod, HttpResponse};
use crate::pool::{Pool, UreqPool};

/// `User-Agent` value sent with every request unless overridden per call.
pub const USER_AGENT: &str = concat!("seriesdb-rust/", env!("CARGO_PKG_VERSION"));

/// Normalize a host/scheme/port triple into a base URL.
///
/// Strips any trailing slash, prefixes `https://` (or `http://` when `secure`
/// is false) unless the host already carries an explicit scheme, then appends
/// the port when given. The result never ends in `/` and has exactly one
/// scheme prefix.
pub fn construct_url(host: &str, secure: bool, port: Option<u16>) -> String {
    let host = host.trim_end_matches('/');
    let mut url = if host.contains("://") {
        host.to_string()
    } else if secure {
        format!("https://{host}")
    } else {
        format!("http://{host}")
    };
    if let Some(port) = port {
        url.push_str(&format!(":{port}"));
    }
    url
}

/// Merge per-call headers over endpoint defaults.
///
/// Overrides win on key collision; non-colliding keys from both sides are
/// present in the result.
pub fn merge_headers(defaults: &Headers, overrides: &Headers) -> Headers {
    let mut merged = defaults.clone();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

fn default_headers() -> Headers {
    Headers::from([
        ("User-Agent".to_string(), USER_AGENT.to_string()),
        ("Accept-Encoding".to_string(), "gzip".to_string()),
    ])
}

/// Client-side endpoint for one remote API: base URL, default headers, and
/// credentials. All four verbs block until the pool returns; non-2xx statuses
/// come back as [`HttpResponse`] data.
#[derive(Debug, Clone)]
pub struct HttpEndpoint<P: Pool = UreqPool> {
    base_url: Url,
    headers: Headers,
    auth: Credentials,
    pool: P,
}

impl HttpEndpoint<UreqPool> {
    /// Endpoint over HTTPS on the default port, backed by a fresh ureq agent.
    pub fn new(host: &str, key: &str, secret: &str) -> Result<Self, EndpointError> {
        Self::with_options(host, true, None, key, secret)
    }

    pub fn with_options(
        host: &str,
        secure: bool,
        port: Option<u16>,
        key: &str,
        secret: &str,
    ) -> Result<Self, EndpointError> {
        Self::with_pool(host, secure, port, key, secret, UreqPool::new())
    }
}

impl<P: Pool> HttpEndpoint<P> {
    pub fn with_pool(
        host: &str,
        secure: bool,
        port: Option<u16>,
        key: &str,
        secret: &str,
        pool: P,
    ) -> Result<Self, EndpointError> {
        let base = format!("{}/v2/", construct_url(host, secure, port));
        let base_url =
            Url::parse(&base).map_err(|e| EndpointError::InvalidUrl(format!("{base}: {e}")))?;
        Ok(Self {
            base_url,
            headers: default_headers(),
            auth: Credentials::new(key, secret),
            pool,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn get(&self, path: &str, headers: Option<&Headers>) -> Result<HttpResponse, EndpointError> {
        self.dispatch(HttpMethod::Get, path, "", headers)
    }

    pub fn post(
        &self,
        path: &str,
        body: &str,
        headers: Option<&Headers>,
    ) -> Result<HttpResponse, EndpointError> {
        self.dispatch(HttpMethod::Post, path, body, headers)
    }

    pub fn put(
        &self,
        path: &str,
        body: &str,
        headers: Option<&Headers>,
    ) -> Result<HttpResponse, EndpointError> {
        self.dispatch(HttpMethod::Put, path, body, headers)
    }

    pub fn delete(
        &self,
        path: &str,
        headers: Option<&Headers>,
    ) -> Result<HttpResponse, EndpointError> {
        self.dispatch(HttpMethod::Delete, path, "", headers)
    }

    fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        data: &str,
        overrides: Option<&Headers>,
    ) -> Result<HttpResponse, EndpointError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| EndpointError::InvalidUrl(format!("{path}: {e}")))?;
        let headers = match overrides {
            Some(extra) => merge_headers(&self.headers, extra),
            None => self.headers.clone(),
        };
        log::debug!("{method} {url}");
        match method {
            HttpMethod::Get => self.pool.get(url.as_str(), data, &headers, &self.auth),
            HttpMethod::Post => self.pool.post(url.as_str(), data, &headers, &self.auth),
            HttpMethod::Put => self.pool.put(url.as_str(), data, &headers, &self.auth),
            HttpMethod::Delete => self.pool.delete(url.as_str(), data, &headers, &self.auth),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Recorded {
        method: HttpMethod,
        url: String,
        data: String,
        headers: Headers,
        auth: Credentials,
    }

    #[derive(Debug, Default)]
    struct RecordingPool {
        calls: RefCell<Vec<Recorded>>,
    }

    impl RecordingPool {
        fn record(
            &self,
            method: HttpMethod,
            url: &str,
            data: &str,
            headers: &Headers,
            auth: &Credentials,
        ) -> Result<HttpResponse, EndpointError> {
            self.calls.borrow_mut().push(Recorded {
                method,
                url: url.to_string(),
                data: data.to_string(),
                headers: headers.clone(),
                auth: auth.clone(),
            });
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: String::new(),
            })
        }

        fn single_call(&self) -> Recorded {
            let calls = self.calls.borrow();
            assert_eq!(calls.len(), 1, "expected exactly one pool call");
            calls[0].clone()
        }
    }

    impl Pool for Rc<RecordingPool> {
        fn get(
            &self,
            url: &str,
            data: &str,
            headers: &Headers,
            auth: &Credentials,
        ) -> Result<HttpResponse, EndpointError> {
            self.record(HttpMethod::Get, url, data, headers, auth)
        }

        fn post(
            &self,
            url: &str,
            data: &str,
            headers: &Headers,
            auth: &Credentials,
        ) -> Result<HttpResponse, EndpointError> {
            self.record(HttpMethod::Post, url, data, headers, auth)
        }

        fn put(
            &self,
            url: &str,
            data: &str,
            headers: &Headers,
            auth: &Credentials,
        ) -> Result<HttpResponse, EndpointError> {
            self.record(HttpMethod::Put, url, data, headers, auth)
        }

        fn delete(
            &self,
            url: &str,
            data: &str,
            headers: &Headers,
            auth: &Credentials,
        ) -> Result<HttpResponse, EndpointError> {
            self.record(HttpMethod::Delete, url, data, headers, auth)
        }
    }

    fn endpoint(pool: &Rc<RecordingPool>) -> HttpEndpoint<Rc<RecordingPool>> {
        HttpEndpoint::with_pool("www.nothing.com", true, None, "foo", "bar", Rc::clone(pool))
            .unwrap()
    }

    #[test]
    fn construct_url_with_port() {
        assert_eq!(
            construct_url("www.example.com", false, Some(8080)),
            "http://www.example.com:8080"
        );
    }

    #[test]
    fn construct_url_strips_trailing_slash() {
        assert_eq!(
            construct_url("http://www.example.com/", true, None),
            "http://www.example.com"
        );
    }

    #[test]
    fn construct_url_trailing_slash_and_port() {
        assert_eq!(
            construct_url("example.com/", true, Some(8080)),
            "https://example.com:8080"
        );
    }

    #[test]
    fn construct_url_defaults_to_https() {
        assert_eq!(construct_url("example.com", true, None), "https://example.com");
    }

    #[test]
    fn constructor_builds_v2_base_url() {
        let pool = Rc::new(RecordingPool::default());
        let end = endpoint(&pool);
        assert_eq!(end.base_url(), "https://www.nothing.com/v2/");
        assert_eq!(end.headers()["User-Agent"], USER_AGENT);
        assert_eq!(end.headers()["Accept-Encoding"], "gzip");
    }

    #[test]
    fn constructor_keeps_explicit_scheme() {
        let pool = Rc::new(RecordingPool::default());
        let end = HttpEndpoint::with_pool(
            "http://www.nothing.com",
            true,
            None,
            "foo",
            "bar",
            Rc::clone(&pool),
        )
        .unwrap();
        assert_eq!(end.base_url(), "http://www.nothing.com/v2/");
    }

    #[test]
    fn constructor_rejects_unparseable_host() {
        let pool = Rc::new(RecordingPool::default());
        let err = HttpEndpoint::with_pool("://", true, None, "foo", "bar", Rc::clone(&pool))
            .unwrap_err();
        assert!(matches!(err, EndpointError::InvalidUrl(_)));
    }

    #[test]
    fn merge_headers_overrides_on_collision() {
        let defaults = Headers::from([
            ("User-Agent".to_string(), "default".to_string()),
            ("Accept-Encoding".to_string(), "gzip".to_string()),
        ]);
        let overrides = Headers::from([("User-Agent".to_string(), "custom".to_string())]);
        let merged = merge_headers(&defaults, &overrides);
        assert_eq!(merged["User-Agent"], "custom");
        assert_eq!(merged["Accept-Encoding"], "gzip");
    }

    #[test]
    fn merge_headers_keeps_both_sides() {
        let defaults = Headers::from([("a".to_string(), "1".to_string())]);
        let overrides = Headers::from([("b".to_string(), "2".to_string())]);
        let merged = merge_headers(&defaults, &overrides);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged["a"], "1");
        assert_eq!(merged["b"], "2");
    }

    #[test]
    fn get_forwards_to_pool() {
        let pool = Rc::new(RecordingPool::default());
        let end = endpoint(&pool);
        end.get("series/", None).unwrap();

        let call = pool.single_call();
        assert_eq!(call.method, HttpMethod::Get);
        assert_eq!(call.url, "https://www.nothing.com/v2/series/");
        assert_eq!(call.data, "");
        assert_eq!(&call.headers, end.headers());
        assert_eq!(call.auth, Credentials::new("foo", "bar"));
    }

    #[test]
    fn post_forwards_body() {
        let pool = Rc::new(RecordingPool::default());
        let end = endpoint(&pool);
        end.post("series/", "foobar", None).unwrap();

        let call = pool.single_call();
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.url, "https://www.nothing.com/v2/series/");
        assert_eq!(call.data, "foobar");
        assert_eq!(&call.headers, end.headers());
    }

    #[test]
    fn put_forwards_body() {
        let pool = Rc::new(RecordingPool::default());
        let end = endpoint(&pool);
        end.put("series/", "foobar", None).unwrap();

        let call = pool.single_call();
        assert_eq!(call.method, HttpMethod::Put);
        assert_eq!(call.data, "foobar");
    }

    #[test]
    fn delete_forwards_empty_body() {
        let pool = Rc::new(RecordingPool::default());
        let end = endpoint(&pool);
        end.delete("series/", None).unwrap();

        let call = pool.single_call();
        assert_eq!(call.method, HttpMethod::Delete);
        assert_eq!(call.url, "https://www.nothing.com/v2/series/");
        assert_eq!(call.data, "");
    }

    #[test]
    fn per_call_headers_merge_over_defaults() {
        let pool = Rc::new(RecordingPool::default());
        let end = endpoint(&pool);
        let extra = Headers::from([("foo".to_string(), "bar".to_string())]);
        end.get("series/", Some(&extra)).unwrap();

        let call = pool.single_call();
        assert_eq!(call.headers, merge_headers(end.headers(), &extra));
        assert_eq!(call.headers["foo"], "bar");
        assert_eq!(call.headers["User-Agent"], USER_AGENT);
        // the endpoint's own defaults are untouched
        assert!(!end.headers().contains_key("foo"));
    }

    #[test]
    fn path_with_query_joins_against_base() {
        let pool = Rc::new(RecordingPool::default());
        let end = endpoint(&pool);
        end.get("series/?key=value", None).unwrap();

        let call = pool.single_call();
        assert_eq!(call.url, "https://www.nothing.com/v2/series/?key=value");
    }
}
