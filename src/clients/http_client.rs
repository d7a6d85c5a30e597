//! HTTP transport for CourtListener API communication.
//!
//! This module provides the [`HttpClient`] type, a thin wrapper over a pooled
//! `reqwest::Client`. Connection pooling, TLS, redirects and JSON decoding
//! all come from reqwest and serde; this type only configures them.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

use crate::clients::errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MalformedResponseError,
};
use crate::clients::http_request::PreparedRequest;
use crate::clients::http_response::HttpResponse;

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the CourtListener API.
///
/// The client handles:
/// - Default headers (`User-Agent`, `Accept: application/json`)
/// - A default per-call timeout, overridable per request
/// - Status checking and JSON decoding of response bodies
///
/// Cloning is cheap and shares the underlying connection pool. The pool is
/// released when the last clone is dropped.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Timeout applied when a request does not carry its own.
    timeout: Duration,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Default per-call timeout (see [`DEFAULT_TIMEOUT`])
    /// * `user_agent_prefix` - Optional prefix for the `User-Agent` header
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(timeout: Duration, user_agent_prefix: Option<&str>) -> Result<Self, HttpError> {
        let user_agent_prefix =
            user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}titanium-white v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            default_headers,
            timeout,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the default per-call timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds a [`PreparedRequest`] for a GET of `url`.
    ///
    /// Request headers are layered over the client's default headers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidHeader`] if a header name or
    /// value is not valid HTTP.
    pub fn prepare(
        &self,
        url: Url,
        headers: Option<HashMap<String, String>>,
        timeout: Option<Duration>,
    ) -> Result<PreparedRequest, InvalidHttpRequestError> {
        let mut merged = self.default_headers.clone();
        for (key, value) in headers.unwrap_or_default() {
            // Replace any default that differs only in case
            merged.retain(|existing, _| !existing.eq_ignore_ascii_case(&key));
            merged.insert(key, value);
        }

        for (key, value) in &merged {
            if HeaderName::from_bytes(key.as_bytes()).is_err()
                || HeaderValue::from_str(value).is_err()
            {
                return Err(InvalidHttpRequestError::InvalidHeader { name: key.clone() });
            }
        }

        Ok(PreparedRequest {
            method: "GET",
            url,
            headers: merged,
            timeout: timeout.unwrap_or(self.timeout),
        })
    }

    /// Sends a prepared GET request and decodes the JSON body.
    ///
    /// An empty body decodes to `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Network error occurs or the call times out (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - The body is not valid JSON (`MalformedResponse`)
    pub async fn send(&self, prepared: &PreparedRequest) -> Result<HttpResponse, HttpError> {
        tracing::debug!(url = %prepared.url, "Sending CourtListener request");

        let mut req_builder = self
            .client
            .get(prepared.url.clone())
            .timeout(prepared.timeout);
        for (key, value) in &prepared.headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let url = res.url().clone();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        if !(200..=299).contains(&code) {
            tracing::warn!(status = code, %url, "CourtListener request failed");
            return Err(HttpError::Response(HttpResponseError {
                code,
                url: url.to_string(),
                message: body_text,
            }));
        }

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).map_err(|e| {
                tracing::error!(%url, error = %e, "Unable to decode CourtListener response as JSON");
                MalformedResponseError {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            })?
        };

        Ok(HttpResponse::new(code, url, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpClient {
        HttpClient::new(DEFAULT_TIMEOUT, None).unwrap()
    }

    fn url() -> Url {
        Url::parse("https://www.courtlistener.com/api/rest/v3/people/").unwrap()
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = client();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("titanium-white v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = HttpClient::new(DEFAULT_TIMEOUT, Some("MyApp/1.0")).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        assert_eq!(
            client().default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_default_timeout_is_five_seconds() {
        assert_eq!(client().timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_prepare_layers_request_headers_over_defaults() {
        let headers = HashMap::from([
            ("accept".to_string(), "text/plain".to_string()),
            ("X-Trace".to_string(), "1".to_string()),
        ]);
        let prepared = client().prepare(url(), Some(headers), None).unwrap();

        assert_eq!(prepared.method, "GET");
        assert_eq!(prepared.header("Accept"), Some("text/plain"));
        assert_eq!(prepared.header("x-trace"), Some("1"));
        assert!(prepared.header("User-Agent").is_some());
        assert_eq!(prepared.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_prepare_uses_per_call_timeout() {
        let prepared = client()
            .prepare(url(), None, Some(Duration::from_millis(250)))
            .unwrap();
        assert_eq!(prepared.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_prepare_rejects_invalid_header() {
        let headers = HashMap::from([("bad header".to_string(), "x".to_string())]);
        let result = client().prepare(url(), Some(headers), None);
        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidHeader { name }) if name == "bad header"
        ));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
