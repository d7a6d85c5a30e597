//! HTTP-specific error types for the CourtListener client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`MalformedResponseError`]: A body that could not be decoded as JSON
//! - [`InvalidHttpRequestError`]: A request that fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Transport failures from reqwest are passed through unmodified as
//! [`HttpError::Network`]. Nothing in this crate retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use titanium_white::clients::HttpError;
//!
//! match session.get(args).await {
//!     Ok((response, _prepared)) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::MalformedResponse(e)) => println!("Bad body from {}", e.url),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// # Example
///
/// ```rust
/// use titanium_white::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     url: "https://www.courtlistener.com/api/rest/v3/people/".to_string(),
///     message: r#"{"detail":"Invalid token."}"#.to_string(),
/// };
///
/// assert!(error.to_string().contains("401"));
/// ```
#[derive(Debug, Error)]
#[error("Request to {url} failed with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The URL that was requested.
    pub url: String,
    /// The response body, serialized as JSON.
    pub message: String,
}

/// Error returned when a response body cannot be decoded as JSON.
///
/// Only the URL and decoder message are kept; the body itself is not
/// carried around.
#[derive(Debug, Error)]
#[error("Malformed JSON response from {url}: {reason}")]
pub struct MalformedResponseError {
    /// The URL whose response failed to decode.
    pub url: String,
    /// The decoder's error message.
    pub reason: String,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request URL could not be resolved against the endpoint.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL or path that was provided.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A header name or value is not valid HTTP.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The response body was not valid JSON.
    #[error(transparent)]
    MalformedResponse(#[from] MalformedResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_includes_status_and_url() {
        let error = HttpResponseError {
            code: 404,
            url: "https://example.com/api/missing/".to_string(),
            message: r#"{"detail":"Not found."}"#.to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("https://example.com/api/missing/"));
        assert!(message.contains("Not found."));
    }

    #[test]
    fn test_malformed_response_error_names_url() {
        let error = MalformedResponseError {
            url: "https://example.com/api/people/?page=2".to_string(),
            reason: "expected value at line 1 column 1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Malformed JSON response"));
        assert!(message.contains("page=2"));
    }

    #[test]
    fn test_invalid_url_error_message() {
        let error = InvalidHttpRequestError::InvalidUrl {
            url: "http://[::1".to_string(),
            reason: "invalid IPv6 address".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid request URL 'http://[::1': invalid IPv6 address"
        );
    }

    #[test]
    fn test_http_error_is_transparent_over_variants() {
        let error: HttpError = InvalidHttpRequestError::InvalidHeader {
            name: "bad header".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "Invalid header 'bad header'.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            url: String::new(),
            message: "test".to_string(),
        };
        let _: &dyn std::error::Error = &MalformedResponseError {
            url: String::new(),
            reason: "test".to_string(),
        };
        let _: &dyn std::error::Error = &InvalidHttpRequestError::InvalidHeader {
            name: "x".to_string(),
        };
    }
}
