//! HTTP response types for the CourtListener client.

use std::collections::HashMap;

use url::Url;

/// A decoded response from the CourtListener API.
///
/// List endpoints return a body of the form
/// `{"count": 45, "next": ..., "previous": ..., "results": [...]}`; both
/// `count` and `results` are optional as far as this client is concerned.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The final URL of the response, after redirects.
    pub url: Url,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded JSON body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        url: Url,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            url,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the server-reported total item count, or 0 when absent.
    ///
    /// Negative or non-integer values are treated as absent.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.body
            .get("count")
            .and_then(serde_json::Value::as_u64)
            .unwrap_or(0)
    }

    /// Returns the `results` field of the body, or `Null` when absent.
    #[must_use]
    pub fn results(&self) -> serde_json::Value {
        self.body
            .get("results")
            .cloned()
            .unwrap_or(serde_json::Value::Null)
    }

    /// Consumes the response and returns its `results` field, or `Null`.
    #[must_use]
    pub fn into_results(self) -> serde_json::Value {
        match self.body {
            serde_json::Value::Object(mut map) => {
                map.remove("results").unwrap_or(serde_json::Value::Null)
            }
            _ => serde_json::Value::Null,
        }
    }
}
