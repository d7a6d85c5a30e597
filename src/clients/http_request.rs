//! Request types for the CourtListener client.
//!
//! [`RequestArguments`] holds the per-call options a caller assembles;
//! [`PreparedRequest`] records what was actually put on the wire.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::auth::AUTHORIZATION_HEADER;

/// Options for a single GET request.
///
/// Every field is optional. A missing `url` means the session endpoint; a
/// relative `url` is resolved against it. Arguments are owned by the call
/// that builds them and are consumed when the request is sent.
///
/// # Example
///
/// ```rust
/// use titanium_white::clients::RequestArguments;
///
/// let args = RequestArguments::builder()
///     .url("people/")
///     .param("name_first", "Cynthia")
///     .header("X-Trace", "1")
///     .build();
///
/// assert_eq!(args.url.as_deref(), Some("people/"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestArguments {
    /// Absolute URL, or a path relative to the session endpoint.
    pub url: Option<String>,
    /// Headers to send with this request.
    pub headers: Option<HashMap<String, String>>,
    /// Query parameters for this request.
    pub params: Option<BTreeMap<String, String>>,
    /// Per-call timeout overriding the client default.
    pub timeout: Option<Duration>,
}

impl RequestArguments {
    /// Creates a new builder for constructing `RequestArguments`.
    #[must_use]
    pub fn builder() -> RequestArgumentsBuilder {
        RequestArgumentsBuilder::default()
    }

    /// Sets (or overwrites) a single query parameter.
    pub fn set_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
    }
}

/// Builder for constructing [`RequestArguments`] instances.
#[derive(Debug, Default)]
pub struct RequestArgumentsBuilder {
    args: RequestArguments,
}

impl RequestArgumentsBuilder {
    /// Sets the request URL or relative path.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.args.url = Some(url.into());
        self
    }

    /// Sets all headers at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.args.headers = Some(headers);
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args
            .headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn params(mut self, params: BTreeMap<String, String>) -> Self {
        self.args.params = Some(params);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.set_param(key, value);
        self
    }

    /// Sets a per-call timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.args.timeout = Some(timeout);
        self
    }

    /// Returns the assembled [`RequestArguments`].
    #[must_use]
    pub fn build(self) -> RequestArguments {
        self.args
    }
}

/// A fully resolved request, as handed to the transport.
///
/// The `Debug` output masks the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method; always `GET` for this client.
    pub method: &'static str,
    /// Final URL, query string included.
    pub url: Url,
    /// Headers sent with the request.
    pub headers: HashMap<String, String>,
    /// Timeout applied to this call.
    pub timeout: Duration,
}

impl PreparedRequest {
    /// Returns a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for PreparedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case(AUTHORIZATION_HEADER) {
                    (key.as_str(), "*****")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("PreparedRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("timeout", &self.timeout)
            .finish()
    }
}
