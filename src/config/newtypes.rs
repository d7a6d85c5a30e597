//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// The base endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://www.courtlistener.com/api/rest/v3/";

/// A validated CourtListener API token.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use titanium_white::ApiKey;
///
/// let key = ApiKey::new("my-token").unwrap();
/// assert_eq!(key.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated base endpoint for API requests.
///
/// The endpoint must be an absolute `http` or `https` URL. Relative request
/// paths are resolved against it with [`Endpoint::join`].
///
/// # Serialization
///
/// `Endpoint` serializes to and deserializes from its URL string:
///
/// ```rust
/// use titanium_white::Endpoint;
///
/// let endpoint = Endpoint::new("https://www.courtlistener.com/api/rest/v3/").unwrap();
/// let json = serde_json::to_string(&endpoint).unwrap();
/// assert_eq!(json, r#""https://www.courtlistener.com/api/rest/v3/""#);
/// ```
///
/// # Example
///
/// ```rust
/// use titanium_white::Endpoint;
///
/// let endpoint = Endpoint::new("https://www.courtlistener.com/api/rest/v3/").unwrap();
/// let url = endpoint.join("people/").unwrap();
/// assert_eq!(url.as_str(), "https://www.courtlistener.com/api/rest/v3/people/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL cannot be parsed,
    /// is not absolute, or does not use the `http`/`https` scheme.
    pub fn new(url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = url.as_ref().trim();
        let invalid = || ConfigError::InvalidEndpoint {
            url: raw.to_string(),
        };

        let parsed = Url::parse(raw).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }

        Ok(Self(parsed))
    }

    /// Returns the CourtListener REST v3 endpoint.
    ///
    /// # Panics
    ///
    /// Never in practice: [`DEFAULT_ENDPOINT`] is a well-formed constant.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn courtlistener() -> Self {
        Self::new(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL")
    }

    /// Returns the underlying URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }

    /// Resolves `path` against this endpoint.
    ///
    /// Absolute URLs are returned unchanged. Relative paths follow standard
    /// URL resolution, so a trailing slash on the endpoint matters.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the joined URL is invalid.
    pub fn join(&self, path: &str) -> Result<Url, url::ParseError> {
        self.0.join(path)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::courtlistener()
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("super-secret-token").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ApiKey(*****)");
        assert!(!debug.contains("super-secret-token"));
    }

    #[test]
    fn test_endpoint_accepts_https_url() {
        let endpoint = Endpoint::new("https://courtlistener.com/api/rest/v3/people").unwrap();
        assert_eq!(
            endpoint.as_ref(),
            "https://courtlistener.com/api/rest/v3/people"
        );
    }

    #[test]
    fn test_endpoint_trims_whitespace() {
        let endpoint = Endpoint::new("  http://localhost:8080/api/  ").unwrap();
        assert_eq!(endpoint.as_ref(), "http://localhost:8080/api/");
    }

    #[test]
    fn test_endpoint_rejects_invalid_urls() {
        for url in ["", "courtlistener.com", "ftp://courtlistener.com", "/api/rest"] {
            assert!(
                matches!(Endpoint::new(url), Err(ConfigError::InvalidEndpoint { .. })),
                "expected {url:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_default_endpoint_is_courtlistener_v3() {
        assert_eq!(Endpoint::default().as_ref(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_join_relative_and_absolute_paths() {
        let endpoint = Endpoint::courtlistener();
        assert_eq!(
            endpoint.join("opinions/").unwrap().as_str(),
            "https://www.courtlistener.com/api/rest/v3/opinions/"
        );
        assert_eq!(
            endpoint.join("https://example.com/x").unwrap().as_str(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_endpoint_deserialize_validates() {
        let ok: Endpoint = serde_json::from_str(r#""https://example.com/api/""#).unwrap();
        assert_eq!(ok.as_ref(), "https://example.com/api/");

        let bad: Result<Endpoint, _> = serde_json::from_str(r#""nope""#);
        assert!(bad.is_err());
    }
}
