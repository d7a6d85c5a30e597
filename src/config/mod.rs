//! Configuration types for the CourtListener client.
//!
//! This module provides the values a session is built from.
//!
//! # Overview
//!
//! - [`SessionDescriptor`]: immutable bundle of endpoint, API key, headers and parameters
//! - [`SessionDescriptorBuilder`]: the one canonical way to construct a descriptor
//! - [`ApiKey`]: a validated API token with masked debug output
//! - [`Endpoint`]: a validated absolute base URL
//! - [`resolve_api_key`] / [`resolve_api_key_from_env`]: credential resolution
//!
//! # Example
//!
//! ```rust
//! use titanium_white::{ApiKey, Endpoint, SessionDescriptor};
//!
//! let descriptor = SessionDescriptor::builder()
//!     .endpoint(Endpoint::new("https://www.courtlistener.com/api/rest/v3/people/").unwrap())
//!     .api_key(ApiKey::new("my-token").unwrap())
//!     .parameter("name_first", "Cynthia")
//!     .parameter("name_last", "Freeland")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(descriptor.parameters().len(), 2);
//! ```

mod credentials;
mod newtypes;

pub use credentials::{resolve_api_key, resolve_api_key_from_env, DEFAULT_API_KEY_ENV};
pub use newtypes::{ApiKey, Endpoint, DEFAULT_ENDPOINT};

use std::collections::{BTreeMap, HashMap};

use crate::error::ConfigError;

/// Describes how to talk to the CourtListener API.
///
/// A descriptor is created once per logical client and never mutated
/// afterwards. Equality is field-wise, so two descriptors built from the
/// same values are interchangeable.
///
/// # Thread Safety
///
/// `SessionDescriptor` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use titanium_white::{ApiKey, SessionDescriptor};
///
/// let a = SessionDescriptor::builder()
///     .api_key(ApiKey::new("token").unwrap())
///     .build()
///     .unwrap();
/// let b = SessionDescriptor::builder()
///     .api_key(ApiKey::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionDescriptor {
    endpoint: Endpoint,
    api_key: ApiKey,
    headers: HashMap<String, String>,
    parameters: BTreeMap<String, String>,
}

impl SessionDescriptor {
    /// Creates a new builder for constructing a `SessionDescriptor`.
    #[must_use]
    pub fn builder() -> SessionDescriptorBuilder {
        SessionDescriptorBuilder::new()
    }

    /// Returns the base endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the query parameters sent with every request.
    #[must_use]
    pub const fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }
}

// Verify SessionDescriptor is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SessionDescriptor>();
};

/// Builder for constructing [`SessionDescriptor`] instances.
///
/// `api_key` is required. The endpoint defaults to [`DEFAULT_ENDPOINT`];
/// headers and parameters default to empty.
#[derive(Debug, Default)]
pub struct SessionDescriptorBuilder {
    endpoint: Option<Endpoint>,
    api_key: Option<ApiKey>,
    headers: HashMap<String, String>,
    parameters: BTreeMap<String, String>,
}

impl SessionDescriptorBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Replaces all headers at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Replaces all query parameters at once.
    #[must_use]
    pub fn parameters(mut self, parameters: BTreeMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Builds the [`SessionDescriptor`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<SessionDescriptor, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(SessionDescriptor {
            endpoint: self.endpoint.unwrap_or_default(),
            api_key,
            headers: self.headers,
            parameters: self.parameters,
        })
    }
}
