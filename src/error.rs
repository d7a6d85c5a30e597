//! Error types for the CourtListener client.
//!
//! This module contains the configuration and credential errors raised
//! before any request is sent.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. A missing credential is always fatal to the
//! operation that needed it: it is never retried or replaced by a default.
//!
//! # Example
//!
//! ```rust
//! use titanium_white::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a CourtListener session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid CourtListener API token.")]
    EmptyApiKey,

    /// No API key was passed explicitly and the environment variable is unset.
    #[error("Missing CourtListener API token. Either set the environment variable '{env_var}' or pass the key explicitly.")]
    MissingCredential {
        /// The environment variable that was expected to hold the key.
        env_var: String,
    },

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://www.courtlistener.com/api/rest/v3/').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the session descriptor.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
