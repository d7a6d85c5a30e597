//! API key resolution.
//!
//! The key comes from an explicit value or a named environment variable.
//! [`resolve_api_key`] takes the variable lookup as a parameter so callers
//! (and tests) never have to mutate process state; [`resolve_api_key_from_env`]
//! is the variant meant for the composition root.

use crate::config::ApiKey;
use crate::error::ConfigError;

/// Environment variable consulted when no key is passed explicitly.
pub const DEFAULT_API_KEY_ENV: &str = "COURTLISTENER";

/// Resolves an API key from an explicit value or an environment lookup.
///
/// An explicit key is returned verbatim and the lookup is never consulted.
/// Otherwise `lookup(env_var)` supplies the key.
///
/// The key value itself is never logged.
///
/// # Errors
///
/// - [`ConfigError::MissingCredential`] if there is no explicit key and the
///   lookup yields nothing.
/// - [`ConfigError::EmptyApiKey`] if the resolved key is empty.
///
/// # Example
///
/// ```rust
/// use titanium_white::config::{resolve_api_key, DEFAULT_API_KEY_ENV};
///
/// let key = resolve_api_key(None, DEFAULT_API_KEY_ENV, |name| {
///     (name == "COURTLISTENER").then(|| "from-env".to_string())
/// })
/// .unwrap();
/// assert_eq!(key.as_ref(), "from-env");
/// ```
pub fn resolve_api_key<F>(
    explicit: Option<&str>,
    env_var: &str,
    lookup: F,
) -> Result<ApiKey, ConfigError>
where
    F: FnOnce(&str) -> Option<String>,
{
    if let Some(key) = explicit {
        tracing::debug!("Using explicitly provided CourtListener API key");
        return ApiKey::new(key);
    }

    match lookup(env_var) {
        Some(key) => {
            tracing::debug!(env_var, "Discovered CourtListener API key in environment");
            ApiKey::new(key)
        }
        None => {
            tracing::error!(
                env_var,
                "Missing CourtListener API token. Either set the environment variable or pass the key explicitly"
            );
            Err(ConfigError::MissingCredential {
                env_var: env_var.to_string(),
            })
        }
    }
}

/// Resolves an API key, reading `env_var` from the process environment.
///
/// A variable that is set but not valid unicode is treated as unset.
///
/// # Errors
///
/// Same as [`resolve_api_key`].
pub fn resolve_api_key_from_env(
    explicit: Option<&str>,
    env_var: &str,
) -> Result<ApiKey, ConfigError> {
    resolve_api_key(explicit, env_var, |name| std::env::var(name).ok())
}
