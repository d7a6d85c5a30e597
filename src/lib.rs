//! # titanium-white
//!
//! An async Rust client for the [CourtListener](https://www.courtlistener.com)
//! REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - API key resolution from an explicit value or the `COURTLISTENER` environment variable
//! - An immutable [`SessionDescriptor`] bundling endpoint, key, headers and parameters
//! - A [`CourtSession`] that sends GET requests with the `Authorization` token injected
//! - Paginated fetches that walk `page=N` up to a depth limit or the reported `count`
//!
//! HTTP transport, TLS, connection pooling and JSON decoding are delegated to
//! `reqwest` and `serde_json`.
//!
//! ## Quick Start
//!
//! ```rust
//! use titanium_white::{ApiKey, Endpoint, SessionDescriptor};
//!
//! let descriptor = SessionDescriptor::builder()
//!     .endpoint(Endpoint::new("https://www.courtlistener.com/api/rest/v3/").unwrap())
//!     .api_key(ApiKey::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Resolving the API key
//!
//! ```rust
//! use titanium_white::config::{resolve_api_key, DEFAULT_API_KEY_ENV};
//! use titanium_white::ConfigError;
//!
//! // An explicit key always wins
//! let key = resolve_api_key(Some("explicit"), DEFAULT_API_KEY_ENV, |_| None).unwrap();
//! assert_eq!(key.as_ref(), "explicit");
//!
//! // No explicit key and no variable is a hard error
//! let missing = resolve_api_key(None, DEFAULT_API_KEY_ENV, |_| None);
//! assert!(matches!(missing, Err(ConfigError::MissingCredential { .. })));
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use titanium_white::{CourtSession, RequestArguments};
//!
//! let session = CourtSession::new(descriptor)?;
//!
//! let args = RequestArguments::builder()
//!     .url("people/")
//!     .param("name_first", "Cynthia")
//!     .param("name_last", "Freeland")
//!     .build();
//!
//! let (response, prepared) = session.get(args.clone()).await?;
//! println!("GET {} -> {}", prepared.url, response.code);
//!
//! // Every page, at most 10 deep
//! let pages = session.fetch_all(args, titanium_white::DEFAULT_PAGE_DEPTH).await?;
//! println!("{}", serde_json::to_string_pretty(&pages)?);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the environment is only read by explicit `*_from_env` helpers
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Secrets stay out of logs**: the API key is masked in `Debug` output and never logged
//! - **No partial results**: a failed page fails the whole paginated fetch

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod listener;
pub mod session;

// Re-export public types at crate root for convenience
pub use auth::{inject_authorization, AuthorizationPolicy};
pub use clients::{
    HttpClient, HttpError, HttpResponse, HttpResponseError, InvalidHttpRequestError,
    MalformedResponseError, PreparedRequest, RequestArguments,
};
pub use config::{
    resolve_api_key, resolve_api_key_from_env, ApiKey, Endpoint, SessionDescriptor,
    SessionDescriptorBuilder,
};
pub use error::ConfigError;
pub use listener::{CourtListener, ListenerError};
pub use session::{CourtSession, CourtSessionBuilder, PageResultSet, DEFAULT_PAGE_DEPTH};
