//! Authorization handling for CourtListener requests.
//!
//! CourtListener authenticates requests with a token header:
//!
//! ```text
//! Authorization: Token: <api_key>
//! ```
//!
//! # Overview
//!
//! - [`inject_authorization`]: completes a caller's [`RequestArguments`] with that header
//! - [`AuthorizationPolicy`]: what to do when the caller already set `Authorization`
//! - [`authorization_value`]: the header value for a key
//!
//! # Example
//!
//! ```rust
//! use titanium_white::ApiKey;
//! use titanium_white::auth::{inject_authorization, AuthorizationPolicy};
//! use titanium_white::clients::RequestArguments;
//!
//! let key = ApiKey::new("ABC").unwrap();
//! let args = inject_authorization(RequestArguments::default(), &key, AuthorizationPolicy::default());
//!
//! let headers = args.headers.unwrap();
//! assert_eq!(headers.len(), 1);
//! assert_eq!(headers.get("Authorization"), Some(&"Token: ABC".to_string()));
//! ```
//!
//! [`RequestArguments`]: crate::clients::RequestArguments

mod authorization;

pub use authorization::{
    authorization_value, inject_authorization, AuthorizationPolicy, AUTHORIZATION_HEADER,
};
