//! Authorization header injection.

use std::collections::HashMap;

use crate::clients::RequestArguments;
use crate::config::ApiKey;

/// Name of the header carrying the API token.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Behavior when the caller already supplied an `Authorization` header.
///
/// The default, [`AuthorizationPolicy::Overwrite`], replaces the caller's
/// value with the session token. [`AuthorizationPolicy::PreserveExisting`]
/// keeps the caller's header untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthorizationPolicy {
    /// The session token always wins (last writer wins).
    #[default]
    Overwrite,
    /// A caller-supplied `Authorization` header is kept as is.
    PreserveExisting,
}

impl AuthorizationPolicy {
    /// Returns the policy for the given `overwrite_existing_auth` flag.
    #[must_use]
    pub const fn from_overwrite_flag(overwrite_existing_auth: bool) -> Self {
        if overwrite_existing_auth {
            Self::Overwrite
        } else {
            Self::PreserveExisting
        }
    }

    /// Returns `true` if an existing header is replaced.
    #[must_use]
    pub const fn overwrites_existing(self) -> bool {
        matches!(self, Self::Overwrite)
    }
}

/// Returns the `Authorization` header value for `api_key`.
///
/// ```rust
/// use titanium_white::ApiKey;
/// use titanium_white::auth::authorization_value;
///
/// let key = ApiKey::new("ABC").unwrap();
/// assert_eq!(authorization_value(&key), "Token: ABC");
/// ```
#[must_use]
pub fn authorization_value(api_key: &ApiKey) -> String {
    format!("Token: {}", api_key.as_ref())
}

/// Ensures `args` carries an `Authorization` header derived from `api_key`.
///
/// - Absent or empty headers become exactly `{"Authorization": "Token: <key>"}`.
/// - Otherwise the header is merged in without removing other entries. An
///   existing `Authorization` header (matched case-insensitively) is replaced
///   or kept according to `policy`. Either way exactly one `Authorization`
///   header remains; when several spellings are present,
///   [`AuthorizationPolicy::PreserveExisting`] keeps `Authorization` if
///   present, else the lexically first spelling.
///
/// No network I/O happens here.
#[must_use]
pub fn inject_authorization(
    mut args: RequestArguments,
    api_key: &ApiKey,
    policy: AuthorizationPolicy,
) -> RequestArguments {
    let value = authorization_value(api_key);

    match args.headers.as_mut().filter(|headers| !headers.is_empty()) {
        Some(headers) => {
            let mut existing: Vec<String> = headers
                .keys()
                .filter(|key| key.eq_ignore_ascii_case(AUTHORIZATION_HEADER))
                .cloned()
                .collect();
            // Canonical spelling first, then lexical; independent of map order
            existing.sort_by_key(|key| (key != AUTHORIZATION_HEADER, key.clone()));

            match existing.split_first() {
                Some((_, duplicates)) if !policy.overwrites_existing() => {
                    tracing::debug!("Keeping caller-supplied Authorization header");
                    for duplicate in duplicates {
                        headers.remove(duplicate);
                    }
                }
                found => {
                    if found.is_some() {
                        tracing::debug!("Overwriting caller-supplied Authorization header");
                    }
                    headers.retain(|key, _| !key.eq_ignore_ascii_case(AUTHORIZATION_HEADER));
                    headers.insert(AUTHORIZATION_HEADER.to_string(), value);
                }
            }
        }
        None => {
            args.headers = Some(HashMap::from([(AUTHORIZATION_HEADER.to_string(), value)]));
        }
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("ABC").unwrap()
    }

    fn expected_only_auth() -> HashMap<String, String> {
        HashMap::from([("Authorization".to_string(), "Token: ABC".to_string())])
    }

    #[test]
    fn test_inject_into_absent_headers() {
        let args = inject_authorization(
            RequestArguments::default(),
            &key(),
            AuthorizationPolicy::Overwrite,
        );
        assert_eq!(args.headers, Some(expected_only_auth()));
    }

    #[test]
    fn test_inject_into_empty_headers() {
        let args = RequestArguments::builder().headers(HashMap::new()).build();
        let args = inject_authorization(args, &key(), AuthorizationPolicy::Overwrite);
        assert_eq!(args.headers, Some(expected_only_auth()));
    }

    #[test]
    fn test_inject_merges_with_existing_headers() {
        let args = RequestArguments::builder().header("X", "1").build();
        let args = inject_authorization(args, &key(), AuthorizationPolicy::Overwrite);

        let expected = HashMap::from([
            ("X".to_string(), "1".to_string()),
            ("Authorization".to_string(), "Token: ABC".to_string()),
        ]);
        assert_eq!(args.headers, Some(expected));
    }

    #[test]
    fn test_overwrite_policy_replaces_caller_authorization() {
        let args = RequestArguments::builder()
            .header("authorization", "Bearer caller")
            .header("X", "1")
            .build();
        let args = inject_authorization(args, &key(), AuthorizationPolicy::Overwrite);

        let headers = args.headers.unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Authorization"), Some(&"Token: ABC".to_string()));
        assert!(!headers.contains_key("authorization"));
    }

    #[test]
    fn test_preserve_policy_keeps_caller_authorization() {
        let args = RequestArguments::builder()
            .header("Authorization", "Bearer caller")
            .build();
        let args = inject_authorization(args, &key(), AuthorizationPolicy::PreserveExisting);

        let headers = args.headers.unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get("Authorization"),
            Some(&"Bearer caller".to_string())
        );
    }

    #[test]
    fn test_overwrite_policy_replaces_every_case_variant() {
        let args = RequestArguments::builder()
            .header("Authorization", "Token desc")
            .header("authorization", "Bearer caller")
            .header("AUTHORIZATION", "Bearer other")
            .build();
        let args = inject_authorization(args, &key(), AuthorizationPolicy::Overwrite);

        assert_eq!(args.headers, Some(expected_only_auth()));
    }

    #[test]
    fn test_preserve_policy_keeps_one_deterministic_variant() {
        let args = RequestArguments::builder()
            .header("authorization", "Bearer lower")
            .header("Authorization", "Bearer canonical")
            .build();
        let args = inject_authorization(args, &key(), AuthorizationPolicy::PreserveExisting);
        assert_eq!(
            args.headers,
            Some(HashMap::from([(
                "Authorization".to_string(),
                "Bearer canonical".to_string()
            )]))
        );

        let args = RequestArguments::builder()
            .header("authorization", "Bearer lower")
            .header("AUTHORIZATION", "Bearer upper")
            .build();
        let args = inject_authorization(args, &key(), AuthorizationPolicy::PreserveExisting);
        assert_eq!(
            args.headers,
            Some(HashMap::from([(
                "AUTHORIZATION".to_string(),
                "Bearer upper".to_string()
            )]))
        );
    }

    #[test]
    fn test_preserve_policy_still_injects_when_missing() {
        let args = RequestArguments::builder().header("X", "1").build();
        let args = inject_authorization(args, &key(), AuthorizationPolicy::PreserveExisting);
        assert_eq!(
            args.headers.unwrap().get("Authorization"),
            Some(&"Token: ABC".to_string())
        );
    }

    #[test]
    fn test_inject_leaves_other_fields_alone() {
        let args = RequestArguments::builder()
            .url("people/")
            .param("name_last", "Freeland")
            .build();
        let injected = inject_authorization(args.clone(), &key(), AuthorizationPolicy::Overwrite);
        assert_eq!(injected.url, args.url);
        assert_eq!(injected.params, args.params);
    }

    #[test]
    fn test_policy_from_flag() {
        assert_eq!(AuthorizationPolicy::default(), AuthorizationPolicy::Overwrite);
        assert_eq!(
            AuthorizationPolicy::from_overwrite_flag(true),
            AuthorizationPolicy::Overwrite
        );
        assert_eq!(
            AuthorizationPolicy::from_overwrite_flag(false),
            AuthorizationPolicy::PreserveExisting
        );
    }
}
