//! Integration tests for the CourtListener client.
//!
//! These tests verify end-to-end functionality of the configuration layer:
//! credential resolution, descriptor construction, and error reporting.

use std::collections::HashMap;

use titanium_white::config::{resolve_api_key, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT};
use titanium_white::{ApiKey, ConfigError, Endpoint, SessionDescriptor};

/// Simulates a process environment without touching the real one.
fn env_with(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_full_workflow_resolve_key_build_descriptor_access_fields() {
    let lookup = env_with(&[("COURTLISTENER", "MOCK_COURTLISTENER_API_KEY")]);
    let api_key = resolve_api_key(None, DEFAULT_API_KEY_ENV, lookup).unwrap();

    let descriptor = SessionDescriptor::builder()
        .endpoint(Endpoint::new("https://courtlistener.com/api/rest/v3/people").unwrap())
        .api_key(api_key)
        .parameter("name_first", "Cynthia")
        .parameter("name_last", "Freeland")
        .build()
        .unwrap();

    assert_eq!(descriptor.api_key().as_ref(), "MOCK_COURTLISTENER_API_KEY");
    assert_eq!(
        descriptor.endpoint().as_ref(),
        "https://courtlistener.com/api/rest/v3/people"
    );
    assert!(descriptor.headers().is_empty());
    assert_eq!(descriptor.parameters().len(), 2);
}

#[test]
fn test_explicit_key_ignores_environment_state() {
    for env in [
        env_with(&[]),
        env_with(&[("COURTLISTENER", "from-env")]),
        env_with(&[("OTHER", "other")]),
    ] {
        let key = resolve_api_key(Some("explicit-key"), "OTHER", env).unwrap();
        assert_eq!(key.as_ref(), "explicit-key");
    }
}

#[test]
fn test_missing_environment_variable_is_a_hard_error() {
    let result = resolve_api_key(None, DEFAULT_API_KEY_ENV, env_with(&[("OTHER", "x")]));

    let error = result.unwrap_err();
    assert_eq!(
        error,
        ConfigError::MissingCredential {
            env_var: "COURTLISTENER".to_string()
        }
    );
    assert!(error.to_string().contains("COURTLISTENER"));
}

#[test]
fn test_multi_tenant_scenario_multiple_independent_descriptors() {
    let people = SessionDescriptor::builder()
        .endpoint(Endpoint::new("https://www.courtlistener.com/api/rest/v3/people/").unwrap())
        .api_key(ApiKey::new("key-a").unwrap())
        .build()
        .unwrap();
    let opinions = SessionDescriptor::builder()
        .endpoint(Endpoint::new("https://www.courtlistener.com/api/rest/v3/opinions/").unwrap())
        .api_key(ApiKey::new("key-b").unwrap())
        .build()
        .unwrap();

    assert_ne!(people, opinions);
    assert_eq!(people.api_key().as_ref(), "key-a");
    assert_eq!(opinions.api_key().as_ref(), "key-b");
}

#[test]
fn test_error_handling_invalid_inputs_produce_correct_errors() {
    assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));

    assert!(matches!(
        Endpoint::new("not-a-valid-url"),
        Err(ConfigError::InvalidEndpoint { .. })
    ));

    assert!(matches!(
        SessionDescriptor::builder().build(),
        Err(ConfigError::MissingRequiredField { field: "api_key" })
    ));
}

#[test]
fn test_descriptor_defaults_to_courtlistener_endpoint() {
    let descriptor = SessionDescriptor::builder()
        .api_key(ApiKey::new("key").unwrap())
        .build()
        .unwrap();
    assert_eq!(descriptor.endpoint().as_ref(), DEFAULT_ENDPOINT);
}

#[test]
fn test_descriptor_can_be_cloned_and_shared() {
    let descriptor = SessionDescriptor::builder()
        .api_key(ApiKey::new("key").unwrap())
        .header("X-Trace", "1")
        .build()
        .unwrap();

    let descriptor_clone = descriptor.clone();
    assert_eq!(descriptor, descriptor_clone);

    let handle = std::thread::spawn(move || descriptor_clone.api_key().as_ref().to_string());
    assert_eq!(handle.join().unwrap(), "key");
}
