//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use std::time::Duration;

use orcid_jskos::client::OrcidClient;
use orcid_jskos::config::Config;
use orcid_jskos::server::JskosServer;

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_has_no_credentials() {
    let config = Config::default();
    assert!(!config.has_credentials());
    assert!(config.token_cache_ttl.is_none());
    assert!(!config.surface_upstream_errors);
}

#[test]
fn test_config_needs_both_credentials() {
    assert!(Config::new(Some("APP-1".into()), Some("secret".into())).has_credentials());
    assert!(!Config::new(Some("APP-1".into()), None).has_credentials());
    assert!(!Config::new(None, Some("secret".into())).has_credentials());
}

#[test]
fn test_config_empty_credentials_are_missing() {
    let config = Config::new(Some(String::new()), Some("secret".into()));
    assert!(config.client_id.is_none());
    assert!(!config.has_credentials());
}

#[test]
fn test_config_token_cache() {
    let config = Config::default().with_token_cache(300);
    assert_eq!(config.token_cache_ttl, Some(Duration::from_secs(300)));

    let config = config.with_token_cache(0);
    assert!(config.token_cache_ttl.is_none());
}

#[test]
fn test_config_debug_hides_secret() {
    let config = Config::new(Some("APP-1".into()), Some("super-secret".into()));
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("APP-1"));
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let client = OrcidClient::new(Config::default());
    assert!(client.is_ok());
}

#[test]
fn test_client_reports_credentials_and_cache() {
    let config = Config::for_testing("http://localhost:1").with_token_cache(60);
    let client = OrcidClient::new(config).unwrap();
    assert!(client.has_credentials());
    assert!(client.caches_tokens());

    let client = OrcidClient::new(Config::default()).unwrap();
    assert!(!client.has_credentials());
    assert!(!client.caches_tokens());
}

#[test]
fn test_client_rejects_invalid_endpoints() {
    let config = Config {
        api_url: "not a url".into(),
        ..Config::default()
    };
    assert!(OrcidClient::new(config).is_err());

    let config = Config {
        token_url: "ftp://orcid.org/oauth/token".into(),
        ..Config::default()
    };
    assert!(OrcidClient::new(config).is_err());
}

#[test]
fn test_client_debug_hides_secret() {
    let config = Config::new(Some("APP-1".into()), Some("super-secret".into()));
    let client = OrcidClient::new(config).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("has_credentials"));
}

#[test]
fn test_server_creation_succeeds() {
    let server = JskosServer::new(Config::for_testing("http://localhost:1")).unwrap();
    assert!(server.service().has_credentials());
    assert_eq!(server.service().uri_space().base(), "http://orcid.org/");
}
