//! Integration tests for the ORCID JSKOS service.
//!
//! These tests hit the real ORCID API and need `ORCID_CLIENT_ID` and
//! `ORCID_CLIENT_SECRET` in the environment.
//! Run with: `cargo test --features integration -- --nocapture`

#![cfg(feature = "integration")]

use orcid_jskos::client::OrcidClient;
use orcid_jskos::config::Config;
use orcid_jskos::models::ConceptQuery;
use orcid_jskos::service::OrcidService;

/// Well-known ORCID iDs for testing.
mod orcid_ids {
    /// Josiah Carberry, the ORCID demo profile
    pub const CARBERRY: &str = "0000-0002-1825-0097";
    /// Well-formed but unassigned
    pub const UNASSIGNED: &str = "0000-0000-0000-0000";
}

fn create_client() -> OrcidClient {
    let config = Config::from_env().expect("valid environment");
    assert!(config.has_credentials(), "ORCID_CLIENT_ID and ORCID_CLIENT_SECRET must be set");
    OrcidClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn test_obtain_token() {
    let token = create_client().obtain_token().await.expect("Token exchange should succeed");
    assert!(token.is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_lookup_known_profile() {
    let service = OrcidService::new(create_client());
    let page = service
        .try_query(&ConceptQuery::notation(orcid_ids::CARBERRY))
        .await
        .expect("Lookup should succeed");

    assert_eq!(page.len(), 1);
    let concept = &page.concepts[0];
    assert_eq!(concept.notation(), Some(orcid_ids::CARBERRY));
    println!("Carberry: {:?}", concept.pref_label("en"));
}

#[tokio::test]
async fn test_lookup_unassigned_profile() {
    let service = OrcidService::new(create_client());
    let page = service.query(&ConceptQuery::notation(orcid_ids::UNASSIGNED)).await;
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_search() {
    let service = OrcidService::new(create_client());
    let page = service
        .try_query(&ConceptQuery::search("Josiah Carberry"))
        .await
        .expect("Search should succeed");

    println!("Search returned {} concept(s)", page.len());
    assert!(page.concepts.iter().all(|c| c.uri.is_some()));
}

#[tokio::test]
async fn test_search_with_special_characters() {
    let service = OrcidService::new(create_client());
    let result = service.try_query(&ConceptQuery::search("carberry:josiah (brown)")).await;

    match result {
        Ok(page) => println!("Special chars query returned {} concept(s)", page.len()),
        Err(e) => panic!("Escaped query should be accepted: {e}"),
    }
}
