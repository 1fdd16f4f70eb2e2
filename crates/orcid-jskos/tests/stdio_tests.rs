//! Stdio transport tests with in-memory streams.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use orcid_jskos::config::Config;
use orcid_jskos::server::stdio::serve_lines;
use orcid_jskos::service::OrcidService;

async fn setup_test_context() -> (MockServer, OrcidService) {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok"})))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1.2/0000-0002-1825-0097/orcid-bio/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orcid-profile": {
                "orcid-identifier": {
                    "uri": "http://orcid.org/0000-0002-1825-0097",
                    "path": "0000-0002-1825-0097"
                },
                "orcid-bio": {"personal-details": {"given-names": {"value": "Josiah"}}}
            }
        })))
        .mount(&mock_server)
        .await;

    let service = OrcidService::from_config(Config::for_testing(&mock_server.uri())).unwrap();
    (mock_server, service)
}

async fn run(service: &OrcidService, input: &str) -> Vec<Value> {
    let mut output = Vec::new();
    serve_lines(service, input.as_bytes(), &mut output).await.unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_one_answer_per_query_line() {
    let (_mock_server, service) = setup_test_context().await;

    let input = concat!(
        r#"{"notation": "0000-0002-1825-0097"}"#,
        "\n",
        "\n",
        r#"{"notation": "nope"}"#,
        "\n",
    );
    let answers = run(&service, input).await;

    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0][0]["prefLabel"]["en"], "Josiah");
    assert_eq!(answers[1], json!([]));
}

#[tokio::test]
async fn test_malformed_line_reports_parse_error() {
    let (_mock_server, service) = setup_test_context().await;

    let answers = run(&service, "{not json\n{\"notation\": \"0000-0002-1825-0097\"}").await;

    assert_eq!(answers.len(), 2);
    assert!(answers[0]["error"].as_str().unwrap().starts_with("Parse error"));
    assert_eq!(answers[1][0]["uri"], "http://orcid.org/0000-0002-1825-0097");
}

#[tokio::test]
async fn test_empty_input() {
    let (_mock_server, service) = setup_test_context().await;
    assert!(run(&service, "").await.is_empty());
}
