//! Integration tests for the search-and-verify pipeline
//!
//! These tests use wiremock to stand in for the people-search and
//! verification APIs and run full batches end-to-end.

use contact_finder::config::Config;
use contact_finder::input::read_companies;
use contact_finder::output::{export_results, write_exports};
use contact_finder::pipeline::{ContactAssembler, LogReporter};
use contact_finder::search::{build_http_client, ApolloClient, PeopleSearch};
use contact_finder::verify::{EmailVerifier, MillionVerifierClient, RateGate};
use contact_finder::{SearchError, VerificationError};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/v1/mixed_people/search";
const VERIFY_PATH: &str = "/api/v3/";

/// Creates a test configuration pointing both APIs at the mock server
fn create_test_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.search.endpoint = format!("{}{}", server.uri(), SEARCH_PATH);
    config.verification.endpoint = format!("{}{}", server.uri(), VERIFY_PATH);
    config.verification.timeout_secs = 1;
    config.verification.delay_ms = 0; // Very short for testing
    config
}

fn build_assembler(config: &Config) -> ContactAssembler {
    let client = build_http_client().expect("Failed to build client");
    let search = ApolloClient::new(client.clone(), &config.search, "search-key");
    let verifier = MillionVerifierClient::new(
        client,
        &config.verification,
        "verify-key",
        RateGate::from_millis(config.verification.delay_ms),
    );
    ContactAssembler::new(
        Box::new(search),
        Box::new(verifier),
        config.search.batch_size,
        config.search.max_titles,
    )
}

fn ann_lee() -> serde_json::Value {
    json!({
        "id": "p-ann",
        "first_name": "Ann",
        "last_name": "Lee",
        "linkedin_url": "http://www.linkedin.com/in/annlee",
        "title": "CTO",
        "email": "email_not_unlocked@domain.com",
        "email_status": "verified",
        "employment_history": [{"organization_name": "Acme", "title": "CTO"}],
        "country": "United States",
        "organization": {"name": "Acme", "website_url": "http://www.acme.com"}
    })
}

async fn mount_verifier_default(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(VERIFY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "invalid"})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_search_request_shape() {
    let server = MockServer::start().await;
    let config = create_test_config(&server);

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(header("cache-control", "no-cache"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "api_key": "search-key",
            "q_organization_domains": "acme.com\nbeta.io",
            "page": 1,
            "per_page": 100,
            "person_titles": ["CTO", "CEO"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "people": [ann_lee()],
            "pagination": {"total_entries": 350}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApolloClient::new(reqwest::Client::new(), &config.search, "search-key");
    let page = client
        .search(
            "acme.com\nbeta.io",
            &["CTO".to_string(), "CEO".to_string()],
            1,
        )
        .await
        .expect("Search failed");

    assert_eq!(page.people.len(), 1);
    assert_eq!(page.people[0].first_name.as_deref(), Some("Ann"));
    assert_eq!(page.total_pages, 2);
}

#[tokio::test]
async fn test_search_error_status() {
    let server = MockServer::start().await;
    let config = create_test_config(&server);

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let client = ApolloClient::new(reqwest::Client::new(), &config.search, "search-key");
    let result = client.search("acme.com", &["CTO".to_string()], 1).await;

    assert!(matches!(result, Err(SearchError::Status { status: 422 })));
}

#[tokio::test]
async fn test_search_malformed_payload() {
    let server = MockServer::start().await;
    let config = create_test_config(&server);

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = ApolloClient::new(reqwest::Client::new(), &config.search, "search-key");
    let result = client.search("acme.com", &["CTO".to_string()], 1).await;

    assert!(matches!(result, Err(SearchError::Malformed(_))));
}

#[tokio::test]
async fn test_verifier_classifies_results() {
    let server = MockServer::start().await;
    let config = create_test_config(&server);

    for (email, result) in [
        ("ok@acme.com", "ok"),
        ("catchall@acme.com", "catch-all"),
        ("accept@acme.com", "accept"),
        ("bad@acme.com", "invalid"),
    ] {
        Mock::given(method("GET"))
            .and(path(VERIFY_PATH))
            .and(query_param("api", "verify-key"))
            .and(query_param("email", email))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": result})))
            .mount(&server)
            .await;
    }

    let verifier = MillionVerifierClient::new(
        reqwest::Client::new(),
        &config.verification,
        "verify-key",
        RateGate::from_millis(0),
    );

    assert!(verifier.verify("ok@acme.com").await.unwrap().accepted);
    assert!(verifier.verify("catchall@acme.com").await.unwrap().accepted);
    assert!(verifier.verify("accept@acme.com").await.unwrap().accepted);

    let rejected = verifier.verify("bad@acme.com").await.unwrap();
    assert!(!rejected.accepted);
    assert_eq!(rejected.result, "invalid");
}

#[tokio::test]
async fn test_verifier_failures_are_errors() {
    let server = MockServer::start().await;
    let config = create_test_config(&server);

    Mock::given(method("GET"))
        .and(query_param("email", "down@acme.com"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("email", "odd@acme.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "done"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("email", "slow@acme.com"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"result": "ok"}))
                .set_delay(std::time::Duration::from_millis(1500)),
        )
        .mount(&server)
        .await;

    let verifier = MillionVerifierClient::new(
        reqwest::Client::new(),
        &config.verification,
        "verify-key",
        RateGate::from_millis(0),
    );

    assert!(matches!(
        verifier.verify("down@acme.com").await,
        Err(VerificationError::Status { status: 503 })
    ));
    assert!(matches!(
        verifier.verify("odd@acme.com").await,
        Err(VerificationError::Malformed(_))
    ));
    assert!(matches!(
        verifier.verify("slow@acme.com").await,
        Err(VerificationError::Timeout)
    ));
}

#[tokio::test]
async fn test_full_run_single_verified_contact() {
    let server = MockServer::start().await;
    let config = create_test_config(&server);

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "people": [ann_lee()],
            "pagination": {"total_entries": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(VERIFY_PATH))
        .and(query_param("email", "ann.lee@acme.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "ok"})))
        .expect(1)
        .mount(&server)
        .await;
    mount_verifier_default(&server).await;

    let companies = read_companies("company_web_url\nacme.com\nbeta.io\n".as_bytes())
        .expect("Failed to read companies");
    let assembler = build_assembler(&config);

    let outcome = assembler
        .run(&companies, &["CTO".to_string()], &LogReporter)
        .await;

    assert_eq!(outcome.records.len(), 1);
    let record = &outcome.records[0];
    assert_eq!(record.verified_email.as_deref(), Some("ann.lee@acme.com"));
    assert!(record.is_verified());
    assert_eq!(record.comp_web_url, "acme.com");
    assert_eq!(record.company, "Acme");

    let exported = export_results(outcome.records).expect("Export failed");
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let written = write_exports(&exported, dir.path(), &config.output).expect("Write failed");

    let all = std::fs::read_to_string(&written.all_results).unwrap();
    assert_eq!(all.lines().count(), 2);

    let verified_path = written.verified.expect("Verified file missing");
    assert!(verified_path.ends_with("verified_emails.csv"));
    let verified = std::fs::read_to_string(verified_path).unwrap();
    assert_eq!(verified.lines().count(), 2);
    assert!(verified.contains("ann.lee@acme.com,verified"));
}

#[tokio::test]
async fn test_overlapping_batches_deduplicated() {
    let server = MockServer::start().await;
    let mut config = create_test_config(&server);
    config.search.batch_size = 1;

    // Both single-company batches return the same person
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "people": [ann_lee()],
            "pagination": {"total_entries": 1}
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("email", "ann.lee@acme.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "catch-all"})))
        .mount(&server)
        .await;
    mount_verifier_default(&server).await;

    let assembler = build_assembler(&config);
    let outcome = assembler
        .run(
            &["acme.com".to_string(), "acme.io".to_string()],
            &["CTO".to_string()],
            &LogReporter,
        )
        .await;
    assert_eq!(outcome.records.len(), 2);

    let exported = export_results(outcome.records).expect("Export failed");
    assert_eq!(exported.records.len(), 1);

    let all = String::from_utf8(exported.all_csv).unwrap();
    assert_eq!(all.lines().count(), 2);
    let verified = String::from_utf8(exported.verified_csv.unwrap()).unwrap();
    assert_eq!(verified.lines().count(), 2);
}

#[tokio::test]
async fn test_failed_batch_skipped() {
    let server = MockServer::start().await;
    let mut config = create_test_config(&server);
    config.search.batch_size = 1;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(json!({"q_organization_domains": "broken.com"})))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_partial_json(json!({"q_organization_domains": "acme.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "people": [ann_lee()],
            "pagination": {"total_entries": 1}
        })))
        .mount(&server)
        .await;
    mount_verifier_default(&server).await;

    let assembler = build_assembler(&config);
    let outcome = assembler
        .run(
            &["broken.com".to_string(), "acme.com".to_string()],
            &["CTO".to_string()],
            &LogReporter,
        )
        .await;

    assert_eq!(outcome.batches_total, 2);
    assert_eq!(outcome.failed_batches, vec![0]);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].id.as_deref(), Some("p-ann"));

    // Every candidate was rejected by the default verifier mock
    assert!(!outcome.records[0].is_verified());
    assert_eq!(outcome.verification_attempts, 9);
}

#[tokio::test]
async fn test_verifier_pauses_after_each_attempt() {
    let server = MockServer::start().await;
    let config = create_test_config(&server);

    // A slow failing attempt must still be followed by the full pause
    Mock::given(method("GET"))
        .and(query_param("email", "slow@acme.com"))
        .respond_with(ResponseTemplate::new(503).set_delay(std::time::Duration::from_millis(200)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("email", "next@acme.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "ok"})))
        .mount(&server)
        .await;

    let verifier = MillionVerifierClient::new(
        reqwest::Client::new(),
        &config.verification,
        "verify-key",
        RateGate::from_millis(300),
    );

    assert!(verifier.verify("slow@acme.com").await.is_err());

    let after_first = std::time::Instant::now();
    let outcome = verifier.verify("next@acme.com").await.expect("Verify failed");
    assert!(outcome.accepted);
    assert!(
        after_first.elapsed() >= std::time::Duration::from_millis(290),
        "Second attempt started {:?} after the first finished",
        after_first.elapsed()
    );
}
