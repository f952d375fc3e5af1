//! Integration tests using a mock search endpoint
//!
//! Tests the full flow: HTTP client → search client → walker → probe → output

use futures::StreamExt;
use pretty_assertions::assert_eq;
use search_probe::auth::AuthConfig;
use search_probe::http::{HttpClient, HttpClientConfig};
use search_probe::output::{render, OutputFormat};
use search_probe::probe::{initial_params, Probe, ProbeOutcome};
use search_probe::search::{collect_ids, walk_ids, SearchParams, TwitterClient, SEARCH_PATH};
use search_probe::types::ResultType;
use search_probe::Error;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page(ids: &[i64]) -> Value {
    let statuses: Vec<Value> = ids
        .iter()
        .map(|id| json!({"id": id, "text": format!("tweet {id}")}))
        .collect();
    json!({
        "statuses": statuses,
        "search_metadata": {"count": ids.len(), "query": "rust"}
    })
}

fn client(server: &MockServer, auth: AuthConfig) -> TwitterClient {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .max_retries(0)
        .no_rate_limit()
        .build();
    TwitterClient::new(HttpClient::with_auth(config, auth).unwrap())
}

/// Mount a page served when `max_id` has the given value
async fn mount_page_at(server: &MockServer, max_id: &str, ids: &[i64]) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("max_id", max_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(ids)))
        .with_priority(2)
        .mount(server)
        .await;
}

/// Mount the page served when no more specific mock matches
async fn mount_first_page(server: &MockServer, ids: &[i64]) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(ids)))
        .with_priority(10)
        .mount(server)
        .await;
}

// ============================================================================
// Walker over HTTP
// ============================================================================

#[tokio::test]
async fn test_walk_follows_max_id_cursor() {
    let server = MockServer::start().await;

    mount_first_page(&server, &[105, 103]).await;
    mount_page_at(&server, "102", &[101]).await;
    mount_page_at(&server, "100", &[]).await;

    let client = client(&server, AuthConfig::bearer("app-token"));
    let params = SearchParams::new("rust").with("count", 2);

    let ids = collect_ids(&client, 0, params).await.unwrap();

    assert_eq!(ids, vec![105, 103, 101]);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_walk_sends_query_and_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", "#rustlang"))
        .and(query_param("result_type", "recent"))
        .and(query_param("count", "3"))
        .and(header("Authorization", "Bearer app-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&[9, 8, 7])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, AuthConfig::bearer("app-token"));
    let params = initial_params("#rustlang", ResultType::Recent, 3);

    let ids = collect_ids(&client, 3, params).await.unwrap();

    assert_eq!(ids, vec![9, 8, 7]);
}

#[tokio::test]
async fn test_walk_propagates_http_error() {
    let server = MockServer::start().await;

    mount_first_page(&server, &[50, 40]).await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("max_id", "39"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{"code": 89, "message": "Invalid or expired token."}]
        })))
        .with_priority(1)
        .mount(&server)
        .await;

    let client = client(&server, AuthConfig::bearer("stale"));
    let params = SearchParams::new("rust");
    let items: Vec<_> = walk_ids(&client, 0, params).collect().await;

    assert_eq!(items.len(), 3);
    assert_eq!(*items[0].as_ref().unwrap(), 50);
    assert_eq!(*items[1].as_ref().unwrap(), 40);
    match &items[2] {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(*status, 401);
            assert!(body.contains("Invalid or expired token."));
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_walk_rejects_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = client(&server, AuthConfig::None);
    let result = collect_ids(&client, 0, SearchParams::new("rust")).await;

    assert!(matches!(result, Err(Error::JsonParse(_))));
}

// ============================================================================
// Full probe
// ============================================================================

#[tokio::test]
async fn test_probe_end_to_end() {
    let server = MockServer::start().await;

    // Cursor-free search
    mount_first_page(&server, &[105, 103]).await;
    mount_page_at(&server, "102", &[101]).await;
    mount_page_at(&server, "100", &[]).await;

    // max_id=105 leaks an id the cursor-free search never returned
    mount_page_at(&server, "105", &[105, 104, 103]).await;

    // max_id=105 with since_id=100
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("max_id", "105"))
        .and(query_param("since_id", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&[105, 103])))
        .with_priority(1)
        .mount(&server)
        .await;

    let client = client(&server, AuthConfig::oauth1("ck", "cs", "at", "ats"));
    let outcome = Probe::new(&client, 0)
        .run(initial_params("rust", ResultType::Recent, 0))
        .await
        .unwrap();

    let ProbeOutcome::Report(report) = outcome else {
        panic!("Expected a report");
    };

    assert_eq!(report.variants[0].ids, vec![105, 103, 101]);
    assert_eq!(report.variants[1].ids, vec![105, 104, 103, 101]);
    assert_eq!(report.variants[2].ids, vec![105, 103, 101]);
    assert!(!report.is_consistent());
    assert_eq!(report.missing_from(0), vec![104]);

    let table = render(&report, OutputFormat::Table).unwrap();
    let body: Vec<&str> = table.lines().skip(7).collect();
    assert_eq!(
        body,
        vec![
            "| 105       | x                   | x                   | x                   |",
            "| 104       |                     | x                   |                     |",
            "| 103       | x                   | x                   | x                   |",
            "| 101       | x                   | x                   | x                   |",
            "+-----------+---------------------+---------------------+---------------------+",
        ]
    );
}

#[tokio::test]
async fn test_probe_no_results_over_http() {
    let server = MockServer::start().await;
    mount_first_page(&server, &[]).await;

    let client = client(&server, AuthConfig::bearer("app-token"));
    let outcome = Probe::new(&client, 50)
        .run(initial_params("zzzz", ResultType::Recent, 50))
        .await
        .unwrap();

    assert!(matches!(outcome, ProbeOutcome::NoResults { .. }));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
