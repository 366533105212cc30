//! Client integration tests
//!
//! Run against an in-memory transport that serves canned bodies keyed by
//! request URL and records every request made.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use openarch_client::ArchiveClient;
use openarch_core::{
    vocab, ApiConfig, ArchiveError, FetchOutcome, HttpTransport, Result, Term, Triple,
};
use openarch_extractor::{to_graph, to_row_with_url, GraphExtractor};
use serde_json::{json, Value};

const SEARCH: &str = "https://api.openarch.nl/1.0/records/search.json?";
const SHOW: &str = "https://api.openarch.nl/1.0/records/show.json?";

#[derive(Default)]
struct MockTransport {
    responses: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    fn respond(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), body.into());
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| ArchiveError::Network(format!("connection refused: {url}")))
    }
}

fn config(page_size: usize) -> ApiConfig {
    ApiConfig {
        page_size,
        request_delay_ms: 0,
        ..ApiConfig::default()
    }
}

fn search_url(start: usize, page_size: usize) -> String {
    format!(
        "{SEARCH}name=Jansen+1850-1900&relationtype=Bruid&lang=nl&number_show={page_size}&start={start}"
    )
}

fn search_page(found: Value, urls: &[&str]) -> String {
    let docs: Vec<Value> = urls.iter().map(|u| json!({"url": u})).collect();
    json!({"response": {"number_found": found, "docs": docs}}).to_string()
}

fn record_urls(range: std::ops::Range<usize>) -> Vec<String> {
    range
        .map(|i| format!("https://www.openarch.nl/hua:{i}"))
        .collect()
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_zero_results_terminates() {
    let transport = MockTransport::default().respond(search_url(0, 25), search_page(json!(0), &[]));
    let client = ArchiveClient::with_transport(transport, config(25));

    let urls = client.search("Jansen", 1900, 1850, "Bruid").await.unwrap();

    assert!(urls.is_empty());
    assert_eq!(client_requests(&client).len(), 1);
}

#[tokio::test]
async fn test_search_collects_all_pages() {
    let all = record_urls(0..5);
    let refs: Vec<&str> = all.iter().map(String::as_str).collect();

    let transport = MockTransport::default()
        .respond(search_url(0, 2), search_page(json!(5), &refs[0..2]))
        .respond(search_url(2, 2), search_page(json!("5"), &refs[2..4]))
        .respond(search_url(4, 2), search_page(json!(5), &refs[4..5]));
    let client = ArchiveClient::with_transport(transport, config(2));

    let urls = client.search("Jansen", 1900, 1850, "Bruid").await.unwrap();

    assert_eq!(urls, all);
    assert_eq!(client_requests(&client).len(), 3);
}

#[tokio::test]
async fn test_search_exact_multiple_of_page_size() {
    let all = record_urls(0..4);
    let refs: Vec<&str> = all.iter().map(String::as_str).collect();

    let transport = MockTransport::default()
        .respond(search_url(0, 2), search_page(json!(4), &refs[0..2]))
        .respond(search_url(2, 2), search_page(json!(4), &refs[2..4]));
    let client = ArchiveClient::with_transport(transport, config(2));

    let urls = client.search("Jansen", 1900, 1850, "Bruid").await.unwrap();

    assert_eq!(urls.len(), 4);
    // No trailing request for an empty page
    assert_eq!(client_requests(&client).len(), 2);
}

#[tokio::test]
async fn test_search_stops_on_empty_page() {
    let transport = MockTransport::default()
        .respond(search_url(0, 2), search_page(json!(10), &["https://www.openarch.nl/hua:0"]))
        .respond(search_url(2, 2), search_page(json!(10), &[]));
    let client = ArchiveClient::with_transport(transport, config(2));

    let urls = client.search("Jansen", 1900, 1850, "Bruid").await.unwrap();

    assert_eq!(urls, vec!["https://www.openarch.nl/hua:0".to_string()]);
    assert_eq!(client_requests(&client).len(), 2);
}

#[tokio::test]
async fn test_search_zero_page_size_rejected() {
    let transport = MockTransport::default().respond(
        search_url(0, 0),
        search_page(json!(3), &["https://www.openarch.nl/hua:0"]),
    );
    let client = ArchiveClient::with_transport(transport, config(0));

    let err = client
        .search("Jansen", 1900, 1850, "Bruid")
        .await
        .unwrap_err();
    assert!(matches!(err, ArchiveError::Config(_)));
    assert!(client_requests(&client).is_empty());
}

#[tokio::test]
async fn test_search_network_error_propagates() {
    let client = ArchiveClient::with_transport(MockTransport::default(), config(25));

    let err = client
        .search("Jansen", 1900, 1850, "Bruid")
        .await
        .unwrap_err();
    assert!(matches!(err, ArchiveError::Network(_)));
}

#[tokio::test]
async fn test_search_invalid_body() {
    let transport = MockTransport::default().respond(search_url(0, 25), "<html>busy</html>");
    let client = ArchiveClient::with_transport(transport, config(25));

    let err = client
        .search("Jansen", 1900, 1850, "Bruid")
        .await
        .unwrap_err();
    assert!(matches!(err, ArchiveError::Decode(_)));
}

// =============================================================================
// Fetch
// =============================================================================

fn document() -> Value {
    json!([{
        "a2a_Event": {
            "a2a_EventType": {"a2a_EventType": "Geboorte"},
            "a2a_EventPlace": {"a2a_Place": {"a2a_Place": "Utrecht"}},
            "a2a_EventDate": {
                "a2a_Year": {"a2a_Year": "2021"},
                "a2a_Month": {"a2a_Month": "3"},
                "a2a_Day": {"a2a_Day": "7"}
            }
        },
        "a2a_Person": {
            "pid": "Person1",
            "a2a_PersonName": {
                "a2a_PersonNameFirstName": {"a2a_PersonNameFirstName": "Cornelia"},
                "a2a_PersonNameLastName": {"a2a_PersonNameLastName": "de Wit"}
            }
        },
        "a2a_RelationEP": {
            "a2a_PersonKeyRef": {"a2a_PersonKeyRef": "Person1"},
            "a2a_RelationType": {"a2a_RelationType": "Moeder"}
        }
    }])
}

#[tokio::test]
async fn test_fetch_document_and_extract() {
    let record = "https://www.openarch.nl/hua:ABC-123";
    let transport = MockTransport::default().respond(
        format!("{SHOW}archive=hua&identifier=ABC-123"),
        document().to_string(),
    );
    let client = ArchiveClient::with_transport(transport, config(25));

    let doc = client
        .fetch(record)
        .await
        .unwrap()
        .document()
        .expect("document");

    let row = to_row_with_url(&doc, record).unwrap();
    assert_eq!(row.get("gebeurtenis"), Some("Geboorte"));
    assert_eq!(row.get("voornaamMoeder"), Some("Cornelia"));
    assert_eq!(row.get("url"), Some(record));

    let graph = to_graph(&doc, record).unwrap();
    let mother = format!("{record}#Person1");
    assert_eq!(
        graph
            .matching(
                Some(format!("{record}#Geboorte").as_str()),
                Some(vocab::CIV_MOTHER),
                None
            )
            .len(),
        1
    );
    let given = graph.objects(&mother, vocab::SCHEMA_GIVEN_NAME);
    assert_eq!(given[0].value(), "kornelia");
}

#[tokio::test]
async fn test_fetch_landing_page() {
    let transport = MockTransport::default().respond(
        format!("{SHOW}archive=hua&identifier=ABC-123"),
        document().to_string(),
    );
    let client = ArchiveClient::with_transport(transport, config(25));

    let outcome = client
        .fetch("https://www.openarch.nl/show.php?archive=hua&identifier=ABC-123")
        .await
        .unwrap();
    assert!(matches!(outcome, FetchOutcome::Document(_)));
}

#[tokio::test]
async fn test_fetch_api_error_payload() {
    let payload = json!({"error_description": "Invalid identifier"});
    let transport = MockTransport::default().respond(
        format!("{SHOW}archive=hua&identifier=missing"),
        payload.to_string(),
    );
    let client = ArchiveClient::with_transport(transport, config(25));

    match client.fetch("hua:missing").await.unwrap() {
        FetchOutcome::ApiError(err) => {
            assert_eq!(err.description, payload);
            assert_eq!(err.message(), Some("Invalid identifier"));
        }
        FetchOutcome::Document(_) => panic!("expected an API error payload"),
    }
}

#[tokio::test]
async fn test_fetch_empty_body() {
    let transport = MockTransport::default()
        .respond(format!("{SHOW}archive=hua&identifier=1"), "  ");
    let client = ArchiveClient::with_transport(transport, config(25));

    let err = client.fetch("hua:1").await.unwrap_err();
    assert!(matches!(err, ArchiveError::EmptyResult(_)));
}

#[tokio::test]
async fn test_fetch_empty_url_makes_no_request() {
    let client = ArchiveClient::with_transport(MockTransport::default(), config(25));

    let err = client.fetch("").await.unwrap_err();
    assert!(matches!(err, ArchiveError::EmptyUrl));
    assert!(client_requests(&client).is_empty());
}

// =============================================================================
// Harvest
// =============================================================================

fn show_url(identifier: &str) -> String {
    format!("{SHOW}archive=hua&identifier={identifier}")
}

fn harvest_transport(urls: &[&str]) -> MockTransport {
    MockTransport::default().respond(search_url(0, 25), search_page(json!(urls.len()), urls))
}

#[tokio::test]
async fn test_harvest_merges_and_skips() {
    let urls = [
        "https://www.openarch.nl/hua:1",
        "https://www.openarch.nl/hua:2",
        "https://www.openarch.nl/hua:3",
        "https://www.openarch.nl/hua:4",
        "https://www.openarch.nl/hua:5",
    ];
    let transport = harvest_transport(&urls)
        .respond(show_url("1"), document().to_string())
        .respond(
            show_url("2"),
            json!({"error_description": "Invalid identifier"}).to_string(),
        )
        .respond(show_url("3"), "")
        // Person without pid cannot be mapped
        .respond(
            show_url("4"),
            json!([{"a2a_Person": {"a2a_PersonName": {}}}]).to_string(),
        )
        .respond(show_url("5"), document().to_string());
    let client = ArchiveClient::with_transport(transport, config(25));

    let report = client
        .harvest(&GraphExtractor::default(), "Jansen", 1900, 1850, "Bruid")
        .await
        .unwrap();

    assert_eq!(report.records, 2);
    let skipped: Vec<&str> = report.skipped.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(skipped, vec![urls[1], urls[2], urls[3]]);
    assert_eq!(report.skipped[0].reason, "Invalid identifier");

    for url in [urls[0], urls[4]] {
        let mother = Triple::new(
            format!("{url}#Geboorte"),
            vocab::CIV_MOTHER,
            Term::iri(format!("{url}#Person1")),
        );
        assert!(report.graph.contains(&mother), "{url}");
    }
    assert_eq!(report.graph.namespace("civ"), Some(vocab::CIV_NS));
    // search + one fetch per hit
    assert_eq!(client_requests(&client).len(), 6);
}

#[tokio::test]
async fn test_harvest_network_error_aborts() {
    let urls = ["https://www.openarch.nl/hua:1", "https://www.openarch.nl/hua:2"];
    // No response for the second record: the transport fails with Network
    let transport = harvest_transport(&urls).respond(show_url("1"), document().to_string());
    let client = ArchiveClient::with_transport(transport, config(25));

    let err = client
        .harvest(&GraphExtractor::default(), "Jansen", 1900, 1850, "Bruid")
        .await
        .unwrap_err();
    assert!(matches!(err, ArchiveError::Network(_)));
}

#[tokio::test]
async fn test_harvest_without_hits() {
    let transport = harvest_transport(&[]);
    let client = ArchiveClient::with_transport(transport, config(25));

    let report = client
        .harvest(&GraphExtractor::default(), "Jansen", 1900, 1850, "Bruid")
        .await
        .unwrap();

    assert_eq!(report.records, 0);
    assert!(report.skipped.is_empty());
    assert!(report.graph.is_empty());
}

fn client_requests(client: &ArchiveClient<MockTransport>) -> Vec<String> {
    client.transport().requests()
}
