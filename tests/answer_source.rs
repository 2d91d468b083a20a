//! Integration tests for the scraped answer source.
//!
//! Uses wiremock for HTTP mocking. Tests cover page parsing over the wire,
//! HTTP failure mapping, and the cache serving repeated requests from one
//! upstream fetch.

use std::fmt::Write;
use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordle_guess_api::answers::{
    AnswerCache, AnswerSource, AnswersError, MIN_ANSWER_COUNT, ScrapedAnswerSource,
};

const ANSWERS_PATH: &str = "/wordle-past-answers";

async fn serve_page(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path(ANSWERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn source_for(server: &MockServer) -> ScrapedAnswerSource {
    ScrapedAnswerSource::new(format!("{}{ANSWERS_PATH}", server.uri()))
        .expect("failed to create source")
}

/// A page whose answer list passes the cache integrity check
fn plausible_page() -> String {
    let mut items = String::from("<li>could</li><li>stare</li>");
    for i in 0..MIN_ANSWER_COUNT {
        write!(items, "<li>w{i:04}</li>").unwrap();
    }
    format!(
        "<html><body>\
         <h2>Past answers by month</h2><ul><li>not these</li></ul>\
         <h2>All Wordle answers</h2><ul>{items}</ul>\
         </body></html>"
    )
}

#[tokio::test]
async fn fetches_and_parses_the_answer_page() {
    let server = MockServer::start().await;
    serve_page(
        &server,
        "<h2>All Wordle answers</h2>\
         <ul><li> COULD </li><li>Stare</li><li>crane</li></ul>"
            .to_string(),
    )
    .await;

    let answers = source_for(&server).fetch().await.unwrap();
    assert_eq!(answers, ["could", "stare", "crane"]);
}

#[tokio::test]
async fn server_error_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ANSWERS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = source_for(&server).fetch().await;
    assert!(matches!(result, Err(AnswersError::Http(_))));
}

#[tokio::test]
async fn unreachable_server_is_http_error() {
    // Nothing listens on this port
    let source = ScrapedAnswerSource::new("http://127.0.0.1:9/none").unwrap();
    let result = source.fetch().await;
    assert!(matches!(result, Err(AnswersError::Http(_))));
}

#[tokio::test]
async fn page_without_answers_heading_is_parse_error() {
    let server = MockServer::start().await;
    serve_page(
        &server,
        "<h2>Unrelated</h2><ul><li>could</li></ul>".to_string(),
    )
    .await;

    let result = source_for(&server).fetch().await;
    assert!(matches!(result, Err(AnswersError::Parse(_))));
}

#[tokio::test]
async fn cache_serves_repeated_requests_from_one_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ANSWERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(plausible_page()))
        .expect(1)
        .mount(&server)
        .await;

    let cache = AnswerCache::new(Arc::new(source_for(&server)));

    let first = cache.get().await.unwrap();
    let second = cache.get().await.unwrap();

    assert!(first.contains("could"));
    assert!(first.contains("stare"));
    assert!(!first.contains("not these"));
    assert_eq!(first.len(), second.len());
}

#[tokio::test]
async fn implausibly_small_page_is_rejected_and_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ANSWERS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<h2>All Wordle answers</h2><ul><li>could</li></ul>"),
        )
        .expect(2)
        .mount(&server)
        .await;

    let cache = AnswerCache::new(Arc::new(source_for(&server)));

    // Each call sees the integrity failure and the next one retries
    assert!(matches!(cache.get().await, Err(AnswersError::Integrity(_))));
    assert!(matches!(cache.get().await, Err(AnswersError::Integrity(_))));
}
