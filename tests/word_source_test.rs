//! Tests for the HTTP word source against a local mock endpoint.

mod common;

use common::MockWordServer;
use showcase::{HttpWordSource, WordFetchErrorKind, WordSource};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_millis(500);

async fn fetch(server: &MockWordServer, path: &str) -> Result<String, WordFetchErrorKind> {
    let source = HttpWordSource::new(server.url(path), TIMEOUT).expect("Failed to build source");
    source
        .fetch_word()
        .await
        .map(|word| word.as_str().to_string())
        .map_err(|e| e.kind)
}

#[tokio::test]
async fn test_first_element_is_the_word() {
    let server = MockWordServer::start().await;
    assert_eq!(fetch(&server, "/word").await, Ok("lantern".to_string()));
}

#[tokio::test]
async fn test_empty_array() {
    let server = MockWordServer::start().await;
    assert_eq!(fetch(&server, "/empty").await, Err(WordFetchErrorKind::Empty));
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockWordServer::start().await;
    assert_eq!(fetch(&server, "/broken").await, Err(WordFetchErrorKind::Parse));
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockWordServer::start().await;
    assert_eq!(fetch(&server, "/missing").await, Err(WordFetchErrorKind::Status));
}

#[tokio::test]
async fn test_unusable_word() {
    let server = MockWordServer::start().await;
    assert_eq!(fetch(&server, "/phrase").await, Err(WordFetchErrorKind::InvalidWord));
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let server = MockWordServer::start().await;
    assert_eq!(fetch(&server, "/slow").await, Err(WordFetchErrorKind::Timeout));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    let source = HttpWordSource::new("http://127.0.0.1:9/word", TIMEOUT).expect("Failed to build source");
    let err = source.fetch_word().await.expect_err("Nothing listens on port 9");
    assert!(matches!(
        err.kind,
        WordFetchErrorKind::Request | WordFetchErrorKind::Timeout
    ));
}
