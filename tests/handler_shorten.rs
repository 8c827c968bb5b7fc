mod common;

use axum::{Router, routing::post};
use axum::http::StatusCode;
use axum_test::TestServer;
use linkstore::api::handlers::shorten_handler;

fn test_server() -> (TestServer, linkstore::AppState) {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state.clone());

    (TestServer::new(app).unwrap(), state)
}

#[tokio::test]
async fn test_shorten_generates_token() {
    let (server, _state) = test_server();

    let response = server
        .post("/shorten")
        .form(&[("longURL", "https://example.com")])
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let token = json["shortURL"].as_str().unwrap();
    assert_eq!(token.len(), common::TOKEN_LENGTH);
    assert!(token.chars().all(|c| c.is_ascii_alphabetic()));
}

#[tokio::test]
async fn test_shorten_twice_yields_distinct_tokens() {
    let (server, _state) = test_server();

    let first = server
        .post("/shorten")
        .form(&[("longURL", "https://example.com")])
        .await;
    let second = server
        .post("/shorten")
        .form(&[("longURL", "https://example.com")])
        .await;

    first.assert_status_ok();
    second.assert_status_ok();

    let token1 = first.json::<serde_json::Value>()["shortURL"]
        .as_str()
        .unwrap()
        .to_string();
    let token2 = second.json::<serde_json::Value>()["shortURL"]
        .as_str()
        .unwrap()
        .to_string();

    assert_ne!(token1, token2);
}

#[tokio::test]
async fn test_shorten_with_custom_name() {
    let (server, _state) = test_server();

    let response = server
        .post("/shorten")
        .form(&[("longURL", "https://a.com"), ("customName", "docs")])
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortURL"], "docs");
}

#[tokio::test]
async fn test_shorten_custom_name_conflict() {
    let (server, state) = test_server();

    server
        .post("/shorten")
        .form(&[("longURL", "https://a.com"), ("customName", "docs")])
        .await
        .assert_status_ok();

    let response = server
        .post("/shorten")
        .form(&[("longURL", "https://b.com"), ("customName", "docs")])
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "alias_conflict");

    // The losing request must not have replaced the stored target.
    let link = state.link_service.resolve("docs").await.unwrap();
    assert_eq!(link.target_url, "https://a.com");
}

#[tokio::test]
async fn test_shorten_empty_custom_name_generates_token() {
    let (server, _state) = test_server();

    let response = server
        .post("/shorten")
        .form(&[("longURL", "https://a.com"), ("customName", "")])
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let token = json["shortURL"].as_str().unwrap();
    assert_eq!(token.len(), common::TOKEN_LENGTH);
}

#[tokio::test]
async fn test_shorten_empty_url_rejected() {
    let (server, _state) = test_server();

    let response = server
        .post("/shorten")
        .form(&[("longURL", ""), ("customName", "docs")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "empty_target");
}

#[tokio::test]
async fn test_shorten_missing_url_rejected() {
    let (server, _state) = test_server();

    let response = server.post("/shorten").form(&[("customName", "docs")]).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_round_trip() {
    let (server, state) = test_server();

    let response = server
        .post("/shorten")
        .form(&[("longURL", "https://example.com/some/deep/path?q=1")])
        .await;

    response.assert_status_ok();
    let token = response.json::<serde_json::Value>()["shortURL"]
        .as_str()
        .unwrap()
        .to_string();

    let link = state.link_service.resolve(&token).await.unwrap();
    assert_eq!(link.target_url, "https://example.com/some/deep/path?q=1");
}
