mod common;

use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_redirect_to_stored_url() {
    let state = common::create_test_state();
    common::seed_alias(&state, "https://example.com/target", "go").await;

    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/go").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_returns_url_unchanged() {
    let state = common::create_test_state();
    common::seed_alias(&state, "https://Example.com/Some/Path/?q=1#frag", "raw").await;

    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/raw").await;

    // No normalization, no trailing-slash canonicalization
    assert_eq!(
        response.header("location"),
        "https://Example.com/Some/Path/?q=1#frag"
    );
}

#[tokio::test]
async fn test_redirect_unknown_alias_not_found() {
    let state = common::create_test_state();
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/missing").await;

    assert_eq!(response.status_code(), 404);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["alias"], "missing");
}

#[tokio::test]
async fn test_shorten_then_redirect_round_trip() {
    let state = common::create_test_state();
    let server = TestServer::new(common::test_router(state)).unwrap();

    let created = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    created.assert_status_ok();

    let alias = created.json::<serde_json::Value>()["alias"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{alias}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com");
}
