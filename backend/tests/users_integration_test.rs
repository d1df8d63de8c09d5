//! Integration tests for user endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_user_returns_username_and_id() {
    let app = common::TestApp::new();

    let (status, body) = app.post_json("/api/users", &json!({ "username": "fcc" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "fcc");
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_users_includes_every_created_user() {
    let app = common::TestApp::new();

    let first = app.create_user("alice").await;
    let second = app.create_user("bob").await;
    let duplicate = app.create_user("alice").await;

    let (status, body) = app.get_json("/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 3);
    for id in [&first, &second, &duplicate] {
        assert!(users.iter().any(|u| u["id"] == id.as_str()));
    }
    assert_ne!(first, duplicate);
}

#[tokio::test]
async fn test_missing_username_creates_nothing() {
    let app = common::TestApp::new();

    let (status, body) = app.post_json("/api/users", &json!({ "username": "" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Username required" }));

    let (status, body) = app.post("/api/users", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<serde_json::Value>(&body).unwrap()["error"], "Username required");

    let (_, users) = app.get_json("/api/users").await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn test_create_user_from_html_form() {
    let app = common::TestApp::new();

    let (status, body) = app.post_form("/api/users", "username=form+user").await;

    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["username"], "form user");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_and_list_users_with_database() {
    let app = common::TestApp::with_postgres().await;
    app.cleanup().await;

    let id = app.create_user("fcc").await;
    let (status, body) = app.get_json("/api/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "username": "fcc", "id": id }]));

    app.cleanup().await;
}
