//! Authentication endpoint tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::*;

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/auth/register/")
        .json(&json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "correct-horse"
        }))
        .await;
    crate::assert_status!(response, StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("access").is_none());

    let response = app
        .server
        .post("/api/auth/login/")
        .json(&json!({ "username": "alice", "password": "correct-horse" }))
        .await;
    crate::assert_status!(response, StatusCode::OK);
    let tokens = response.json::<Value>();
    let access = tokens["access"].as_str().unwrap();
    assert!(tokens["refresh"].is_string());

    let response = app.server.get("/api/auth/me/").authorization_bearer(access).await;
    crate::assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<Value>()["username"], "alice");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = TestApp::new().await;
    create_test_user(&app, "alice").await;

    let response = app
        .server
        .post("/api/auth/register/")
        .json(&json!({ "username": "alice", "password": "another-password" }))
        .await;
    crate::assert_status!(response, StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"],
        "A user with that username already exists."
    );
}

#[tokio::test]
async fn test_register_short_password() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/auth/register/")
        .json(&json!({ "username": "alice", "password": "short" }))
        .await;
    crate::assert_status!(response, StatusCode::BAD_REQUEST);
    crate::assert_field_error!(response.json::<Value>(), "password");
    assert_eq!(app.count("users").await, 0);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    create_test_user(&app, "alice").await;

    let response = app
        .server
        .post("/api/auth/login/")
        .json(&json!({ "username": "alice", "password": "wrong-password" }))
        .await;
    crate::assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["error"],
        "No active account found with the given credentials"
    );
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/auth/login/")
        .json(&json!({ "username": "nobody", "password": TEST_PASSWORD }))
        .await;
    crate::assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["error"],
        "No active account found with the given credentials"
    );
}

#[tokio::test]
async fn test_refresh_issues_working_access_token() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "alice").await;

    let response = app
        .server
        .post("/api/auth/refresh/")
        .json(&json!({ "refresh": user.refresh }))
        .await;
    crate::assert_status!(response, StatusCode::OK);
    let access = response.json::<Value>()["access"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app.server.get("/api/applications/").authorization_bearer(&access).await;
    crate::assert_status!(response, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "alice").await;

    let response = app
        .server
        .post("/api/auth/refresh/")
        .json(&json!({ "refresh": user.access }))
        .await;
    crate::assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_is_not_a_bearer_token() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "alice").await;

    let response = app
        .server
        .get("/api/applications/")
        .authorization_bearer(&user.refresh)
        .await;
    crate::assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_credentials() {
    let app = TestApp::new().await;

    for path in [
        "/api/auth/me/",
        "/api/applications/",
        "/api/applications/1/",
        "/api/applications/1/contacts/",
        "/api/applications/1/tasks/",
    ] {
        let response = app.server.get(path).await;
        crate::assert_status!(response, StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.json::<Value>()["error"],
            "Authentication credentials were not provided."
        );
    }
}

#[tokio::test]
async fn test_garbage_token() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get("/api/applications/")
        .authorization_bearer("not-a-jwt")
        .await;
    crate::assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["error"],
        "Given token not valid for any token type"
    );
}

#[tokio::test]
async fn test_token_for_deleted_user() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, "alice").await;

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user.id)
        .execute(&app.pool)
        .await
        .unwrap();

    let response = app
        .server
        .get("/api/applications/")
        .authorization_bearer(&user.access)
        .await;
    crate::assert_status!(response, StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/api/auth/refresh/")
        .json(&json!({ "refresh": user.refresh }))
        .await;
    crate::assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/nowhere/").await;
    crate::assert_status!(response, StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["status"], 404);
}
