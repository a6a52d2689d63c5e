//! Task endpoint tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::*;

async fn create_task(app: &TestApp, user: &TestUser, application_id: i64, body: Value) -> Value {
    let response = app
        .server
        .post(&format!("/api/applications/{}/tasks/", application_id))
        .authorization_bearer(&user.access)
        .json(&body)
        .await;
    crate::assert_status!(response, StatusCode::CREATED);
    response.json::<Value>()
}

fn titles(body: &[Value]) -> Vec<&str> {
    body.iter().map(|t| t["title"].as_str().unwrap()).collect()
}

#[tokio::test]
async fn test_create_defaults() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let id = create_application_id(&app, &alice).await;

    let task = create_task(&app, &alice, id, json!({ "title": "Follow up" })).await;
    assert_eq!(task["application"], json!(id));
    assert_eq!(task["done"], false);
    assert_eq!(task["due_date"], Value::Null);
    assert!(task["created_at"].is_string());
}

#[tokio::test]
async fn test_list_orders_open_first_then_due_date_nulls_last() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let id = create_application_id(&app, &alice).await;

    create_task(&app, &alice, id, json!({ "title": "undated" })).await;
    create_task(&app, &alice, id, json!({ "title": "late", "due_date": "2026-12-01" })).await;
    create_task(&app, &alice, id, json!({ "title": "finished", "due_date": "2026-01-01", "done": true })).await;
    create_task(&app, &alice, id, json!({ "title": "soon", "due_date": "2026-11-01" })).await;

    let body = app
        .server
        .get(&format!("/api/applications/{}/tasks/", id))
        .authorization_bearer(&alice.access)
        .await
        .json::<Vec<Value>>();
    assert_eq!(titles(&body), vec!["soon", "late", "undated", "finished"]);
}

#[tokio::test]
async fn test_equal_due_dates_list_newest_first() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let id = create_application_id(&app, &alice).await;

    for title in ["first", "second", "third"] {
        create_task(&app, &alice, id, json!({ "title": title, "due_date": "2026-11-01" })).await;
    }

    let body = app
        .server
        .get(&format!("/api/applications/{}/tasks/", id))
        .authorization_bearer(&alice.access)
        .await
        .json::<Vec<Value>>();
    assert_eq!(titles(&body), vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_done_filter() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let id = create_application_id(&app, &alice).await;
    let path = format!("/api/applications/{}/tasks/", id);

    create_task(&app, &alice, id, json!({ "title": "open" })).await;
    create_task(&app, &alice, id, json!({ "title": "closed", "done": true })).await;

    let body = app
        .server
        .get(&path)
        .authorization_bearer(&alice.access)
        .add_query_param("done", "true")
        .await
        .json::<Vec<Value>>();
    assert_eq!(titles(&body), vec!["closed"]);

    let body = app
        .server
        .get(&path)
        .authorization_bearer(&alice.access)
        .add_query_param("done", "False")
        .await
        .json::<Vec<Value>>();
    assert_eq!(titles(&body), vec!["open"]);

    let response = app
        .server
        .get(&path)
        .authorization_bearer(&alice.access)
        .add_query_param("done", "maybe")
        .await;
    crate::assert_status!(response, StatusCode::BAD_REQUEST);
    crate::assert_field_error!(response.json::<Value>(), "done");
}

#[tokio::test]
async fn test_create_under_foreign_application_is_forbidden() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let id = create_application_id(&app, &alice).await;

    let mut bodies = Vec::new();
    for parent in [id.to_string(), "999".to_string(), "abc".to_string()] {
        let response = app
            .server
            .post(&format!("/api/applications/{}/tasks/", parent))
            .authorization_bearer(&bob.access)
            .json(&json!({ "title": "Sneaky" }))
            .await;
        crate::assert_status!(response, StatusCode::FORBIDDEN);
        bodies.push(response.json::<Value>());
    }
    assert_eq!(bodies[1], bodies[0]);
    assert_eq!(bodies[2], bodies[0]);
    assert_eq!(app.count("tasks").await, 0);
}

#[tokio::test]
async fn test_malformed_parent_on_list_is_not_found() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;

    let response = app
        .server
        .get("/api/applications/abc/tasks/")
        .authorization_bearer(&alice.access)
        .await;
    crate::assert_status!(response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mark_done_and_clear_due_date() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let id = create_application_id(&app, &alice).await;
    let task = create_task(&app, &alice, id, json!({ "title": "Prep", "due_date": "2026-11-01" })).await;
    let path = format!("/api/applications/{}/tasks/{}/", id, id_of(&task));

    let response = app
        .server
        .patch(&path)
        .authorization_bearer(&alice.access)
        .json(&json!({ "done": true, "due_date": null, "created_at": "2000-01-01T00:00:00Z" }))
        .await;
    crate::assert_status!(response, StatusCode::OK);

    let body = response.json::<Value>();
    assert_eq!(body["done"], true);
    assert_eq!(body["due_date"], Value::Null);
    assert_eq!(body["title"], "Prep");
    assert_eq!(body["created_at"], task["created_at"]);
}

#[tokio::test]
async fn test_invalid_due_date_is_rejected() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let id = create_application_id(&app, &alice).await;

    let response = app
        .server
        .post(&format!("/api/applications/{}/tasks/", id))
        .authorization_bearer(&alice.access)
        .json(&json!({ "title": "Prep", "due_date": "next tuesday" }))
        .await;
    crate::assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("tasks").await, 0);
}

#[tokio::test]
async fn test_foreign_task_is_not_found() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let id = create_application_id(&app, &alice).await;
    let task = create_task(&app, &alice, id, json!({ "title": "Prep" })).await;
    let path = format!("/api/applications/{}/tasks/{}/", id, id_of(&task));

    let response = app
        .server
        .put(&path)
        .authorization_bearer(&bob.access)
        .json(&json!({ "title": "Hijacked" }))
        .await;
    crate::assert_status!(response, StatusCode::NOT_FOUND);

    let response = app.server.delete(&path).authorization_bearer(&bob.access).await;
    crate::assert_status!(response, StatusCode::NOT_FOUND);

    let response = app.server.delete(&path).authorization_bearer(&alice.access).await;
    crate::assert_status!(response, StatusCode::NO_CONTENT);
    assert_eq!(app.count("tasks").await, 0);
}
