//! Contact endpoint tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::*;

async fn create_contact(app: &TestApp, user: &TestUser, application_id: i64, name: &str) -> Value {
    let response = app
        .server
        .post(&format!("/api/applications/{}/contacts/", application_id))
        .authorization_bearer(&user.access)
        .json(&json!({ "name": name, "email": "", "role": "Recruiter" }))
        .await;
    crate::assert_status!(response, StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn test_create_links_route_application() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let first = create_application_id(&app, &alice).await;
    let second = create_application_id(&app, &alice).await;

    let response = app
        .server
        .post(&format!("/api/applications/{}/contacts/", first))
        .authorization_bearer(&alice.access)
        .json(&json!({ "name": "Jane", "application": second }))
        .await;
    crate::assert_status!(response, StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["application"], json!(first));
}

#[tokio::test]
async fn test_create_under_foreign_application_is_forbidden() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let id = create_application_id(&app, &alice).await;

    let response = app
        .server
        .post(&format!("/api/applications/{}/contacts/", id))
        .authorization_bearer(&bob.access)
        .json(&json!({ "name": "Mallory" }))
        .await;
    crate::assert_status!(response, StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<Value>()["error"],
        "You do not have permission to perform this action."
    );
    assert_eq!(app.count("contacts").await, 0);
}

#[tokio::test]
async fn test_create_under_missing_or_malformed_application_is_forbidden() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let id = create_application_id(&app, &bob).await;

    let foreign = app
        .server
        .post(&format!("/api/applications/{}/contacts/", id))
        .authorization_bearer(&alice.access)
        .json(&json!({ "name": "Jane" }))
        .await;
    crate::assert_status!(foreign, StatusCode::FORBIDDEN);
    let expected = foreign.json::<Value>();

    for parent in ["999", "abc"] {
        let response = app
            .server
            .post(&format!("/api/applications/{}/contacts/", parent))
            .authorization_bearer(&alice.access)
            .json(&json!({ "name": "Jane" }))
            .await;
        crate::assert_status!(response, StatusCode::FORBIDDEN);
        assert_eq!(response.json::<Value>(), expected, "parent {}", parent);
    }
    assert_eq!(app.count("contacts").await, 0);
}

#[tokio::test]
async fn test_parent_is_checked_before_body() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let id = create_application_id(&app, &alice).await;

    let response = app
        .server
        .post(&format!("/api/applications/{}/contacts/", id))
        .authorization_bearer(&bob.access)
        .json(&json!({ "email": "not-an-email" }))
        .await;
    crate::assert_status!(response, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_validates_fields() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let id = create_application_id(&app, &alice).await;

    let response = app
        .server
        .post(&format!("/api/applications/{}/contacts/", id))
        .authorization_bearer(&alice.access)
        .json(&json!({ "email": "jane@" }))
        .await;
    crate::assert_status!(response, StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    crate::assert_field_error!(body, "name");
    crate::assert_field_error!(body, "email");
}

#[tokio::test]
async fn test_list_and_search() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let id = create_application_id(&app, &alice).await;
    let other = create_application_id(&app, &alice).await;

    create_contact(&app, &alice, id, "Zoe Hiring").await;
    create_contact(&app, &alice, id, "Adam Engineer").await;
    create_contact(&app, &alice, other, "Elsewhere").await;

    let path = format!("/api/applications/{}/contacts/", id);
    let body = app
        .server
        .get(&path)
        .authorization_bearer(&alice.access)
        .await
        .json::<Vec<Value>>();
    let names: Vec<_> = body.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Zoe Hiring", "Adam Engineer"]);

    let body = app
        .server
        .get(&path)
        .authorization_bearer(&alice.access)
        .add_query_param("search", "zoe")
        .await
        .json::<Vec<Value>>();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Zoe Hiring");
}

#[tokio::test]
async fn test_list_under_foreign_application_is_empty() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let id = create_application_id(&app, &alice).await;
    create_contact(&app, &alice, id, "Jane").await;

    let response = app
        .server
        .get(&format!("/api/applications/{}/contacts/", id))
        .authorization_bearer(&bob.access)
        .await;
    crate::assert_status!(response, StatusCode::OK);
    assert!(response.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_contact_is_only_reachable_through_its_application() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let id = create_application_id(&app, &alice).await;
    let other = create_application_id(&app, &alice).await;
    let contact = id_of(&create_contact(&app, &alice, id, "Jane").await);

    let response = app
        .server
        .get(&format!("/api/applications/{}/contacts/{}/", other, contact))
        .authorization_bearer(&alice.access)
        .await;
    crate::assert_status!(response, StatusCode::NOT_FOUND);

    let response = app
        .server
        .get(&format!("/api/applications/{}/contacts/{}/", id, contact))
        .authorization_bearer(&alice.access)
        .await;
    crate::assert_status!(response, StatusCode::OK);
}

#[tokio::test]
async fn test_foreign_contact_is_not_found() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let id = create_application_id(&app, &alice).await;
    let contact = id_of(&create_contact(&app, &alice, id, "Jane").await);
    let path = format!("/api/applications/{}/contacts/{}/", id, contact);

    let response = app.server.get(&path).authorization_bearer(&bob.access).await;
    crate::assert_status!(response, StatusCode::NOT_FOUND);

    let response = app
        .server
        .patch(&path)
        .authorization_bearer(&bob.access)
        .json(&json!({ "name": "Mallory" }))
        .await;
    crate::assert_status!(response, StatusCode::NOT_FOUND);

    let response = app.server.delete(&path).authorization_bearer(&bob.access).await;
    crate::assert_status!(response, StatusCode::NOT_FOUND);
    assert_eq!(app.count("contacts").await, 1);
}

#[tokio::test]
async fn test_update_and_delete() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let id = create_application_id(&app, &alice).await;
    let contact = id_of(&create_contact(&app, &alice, id, "Jane").await);
    let path = format!("/api/applications/{}/contacts/{}/", id, contact);

    let response = app
        .server
        .patch(&path)
        .authorization_bearer(&alice.access)
        .json(&json!({ "phone": "555-0100" }))
        .await;
    crate::assert_status!(response, StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["phone"], "555-0100");
    assert_eq!(body["role"], "Recruiter");

    let response = app
        .server
        .put(&path)
        .authorization_bearer(&alice.access)
        .json(&json!({ "name": "Jane Doe" }))
        .await;
    crate::assert_status!(response, StatusCode::OK);
    assert_eq!(response.json::<Value>()["name"], "Jane Doe");

    let response = app.server.delete(&path).authorization_bearer(&alice.access).await;
    crate::assert_status!(response, StatusCode::NO_CONTENT);
    assert_eq!(app.count("contacts").await, 0);
}
