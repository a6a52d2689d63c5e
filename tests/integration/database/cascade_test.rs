//! Cascading delete tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::*;

async fn seed_children(app: &TestApp, user: &TestUser, application_id: i64) {
    for name in ["Jane", "Raj"] {
        let response = app
            .server
            .post(&format!("/api/applications/{}/contacts/", application_id))
            .authorization_bearer(&user.access)
            .json(&json!({ "name": name }))
            .await;
        crate::assert_status!(response, StatusCode::CREATED);
    }
    let response = app
        .server
        .post(&format!("/api/applications/{}/tasks/", application_id))
        .authorization_bearer(&user.access)
        .json(&json!({ "title": "Follow up" }))
        .await;
    crate::assert_status!(response, StatusCode::CREATED);
}

#[tokio::test]
async fn test_deleting_application_removes_children() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let doomed = create_application_id(&app, &alice).await;
    let kept = create_application_id(&app, &alice).await;
    seed_children(&app, &alice, doomed).await;
    seed_children(&app, &alice, kept).await;

    let response = app
        .server
        .delete(&format!("/api/applications/{}/", doomed))
        .authorization_bearer(&alice.access)
        .await;
    crate::assert_status!(response, StatusCode::NO_CONTENT);

    assert_eq!(app.count("applications").await, 1);
    assert_eq!(app.count("contacts").await, 2);
    assert_eq!(app.count("tasks").await, 1);
}

#[tokio::test]
async fn test_deleting_user_removes_everything_they_own() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice").await;
    let bob = create_test_user(&app, "bob").await;
    let mine = create_application_id(&app, &alice).await;
    let theirs = create_application_id(&app, &bob).await;
    seed_children(&app, &alice, mine).await;
    seed_children(&app, &bob, theirs).await;

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(alice.id)
        .execute(&app.pool)
        .await
        .unwrap();

    assert_eq!(app.count("users").await, 1);
    assert_eq!(app.count("applications").await, 1);
    assert_eq!(app.count("contacts").await, 2);
    assert_eq!(app.count("tasks").await, 1);
}
