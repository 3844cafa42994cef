use serde_json::{Value, json};
use uuid::Uuid;

use crate::helpers::{TestApp, error_message};

fn update_body(username: &str, email: &str) -> Value {
    json!({
        "name": "Alice Liddell",
        "username": username,
        "email": email,
        "phoneNumber": "0123456789",
    })
}

#[tokio::test]
async fn current_user_requires_a_token() {
    let app = TestApp::new().await;

    let response = app.get_current_user(None).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "User not authenticated");
}

#[tokio::test]
async fn current_user_rejects_an_invalid_token() {
    let app = TestApp::new().await;

    let response = app.get_current_user(Some("not.a.token")).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn current_user_returns_the_session_profile() {
    let app = TestApp::new().await;
    let (uuid, token) = app.signed_in("alice").await;

    let response = app.get_current_user(Some(&token)).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["uuid"], uuid.as_str());
    assert_eq!(body["role"], "customer");
}

#[tokio::test]
async fn get_user_returns_profile_or_404() {
    let app = TestApp::new().await;
    let (uuid, token) = app.signed_in("alice").await;

    let response = app.get_user(&uuid, &token).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], "alice");

    let response = app.get_user(&Uuid::new_v4().to_string(), &token).await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_message(response).await, "User not found");
}

#[tokio::test]
async fn update_changes_profile_and_keeps_password() {
    let app = TestApp::new().await;
    let (uuid, token) = app.signed_in("alice").await;

    let response = app
        .put_user(&uuid, &token, &update_body("alice", "alice@x.com"))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Alice Liddell");
    assert_eq!(body["phoneNumber"], "0123456789");

    assert_eq!(app.post_login("alice", "pw1").await.status().as_u16(), 200);
}

#[tokio::test]
async fn update_with_new_password_replaces_credentials() {
    let app = TestApp::new().await;
    let (uuid, token) = app.signed_in("alice").await;

    let mut body = update_body("alice", "alice@x.com");
    body["password"] = json!("pw2");
    body["confirmPassword"] = json!("pw2");
    let response = app.put_user(&uuid, &token, &body).await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(app.post_login("alice", "pw1").await.status().as_u16(), 401);
    assert_eq!(app.post_login("alice", "pw2").await.status().as_u16(), 200);
}

#[tokio::test]
async fn update_rejects_mismatched_password() {
    let app = TestApp::new().await;
    let (uuid, token) = app.signed_in("alice").await;

    let mut body = update_body("alice", "alice@x.com");
    body["password"] = json!("pw2");
    body["confirmPassword"] = json!("pw3");
    let response = app.put_user(&uuid, &token, &body).await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn update_rejects_username_taken_by_another_user() {
    let app = TestApp::new().await;
    let (uuid, token) = app.signed_in("alice").await;
    app.signed_in("bob").await;

    let response = app
        .put_user(&uuid, &token, &update_body("bob", "alice@x.com"))
        .await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn update_requires_a_token() {
    let app = TestApp::new().await;
    let (uuid, _) = app.signed_in("alice").await;

    let response = app
        .http_client
        .put(format!("{}/{}", app.address, uuid))
        .json(&update_body("alice", "alice@x.com"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}
