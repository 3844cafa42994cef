use serde_json::Value;

use crate::helpers::{TestApp, error_message, register_body};

#[tokio::test]
async fn should_return_200_with_token_and_role() {
    let app = TestApp::new().await;
    app.post_register(&register_body("alice", "alice@x.com", "pw1", "pw1"))
        .await;

    let response = app.post_login("alice", "pw1").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["role"], "customer");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn should_return_401_for_wrong_password() {
    let app = TestApp::new().await;
    app.post_register(&register_body("alice", "alice@x.com", "pw1", "pw1"))
        .await;

    let response = app.post_login("alice", "nope").await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        error_message(response).await,
        "Invalid username or password"
    );
}

#[tokio::test]
async fn should_return_401_for_unknown_username() {
    let app = TestApp::new().await;

    let response = app.post_login("ghost", "pw1").await;

    assert_eq!(response.status().as_u16(), 401);
}
