use serde_json::{Value, json};

use crate::helpers::{TestApp, error_message, register_body};

#[tokio::test]
async fn should_return_201_with_profile_and_no_password() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&register_body("alice", "alice@x.com", "pw1", "pw1"))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    let user = &body["user"];
    assert_eq!(user["username"], "alice");
    assert_eq!(user["email"], "alice@x.com");
    assert_eq!(user["phoneNumber"], "0987654321");
    assert!(user["uuid"].is_string());
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("role").is_none());
}

#[tokio::test]
async fn should_return_409_for_existing_username() {
    let app = TestApp::new().await;
    app.post_register(&register_body("alice", "alice@x.com", "pw1", "pw1"))
        .await;

    let response = app
        .post_register(&register_body("alice", "alice2@x.com", "pw1", "pw1"))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(error_message(response).await, "Username already exists");
}

#[tokio::test]
async fn should_return_409_for_existing_email() {
    let app = TestApp::new().await;
    app.post_register(&register_body("alice", "alice@x.com", "pw1", "pw1"))
        .await;

    let response = app
        .post_register(&register_body("bob", "alice@x.com", "pw1", "pw1"))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(error_message(response).await, "Email already exists");
}

#[tokio::test]
async fn should_return_422_for_mismatched_confirmation() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&register_body("carol", "carol@x.com", "pw1", "pw2"))
        .await;

    assert_eq!(response.status().as_u16(), 422);
    assert_eq!(error_message(response).await, "Password does not match");
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        register_body("dave", "not-an-email", "pw1", "pw1"),
        register_body("   ", "dave@x.com", "pw1", "pw1"),
        register_body("dave", "dave@x.com", "", ""),
        {
            let mut body = register_body("dave", "dave@x.com", "pw1", "pw1");
            body["name"] = json!("d".repeat(256));
            body
        },
    ];

    for test_case in test_cases.iter() {
        let response = app.post_register(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[tokio::test]
async fn should_return_422_for_malformed_body() {
    let app = TestApp::new().await;

    let response = app.post_register(&json!({ "username": "erin" })).await;

    assert_eq!(response.status().as_u16(), 422);
}
