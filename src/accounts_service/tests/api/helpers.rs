use accounts_adapters::{
    Argon2PasswordHasher, HashMapUserStore, JwtSessionIssuer, config::test::APP_ADDRESS,
};
use accounts_application::{AccountService, SessionSettings};
use accounts_service::AccountsApp;
use argon2::Params;
use secrecy::Secret;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let service = AccountService::new(
            HashMapUserStore::new(),
            Argon2PasswordHasher::new(Params::new(64, 1, 1, None).unwrap()),
            JwtSessionIssuer::new(&Secret::new("test-secret".to_string())),
            SessionSettings::from_minutes(60),
        );

        let listener = TcpListener::bind(APP_ADDRESS).await.unwrap();
        let address = format!("http://{}/api/v1/auth", listener.local_addr().unwrap());
        let router = AccountsApp::new(service).into_router(&[]);

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_register(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/register", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login(&self, username: &str, password: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_current_user(&self, token: Option<&str>) -> reqwest::Response {
        let mut request = self.http_client.get(format!("{}/user", self.address));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn get_user(&self, uuid: &str, token: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/{}", self.address, uuid))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put_user(&self, uuid: &str, token: &str, body: &Value) -> reqwest::Response {
        self.http_client
            .put(format!("{}/{}", self.address, uuid))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Register `username` with password `pw1` and log in, returning the user uuid and token.
    pub async fn signed_in(&self, username: &str) -> (String, String) {
        let email = format!("{username}@x.com");
        let response = self
            .post_register(&register_body(username, &email, "pw1", "pw1"))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: Value = self.post_login(username, "pw1").await.json().await.unwrap();
        (
            body["user"]["uuid"].as_str().unwrap().to_string(),
            body["token"].as_str().unwrap().to_string(),
        )
    }
}

pub fn register_body(username: &str, email: &str, password: &str, confirm: &str) -> Value {
    json!({
        "name": username,
        "username": username,
        "password": password,
        "confirmPassword": confirm,
        "phoneNumber": "0987654321",
        "email": email,
    })
}

pub async fn error_message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.unwrap();
    body["error"].as_str().unwrap().to_string()
}
