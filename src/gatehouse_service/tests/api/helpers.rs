use axum::http::HeaderValue;
use fake::{Fake, faker::internet::en::Username};
use gatehouse_adapters::{
    config::test,
    hashing::Argon2Hasher,
    persistence::{HashMapUserDirectory, PostgrestUserDirectory},
    token::{JwtConfig, JwtTokenIssuer},
};
use gatehouse_core::UserDirectory;
use gatehouse_service::AuthService;
use secrecy::Secret;
use serde_json::{Value, json};
use uuid::Uuid;
use wiremock::MockServer;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";
pub const TEST_ORIGIN: &str = "https://app.example.com";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub token_issuer: JwtTokenIssuer,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_directory(HashMapUserDirectory::new()).await
    }

    /// App whose user directory is the PostgREST client pointed at `server`.
    pub async fn with_mock_store(server: &MockServer) -> Self {
        let directory = PostgrestUserDirectory::new(
            &server.uri(),
            Secret::new("anon-key".to_owned()),
            reqwest::Client::new(),
        )
        .expect("Failed to build user directory");

        Self::with_directory(directory).await
    }

    pub async fn with_directory<D>(user_directory: D) -> Self
    where
        D: UserDirectory + Clone + 'static,
    {
        let token_issuer =
            JwtTokenIssuer::new(JwtConfig::new(Secret::new(TEST_JWT_SECRET.to_owned())));

        let router = AuthService::new(user_directory, Argon2Hasher::new(), token_issuer.clone())
            .as_router(HeaderValue::from_static(TEST_ORIGIN));

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind address");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move { axum::serve(listener, router).await });

        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to build http client");

        Self {
            address,
            http_client,
            token_issuer,
        }
    }

    pub async fn post_register(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/register", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/health", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_test(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/test", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

// Fake names repeat often enough to collide across tests
pub fn random_username() -> String {
    let name: String = Username().fake();
    format!("{name}_{}", Uuid::new_v4().simple())
}

pub fn credentials(username: &str, password: &str) -> Value {
    json!({ "username": username, "password": password })
}

pub async fn error_message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.expect("Response body is not JSON");
    body["error"]
        .as_str()
        .expect("Missing error field")
        .to_owned()
}
