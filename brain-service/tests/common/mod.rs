use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use brain_service::domain::content::ports::ContentServicePort;
use brain_service::domain::content::service::ContentService;
use brain_service::domain::share::ports::ShareServicePort;
use brain_service::domain::share::service::ShareService;
use brain_service::domain::user::ports::UserServicePort;
use brain_service::domain::user::service::UserService;
use brain_service::inbound::http::router::create_router;
use brain_service::outbound::repositories::InMemoryContentRepository;
use brain_service::outbound::repositories::InMemoryShareLinkRepository;
use brain_service::outbound::repositories::InMemoryUserRepository;
use serde_json::json;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns the real router on a random port, backed by
/// the in-memory repository adapters.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(InMemoryUserRepository::new());
        let content_repository = Arc::new(InMemoryContentRepository::new());
        let share_repository = Arc::new(InMemoryShareLinkRepository::new());

        let user_service: Arc<dyn UserServicePort> =
            Arc::new(UserService::new(Arc::clone(&user_repository)));
        let content_service: Arc<dyn ContentServicePort> =
            Arc::new(ContentService::new(Arc::clone(&content_repository)));
        let share_service: Arc<dyn ShareServicePort> = Arc::new(ShareService::new(
            share_repository,
            user_repository,
            content_repository,
        ));

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));

        let router = create_router(user_service, content_service, share_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with a bearer token.
    ///
    /// The raw token is the whole header value; the service accepts no
    /// `Bearer ` scheme prefix.
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).header("authorization", token)
    }

    /// Helper to make POST request with a bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).header("authorization", token)
    }

    /// Helper to make DELETE request with a bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).header("authorization", token)
    }

    /// Sign a user up, asserting success.
    pub async fn signup(&self, email: &str, password: &str, username: Option<&str>) {
        let response = self
            .post("/api/v1/signup")
            .json(&json!({
                "email": email,
                "password": password,
                "username": username,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["message"], "Signed up!");
    }

    /// Sign an existing user in and return the issued token.
    pub async fn signin_token(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/v1/signin")
            .json(&json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Signin did not return a token")
            .to_string()
    }
}
