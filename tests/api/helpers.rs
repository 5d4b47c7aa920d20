use auth_backend::{
    app_state::{AppState, UserStoreType},
    domain::{Email, NewUser, User, UserStore, UserStoreError},
    services::data_stores::HashmapUserStore,
    utils::constants::{test, DEFAULT_ALLOWED_ORIGIN},
    Application,
};
use color_eyre::eyre::eyre;
use secrecy::Secret;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub user_store: UserStoreType,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_user_store(Arc::new(RwLock::new(
            HashmapUserStore::default(),
        )))
        .await
    }

    pub async fn with_user_store(user_store: UserStoreType) -> Self {
        let app_state = AppState::new(user_store.clone());

        let app = Application::build(
            app_state,
            test::APP_ADDRESS,
            DEFAULT_ALLOWED_ORIGIN,
        )
        .await
        .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let http_client = reqwest::Client::new();

        Self {
            address,
            http_client,
            user_store,
        }
    }

    pub async fn post_signup<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/api/auth/signup", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/api/auth/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn preflight(
        &self,
        path: &str,
        origin: &str,
    ) -> reqwest::Response {
        self.http_client
            .request(
                reqwest::Method::OPTIONS,
                format!("{}{}", &self.address, path),
            )
            .header("Origin", origin)
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "content-type")
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn find_user(&self, email: &str) -> Option<User> {
        self.user_store
            .read()
            .await
            .find_by_email(&Email::new(Secret::new(email.to_owned())))
            .await
            .expect("Failed to read from user store")
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub async fn get_text_response_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .expect("failed to read response body")
}

pub async fn signup(app: &TestApp, email: &str, password: &str) -> String {
    let response = app
        .post_signup(&serde_json::json!({
            "email": email,
            "password": password
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    get_text_response_body(response).await
}

pub async fn login(app: &TestApp, email: &str, password: &str) -> String {
    let response = app
        .post_login(&serde_json::json!({
            "email": email,
            "password": password
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    get_text_response_body(response).await
}

/// A store whose backend is always unreachable.
pub struct FailingUserStore;

#[async_trait::async_trait]
impl UserStore for FailingUserStore {
    async fn save(&mut self, _user: NewUser) -> Result<User, UserStoreError> {
        Err(UserStoreError::UnexpectedError(eyre!("connection refused")))
    }

    async fn find_by_email(
        &self,
        _email: &Email,
    ) -> Result<Option<User>, UserStoreError> {
        Err(UserStoreError::UnexpectedError(eyre!("connection refused")))
    }
}
