use crate::error::ApiError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Base URL used when neither config nor CLI override it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

pub const LOGIN_PATH: &str = "/my_alarm/v1/users/login";
pub const REGISTER_PATH: &str = "/my_alarm/v1/users/register";

/// The logged-in user as returned by the login endpoint and kept in local
/// storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub group: i64,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Body of the register endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub group: i64,
}

/// HTTP client for the account endpoints.
///
/// Every call fires exactly once. There is no retry and no client-side
/// timeout beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http_client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client for `base_url` (trailing slashes are ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in and return the user record on a 2xx response.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let url = self.url(LOGIN_PATH);
        info!("POST {} (username: {})", url, username);

        let response = self
            .http_client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| {
                error!("Login request failed: {}", e);
                ApiError::Network(e)
            })?;

        let status = response.status();
        debug!("Login response status: {}", status);
        if !status.is_success() {
            error!("Login rejected with status {}", status);
            return Err(ApiError::Status { status });
        }

        let user: User = response.json().await.map_err(|e| {
            error!("Failed to parse login response: {}", e);
            ApiError::InvalidResponse(e)
        })?;

        info!("Logged in as {} (id {})", user.username, user.id);
        Ok(user)
    }

    /// Create an account. The response body is ignored.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let url = self.url(REGISTER_PATH);
        info!(
            "POST {} (username: {}, email: {}, group: {})",
            url, request.username, request.email, request.group
        );

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Register request failed: {}", e);
                ApiError::Network(e)
            })?;

        let status = response.status();
        debug!("Register response status: {}", status);
        if !status.is_success() {
            error!("Registration rejected with status {}", status);
            return Err(ApiError::Status { status });
        }

        info!("Registered user {}", request.username);
        Ok(())
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
