//! # API Client
//!
//! Main HTTP client for backend API communication.

use crate::core::error::ApiError;
use crate::core::service::ApiService;
use reqwest::{Client, Response, StatusCode};
use shared::ErrorResponse;

/// HTTP client for communicating with the backend API server.
///
/// Bound to a fixed base URL at construction; maintains a connection pool for
/// efficient request reuse.
pub struct ApiClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
}

impl ApiClient {
    /// Create a new API client bound to `base_url`.
    ///
    /// The request timeout keeps a stalled backend from freezing the client;
    /// expiry surfaces as an ordinary [`ApiError::Network`].
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build an absolute URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Classify a non-success response into an [`ApiError`].
///
/// The backend reports errors as `{"detail": "..."}`. Some validation
/// rejections carry a structured (non-string) detail, in which case the
/// status line stands in for the message.
pub(crate) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let detail = match response.json::<ErrorResponse>().await {
        Ok(body) => body.detail,
        Err(_) => format!("Request failed with status {}", status.as_u16()),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(detail),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation(detail),
        StatusCode::NOT_FOUND => ApiError::NotFound(detail),
        _ => ApiError::Network(detail),
    }
}

/// Probe backend reachability (`GET /health`). Unauthenticated.
pub async fn health(client: &ApiClient) -> Result<(), ApiError> {
    let response = client
        .http
        .get(client.url("/health"))
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn register(
        &self,
        email: String,
        password: String,
        role: String,
    ) -> Result<shared::RegisterResponse, ApiError> {
        crate::services::api::auth::register(self, email, password, role).await
    }

    async fn login(&self, email: String, password: String) -> Result<String, ApiError> {
        crate::services::api::auth::login(self, email, password).await
    }

    async fn logout(&self, token: String) -> Result<(), ApiError> {
        crate::services::api::auth::logout(self, token).await
    }

    async fn list_transactions(&self, token: String) -> Result<Vec<shared::Transaction>, ApiError> {
        crate::services::api::transactions::list_transactions(self, token).await
    }

    async fn get_transaction(
        &self,
        token: String,
        id: uuid::Uuid,
    ) -> Result<shared::Transaction, ApiError> {
        crate::services::api::transactions::get_transaction(self, token, id).await
    }

    async fn submit_transaction(
        &self,
        token: String,
        transaction: shared::NewTransaction,
    ) -> Result<shared::Transaction, ApiError> {
        crate::services::api::transactions::submit_transaction(self, token, transaction).await
    }

    async fn get_forecast(&self, token: String) -> Result<shared::AnalyticsReport, ApiError> {
        crate::services::api::analytics::get_forecast(self, token).await
    }

    async fn get_queue_length(&self, token: String) -> Result<shared::QueueLength, ApiError> {
        crate::services::api::transactions::get_queue_length(self, token).await
    }

    async fn health(&self) -> Result<(), ApiError> {
        health(self).await
    }
}
