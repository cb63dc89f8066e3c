//! # Authentication Endpoints
//!
//! Handles user registration, login, and logout.

use super::client::{error_from_response, ApiClient};
use crate::core::error::ApiError;
use shared::{LoginRequest, RegisterRequest, RegisterResponse, TokenResponse};

/// Register a new user account.
pub async fn register(
    client: &ApiClient,
    email: String,
    password: String,
    role: String,
) -> Result<RegisterResponse, ApiError> {
    let request = RegisterRequest {
        email,
        password,
        role,
    };

    let response = client
        .http
        .post(client.url("/auth/register"))
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

    if response.status().is_success() {
        response
            .json::<RegisterResponse>()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from_response(response).await)
    }
}

/// Login with email and password, returning the bearer token.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(
    client: &ApiClient,
    email: String,
    password: String,
) -> Result<String, ApiError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };

    let response = client
        .http
        .post(client.url("/auth/login"))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            ApiError::Network(format!("Network error: {}", e))
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = response.json::<TokenResponse>().await.map_err(|e| {
            tracing::error!(error = %e, "Login response parse error");
            ApiError::Network(format!("Failed to parse response: {}", e))
        });

        if result.is_ok() {
            tracing::info!(duration_ms = duration.as_millis(), "Login successful");
        }
        result.map(|body| body.access_token)
    } else {
        let error = error_from_response(response).await;
        tracing::warn!(
            status = status.as_u16(),
            error = %error,
            duration_ms = duration.as_millis(),
            "Login failed"
        );
        Err(error)
    }
}

/// Invalidate the session server-side.
///
/// Best-effort: the caller clears the local session regardless of the
/// outcome, so failures here are reported but never block logout.
pub async fn logout(client: &ApiClient, token: String) -> Result<(), ApiError> {
    let response = client
        .http
        .post(client.url("/auth/logout"))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}
