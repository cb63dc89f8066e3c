//! # Transaction Endpoints
//!
//! Transaction listing, lookup, submission, and the ingestion-queue depth.

use super::client::{error_from_response, ApiClient};
use crate::core::error::ApiError;
use shared::{NewTransaction, QueueLength, Transaction};
use uuid::Uuid;

/// List transactions in server order (most recent first).
pub async fn list_transactions(
    client: &ApiClient,
    token: String,
) -> Result<Vec<Transaction>, ApiError> {
    let response = client
        .http
        .get(client.url("/transactions/"))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

    if response.status().is_success() {
        response
            .json::<Vec<Transaction>>()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from_response(response).await)
    }
}

/// Fetch a single transaction by id.
pub async fn get_transaction(
    client: &ApiClient,
    token: String,
    id: Uuid,
) -> Result<Transaction, ApiError> {
    let response = client
        .http
        .get(client.url(&format!("/transactions/{}", id)))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

    if response.status().is_success() {
        response
            .json::<Transaction>()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from_response(response).await)
    }
}

/// Submit a new transaction, returning the created record.
#[tracing::instrument(skip(client, token), fields(merchant = %transaction.merchant, amount = transaction.amount))]
pub async fn submit_transaction(
    client: &ApiClient,
    token: String,
    transaction: NewTransaction,
) -> Result<Transaction, ApiError> {
    let start = std::time::Instant::now();

    let response = client
        .http
        .post(client.url("/transactions/"))
        .bearer_auth(token)
        .json(&transaction)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Submit network error");
            ApiError::Network(format!("Network error: {}", e))
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let result = response
            .json::<Transaction>()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to parse response: {}", e)));

        if result.is_ok() {
            tracing::info!(duration_ms = duration.as_millis(), "Transaction submitted");
        }
        result
    } else {
        let error = error_from_response(response).await;
        tracing::warn!(
            status = status.as_u16(),
            error = %error,
            duration_ms = duration.as_millis(),
            "Transaction submission failed"
        );
        Err(error)
    }
}

/// Fetch the ingestion-queue depth.
pub async fn get_queue_length(client: &ApiClient, token: String) -> Result<QueueLength, ApiError> {
    let response = client
        .http
        .get(client.url("/transactions/stream/length"))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

    if response.status().is_success() {
        response
            .json::<QueueLength>()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from_response(response).await)
    }
}
