//! # Analytics Endpoints
//!
//! Fraud-forecast report fetching.

use super::client::{error_from_response, ApiClient};
use crate::core::error::ApiError;
use shared::AnalyticsReport;

/// Fetch the fraud-forecast report.
///
/// The report is replaced wholesale on every fetch; a backend with too little
/// history returns the `insufficient_data` variant rather than an error.
pub async fn get_forecast(client: &ApiClient, token: String) -> Result<AnalyticsReport, ApiError> {
    let response = client
        .http
        .get(client.url("/analytics/forecast"))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

    if response.status().is_success() {
        response
            .json::<AnalyticsReport>()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from_response(response).await)
    }
}
