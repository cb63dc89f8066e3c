//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::ApiError;
use async_trait::async_trait;
use shared::{AnalyticsReport, NewTransaction, QueueLength, RegisterResponse, Transaction};
use uuid::Uuid;

/// Trait covering every remote capability the dashboard consumes.
///
/// This trait allows for dependency injection and mocking in tests: the sync
/// coordinator only ever sees `Arc<dyn ApiService>`, so integration tests can
/// drive it with a scripted backend instead of a live HTTP server.
///
/// Every authenticated operation takes the bearer token explicitly. Callers
/// resolve the token from the session store before dispatch, which is where
/// the "no token, no request" short-circuit lives.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Register a new user account.
    async fn register(
        &self,
        email: String,
        password: String,
        role: String,
    ) -> Result<RegisterResponse, ApiError>;

    /// Login with email and password, returning the bearer token.
    async fn login(&self, email: String, password: String) -> Result<String, ApiError>;

    /// Invalidate the session server-side. Best-effort: callers ignore failure.
    async fn logout(&self, token: String) -> Result<(), ApiError>;

    /// List transactions in server order (most recent first).
    async fn list_transactions(&self, token: String) -> Result<Vec<Transaction>, ApiError>;

    /// Fetch a single transaction by id.
    async fn get_transaction(&self, token: String, id: Uuid) -> Result<Transaction, ApiError>;

    /// Submit a new transaction and return the created record.
    async fn submit_transaction(
        &self,
        token: String,
        transaction: NewTransaction,
    ) -> Result<Transaction, ApiError>;

    /// Fetch the fraud-forecast report.
    async fn get_forecast(&self, token: String) -> Result<AnalyticsReport, ApiError>;

    /// Fetch the ingestion-queue depth.
    async fn get_queue_length(&self, token: String) -> Result<QueueLength, ApiError>;

    /// Probe backend reachability. Unauthenticated.
    async fn health(&self) -> Result<(), ApiError>;
}
