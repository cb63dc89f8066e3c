//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! coordinator. Every session-scoped result carries the session epoch that
//! was current when its fetch was issued; the event handler discards events
//! whose epoch is stale.

use crate::core::error::ApiError;
use shared::{AnalyticsReport, QueueLength, RegisterResponse, Transaction};

/// The complete triple committed atomically after a successful initial load.
#[derive(Debug, Clone)]
pub struct InitialLoad {
    pub transactions: Vec<Transaction>,
    pub analytics: AnalyticsReport,
    pub queue: QueueLength,
}

/// Async task results sent back to the coordinator.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Registration completed. Not session-scoped: registration creates no
    /// session, so there is no epoch to guard.
    RegisterResult(Result<RegisterResponse, ApiError>),
    /// Login completed with the bearer token on success. The last login to
    /// resolve wins; epochs only exist after `acquire`.
    LoginResult(Result<String, ApiError>),
    /// Initial load completed: all three reads joined into one result.
    InitialLoadResult {
        epoch: u64,
        result: Result<InitialLoad, ApiError>,
    },
    /// Transaction-list slice refresh completed.
    TransactionsRefreshed {
        epoch: u64,
        result: Result<Vec<Transaction>, ApiError>,
    },
    /// Forecast slice refresh completed.
    ForecastRefreshed {
        epoch: u64,
        result: Result<AnalyticsReport, ApiError>,
    },
    /// Queue-depth slice refresh completed.
    QueueRefreshed {
        epoch: u64,
        result: Result<QueueLength, ApiError>,
    },
    /// Transaction submission completed with the created record on success.
    SubmitResult {
        epoch: u64,
        result: Result<Transaction, ApiError>,
    },
    /// Single-transaction lookup completed.
    TransactionDetail {
        epoch: u64,
        result: Result<Transaction, ApiError>,
    },
}
