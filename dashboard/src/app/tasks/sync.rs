//! # Sync Tasks
//!
//! Async tasks that carry out the coordinator's reads and writes. Each
//! function spawns one task that sends exactly one event when it resolves;
//! [`crate::app::App::settle`] relies on that one-task-one-event invariant to
//! know when the system is quiescent.
//!
//! Callers capture the session epoch before spawning; the event handler uses
//! it to discard results from abandoned sessions.

use crate::app::events::{AppEvent, InitialLoad};
use crate::core::service::ApiService;
use async_channel::Sender;
use shared::NewTransaction;
use std::sync::Arc;
use tokio::spawn;
use uuid::Uuid;

/// Register a new user account.
pub(crate) fn register(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    spawn(async move {
        let result = api
            .register(email, password, "analyst".to_string())
            .await;
        let _ = event_tx.send(AppEvent::RegisterResult(result)).await;
    });
}

/// Login with email and password.
pub(crate) fn login(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    spawn(async move {
        let result = api.login(email, password).await;
        let _ = event_tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Fire the initial load: all three reads concurrently, joined into a single
/// result so the triple commits atomically (no partial empty state flashes on
/// first paint).
pub(crate) fn initial_load(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    token: String,
    epoch: u64,
) {
    spawn(async move {
        let start = std::time::Instant::now();
        let (transactions, analytics, queue) = tokio::join!(
            api.list_transactions(token.clone()),
            api.get_forecast(token.clone()),
            api.get_queue_length(token),
        );

        let result = match (transactions, analytics, queue) {
            (Ok(transactions), Ok(analytics), Ok(queue)) => {
                tracing::debug!(
                    transaction_count = transactions.len(),
                    duration_ms = start.elapsed().as_millis(),
                    "Initial load complete"
                );
                Ok(InitialLoad {
                    transactions,
                    analytics,
                    queue,
                })
            }
            (t, a, q) => {
                // First error wins for the log line; the handler treats any
                // failure as "no data yet".
                let error = [
                    t.err().map(|e| e.to_string()),
                    a.err().map(|e| e.to_string()),
                    q.err().map(|e| e.to_string()),
                ]
                .into_iter()
                .flatten()
                .next()
                .unwrap_or_default();
                Err(crate::core::error::ApiError::Network(error))
            }
        };

        let _ = event_tx.send(AppEvent::InitialLoadResult { epoch, result }).await;
    });
}

/// Refresh the transaction-list slice.
pub(crate) fn refresh_transactions(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    token: String,
    epoch: u64,
) {
    spawn(async move {
        let result = api.list_transactions(token).await;
        let _ = event_tx
            .send(AppEvent::TransactionsRefreshed { epoch, result })
            .await;
    });
}

/// Refresh the forecast slice.
pub(crate) fn refresh_forecast(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    token: String,
    epoch: u64,
) {
    spawn(async move {
        let result = api.get_forecast(token).await;
        let _ = event_tx
            .send(AppEvent::ForecastRefreshed { epoch, result })
            .await;
    });
}

/// Refresh the queue-depth slice.
pub(crate) fn refresh_queue(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    token: String,
    epoch: u64,
) {
    spawn(async move {
        let result = api.get_queue_length(token).await;
        let _ = event_tx.send(AppEvent::QueueRefreshed { epoch, result }).await;
    });
}

/// Submit a new transaction.
pub(crate) fn submit_transaction(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    token: String,
    epoch: u64,
    transaction: NewTransaction,
) {
    spawn(async move {
        let result = api.submit_transaction(token, transaction).await;
        let _ = event_tx.send(AppEvent::SubmitResult { epoch, result }).await;
    });
}

/// Look up a single transaction by id.
pub(crate) fn fetch_transaction(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    token: String,
    epoch: u64,
    id: Uuid,
) {
    spawn(async move {
        let result = api.get_transaction(token, id).await;
        let _ = event_tx
            .send(AppEvent::TransactionDetail { epoch, result })
            .await;
    });
}

/// Best-effort remote logout. Sends no event: the local session is already
/// cleared by the time this fires, and the outcome is ignored either way.
pub(crate) fn remote_logout(api: Arc<dyn ApiService>, token: String) {
    spawn(async move {
        if let Err(e) = api.logout(token).await {
            tracing::debug!(error = %e, "Remote logout failed, local session already cleared");
        }
    });
}
