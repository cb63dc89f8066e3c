//! # Event Handler
//!
//! Commit points of the sync coordinator. Every async result lands here;
//! session-scoped events pass the stale-epoch guard before anything is
//! written to view state.
//!
//! Policy table (who sees a failure):
//!
//! | Event                | On success              | On failure              |
//! |----------------------|-------------------------|-------------------------|
//! | RegisterResult       | status message          | status message          |
//! | LoginResult          | acquire + initial load  | status message          |
//! | InitialLoadResult    | commit triple, Ready    | soft-fail, Ready, empty |
//! | slice refreshes      | commit that slice       | soft-fail, keep prior   |
//! | SubmitResult         | status + 3 refreshes    | status message          |
//! | TransactionDetail    | commit selected         | status message          |

use crate::app::events::AppEvent;
use crate::app::state::{StatusMessage, SyncPhase};
use crate::app::tasks;
use crate::app::App;
use crate::core::error::ApiError;
use shared::{AnalyticsReport, QueueLength, RegisterResponse, Transaction};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle one async event result.
    ///
    /// Acquires the write lock per event for minimal duration; subscribers
    /// are notified once per handled event, after the lock is released.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::RegisterResult(result) => self.handle_register_result(result),
            AppEvent::LoginResult(result) => self.handle_login_result(result),
            AppEvent::InitialLoadResult { epoch, result } => {
                self.handle_initial_load(epoch, result)
            }
            AppEvent::TransactionsRefreshed { epoch, result } => {
                self.handle_transactions_refreshed(epoch, result)
            }
            AppEvent::ForecastRefreshed { epoch, result } => {
                self.handle_forecast_refreshed(epoch, result)
            }
            AppEvent::QueueRefreshed { epoch, result } => {
                self.handle_queue_refreshed(epoch, result)
            }
            AppEvent::SubmitResult { epoch, result } => self.handle_submit_result(epoch, result),
            AppEvent::TransactionDetail { epoch, result } => {
                self.handle_transaction_detail(epoch, result)
            }
        }
        self.notify_subscribers();
    }
}

impl App {
    /// Whether a result tagged with `epoch` may still be committed. A stale
    /// epoch means the session that issued the fetch was cleared or replaced.
    fn guard_epoch(&self, epoch: u64, what: &str) -> bool {
        if self.session.is_current(epoch) {
            true
        } else {
            tracing::debug!(
                event_epoch = epoch,
                current_epoch = self.session.epoch(),
                event = what,
                "Discarding stale-session result"
            );
            false
        }
    }

    fn handle_register_result(&mut self, result: Result<RegisterResponse, ApiError>) {
        let mut state = self.state.write();
        match result {
            Ok(response) => {
                tracing::info!(email = %response.email, "Registration successful");
                state.status = Some(StatusMessage::info(format!(
                    "{} ({})",
                    response.message, response.email
                )));
            }
            Err(e) => {
                state.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    fn handle_login_result(&mut self, result: Result<String, ApiError>) {
        tracing::info!(success = result.is_ok(), "Processing login result");

        match result {
            Ok(token) => {
                let epoch = self.session.acquire(token.clone());
                {
                    let mut state = self.state.write();
                    // Fresh session: drop anything a previous identity left behind.
                    state.reset();
                    state.phase = SyncPhase::Loading;
                    state.status = Some(StatusMessage::info("Logged in"));
                }
                self.pending += 1;
                tasks::sync::initial_load(self.api.clone(), self.event_tx.clone(), token, epoch);
            }
            Err(e) => {
                self.state.write().status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    fn handle_initial_load(
        &mut self,
        epoch: u64,
        result: Result<crate::app::events::InitialLoad, ApiError>,
    ) {
        if !self.guard_epoch(epoch, "InitialLoadResult") {
            return;
        }

        let mut state = self.state.write();
        match result {
            Ok(load) => {
                state.transactions = load.transactions;
                state.analytics = Some(load.analytics);
                state.queue_length = load.queue.transactions_in_queue;
            }
            Err(e) => {
                // Soft-fail: no data yet, the dashboard still renders.
                tracing::warn!(error = %e, "Initial load failed, keeping prior view");
            }
        }
        state.phase = SyncPhase::Ready;
    }

    fn handle_transactions_refreshed(
        &mut self,
        epoch: u64,
        result: Result<Vec<Transaction>, ApiError>,
    ) {
        if !self.guard_epoch(epoch, "TransactionsRefreshed") {
            return;
        }

        match result {
            Ok(transactions) => {
                self.state.write().transactions = transactions;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Transaction refresh failed, keeping prior list");
            }
        }
    }

    fn handle_forecast_refreshed(
        &mut self,
        epoch: u64,
        result: Result<AnalyticsReport, ApiError>,
    ) {
        if !self.guard_epoch(epoch, "ForecastRefreshed") {
            return;
        }

        match result {
            Ok(report) => {
                self.state.write().analytics = Some(report);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Forecast refresh failed, keeping prior report");
            }
        }
    }

    fn handle_queue_refreshed(&mut self, epoch: u64, result: Result<QueueLength, ApiError>) {
        if !self.guard_epoch(epoch, "QueueRefreshed") {
            return;
        }

        match result {
            Ok(queue) => {
                self.state.write().queue_length = queue.transactions_in_queue;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Queue refresh failed, keeping prior depth");
            }
        }
    }

    fn handle_submit_result(&mut self, epoch: u64, result: Result<Transaction, ApiError>) {
        if !self.guard_epoch(epoch, "SubmitResult") {
            return;
        }

        match result {
            Ok(transaction) => {
                tracing::info!(id = %transaction.id, "Transaction accepted");
                self.state.write().status = Some(StatusMessage::info(format!(
                    "Submitted {} {} at {}",
                    transaction.amount, transaction.currency, transaction.merchant
                )));

                // A new transaction affects all three slices. Unlike the
                // initial load these refreshes are independent: each commits
                // on its own as it resolves.
                if let Some(token) = self.session.current() {
                    let epoch = self.session.epoch();
                    self.pending += 3;
                    tasks::sync::refresh_transactions(
                        self.api.clone(),
                        self.event_tx.clone(),
                        token.clone(),
                        epoch,
                    );
                    tasks::sync::refresh_forecast(
                        self.api.clone(),
                        self.event_tx.clone(),
                        token.clone(),
                        epoch,
                    );
                    tasks::sync::refresh_queue(self.api.clone(), self.event_tx.clone(), token, epoch);
                }
            }
            Err(e) => {
                self.state.write().status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    fn handle_transaction_detail(&mut self, epoch: u64, result: Result<Transaction, ApiError>) {
        if !self.guard_epoch(epoch, "TransactionDetail") {
            return;
        }

        let mut state = self.state.write();
        match result {
            Ok(transaction) => {
                state.selected = Some(transaction);
            }
            Err(e) => {
                state.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }
}
