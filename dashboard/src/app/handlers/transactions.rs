//! # Transaction Handlers
//!
//! Handlers for transaction submission, manual refresh, and single-record
//! lookup. Client-side validation rejects malformed submissions before any
//! network work; the no-token case short-circuits the same way.

use crate::app::events::AppEvent;
use crate::app::session::SessionStore;
use crate::app::state::{StatusMessage, ViewState};
use crate::app::tasks;
use crate::core::service::ApiService;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{Currency, NewTransaction};
use std::sync::Arc;
use uuid::Uuid;

/// Handle a transaction submission.
///
/// Returns `true` when a background task was spawned. Amount, currency, and
/// merchant are validated here; a failure surfaces in the status slot and
/// leaves the data slices untouched.
pub(crate) fn handle_submit(
    state: &Arc<RwLock<ViewState>>,
    session: &Arc<SessionStore>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    amount: String,
    currency: String,
    merchant: String,
    location: Option<String>,
) -> bool {
    let amount = match validation::validate_amount(&amount) {
        Ok(amount) => amount,
        Err(message) => {
            state.write().status = Some(StatusMessage::error(message));
            return false;
        }
    };

    let currency = match Currency::from_code(&currency) {
        Some(currency) => currency,
        None => {
            state.write().status = Some(StatusMessage::error(format!(
                "Unsupported currency '{}' (expected USD, EUR, GBP, or INR)",
                currency
            )));
            return false;
        }
    };

    let merchant_check = validation::validate_merchant(&merchant);
    if !merchant_check.is_valid {
        state.write().status = Some(StatusMessage::error(
            merchant_check
                .error
                .unwrap_or_else(|| "Invalid merchant".to_string()),
        ));
        return false;
    }

    let token = match session.current() {
        Some(token) => token,
        None => {
            state.write().status =
                Some(StatusMessage::error("Not logged in: submission requires a session"));
            return false;
        }
    };

    let transaction = NewTransaction {
        amount,
        currency,
        merchant: merchant.trim().to_string(),
        location: location.filter(|l| !l.trim().is_empty()),
    };

    state.write().status = Some(StatusMessage::info("Submitting transaction..."));
    tasks::sync::submit_transaction(api, event_tx, token, session.epoch(), transaction);
    true
}

/// Handle a manual transaction-list refresh.
///
/// Without a session there is nothing to refresh and no request is issued.
pub(crate) fn handle_refresh(
    session: &Arc<SessionStore>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
) -> bool {
    let token = match session.current() {
        Some(token) => token,
        None => return false,
    };

    tasks::sync::refresh_transactions(api, event_tx, token, session.epoch());
    true
}

/// Handle a single-transaction lookup.
pub(crate) fn handle_show_transaction(
    state: &Arc<RwLock<ViewState>>,
    session: &Arc<SessionStore>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    id: Uuid,
) -> bool {
    let token = match session.current() {
        Some(token) => token,
        None => {
            state.write().status = Some(StatusMessage::error("Not logged in"));
            return false;
        }
    };

    tasks::sync::fetch_transaction(api, event_tx, token, session.epoch(), id);
    true
}
