//! # Authentication Handlers
//!
//! Handlers for register and login actions. Field-level guards run here, so a
//! request with an obviously bad payload never reaches the gateway.

use crate::app::events::AppEvent;
use crate::app::state::{StatusMessage, ViewState};
use crate::app::tasks;
use crate::core::service::ApiService;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle a login action.
///
/// Returns `true` when a background task was spawned. On a guard failure the
/// status slot carries the error and nothing is issued.
pub(crate) fn handle_login(
    state: &Arc<RwLock<ViewState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) -> bool {
    if email.is_empty() || password.is_empty() {
        state.write().status = Some(StatusMessage::error("Email and password required"));
        return false;
    }

    state.write().status = Some(StatusMessage::info("Logging in..."));
    tasks::sync::login(api, event_tx, email, password);
    true
}

/// Handle a register action.
pub(crate) fn handle_register(
    state: &Arc<RwLock<ViewState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) -> bool {
    let email_check = validation::validate_email(&email);
    if !email_check.is_valid {
        state.write().status = Some(StatusMessage::error(
            email_check.error.unwrap_or_else(|| "Invalid email".to_string()),
        ));
        return false;
    }

    if password.is_empty() {
        state.write().status = Some(StatusMessage::error("Password required"));
        return false;
    }

    state.write().status = Some(StatusMessage::info("Registering..."));
    tasks::sync::register(api, event_tx, email, password);
    true
}
