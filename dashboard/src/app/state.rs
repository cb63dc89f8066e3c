//! # View State Types
//!
//! The rendered snapshot the presentation layer reads: transaction list,
//! analytics report, queue depth, and a transient status message. Written
//! only by the sync coordinator at its commit points; presentation holds a
//! read lock briefly and never mutates.

use shared::{AnalyticsReport, Transaction};

/// Sync coordinator phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// No session: view state is empty, no reads scheduled.
    Unauthenticated,
    /// Session acquired, the initial load's three reads are in flight.
    Loading,
    /// The dashboard view is shown, holding the last committed data.
    Ready,
}

/// Severity of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Transient feedback for the last user action (login, register, submit).
///
/// Background read failures never touch this slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// The rendered snapshot.
///
/// `analytics` and `queue_length` are replaced wholesale on commit, never
/// merged field-by-field. `selected` holds the result of an explicit
/// single-transaction lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub phase: SyncPhase,
    /// Server order: most recent first.
    pub transactions: Vec<Transaction>,
    /// `None` until the first successful forecast fetch.
    pub analytics: Option<AnalyticsReport>,
    pub queue_length: u64,
    pub status: Option<StatusMessage>,
    /// Last explicitly looked-up transaction.
    pub selected: Option<Transaction>,
}

impl ViewState {
    /// Reset to the empty unauthenticated view.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_authenticated_view(&self) -> bool {
        self.phase != SyncPhase::Unauthenticated
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            phase: SyncPhase::Unauthenticated,
            transactions: Vec::new(),
            analytics: None,
            queue_length: 0,
            status: None,
            selected: None,
        }
    }
}
