//! # User Action Handlers
//!
//! Guard-then-spawn handlers for every user-initiated action. Each handler
//! validates its input, writes feedback to the status slot on rejection, and
//! otherwise spawns the corresponding background task.

pub(crate) mod auth;
pub(crate) mod transactions;
