//! # Aether Dashboard Client - Library Root
//!
//! Client session and data-synchronization layer for the Aether
//! fraud-analytics backend. The backend authenticates users, stores
//! transactions, and computes fraud forecasts; this crate keeps a local view
//! of that system consistent across logins, submissions, and refreshes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              dashboard (this crate)             │
//! ├─────────────────────────────────────────────────┤
//! │  app       - session store, view state,         │
//! │              sync coordinator, event loop       │
//! │  services  - typed HTTP gateway (reqwest)       │
//! │  core      - ApiError taxonomy, ApiService seam │
//! │  utils     - input validation                   │
//! └────────────────────────┬────────────────────────┘
//!                          │ HTTP (bearer token)
//!                          ▼
//!               ┌─────────────────────┐
//!               │  Backend API        │
//!               │  (black box)        │
//!               └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **[`app`]**: the coordinator — [`app::App`] orchestrates user actions,
//!   background fetches, and view-state commits; [`app::SessionStore`] owns
//!   the token lifecycle and the session epoch
//! - **[`services`]**: the API gateway — one typed operation per backend
//!   route, bound to a fixed base URL
//! - **[`core`]**: error taxonomy and the [`core::ApiService`] trait that
//!   decouples the coordinator from the concrete HTTP client
//! - **[`config`]**: environment-driven client configuration
//! - **[`utils`]**: user-input validation
//!
//! The `shared` crate carries the wire contract (DTOs) with the backend.

pub mod app;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;
