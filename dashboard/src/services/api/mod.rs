//! # Backend API Client Module
//!
//! HTTP client for the backend REST API. Handles authentication, transaction
//! submission and listing, and fraud-analytics queries.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient struct, error classification, health probe
//! ├── auth.rs         - Authentication endpoints (register, login, logout)
//! ├── transactions.rs - Transaction endpoints (list, get, submit, queue depth)
//! └── analytics.rs    - Analytics endpoints (fraud forecast)
//! ```

pub mod analytics;
pub mod auth;
pub mod client;
pub mod transactions;

pub use client::ApiClient;
