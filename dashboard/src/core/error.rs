//! # Common Error Types
//!
//! Consolidated error handling for the dashboard client.
//!
//! This module provides a centralized error type [`ApiError`] covering every
//! failure the client can observe when talking to the backend.
//!
//! ## Error Categories
//!
//! - **Auth**: invalid credentials, missing/expired token, unauthorized access
//! - **Validation**: malformed submission payloads rejected by the client or
//!   the backend (4xx with a validation detail)
//! - **NotFound**: lookup of a resource that does not exist (e.g. a
//!   transaction id)
//! - **Network**: transport failures, timeouts, and unparseable responses
//!
//! ## Usage Pattern
//!
//! ```rust
//! use dashboard::core::error::ApiError;
//!
//! fn require_token(token: Option<&str>) -> Result<&str, ApiError> {
//!     token.ok_or_else(|| ApiError::Auth("Not logged in".to_string()))
//! }
//! ```

use thiserror::Error;

/// Client-wide error type for backend API interactions.
///
/// Each variant carries a descriptive message. The `#[error]` attribute from
/// `thiserror` provides the `Display` and `Error` implementations.
///
/// The sync coordinator's failure policy keys off the variant: user-initiated
/// actions (login, register, submit) surface the message, background reads
/// treat every variant identically and soft-fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid credentials, missing/expired token, or unauthorized access.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Malformed input rejected before or by the backend.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport failure, timeout, or an unparseable response body.
    #[error("Network error: {0}")]
    Network(String),
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(format!("Network error: {}", err))
    }
}
