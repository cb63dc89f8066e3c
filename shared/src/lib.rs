//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the dashboard client and the
//! Aether backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Registration, login, and token DTOs
//!   - **[`dto::transaction`]**: Transaction records and queue metrics
//!   - **[`dto::analytics`]**: Fraud-forecast report DTOs
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Timestamps arrive as naive ISO-8601 strings (the backend emits UTC
//!   without an offset), so they map to [`chrono::NaiveDateTime`]
//! - Unknown fields in responses are ignored, so the backend may grow its
//!   payloads without breaking older clients
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::{LoginRequest, TokenResponse};
//!
//! let request = LoginRequest {
//!     email: "analyst@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("analyst@example.com"));
//!
//! let response: TokenResponse =
//!     serde_json::from_str(r#"{"access_token":"eyJhbGciOiJIUzI1NiJ9..."}"#).unwrap();
//! assert!(!response.access_token.is_empty());
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
