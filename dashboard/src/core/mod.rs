//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Client error types (`ApiError`, `Result<T>`)
//! - **[`service`]**: The [`service::ApiService`] trait, the seam between the
//!   sync coordinator and the concrete HTTP gateway

pub mod error;
pub mod service;

pub use error::{ApiError, Result};
pub use service::ApiService;
