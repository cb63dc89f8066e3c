//! # Utility Functions
//!
//! - **[`validation`]**: user-input validation for the submission and auth forms

pub mod validation;
