//! # External Services
//!
//! Integrations with external systems. The only collaborator of this client
//! is the backend REST API, reached through the [`api`] module.

pub mod api;
