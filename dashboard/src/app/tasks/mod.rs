//! # Async Background Tasks
//!
//! Spawned tasks that perform network I/O and report back to the coordinator
//! over the event channel.

pub(crate) mod sync;
