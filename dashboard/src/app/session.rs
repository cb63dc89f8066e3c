//! # Session Store
//!
//! Owns the bearer-token lifecycle: acquire, persist, clear, and the session
//! epoch that in-flight fetches are tagged with.
//!
//! The token survives process restarts in a small JSON file (the client-side
//! analog of browser-local storage). Persistence failures are logged and
//! swallowed; the in-memory token stays authoritative.
//!
//! ## Session Epoch
//!
//! Every `acquire` and `clear` bumps a monotonically increasing epoch. A
//! background fetch captures the epoch at issue time, and the event handler
//! discards any result whose epoch no longer matches. That is the whole
//! stale-session guard: a response from an abandoned session can never be
//! committed to view state, no matter when it resolves.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// On-disk shape of the persisted session.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    access_token: String,
}

/// Bearer-token holder with epoch tagging and file persistence.
///
/// The store itself cannot fail: IO errors on persist/remove are logged and
/// swallowed, and every accessor is infallible.
pub struct SessionStore {
    token: RwLock<Option<String>>,
    epoch: AtomicU64,
    path: PathBuf,
}

impl SessionStore {
    /// Create an empty store persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            token: RwLock::new(None),
            epoch: AtomicU64::new(0),
            path: path.into(),
        }
    }

    /// Create a store, restoring a previously persisted token if one exists.
    ///
    /// A restored token starts a fresh epoch, exactly as `acquire` would.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let store = Self::new(path);
        match Self::read_from_file(&store.path) {
            Ok(Some(token)) => {
                tracing::info!(path = ?store.path, "Restored persisted session");
                store.acquire(token);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(path = ?store.path, error = %e, "Failed to read session file");
            }
        }
        store
    }

    /// Store a token, persist it, and start a new epoch.
    ///
    /// Returns the new epoch, which callers tag their initial-load fetches
    /// with.
    pub fn acquire(&self, token: String) -> u64 {
        *self.token.write() = Some(token.clone());
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;

        if let Err(e) = self.write_to_file(&token) {
            tracing::warn!(path = ?self.path, error = %e, "Failed to persist session");
        }
        tracing::debug!(epoch = epoch, "Session acquired");
        epoch
    }

    /// Drop the token, delete the persisted file, and start a new epoch.
    ///
    /// Any fetch issued under an earlier epoch becomes stale immediately.
    pub fn clear(&self) -> u64 {
        *self.token.write() = None;
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;

        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                tracing::warn!(path = ?self.path, error = %e, "Failed to remove session file");
            }
        }
        tracing::debug!(epoch = epoch, "Session cleared");
        epoch
    }

    /// The current token, or `None` when unauthenticated.
    pub fn current(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// The current session epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Whether a result tagged with `epoch` may still be committed.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch() == epoch
    }

    fn read_from_file(path: &Path) -> Result<Option<String>, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let session: PersistedSession = serde_json::from_str(&content)?;
        if session.access_token.is_empty() {
            return Ok(None);
        }
        Ok(Some(session.access_token))
    }

    fn write_to_file(&self, token: &str) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let session = PersistedSession {
            access_token: token.to_string(),
        };
        let content = serde_json::to_string_pretty(&session)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
