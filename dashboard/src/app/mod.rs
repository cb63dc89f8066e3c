//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the session store, the API gateway,
//! and the sync coordinator's event loop.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  App (single coordinator task)                       │
//! │  - login()/logout()/submit()/refresh() user actions  │
//! │  - handle_event() - commit points + stale guard      │
//! │  - subscribers notified after every commit           │
//! ├──────────────────────────────────────────────────────┤
//! │  ViewState: Arc<RwLock<_>>   SessionStore: Arc<_>    │
//! └───────────────▲──────────────────────────────────────┘
//!                 │ async_channel (unbounded)
//! ┌───────────────┴──────────────────────────────────────┐
//! │  Spawned tasks (tokio): one fetch, one event each    │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The coordinator only reacts to discrete triggers: a session acquisition
//! fires the joined initial load, a successful submission fires the three
//! independent slice refreshes, a manual refresh fires the transaction slice.
//! Nothing runs on a timer.
//!
//! ## Stale-Session Guard
//!
//! Every spawned fetch is tagged with the session epoch current at issue
//! time. `handle_event` discards results whose epoch no longer matches, so a
//! logout (or a re-login as someone else) while reads are in flight can never
//! leak the abandoned session's data into the current view.

pub mod events;
mod event_handler;
pub mod handlers;
pub mod session;
pub mod state;
mod tasks;

pub use events::AppEvent;
pub use session::SessionStore;
pub use state::{StatusLevel, StatusMessage, SyncPhase, ViewState};

use crate::config::DashboardConfig;
use crate::core::service::ApiService;
use crate::services::api::ApiClient;
use async_channel::{unbounded, Receiver, Sender};
use event_handler::AppEventHandler;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

/// Observer callback invoked after every view-state commit.
type Subscriber = Box<dyn Fn(&ViewState) + Send>;

/// Main application orchestrator.
///
/// Runs on a single task; view state is behind a lock only so that spawned
/// tasks' results can be committed through `&self` handlers and presentation
/// can read concurrently. All mutation funnels through [`App::handle_event`]
/// commit points and the user-action methods.
pub struct App {
    /// The rendered snapshot. Written only by this struct.
    pub state: Arc<RwLock<ViewState>>,
    /// Bearer-token lifecycle and session epoch.
    pub session: Arc<SessionStore>,
    /// The API gateway, behind the service trait for testability.
    pub(crate) api: Arc<dyn ApiService>,
    event_rx: Receiver<AppEvent>,
    pub(crate) event_tx: Sender<AppEvent>,
    /// Outstanding spawned tasks. Each task sends exactly one event, so this
    /// reaches zero exactly when the system is quiescent.
    pub(crate) pending: usize,
    subscribers: Vec<Subscriber>,
}

impl App {
    /// Create an app talking to a live backend, restoring any persisted
    /// session.
    pub fn new(config: &DashboardConfig) -> Self {
        let api = Arc::new(ApiClient::new(config.api_url.clone(), config.timeout_secs));
        let session = Arc::new(SessionStore::load(&config.session_file));
        Self::with_service(api, session)
    }

    /// Create an app over an injected service implementation. This is the
    /// dependency-injection seam used by tests.
    pub fn with_service(api: Arc<dyn ApiService>, session: Arc<SessionStore>) -> Self {
        let (event_tx, event_rx) = unbounded();

        App {
            state: Arc::new(RwLock::new(ViewState::default())),
            session,
            api,
            event_rx,
            event_tx,
            pending: 0,
            subscribers: Vec::new(),
        }
    }

    /// Kick off the initial load for a restored session, if there is one.
    pub fn start(&mut self) {
        if let Some(token) = self.session.current() {
            {
                let mut state = self.state.write();
                state.phase = SyncPhase::Loading;
            }
            self.pending += 1;
            tasks::sync::initial_load(
                self.api.clone(),
                self.event_tx.clone(),
                token,
                self.session.epoch(),
            );
            self.notify_subscribers();
        }
    }

    /// Register a change observer, invoked synchronously after every commit.
    pub fn subscribe(&mut self, subscriber: impl Fn(&ViewState) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub(crate) fn notify_subscribers(&self) {
        if self.subscribers.is_empty() {
            return;
        }
        let state = self.state.read();
        for subscriber in &self.subscribers {
            subscriber(&state);
        }
    }

    // ========== User Actions ==========

    /// Login with email and password.
    pub fn login(&mut self, email: String, password: String) {
        if handlers::auth::handle_login(
            &self.state,
            self.api.clone(),
            self.event_tx.clone(),
            email,
            password,
        ) {
            self.pending += 1;
        }
        self.notify_subscribers();
    }

    /// Register a new account.
    pub fn register(&mut self, email: String, password: String) {
        if handlers::auth::handle_register(
            &self.state,
            self.api.clone(),
            self.event_tx.clone(),
            email,
            password,
        ) {
            self.pending += 1;
        }
        self.notify_subscribers();
    }

    /// Logout: clear the local session immediately and reset the view.
    ///
    /// The remote call is fire-and-forget; its outcome never affects the
    /// local state, which is already unauthenticated by the time it runs.
    pub fn logout(&mut self) {
        let token = self.session.current();
        self.session.clear();
        self.state.write().reset();
        self.notify_subscribers();

        if let Some(token) = token {
            tasks::sync::remote_logout(self.api.clone(), token);
        }
    }

    /// Submit a new transaction. Inputs arrive as entered; validation happens
    /// before any network work.
    pub fn submit(
        &mut self,
        amount: String,
        currency: String,
        merchant: String,
        location: Option<String>,
    ) {
        if handlers::transactions::handle_submit(
            &self.state,
            &self.session,
            self.api.clone(),
            self.event_tx.clone(),
            amount,
            currency,
            merchant,
            location,
        ) {
            self.pending += 1;
        }
        self.notify_subscribers();
    }

    /// Manually refresh the transaction list.
    pub fn refresh(&mut self) {
        if handlers::transactions::handle_refresh(
            &self.session,
            self.api.clone(),
            self.event_tx.clone(),
        ) {
            self.pending += 1;
        }
    }

    /// Look up a single transaction by id.
    pub fn show_transaction(&mut self, id: Uuid) {
        if handlers::transactions::handle_show_transaction(
            &self.state,
            &self.session,
            self.api.clone(),
            self.event_tx.clone(),
            id,
        ) {
            self.pending += 1;
        }
        self.notify_subscribers();
    }

    // ========== Event Loop ==========

    /// Drain and handle all events currently in the channel, non-blocking.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            self.handle_event(event);
        }
    }

    /// Await and handle exactly one event. Used by tests that need to
    /// interleave actions between commits.
    pub async fn process_one_event(&mut self) {
        if let Ok(event) = self.event_rx.recv().await {
            self.pending = self.pending.saturating_sub(1);
            self.handle_event(event);
        }
    }

    /// Handle events until no spawned task is outstanding.
    ///
    /// Follow-up tasks spawned by a commit (the three refreshes after a
    /// successful submit) extend the wait, so after `settle` returns the view
    /// reflects every consequence of the actions taken so far.
    pub async fn settle(&mut self) {
        while self.pending > 0 {
            self.process_one_event().await;
        }
    }

    /// Handle one async event result via the commit points.
    fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }
}
