//! # Sync Coordinator Scenarios
//!
//! End-to-end coordinator tests over a scripted [`ApiService`] mock: login
//! and initial load, submission refreshes, client-side validation, the
//! stale-session guard, and the soft-fail policy for background reads.

use async_trait::async_trait;
use dashboard::app::{App, SessionStore, StatusLevel, SyncPhase, ViewState};
use dashboard::core::error::ApiError;
use dashboard::core::service::ApiService;
use parking_lot::Mutex;
use shared::{
    AnalyticsReport, AnomalyCheck, Currency, NewTransaction, QueueLength, RegisterResponse,
    Transaction, TransactionStatus,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

const TOKEN: &str = "tok1";

/// Scripted backend. Flags flip individual operations into failure mode;
/// counters record how often the gateway was actually reached.
#[derive(Default)]
struct MockApi {
    transactions: Mutex<Vec<Transaction>>,
    forecast: Mutex<Option<AnalyticsReport>>,
    queue_length: AtomicUsize,
    fail_login: AtomicBool,
    fail_logout: AtomicBool,
    fail_list: AtomicBool,
    fail_forecast: AtomicBool,
    fail_submit: AtomicBool,
    submit_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl MockApi {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn seed_transaction(&self, merchant: &str, amount: f64) {
        self.transactions.lock().push(make_transaction(merchant, amount));
    }

    fn set_forecast(&self, report: AnalyticsReport) {
        *self.forecast.lock() = Some(report);
    }

    fn check_token(&self, token: &str) -> Result<(), ApiError> {
        if token == TOKEN {
            Ok(())
        } else {
            Err(ApiError::Auth("Could not validate credentials".to_string()))
        }
    }
}

#[async_trait]
impl ApiService for MockApi {
    async fn register(
        &self,
        email: String,
        _password: String,
        _role: String,
    ) -> Result<RegisterResponse, ApiError> {
        Ok(RegisterResponse {
            message: "User registered successfully".to_string(),
            email,
        })
    }

    async fn login(&self, _email: String, _password: String) -> Result<String, ApiError> {
        if self.fail_login.load(Ordering::SeqCst) {
            Err(ApiError::Auth("Invalid credentials".to_string()))
        } else {
            Ok(TOKEN.to_string())
        }
    }

    async fn logout(&self, _token: String) -> Result<(), ApiError> {
        if self.fail_logout.load(Ordering::SeqCst) {
            Err(ApiError::Network("Network error: connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    async fn list_transactions(&self, token: String) -> Result<Vec<Transaction>, ApiError> {
        self.check_token(&token)?;
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ApiError::Network("Network error: timeout".to_string()));
        }
        // Most recent first, as the backend returns them.
        let mut transactions = self.transactions.lock().clone();
        transactions.reverse();
        Ok(transactions)
    }

    async fn get_transaction(&self, token: String, id: Uuid) -> Result<Transaction, ApiError> {
        self.check_token(&token)?;
        self.transactions
            .lock()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Transaction not found".to_string()))
    }

    async fn submit_transaction(
        &self,
        token: String,
        transaction: NewTransaction,
    ) -> Result<Transaction, ApiError> {
        self.check_token(&token)?;
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_submit.load(Ordering::SeqCst) {
            return Err(ApiError::Validation("Amount must be positive".to_string()));
        }

        let created = Transaction {
            id: Uuid::new_v4(),
            amount: transaction.amount,
            currency: transaction.currency,
            merchant: transaction.merchant,
            location: transaction.location,
            status: TransactionStatus::Pending,
            is_flagged: transaction.amount > 10_000.0,
            created_at: chrono::Utc::now().naive_utc(),
        };
        self.transactions.lock().push(created.clone());
        self.queue_length.fetch_add(1, Ordering::SeqCst);
        Ok(created)
    }

    async fn get_forecast(&self, token: String) -> Result<AnalyticsReport, ApiError> {
        self.check_token(&token)?;
        if self.fail_forecast.load(Ordering::SeqCst) {
            return Err(ApiError::Network("Network error: timeout".to_string()));
        }
        Ok(self.forecast.lock().clone().unwrap_or_else(insufficient_data))
    }

    async fn get_queue_length(&self, token: String) -> Result<QueueLength, ApiError> {
        self.check_token(&token)?;
        Ok(QueueLength {
            transactions_in_queue: self.queue_length.load(Ordering::SeqCst) as u64,
        })
    }

    async fn health(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

fn make_transaction(merchant: &str, amount: f64) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        amount,
        currency: Currency::Usd,
        merchant: merchant.to_string(),
        location: None,
        status: TransactionStatus::Processed,
        is_flagged: false,
        created_at: chrono::Utc::now().naive_utc(),
    }
}

fn insufficient_data() -> AnalyticsReport {
    AnalyticsReport::InsufficientData {
        message: "Not enough transactions to analyze yet".to_string(),
    }
}

fn ok_report(forecast: Vec<f64>) -> AnalyticsReport {
    AnalyticsReport::Ok {
        data_points_analyzed: 42,
        forecast_next_10_minutes: forecast,
        velocity_anomaly: AnomalyCheck {
            is_anomaly: false,
            reason: None,
            z_score: Some(0.4),
        },
        amount_anomaly: AnomalyCheck {
            is_anomaly: false,
            reason: None,
            z_score: Some(0.2),
        },
        fraud_risk_detected: false,
        analyzed_at: chrono::Utc::now().naive_utc(),
    }
}

fn test_app(api: Arc<MockApi>) -> (App, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let session = Arc::new(SessionStore::new(dir.path().join("session.json")));
    (App::with_service(api, session), dir)
}

async fn logged_in_app(api: Arc<MockApi>) -> (App, tempfile::TempDir) {
    let (mut app, dir) = test_app(api);
    app.login("a@x.com".to_string(), "p".to_string());
    app.settle().await;
    (app, dir)
}

#[tokio::test]
async fn test_login_reaches_ready_with_empty_triple() {
    // Arrange
    let api = MockApi::new();
    let (mut app, _dir) = test_app(api);

    // Act
    app.login("a@x.com".to_string(), "p".to_string());
    app.settle().await;

    // Assert
    let state = app.state.read();
    assert_eq!(state.phase, SyncPhase::Ready);
    assert!(state.transactions.is_empty());
    assert_eq!(state.analytics, Some(insufficient_data()));
    assert_eq!(state.queue_length, 0);
    assert_eq!(app.session.current(), Some(TOKEN.to_string()));
}

#[tokio::test]
async fn test_login_failure_surfaces_message_and_stays_unauthenticated() {
    let api = MockApi::new();
    api.fail_login.store(true, Ordering::SeqCst);
    let (mut app, _dir) = test_app(api);

    app.login("a@x.com".to_string(), "wrong".to_string());
    app.settle().await;

    let state = app.state.read();
    assert_eq!(state.phase, SyncPhase::Unauthenticated);
    let status = state.status.as_ref().expect("login failure should set status");
    assert_eq!(status.level, StatusLevel::Error);
    assert!(status.text.contains("Invalid credentials"));
    assert_eq!(app.session.current(), None);
}

#[tokio::test]
async fn test_submit_refreshes_all_three_slices() {
    // Arrange
    let api = MockApi::new();
    let (mut app, _dir) = logged_in_app(api.clone()).await;
    api.set_forecast(ok_report(vec![1.0, 2.0, 3.0]));

    // Act
    app.submit(
        "50".to_string(),
        "USD".to_string(),
        "Acme".to_string(),
        Some("NYC".to_string()),
    );
    app.settle().await;

    // Assert: the list grew by exactly one, with the server-returned entry.
    let state = app.state.read();
    assert_eq!(state.transactions.len(), 1);
    let entry = &state.transactions[0];
    assert_eq!(entry.merchant, "Acme");
    assert_eq!(entry.amount, 50.0);
    assert_eq!(entry.currency, Currency::Usd);
    assert_eq!(entry.location.as_deref(), Some("NYC"));
    assert_eq!(entry.status, TransactionStatus::Pending);
    assert!(!entry.is_flagged);

    // The other two slices were re-fetched too.
    assert_eq!(state.queue_length, 1);
    assert_eq!(state.analytics, Some(ok_report_with_same_shape(&state)));

    let status = state.status.as_ref().expect("submit should set status");
    assert_eq!(status.level, StatusLevel::Info);
}

// The mock stamps analyzed_at at fetch time, so compare everything except the
// timestamp by reconstructing from the committed report.
fn ok_report_with_same_shape(state: &ViewState) -> AnalyticsReport {
    match state.analytics.as_ref().expect("analytics should be committed") {
        AnalyticsReport::Ok { analyzed_at, .. } => {
            let mut report = ok_report(vec![1.0, 2.0, 3.0]);
            if let AnalyticsReport::Ok {
                analyzed_at: stamp, ..
            } = &mut report
            {
                *stamp = *analyzed_at;
            }
            report
        }
        other => panic!("expected ok report, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_amount_never_reaches_gateway() {
    let api = MockApi::new();
    let (mut app, _dir) = logged_in_app(api.clone()).await;

    for bad_amount in ["abc", "-5", "0", ""] {
        app.submit(
            bad_amount.to_string(),
            "USD".to_string(),
            "Acme".to_string(),
            None,
        );
        app.settle().await;

        let state = app.state.read();
        let status = state.status.as_ref().expect("rejection should set status");
        assert_eq!(status.level, StatusLevel::Error, "amount {:?}", bad_amount);
        assert!(state.transactions.is_empty());
    }

    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unsupported_currency_rejected_client_side() {
    let api = MockApi::new();
    let (mut app, _dir) = logged_in_app(api.clone()).await;

    app.submit(
        "50".to_string(),
        "BTC".to_string(),
        "Acme".to_string(),
        None,
    );
    app.settle().await;

    let state = app.state.read();
    let status = state.status.as_ref().expect("rejection should set status");
    assert_eq!(status.level, StatusLevel::Error);
    assert!(status.text.contains("BTC"));
    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_submit_without_session_short_circuits() {
    let api = MockApi::new();
    let (mut app, _dir) = test_app(api.clone());

    app.submit(
        "50".to_string(),
        "USD".to_string(),
        "Acme".to_string(),
        None,
    );
    app.settle().await;

    let state = app.state.read();
    let status = state.status.as_ref().expect("rejection should set status");
    assert_eq!(status.level, StatusLevel::Error);
    assert_eq!(api.submit_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_server_side_validation_error_leaves_slices_unchanged() {
    let api = MockApi::new();
    api.seed_transaction("Existing", 10.0);
    let (mut app, _dir) = logged_in_app(api.clone()).await;
    api.fail_submit.store(true, Ordering::SeqCst);

    app.submit(
        "50".to_string(),
        "USD".to_string(),
        "Acme".to_string(),
        None,
    );
    app.settle().await;

    let state = app.state.read();
    assert_eq!(state.transactions.len(), 1);
    assert_eq!(state.transactions[0].merchant, "Existing");
    let status = state.status.as_ref().expect("rejection should set status");
    assert_eq!(status.level, StatusLevel::Error);
    assert!(status.text.contains("Amount must be positive"));
}

#[tokio::test]
async fn test_logout_discards_in_flight_initial_load() {
    // Arrange: login resolves, which acquires the session and fires the
    // initial load.
    let api = MockApi::new();
    api.seed_transaction("Should not leak", 99.0);
    let (mut app, _dir) = test_app(api);

    app.login("a@x.com".to_string(), "p".to_string());
    app.process_one_event().await; // LoginResult: acquire + spawn load

    // Act: clear the session while the load is still in flight, then let the
    // stale result arrive.
    app.logout();
    app.settle().await;

    // Assert: the abandoned session's data never reached the view.
    let state = app.state.read();
    assert_eq!(*state, ViewState::default());
    assert_eq!(app.session.current(), None);
}

#[tokio::test]
async fn test_relogin_discards_previous_sessions_in_flight_load() {
    let api = MockApi::new();
    let (mut app, _dir) = test_app(api.clone());

    app.login("a@x.com".to_string(), "p".to_string());
    app.process_one_event().await; // first session's load in flight

    // A second login bumps the epoch before the first load resolves.
    api.seed_transaction("Second session data", 5.0);
    app.login("b@x.com".to_string(), "p".to_string());
    app.settle().await;

    // Only the second session's load may commit; it sees the seeded record.
    let state = app.state.read();
    assert_eq!(state.phase, SyncPhase::Ready);
    assert_eq!(state.transactions.len(), 1);
    assert_eq!(state.transactions[0].merchant, "Second session data");
}

#[tokio::test]
async fn test_refresh_is_idempotent_without_server_change() {
    let api = MockApi::new();
    api.seed_transaction("First", 1.0);
    api.seed_transaction("Second", 2.0);
    let (mut app, _dir) = logged_in_app(api.clone()).await;

    app.refresh();
    app.settle().await;
    let first = app.state.read().transactions.clone();

    app.refresh();
    app.settle().await;
    let second = app.state.read().transactions.clone();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
    // Most recent first.
    assert_eq!(first[0].merchant, "Second");
    assert!(api.list_calls.load(Ordering::SeqCst) >= 3);
}

#[tokio::test]
async fn test_partial_refresh_failure_commits_surviving_slices() {
    // Arrange
    let api = MockApi::new();
    let (mut app, _dir) = logged_in_app(api.clone()).await;
    api.fail_forecast.store(true, Ordering::SeqCst);

    // Act
    app.submit(
        "50".to_string(),
        "USD".to_string(),
        "Acme".to_string(),
        None,
    );
    app.settle().await;

    // Assert: transactions and queue committed independently of the failed
    // forecast slice; the failure stays invisible.
    let state = app.state.read();
    assert_eq!(state.transactions.len(), 1);
    assert_eq!(state.queue_length, 1);
    assert_eq!(state.analytics, Some(insufficient_data())); // prior value kept
    let status = state.status.as_ref().expect("submit should set status");
    assert_eq!(status.level, StatusLevel::Info);
}

#[tokio::test]
async fn test_failed_initial_load_soft_fails_to_ready() {
    let api = MockApi::new();
    api.fail_list.store(true, Ordering::SeqCst);
    let (mut app, _dir) = test_app(api);

    app.login("a@x.com".to_string(), "p".to_string());
    app.settle().await;

    // The dashboard still renders, just with no data yet.
    let state = app.state.read();
    assert_eq!(state.phase, SyncPhase::Ready);
    assert!(state.transactions.is_empty());
    assert!(state.analytics.is_none());
}

#[tokio::test]
async fn test_logout_clears_locally_even_when_remote_fails() {
    let api = MockApi::new();
    let (mut app, _dir) = logged_in_app(api.clone()).await;
    api.fail_logout.store(true, Ordering::SeqCst);

    app.logout();
    app.settle().await;

    assert_eq!(app.session.current(), None);
    assert_eq!(app.state.read().phase, SyncPhase::Unauthenticated);
}

#[tokio::test]
async fn test_restored_session_triggers_initial_load() {
    let api = MockApi::new();
    api.seed_transaction("Persisted", 7.0);

    let dir = tempfile::tempdir().expect("tempdir should be creatable");
    let path = dir.path().join("session.json");
    SessionStore::new(&path).acquire(TOKEN.to_string());

    let session = Arc::new(SessionStore::load(&path));
    let mut app = App::with_service(api, session);
    app.start();
    app.settle().await;

    let state = app.state.read();
    assert_eq!(state.phase, SyncPhase::Ready);
    assert_eq!(state.transactions.len(), 1);
    assert_eq!(state.transactions[0].merchant, "Persisted");
}

#[tokio::test]
async fn test_show_transaction_commits_selected_slot() {
    let api = MockApi::new();
    api.seed_transaction("Lookup target", 12.5);
    let id = api.transactions.lock()[0].id;
    let (mut app, _dir) = logged_in_app(api.clone()).await;

    app.show_transaction(id);
    app.settle().await;

    let state = app.state.read();
    let selected = state.selected.as_ref().expect("lookup should commit");
    assert_eq!(selected.id, id);
    assert_eq!(selected.merchant, "Lookup target");
}

#[tokio::test]
async fn test_show_unknown_transaction_surfaces_not_found() {
    let api = MockApi::new();
    let (mut app, _dir) = logged_in_app(api).await;

    app.show_transaction(Uuid::new_v4());
    app.settle().await;

    let state = app.state.read();
    assert!(state.selected.is_none());
    let status = state.status.as_ref().expect("lookup failure should set status");
    assert_eq!(status.level, StatusLevel::Error);
    assert!(status.text.contains("not found"));
}

#[tokio::test]
async fn test_register_surfaces_confirmation() {
    let api = MockApi::new();
    let (mut app, _dir) = test_app(api);

    app.register("new@x.com".to_string(), "pw".to_string());
    app.settle().await;

    let state = app.state.read();
    let status = state.status.as_ref().expect("register should set status");
    assert_eq!(status.level, StatusLevel::Info);
    assert!(status.text.contains("new@x.com"));
    // Registration creates no session.
    assert_eq!(state.phase, SyncPhase::Unauthenticated);
}

#[tokio::test]
async fn test_subscribers_notified_on_commits() {
    let api = MockApi::new();
    let (mut app, _dir) = test_app(api);

    let notifications = Arc::new(AtomicUsize::new(0));
    let counter = notifications.clone();
    app.subscribe(move |_state| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    app.login("a@x.com".to_string(), "p".to_string());
    app.settle().await;

    // At least the action itself, the login commit, and the load commit.
    assert!(notifications.load(Ordering::SeqCst) >= 3);
}
