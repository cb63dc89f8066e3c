//! # Dashboard Binary
//!
//! Line-oriented presentation over the dashboard library. Holds no state of
//! its own: it subscribes to view-state notifications, renders a text
//! snapshot, and translates typed commands into [`App`] actions.

use dashboard::app::{App, StatusLevel, SyncPhase, ViewState};
use dashboard::config::DashboardConfig;
use dashboard::services::api::{client, ApiClient};
use tokio::io::{AsyncBufReadExt, BufReader};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let config = DashboardConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(api_url = %config.api_url, "Starting dashboard client");

    // Reachability probe; a dead backend is worth knowing about but not fatal.
    let probe = ApiClient::new(config.api_url.clone(), config.timeout_secs);
    match client::health(&probe).await {
        Ok(()) => tracing::info!("Backend reachable"),
        Err(e) => tracing::warn!(error = %e, "Backend health probe failed"),
    }

    let mut app = App::new(&config);
    app.subscribe(render);

    if app.session.current().is_some() {
        println!("Restored previous session, loading dashboard...");
    }
    app.start();
    app.settle().await;

    println!("Commands: register <email> <password> | login <email> <password> | logout");
    println!("          submit <amount> <currency> <merchant> [location] | refresh | show <id> | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["register", email, password] => {
                app.register(email.to_string(), password.to_string());
            }
            ["login", email, password] => {
                app.login(email.to_string(), password.to_string());
            }
            ["logout"] => {
                app.logout();
            }
            ["submit", amount, currency, merchant, location @ ..] => {
                let location = if location.is_empty() {
                    None
                } else {
                    Some(location.join(" "))
                };
                app.submit(
                    amount.to_string(),
                    currency.to_string(),
                    merchant.to_string(),
                    location,
                );
            }
            ["refresh"] => {
                app.refresh();
            }
            ["show", id] => match id.parse::<Uuid>() {
                Ok(id) => app.show_transaction(id),
                Err(_) => println!("'{}' is not a transaction id", id),
            },
            _ => {
                println!("Unrecognized command: {}", line.trim());
            }
        }
        app.settle().await;
    }

    Ok(())
}

/// Configure the tracing subscriber, honoring `LOG_LEVEL`.
fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "warn".to_string())
        .to_lowercase();

    let filter = match log_level.as_str() {
        "trace" => tracing_subscriber::EnvFilter::new("trace"),
        "debug" => tracing_subscriber::EnvFilter::new("debug"),
        "info" => tracing_subscriber::EnvFilter::new("info"),
        "warn" => tracing_subscriber::EnvFilter::new("warn"),
        "error" => tracing_subscriber::EnvFilter::new("error"),
        _ => tracing_subscriber::EnvFilter::new("warn"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");
}

/// Render a text snapshot of the view state. Registered as the sole
/// subscriber; re-runs on every commit.
fn render(state: &ViewState) {
    if let Some(status) = &state.status {
        match status.level {
            StatusLevel::Info => println!("[ok] {}", status.text),
            StatusLevel::Error => println!("[error] {}", status.text),
        }
    }

    match state.phase {
        SyncPhase::Unauthenticated => {
            println!("-- not logged in --");
            return;
        }
        SyncPhase::Loading => {
            println!("-- loading dashboard --");
            return;
        }
        SyncPhase::Ready => {}
    }

    println!("queue depth: {}", state.queue_length);

    match &state.analytics {
        Some(report) => {
            if report.fraud_risk_detected() {
                println!("analytics: FRAUD RISK DETECTED");
            } else {
                println!("analytics: no fraud risk");
            }
            let points = report.forecast_points();
            if !points.is_empty() {
                let series: Vec<String> = points
                    .iter()
                    .map(|p| format!("{}={:.1}", p.label, p.txns))
                    .collect();
                println!("forecast: {}", series.join(" "));
            }
        }
        None => println!("analytics: no data yet"),
    }

    if state.transactions.is_empty() {
        println!("transactions: none");
    } else {
        println!("transactions ({}):", state.transactions.len());
        for txn in &state.transactions {
            println!(
                "  {} {:>10.2} {} {:<20} {:<10} {}{}",
                txn.created_at.format("%Y-%m-%d %H:%M:%S"),
                txn.amount,
                txn.currency,
                txn.merchant,
                format!("{:?}", txn.status).to_lowercase(),
                txn.id,
                if txn.is_flagged { "  [FLAGGED]" } else { "" },
            );
        }
    }

    if let Some(selected) = &state.selected {
        println!(
            "selected: {} | {} {} at {} ({}) flagged={}",
            selected.id,
            selected.amount,
            selected.currency,
            selected.merchant,
            selected.location.as_deref().unwrap_or("-"),
            selected.is_flagged,
        );
    }
}
