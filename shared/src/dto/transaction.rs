//! # Transaction Data Transfer Objects
//!
//! Defines the transaction records exchanged with the backend, the submission
//! payload, and the ingestion-queue depth metric.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currency codes accepted by the dashboard submission form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Inr,
}

impl Currency {
    /// ISO 4217 code as it appears on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
        }
    }

    /// Parse a code, case-insensitively. Returns `None` for unsupported codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            "INR" => Some(Currency::Inr),
            _ => None,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Pipeline status of a transaction. The ingestion worker moves records from
/// `pending` to `processed`; unrecognized statuses from newer backends map to
/// [`TransactionStatus::Unknown`] instead of failing the whole list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Processed,
    #[serde(other)]
    Unknown,
}

/// Submission payload for a new transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub currency: Currency,
    pub merchant: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A transaction record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub currency: Currency,
    pub merchant: String,
    pub location: Option<String>,
    pub status: TransactionStatus,
    pub is_flagged: bool,
    /// UTC, emitted by the backend without an offset suffix.
    pub created_at: NaiveDateTime,
}

/// Depth of the ingestion queue (`GET /transactions/stream/length`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueueLength {
    pub transactions_in_queue: u64,
}
