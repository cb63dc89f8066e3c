//! # Analytics Data Transfer Objects
//!
//! Defines the fraud-forecast report returned by `GET /analytics/forecast`.
//! The payload is a tagged union on its `status` field: backends with too
//! little history return `insufficient_data`, otherwise `ok` with the full
//! forecast and anomaly checks.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Result of a single anomaly check over the recent transaction series.
///
/// `reason` and `z_score` are only present when the backend computed them;
/// a check on too little data carries neither.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnomalyCheck {
    pub is_anomaly: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_score: Option<f64>,
}

/// Fraud-forecast report (`GET /analytics/forecast`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalyticsReport {
    /// Not enough transaction history to run the models.
    InsufficientData { message: String },
    /// Full analysis over the recent window.
    Ok {
        data_points_analyzed: u64,
        /// Predicted transactions per minute for the next ten minutes.
        forecast_next_10_minutes: Vec<f64>,
        velocity_anomaly: AnomalyCheck,
        amount_anomaly: AnomalyCheck,
        fraud_risk_detected: bool,
        /// UTC, emitted by the backend without an offset suffix.
        analyzed_at: NaiveDateTime,
    },
}

/// One plottable point of the load forecast, labeled by minute offset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    pub label: String,
    pub txns: f64,
}

impl AnalyticsReport {
    /// Forecast values paired with `+1m`, `+2m`, ... minute-offset labels,
    /// ready for charting. Empty when the report has no forecast.
    pub fn forecast_points(&self) -> Vec<ForecastPoint> {
        match self {
            AnalyticsReport::InsufficientData { .. } => Vec::new(),
            AnalyticsReport::Ok {
                forecast_next_10_minutes,
                ..
            } => forecast_next_10_minutes
                .iter()
                .enumerate()
                .map(|(i, txns)| ForecastPoint {
                    label: format!("+{}m", i + 1),
                    txns: *txns,
                })
                .collect(),
        }
    }

    /// Whether either anomaly check tripped. `false` when the backend had
    /// too little data to analyze.
    pub fn fraud_risk_detected(&self) -> bool {
        match self {
            AnalyticsReport::InsufficientData { .. } => false,
            AnalyticsReport::Ok {
                fraud_risk_detected,
                ..
            } => *fraud_risk_detected,
        }
    }
}
