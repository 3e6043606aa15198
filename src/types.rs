// =============================================================================
// Shared types used across the indicator engine and signal layer
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading bar as supplied by the market-data collaborator.
///
/// Series are always ordered oldest first; the engine never mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Extract the closing prices from a bar series.
pub fn closes(series: &[PricePoint]) -> Vec<f64> {
    series.iter().map(|p| p.close).collect()
}

/// Extract the highs from a bar series.
pub fn highs(series: &[PricePoint]) -> Vec<f64> {
    series.iter().map(|p| p.high).collect()
}

/// Extract the lows from a bar series.
pub fn lows(series: &[PricePoint]) -> Vec<f64> {
    series.iter().map(|p| p.low).collect()
}

/// Extract the volumes from a bar series.
pub fn volumes(series: &[PricePoint]) -> Vec<f64> {
    series.iter().map(|p| p.volume).collect()
}

/// Tri-state semantic reading of a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Bullish,
    Neutral,
    Bearish,
}

impl Default for Signal {
    fn default() -> Self {
        Self::Neutral
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "Bullish"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Bearish => write!(f, "Bearish"),
        }
    }
}

/// The classified, human-readable form of one indicator value.
///
/// `label` and `description` are presentation strings for the dashboard;
/// `value` carries a formatted reading (e.g. `"+10.0%"`) when one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub signal: Signal,
    pub label: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SignalResult {
    pub fn new(signal: Signal, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            signal,
            label: label.into(),
            description: description.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}
