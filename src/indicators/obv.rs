// =============================================================================
// On-Balance Volume (OBV)
// =============================================================================
//
// OBV keeps a cumulative running total of volume: add the bar's volume on an
// up-close, subtract it on a down-close, leave it unchanged on a flat close.
// The series starts at zero on the first bar.
//
// On top of the raw total, a short-term trend is read from the last 5 values:
// the percent change of the current OBV against their average, with a ±5%
// threshold, classifies the flow as rising, falling, or flat.

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::{ensure_finite, ensure_same_len};

/// Number of trailing OBV values inspected for the trend read.
const TREND_WINDOW: usize = 5;

/// Percent-change threshold separating rising/falling from flat.
const TREND_THRESHOLD_PCT: f64 = 5.0;

/// Short-term direction of the on-balance volume flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObvTrend {
    Rising,
    Falling,
    Flat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObvResult {
    pub current: f64,
    pub trend: ObvTrend,
    pub values: Vec<f64>,
}

/// Compute the OBV series plus its short-term trend.
///
/// # Edge cases
/// - Mismatched array lengths => `InvalidInput`.
/// - Empty input => `InsufficientData`.
/// - Fewer than 5 values => the trend is read over what exists.
/// - Zero recent average => the trend falls back to the sign of the current
///   OBV (the percent change is undefined there).
pub fn calculate_obv(closes: &[f64], volumes: &[f64]) -> Result<ObvResult, IndicatorError> {
    ensure_same_len("OBV", &[closes.len(), volumes.len()])?;
    if closes.is_empty() {
        return Err(IndicatorError::insufficient("OBV", 1, 0));
    }
    ensure_finite("OBV", closes)?;
    ensure_finite("OBV", volumes)?;

    // --- Cumulative running total ---------------------------------------------
    let mut values = Vec::with_capacity(closes.len());
    values.push(0.0);
    for i in 1..closes.len() {
        let prev = values[i - 1];
        let next = if closes[i] > closes[i - 1] {
            prev + volumes[i]
        } else if closes[i] < closes[i - 1] {
            prev - volumes[i]
        } else {
            prev
        };
        values.push(next);
    }

    let current = values[values.len() - 1];

    // --- Short-term trend over the last few values -----------------------------
    let tail_len = TREND_WINDOW.min(values.len());
    let tail = &values[values.len() - tail_len..];
    let recent_avg = tail.iter().sum::<f64>() / tail_len as f64;

    let trend = if recent_avg == 0.0 {
        if current > 0.0 {
            ObvTrend::Rising
        } else if current < 0.0 {
            ObvTrend::Falling
        } else {
            ObvTrend::Flat
        }
    } else {
        let change_pct = (current - recent_avg) / recent_avg.abs() * 100.0;
        if change_pct > TREND_THRESHOLD_PCT {
            ObvTrend::Rising
        } else if change_pct < -TREND_THRESHOLD_PCT {
            ObvTrend::Falling
        } else {
            ObvTrend::Flat
        }
    };

    Ok(ObvResult {
        current,
        trend,
        values,
    })
}
