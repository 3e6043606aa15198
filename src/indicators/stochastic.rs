// =============================================================================
// Stochastic Oscillator (%K / %D)
// =============================================================================
//
// %K = (close - lowestLow) / (highestHigh - lowestLow) * 100 over each
// trailing `k_period` window. When the window has zero range (high == low
// throughout), %K reads the midpoint 50 to avoid a divide by zero.
//
// %D = simple mean of the most recent `d_period` %K values (all of them when
// fewer exist).

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::{ensure_finite, ensure_period, ensure_same_len};

/// Standard stochastic parameters.
pub const DEFAULT_STOCHASTIC_K: usize = 14;
pub const DEFAULT_STOCHASTIC_D: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticResult {
    pub k: f64,
    pub d: f64,
}

/// Calculate the stochastic oscillator.
///
/// Requires `closes.len() >= k_period` and equal-length input arrays.
pub fn calculate_stochastic(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    k_period: usize,
    d_period: usize,
) -> Result<StochasticResult, IndicatorError> {
    ensure_period("Stochastic", k_period)?;
    ensure_period("Stochastic", d_period)?;
    ensure_same_len("Stochastic", &[highs.len(), lows.len(), closes.len()])?;
    if closes.len() < k_period {
        return Err(IndicatorError::insufficient(
            "Stochastic",
            k_period,
            closes.len(),
        ));
    }
    ensure_finite("Stochastic", highs)?;
    ensure_finite("Stochastic", lows)?;
    ensure_finite("Stochastic", closes)?;

    // --- %K per trailing window ----------------------------------------------
    let mut k_values = Vec::with_capacity(closes.len() - k_period + 1);
    for end in k_period..=closes.len() {
        let start = end - k_period;
        let highest = highs[start..end].iter().fold(f64::MIN, |a, &b| a.max(b));
        let lowest = lows[start..end].iter().fold(f64::MAX, |a, &b| a.min(b));
        let close = closes[end - 1];

        let k = if highest == lowest {
            50.0
        } else {
            (close - lowest) / (highest - lowest) * 100.0
        };
        k_values.push(k);
    }

    let k = k_values[k_values.len() - 1];

    // --- %D: mean of the last `d_period` %K values ----------------------------
    let tail_len = d_period.min(k_values.len());
    let tail = &k_values[k_values.len() - tail_len..];
    let d = tail.iter().sum::<f64>() / tail_len as f64;

    Ok(StochasticResult { k, d })
}
