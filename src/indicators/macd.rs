// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
// MACD line  = EMA(fast) - EMA(slow), aligned from the slow EMA's start.
// Signal     = EMA(signal_period) of the MACD line.
// Histogram  = MACD - signal, per point.
//
// Returns both the latest scalars and the full lines for charting. Undersized
// input yields zero scalars and empty lines rather than an error: MACD feeds
// the chart panel and the aggregate score, where a zero-filled stub beats
// aborting the whole computation.

use serde::{Deserialize, Serialize};

use crate::indicators::moving_average::calculate_ema_series;

/// Standard MACD parameters.
pub const DEFAULT_MACD_FAST: usize = 12;
pub const DEFAULT_MACD_SLOW: usize = 26;
pub const DEFAULT_MACD_SIGNAL: usize = 9;

/// Latest MACD scalars plus the full lines behind them.
///
/// `histogram_line` is aligned with `signal_line`; `macd_line` starts earlier
/// (one value per close from index `slow - 1`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MacdResult {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
    pub histogram_line: Vec<f64>,
}

/// Compute MACD over the closing prices.
///
/// # Edge cases
/// - `fast >= slow`, a zero period, or `closes.len() < slow + signal_period`
///   => `MacdResult::default()` (zero scalars, empty lines).
pub fn calculate_macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> MacdResult {
    if fast == 0 || signal_period == 0 || fast >= slow || closes.len() < slow + signal_period {
        return MacdResult::default();
    }

    let fast_ema = calculate_ema_series(closes, fast);
    let slow_ema = calculate_ema_series(closes, slow);
    if fast_ema.is_empty() || slow_ema.is_empty() {
        return MacdResult::default();
    }

    // --- MACD line: difference of the EMAs from the slow start onward --------
    let offset = slow - fast;
    if fast_ema.len() < slow_ema.len() + offset {
        // Fast EMA truncated by a non-finite value; nothing trustworthy left.
        return MacdResult::default();
    }
    let macd_line: Vec<f64> = (0..slow_ema.len())
        .map(|i| fast_ema[i + offset] - slow_ema[i])
        .collect();

    // --- Signal line: EMA of the MACD line -----------------------------------
    let signal_line = calculate_ema_series(&macd_line, signal_period);
    if signal_line.is_empty() {
        return MacdResult::default();
    }

    // --- Histogram: MACD - signal over the aligned tail -----------------------
    let tail = &macd_line[macd_line.len() - signal_line.len()..];
    let histogram_line: Vec<f64> = tail
        .iter()
        .zip(signal_line.iter())
        .map(|(m, s)| m - s)
        .collect();

    let macd = macd_line[macd_line.len() - 1];
    let signal = signal_line[signal_line.len() - 1];

    MacdResult {
        macd,
        signal,
        histogram: macd - signal,
        macd_line,
        signal_line,
        histogram_line,
    }
}
