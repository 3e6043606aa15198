// =============================================================================
// Average True Range (ATR) — Wilder's Smoothing Method
// =============================================================================
//
// ATR measures volatility by decomposing the entire range of a bar.
//
// True Range (TR) for each bar:
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR is then the smoothed average of TR using Wilder's method:
//   ATR_0 = SMA of first `period` TR values
//   ATR_t = (ATR_{t-1} * (period - 1) + TR_t) / period

use crate::error::IndicatorError;
use crate::indicators::{ensure_finite, ensure_period, ensure_same_len};

/// Standard ATR look-back.
pub const DEFAULT_ATR_PERIOD: usize = 14;

/// Compute the current ATR from parallel high/low/close arrays.
///
/// Requires `closes.len() >= period + 1` (each TR needs a previous close)
/// and equal-length inputs.
pub fn calculate_atr(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
) -> Result<f64, IndicatorError> {
    ensure_period("ATR", period)?;
    ensure_same_len("ATR", &[highs.len(), lows.len(), closes.len()])?;
    if closes.len() < period + 1 {
        return Err(IndicatorError::insufficient("ATR", period + 1, closes.len()));
    }
    ensure_finite("ATR", highs)?;
    ensure_finite("ATR", lows)?;
    ensure_finite("ATR", closes)?;

    // --- Step 1: True Range for each consecutive pair -------------------------
    let n = closes.len();
    let mut tr_values = Vec::with_capacity(n - 1);
    for i in 1..n {
        let hl = highs[i] - lows[i];
        let hc = (highs[i] - closes[i - 1]).abs();
        let lc = (lows[i] - closes[i - 1]).abs();
        tr_values.push(hl.max(hc).max(lc));
    }

    // --- Step 2: Seed ATR with SMA of first `period` TR values ----------------
    let period_f = period as f64;
    let mut atr = tr_values[..period].iter().sum::<f64>() / period_f;

    // --- Step 3: Wilder's smoothing for remaining TR values -------------------
    for &tr in &tr_values[period..] {
        atr = (atr * (period_f - 1.0) + tr) / period_f;
    }

    Ok(atr)
}
