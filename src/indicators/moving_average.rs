// =============================================================================
// Simple & Exponential Moving Averages
// =============================================================================
//
// SMA is the plain trailing mean. EMA weights recent prices more heavily:
//
//   multiplier = 2 / (period + 1)
//   EMA_t      = (close_t - EMA_{t-1}) * multiplier + EMA_{t-1}
//
// The first EMA value is seeded with the SMA of the first `period` closes.
//
// Both indicators expose a series form for charting; the scalar form is the
// last element of the series so the recurrence lives in one place.
//
// Failure policy differs on purpose: SMA fails fast on short input, while the
// EMA series degrades to empty because MACD and the price-position snapshot
// consume it as a building block.

use crate::error::IndicatorError;
use crate::indicators::{ensure_finite, ensure_period};

/// Compute the SMA series: one trailing mean per close starting at index
/// `period - 1`.
///
/// Requires `data.len() >= period`; shorter input fails with
/// [`IndicatorError::InsufficientData`].
pub fn calculate_sma_series(data: &[f64], period: usize) -> Result<Vec<f64>, IndicatorError> {
    ensure_period("SMA", period)?;
    if data.len() < period {
        return Err(IndicatorError::insufficient("SMA", period, data.len()));
    }
    ensure_finite("SMA", data)?;

    let series = data
        .windows(period)
        .map(|w| w.iter().sum::<f64>() / period as f64)
        .collect();
    Ok(series)
}

/// Compute the current SMA (the trailing mean of the last `period` points).
pub fn calculate_sma(data: &[f64], period: usize) -> Result<f64, IndicatorError> {
    let series = calculate_sma_series(data, period)?;
    // Non-empty: len >= period guarantees at least one window.
    Ok(series[series.len() - 1])
}

/// Compute the EMA series for the given `data` and `period`.
///
/// Returns an empty `Vec` when `period` is zero or `data.len() < period`.
/// Each output element corresponds to a close starting at index `period - 1`.
/// A non-finite intermediate value truncates the series; downstream consumers
/// should not trust a broken tail.
pub fn calculate_ema_series(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period + 1) as f64;

    // Seed: SMA of the first `period` values.
    let sma: f64 = data[..period].iter().sum::<f64>() / period as f64;
    if !sma.is_finite() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(data.len() - period + 1);
    result.push(sma);

    let mut prev = sma;
    for &value in &data[period..] {
        let ema = (value - prev) * multiplier + prev;
        if !ema.is_finite() {
            break;
        }
        result.push(ema);
        prev = ema;
    }

    result
}

/// Current EMA value, or `None` when the series is empty.
pub fn calculate_ema(data: &[f64], period: usize) -> Option<f64> {
    calculate_ema_series(data, period).last().copied()
}
