// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the technical indicators behind
// the dashboard's analysis card. Every function takes plain OHLCV slices
// ordered oldest first and returns freshly allocated output; inputs are never
// mutated.
//
// Failure policy:
// - Indicators with a hard mathematical minimum (RSI, SMA, Bollinger,
//   Stochastic, ATR, OBV, ADX) fail fast with `IndicatorError` before any
//   computation proceeds.
// - The EMA/MACD building blocks degrade to empty series / zero scalars on
//   short input, so chart consumers can render partial history.

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod macd;
pub mod moving_average;
pub mod obv;
pub mod price_position;
pub mod rsi;
pub mod stochastic;

use crate::error::IndicatorError;

/// Reject input containing NaN or infinity.
pub(crate) fn ensure_finite(indicator: &'static str, values: &[f64]) -> Result<(), IndicatorError> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(IndicatorError::InvalidInput(format!(
            "{indicator}: input contains non-finite values"
        )));
    }
    Ok(())
}

/// Reject parallel arrays of different lengths.
pub(crate) fn ensure_same_len(
    indicator: &'static str,
    lens: &[usize],
) -> Result<(), IndicatorError> {
    if lens.windows(2).any(|w| w[0] != w[1]) {
        return Err(IndicatorError::InvalidInput(format!(
            "{indicator}: input arrays have mismatched lengths"
        )));
    }
    Ok(())
}

/// Reject a zero look-back period.
pub(crate) fn ensure_period(indicator: &'static str, period: usize) -> Result<(), IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidInput(format!(
            "{indicator}: period must be positive"
        )));
    }
    Ok(())
}
