// =============================================================================
// Average Directional Index (ADX) — single-DX variant
// =============================================================================
//
// Quantifies trend strength and direction from directional movement.
//
// Pipeline:
//   1. Per bar: +DM, -DM, and True Range.
//   2. Wilder's smoothing of the three running sums over `period`.
//   3. +DI = smoothed(+DM) / smoothed(TR) * 100
//      -DI = smoothed(-DM) / smoothed(TR) * 100
//   4. DX  = |+DI - -DI| / (+DI + -DI) * 100, reported directly as ADX.
//
// The reported ADX is the latest DX value, not the textbook double-smoothed
// average of DX. The dashboard's 20/25 thresholds were tuned against this
// variant, so it is kept as-is.
//
// Interpretation: ADX > 25 strong trend, > 20 weak trend, else none.

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::{ensure_finite, ensure_period, ensure_same_len};
use crate::types::Signal;

/// Standard ADX look-back.
pub const DEFAULT_ADX_PERIOD: usize = 14;

/// Trend-strength bucket read from the ADX value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStrength {
    Strong,
    Weak,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdxResult {
    pub adx: f64,
    pub plus_di: f64,
    pub minus_di: f64,
    pub trend: TrendStrength,
    pub direction: Signal,
}

/// Compute ADX with directional indexes from parallel high/low/close arrays.
///
/// Requires `closes.len() >= period * 2` and equal-length inputs.
pub fn calculate_adx(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
) -> Result<AdxResult, IndicatorError> {
    ensure_period("ADX", period)?;
    ensure_same_len("ADX", &[highs.len(), lows.len(), closes.len()])?;
    if closes.len() < period * 2 {
        return Err(IndicatorError::insufficient("ADX", period * 2, closes.len()));
    }
    ensure_finite("ADX", highs)?;
    ensure_finite("ADX", lows)?;
    ensure_finite("ADX", closes)?;

    // --- Step 1: Raw +DM, -DM, and True Range per bar transition --------------
    let n = closes.len();
    let mut plus_dm = Vec::with_capacity(n - 1);
    let mut minus_dm = Vec::with_capacity(n - 1);
    let mut tr_vals = Vec::with_capacity(n - 1);

    for i in 1..n {
        let tr = (highs[i] - lows[i])
            .max((highs[i] - closes[i - 1]).abs())
            .max((lows[i] - closes[i - 1]).abs());

        let up_move = highs[i] - highs[i - 1];
        let down_move = lows[i - 1] - lows[i];

        let pdm = if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        };
        let mdm = if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        };

        plus_dm.push(pdm);
        minus_dm.push(mdm);
        tr_vals.push(tr);
    }

    // --- Step 2: Wilder's smoothing of the running sums ------------------------
    let period_f = period as f64;
    let mut smooth_plus_dm: f64 = plus_dm[..period].iter().sum();
    let mut smooth_minus_dm: f64 = minus_dm[..period].iter().sum();
    let mut smooth_tr: f64 = tr_vals[..period].iter().sum();

    for i in period..plus_dm.len() {
        smooth_plus_dm = smooth_plus_dm - smooth_plus_dm / period_f + plus_dm[i];
        smooth_minus_dm = smooth_minus_dm - smooth_minus_dm / period_f + minus_dm[i];
        smooth_tr = smooth_tr - smooth_tr / period_f + tr_vals[i];
    }

    // --- Step 3 & 4: DI pair and the single DX reported as ADX ----------------
    let (plus_di, minus_di) = if smooth_tr == 0.0 {
        // Zero-range history: no directional information at all.
        (0.0, 0.0)
    } else {
        (
            smooth_plus_dm / smooth_tr * 100.0,
            smooth_minus_dm / smooth_tr * 100.0,
        )
    };

    let di_sum = plus_di + minus_di;
    let adx = if di_sum == 0.0 {
        0.0
    } else {
        (plus_di - minus_di).abs() / di_sum * 100.0
    };

    let trend = if adx > 25.0 {
        TrendStrength::Strong
    } else if adx > 20.0 {
        TrendStrength::Weak
    } else {
        TrendStrength::None
    };

    let direction = if plus_di > minus_di && adx > 20.0 {
        Signal::Bullish
    } else if minus_di > plus_di && adx > 20.0 {
        Signal::Bearish
    } else {
        Signal::Neutral
    };

    Ok(AdxResult {
        adx,
        plus_di,
        minus_di,
        trend,
        direction,
    })
}
