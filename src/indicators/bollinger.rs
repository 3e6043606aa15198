// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Middle band = SMA(period) of the closes; the standard deviation is computed
// over the same trailing window (population variance). Upper/lower bands sit
// at middle ± multiplier * σ.
//
//   width     = (upper - lower) / middle * 100   (Bollinger Band Width)
//   percent_b = (price - lower) / (upper - lower)
//
// A zero-variance window collapses all three bands onto the price; %B is
// 0/0 there, so it is pinned to the neutral center 0.5.

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::{ensure_finite, ensure_period};

/// Standard Bollinger parameters.
pub const DEFAULT_BOLLINGER_PERIOD: usize = 20;
pub const DEFAULT_BOLLINGER_STD_MULT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsResult {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub width: f64,
    pub percent_b: f64,
}

/// Calculate Bollinger Bands over the trailing `period` closes.
///
/// Requires `closes.len() >= period`; shorter input fails with
/// [`IndicatorError::InsufficientData`].
pub fn calculate_bollinger(
    closes: &[f64],
    period: usize,
    std_mult: f64,
) -> Result<BollingerBandsResult, IndicatorError> {
    ensure_period("Bollinger Bands", period)?;
    if closes.len() < period {
        return Err(IndicatorError::insufficient(
            "Bollinger Bands",
            period,
            closes.len(),
        ));
    }
    ensure_finite("Bollinger Bands", closes)?;
    if !std_mult.is_finite() || std_mult < 0.0 {
        return Err(IndicatorError::InvalidInput(format!(
            "Bollinger Bands: invalid std-dev multiplier {std_mult}"
        )));
    }

    let window = &closes[closes.len() - period..];
    let middle = window.iter().sum::<f64>() / period as f64;

    // Population variance over the same trailing window.
    let variance = window.iter().map(|x| (x - middle).powi(2)).sum::<f64>() / period as f64;
    let std_dev = variance.sqrt();

    let upper = middle + std_mult * std_dev;
    let lower = middle - std_mult * std_dev;

    let width = if middle == 0.0 {
        0.0
    } else {
        (upper - lower) / middle * 100.0
    };

    let price = closes[closes.len() - 1];
    let percent_b = if upper == lower {
        0.5
    } else {
        (price - lower) / (upper - lower)
    };

    Ok(BollingerBandsResult {
        upper,
        middle,
        lower,
        width,
        percent_b,
    })
}
