// =============================================================================
// Price Position — current price vs. the standard moving-average stack
// =============================================================================
//
// Reports whether the latest close sits above SMA20/50/200 and EMA12/26, plus
// the golden/death-cross state of SMA50 vs SMA200.
//
// Short histories fall back to the current price standing in for any moving
// average whose window does not fit; the comparison then reads "not above"
// and the cross flags stay off. Dashboards routinely ask for this snapshot on
// freshly listed symbols, so fail-fast would be wrong here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IndicatorError;
use crate::indicators::ensure_finite;
use crate::indicators::moving_average::{calculate_ema, calculate_sma};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePosition {
    pub price: f64,
    pub above_sma20: bool,
    pub above_sma50: bool,
    pub above_sma200: bool,
    pub above_ema12: bool,
    pub above_ema26: bool,
    pub golden_cross: bool,
    pub death_cross: bool,
}

/// Compute the price-position snapshot from closing prices.
///
/// Requires a non-empty input; shorter-than-window histories use the price
/// itself as the fallback moving-average value.
pub fn calculate_price_position(closes: &[f64]) -> Result<PricePosition, IndicatorError> {
    if closes.is_empty() {
        return Err(IndicatorError::insufficient("Price Position", 1, 0));
    }
    ensure_finite("Price Position", closes)?;

    let price = closes[closes.len() - 1];

    let sma20 = sma_or_price(closes, 20, price);
    let sma50 = sma_or_price(closes, 50, price);
    let sma200 = sma_or_price(closes, 200, price);
    let ema12 = calculate_ema(closes, 12).unwrap_or_else(|| fallback(12, closes.len(), price));
    let ema26 = calculate_ema(closes, 26).unwrap_or_else(|| fallback(26, closes.len(), price));

    Ok(PricePosition {
        price,
        above_sma20: price > sma20,
        above_sma50: price > sma50,
        above_sma200: price > sma200,
        above_ema12: price > ema12,
        above_ema26: price > ema26,
        golden_cross: sma50 > sma200,
        death_cross: sma50 < sma200,
    })
}

fn sma_or_price(closes: &[f64], period: usize, price: f64) -> f64 {
    match calculate_sma(closes, period) {
        Ok(v) => v,
        Err(_) => fallback(period, closes.len(), price),
    }
}

fn fallback(period: usize, available: usize, price: f64) -> f64 {
    debug!(
        period,
        available, "price position: window does not fit, using current price"
    );
    price
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_empty_input() {
        assert!(matches!(
            calculate_price_position(&[]),
            Err(IndicatorError::InsufficientData { .. })
        ));
    }

    #[test]
    fn position_uptrend_sits_above_everything() {
        // Long steady rise: latest close beats every average, and the
        // faster SMA50 sits above SMA200.
        let closes: Vec<f64> = (1..=250).map(|x| x as f64).collect();
        let pos = calculate_price_position(&closes).unwrap();
        assert!(pos.above_sma20);
        assert!(pos.above_sma50);
        assert!(pos.above_sma200);
        assert!(pos.above_ema12);
        assert!(pos.above_ema26);
        assert!(pos.golden_cross);
        assert!(!pos.death_cross);
    }

    #[test]
    fn position_downtrend_sits_below_everything() {
        let closes: Vec<f64> = (1..=250).rev().map(|x| x as f64).collect();
        let pos = calculate_price_position(&closes).unwrap();
        assert!(!pos.above_sma20);
        assert!(!pos.above_sma200);
        assert!(!pos.golden_cross);
        assert!(pos.death_cross);
    }

    #[test]
    fn position_short_history_falls_back_to_price() {
        // Ten bars: SMA20/50/200 and EMA12/26 all fall back to the price, so
        // nothing reads "above" and both cross flags are off.
        let closes: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let pos = calculate_price_position(&closes).unwrap();
        assert!(!pos.above_sma200);
        assert!(!pos.above_ema26);
        assert!(!pos.golden_cross);
        assert!(!pos.death_cross);
        // SMA20 also does not fit 10 bars.
        assert!(!pos.above_sma20);
    }

    #[test]
    fn position_mid_length_history_mixes_real_and_fallback() {
        // 30 bars: SMA20 and EMA12/26 are real, SMA50/200 fall back.
        let closes: Vec<f64> = (1..=30).map(|x| x as f64).collect();
        let pos = calculate_price_position(&closes).unwrap();
        assert!(pos.above_sma20);
        assert!(pos.above_ema12);
        assert!(!pos.above_sma50, "fallback equals price, never above");
        assert!(!pos.golden_cross);
    }

    #[test]
    fn position_single_bar() {
        let pos = calculate_price_position(&[42.0]).unwrap();
        assert_eq!(pos.price, 42.0);
        assert!(!pos.above_sma20);
        assert!(!pos.golden_cross && !pos.death_cross);
    }
}
