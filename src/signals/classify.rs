// =============================================================================
// Per-Indicator Signal Classifiers
// =============================================================================
//
// Each classifier maps one indicator reading onto a tri-state signal with a
// fixed, documented threshold. No configuration, no learned parameters.
// Boundaries are inclusive at the extreme: an RSI of exactly 30 is neutral,
// a volume ratio of exactly 1.5 is neutral, and so on.
//
// Labels and descriptions are presentation strings for the dashboard cards;
// the `signal` enum and the threshold boundaries are the contract.

use crate::indicators::bollinger::BollingerBandsResult;
use crate::indicators::obv::ObvTrend;
use crate::types::{Signal, SignalResult};

/// RSI: < 30 oversold (bullish), > 70 overbought (bearish).
pub fn rsi_signal(rsi: f64) -> SignalResult {
    if rsi < 30.0 {
        SignalResult::new(
            Signal::Bullish,
            "Oversold",
            format!("RSI at {rsi:.1} suggests the sell-off is overdone"),
        )
        .with_value(format!("{rsi:.1}"))
    } else if rsi > 70.0 {
        SignalResult::new(
            Signal::Bearish,
            "Overbought",
            format!("RSI at {rsi:.1} suggests the rally is stretched"),
        )
        .with_value(format!("{rsi:.1}"))
    } else {
        SignalResult::new(
            Signal::Neutral,
            "Neutral",
            format!("RSI at {rsi:.1} sits inside the 30-70 range"),
        )
        .with_value(format!("{rsi:.1}"))
    }
}

/// MACD histogram: positive and rising is bullish, negative and falling is
/// bearish, anything mixed is neutral.
pub fn macd_signal(histogram: f64, prev_histogram: f64) -> SignalResult {
    if histogram > 0.0 && histogram > prev_histogram {
        SignalResult::new(
            Signal::Bullish,
            "Bullish Momentum",
            format!("MACD histogram at {histogram:.3} is positive and expanding"),
        )
        .with_value(format!("{histogram:.3}"))
    } else if histogram < 0.0 && histogram < prev_histogram {
        SignalResult::new(
            Signal::Bearish,
            "Bearish Momentum",
            format!("MACD histogram at {histogram:.3} is negative and contracting"),
        )
        .with_value(format!("{histogram:.3}"))
    } else {
        SignalResult::new(
            Signal::Neutral,
            "Mixed Momentum",
            format!("MACD histogram at {histogram:.3} shows no clear push"),
        )
        .with_value(format!("{histogram:.3}"))
    }
}

/// Price vs. a simple moving average; the period only feeds the label.
pub fn sma_signal(price: f64, sma: f64, period: usize) -> SignalResult {
    let value = if sma == 0.0 {
        None
    } else {
        Some(format!("{:+.1}%", (price - sma) / sma * 100.0))
    };

    let mut result = if price > sma {
        SignalResult::new(
            Signal::Bullish,
            format!("Above SMA{period}"),
            format!("Price {price:.2} is trading above the {period}-day average {sma:.2}"),
        )
    } else if price < sma {
        SignalResult::new(
            Signal::Bearish,
            format!("Below SMA{period}"),
            format!("Price {price:.2} is trading below the {period}-day average {sma:.2}"),
        )
    } else {
        SignalResult::new(
            Signal::Neutral,
            format!("At SMA{period}"),
            format!("Price {price:.2} is sitting on the {period}-day average"),
        )
    };
    result.value = value;
    result
}

/// SMA50 vs SMA200: the classic long-term cross.
pub fn cross_signal(sma50: f64, sma200: f64) -> SignalResult {
    if sma50 > sma200 {
        SignalResult::new(
            Signal::Bullish,
            "Golden Cross",
            format!("SMA50 {sma50:.2} holds above SMA200 {sma200:.2}"),
        )
    } else if sma50 < sma200 {
        SignalResult::new(
            Signal::Bearish,
            "Death Cross",
            format!("SMA50 {sma50:.2} holds below SMA200 {sma200:.2}"),
        )
    } else {
        SignalResult::new(Signal::Neutral, "No Cross", "SMA50 and SMA200 are level")
    }
}

/// Bollinger position: touching or piercing a band, or %B beyond 0.10/0.90.
///
/// A collapsed band (zero-variance window) carries no position information
/// and reads neutral.
pub fn bollinger_signal(price: f64, bands: &BollingerBandsResult) -> SignalResult {
    let percent_b = if bands.percent_b.is_finite() {
        bands.percent_b
    } else {
        0.5
    };

    if bands.upper == bands.lower {
        return SignalResult::new(
            Signal::Neutral,
            "Bands Collapsed",
            "No band width on a zero-variance window",
        )
        .with_value("0.50".to_string());
    }

    if price <= bands.lower || percent_b < 0.10 {
        SignalResult::new(
            Signal::Bullish,
            "Near Lower Band",
            format!("Price {price:.2} is pressing the lower band {:.2}", bands.lower),
        )
        .with_value(format!("{percent_b:.2}"))
    } else if price >= bands.upper || percent_b > 0.90 {
        SignalResult::new(
            Signal::Bearish,
            "Near Upper Band",
            format!("Price {price:.2} is pressing the upper band {:.2}", bands.upper),
        )
        .with_value(format!("{percent_b:.2}"))
    } else {
        SignalResult::new(
            Signal::Neutral,
            "Inside Bands",
            format!("Price {price:.2} is trading inside the bands"),
        )
        .with_value(format!("{percent_b:.2}"))
    }
}

/// Stochastic %K: < 20 oversold (bullish), > 80 overbought (bearish).
pub fn stochastic_signal(k: f64) -> SignalResult {
    if k < 20.0 {
        SignalResult::new(
            Signal::Bullish,
            "Stochastic Oversold",
            format!("%K at {k:.1} is in the oversold zone"),
        )
        .with_value(format!("{k:.1}"))
    } else if k > 80.0 {
        SignalResult::new(
            Signal::Bearish,
            "Stochastic Overbought",
            format!("%K at {k:.1} is in the overbought zone"),
        )
        .with_value(format!("{k:.1}"))
    } else {
        SignalResult::new(
            Signal::Neutral,
            "Stochastic Neutral",
            format!("%K at {k:.1} sits between the 20/80 bands"),
        )
        .with_value(format!("{k:.1}"))
    }
}

/// Volume ratio (current / average): > 1.5 heavy (bullish), < 0.8 light
/// (bearish). A non-positive average carries no information.
pub fn volume_signal(current: f64, average: f64) -> SignalResult {
    if average <= 0.0 {
        return SignalResult::new(
            Signal::Neutral,
            "Volume Unavailable",
            "No average volume to compare against",
        );
    }

    let ratio = current / average;
    if ratio > 1.5 {
        SignalResult::new(
            Signal::Bullish,
            "Heavy Volume",
            format!("Volume is running {ratio:.1}x the recent average"),
        )
        .with_value(format!("{ratio:.1}x"))
    } else if ratio < 0.8 {
        SignalResult::new(
            Signal::Bearish,
            "Light Volume",
            format!("Volume is running {ratio:.1}x the recent average"),
        )
        .with_value(format!("{ratio:.1}x"))
    } else {
        SignalResult::new(
            Signal::Neutral,
            "Average Volume",
            format!("Volume is in line with the recent average at {ratio:.1}x"),
        )
        .with_value(format!("{ratio:.1}x"))
    }
}

/// OBV short-term trend.
pub fn obv_signal(trend: ObvTrend) -> SignalResult {
    match trend {
        ObvTrend::Rising => SignalResult::new(
            Signal::Bullish,
            "OBV Rising",
            "On-balance volume is building; buyers are accumulating",
        ),
        ObvTrend::Falling => SignalResult::new(
            Signal::Bearish,
            "OBV Falling",
            "On-balance volume is draining; sellers are distributing",
        ),
        ObvTrend::Flat => SignalResult::new(
            Signal::Neutral,
            "OBV Flat",
            "On-balance volume shows no recent flow",
        ),
    }
}

/// Put/Call ratio: < 0.7 call-heavy (bullish), > 1.0 put-heavy (bearish).
pub fn put_call_signal(ratio: f64) -> SignalResult {
    if ratio < 0.7 {
        SignalResult::new(
            Signal::Bullish,
            "Call Heavy",
            format!("Put/call ratio at {ratio:.2} leans toward calls"),
        )
        .with_value(format!("{ratio:.2}"))
    } else if ratio > 1.0 {
        SignalResult::new(
            Signal::Bearish,
            "Put Heavy",
            format!("Put/call ratio at {ratio:.2} leans toward puts"),
        )
        .with_value(format!("{ratio:.2}"))
    } else {
        SignalResult::new(
            Signal::Neutral,
            "Balanced Options Flow",
            format!("Put/call ratio at {ratio:.2} is balanced"),
        )
        .with_value(format!("{ratio:.2}"))
    }
}

/// IV rank: < 30% cheap options (bullish), > 70% rich options (bearish).
pub fn iv_rank_signal(rank: f64) -> SignalResult {
    if rank < 30.0 {
        SignalResult::new(
            Signal::Bullish,
            "Low IV Rank",
            format!("IV rank at {rank:.0}% prices options cheaply"),
        )
        .with_value(format!("{rank:.0}%"))
    } else if rank > 70.0 {
        SignalResult::new(
            Signal::Bearish,
            "High IV Rank",
            format!("IV rank at {rank:.0}% prices in heavy movement"),
        )
        .with_value(format!("{rank:.0}%"))
    } else {
        SignalResult::new(
            Signal::Neutral,
            "Mid IV Rank",
            format!("IV rank at {rank:.0}% is unremarkable"),
        )
        .with_value(format!("{rank:.0}%"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    // ---- rsi_signal ------------------------------------------------------

    #[test]
    fn rsi_thresholds() {
        assert_eq!(rsi_signal(25.0).signal, Signal::Bullish);
        assert_eq!(rsi_signal(75.0).signal, Signal::Bearish);
        assert_eq!(rsi_signal(50.0).signal, Signal::Neutral);
    }

    #[test]
    fn rsi_boundaries_are_neutral() {
        // Inclusive at the extreme: exactly 30 / 70 is neutral.
        assert_eq!(rsi_signal(30.0).signal, Signal::Neutral);
        assert_eq!(rsi_signal(70.0).signal, Signal::Neutral);
    }

    #[test]
    fn rsi_labels() {
        assert_eq!(rsi_signal(25.0).label, "Oversold");
        assert_eq!(rsi_signal(75.0).label, "Overbought");
    }

    // ---- macd_signal -----------------------------------------------------

    #[test]
    fn macd_positive_and_rising_is_bullish() {
        assert_eq!(macd_signal(0.5, 0.2).signal, Signal::Bullish);
    }

    #[test]
    fn macd_negative_and_falling_is_bearish() {
        assert_eq!(macd_signal(-0.5, -0.2).signal, Signal::Bearish);
    }

    #[test]
    fn macd_mixed_is_neutral() {
        // Positive but fading.
        assert_eq!(macd_signal(0.2, 0.5).signal, Signal::Neutral);
        // Negative but recovering.
        assert_eq!(macd_signal(-0.2, -0.5).signal, Signal::Neutral);
        // Exactly flat.
        assert_eq!(macd_signal(0.3, 0.3).signal, Signal::Neutral);
        assert_eq!(macd_signal(0.0, 0.0).signal, Signal::Neutral);
    }

    // ---- sma_signal ------------------------------------------------------

    #[test]
    fn sma_above_reference_case() {
        let result = sma_signal(110.0, 100.0, 20);
        assert_eq!(result.signal, Signal::Bullish);
        assert_eq!(result.label, "Above SMA20");
        assert_eq!(result.value.as_deref(), Some("+10.0%"));
    }

    #[test]
    fn sma_below() {
        let result = sma_signal(90.0, 100.0, 50);
        assert_eq!(result.signal, Signal::Bearish);
        assert_eq!(result.label, "Below SMA50");
        assert_eq!(result.value.as_deref(), Some("-10.0%"));
    }

    #[test]
    fn sma_exactly_at_average_is_neutral() {
        let result = sma_signal(100.0, 100.0, 20);
        assert_eq!(result.signal, Signal::Neutral);
        assert_eq!(result.value.as_deref(), Some("+0.0%"));
    }

    #[test]
    fn sma_zero_average_has_no_value() {
        let result = sma_signal(10.0, 0.0, 20);
        assert_eq!(result.signal, Signal::Bullish);
        assert!(result.value.is_none());
    }

    // ---- cross_signal ----------------------------------------------------

    #[test]
    fn cross_thresholds() {
        assert_eq!(cross_signal(105.0, 100.0).signal, Signal::Bullish);
        assert_eq!(cross_signal(105.0, 100.0).label, "Golden Cross");
        assert_eq!(cross_signal(95.0, 100.0).signal, Signal::Bearish);
        assert_eq!(cross_signal(95.0, 100.0).label, "Death Cross");
        assert_eq!(cross_signal(100.0, 100.0).signal, Signal::Neutral);
    }

    // ---- bollinger_signal ------------------------------------------------

    fn bands(upper: f64, middle: f64, lower: f64, percent_b: f64) -> BollingerBandsResult {
        BollingerBandsResult {
            upper,
            middle,
            lower,
            width: if middle == 0.0 { 0.0 } else { (upper - lower) / middle * 100.0 },
            percent_b,
        }
    }

    #[test]
    fn bollinger_at_lower_band_is_bullish() {
        let b = bands(110.0, 100.0, 90.0, 0.0);
        assert_eq!(bollinger_signal(90.0, &b).signal, Signal::Bullish);
        assert_eq!(bollinger_signal(88.0, &b).signal, Signal::Bullish);
    }

    #[test]
    fn bollinger_low_percent_b_is_bullish() {
        let b = bands(110.0, 100.0, 90.0, 0.05);
        assert_eq!(bollinger_signal(91.0, &b).signal, Signal::Bullish);
    }

    #[test]
    fn bollinger_at_upper_band_is_bearish() {
        let b = bands(110.0, 100.0, 90.0, 1.0);
        assert_eq!(bollinger_signal(110.0, &b).signal, Signal::Bearish);
        let b = bands(110.0, 100.0, 90.0, 0.95);
        assert_eq!(bollinger_signal(109.0, &b).signal, Signal::Bearish);
    }

    #[test]
    fn bollinger_inside_is_neutral() {
        let b = bands(110.0, 100.0, 90.0, 0.5);
        assert_eq!(bollinger_signal(100.0, &b).signal, Signal::Neutral);
        // Boundary %B values are neutral.
        let b = bands(110.0, 100.0, 90.0, 0.10);
        assert_eq!(bollinger_signal(92.0, &b).signal, Signal::Neutral);
        let b = bands(110.0, 100.0, 90.0, 0.90);
        assert_eq!(bollinger_signal(108.0, &b).signal, Signal::Neutral);
    }

    #[test]
    fn bollinger_collapsed_bands_are_neutral() {
        let b = bands(100.0, 100.0, 100.0, 0.5);
        let result = bollinger_signal(100.0, &b);
        assert_eq!(result.signal, Signal::Neutral);
    }

    #[test]
    fn bollinger_nan_percent_b_is_neutral() {
        let b = bands(110.0, 100.0, 90.0, f64::NAN);
        assert_eq!(bollinger_signal(100.0, &b).signal, Signal::Neutral);
    }

    // ---- stochastic_signal -----------------------------------------------

    #[test]
    fn stochastic_thresholds() {
        assert_eq!(stochastic_signal(15.0).signal, Signal::Bullish);
        assert_eq!(stochastic_signal(85.0).signal, Signal::Bearish);
        assert_eq!(stochastic_signal(50.0).signal, Signal::Neutral);
        // Boundaries are neutral.
        assert_eq!(stochastic_signal(20.0).signal, Signal::Neutral);
        assert_eq!(stochastic_signal(80.0).signal, Signal::Neutral);
    }

    // ---- volume_signal ---------------------------------------------------

    #[test]
    fn volume_thresholds() {
        assert_eq!(volume_signal(2_000.0, 1_000.0).signal, Signal::Bullish);
        assert_eq!(volume_signal(500.0, 1_000.0).signal, Signal::Bearish);
        assert_eq!(volume_signal(1_000.0, 1_000.0).signal, Signal::Neutral);
        // Boundaries are neutral.
        assert_eq!(volume_signal(1_500.0, 1_000.0).signal, Signal::Neutral);
        assert_eq!(volume_signal(800.0, 1_000.0).signal, Signal::Neutral);
    }

    #[test]
    fn volume_zero_average_is_neutral() {
        assert_eq!(volume_signal(1_000.0, 0.0).signal, Signal::Neutral);
        assert!(volume_signal(1_000.0, 0.0).value.is_none());
    }

    // ---- obv_signal ------------------------------------------------------

    #[test]
    fn obv_trend_maps_directly() {
        assert_eq!(obv_signal(ObvTrend::Rising).signal, Signal::Bullish);
        assert_eq!(obv_signal(ObvTrend::Falling).signal, Signal::Bearish);
        assert_eq!(obv_signal(ObvTrend::Flat).signal, Signal::Neutral);
    }

    // ---- put_call_signal / iv_rank_signal --------------------------------

    #[test]
    fn put_call_thresholds() {
        assert_eq!(put_call_signal(0.5).signal, Signal::Bullish);
        assert_eq!(put_call_signal(1.2).signal, Signal::Bearish);
        assert_eq!(put_call_signal(0.85).signal, Signal::Neutral);
        // Boundaries are neutral.
        assert_eq!(put_call_signal(0.7).signal, Signal::Neutral);
        assert_eq!(put_call_signal(1.0).signal, Signal::Neutral);
    }

    #[test]
    fn iv_rank_thresholds() {
        assert_eq!(iv_rank_signal(20.0).signal, Signal::Bullish);
        assert_eq!(iv_rank_signal(80.0).signal, Signal::Bearish);
        assert_eq!(iv_rank_signal(50.0).signal, Signal::Neutral);
        // Boundaries are neutral.
        assert_eq!(iv_rank_signal(30.0).signal, Signal::Neutral);
        assert_eq!(iv_rank_signal(70.0).signal, Signal::Neutral);
    }
}
