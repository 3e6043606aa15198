// =============================================================================
// Composite Technical Analysis
// =============================================================================
//
// Runs the full indicator stack over one symbol's bar history and feeds the
// classified signals into the aggregate score. This is what the dashboard's
// technical card renders for a symbol.
//
// The fail-fast indicators need up to `2 * ADX period` bars; their
// `InsufficientData` errors surface unchanged so the caller can show the
// "not enough history" placeholder. The long-term cross signal is only
// included once 200 bars are available.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IndicatorError;
use crate::indicators::adx::{calculate_adx, AdxResult, DEFAULT_ADX_PERIOD};
use crate::indicators::atr::{calculate_atr, DEFAULT_ATR_PERIOD};
use crate::indicators::bollinger::{
    calculate_bollinger, BollingerBandsResult, DEFAULT_BOLLINGER_PERIOD,
    DEFAULT_BOLLINGER_STD_MULT,
};
use crate::indicators::macd::{
    calculate_macd, MacdResult, DEFAULT_MACD_FAST, DEFAULT_MACD_SIGNAL, DEFAULT_MACD_SLOW,
};
use crate::indicators::moving_average::calculate_sma;
use crate::indicators::obv::{calculate_obv, ObvResult};
use crate::indicators::price_position::{calculate_price_position, PricePosition};
use crate::indicators::rsi::{calculate_rsi, DEFAULT_RSI_PERIOD};
use crate::indicators::stochastic::{
    calculate_stochastic, StochasticResult, DEFAULT_STOCHASTIC_D, DEFAULT_STOCHASTIC_K,
};
use crate::signals::aggregate::{calculate_aggregate_score, AggregateScore};
use crate::signals::classify::{
    bollinger_signal, cross_signal, macd_signal, obv_signal, rsi_signal, sma_signal,
    stochastic_signal, volume_signal,
};
use crate::types::{closes, highs, lows, volumes, PricePoint, SignalResult};

/// Volume comparison window for the heavy/light volume signal.
const VOLUME_AVG_WINDOW: usize = 20;

/// Everything the dashboard needs for one symbol's technical card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSnapshot {
    pub rsi: f64,
    pub macd: MacdResult,
    pub bollinger: BollingerBandsResult,
    pub stochastic: StochasticResult,
    pub atr: f64,
    pub obv: ObvResult,
    pub adx: AdxResult,
    pub position: PricePosition,
    pub signals: Vec<SignalResult>,
    pub score: AggregateScore,
}

/// Run every indicator over the bar series and aggregate the signals.
///
/// The series must be ordered oldest first and long enough for the fail-fast
/// indicators (ADX needs `2 * period` bars, 28 with defaults).
pub fn analyze(series: &[PricePoint]) -> Result<TechnicalSnapshot, IndicatorError> {
    let closes = closes(series);
    let highs = highs(series);
    let lows = lows(series);
    let volumes = volumes(series);

    // --- Indicator pass --------------------------------------------------------
    let rsi = calculate_rsi(&closes, DEFAULT_RSI_PERIOD)?;
    let macd = calculate_macd(
        &closes,
        DEFAULT_MACD_FAST,
        DEFAULT_MACD_SLOW,
        DEFAULT_MACD_SIGNAL,
    );
    let bollinger = calculate_bollinger(
        &closes,
        DEFAULT_BOLLINGER_PERIOD,
        DEFAULT_BOLLINGER_STD_MULT,
    )?;
    let stochastic = calculate_stochastic(
        &highs,
        &lows,
        &closes,
        DEFAULT_STOCHASTIC_K,
        DEFAULT_STOCHASTIC_D,
    )?;
    let atr = calculate_atr(&highs, &lows, &closes, DEFAULT_ATR_PERIOD)?;
    let obv = calculate_obv(&closes, &volumes)?;
    let adx = calculate_adx(&highs, &lows, &closes, DEFAULT_ADX_PERIOD)?;
    let position = calculate_price_position(&closes)?;

    let price = position.price;

    // --- Classification pass ---------------------------------------------------
    let mut signals = Vec::with_capacity(8);
    signals.push(rsi_signal(rsi));

    let prev_histogram = if macd.histogram_line.len() >= 2 {
        macd.histogram_line[macd.histogram_line.len() - 2]
    } else {
        macd.histogram
    };
    signals.push(macd_signal(macd.histogram, prev_histogram));

    let sma20 = calculate_sma(&closes, 20)?;
    signals.push(sma_signal(price, sma20, 20));

    // The long-term cross only means something once both windows fit.
    if closes.len() >= 200 {
        let sma50 = calculate_sma(&closes, 50)?;
        let sma200 = calculate_sma(&closes, 200)?;
        signals.push(cross_signal(sma50, sma200));
    } else {
        debug!(
            bars = closes.len(),
            "skipping golden/death cross signal, need 200 bars"
        );
    }

    signals.push(bollinger_signal(price, &bollinger));
    signals.push(stochastic_signal(stochastic.k));

    let vol_window = VOLUME_AVG_WINDOW.min(volumes.len());
    let vol_avg = volumes[volumes.len() - vol_window..].iter().sum::<f64>() / vol_window as f64;
    signals.push(volume_signal(volumes[volumes.len() - 1], vol_avg));

    signals.push(obv_signal(obv.trend));

    // --- Aggregate ---------------------------------------------------------------
    let score = calculate_aggregate_score(&signals);
    debug!(
        bullish = score.bullish_count,
        bearish = score.bearish_count,
        neutral = score.neutral_count,
        sentiment = %score.sentiment,
        "technical snapshot ready"
    );

    Ok(TechnicalSnapshot {
        rsi,
        macd,
        bollinger,
        stochastic,
        atr,
        obv,
        adx,
        position,
        signals,
        score,
    })
}
