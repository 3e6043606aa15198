// =============================================================================
// MarketLens Core — technical indicator engine & signal scoring
// =============================================================================
//
// Pure, stateless, synchronous computation over OHLCV arrays: the numeric
// core behind the dashboard's watchlist and analysis cards. Price history
// flows one way through the crate:
//
//   bars -> indicators -> classified signals -> aggregate score
//
// No I/O, no shared state, no caching. Every function returns freshly
// allocated output and never mutates its input, so concurrent callers need
// no coordination.

pub mod analysis;
pub mod error;
pub mod indicators;
pub mod signals;
pub mod types;

pub use crate::analysis::{analyze, TechnicalSnapshot};
pub use crate::error::IndicatorError;
pub use crate::types::{closes, highs, lows, volumes, PricePoint, Signal, SignalResult};

pub use crate::indicators::adx::{calculate_adx, AdxResult, TrendStrength};
pub use crate::indicators::atr::calculate_atr;
pub use crate::indicators::bollinger::{calculate_bollinger, BollingerBandsResult};
pub use crate::indicators::macd::{calculate_macd, MacdResult};
pub use crate::indicators::moving_average::{
    calculate_ema, calculate_ema_series, calculate_sma, calculate_sma_series,
};
pub use crate::indicators::obv::{calculate_obv, ObvResult, ObvTrend};
pub use crate::indicators::price_position::{calculate_price_position, PricePosition};
pub use crate::indicators::rsi::calculate_rsi;
pub use crate::indicators::stochastic::{calculate_stochastic, StochasticResult};

pub use crate::signals::aggregate::{calculate_aggregate_score, AggregateScore, GlowEffect};
pub use crate::signals::classify::{
    bollinger_signal, cross_signal, iv_rank_signal, macd_signal, obv_signal, put_call_signal,
    rsi_signal, sma_signal, stochastic_signal, volume_signal,
};
