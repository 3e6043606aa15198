// =============================================================================
// Signals Module
// =============================================================================
//
// The semantic layer on top of the indicator engine:
// - Per-indicator threshold classifiers producing tri-state `SignalResult`s
//   with dashboard-ready labels.
// - The aggregate score combining an arbitrary list of signals into counts,
//   a bullish percentage, a dominant sentiment, and the glow flag used to
//   highlight extreme-consensus symbols.

pub mod aggregate;
pub mod classify;

pub use aggregate::{calculate_aggregate_score, AggregateScore, GlowEffect};
pub use classify::{
    bollinger_signal, cross_signal, iv_rank_signal, macd_signal, obv_signal, put_call_signal,
    rsi_signal, sma_signal, stochastic_signal, volume_signal,
};
