// =============================================================================
// Error taxonomy for the indicator engine
// =============================================================================
//
// Two failure classes, both raised before any computation proceeds:
//
// - `InsufficientData` — the input array is shorter than the indicator's
//   mathematical minimum. The message names the indicator and the minimum so
//   callers can decide whether to fetch more history or skip the symbol.
// - `InvalidInput` — mismatched parallel-array lengths, a zero period, or
//   non-finite values in the input.
//
// The EMA/MACD building blocks deliberately do NOT use this taxonomy: they
// degrade to empty series / zero scalars on short input so that chart
// consumers can render partial history. See `indicators::moving_average` and
// `indicators::macd`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("{indicator}: insufficient data ({actual} points, need at least {required})")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl IndicatorError {
    /// Shorthand used by every fail-fast indicator.
    pub(crate) fn insufficient(indicator: &'static str, required: usize, actual: usize) -> Self {
        Self::InsufficientData {
            indicator,
            required,
            actual,
        }
    }
}
