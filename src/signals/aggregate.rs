// =============================================================================
// Aggregate Score — consensus across an arbitrary list of signals
// =============================================================================
//
// Counts each signal kind and derives:
//   percentage = bullish / total * 100   (50.0 when the list is empty)
//   sentiment  = the strictly dominant count, else neutral
//   glow       = glow-bullish at >= 80%, glow-bearish at <= 20%, else none
//   label      = "{bullish}/{total} Bullish"
//
// Pure, order-independent, idempotent.

use serde::{Deserialize, Serialize};

use crate::types::{Signal, SignalResult};

/// Extreme-consensus flag consumed by the dashboard's card styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlowEffect {
    #[serde(rename = "glow-bullish")]
    Bullish,
    #[serde(rename = "glow-bearish")]
    Bearish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateScore {
    pub bullish_count: usize,
    pub bearish_count: usize,
    pub neutral_count: usize,
    pub total: usize,
    pub percentage: f64,
    pub sentiment: Signal,
    pub glow_effect: Option<GlowEffect>,
    pub label: String,
}

/// Combine classified signals into a single composite score.
pub fn calculate_aggregate_score(signals: &[SignalResult]) -> AggregateScore {
    let bullish_count = signals.iter().filter(|s| s.signal == Signal::Bullish).count();
    let bearish_count = signals.iter().filter(|s| s.signal == Signal::Bearish).count();
    let neutral_count = signals.iter().filter(|s| s.signal == Signal::Neutral).count();
    let total = signals.len();

    let percentage = if total == 0 {
        50.0
    } else {
        bullish_count as f64 * 100.0 / total as f64
    };

    let sentiment = if bullish_count > bearish_count && bullish_count > neutral_count {
        Signal::Bullish
    } else if bearish_count > bullish_count && bearish_count > neutral_count {
        Signal::Bearish
    } else {
        Signal::Neutral
    };

    let glow_effect = if percentage >= 80.0 {
        Some(GlowEffect::Bullish)
    } else if percentage <= 20.0 {
        Some(GlowEffect::Bearish)
    } else {
        None
    };

    AggregateScore {
        bullish_count,
        bearish_count,
        neutral_count,
        total,
        percentage,
        sentiment,
        glow_effect,
        label: format!("{bullish_count}/{total} Bullish"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn signal(kind: Signal) -> SignalResult {
        SignalResult::new(kind, "test", "test signal")
    }

    fn signals(bullish: usize, bearish: usize, neutral: usize) -> Vec<SignalResult> {
        let mut list = Vec::new();
        list.extend(std::iter::repeat_with(|| signal(Signal::Bullish)).take(bullish));
        list.extend(std::iter::repeat_with(|| signal(Signal::Bearish)).take(bearish));
        list.extend(std::iter::repeat_with(|| signal(Signal::Neutral)).take(neutral));
        list
    }

    #[test]
    fn four_of_five_bullish_glows() {
        let score = calculate_aggregate_score(&signals(4, 1, 0));
        assert_eq!(score.percentage, 80.0);
        assert_eq!(score.glow_effect, Some(GlowEffect::Bullish));
        assert_eq!(score.sentiment, Signal::Bullish);
        assert_eq!(score.label, "4/5 Bullish");
    }

    #[test]
    fn empty_list_reads_midpoint() {
        let score = calculate_aggregate_score(&[]);
        assert_eq!(score.total, 0);
        assert_eq!(score.percentage, 50.0);
        assert_eq!(score.sentiment, Signal::Neutral);
        assert_eq!(score.glow_effect, None);
        assert_eq!(score.label, "0/0 Bullish");
    }

    #[test]
    fn counts_always_sum_to_total() {
        for (b, r, n) in [(0, 0, 0), (3, 2, 1), (1, 1, 1), (10, 0, 0)] {
            let score = calculate_aggregate_score(&signals(b, r, n));
            assert_eq!(score.bullish_count + score.bearish_count + score.neutral_count, score.total);
            assert!((0.0..=100.0).contains(&score.percentage));
        }
    }

    #[test]
    fn bearish_glow_at_or_below_20_percent() {
        // 1 bullish of 5 => exactly 20%.
        let score = calculate_aggregate_score(&signals(1, 4, 0));
        assert_eq!(score.percentage, 20.0);
        assert_eq!(score.glow_effect, Some(GlowEffect::Bearish));
        assert_eq!(score.sentiment, Signal::Bearish);

        // 0 bullish of 3 => 0%.
        let score = calculate_aggregate_score(&signals(0, 3, 0));
        assert_eq!(score.glow_effect, Some(GlowEffect::Bearish));
    }

    #[test]
    fn mid_range_has_no_glow() {
        let score = calculate_aggregate_score(&signals(3, 2, 0));
        assert_eq!(score.percentage, 60.0);
        assert_eq!(score.glow_effect, None);
    }

    #[test]
    fn sentiment_requires_a_strict_majority_over_both() {
        // Tie between bullish and bearish => neutral.
        let score = calculate_aggregate_score(&signals(2, 2, 1));
        assert_eq!(score.sentiment, Signal::Neutral);

        // Neutral dominates => neutral.
        let score = calculate_aggregate_score(&signals(1, 1, 3));
        assert_eq!(score.sentiment, Signal::Neutral);

        // Bearish strictly ahead of both => bearish.
        let score = calculate_aggregate_score(&signals(1, 3, 2));
        assert_eq!(score.sentiment, Signal::Bearish);
    }

    #[test]
    fn order_does_not_matter() {
        let a = calculate_aggregate_score(&signals(2, 1, 2));
        let mut shuffled = signals(0, 1, 2);
        shuffled.extend(signals(2, 0, 0));
        let b = calculate_aggregate_score(&shuffled);
        assert_eq!(a, b);
    }

    #[test]
    fn glow_effect_wire_form() {
        assert_eq!(
            serde_json::to_string(&GlowEffect::Bullish).unwrap(),
            "\"glow-bullish\""
        );
        assert_eq!(
            serde_json::to_string(&GlowEffect::Bearish).unwrap(),
            "\"glow-bearish\""
        );
    }

    #[test]
    fn aggregate_score_serializes_to_dashboard_shape() {
        let score = calculate_aggregate_score(&signals(4, 1, 0));
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["glow_effect"], "glow-bullish");
        assert_eq!(json["sentiment"], "bullish");
        assert_eq!(json["label"], "4/5 Bullish");
        assert_eq!(json["percentage"], 80.0);
    }
}
