use serde::{Deserialize, Serialize};

use crate::util::{floor2, round2};

/// The tracked stat's budget for one pass: the user's ceiling (if any)
/// against the total observed across all items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionContext {
    pub target_ceiling: Option<f64>,
    pub observed_total: f64,
}

impl CorrectionContext {
    /// A missing or non-positive ceiling is the explicit no-cap state,
    /// represented as an unbounded sentinel rather than a defaulted zero.
    pub fn effective_ceiling(&self) -> f64 {
        match self.target_ceiling {
            Some(ceiling) if ceiling > 0.0 => ceiling,
            _ => f64::INFINITY,
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.observed_total > self.effective_ceiling()
    }
}

/// Corrected scores for one pass.
///
/// Invariants: `net == round2(subtotal - excess_score)` and `excess == 0`
/// whenever the observed total stays within the ceiling. `net` may go
/// negative; per-item scores never do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub per_item: Vec<f64>,
    pub subtotal: f64,
    pub excess: f64,
    pub net: f64,
}

/// Caps the scoring benefit of the tracked stat once its total exceeds the
/// ceiling: value beyond the target is wasted in the underlying game, so the
/// overshoot is priced at `multiplier` per point and apportioned across
/// items in proportion to their share of the subtotal.
pub fn apply(
    per_item_scores: &[f64],
    per_item_target_value: &[f64],
    target_ceiling: Option<f64>,
    multiplier: f64,
) -> ScoreSummary {
    let ctx = CorrectionContext {
        target_ceiling,
        observed_total: per_item_target_value.iter().sum(),
    };
    let subtotal: f64 = per_item_scores.iter().sum();

    if !ctx.is_exceeded() {
        return ScoreSummary {
            per_item: per_item_scores.to_vec(),
            subtotal,
            excess: 0.0,
            net: round2(subtotal),
        };
    }

    let excess_score = multiplier * (ctx.observed_total - ctx.effective_ceiling());
    let per_item = per_item_scores
        .iter()
        .map(|&score| {
            // A zero subtotal has nothing to apportion.
            let reduction = if subtotal == 0.0 {
                0.0
            } else {
                excess_score * (score / subtotal)
            };
            floor2((score - reduction).max(0.0))
        })
        .collect();

    ScoreSummary {
        per_item,
        subtotal,
        excess: round2(excess_score),
        net: round2(subtotal - excess_score),
    }
}
