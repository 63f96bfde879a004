pub mod types;

pub use self::types::ItemScoreResult;

use crate::formula::FormulaVariant;
use crate::normalize::NormalizedStat;
use crate::util::floor2;

/// Weighted sum of one item's normalized stats under `variant`.
///
/// Flat stats contribute exactly 0 regardless of value. The sum is truncated
/// to 2 decimals (floor, never round-half-up): a score is never rounded
/// above what the rolls earned.
pub fn score_item(stats: &[NormalizedStat], variant: &FormulaVariant) -> ItemScoreResult {
    let mut sum = 0.0;
    let mut contributing = Vec::new();

    for stat in stats {
        let multiplier = if stat.kind.is_flat() {
            0.0
        } else {
            variant.multiplier(stat.kind)
        };
        if multiplier == 0.0 {
            continue;
        }
        sum += stat.value * multiplier;
        contributing.push(*stat);
    }

    ItemScoreResult {
        raw_score: floor2(sum),
        contributing,
    }
}

/// Scores each item independently. Any item count >= 0 is supported; the
/// reference page happens to show five slots.
pub fn score_all(items: &[Vec<NormalizedStat>], variant: &FormulaVariant) -> Vec<ItemScoreResult> {
    items.iter().map(|stats| score_item(stats, variant)).collect()
}

/// Exact sum of the per-item truncated scores. Truncation happens at item
/// granularity only; the base calculator never re-truncates the total.
pub fn total_of(items: &[ItemScoreResult]) -> f64 {
    items.iter().map(|r| r.raw_score).sum()
}
