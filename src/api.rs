// ===== relicscore/src/api.rs =====
use tracing::warn;

use crate::catalog::StatKind;
use crate::config::SettingsStore;
use crate::correction::{self, ScoreSummary};
use crate::error::{RelicScoreError, RsResult};
use crate::formula::FormulaRegistry;
use crate::normalize::{self, Normalized, NormalizedStat};
use crate::scorer::{self, ItemScoreResult};
use crate::snapshot::Snapshot;
use crate::util::round2;

/// Point-in-time view of the configuration for a single scoring pass.
/// A settings write during a pass takes effect on the next pass only.
#[derive(Debug, Clone, PartialEq)]
pub struct PassConfig {
    pub method: String,
    pub target_ceiling: Option<f64>,
    pub correction_enabled: bool,
}

impl PassConfig {
    pub fn from_store(store: &dyn SettingsStore, character: &str) -> Self {
        Self {
            method: store.active_method(),
            target_ceiling: store.target_ceiling(character),
            correction_enabled: store.correction_enabled(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PassOutcome {
    pub items: Vec<ItemScoreResult>,
    pub summary: ScoreSummary,
}

/// Runs one complete scoring pass: normalize every item's raw pairs, score
/// each item under the configured variant, then apply the energy-recharge
/// budget correction when enabled.
///
/// Malformed values are skipped (contributing 0) with a warning; discarded
/// labels are silent. An unknown variant aborts the pass and the caller
/// keeps whatever it rendered last.
pub fn run_pass(
    registry: &FormulaRegistry,
    snapshot: &Snapshot,
    config: &PassConfig,
) -> RsResult<PassOutcome> {
    let variant = registry.get(&config.method)?;

    let mut normalized: Vec<Vec<NormalizedStat>> = Vec::with_capacity(snapshot.items.len());
    let mut recharge_totals: Vec<f64> = Vec::with_capacity(snapshot.items.len());

    for entries in &snapshot.items {
        let mut stats = Vec::new();
        let mut recharge = 0.0;
        for entry in entries {
            match normalize::normalize(entry, &snapshot.known_labels, snapshot.locale) {
                Ok(Normalized::Stat(stat)) => {
                    if stat.kind == StatKind::EnergyRecharge {
                        recharge += stat.value;
                    }
                    stats.push(stat);
                }
                Ok(Normalized::Discarded) => {}
                Err(RelicScoreError::MalformedValue(text)) => {
                    warn!(value = %text, "skipping malformed sub-stat value");
                }
                Err(e) => return Err(e),
            }
        }
        normalized.push(stats);
        recharge_totals.push(recharge);
    }

    let items = scorer::score_all(&normalized, variant);
    let scores: Vec<f64> = items.iter().map(|r| r.raw_score).collect();

    let summary = if config.correction_enabled {
        correction::apply(
            &scores,
            &recharge_totals,
            config.target_ceiling,
            variant.multiplier(StatKind::EnergyRecharge),
        )
    } else {
        let subtotal = scorer::total_of(&items);
        ScoreSummary {
            per_item: scores,
            subtotal,
            excess: 0.0,
            net: round2(subtotal),
        }
    };

    Ok(PassOutcome { items, summary })
}
