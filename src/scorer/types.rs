// ===== relicscore/src/scorer/types.rs =====
use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedStat;

/// Score of one equipped item.
///
/// `raw_score` is already truncated to 2 decimals; `contributing` lists the
/// normalized stats that actually carried weight under the variant used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemScoreResult {
    pub raw_score: f64,
    pub contributing: Vec<NormalizedStat>,
}
