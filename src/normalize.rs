use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::catalog::{self, Locale, StatKind};
use crate::error::{RelicScoreError, RsResult};

/// One scraped (label, value) text pair from an item's sub-stat row.
/// The page emits the two strings in either order; `normalize` re-resolves
/// which one is numeric. Ephemeral, produced per scoring pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStatEntry {
    pub label: String,
    pub value: String,
}

impl RawStatEntry {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedStat {
    pub kind: StatKind,
    pub value: f64,
}

/// Most page text is not a stat; discards are silent and contribute 0.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Stat(NormalizedStat),
    Discarded,
}

fn has_digit(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
}

fn clean_text(s: &str) -> String {
    s.replace('\u{a0}', " ").trim().to_string()
}

/// Resolves one raw pair against the catalog and the item's sibling label set.
///
/// `known_labels` is the set of sub-stat names actually present on the page
/// for this character; membership gates out header and decoration text that
/// superficially matches a stat name. A non-numeric value is
/// [`RelicScoreError::MalformedValue`]; the caller skips the entry, it is
/// never fatal to the pass.
pub fn normalize(
    entry: &RawStatEntry,
    known_labels: &HashSet<String>,
    locale: Locale,
) -> RsResult<Normalized> {
    let a = clean_text(&entry.label);
    let b = clean_text(&entry.value);

    // The digit-bearing string is the value; sources disagree on pair order.
    let (value_text, mut label_text) = if has_digit(&a) { (a, b) } else { (b, a) };

    // "HP" can name a flat roll or, phrased as a percent, a percent roll.
    if value_text.contains('%') {
        if let Some(percent_label) = catalog::percent_label_for(&label_text, locale) {
            label_text = percent_label.to_string();
        }
    }

    let cleaned = value_text.replace(['%', '+'], "");
    let value: f64 = cleaned
        .trim()
        .parse()
        .map_err(|_| RelicScoreError::MalformedValue(value_text.clone()))?;

    if !known_labels.contains(label_text.as_str()) {
        debug!(label = %label_text, "label not in known sub-stat set, discarding");
        return Ok(Normalized::Discarded);
    }

    match catalog::kind_of_label(&label_text, locale) {
        Some(kind) => Ok(Normalized::Stat(NormalizedStat { kind, value })),
        None => {
            debug!(label = %label_text, "label has no catalog mapping, discarding");
            Ok(Normalized::Discarded)
        }
    }
}
