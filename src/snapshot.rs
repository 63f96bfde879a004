use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::catalog::Locale;
use crate::error::RsResult;
use crate::normalize::RawStatEntry;

/// One scraped view of the equipped items: per-item raw stat pairs, the
/// page's sibling list of known sub-stat labels, and the page locale.
///
/// The scraping collaborator serializes delivery; a snapshot is processed
/// to completion before the next one begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub locale: Locale,
    pub known_labels: HashSet<String>,
    pub items: Vec<Vec<RawStatEntry>>,
}

impl Snapshot {
    pub fn from_json_reader<R: Read>(reader: R) -> RsResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> RsResult<Self> {
        Self::from_json_reader(File::open(path)?)
    }

    /// Reads `item,label,value` rows (with a header). Item indices are
    /// 0-based and group rows into items; gaps become empty items. The
    /// known-labels set is supplied by the caller, since the page's sibling
    /// list has no CSV form. Malformed rows are skipped.
    pub fn from_csv_reader<R: Read>(
        reader: R,
        locale: Locale,
        known_labels: HashSet<String>,
    ) -> RsResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let mut items: Vec<Vec<RawStatEntry>> = Vec::new();
        for record in rdr.records().flatten() {
            if record.len() < 3 {
                debug!(fields = record.len(), "skipping short csv row");
                continue;
            }
            let Ok(index) = record[0].trim().parse::<usize>() else {
                debug!(index = &record[0], "skipping csv row with non-numeric item index");
                continue;
            };
            if index >= items.len() {
                items.resize_with(index + 1, Vec::new);
            }
            items[index].push(RawStatEntry::new(record[1].trim(), record[2].trim()));
        }

        Ok(Self {
            locale,
            known_labels,
            items,
        })
    }

    pub fn load_csv<P: AsRef<Path>>(
        path: P,
        locale: Locale,
        known_labels: HashSet<String>,
    ) -> RsResult<Self> {
        Self::from_csv_reader(File::open(path)?, locale, known_labels)
    }
}
