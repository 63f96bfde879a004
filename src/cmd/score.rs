use clap::Args;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::info;

use relicscore::api::{run_pass, PassConfig};
use relicscore::catalog::{self, Locale};
use relicscore::config::{JsonSettingsStore, MemorySettingsStore, SettingsStore};
use relicscore::error::{RelicScoreError, RsResult};
use relicscore::formula::FormulaRegistry;
use relicscore::snapshot::Snapshot;

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Snapshot file; `.csv` rows are `item,label,value`, anything else is JSON.
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Character whose saved target ceiling applies.
    #[arg(short, long, default_value = "")]
    pub character: String,

    /// Override the active formula variant for this pass.
    #[arg(short, long)]
    pub method: Option<String>,

    /// Override the target ceiling for this pass.
    #[arg(short, long)]
    pub target: Option<f64>,

    /// Disable the energy-recharge budget correction.
    #[arg(long, default_value_t = false)]
    pub no_correction: bool,

    /// Persisted settings file.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Snapshot locale for CSV input (JSON snapshots carry their own).
    #[arg(short, long, default_value = "ja")]
    pub locale: String,

    /// Comma-separated known sub-stat labels for CSV input.
    /// Defaults to the locale's full label table.
    #[arg(long)]
    pub known_labels: Option<String>,
}

fn is_csv(path: &std::path::Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("csv")
}

pub fn run(args: ScoreArgs, registry: &FormulaRegistry) -> RsResult<()> {
    let locale: Locale = args
        .locale
        .parse()
        .map_err(|_| RelicScoreError::Config(format!("unsupported locale '{}'", args.locale)))?;

    let snapshot = if is_csv(&args.snapshot) {
        let labels: HashSet<String> = match &args.known_labels {
            Some(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
            None => catalog::labels_for(locale).map(str::to_string).collect(),
        };
        Snapshot::load_csv(&args.snapshot, locale, labels)?
    } else {
        Snapshot::load_json(&args.snapshot)?
    };

    info!(
        "Scoring {} items against {} known labels",
        snapshot.items.len(),
        snapshot.known_labels.len()
    );

    let store: Box<dyn SettingsStore> = match &args.settings {
        Some(path) => Box::new(JsonSettingsStore::load(path)?),
        None => Box::new(MemorySettingsStore::default()),
    };

    let mut config = PassConfig::from_store(store.as_ref(), &args.character);
    if let Some(method) = args.method {
        config.method = method;
    }
    if let Some(target) = args.target {
        config.target_ceiling = Some(target);
    }
    if args.no_correction {
        config.correction_enabled = false;
    }

    let outcome = run_pass(registry, &snapshot, &config)?;
    reports::print_score_report(&outcome, &config);
    Ok(())
}
