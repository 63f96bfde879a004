use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{RelicScoreError, RsResult};
use crate::formula::STRICT;

/// Persisted scoring configuration: the active formula variant, the
/// correction enable flag, and one target ceiling per character.
///
/// Target ceilings are user-entered whole percents of the tracked stat
/// (the original input field capped them at 999); the store accepts any
/// finite positive value. Absence means unbounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreSettings {
    pub method: String,
    pub correction_enabled: bool,
    pub target_ceilings: HashMap<String, f64>,
}

impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            method: STRICT.to_string(),
            correction_enabled: true,
            target_ceilings: HashMap::new(),
        }
    }
}

/// The configuration collaborator the scoring core reads from. Reads for one
/// pass are captured as a point-in-time snapshot (`PassConfig`); a write
/// lands on the next pass, never mid-pass.
pub trait SettingsStore {
    fn active_method(&self) -> String;
    fn set_active_method(&mut self, name: &str) -> RsResult<()>;
    fn target_ceiling(&self, character: &str) -> Option<f64>;
    fn set_target_ceiling(&mut self, character: &str, value: f64) -> RsResult<()>;
    fn correction_enabled(&self) -> bool;
    fn set_correction_enabled(&mut self, enabled: bool) -> RsResult<()>;
}

fn validate_ceiling(value: f64) -> RsResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RelicScoreError::Config(format!(
            "target ceiling must be a positive number, got {}",
            value
        )));
    }
    Ok(())
}

/// Plain in-memory store; the default collaborator when nothing persists.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    settings: ScoreSettings,
}

impl MemorySettingsStore {
    pub fn new(settings: ScoreSettings) -> Self {
        Self { settings }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn active_method(&self) -> String {
        self.settings.method.clone()
    }

    fn set_active_method(&mut self, name: &str) -> RsResult<()> {
        self.settings.method = name.to_string();
        Ok(())
    }

    fn target_ceiling(&self, character: &str) -> Option<f64> {
        self.settings.target_ceilings.get(character).copied()
    }

    fn set_target_ceiling(&mut self, character: &str, value: f64) -> RsResult<()> {
        validate_ceiling(value)?;
        self.settings
            .target_ceilings
            .insert(character.to_string(), value);
        Ok(())
    }

    fn correction_enabled(&self) -> bool {
        self.settings.correction_enabled
    }

    fn set_correction_enabled(&mut self, enabled: bool) -> RsResult<()> {
        self.settings.correction_enabled = enabled;
        Ok(())
    }
}

/// JSON-file-backed store. Every write saves through to disk.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
    settings: ScoreSettings,
}

impl JsonSettingsStore {
    /// Opens the store at `path`. A missing file yields defaults; it is
    /// created on the first write.
    pub fn load<P: AsRef<Path>>(path: P) -> RsResult<Self> {
        let path = path.as_ref().to_path_buf();
        let settings = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            warn!(path = %path.display(), "settings file not found, using defaults");
            ScoreSettings::default()
        };
        Ok(Self { path, settings })
    }

    pub fn settings(&self) -> &ScoreSettings {
        &self.settings
    }

    fn save(&self) -> RsResult<()> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.settings)?)?;
        Ok(())
    }
}

impl SettingsStore for JsonSettingsStore {
    fn active_method(&self) -> String {
        self.settings.method.clone()
    }

    fn set_active_method(&mut self, name: &str) -> RsResult<()> {
        self.settings.method = name.to_string();
        self.save()
    }

    fn target_ceiling(&self, character: &str) -> Option<f64> {
        self.settings.target_ceilings.get(character).copied()
    }

    fn set_target_ceiling(&mut self, character: &str, value: f64) -> RsResult<()> {
        validate_ceiling(value)?;
        self.settings
            .target_ceilings
            .insert(character.to_string(), value);
        self.save()
    }

    fn correction_enabled(&self) -> bool {
        self.settings.correction_enabled
    }

    fn set_correction_enabled(&mut self, enabled: bool) -> RsResult<()> {
        self.settings.correction_enabled = enabled;
        self.save()
    }
}
