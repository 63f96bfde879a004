use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::IntoEnumIterator;

use crate::catalog::{StatKind, CRIT_DMG_CEILING};
use crate::error::{RelicScoreError, RsResult};

pub const STRICT: &str = "strict";
pub const POPULAR: &str = "popular";

/// A named weighting scheme: one multiplier per scoring stat.
/// Flat stats must carry multiplier 0; the registry enforces this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaVariant {
    pub name: String,
    pub display_name: String,
    multipliers: HashMap<StatKind, f64>,
}

impl FormulaVariant {
    pub fn new(name: &str, display_name: &str, multipliers: HashMap<StatKind, f64>) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            multipliers,
        }
    }

    /// Multiplier for a stat; unlisted stats score 0.
    pub fn multiplier(&self, kind: StatKind) -> f64 {
        self.multipliers.get(&kind).copied().unwrap_or(0.0)
    }
}

fn ceiling_ratio(kind: StatKind) -> f64 {
    match kind.roll_ceiling() {
        Some(ceiling) => CRIT_DMG_CEILING / ceiling,
        None => 0.0,
    }
}

fn strict() -> FormulaVariant {
    let mut multipliers = HashMap::new();
    multipliers.insert(StatKind::CritRate, 2.0);
    multipliers.insert(StatKind::CritDmg, 1.0);
    for kind in [
        StatKind::AtkPercent,
        StatKind::HpPercent,
        StatKind::DefPercent,
        StatKind::ElementalMastery,
        StatKind::EnergyRecharge,
    ] {
        multipliers.insert(kind, ceiling_ratio(kind));
    }
    FormulaVariant::new(STRICT, "Strict", multipliers)
}

fn popular() -> FormulaVariant {
    let mut multipliers = HashMap::new();
    multipliers.insert(StatKind::CritRate, 2.0);
    multipliers.insert(StatKind::CritDmg, 1.0);
    multipliers.insert(StatKind::AtkPercent, 1.0);
    multipliers.insert(StatKind::HpPercent, 1.0);
    multipliers.insert(StatKind::DefPercent, 1.0);
    multipliers.insert(StatKind::ElementalMastery, ceiling_ratio(StatKind::ElementalMastery));
    multipliers.insert(StatKind::EnergyRecharge, ceiling_ratio(StatKind::EnergyRecharge));
    FormulaVariant::new(POPULAR, "Popular", multipliers)
}

/// Holds every registered weighting scheme plus the active-variant cell,
/// the only persistent mutable state in the engine. Written on explicit
/// configuration events, read once per scoring pass.
#[derive(Debug, Clone)]
pub struct FormulaRegistry {
    // Registration order is presentation order.
    variants: Vec<FormulaVariant>,
    active: String,
}

impl FormulaRegistry {
    /// Registry seeded with the built-in `strict` and `popular` variants,
    /// with `strict` active.
    pub fn with_builtins() -> Self {
        Self {
            variants: vec![strict(), popular()],
            active: STRICT.to_string(),
        }
    }

    pub fn get(&self, name: &str) -> RsResult<&FormulaVariant> {
        self.variants
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| RelicScoreError::UnknownVariant(name.to_string()))
    }

    pub fn multiplier_of(&self, name: &str, kind: StatKind) -> RsResult<f64> {
        Ok(self.get(name)?.multiplier(kind))
    }

    pub fn active_variant(&self) -> &str {
        &self.active
    }

    /// Pure configuration write; already-computed summaries are unaffected
    /// and must be recomputed to observe the change.
    pub fn set_active_variant(&mut self, name: &str) -> RsResult<()> {
        self.get(name)?;
        self.active = name.to_string();
        Ok(())
    }

    pub fn register(&mut self, variant: FormulaVariant) -> RsResult<()> {
        if self.variants.iter().any(|v| v.name == variant.name) {
            return Err(RelicScoreError::InvalidVariant(format!(
                "'{}' is already registered",
                variant.name
            )));
        }
        if let Some(kind) = StatKind::iter().find(|k| k.is_flat() && variant.multiplier(*k) != 0.0)
        {
            return Err(RelicScoreError::InvalidVariant(format!(
                "flat stat {} must have multiplier 0",
                kind
            )));
        }
        self.variants.push(variant);
        Ok(())
    }

    pub fn variants(&self) -> impl Iterator<Item = &FormulaVariant> {
        self.variants.iter()
    }
}
