// ===== relicscore/src/catalog.rs =====
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Canonical sub-stat identifiers.
///
/// Flat HP/ATK/DEF rolls share their on-page label with the percent rolls in
/// some locales; the normalizer resolves that ambiguity, the catalog only
/// answers lookups.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Hp,
    HpPercent,
    Atk,
    AtkPercent,
    Def,
    DefPercent,
    CritRate,
    CritDmg,
    ElementalMastery,
    EnergyRecharge,
}

/// Maximum value a single high-tier sub-stat roll can reach.
/// CRIT DMG is the base the formula ratios are derived from.
pub const CRIT_RATE_CEILING: f64 = 31.1;
pub const CRIT_DMG_CEILING: f64 = 62.2;
pub const ATK_PERCENT_CEILING: f64 = 46.6;
pub const HP_PERCENT_CEILING: f64 = 46.6;
pub const DEF_PERCENT_CEILING: f64 = 58.3;
pub const ELEMENTAL_MASTERY_CEILING: f64 = 187.0;
pub const ENERGY_RECHARGE_CEILING: f64 = 51.8;

impl StatKind {
    /// Roll ceiling of this stat, `None` for the flat stats (which never score).
    pub fn roll_ceiling(self) -> Option<f64> {
        match self {
            Self::CritRate => Some(CRIT_RATE_CEILING),
            Self::CritDmg => Some(CRIT_DMG_CEILING),
            Self::AtkPercent => Some(ATK_PERCENT_CEILING),
            Self::HpPercent => Some(HP_PERCENT_CEILING),
            Self::DefPercent => Some(DEF_PERCENT_CEILING),
            Self::ElementalMastery => Some(ELEMENTAL_MASTERY_CEILING),
            Self::EnergyRecharge => Some(ENERGY_RECHARGE_CEILING),
            Self::Hp | Self::Atk | Self::Def => None,
        }
    }

    pub fn is_flat(self) -> bool {
        matches!(self, Self::Hp | Self::Atk | Self::Def)
    }

    /// The percent sibling of an ambiguous flat root (HP -> HP%, etc).
    pub fn percent_variant(self) -> Option<StatKind> {
        match self {
            Self::Hp => Some(Self::HpPercent),
            Self::Atk => Some(Self::AtkPercent),
            Self::Def => Some(Self::DefPercent),
            _ => None,
        }
    }
}

/// Page languages with distinct label tables. Lookups are case-sensitive and
/// never cross-matched between locales.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    /// Maps the stats page's language-selector text to a locale.
    pub fn from_page_token(token: &str) -> Option<Locale> {
        match token.trim() {
            "JP" | "日本語" => Some(Locale::Ja),
            "EN" | "English" => Some(Locale::En),
            _ => None,
        }
    }
}

// (kind, ja, en) display-label table. The catalog owns this table exclusively.
const LABELS: &[(StatKind, &str, &str)] = &[
    (StatKind::Hp, "HP", "HP"),
    (StatKind::HpPercent, "HPパーセンテージ", "HP Percentage"),
    (StatKind::Atk, "攻撃力", "ATK"),
    (StatKind::AtkPercent, "攻撃力パーセンテージ", "ATK Percentage"),
    (StatKind::Def, "防御力", "DEF"),
    (StatKind::DefPercent, "防御力パーセンテージ", "DEF Percentage"),
    (StatKind::CritRate, "会心率", "CRIT Rate"),
    (StatKind::CritDmg, "会心ダメージ", "CRIT DMG"),
    (StatKind::ElementalMastery, "元素熟知", "Elemental Mastery"),
    (StatKind::EnergyRecharge, "元素チャージ効率", "Energy Recharge"),
];

fn label_column(row: &(StatKind, &'static str, &'static str), locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => row.1,
        Locale::En => row.2,
    }
}

/// Display label of a stat in the given locale.
pub fn label_of(kind: StatKind, locale: Locale) -> &'static str {
    // The table is total over StatKind; the fallback arm is unreachable.
    LABELS
        .iter()
        .find(|row| row.0 == kind)
        .map(|row| label_column(row, locale))
        .unwrap_or("")
}

/// Exact, case-sensitive reverse lookup against one locale's label column.
pub fn kind_of_label(label: &str, locale: Locale) -> Option<StatKind> {
    LABELS
        .iter()
        .find(|row| label_column(row, locale) == label)
        .map(|row| row.0)
}

/// Every display label of a locale, e.g. as a fallback known-labels set.
pub fn labels_for(locale: Locale) -> impl Iterator<Item = &'static str> {
    LABELS.iter().map(move |row| label_column(row, locale))
}

/// If `label` names an ambiguous flat root in `locale`, the label of its
/// percent sibling. `None` for every other label.
pub fn percent_label_for(label: &str, locale: Locale) -> Option<&'static str> {
    kind_of_label(label, locale)
        .and_then(StatKind::percent_variant)
        .map(|kind| label_of(kind, locale))
}
