use proptest::prelude::*;

use relicscore::catalog::StatKind;
use relicscore::correction;
use relicscore::formula::{FormulaRegistry, POPULAR, STRICT};
use relicscore::normalize::NormalizedStat;
use relicscore::scorer::score_item;

const SCORING_KINDS: [StatKind; 7] = [
    StatKind::CritRate,
    StatKind::CritDmg,
    StatKind::AtkPercent,
    StatKind::HpPercent,
    StatKind::DefPercent,
    StatKind::ElementalMastery,
    StatKind::EnergyRecharge,
];

fn stat(kind: StatKind, value: f64) -> NormalizedStat {
    NormalizedStat { kind, value }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_scores_are_finite_and_nonnegative(
        values in proptest::collection::vec(0.0..500.0f64, 0..8)
    ) {
        let registry = FormulaRegistry::with_builtins();
        let stats: Vec<NormalizedStat> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| stat(SCORING_KINDS[i % SCORING_KINDS.len()], v))
            .collect();

        for name in [STRICT, POPULAR] {
            let variant = registry.get(name).unwrap();
            let result = score_item(&stats, variant);
            prop_assert!(result.raw_score.is_finite());
            prop_assert!(result.raw_score >= 0.0);
        }
    }

    #[test]
    fn prop_score_is_monotone_in_each_scoring_stat(
        base in 0.0..200.0f64,
        bump in 0.0..200.0f64,
        kind_index in 0usize..7
    ) {
        let registry = FormulaRegistry::with_builtins();
        let kind = SCORING_KINDS[kind_index];

        for name in [STRICT, POPULAR] {
            let variant = registry.get(name).unwrap();
            let low = score_item(&[stat(kind, base)], variant);
            let high = score_item(&[stat(kind, base + bump)], variant);
            prop_assert!(
                high.raw_score >= low.raw_score,
                "{name}: {kind} {} -> {} lowered the score",
                base,
                base + bump
            );
        }
    }

    #[test]
    fn prop_flat_stats_never_move_the_score(
        value in 0.0..1e6f64,
        crit in 0.0..62.2f64
    ) {
        let registry = FormulaRegistry::with_builtins();
        for name in [STRICT, POPULAR] {
            let variant = registry.get(name).unwrap();
            let without = score_item(&[stat(StatKind::CritDmg, crit)], variant);
            let with = score_item(
                &[
                    stat(StatKind::CritDmg, crit),
                    stat(StatKind::Hp, value),
                    stat(StatKind::Atk, value),
                    stat(StatKind::Def, value),
                ],
                variant,
            );
            prop_assert_eq!(without.raw_score, with.raw_score);
        }
    }

    #[test]
    fn prop_correction_under_ceiling_is_identity(
        pairs in proptest::collection::vec((0.0..200.0f64, 0.0..40.0f64), 1..6),
        multiplier in 0.0..3.0f64
    ) {
        let (scores, recharge): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let observed: f64 = recharge.iter().sum();

        let summary = correction::apply(&scores, &recharge, Some(observed + 1.0), multiplier);
        prop_assert_eq!(summary.per_item, scores);
        prop_assert_eq!(summary.excess, 0.0);
    }

    #[test]
    fn prop_correction_never_raises_net_or_drops_items_below_zero(
        pairs in proptest::collection::vec((0.0..200.0f64, 0.0..60.0f64), 1..6),
        ceiling in 1.0..150.0f64,
        multiplier in 0.0..3.0f64
    ) {
        let (scores, recharge): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let summary = correction::apply(&scores, &recharge, Some(ceiling), multiplier);

        prop_assert!(summary.net <= summary.subtotal + 1e-9);
        prop_assert!(
            (summary.net - (summary.subtotal - summary.excess)).abs() < 0.011,
            "conservation violated: net {} subtotal {} excess {}",
            summary.net, summary.subtotal, summary.excess
        );
        for &adjusted in &summary.per_item {
            prop_assert!(adjusted >= 0.0);
            prop_assert!(adjusted.is_finite());
        }
    }

    #[test]
    fn prop_correction_preserves_ranking(
        pairs in proptest::collection::vec((0.01..200.0f64, 0.0..60.0f64), 2..6),
        ceiling in 1.0..100.0f64,
        multiplier in 0.0..3.0f64
    ) {
        let (scores, recharge): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let summary = correction::apply(&scores, &recharge, Some(ceiling), multiplier);

        for i in 0..scores.len() {
            for j in 0..scores.len() {
                if scores[i] >= scores[j] {
                    prop_assert!(
                        summary.per_item[i] >= summary.per_item[j],
                        "item {} ({} -> {}) fell below item {} ({} -> {})",
                        i, scores[i], summary.per_item[i],
                        j, scores[j], summary.per_item[j]
                    );
                }
            }
        }
    }
}
