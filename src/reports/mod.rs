// ===== relicscore/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

use relicscore::api::{PassConfig, PassOutcome};
use relicscore::catalog::{self, Locale, StatKind};
use relicscore::formula::FormulaVariant;

fn right_align_from(table: &mut Table, first: usize, last: usize) {
    for i in first..=last {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_score_report(outcome: &PassOutcome, config: &PassConfig) {
    let corrected = outcome.summary.excess > 0.0;

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("").add_attribute(Attribute::Bold)];
    for i in 0..outcome.items.len() {
        header.push(Cell::new(format!("Item {}", i + 1)).add_attribute(Attribute::Bold));
    }
    table.add_row(header);

    let mut score_row = vec![Cell::new("Score").fg(Color::Cyan)];
    for item in &outcome.items {
        score_row.push(Cell::new(format!("{:.2}", item.raw_score)));
    }
    table.add_row(score_row);

    if corrected {
        let mut adjusted_row = vec![Cell::new("Adjusted").fg(Color::Red)];
        for score in &outcome.summary.per_item {
            adjusted_row.push(Cell::new(format!("{:.2}", score)));
        }
        table.add_row(adjusted_row);
    }

    right_align_from(&mut table, 1, outcome.items.len());
    println!("{table}");

    let mut summary = Table::new();
    summary
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary.add_row(vec![
        Cell::new("Subtotal Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", outcome.summary.subtotal)),
    ]);
    summary.add_row(vec![
        Cell::new("Excess Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", outcome.summary.excess)).fg(if corrected {
            Color::Red
        } else {
            Color::Reset
        }),
    ]);
    summary.add_row(vec![
        Cell::new("Total Score").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", outcome.summary.net)).fg(Color::Cyan),
    ]);

    right_align_from(&mut summary, 1, 1);
    println!("{summary}");

    if let Some(ceiling) = config.target_ceiling {
        println!("(target ceiling {:.0}, method '{}')", ceiling, config.method);
    } else {
        println!("(no target ceiling, method '{}')", config.method);
    }
}

// Mirrors the settings popup's abbreviation: whole multipliers stay short,
// irrational ratios show three decimals and a marker.
fn format_multiplier(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{:.1}", value)
    } else {
        format!("{:.3}...", value)
    }
}

pub fn print_multiplier_table(variant: &FormulaVariant, active: bool) {
    let marker = if active { " (active)" } else { "" };
    println!("\n{} [{}]{}", variant.display_name, variant.name, marker);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Stat").add_attribute(Attribute::Bold),
        Cell::new("Score Coefficient").add_attribute(Attribute::Bold),
    ]);

    for kind in StatKind::iter() {
        let multiplier = variant.multiplier(kind);
        // Flat stats never score and stay out of the table.
        if multiplier > 0.0 {
            table.add_row(vec![
                Cell::new(catalog::label_of(kind, Locale::En)),
                Cell::new(format_multiplier(multiplier)),
            ]);
        }
    }

    right_align_from(&mut table, 1, 1);
    println!("{table}");
}
