use clap::Args;

use relicscore::error::RsResult;
use relicscore::formula::FormulaRegistry;

use crate::reports;

#[derive(Args, Debug, Clone)]
pub struct MethodsArgs {
    /// Show a single variant only.
    #[arg(short, long)]
    pub method: Option<String>,
}

pub fn run(args: MethodsArgs, registry: &FormulaRegistry) -> RsResult<()> {
    for variant in registry.variants() {
        if let Some(ref filter) = args.method {
            if !variant.name.eq_ignore_ascii_case(filter) {
                continue;
            }
        }
        reports::print_multiplier_table(variant, registry.active_variant() == variant.name);
    }
    Ok(())
}
