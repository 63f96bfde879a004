// ===== relicscore/src/main.rs =====
use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

use relicscore::formula::FormulaRegistry;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a snapshot of equipped items.
    Score(cmd::score::ScoreArgs),
    /// Show the multiplier tables of the registered formula variants.
    Methods(cmd::methods::MethodsArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let registry = FormulaRegistry::with_builtins();

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args, &registry),
        Commands::Methods(args) => cmd::methods::run(args, &registry),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
