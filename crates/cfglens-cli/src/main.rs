//! # cfglens CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// cfglens — schema-annotated configuration inspection.
///
/// Validates configuration documents against stored JSON schemas and
/// prints a flattened, path-addressed view of every leaf value with
/// sensitive fields masked.
#[derive(Parser, Debug)]
#[command(name = "cfglens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a configuration document against a named schema.
    Validate(cfglens_cli::validate::ValidateArgs),
    /// Print the schema-annotated view of a configuration document.
    Inspect(cfglens_cli::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(args) => {
            let violations = cfglens_cli::validate::run(&args)?;
            if violations > 0 {
                std::process::exit(1);
            }
        }
        Commands::Inspect(args) => {
            cfglens_cli::inspect::run(&args)?;
        }
    }

    Ok(())
}
