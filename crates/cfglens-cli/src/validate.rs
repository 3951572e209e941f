//! # Validate Subcommand
//!
//! Checks a configuration document against a named schema from the store
//! and prints the violations with path-diff compaction.

use std::path::PathBuf;

use clap::Args;

use cfglens_schema::{format_errors, load_document, SchemaStore};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory containing `<name>.schema.json` files.
    #[arg(long, default_value = "schemas")]
    pub schema_dir: PathBuf,

    /// Name of the schema to validate against.
    #[arg(long)]
    pub schema: String,

    /// Configuration document to validate (JSON or YAML).
    pub config: PathBuf,
}

/// Run validation; returns the number of violations found.
pub fn run(args: &ValidateArgs) -> anyhow::Result<usize> {
    let store = SchemaStore::new(&args.schema_dir);
    let document = store.load(&args.schema)?;
    let config = load_document(&args.config)?;

    let violations = document.validate(&config)?;
    tracing::info!(
        schema = %args.schema,
        config = %args.config.display(),
        violations = violations.len(),
        "validation finished"
    );

    let label = args.config.display().to_string();
    for line in format_errors(&violations, &label) {
        // Violation lines carry their own trailing newline; the header
        // does not.
        if line.ends_with('\n') {
            print!("{line}");
        } else {
            println!("{line}");
        }
    }
    Ok(violations.len())
}
