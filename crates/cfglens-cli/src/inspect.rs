//! # Inspect Subcommand
//!
//! Prints the flattened, schema-annotated view of a configuration
//! document: one line per leaf with its (possibly masked) value and the
//! schema type that matched it.

use std::path::PathBuf;

use clap::Args;

use cfglens_schema::{load_document, SchemaStore};

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Directory containing `<name>.schema.json` files.
    #[arg(long, default_value = "schemas")]
    pub schema_dir: PathBuf,

    /// Name of the schema to annotate with.
    #[arg(long)]
    pub schema: String,

    /// Configuration document to inspect (JSON or YAML).
    pub config: PathBuf,
}

/// Print one line per annotated leaf entry, sorted by path.
pub fn run(args: &InspectArgs) -> anyhow::Result<()> {
    let store = SchemaStore::new(&args.schema_dir);
    let document = store.load(&args.schema)?;
    let config = load_document(&args.config)?;

    let entries = document.annotate(&config)?;
    tracing::info!(
        schema = %args.schema,
        config = %args.config.display(),
        leaves = entries.len(),
        "annotation finished"
    );

    for entry in &entries {
        let value = entry
            .value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        let schema_type = entry
            .schema_type
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{}  {}  [{}]", entry.path, value, schema_type);
    }
    Ok(())
}
