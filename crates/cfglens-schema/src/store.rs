//! # Schema Store
//!
//! Named schema lookup over a directory. Each schema lives in
//! `<dir>/<name>.schema.json`; asking for a name with no file behind it
//! is a fatal configuration error reported to the caller, never retried.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::document::SchemaDocument;
use crate::error::SchemaError;

/// Suffix every stored schema file carries.
const SCHEMA_SUFFIX: &str = ".schema.json";

/// A directory of named schema documents.
#[derive(Debug, Clone)]
pub struct SchemaStore {
    schema_dir: PathBuf,
}

impl SchemaStore {
    /// A store rooted at `schema_dir`. The directory is not scanned until
    /// a schema is requested.
    pub fn new(schema_dir: impl AsRef<Path>) -> Self {
        Self {
            schema_dir: schema_dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the store's directory.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Load the schema registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::SchemaNotFound`] if no file exists for the
    /// name, and [`SchemaError::SchemaLoad`] if the file cannot be read
    /// or is not valid JSON.
    pub fn load(&self, name: &str) -> Result<SchemaDocument, SchemaError> {
        let path = self.schema_dir.join(format!("{name}{SCHEMA_SUFFIX}"));
        if !path.exists() {
            return Err(SchemaError::SchemaNotFound {
                name: name.to_string(),
                dir: self.schema_dir.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| SchemaError::SchemaLoad {
            name: name.to_string(),
            reason: format!("cannot read file: {e}"),
        })?;
        let root: Value = serde_json::from_str(&content).map_err(|e| SchemaError::SchemaLoad {
            name: name.to_string(),
            reason: format!("invalid JSON: {e}"),
        })?;
        Ok(SchemaDocument::new(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unique scratch directory for one test.
    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "cfglens-store-{tag}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_existing_schema() {
        let dir = scratch_dir("load");
        std::fs::write(
            dir.join("service.schema.json"),
            r#"{ "type": "object", "properties": { "port": { "type": "integer" } } }"#,
        )
        .unwrap();

        let store = SchemaStore::new(&dir);
        let doc = store.load("service").unwrap();
        assert_eq!(doc.root()["type"], "object");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_schema_is_fatal() {
        let dir = scratch_dir("missing");
        let store = SchemaStore::new(&dir);
        let err = store.load("nope").unwrap_err();
        match err {
            SchemaError::SchemaNotFound { name, .. } => assert_eq!(name, "nope"),
            other => panic!("expected SchemaNotFound, got: {other}"),
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unparsable_schema_is_a_load_error() {
        let dir = scratch_dir("parse");
        std::fs::write(dir.join("broken.schema.json"), "{ not json").unwrap();

        let store = SchemaStore::new(&dir);
        let err = store.load("broken").unwrap_err();
        assert!(matches!(err, SchemaError::SchemaLoad { .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
