//! # Fragment Validator Adapter
//!
//! Wraps the `jsonschema` crate behind the path vocabulary used by the
//! rest of cfglens. Validators are built per call from the schema
//! fragment being checked, with a retriever that refuses every external
//! URI — documents are self-contained, and remote or file `$ref`s must
//! never trigger a fetch. Input data is taken as-is; no type coercion.
//!
//! ## Path Conversion
//!
//! Each engine error carries a JSON-Pointer-style location. The adapter
//! converts it into a [`ConfigPath`] by stripping the leading marker and
//! splitting on `/`. The conversion is best-effort: with nested composite
//! schemas the resulting path is not guaranteed to line up with the
//! annotator's leaf paths. That is a documented limitation of the
//! direct-pointer-split behavior, not a defect to silently fix.

use cfglens_core::ConfigPath;
use jsonschema::{Retrieve, Uri};
use serde_json::Value;
use std::fmt;

use crate::document::SchemaDocument;
use crate::error::SchemaError;

/// A single validation violation with its best-effort location.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Location of the violating value in the instance document.
    pub path: ConfigPath,
    /// Human-readable description from the validation engine.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Retriever that refuses every URI. Registering it prevents the engine
/// from making network or filesystem requests for unresolved `$ref`s.
struct SelfContainedRetriever;

impl Retrieve for SelfContainedRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!(
            "schema documents are self-contained; refusing to fetch {}",
            uri.as_str()
        )
        .into())
    }
}

/// Validate an instance against one schema fragment, collecting every
/// violation as data.
///
/// An empty result means the fragment accepts the instance. Violations
/// never abort anything; only a schema that cannot be compiled is an
/// error.
///
/// # Errors
///
/// Returns [`SchemaError::ValidatorBuild`] if the fragment is not a
/// usable schema or references an external document.
pub fn validate_fragment(
    fragment: &Value,
    instance: &Value,
) -> Result<Vec<Violation>, SchemaError> {
    let mut options = jsonschema::options();
    options.with_retriever(SelfContainedRetriever);
    let validator = options
        .build(fragment)
        .map_err(|e| SchemaError::ValidatorBuild {
            reason: e.to_string(),
        })?;

    let violations = validator
        .iter_errors(instance)
        .map(|error| Violation {
            path: ConfigPath::from_json_pointer(&error.instance_path.to_string()),
            message: error.to_string(),
        })
        .collect();
    Ok(violations)
}

impl SchemaDocument {
    /// Validate a configuration document against this schema's root node.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ValidatorBuild`] if the schema cannot be
    /// compiled by the validation engine.
    pub fn validate(&self, config: &Value) -> Result<Vec<Violation>, SchemaError> {
        validate_fragment(self.root(), config)
    }
}
