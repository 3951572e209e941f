//! # Schema Annotator — the Core Co-Walk
//!
//! Walks a schema document in parallel with a configuration value and
//! produces one [`LeafEntry`] per path either side touches: every
//! terminal configuration position, plus every non-root position the
//! schema walk decorates — container positions included, which carry
//! schema metadata but no value of their own. The tree of entries is an
//! explicit `BTreeMap` keyed by path with a get-or-create operation:
//! entries are created on first reference — whether that reference comes
//! from the config flattener or from the schema walk — and are never
//! deleted within a call.
//!
//! ## Walk Invariants
//!
//! - Exactly one `$ref` dereference hop per visit, before type dispatch.
//! - Decoration (attaching `schema` / `schema_type`, masking sensitive
//!   values) happens at every non-root visit; composite branches revisit
//!   the same paths and overwrite — last writer wins, no merging.
//! - Composite branch selection is driven by sub-validation: branches
//!   that fail validation are skipped entirely.
//! - The array walk is bounded by what the flattener discovered, then
//!   extended to any schema-declared item slots beyond the config's
//!   length.
//! - Configuration shape mismatches are tolerated silently; recursion
//!   simply finds no matching children.

use std::collections::BTreeMap;

use cfglens_core::{flatten, ConfigPath, ValueType};
use serde::Serialize;
use serde_json::Value;

use crate::document::SchemaDocument;
use crate::error::SchemaError;
use crate::node::{is_sensitive, ItemSchemas, SchemaNode, SchemaType};
use crate::validate::validate_fragment;

/// Mask token substituted for values under `sensitive` schema nodes.
pub const MASK: &str = "********";

/// One annotated record per visited position.
///
/// Terminal configuration positions always produce an entry; the schema
/// walk additionally produces entries for the non-root positions it
/// decorates, including object and array container positions. An entry
/// that only the flattener touched has empty schema fields; an entry
/// that only the schema walk touched has no value. All are valid —
/// config not described by the schema is not an error by itself, and
/// schema-documented positions absent from the config still appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafEntry {
    /// Location of this leaf in the configuration document.
    pub path: ConfigPath,
    /// The original value, or the mask token under a sensitive node.
    /// `None` when the position exists only in the schema.
    pub value: Option<Value>,
    /// Runtime type tag of the original value.
    pub value_type: Option<ValueType>,
    /// The resolved schema node that matched this path, if any.
    pub schema: Option<Value>,
    /// Declared or inferred type of that node.
    pub schema_type: Option<SchemaType>,
}

impl LeafEntry {
    /// An empty entry at `path`.
    fn at(path: ConfigPath) -> Self {
        Self {
            path,
            value: None,
            value_type: None,
            schema: None,
            schema_type: None,
        }
    }
}

impl SchemaDocument {
    /// Annotate every leaf of `config` with the schema metadata that
    /// applies to it, starting from this document's root node.
    ///
    /// The result is a fresh sequence, sorted ascending by path, with one
    /// entry per distinct path.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidReference`] for unresolvable `$ref`s,
    /// [`SchemaError::UnsupportedSchema`] for `not` combinators, bare
    /// composites, and unknown `type` keywords, and
    /// [`SchemaError::ValidatorBuild`] when a composite branch cannot be
    /// compiled for sub-validation.
    pub fn annotate(&self, config: &Value) -> Result<Vec<LeafEntry>, SchemaError> {
        let mut walk = Walk {
            document: self,
            tree: BTreeMap::new(),
        };

        for (path, value) in flatten(config) {
            let value_type = ValueType::of(&value);
            let entry = walk.entry(&path);
            entry.value = Some(value);
            entry.value_type = value_type;
        }

        walk.visit(ConfigPath::root(), Some(config), self.root())?;
        Ok(walk.tree.into_values().collect())
    }
}

/// Transient state of one annotation call.
struct Walk<'a> {
    document: &'a SchemaDocument,
    tree: BTreeMap<ConfigPath, LeafEntry>,
}

impl<'a> Walk<'a> {
    /// Get-or-create the entry at `path`.
    fn entry(&mut self, path: &ConfigPath) -> &mut LeafEntry {
        self.tree
            .entry(path.clone())
            .or_insert_with(|| LeafEntry::at(path.clone()))
    }

    fn unsupported(&self, path: &ConfigPath, reason: impl Into<String>) -> SchemaError {
        SchemaError::UnsupportedSchema {
            at: path.to_string(),
            reason: reason.into(),
        }
    }

    fn visit(
        &mut self,
        path: ConfigPath,
        config: Option<&Value>,
        node: &'a Value,
    ) -> Result<(), SchemaError> {
        // One dereference hop, before any type dispatch.
        let node = match SchemaNode::classify(node) {
            SchemaNode::Ref(reference) => self.document.resolve(reference)?,
            _ => node,
        };
        let shape = SchemaNode::classify(node);

        // Decorate the entry at this path. Re-decoration by a later
        // composite branch overwrites these fields.
        if let Some(schema_type) = shape.schema_type() {
            if !path.is_empty() {
                let entry = self.entry(&path);
                entry.schema = Some(node.clone());
                entry.schema_type = Some(schema_type);
                if is_sensitive(node) {
                    entry.value = Some(Value::String(MASK.to_string()));
                }
            }
        }

        match shape {
            SchemaNode::Ref(_) => {
                Err(self.unsupported(&path, "nested $ref remains after dereference"))
            }
            SchemaNode::Unknown(keyword) => {
                Err(self.unsupported(&path, format!("unknown schema type: {keyword:?}")))
            }
            SchemaNode::Primitive(_) => Ok(()),
            SchemaNode::Object {
                properties,
                additional_properties,
            } => {
                if let Some(props) = properties {
                    for (name, property_schema) in props {
                        self.visit(
                            path.child(name.as_str()),
                            config.and_then(|c| c.get(name.as_str())),
                            property_schema,
                        )?;
                    }
                }
                // additionalProperties as a schema node covers every config
                // key not claimed by a declared property. A boolean form
                // carries no annotation and is left to the validator.
                if let (Some(extra_schema), Some(Value::Object(map))) =
                    (additional_properties, config)
                {
                    if extra_schema.is_object() {
                        for (name, value) in map {
                            if properties.is_some_and(|p| p.contains_key(name)) {
                                continue;
                            }
                            self.visit(path.child(name.as_str()), Some(value), extra_schema)?;
                        }
                    }
                }
                Ok(())
            }
            SchemaNode::Array { items } => {
                let items: Vec<&Value> = match items {
                    ItemSchemas::Uniform(node) => vec![node],
                    ItemSchemas::PerIndex(list) => list.iter().collect(),
                };

                // Config-driven phase: bounded by the entries the
                // flattener discovered, with the last item schema reused
                // once the per-index list runs out.
                let mut index = 0;
                while self.tree.contains_key(&path.child(index)) {
                    if let Some(item) = items.get(index).copied().or_else(|| items.last().copied())
                    {
                        self.visit(
                            path.child(index),
                            config.and_then(|c| c.get(index)),
                            item,
                        )?;
                    }
                    index += 1;
                }

                // Schema-declared slots beyond the config's length.
                while index < items.len() {
                    self.visit(
                        path.child(index),
                        config.and_then(|c| c.get(index)),
                        items[index],
                    )?;
                    index += 1;
                }
                Ok(())
            }
            SchemaNode::Composite { not: true, .. } => {
                Err(self.unsupported(&path, "the 'not' combinator is not supported"))
            }
            SchemaNode::Composite { branches: None, .. } => {
                Err(self.unsupported(&path, "composite schema with no recognized combinator"))
            }
            SchemaNode::Composite {
                branches: Some(list),
                ..
            } => {
                for branch in list {
                    let violations =
                        validate_fragment(branch, config.unwrap_or(&Value::Null))?;
                    if violations.is_empty() {
                        self.visit(path.clone(), config, branch)?;
                    }
                }
                Ok(())
            }
        }
    }
}
