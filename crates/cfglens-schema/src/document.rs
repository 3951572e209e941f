//! # Schema Documents & Reference Resolution
//!
//! A [`SchemaDocument`] owns one parsed schema and is immutable after
//! construction. Fragment references (`#/a/b/c`) resolve by walking the
//! document from its root: objects index by key, arrays by parsed integer
//! position. Resolution is performed fresh on every call, borrows into the
//! document, and never copies — no node is ever mutated in place, so
//! sharing borrows is safe.

use crate::error::SchemaError;
use serde_json::Value;

/// An immutable, self-contained schema document.
///
/// ## Thread Safety
///
/// `SchemaDocument` is `Send + Sync`; independent annotation and
/// validation calls may run concurrently on separate threads with no
/// coordination.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    root: Value,
}

impl SchemaDocument {
    /// Wrap a parsed schema value.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// The document's root node.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolve a same-document fragment reference to the node it addresses.
    ///
    /// The reference must start with `#/`; the remainder splits on `/` and
    /// each segment indexes into the current node — by key for objects, by
    /// parsed integer for arrays. `#/` alone addresses the root.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidReference`] if the prefix is missing,
    /// a segment addresses a key or index that does not exist, an array
    /// segment is not an integer, or a scalar is reached mid-path.
    pub fn resolve(&self, reference: &str) -> Result<&Value, SchemaError> {
        let invalid = |reason: String| SchemaError::InvalidReference {
            reference: reference.to_string(),
            reason,
        };

        let Some(fragment) = reference.strip_prefix("#/") else {
            return Err(invalid("must start with '#/'".to_string()));
        };
        if fragment.is_empty() {
            return Ok(&self.root);
        }

        let mut node = &self.root;
        for segment in fragment.split('/') {
            node = match node {
                Value::Object(map) => map
                    .get(segment)
                    .ok_or_else(|| invalid(format!("no such key: {segment:?}")))?,
                Value::Array(items) => {
                    let index: usize = segment
                        .parse()
                        .map_err(|_| invalid(format!("non-numeric array index: {segment:?}")))?;
                    items
                        .get(index)
                        .ok_or_else(|| invalid(format!("index {index} out of bounds")))?
                }
                _ => return Err(invalid(format!("cannot index scalar with {segment:?}"))),
            };
        }
        Ok(node)
    }
}
