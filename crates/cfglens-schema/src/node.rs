//! # Schema Node Classification
//!
//! Schema documents are parsed JSON and stay that way; this module gives
//! the walker a typed view of one node at a time. Each visit classifies
//! the node into exactly one tagged variant with a single discriminated
//! match — there is no ad-hoc attribute probing spread across the walk.
//!
//! A `$ref`-bearing node classifies as [`SchemaNode::Ref`] regardless of
//! what else it carries, and must be dereferenced before dispatch. A node
//! with an explicit `type` dispatches on it; a node with neither `type`
//! nor `$ref` is composite.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Declared or inferred type of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// `type: object`.
    Object,
    /// `type: array`.
    Array,
    /// `type: string`.
    String,
    /// `type: integer`.
    Integer,
    /// `type: number`.
    Number,
    /// `type: boolean`.
    Boolean,
    /// `type: null`.
    Null,
    /// No `type` keyword: the node combines sub-schemas (or is unusable).
    Composite,
}

impl SchemaType {
    /// Stable lowercase name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::String => "string",
            SchemaType::Integer => "integer",
            SchemaType::Number => "number",
            SchemaType::Boolean => "boolean",
            SchemaType::Null => "null",
            SchemaType::Composite => "composite",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `items` keyword of an array schema: one node shared by every
/// element, or one node per index.
#[derive(Debug, Clone, Copy)]
pub enum ItemSchemas<'a> {
    /// A single schema applied to all elements.
    Uniform(&'a Value),
    /// Per-index schemas; the last one is reused for overflow indices.
    PerIndex(&'a [Value]),
}

/// Tagged view of one schema node, decided by a single classification.
#[derive(Debug, Clone, Copy)]
pub enum SchemaNode<'a> {
    /// `$ref` indirection into the same document.
    Ref(&'a str),
    /// An object schema with declared properties and an optional
    /// `additionalProperties` keyword (boolean or schema node).
    Object {
        /// The `properties` map, if present and well-formed.
        properties: Option<&'a Map<String, Value>>,
        /// The raw `additionalProperties` value, if present.
        additional_properties: Option<&'a Value>,
    },
    /// An array schema.
    Array {
        /// The `items` keyword. Missing or malformed `items` classifies
        /// as an empty per-index list: elements get no annotation.
        items: ItemSchemas<'a>,
    },
    /// A terminal scalar schema.
    Primitive(SchemaType),
    /// A combinator node.
    Composite {
        /// `not` is present. Unsupported by the walker, always fatal.
        not: bool,
        /// The first present non-empty combinator list, consulted in the
        /// fixed order `allOf`, `anyOf`, `oneOf`.
        branches: Option<&'a [Value]>,
    },
    /// A `type` keyword this walker does not recognize.
    Unknown(&'a str),
}

impl<'a> SchemaNode<'a> {
    /// Classify a schema node.
    pub fn classify(node: &'a Value) -> Self {
        if let Some(reference) = node.get("$ref").and_then(Value::as_str) {
            return SchemaNode::Ref(reference);
        }

        match node.get("type").and_then(Value::as_str) {
            Some("object") => SchemaNode::Object {
                properties: node.get("properties").and_then(Value::as_object),
                additional_properties: node.get("additionalProperties"),
            },
            Some("array") => SchemaNode::Array {
                items: match node.get("items") {
                    Some(Value::Array(per_index)) => ItemSchemas::PerIndex(per_index),
                    Some(uniform @ Value::Object(_)) => ItemSchemas::Uniform(uniform),
                    _ => ItemSchemas::PerIndex(&[]),
                },
            },
            Some("string") => SchemaNode::Primitive(SchemaType::String),
            Some("integer") => SchemaNode::Primitive(SchemaType::Integer),
            Some("number") => SchemaNode::Primitive(SchemaType::Number),
            Some("boolean") => SchemaNode::Primitive(SchemaType::Boolean),
            Some("null") => SchemaNode::Primitive(SchemaType::Null),
            Some(other) => SchemaNode::Unknown(other),
            None => {
                if node.get("not").is_some() {
                    return SchemaNode::Composite {
                        not: true,
                        branches: None,
                    };
                }
                for combinator in ["allOf", "anyOf", "oneOf"] {
                    if let Some(list) = node.get(combinator).and_then(Value::as_array) {
                        if !list.is_empty() {
                            return SchemaNode::Composite {
                                not: false,
                                branches: Some(list),
                            };
                        }
                    }
                }
                SchemaNode::Composite {
                    not: false,
                    branches: None,
                }
            }
        }
    }

    /// The declared or inferred [`SchemaType`] of this node, or `None`
    /// for shapes that cannot be decorated (`Ref`, `Unknown`).
    pub fn schema_type(&self) -> Option<SchemaType> {
        match self {
            SchemaNode::Object { .. } => Some(SchemaType::Object),
            SchemaNode::Array { .. } => Some(SchemaType::Array),
            SchemaNode::Primitive(t) => Some(*t),
            SchemaNode::Composite { .. } => Some(SchemaType::Composite),
            SchemaNode::Ref(_) | SchemaNode::Unknown(_) => None,
        }
    }
}

/// Whether a schema node carries a truthy `sensitive` flag.
pub fn is_sensitive(node: &Value) -> bool {
    node.get("sensitive").and_then(Value::as_bool).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ref_wins_over_type() {
        let node = json!({ "$ref": "#/defs/port", "type": "object" });
        assert!(matches!(
            SchemaNode::classify(&node),
            SchemaNode::Ref("#/defs/port")
        ));
    }

    #[test]
    fn test_primitive_classification() {
        let node = json!({ "type": "integer" });
        let classified = SchemaNode::classify(&node);
        assert!(matches!(
            classified,
            SchemaNode::Primitive(SchemaType::Integer)
        ));
        assert_eq!(classified.schema_type(), Some(SchemaType::Integer));
    }

    #[test]
    fn test_untyped_node_is_composite() {
        let bare = json!({});
        match SchemaNode::classify(&bare) {
            SchemaNode::Composite { not, branches } => {
                assert!(!not);
                assert!(branches.is_none());
            }
            other => panic!("expected bare composite, got {other:?}"),
        }
    }

    #[test]
    fn test_not_flag_beats_combinator_lists() {
        let node = json!({ "not": { "type": "string" }, "allOf": [{ "type": "string" }] });
        assert!(matches!(
            SchemaNode::classify(&node),
            SchemaNode::Composite { not: true, .. }
        ));
    }

    #[test]
    fn test_first_nonempty_combinator_wins_in_fixed_order() {
        let node = json!({
            "oneOf": [{ "type": "string" }],
            "anyOf": [{ "type": "integer" }, { "type": "null" }]
        });
        match SchemaNode::classify(&node) {
            SchemaNode::Composite {
                branches: Some(list),
                ..
            } => {
                // anyOf precedes oneOf in the fixed order.
                assert_eq!(list.len(), 2);
                assert_eq!(list[0], json!({ "type": "integer" }));
            }
            other => panic!("expected composite with branches, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_combinator_list_is_skipped() {
        let node = json!({ "allOf": [], "oneOf": [{ "type": "boolean" }] });
        match SchemaNode::classify(&node) {
            SchemaNode::Composite {
                branches: Some(list),
                ..
            } => assert_eq!(list[0], json!({ "type": "boolean" })),
            other => panic!("expected oneOf branches, got {other:?}"),
        }
    }

    #[test]
    fn test_array_items_shapes() {
        let uniform = json!({ "type": "array", "items": { "type": "string" } });
        assert!(matches!(
            SchemaNode::classify(&uniform),
            SchemaNode::Array {
                items: ItemSchemas::Uniform(_)
            }
        ));

        let per_index = json!({ "type": "array", "items": [{ "type": "string" }] });
        assert!(matches!(
            SchemaNode::classify(&per_index),
            SchemaNode::Array {
                items: ItemSchemas::PerIndex(_)
            }
        ));

        let missing = json!({ "type": "array" });
        match SchemaNode::classify(&missing) {
            SchemaNode::Array {
                items: ItemSchemas::PerIndex(list),
            } => assert!(list.is_empty()),
            other => panic!("expected empty per-index items, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_keyword() {
        let node = json!({ "type": "duration" });
        assert!(matches!(
            SchemaNode::classify(&node),
            SchemaNode::Unknown("duration")
        ));
        assert_eq!(SchemaNode::classify(&node).schema_type(), None);
    }

    #[test]
    fn test_sensitive_flag() {
        assert!(is_sensitive(&json!({ "type": "string", "sensitive": true })));
        assert!(!is_sensitive(&json!({ "type": "string", "sensitive": false })));
        assert!(!is_sensitive(&json!({ "type": "string" })));
        assert!(!is_sensitive(&json!({ "sensitive": "yes" })));
    }
}
