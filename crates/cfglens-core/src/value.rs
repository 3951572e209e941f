//! # Runtime Value Type Tags
//!
//! Classification of scalar configuration values. The annotator records the
//! runtime type of every leaf alongside whatever type the schema declares
//! for it, so diagnostics can show declared-vs-actual without re-inspecting
//! the document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Runtime type tag of a scalar configuration value.
///
/// Objects and arrays are structural, never leaves, and therefore have no
/// tag. Integers are distinguished from other numbers because schemas
/// distinguish them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// JSON `null`.
    Null,
    /// JSON `true` / `false`.
    Boolean,
    /// A number representable as a signed or unsigned 64-bit integer.
    Integer,
    /// Any other number.
    Number,
    /// A string.
    String,
}

impl ValueType {
    /// Classify a value, returning `None` for objects and arrays.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(ValueType::Null),
            Value::Bool(_) => Some(ValueType::Boolean),
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Some(ValueType::Integer)
                } else {
                    Some(ValueType::Number)
                }
            }
            Value::String(_) => Some(ValueType::String),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Stable lowercase name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Number => "number",
            ValueType::String => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
