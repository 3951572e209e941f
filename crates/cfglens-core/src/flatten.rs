//! # Config Flattener
//!
//! Converts a nested configuration value into leaf records keyed by path.
//! Objects recurse by key, arrays by index; every non-structural value
//! produces exactly one record. Emission order follows the document's
//! natural order and matters only for display — consumers that need a
//! canonical order re-sort by path.

use crate::path::ConfigPath;
use serde_json::Value;

/// Flatten a configuration value into `(path, value)` leaf records.
///
/// A scalar document yields a single record at the root path. Empty objects
/// and arrays yield nothing: they contain no leaves.
pub fn flatten(config: &Value) -> Vec<(ConfigPath, Value)> {
    let mut out = Vec::new();
    flatten_into(config, ConfigPath::root(), &mut out);
    out
}

/// Flatten a configuration value rooted at `prefix`, appending to `out`.
pub fn flatten_into(config: &Value, prefix: ConfigPath, out: &mut Vec<(ConfigPath, Value)>) {
    match config {
        Value::Object(map) => {
            for (key, value) in map {
                flatten_into(value, prefix.child(key.as_str()), out);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten_into(value, prefix.child(index), out);
            }
        }
        scalar => out.push((prefix, scalar.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_document() {
        let config = json!({
            "server": { "host": "localhost", "port": 8080 },
            "tags": ["a", "b"]
        });
        let leaves = flatten(&config);
        assert_eq!(leaves.len(), 4);

        let port = ConfigPath::root().child("server").child("port");
        assert!(leaves.iter().any(|(p, v)| *p == port && *v == json!(8080)));

        let tag1 = ConfigPath::root().child("tags").child(1usize);
        assert!(leaves.iter().any(|(p, v)| *p == tag1 && *v == json!("b")));
    }

    #[test]
    fn test_flatten_scalar_document_is_single_root_leaf() {
        let leaves = flatten(&json!(42));
        assert_eq!(leaves, vec![(ConfigPath::root(), json!(42))]);
    }

    #[test]
    fn test_flatten_null_leaf_is_kept() {
        let leaves = flatten(&json!({ "a": null }));
        assert_eq!(
            leaves,
            vec![(ConfigPath::root().child("a"), Value::Null)]
        );
    }

    #[test]
    fn test_empty_containers_have_no_leaves() {
        assert!(flatten(&json!({})).is_empty());
        assert!(flatten(&json!({ "xs": [] })).is_empty());
    }

    #[test]
    fn test_flatten_into_respects_prefix() {
        let mut out = Vec::new();
        flatten_into(&json!([true]), ConfigPath::root().child("flags"), &mut out);
        assert_eq!(
            out,
            vec![(
                ConfigPath::root().child("flags").child(0usize),
                json!(true)
            )]
        );
    }
}
