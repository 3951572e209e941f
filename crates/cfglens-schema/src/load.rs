//! # Configuration Document Loading
//!
//! Reads a configuration document from disk as a JSON value. The format
//! is chosen by extension: `.yaml`/`.yml` parse as YAML and convert to
//! JSON; everything else parses as JSON directly.

use std::path::Path;

use serde_json::Value;

use crate::error::SchemaError;

/// Load a configuration document from a JSON or YAML file.
///
/// # Errors
///
/// Returns [`SchemaError::DocumentLoad`] if the file cannot be read,
/// does not parse, or (for YAML) uses features with no JSON equivalent.
pub fn load_document(path: &Path) -> Result<Value, SchemaError> {
    let load_error = |reason: String| SchemaError::DocumentLoad {
        path: path.display().to_string(),
        reason,
    };

    let content =
        std::fs::read_to_string(path).map_err(|e| load_error(format!("cannot read file: {e}")))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| load_error(format!("invalid YAML: {e}")))?;
            yaml_to_json_value(&yaml)
                .map_err(|e| load_error(format!("YAML-to-JSON conversion failed: {e}")))
        }
        _ => serde_json::from_str(&content).map_err(|e| load_error(format!("invalid JSON: {e}"))),
    }
}

/// Convert a parsed YAML value into the JSON value tree the walker and
/// validator operate on.
///
/// Configuration documents are restricted to the JSON-compatible subset
/// of YAML: map keys must be scalars (they are rendered as strings, so
/// `80:` becomes `"80"`), floats must be finite, and tags are discarded
/// in favor of the value they wrap.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(i.into()))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(u.into()))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("float {f} has no JSON representation"))
            } else {
                Err(format!("unconvertible YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<Value>, String>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = serde_json::Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("YAML map keys must be scalars, got {other:?}")),
                };
                map.insert(key, yaml_to_json_value(value)?);
            }
            Ok(Value::Object(map))
        }
        // Tags carry no meaning for configuration data.
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cfglens-load-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_json_document() {
        let path = scratch_file("config.json", r#"{ "port": 8080 }"#);
        let value = load_document(&path).unwrap();
        assert_eq!(value["port"], 8080);
    }

    #[test]
    fn test_load_yaml_document() {
        let path = scratch_file(
            "config.yaml",
            "port: 8080\nhost: localhost\ntags:\n  - a\n  - b\n",
        );
        let value = load_document(&path).unwrap();
        assert_eq!(value["port"], 8080);
        assert_eq!(value["host"], "localhost");
        assert_eq!(value["tags"][1], "b");
    }

    #[test]
    fn test_missing_file_is_a_document_load_error() {
        let err = load_document(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, SchemaError::DocumentLoad { .. }));
    }

    #[test]
    fn test_invalid_json_is_a_document_load_error() {
        let path = scratch_file("broken.json", "{ nope");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, SchemaError::DocumentLoad { .. }));
    }

    #[test]
    fn test_yaml_numeric_keys_become_strings() {
        let path = scratch_file("keyed.yaml", "80: http\n443: https\n");
        let value = load_document(&path).unwrap();
        assert_eq!(value["80"], "http");
        assert_eq!(value["443"], "https");
    }
}
