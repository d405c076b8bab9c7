//! Prune options and their loaders.
//!
//! Options use JS-style field names so the same document works from Rust,
//! YAML files and the Node binding:
//!
//! ```yaml
//! drop: [null, ""]
//! keepObjects: true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::DefinedError;
use crate::value::Value;

/// How a prune call decides what counts as "defined"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PruneOptions {
    /// Sentinels treated as "not defined"; a supplied list replaces the default
    #[serde(default = "default_drop")]
    pub drop: Vec<Value>,
    /// Keep nested mappings that end up empty
    #[serde(default)]
    pub keep_objects: bool,
}

fn default_drop() -> Vec<Value> {
    vec![Value::Undefined]
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self {
            drop: default_drop(),
            keep_objects: false,
        }
    }
}

impl PruneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop both `undefined` and `null`
    pub fn drop_nullish() -> Self {
        Self::new().with_drop(vec![Value::Undefined, Value::Null])
    }

    pub fn with_drop(mut self, drop: Vec<Value>) -> Self {
        self.drop = drop;
        self
    }

    pub fn keep_objects(mut self, keep: bool) -> Self {
        self.keep_objects = keep;
        self
    }

    /// Whether `value` strictly equals any drop sentinel
    pub fn is_dropped(&self, value: &Value) -> bool {
        self.drop.iter().any(|sentinel| value.strict_eq(sentinel))
    }

    /// Parse options from a JSON document
    pub fn from_json(json: &str) -> Result<Self, DefinedError> {
        let raw: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(raw)
    }

    /// Parse options from a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self, DefinedError> {
        let raw: serde_json::Value = serde_yaml::from_str(yaml)?;
        Self::from_value(raw)
    }

    /// Load options from a file; `.json` files are parsed as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinedError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| DefinedError::Io(format!("{}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    fn from_value(raw: serde_json::Value) -> Result<Self, DefinedError> {
        // a bare `null` / `~` document means "no options"
        if raw.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(raw).map_err(|e| DefinedError::InvalidOptions(e.to_string()))
    }
}
