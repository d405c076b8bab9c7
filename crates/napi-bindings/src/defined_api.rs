//! NAPI bindings for defined-core
//!
//! JS values cross the boundary as JSON strings, so `undefined` never
//! reaches Rust: `JSON.stringify` has already removed undefined object
//! properties and turned undefined array slots into `null`.

use napi::bindgen_prelude::*;

/// Prune a JSON document; returns `null` when the target is falsy
#[napi]
pub fn get_defined(target_json: String, options_json: Option<String>) -> Result<Option<String>> {
    defined_core::prune_json_str(&target_json, options_json.as_deref())
        .map_err(|e| Error::from_reason(e.to_string()))
}

/// Prune a JSON document with options loaded from a YAML or JSON file
#[napi]
pub fn get_defined_with_options_file(target_json: String, options_path: String) -> Result<Option<String>> {
    let options = defined_core::PruneOptions::load(&options_path)
        .map_err(|e| Error::from_reason(e.to_string()))?;

    defined_core::prune_json_str_with(&target_json, &options)
        .map_err(|e| Error::from_reason(e.to_string()))
}
