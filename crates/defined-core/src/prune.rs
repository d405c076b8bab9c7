//! Recursive pruning of "non-defined" values.
//!
//! # Rules
//!
//! At every mapping level, for each entry:
//! - values matching a drop sentinel are skipped
//! - sequences are pruned element-wise and drop-filtered; an empty result
//!   removes the key even when `keep_objects` is set
//! - mappings are pruned recursively; an empty result removes the key
//!   unless `keep_objects` is set
//! - other primitives are copied as-is
//!
//! Inside a sequence, mapping and sequence elements are pruned by key
//! (a nested sequence becomes an index-keyed mapping) and stay in place
//! even when empty. Only drop sentinels are filtered out of sequences.

use tracing::{debug, trace};

use crate::error::DefinedError;
use crate::options::PruneOptions;
use crate::value::{Mapping, Value, ValueKind};

/// Return a new mapping holding only the defined values of `target`.
///
/// Any falsy `target` (`undefined`, `null`, `false`, `0`, `NaN`, `""`)
/// yields `None`. Arrays are walked by index, so their keys become
/// `"0"`, `"1"`, ...; strings are walked by `char` the same way. Other
/// truthy primitives have no keys and yield an empty mapping.
///
/// There is no depth guard: a pathologically deep tree exhausts the stack.
pub fn prune(target: &Value, options: &PruneOptions) -> Option<Mapping> {
    if !target.is_truthy() {
        debug!("falsy target, nothing to prune");
        return None;
    }

    let result = match target.kind() {
        ValueKind::Mapping(map) => prune_entries(keyed(map), options),
        ValueKind::Sequence(items) => prune_entries(indexed(items), options),
        ValueKind::Primitive(Value::String(s)) => {
            let chars: Vec<Value> = s.chars().map(|c| Value::String(c.to_string())).collect();
            prune_entries(indexed(&chars), options)
        }
        ValueKind::Primitive(_) => Mapping::new(),
    };

    debug!(keys = result.len(), "pruned target");
    Some(result)
}

/// Prune a JSON document.
///
/// JSON has no `undefined`, so with default options only empty
/// containers are removed; pass e.g. [`PruneOptions::drop_nullish`] to
/// strip `null`s as well.
pub fn prune_json(target: &serde_json::Value, options: &PruneOptions) -> Option<serde_json::Value> {
    let value = Value::from(target.clone());
    prune(&value, options).map(|map| Value::Object(map).into())
}

/// Prune a JSON string with optional JSON options, returning the pruned
/// document as a JSON string or `None` when the result is absent.
pub fn prune_json_str(
    target_json: &str,
    options_json: Option<&str>,
) -> Result<Option<String>, DefinedError> {
    let options = options_json
        .map(PruneOptions::from_json)
        .transpose()?
        .unwrap_or_default();

    prune_json_str_with(target_json, &options)
}

/// Prune a JSON string with already-loaded options
pub fn prune_json_str_with(
    target_json: &str,
    options: &PruneOptions,
) -> Result<Option<String>, DefinedError> {
    let target: serde_json::Value = serde_json::from_str(target_json)?;

    prune_json(&target, options)
        .map(|pruned| serde_json::to_string(&pruned))
        .transpose()
        .map_err(DefinedError::from)
}

fn keyed(map: &Mapping) -> impl Iterator<Item = (String, &Value)> + '_ {
    map.iter().map(|(k, v)| (k.clone(), v))
}

fn indexed(items: &[Value]) -> impl Iterator<Item = (String, &Value)> + '_ {
    items.iter().enumerate().map(|(i, v)| (i.to_string(), v))
}

fn prune_entries<'a, I>(entries: I, options: &PruneOptions) -> Mapping
where
    I: Iterator<Item = (String, &'a Value)>,
{
    let mut result = Mapping::new();

    for (key, value) in entries {
        if options.is_dropped(value) {
            trace!(%key, "dropped sentinel value");
            continue;
        }

        match value.kind() {
            ValueKind::Sequence(items) => {
                let pruned = prune_sequence(items, options);
                if pruned.is_empty() {
                    trace!(%key, "omitted empty sequence");
                    continue;
                }
                result.insert(key, Value::Array(pruned));
            }
            ValueKind::Mapping(map) => {
                let nested = prune_entries(keyed(map), options);
                if nested.is_empty() && !options.keep_objects {
                    trace!(%key, "omitted empty mapping");
                    continue;
                }
                result.insert(key, Value::Object(nested));
            }
            ValueKind::Primitive(primitive) => {
                result.insert(key, primitive.clone());
            }
        }
    }

    result
}

fn prune_sequence(items: &[Value], options: &PruneOptions) -> Vec<Value> {
    items
        .iter()
        .map(|item| prune_element(item, options))
        .filter(|item| !options.is_dropped(item))
        .collect()
}

fn prune_element(item: &Value, options: &PruneOptions) -> Value {
    match item.kind() {
        ValueKind::Mapping(map) => Value::Object(prune_entries(keyed(map), options)),
        ValueKind::Sequence(items) => Value::Object(prune_entries(indexed(items), options)),
        ValueKind::Primitive(primitive) => primitive.clone(),
    }
}
