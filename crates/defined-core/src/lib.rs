//! Defined Core: recursive pruning of undefined values
//!
//! Takes a nested structure and returns a fresh copy that keeps only the
//! "defined" values. Values listed in the drop-set (default: `undefined`)
//! are removed, and nested containers that end up empty are removed
//! along with them.
//!
//! # Example
//!
//! ```
//! use defined_core::{prune, PruneOptions, Value};
//!
//! let target = Value::object([
//!     ("name", Value::from("job-42")),
//!     ("owner", Value::Undefined),
//!     ("meta", Value::object([("retries", Value::Undefined)])),
//!     ("tags", Value::array([Value::from("ci"), Value::Undefined])),
//! ]);
//!
//! let pruned = prune(&target, &PruneOptions::default()).unwrap();
//! assert_eq!(pruned.len(), 2);
//! assert_eq!(pruned["tags"], Value::array([Value::from("ci")]));
//!
//! // keep `meta` around even though nothing is left in it
//! let pruned = prune(&target, &PruneOptions::new().keep_objects(true)).unwrap();
//! assert!(pruned.contains_key("meta"));
//! ```
//!
//! # Options
//!
//! ```
//! use defined_core::{prune_json, PruneOptions};
//! use serde_json::json;
//!
//! let options = PruneOptions::from_json(r#"{ "drop": [null, ""] }"#).unwrap();
//! let pruned = prune_json(&json!({ "a": null, "b": "", "c": "x" }), &options);
//! assert_eq!(pruned, Some(json!({ "c": "x" })));
//! ```

pub mod error;
pub mod options;
pub mod prune;
pub mod value;

pub use error::DefinedError;
pub use options::PruneOptions;
pub use prune::{prune, prune_json, prune_json_str, prune_json_str_with};
pub use value::{Mapping, Number, Value, ValueKind};

/// Crate version
pub const DEFINED_VERSION: &str = env!("CARGO_PKG_VERSION");
