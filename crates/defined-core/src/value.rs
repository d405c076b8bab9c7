//! Value model for pruning.
//!
//! A closed set of variants standing in for "any nested data": mappings,
//! sequences, and primitives. Unlike JSON, the model carries an explicit
//! `Undefined` so the default drop-set has something to match.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Insertion-ordered string-keyed mapping. Equality ignores order.
pub type Mapping = IndexMap<String, Value>;

/// A nested data value
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Mapping),
}

/// A numeric value. Integers stay exact; floats carry IEEE semantics.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::UInt(u) => u as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match *self {
            Number::Int(i) => i != 0,
            Number::UInt(u) => u != 0,
            Number::Float(f) => f != 0.0 && !f.is_nan(),
        }
    }

    fn as_i128(&self) -> Option<i128> {
        match *self {
            Number::Int(i) => Some(i128::from(i)),
            Number::UInt(u) => Some(i128::from(u)),
            Number::Float(_) => None,
        }
    }
}

/// Integers compare exactly; anything involving a float compares as `f64`
/// (so `NaN` never equals itself and `0 == -0`).
impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match (self.as_i128(), other.as_i128()) {
            (Some(a), Some(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

/// Borrowed view of a value's shape; the pruner dispatches on this
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueKind<'a> {
    Mapping(&'a Mapping),
    Sequence(&'a [Value]),
    Primitive(&'a Value),
}

impl Value {
    /// Build an object from `(key, value)` pairs
    pub fn object<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build an array from values
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(items.into_iter().collect())
    }

    pub fn kind(&self) -> ValueKind<'_> {
        match self {
            Value::Object(map) => ValueKind::Mapping(map),
            Value::Array(items) => ValueKind::Sequence(items),
            primitive => ValueKind::Primitive(primitive),
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Truthiness: `Undefined`, `Null`, `false`, `0`, `-0`, `NaN` and `""`
    /// are falsy, everything else (including empty containers) is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.is_truthy(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Strict equality against a sentinel.
    ///
    /// Primitives compare by value with IEEE semantics for numbers.
    /// Containers never compare equal: a sentinel is never the same
    /// allocation as a node inside the tree being pruned.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }

    pub fn as_object(&self) -> Option<&Mapping> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::Float(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::Int(i64::from(n)))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::Int(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(Number::UInt(n))
    }
}

impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::Int(i)
        } else if let Some(u) = n.as_u64() {
            Number::UInt(u)
        } else {
            Number::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Undefined, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(Number::from(n)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

/// JSON has no `undefined`: it becomes `null`, as do non-finite numbers.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => number_to_json(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

fn as_integer(n: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

fn number_to_json(n: Number) -> serde_json::Value {
    let n = match n {
        Number::Int(i) => return serde_json::Value::from(i),
        Number::UInt(u) => return serde_json::Value::from(u),
        Number::Float(f) => f,
    };
    if !n.is_finite() {
        return serde_json::Value::Null;
    }
    match as_integer(n) {
        Some(i) => serde_json::Value::from(i),
        None => serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Int(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::UInt(u)) => serializer.serialize_u64(*u),
            Value::Number(Number::Float(f)) if !f.is_finite() => serializer.serialize_unit(),
            Value::Number(Number::Float(f)) => match as_integer(*f) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*f),
            },
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Object(map) => serializer.collect_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values() {
        for v in [
            Value::Undefined,
            Value::Null,
            Value::Bool(false),
            Value::from(0),
            Value::from(0.0),
            Value::from(-0.0),
            Value::from(f64::NAN),
            Value::from(""),
        ] {
            assert!(!v.is_truthy(), "{:?} should be falsy", v);
        }
    }

    #[test]
    fn test_truthy_values() {
        for v in [
            Value::Bool(true),
            Value::from(1),
            Value::from(" "),
            Value::Array(Vec::new()),
            Value::Object(Mapping::new()),
        ] {
            assert!(v.is_truthy(), "{:?} should be truthy", v);
        }
    }

    #[test]
    fn test_strict_eq_primitives() {
        assert!(Value::Undefined.strict_eq(&Value::Undefined));
        assert!(Value::Null.strict_eq(&Value::Null));
        assert!(!Value::Null.strict_eq(&Value::Undefined));
        assert!(Value::from(0.0).strict_eq(&Value::from(-0.0)));
        assert!(!Value::from(f64::NAN).strict_eq(&Value::from(f64::NAN)));
        assert!(Value::from("a").strict_eq(&Value::from("a")));
        assert!(!Value::from("1").strict_eq(&Value::from(1)));
    }

    #[test]
    fn test_strict_eq_containers_never_match() {
        let empty = Value::Object(Mapping::new());
        assert!(!empty.strict_eq(&empty.clone()));
        assert!(!Value::Array(Vec::new()).strict_eq(&Value::Array(Vec::new())));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::Null.kind(), ValueKind::Primitive(&Value::Null));
        assert!(matches!(Value::Array(Vec::new()).kind(), ValueKind::Sequence(items) if items.is_empty()));
        assert!(matches!(
            Value::object([("a", Value::Null)]).kind(),
            ValueKind::Mapping(map) if map.contains_key("a")
        ));
    }

    #[test]
    fn test_json_conversion() {
        let value = Value::from(json!({ "a": 1, "b": [true, null], "c": 1.5 }));
        let obj = value.as_object().unwrap();
        assert_eq!(obj["a"], Value::from(1));
        assert_eq!(obj["b"], Value::array([Value::Bool(true), Value::Null]));

        let back: serde_json::Value = value.into();
        assert_eq!(back, json!({ "a": 1, "b": [true, null], "c": 1.5 }));
    }

    #[test]
    fn test_undefined_serializes_as_null() {
        let value = Value::array([Value::Undefined, Value::from(f64::INFINITY)]);
        assert_eq!(serde_json::to_string(&value).unwrap(), "[null,null]");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Undefined);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_number_equality() {
        assert_eq!(Number::Int(1), Number::Float(1.0));
        assert_eq!(Number::UInt(7), Number::Int(7));
        assert_ne!(Number::UInt(u64::MAX), Number::Int(-1));
        assert_ne!(Number::UInt(9007199254740993), Number::UInt(9007199254740992));
    }

    #[test]
    fn test_large_integers_survive_json() {
        let value = Value::from(json!({ "big": 9007199254740993u64, "neg": -9007199254740993i64 }));
        let obj = value.as_object().unwrap();
        assert_eq!(obj["big"], Value::from(9007199254740993u64));

        let back: serde_json::Value = value.clone().into();
        assert_eq!(back, json!({ "big": 9007199254740993u64, "neg": -9007199254740993i64 }));
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"big":9007199254740993,"neg":-9007199254740993}"#
        );
    }
}
