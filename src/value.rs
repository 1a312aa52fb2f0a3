//! Generated value graphs.
//!
//! A [`Value`] is the dynamically-typed output of a generation call. Ownership
//! moves to the caller; nothing in the generator retains a reference to it.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Map as JsonMap, Number, Value as JsonValue};
use std::io::Write;

/// A generated value graph.
///
/// `PartialEq` is derived so seeded runs can be compared value-for-value;
/// floats compare bitwise-equal when they come from the same seeded stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
    /// Enum selection: declaring type name plus the chosen variant.
    Enum { decl: String, variant: String },
    List(Vec<Value>),
    /// Map entries in generation order. Keys are pairwise distinct.
    Map(Vec<(Value, Value)>),
    /// Composite instance: type name plus fields in declaration order.
    Struct { name: String, fields: Vec<(String, Value)> },
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Look up a field on a `Struct` value by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Struct { fields, .. } => {
                fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// Project into a `serde_json::Value`.
    ///
    /// Date/time values render as ISO-8601 strings, enums as their variant
    /// name, and non-string map keys are stringified since JSON objects
    /// only carry string keys.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(n) => JsonValue::Number((*n).into()),
            Value::Float(f) => Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Str(s) => JsonValue::String(s.clone()),
            Value::DateTime(dt) => JsonValue::String(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            Value::Date(d) => JsonValue::String(d.format("%Y-%m-%d").to_string()),
            Value::Time(t) => JsonValue::String(t.format("%H:%M:%S").to_string()),
            Value::Enum { variant, .. } => JsonValue::String(variant.clone()),
            Value::List(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
            Value::Map(entries) => {
                let mut map = JsonMap::with_capacity(entries.len());
                for (k, v) in entries {
                    map.insert(k.json_key(), v.to_json());
                }
                JsonValue::Object(map)
            }
            Value::Struct { fields, .. } => {
                let mut map = JsonMap::with_capacity(fields.len());
                for (name, v) in fields {
                    map.insert(name.clone(), v.to_json());
                }
                JsonValue::Object(map)
            }
        }
    }

    /// String form of a value used as a JSON object key.
    fn json_key(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Int(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Enum { variant, .. } => variant.clone(),
            other => other.to_json().to_string(),
        }
    }
}

/// Write a batch of generated cases as a JSON array.
pub fn write_json<W: Write>(writer: W, cases: &[Value], pretty: bool) -> serde_json::Result<()> {
    let doc: Vec<JsonValue> = cases.iter().map(Value::to_json).collect();
    if pretty {
        serde_json::to_writer_pretty(writer, &doc)
    } else {
        serde_json::to_writer(writer, &doc)
    }
}
