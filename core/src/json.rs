//! Conversions between model values and JSON.
//!
//! Documents arrive from the store as JSON objects and leave through model
//! projection; both directions live here. Non-finite floats have no JSON
//! representation and serialize as null.

use crate::{Document, Model, Value};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors converting JSON into documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Documents must be JSON objects.
    #[error("Not a JSON object: {0}")]
    NotAnObject(&'static str),
}

/// Convert a JSON value into a model value.
pub fn value_from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::List(items.into_iter().map(value_from_json).collect())
        }
        serde_json::Value::Object(map) => Value::Map(
            map.into_iter()
                .map(|(key, value)| (key, value_from_json(value)))
                .collect(),
        ),
    }
}

/// Convert a JSON object into a document.
pub fn document_from_json(json: serde_json::Value) -> Result<Document, DocumentError> {
    match value_from_json(json) {
        Value::Map(map) => Ok(map),
        other => Err(DocumentError::NotAnObject(crate::TypeTag::of(&other).name())),
    }
}

/// Convert a model value into a JSON value. Models project through
/// [`Model::to_json`]; NaN and non-finite floats become null.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::List(items) => {
            serde_json::Value::Array(items.iter().map(value_to_json).collect())
        }
        Value::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), value_to_json(value)))
                .collect(),
        ),
        Value::Model(model) => model.to_json(),
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        value_from_json(json)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        value_to_json(self).serialize(serializer)
    }
}

impl Serialize for Model {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
