//! Model instances.
//!
//! A model wraps a plain document with a declared type name, giving the
//! validation engine a stable type identity and a place to record the
//! violations of the last failed pass.

use crate::{json, Document, Value, Violations};
use std::fmt;

/// Name of the storage identifier field carried by persisted documents.
/// It is excluded from constraint validation but kept by JSON projection.
pub const STORAGE_ID_FIELD: &str = "_id";

/// A typed document wrapped for validation.
///
/// Bookkeeping (the type name and the recorded violations) lives outside the
/// field map, so it never leaks into validation or projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    type_name: String,
    fields: Document,
    violations: Violations,
}

impl Model {
    /// Create an empty instance of the named type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self::with_fields(type_name, Document::new())
    }

    /// Create an instance of the named type holding the given fields.
    pub fn with_fields(type_name: impl Into<String>, fields: Document) -> Self {
        Self {
            type_name: type_name.into(),
            fields,
            violations: Violations::new(),
        }
    }

    /// The declared type name of this instance.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a mutable field value by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name)
    }

    /// Set a field value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Remove a field.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    /// Check if a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// All fields of this instance.
    pub fn fields(&self) -> &Document {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the instance holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names subject to constraint validation. Storage and internal
    /// fields (leading underscore) are excluded.
    pub fn property_names(&self) -> Vec<String> {
        self.fields
            .keys()
            .filter(|name| !name.starts_with('_'))
            .cloned()
            .collect()
    }

    /// Violations recorded by the last failed validation pass. A later
    /// successful pass does not clear the list; read it only after a failure.
    pub fn violations(&self) -> &Violations {
        &self.violations
    }

    /// Record the violations of a failed validation pass.
    pub fn record_violations(&mut self, violations: Violations) {
        self.violations = violations;
    }

    /// Project this instance into a plain JSON object.
    ///
    /// Nested models and models inside sequences project recursively.
    /// Underscore-prefixed fields are omitted, except the storage identifier
    /// which is always kept when present.
    pub fn to_json(&self) -> serde_json::Value {
        let keys: Vec<&str> = self
            .fields
            .keys()
            .map(|k| k.as_str())
            .filter(|k| !k.starts_with('_') || *k == STORAGE_ID_FIELD)
            .collect();
        self.project(&keys)
    }

    /// Project an explicit subset of fields. Names without a value are
    /// skipped.
    pub fn to_json_fields(&self, names: &[&str]) -> serde_json::Value {
        self.project(names)
    }

    fn project(&self, names: &[&str]) -> serde_json::Value {
        let mut out = serde_json::Map::new();
        for name in names {
            if let Some(value) = self.fields.get(*name) {
                out.insert((*name).to_string(), json::value_to_json(value));
            }
        }
        serde_json::Value::Object(out)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.type_name)?;
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}
