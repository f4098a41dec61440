//! Value types for document models.
//!
//! Values are the atomic data held by model fields and plain documents.
//! Scalars (Null, Bool, Int, Float, String) are complemented by sequences,
//! plain sub-documents, and typed model instances.

use crate::Model;
use std::collections::BTreeMap;
use std::fmt;

/// A value held by a model field or document entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// Plain sub-document, not wrapped in a model type.
    Map(Document),
    /// A typed model instance.
    Model(Model),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this is a float value.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns true if this is an integer or float value.
    pub fn is_number(&self) -> bool {
        self.is_int() || self.is_float()
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is a list value.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns true if this is a plain sub-document.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns true if this is a model instance.
    pub fn is_model(&self) -> bool {
        matches!(self, Value::Model(_))
    }

    /// Returns true only for zero-length strings.
    pub fn is_blank(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    /// Returns true for a float that is not a number.
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Float(f) if f.is_nan())
    }

    /// Returns true for a non-finite float.
    pub fn is_infinite(&self) -> bool {
        matches!(self, Value::Float(f) if f.is_infinite())
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a slice if this is a List value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get as a document reference if this is a Map value.
    pub fn as_map(&self) -> Option<&Document> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get as a model reference if this is a Model value.
    pub fn as_model(&self) -> Option<&Model> {
        match self {
            Value::Model(model) => Some(model),
            _ => None,
        }
    }

    /// Get as a mutable model reference if this is a Model value.
    pub fn as_model_mut(&mut self) -> Option<&mut Model> {
        match self {
            Value::Model(model) => Some(model),
            _ => None,
        }
    }

    /// Number of elements for values with a measurable length
    /// (string character count, list element count).
    pub fn measurable_len(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::List(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Coercive equality, used for choice membership. Numbers compare across
    /// Int/Float, numeric strings compare against numbers, and booleans
    /// compare as 0/1. Everything else falls back to structural equality.
    pub fn loose_eq(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Int(a), Float(b)) | (Float(b), Int(a)) => (*a as f64) == *b,
            (String(s), Int(i)) | (Int(i), String(s)) => parses_as(s, *i as f64),
            (String(s), Float(f)) | (Float(f), String(s)) => parses_as(s, *f),
            (Bool(b), Int(i)) | (Int(i), Bool(b)) => (*b as i64) == *i,
            (Bool(b), Float(f)) | (Float(f), Bool(b)) => (*b as i64 as f64) == *f,
            (Bool(b), String(s)) | (String(s), Bool(b)) => parses_as(s, *b as i64 as f64),
            _ => self == other,
        }
    }
}

fn parses_as(s: &str, n: f64) -> bool {
    s.trim().parse::<f64>().map(|parsed| parsed == n).unwrap_or(false)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Model(model) => write!(f, "{}", model),
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Document> for Value {
    fn from(map: Document) -> Self {
        Value::Map(map)
    }
}

impl From<Model> for Value {
    fn from(model: Model) -> Self {
        Value::Model(model)
    }
}

/// A plain document: ordered mapping from field name to value.
pub type Document = BTreeMap<String, Value>;

/// Helper macro to create documents.
#[macro_export]
macro_rules! doc {
    () => {
        $crate::Document::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = $crate::Document::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}
