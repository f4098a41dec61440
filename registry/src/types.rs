//! Constraint table definition types.

use docmodel_core::{ConstraintKind, Value};

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// A classifier tag name ("string", "array", "boolean", ...).
    Scalar(String),
    /// A reference to another registered model type.
    Model(String),
}

impl FieldType {
    /// Scalar type by classifier tag name.
    pub fn scalar(name: impl Into<String>) -> Self {
        FieldType::Scalar(name.into())
    }

    /// Reference to a registered model type.
    pub fn model(name: impl Into<String>) -> Self {
        FieldType::Model(name.into())
    }

    /// The declared type name.
    pub fn name(&self) -> &str {
        match self {
            FieldType::Scalar(name) | FieldType::Model(name) => name,
        }
    }
}

/// A single declared constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Expected field type.
    Type(FieldType),
    /// Presence requirement.
    Required(bool),
    /// Whether blank strings are allowed.
    Blank(bool),
    /// Allowed literal values.
    Choice(Vec<Value>),
    /// Minimum length for strings and sequences.
    MinLength(usize),
    /// Maximum length for strings and sequences.
    MaxLength(usize),
}

impl Constraint {
    /// The kind of this constraint.
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Type(_) => ConstraintKind::Type,
            Constraint::Required(_) => ConstraintKind::Required,
            Constraint::Blank(_) => ConstraintKind::Blank,
            Constraint::Choice(_) => ConstraintKind::Choice,
            Constraint::MinLength(_) => ConstraintKind::MinLength,
            Constraint::MaxLength(_) => ConstraintKind::MaxLength,
        }
    }
}

/// Field definition within a model type.
///
/// Constraints are kept in declaration order; validation checks them in the
/// same order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    constraints: Vec<Constraint>,
}

impl FieldDef {
    /// Field with a scalar type constraint.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: vec![Constraint::Type(FieldType::scalar(type_name))],
        }
    }

    /// Field holding a nested instance of another registered model type.
    pub fn model(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: vec![Constraint::Type(FieldType::model(target))],
        }
    }

    /// Field with no type constraint.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    /// Append a constraint.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// The field must be present and non-null.
    pub fn required(self) -> Self {
        self.constraint(Constraint::Required(true))
    }

    /// The field may be absent (declared explicitly).
    pub fn optional(self) -> Self {
        self.constraint(Constraint::Required(false))
    }

    /// Zero-length strings are rejected.
    pub fn no_blank(self) -> Self {
        self.constraint(Constraint::Blank(false))
    }

    /// Zero-length strings are accepted (declared explicitly).
    pub fn allow_blank(self) -> Self {
        self.constraint(Constraint::Blank(true))
    }

    /// The value must equal one of the given literals.
    pub fn choice(self, values: Vec<Value>) -> Self {
        self.constraint(Constraint::Choice(values))
    }

    /// Minimum length for strings and sequences.
    pub fn min_length(self, length: usize) -> Self {
        self.constraint(Constraint::MinLength(length))
    }

    /// Maximum length for strings and sequences.
    pub fn max_length(self, length: usize) -> Self {
        self.constraint(Constraint::MaxLength(length))
    }

    /// Declared constraints in declaration order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The declared field type, if any.
    pub fn field_type(&self) -> Option<&FieldType> {
        self.constraints.iter().find_map(|constraint| match constraint {
            Constraint::Type(field_type) => Some(field_type),
            _ => None,
        })
    }
}

/// Model type definition: a named, ordered constraint table.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDef {
    /// Model type name.
    pub name: String,
    fields: Vec<FieldDef>,
}

impl ModelDef {
    /// Create an empty definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Create a definition with the given fields.
    pub fn with_fields(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub(crate) fn push_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Field definitions in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Check if this model declares a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.get_field(name).is_some()
    }

    /// Declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}
