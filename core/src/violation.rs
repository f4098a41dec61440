//! Constraint violation records.

use crate::Value;
use serde::Serialize;
use std::fmt;

/// The kind of constraint a violation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintKind {
    /// Type constraint (scalar tag or model reference).
    Type,
    /// Required-presence constraint.
    Required,
    /// Disallow-blank constraint.
    Blank,
    /// Allowed-literals constraint.
    Choice,
    /// Minimum length constraint.
    MinLength,
    /// Maximum length constraint.
    MaxLength,
    /// Field present on the instance but absent from the constraint table.
    Undeclared,
}

impl ConstraintKind {
    /// The kind's name as it appears in constraint tables.
    pub fn name(&self) -> &'static str {
        match self {
            ConstraintKind::Type => "type",
            ConstraintKind::Required => "required",
            ConstraintKind::Blank => "blank",
            ConstraintKind::Choice => "choice",
            ConstraintKind::MinLength => "minLength",
            ConstraintKind::MaxLength => "maxLength",
            ConstraintKind::Undeclared => "undefined",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One failed constraint check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintViolation {
    /// Name of the offending field.
    pub field: String,
    /// The violated constraint kind.
    pub kind: ConstraintKind,
    /// The declared constraint value, where one exists.
    pub expected: Option<Value>,
    /// Human-readable message describing the violation.
    pub message: String,
}

impl ConstraintViolation {
    /// Create a new violation.
    pub fn new(
        field: impl Into<String>,
        kind: ConstraintKind,
        expected: Option<Value>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            expected,
            message: message.into(),
        }
    }

    /// Violation for a field that no constraint table declares.
    pub fn undeclared(field: impl Into<String>) -> Self {
        Self::new(
            field,
            ConstraintKind::Undeclared,
            None,
            "undefined in constraints",
        )
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of violations from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Violations {
    violations: Vec<ConstraintViolation>,
}

impl Violations {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn push(&mut self, violation: ConstraintViolation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Get all violations in collection order.
    pub fn all(&self) -> &[ConstraintViolation] {
        &self.violations
    }

    /// Consume into the underlying list.
    pub fn into_vec(self) -> Vec<ConstraintViolation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    /// Comma-joined `field: message` entries, in collection order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl From<Vec<ConstraintViolation>> for Violations {
    fn from(violations: Vec<ConstraintViolation>) -> Self {
        Self { violations }
    }
}

impl IntoIterator for Violations {
    type Item = ConstraintViolation;
    type IntoIter = std::vec::IntoIter<ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a ConstraintViolation;
    type IntoIter = std::slice::Iter<'a, ConstraintViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
