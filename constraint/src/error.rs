//! Validation error types.

use docmodel_core::Violations;
use std::fmt;
use thiserror::Error;

/// A failed validation pass: every violation found, attributed to the model
/// type that was being validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    /// Name of the model type the pass ran against.
    pub model: String,
    /// All violations of the pass, in constraint-table order.
    pub violations: Violations,
}

impl ValidationFailure {
    pub fn new(model: impl Into<String>, violations: Violations) -> Self {
        Self {
            model: model.into(),
            violations,
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.violations.len() == 1 { "" } else { "s" };
        write!(
            f,
            "{} constraint error{}=[{}]",
            self.model, plural, self.violations
        )
    }
}

/// Validation errors.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The model type has no constraint table in the registry.
    #[error("Constraints not defined")]
    ConstraintsNotDefined {
        /// The unregistered type name.
        model: String,
    },

    /// A choice constraint declared an empty allowed list.
    #[error("Invalid choice: {model}.{field}")]
    InvalidChoice { model: String, field: String },

    /// One or more constraint checks failed.
    #[error("{0}")]
    Validation(ValidationFailure),

    /// The source document was not a JSON object.
    #[error(transparent)]
    Document(#[from] docmodel_core::DocumentError),
}

impl ValidateError {
    /// The structured violations of a failed pass, if this is one.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            ValidateError::Validation(failure) => Some(&failure.violations),
            _ => None,
        }
    }
}

/// Result type for validation operations.
pub type ValidateResult<T> = Result<T, ValidateError>;
