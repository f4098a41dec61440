//! Integration test support for docmodel.
//!
//! Shared model fixtures and assertion helpers used by the scenario tests.

pub mod fixtures;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use docmodel_constraint::{ConstructOptions, ValidateError, Validator};
    pub use docmodel_core::{doc, Document, Model, Value};
    pub use docmodel_registry::{FieldDef, Registry, RegistryBuilder};
}
