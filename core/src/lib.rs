//! docmodel core types
//!
//! This crate provides the foundational types used throughout docmodel:
//! - Value types (the Value enum, documents, the `doc!` macro)
//! - Runtime type classification (TypeTag and derived predicates)
//! - Model instances (typed field maps with recorded violations)
//! - Constraint violation records
//! - JSON interop for the document-store boundary

mod classify;
mod json;
mod model;
mod value;
mod violation;

pub use classify::*;
pub use json::*;
pub use model::*;
pub use value::*;
pub use violation::*;
