//! Constraint tables and the model registry.
//!
//! Model types declare their field constraints once, at startup, through
//! [`RegistryBuilder`]; the frozen [`Registry`] is then shared by reference
//! with every validator. Tables are never mutated after construction.

mod builder;
mod parse;
mod registry;
mod types;

pub use builder::*;
pub use registry::*;
pub use types::*;
