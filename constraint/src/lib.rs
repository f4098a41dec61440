//! Model construction and constraint validation.
//!
//! The [`Validator`] walks a model's constraint table against its current
//! fields: type and shape checks, presence, blankness, allowed literals,
//! length bounds, and the closed-world sweep over undeclared fields. All
//! violations of one pass aggregate into a single failure; setup mistakes
//! (unregistered types, malformed choice lists) fail fast instead.

mod checker;
mod error;

pub use checker::*;
pub use error::*;
