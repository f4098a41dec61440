//! The Registry - immutable constraint table lookup.

use crate::ModelDef;
use std::collections::HashMap;

/// Runtime lookup of model constraint tables. Immutable after construction;
/// share it by reference.
#[derive(Debug, Default)]
pub struct Registry {
    models: Vec<ModelDef>,
    names: HashMap<String, usize>,
}

impl Registry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(models: Vec<ModelDef>, names: HashMap<String, usize>) -> Self {
        Self { models, names }
    }

    /// Get a model definition by name.
    pub fn get_model(&self, name: &str) -> Option<&ModelDef> {
        self.names.get(name).map(|&index| &self.models[index])
    }

    /// Check if a model type is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Get all model definitions in registration order.
    pub fn all_models(&self) -> impl Iterator<Item = &ModelDef> {
        self.models.iter()
    }

    /// Registered model names in registration order.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|def| def.name.as_str())
    }

    /// Get the number of registered models.
    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}
