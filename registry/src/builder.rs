//! RegistryBuilder for constructing an immutable Registry.

use crate::{parse, FieldDef, FieldType, ModelDef, Registry};
use docmodel_core::Document;
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate model name: {0}")]
    DuplicateModelName(String),

    #[error("Unknown model type {target} in field {model}.{field}")]
    UnknownModelType {
        model: String,
        field: String,
        target: String,
    },

    #[error("Unsupported constraint: {0}")]
    UnsupportedConstraint(String),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Invalid schema document: {0}")]
    InvalidSchemaDocument(String),
}

/// Builder for constructing an immutable Registry.
///
/// Declare every model once at startup, then freeze with [`build`] and pass
/// the registry around by reference.
///
/// [`build`]: RegistryBuilder::build
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    models: Vec<ModelDef>,
    names: HashMap<String, usize>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model definition.
    pub fn add_model(&mut self, name: impl Into<String>) -> ModelBuilder<'_> {
        ModelBuilder {
            builder: self,
            def: ModelDef::new(name),
        }
    }

    /// Add a model whose constraint table arrives as a JSON schema document:
    /// `{field: {type, required, blank, choice, minLength, maxLength}}`.
    pub fn add_model_from_json(
        &mut self,
        name: impl Into<String>,
        schema: &serde_json::Value,
    ) -> Result<(), RegistryError> {
        let document = docmodel_core::document_from_json(schema.clone())
            .map_err(|e| RegistryError::InvalidSchemaDocument(e.to_string()))?;
        self.add_model(name).fields_from_document(&document)?.done()
    }

    /// Build the immutable Registry, verifying that every model-typed field
    /// references a registered model.
    pub fn build(self) -> Result<Registry, RegistryError> {
        for def in &self.models {
            for field in def.fields() {
                if let Some(FieldType::Model(target)) = field.field_type() {
                    if !self.names.contains_key(target) {
                        return Err(RegistryError::UnknownModelType {
                            model: def.name.clone(),
                            field: field.name.clone(),
                            target: target.clone(),
                        });
                    }
                }
            }
        }
        Ok(Registry::new(self.models, self.names))
    }
}

/// Builder for a single model definition.
pub struct ModelBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    def: ModelDef,
}

impl<'a> ModelBuilder<'a> {
    /// Add a field definition.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.def.push_field(field);
        self
    }

    /// Add the fields declared by a plain schema document.
    pub fn fields_from_document(mut self, document: &Document) -> Result<Self, RegistryError> {
        for field in parse::fields_from_document(document)? {
            self.def.push_field(field);
        }
        Ok(self)
    }

    /// Finish building this model.
    pub fn done(self) -> Result<(), RegistryError> {
        if self.builder.names.contains_key(&self.def.name) {
            return Err(RegistryError::DuplicateModelName(self.def.name));
        }
        self.builder
            .names
            .insert(self.def.name.clone(), self.builder.models.len());
        self.builder.models.push(self.def);
        Ok(())
    }
}
