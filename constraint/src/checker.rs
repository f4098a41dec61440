//! Model construction and constraint checking.

use docmodel_core::{
    is_undefined_or_null, ConstraintKind, ConstraintViolation, Document, Model, TypeTag, Value,
    Violations,
};
use docmodel_registry::{Constraint, FieldType, ModelDef, Registry};
use tracing::trace;

use crate::error::{ValidateError, ValidateResult, ValidationFailure};

/// Options controlling model construction.
#[derive(Debug, Clone, Copy)]
pub struct ConstructOptions {
    /// Rebuild nested model fields from plain sub-documents.
    pub from_storage: bool,
    /// Run full validation once fields are assigned.
    pub validate: bool,
}

impl Default for ConstructOptions {
    fn default() -> Self {
        Self {
            from_storage: false,
            validate: true,
        }
    }
}

/// The validation engine.
///
/// Walks a model's constraint table against its current fields, collecting
/// every violation of one pass into a single aggregate failure. Also owns
/// construction, so instances are validated the moment they exist.
pub struct Validator<'r> {
    registry: &'r Registry,
}

impl<'r> Validator<'r> {
    /// Create a validator over a frozen registry.
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Construct an instance from already-typed values and validate it.
    pub fn construct(&self, type_name: &str, document: Document) -> ValidateResult<Model> {
        self.construct_with(type_name, document, ConstructOptions::default())
    }

    /// Construct an instance from a storage document, rebuilding nested
    /// model fields from their sub-documents, and validate it.
    pub fn from_storage(&self, type_name: &str, document: Document) -> ValidateResult<Model> {
        self.construct_with(
            type_name,
            document,
            ConstructOptions {
                from_storage: true,
                validate: true,
            },
        )
    }

    /// Construct an instance from a JSON object arriving at the storage
    /// boundary.
    pub fn from_json(&self, type_name: &str, json: serde_json::Value) -> ValidateResult<Model> {
        let document = docmodel_core::document_from_json(json)?;
        self.from_storage(type_name, document)
    }

    /// Construct with explicit options. Both flags are forwarded to nested
    /// reconstruction.
    pub fn construct_with(
        &self,
        type_name: &str,
        document: Document,
        options: ConstructOptions,
    ) -> ValidateResult<Model> {
        let def = self.model_def(type_name)?;
        let mut model = if options.from_storage {
            let mut model = Model::new(type_name);
            for (key, value) in document {
                let value = self.reconstruct_field(def, &key, value, options)?;
                model.set(key, value);
            }
            model
        } else {
            Model::with_fields(type_name, document)
        };
        if options.validate {
            self.validate(&mut model)?;
        }
        Ok(model)
    }

    /// Run a full validation pass.
    ///
    /// Success is `Ok(())`. Any violation fails with the aggregate
    /// [`ValidationFailure`], which is also recorded on the instance. A
    /// nested model field that fails its own validation propagates as the
    /// nested type's aggregate, interrupting this pass.
    pub fn validate(&self, model: &mut Model) -> ValidateResult<()> {
        let def = self.model_def(model.type_name())?;
        let mut remaining = model.property_names();
        let mut violations = Violations::new();

        for field in def.fields() {
            remaining.retain(|name| name != &field.name);
            for constraint in field.constraints() {
                self.check_constraint(model, &field.name, constraint, &mut violations)?;
            }
        }

        // closed-world: whatever was never declared is itself a violation
        for name in remaining {
            violations.push(ConstraintViolation::undeclared(name));
        }

        if violations.is_empty() {
            return Ok(());
        }
        model.record_violations(violations.clone());
        Err(ValidateError::Validation(ValidationFailure::new(
            model.type_name(),
            violations,
        )))
    }

    fn model_def(&self, type_name: &str) -> ValidateResult<&ModelDef> {
        self.registry
            .get_model(type_name)
            .ok_or_else(|| ValidateError::ConstraintsNotDefined {
                model: type_name.to_string(),
            })
    }

    fn reconstruct_field(
        &self,
        def: &ModelDef,
        key: &str,
        value: Value,
        options: ConstructOptions,
    ) -> ValidateResult<Value> {
        let field_type = def.get_field(key).and_then(|field| field.field_type());
        match (field_type, value) {
            (Some(FieldType::Model(target)), Value::Map(sub)) => {
                let nested = self.construct_with(target, sub, options)?;
                Ok(Value::Model(nested))
            }
            (_, value) => Ok(value),
        }
    }

    fn check_constraint(
        &self,
        model: &mut Model,
        field: &str,
        constraint: &Constraint,
        violations: &mut Violations,
    ) -> ValidateResult<()> {
        let violation = match constraint {
            Constraint::Type(expected) => self.check_type(model, field, expected)?,
            Constraint::Required(required) => check_required(model, field, *required),
            Constraint::Blank(allow_blank) => check_blank(model, field, *allow_blank),
            Constraint::Choice(allowed) => check_choice(model, field, allowed)?,
            Constraint::MinLength(min) => check_min_length(model, field, *min),
            Constraint::MaxLength(max) => check_max_length(model, field, *max),
        };
        if let Some(violation) = violation {
            violations.push(violation);
        }
        Ok(())
    }

    fn check_type(
        &self,
        model: &mut Model,
        field: &str,
        expected: &FieldType,
    ) -> ValidateResult<Option<ConstraintViolation>> {
        // absent optional values pass; presence is the required constraint's job
        if is_undefined_or_null(model.get(field)) {
            return Ok(None);
        }
        trace!(field, expected = expected.name(), "checking type constraint");

        match expected {
            FieldType::Model(target) => match model.get_mut(field) {
                Some(Value::Model(nested)) if nested.type_name() == target.as_str() => {
                    // nested failures surface as the nested type's own aggregate
                    self.validate(nested)?;
                    Ok(None)
                }
                _ => Ok(Some(type_violation(field, target))),
            },
            FieldType::Scalar(name) => {
                let matches = model
                    .get(field)
                    .map(|value| TypeTag::from_name(name) == Some(TypeTag::of(value)))
                    .unwrap_or(false);
                if matches {
                    Ok(None)
                } else {
                    Ok(Some(type_violation(field, name)))
                }
            }
        }
    }
}

fn type_violation(field: &str, type_name: &str) -> ConstraintViolation {
    ConstraintViolation::new(
        field,
        ConstraintKind::Type,
        Some(Value::String(type_name.to_string())),
        format!("not of type {}", type_name),
    )
}

fn check_required(model: &Model, field: &str, required: bool) -> Option<ConstraintViolation> {
    trace!(field, "checking required constraint");
    if required && is_undefined_or_null(model.get(field)) {
        return Some(ConstraintViolation::new(
            field,
            ConstraintKind::Required,
            Some(Value::Bool(true)),
            "required",
        ));
    }
    None
}

fn check_blank(model: &Model, field: &str, allow_blank: bool) -> Option<ConstraintViolation> {
    trace!(field, "checking blank constraint");
    let blank = model.get(field).map(Value::is_blank).unwrap_or(false);
    if !allow_blank && blank {
        return Some(ConstraintViolation::new(
            field,
            ConstraintKind::Blank,
            Some(Value::Bool(allow_blank)),
            "blank",
        ));
    }
    None
}

fn check_choice(
    model: &Model,
    field: &str,
    allowed: &[Value],
) -> ValidateResult<Option<ConstraintViolation>> {
    if allowed.is_empty() {
        return Err(ValidateError::InvalidChoice {
            model: model.type_name().to_string(),
            field: field.to_string(),
        });
    }
    let value = match model.get(field) {
        Some(value) if !value.is_null() => value,
        _ => return Ok(None),
    };
    trace!(field, "checking choice constraint");
    if allowed.iter().any(|candidate| candidate.loose_eq(value)) {
        return Ok(None);
    }
    let list = allowed.iter().map(literal).collect::<Vec<_>>().join(",");
    Ok(Some(ConstraintViolation::new(
        field,
        ConstraintKind::Choice,
        Some(Value::List(allowed.to_vec())),
        format!("not in list [{}]", list),
    )))
}

fn check_min_length(model: &Model, field: &str, min: usize) -> Option<ConstraintViolation> {
    let length = model.get(field).and_then(Value::measurable_len)?;
    trace!(field, length, "checking minLength constraint");
    if length < min {
        return Some(ConstraintViolation::new(
            field,
            ConstraintKind::MinLength,
            Some(Value::Int(min as i64)),
            "minLength",
        ));
    }
    None
}

fn check_max_length(model: &Model, field: &str, max: usize) -> Option<ConstraintViolation> {
    let length = model.get(field).and_then(Value::measurable_len)?;
    trace!(field, length, "checking maxLength constraint");
    if length > max {
        return Some(ConstraintViolation::new(
            field,
            ConstraintKind::MaxLength,
            Some(Value::Int(max as i64)),
            "maxLength",
        ));
    }
    None
}

/// Literal rendering for choice lists: strings unquoted, everything else as
/// displayed.
fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
