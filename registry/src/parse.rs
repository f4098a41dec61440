//! Parsing constraint tables from plain schema documents.
//!
//! Schema documents carry one sub-document per field, keyed by constraint
//! kind. Parsed constraints are ordered canonically (type, required, blank,
//! choice, minLength, maxLength) because documents do not preserve
//! declaration order.

use crate::{Constraint, FieldDef, FieldType, RegistryError};
use docmodel_core::{Document, TypeTag, Value};

const KIND_ORDER: [&str; 6] = [
    "type",
    "required",
    "blank",
    "choice",
    "minLength",
    "maxLength",
];

/// Parse the field definitions of one schema document.
pub(crate) fn fields_from_document(document: &Document) -> Result<Vec<FieldDef>, RegistryError> {
    let mut fields = Vec::new();
    for (field_name, spec) in document {
        let spec = spec.as_map().ok_or_else(|| {
            RegistryError::InvalidSchemaDocument(format!(
                "constraints for field {} must be a sub-document",
                field_name
            ))
        })?;

        for kind in spec.keys() {
            if !KIND_ORDER.contains(&kind.as_str()) {
                return Err(RegistryError::UnsupportedConstraint(kind.clone()));
            }
        }

        let mut field = FieldDef::untyped(field_name);
        for kind in KIND_ORDER {
            if let Some(value) = spec.get(kind) {
                // null constraint values mean "not constrained"
                if value.is_null() {
                    continue;
                }
                field = field.constraint(parse_constraint(field_name, kind, value)?);
            }
        }
        fields.push(field);
    }
    Ok(fields)
}

fn parse_constraint(
    field: &str,
    kind: &str,
    value: &Value,
) -> Result<Constraint, RegistryError> {
    match kind {
        "type" => {
            let name = value.as_str().ok_or_else(|| {
                RegistryError::InvalidSchemaDocument(format!(
                    "type of field {} must be a type name",
                    field
                ))
            })?;
            // names that are not classifier tags reference model types
            let field_type = match TypeTag::from_name(name) {
                Some(_) => FieldType::scalar(name),
                None => FieldType::model(name),
            };
            Ok(Constraint::Type(field_type))
        }
        "required" => Ok(Constraint::Required(parse_bool(field, kind, value)?)),
        "blank" => Ok(Constraint::Blank(parse_bool(field, kind, value)?)),
        "choice" => match value {
            Value::List(values) => Ok(Constraint::Choice(values.clone())),
            other => Err(RegistryError::InvalidChoice(other.to_string())),
        },
        "minLength" => Ok(Constraint::MinLength(parse_length(field, kind, value)?)),
        "maxLength" => Ok(Constraint::MaxLength(parse_length(field, kind, value)?)),
        other => Err(RegistryError::UnsupportedConstraint(other.to_string())),
    }
}

fn parse_bool(field: &str, kind: &str, value: &Value) -> Result<bool, RegistryError> {
    value.as_bool().ok_or_else(|| {
        RegistryError::InvalidSchemaDocument(format!(
            "{} of field {} must be a boolean",
            kind, field
        ))
    })
}

fn parse_length(field: &str, kind: &str, value: &Value) -> Result<usize, RegistryError> {
    match value.as_int() {
        Some(length) if length >= 0 => Ok(length as usize),
        _ => Err(RegistryError::InvalidSchemaDocument(format!(
            "{} of field {} must be a non-negative integer",
            kind, field
        ))),
    }
}
