//! Shared model fixtures and assertion helpers.

use docmodel_constraint::ValidateError;
use docmodel_core::Value;
use docmodel_registry::{FieldDef, Registry, RegistryBuilder};

/// Registry with the domain models used across the scenario tests:
/// a Company owning a Person, who in turn holds an Address.
pub fn domain_registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .add_model("Address")
        .field(FieldDef::new("street", "string").required())
        .field(FieldDef::new("city", "string").required())
        .field(FieldDef::new("postalCode", "string").optional().allow_blank())
        .done()
        .unwrap();
    builder
        .add_model("Person")
        .field(FieldDef::new("name", "string").required().no_blank())
        .field(
            FieldDef::new("gender", "string")
                .required()
                .choice(choices(&["M", "F"])),
        )
        .field(FieldDef::new("phoneList", "array"))
        .field(FieldDef::new("flag", "boolean"))
        .field(FieldDef::model("address", "Address"))
        .done()
        .unwrap();
    builder
        .add_model("Company")
        .field(FieldDef::new("name", "string").required())
        .field(FieldDef::model("owner", "Person"))
        .done()
        .unwrap();
    builder.build().unwrap()
}

/// Build a choice list from string literals.
pub fn choices(values: &[&str]) -> Vec<Value> {
    values.iter().map(|value| Value::from(*value)).collect()
}

/// Assert that an operation failed with exactly this aggregate message.
pub fn assert_fails_with<T: std::fmt::Debug>(result: Result<T, ValidateError>, expected: &str) {
    match result {
        Ok(value) => panic!("expected failure `{}`, got {:?}", expected, value),
        Err(error) => assert_eq!(error.to_string(), expected),
    }
}
