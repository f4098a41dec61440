//! Nested model scenarios: reconstruction from storage documents, type
//! identity of nested instances, and failure attribution across levels.

use docmodel_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn storage_documents_reconstruct_nested_instances() {
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    let model = validator
        .from_storage(
            "Person",
            doc! {
                "name" => "Joe",
                "gender" => "M",
                "address" => doc! { "street" => "1 Main St", "city" => "Paris" },
            },
        )
        .unwrap();

    let address = model.get("address").and_then(Value::as_model).unwrap();
    assert_eq!(address.type_name(), "Address");
    assert_eq!(address.get("street"), Some(&Value::String("1 Main St".into())));
}

#[test]
fn nested_failure_is_attributed_to_the_nested_type() {
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    assert_fails_with(
        validator.from_storage(
            "Person",
            doc! {
                "name" => "Joe",
                "gender" => "M",
                "address" => doc! { "street" => "1 Main St" },
            },
        ),
        "Address constraint error=[city: required]",
    );
}

#[test]
fn grandchild_failure_surfaces_through_two_levels() {
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    assert_fails_with(
        validator.from_storage(
            "Company",
            doc! {
                "name" => "Acme",
                "owner" => doc! {
                    "name" => "Joe",
                    "gender" => "M",
                    "address" => doc! { "street" => "1 Main St" },
                },
            },
        ),
        "Address constraint error=[city: required]",
    );
}

#[test]
fn three_valid_levels_pass() {
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    let company = validator
        .from_storage(
            "Company",
            doc! {
                "name" => "Acme",
                "owner" => doc! {
                    "name" => "Joe",
                    "gender" => "M",
                    "address" => doc! { "street" => "1 Main St", "city" => "Paris" },
                },
            },
        )
        .unwrap();

    let owner = company.get("owner").and_then(Value::as_model).unwrap();
    let address = owner.get("address").and_then(Value::as_model).unwrap();
    assert_eq!(address.get("city"), Some(&Value::String("Paris".into())));
}

#[test]
fn nested_instance_of_the_wrong_type_fails() {
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    let company = validator
        .construct("Company", doc! { "name" => "Acme" })
        .unwrap();
    assert_fails_with(
        validator.construct(
            "Person",
            doc! { "name" => "Joe", "gender" => "M", "address" => company },
        ),
        "Person constraint error=[address: not of type Address]",
    );
}

#[test]
fn nested_scalar_fails_the_model_type_check() {
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    assert_fails_with(
        validator.construct(
            "Person",
            doc! { "name" => "Joe", "gender" => "M", "address" => "test" },
        ),
        "Person constraint error=[address: not of type Address]",
    );
}

#[test]
fn revalidation_recurses_into_nested_instances() {
    // GIVEN a valid person whose address later loses a required field
    let registry = domain_registry();
    let validator = Validator::new(&registry);
    let mut person = validator
        .from_storage(
            "Person",
            doc! {
                "name" => "Joe",
                "gender" => "M",
                "address" => doc! { "street" => "1 Main St", "city" => "Paris" },
            },
        )
        .unwrap();
    person
        .get_mut("address")
        .and_then(Value::as_model_mut)
        .unwrap()
        .remove("city");

    // WHEN the parent is revalidated
    let result = validator.validate(&mut person);

    // THEN the nested aggregate interrupts the parent's pass
    assert_fails_with(result, "Address constraint error=[city: required]");
}

#[test]
fn construction_can_defer_nested_validation() {
    // the validate flag is forwarded to nested reconstruction
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    let person = validator
        .construct_with(
            "Person",
            doc! {
                "name" => "Joe",
                "gender" => "M",
                "address" => doc! { "street" => "1 Main St" },
            },
            ConstructOptions {
                from_storage: true,
                validate: false,
            },
        )
        .unwrap();

    let address = person.get("address").and_then(Value::as_model).unwrap();
    assert_eq!(address.type_name(), "Address");
    assert!(address.violations().is_empty());
}
