//! JSON projection scenarios: the storage/REST boundary, recursion into
//! nested models and sequences, and the construction round-trip.

use docmodel_tests::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn projection_yields_a_plain_json_object() {
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    let person = validator
        .from_storage(
            "Person",
            doc! {
                "name" => "Joe",
                "gender" => "M",
                "address" => doc! { "street" => "1 Main St", "city" => "Paris" },
            },
        )
        .unwrap();

    assert_eq!(
        person.to_json(),
        json!({
            "address": { "city": "Paris", "street": "1 Main St" },
            "gender": "M",
            "name": "Joe",
        })
    );
}

#[test]
fn storage_id_survives_projection_other_internal_fields_do_not() {
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    let person = validator
        .construct(
            "Person",
            doc! { "_id" => "abc123", "_version" => 4i64, "name" => "Joe", "gender" => "M" },
        )
        .unwrap();

    let json = person.to_json();
    assert_eq!(json["_id"], json!("abc123"));
    assert!(json.get("_version").is_none());
}

#[test]
fn sequences_project_their_model_elements() {
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    let address = validator
        .construct(
            "Address",
            doc! { "street" => "1 Main St", "city" => "Paris" },
        )
        .unwrap();
    let mut person = validator
        .construct("Person", doc! { "name" => "Joe", "gender" => "M" })
        .unwrap();
    person.set(
        "phoneList",
        vec![Value::String("555-1234".into()), Value::Model(address)],
    );

    let json = person.to_json();
    assert_eq!(json["phoneList"][0], json!("555-1234"));
    assert_eq!(json["phoneList"][1]["city"], json!("Paris"));
}

#[test]
fn construction_round_trips_through_projection() {
    // GIVEN a validated instance
    let registry = domain_registry();
    let validator = Validator::new(&registry);
    let original = validator
        .from_storage(
            "Person",
            doc! {
                "_id" => "abc123",
                "name" => "Joe",
                "gender" => "M",
                "address" => doc! { "street" => "1 Main St", "city" => "Paris" },
            },
        )
        .unwrap();

    // WHEN its projection is fed back through the storage path
    let rebuilt = validator.from_json("Person", original.to_json()).unwrap();

    // THEN the instances are equivalent
    assert_eq!(rebuilt, original);
    assert_eq!(rebuilt.to_json(), original.to_json());
}

#[test]
fn explicit_subsets_project_only_named_fields() {
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    let person = validator
        .construct("Person", doc! { "name" => "Joe", "gender" => "M" })
        .unwrap();
    assert_eq!(person.to_json_fields(&["name"]), json!({ "name": "Joe" }));
}

#[test]
fn models_serialize_as_their_projection() {
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    let person = validator
        .construct("Person", doc! { "name" => "Joe", "gender" => "M" })
        .unwrap();
    assert_eq!(serde_json::to_value(&person).unwrap(), person.to_json());
}

#[test]
fn violations_serialize_for_structured_error_payloads() {
    let registry = domain_registry();
    let validator = Validator::new(&registry);

    let error = validator.construct("Person", doc!()).unwrap_err();
    let payload = serde_json::to_value(error.violations().unwrap()).unwrap();
    assert_eq!(payload[0]["field"], json!("name"));
    assert_eq!(payload[0]["kind"], json!("required"));
    assert_eq!(payload[0]["message"], json!("required"));
}
