//! Property tests for key derivation
//!
//! Deriving a key for an inner type must carry the base key's qualifier over
//! unchanged, whatever the types involved.

use proptest::prelude::*;
use provigen_core::{Annotation, Key, Qualifier, TypeDescriptor};

fn class_name() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(\\.[a-z]{1,6}){0,2}\\.[A-Z][a-zA-Z]{0,8}"
}

fn type_descriptor() -> impl Strategy<Value = TypeDescriptor> {
    let leaf = prop_oneof![
        class_name().prop_map(TypeDescriptor::class),
        prop_oneof![Just("int"), Just("boolean"), Just("long")].prop_map(TypeDescriptor::primitive),
        "[A-Z]".prop_map(TypeDescriptor::type_variable),
    ];
    leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            (class_name(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(raw, args)| TypeDescriptor::parameterized(raw, args)),
            inner.clone().prop_map(TypeDescriptor::array),
            inner.prop_map(TypeDescriptor::wildcard_extends),
        ]
    })
}

fn qualifier() -> impl Strategy<Value = Qualifier> {
    prop_oneof![
        Just(Qualifier::None),
        "[a-z]{0,8}".prop_map(|name| Qualifier::Instance(Annotation::named(&name))),
        class_name().prop_map(Qualifier::Marker),
    ]
}

proptest! {
    #[test]
    fn derived_key_keeps_qualifier(
        base_ty in type_descriptor(),
        inner in type_descriptor(),
        qualifier in qualifier(),
    ) {
        let base = Key::with_qualifier(base_ty, qualifier.clone());
        let derived = Key::with_same_qualifier(inner.clone(), &base);

        prop_assert_eq!(derived.ty(), &inner);
        prop_assert_eq!(derived.qualifier(), &qualifier);
        prop_assert_eq!(derived, Key::with_qualifier(inner, qualifier));
    }
}

#[test]
fn test_key_serializes_for_diagnostics() -> Result<(), Box<dyn std::error::Error>> {
    let key = Key::annotated_with(TypeDescriptor::class("com.example.Foo"), Annotation::named("x"));
    let json = serde_json::to_value(&key)?;

    assert_eq!(json["ty"]["Class"]["name"], "com.example.Foo");
    assert_eq!(
        json["qualifier"]["Instance"]["annotation_type"],
        "com.google.inject.name.Named"
    );
    assert_eq!(json["qualifier"]["Instance"]["values"]["value"], "\"x\"");
    Ok(())
}
