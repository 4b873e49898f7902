//! Property-based tests for schema validation.

#[cfg(test)]
mod property_tests {
    use crate::descriptor::RuleDescriptor;
    use crate::error::SchemaError;
    use crate::object::{validate_object, Schema};
    use crate::value::{Record, Value};
    use proptest::prelude::*;

    const KNOWN_DESCRIPTORS: &[&str] = &[
        "required",
        "string",
        "number",
        "email",
        "url",
        "image",
        "password",
        "confirm_password",
        "min=0",
        "min=3",
        "max=5",
        "max=12",
    ];

    fn value_strategy() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-1000i64..1000).prop_map(Value::Integer),
            (-1000i32..1000).prop_map(|n| Value::Number(f64::from(n) / 4.0)),
            "[a-zA-Z0-9@._/:-]{0,16}".prop_map(Value::String),
        ];
        leaf.prop_recursive(1, 8, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(Value::Array)
        })
    }

    fn record_strategy() -> impl Strategy<Value = Record> {
        prop::collection::vec(
            (
                prop_oneof![
                    Just("name"),
                    Just("email"),
                    Just("password"),
                    Just("password_confirm"),
                    Just("avatar"),
                ],
                value_strategy(),
            ),
            0..6,
        )
        .prop_map(|fields| fields.into_iter().collect())
    }

    fn schema_strategy() -> impl Strategy<Value = Schema> {
        prop::collection::vec(
            (
                prop_oneof![Just("name"), Just("email"), Just("password_confirm"), Just("nick")],
                prop::collection::vec(prop::sample::select(KNOWN_DESCRIPTORS), 0..4),
            ),
            0..4,
        )
        .prop_map(|fields| fields.into_iter().collect())
    }

    proptest! {
        // `valid` holds exactly when no field produced an error.
        #[test]
        fn valid_iff_no_errors(schema in schema_strategy(), record in record_strategy()) {
            let result = validate_object(&schema, record.clone()).unwrap();
            match result.errors() {
                Some(errors) => {
                    prop_assert!(!result.is_valid());
                    prop_assert!(!errors.is_empty());
                    for field in errors.field_names() {
                        prop_assert!(schema.get(field).is_some());
                    }
                }
                None => {
                    prop_assert!(result.is_valid());
                    prop_assert_eq!(result.data(), Some(&record));
                }
            }
        }

        // Same schema and record always give the same outcome.
        #[test]
        fn validation_is_deterministic(schema in schema_strategy(), record in record_strategy()) {
            let first = validate_object(&schema, record.clone()).unwrap();
            let second = validate_object(&schema, record).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn min_bound_matches_char_count(s in "\\PC{0,20}", bound in 0usize..20) {
            let schema = Schema::new().field("f", [format!("min={bound}")]);
            let result = validate_object(&schema, Record::new().with("f", s.clone())).unwrap();
            prop_assert_eq!(result.is_valid(), s.chars().count() >= bound);
        }

        #[test]
        fn password_needs_more_than_eight_chars(s in "[a-z]{0,16}") {
            let schema = Schema::new().field("password", ["password"]);
            let result = validate_object(&schema, Record::new().with("password", s.clone())).unwrap();
            prop_assert_eq!(result.is_valid(), s.len() > 8);
        }

        // Unknown names fail the call no matter how the other fields fare.
        #[test]
        fn unknown_rule_always_fails_call(
            schema in schema_strategy(),
            record in record_strategy(),
            name in "zz[a-z]{1,8}",
        ) {
            let mut schema = schema;
            schema.insert("bogus", [name.clone()]);
            let err = validate_object(&schema, record).unwrap_err();
            prop_assert_eq!(err.root(), &SchemaError::UnknownRule { rule: name });
        }

        #[test]
        fn descriptor_display_round_trip(
            name in "[a-z_]{1,10}",
            argument in prop::option::of("[a-z0-9]{1,5}"),
            options in prop::collection::vec("[a-z0-9]{1,5}", 0..3),
        ) {
            let descriptor = RuleDescriptor { name, argument, options };
            let parsed = RuleDescriptor::parse(&descriptor.to_string()).unwrap();
            prop_assert_eq!(parsed, descriptor);
        }
    }
}
