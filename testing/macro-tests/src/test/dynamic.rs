///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn named_substitution_replaces_field() {
        let base = test_record();
        let updated = base
            .with_field("count", FieldValue::new(42_i64))
            .unwrap();

        assert_eq!(
            updated,
            TestRecord {
                count: 42,
                ..test_record()
            }
        );
        assert_eq!(base.count, 3);
    }

    #[test]
    fn enum_field_through_dynamic_path() {
        let updated = test_record()
            .with_field("status", FieldValue::new(Status::Inactive))
            .unwrap();

        assert_eq!(updated.status, Status::Inactive);
    }

    #[test]
    fn free_function_form() {
        let base = test_record();
        let updated =
            withable::with_field(&base, "active", FieldValue::new(false)).unwrap();

        assert!(!updated.active);
    }

    #[test]
    fn unknown_field_is_reported() {
        let err = test_record()
            .with_field("missing", FieldValue::new(1_i64))
            .unwrap_err();

        assert_eq!(
            err,
            Error::UnresolvedField {
                path: TestRecord::MODEL.path,
                field: "missing".to_string(),
            }
        );
        assert!(err.to_string().contains("has no field named `missing`"));
    }

    #[test]
    fn value_type_is_checked() {
        let err = test_record()
            .with_field("count", FieldValue::new(42_i32))
            .unwrap_err();

        assert_eq!(
            err,
            Error::TypeMismatch {
                path: TestRecord::MODEL.path,
                field: "count",
                expected: "i64",
                actual: "i32",
            }
        );
    }

    #[test]
    fn string_field_rejects_borrowed_str() {
        let err = test_record()
            .with_field("name", FieldValue::new("Neu"))
            .unwrap_err();

        assert_eq!(
            err,
            Error::TypeMismatch {
                path: TestRecord::MODEL.path,
                field: "name",
                expected: "String",
                actual: "&str",
            }
        );
    }

    #[test]
    fn dynamic_path_agrees_with_typed_path() {
        let base = test_record();

        let through_name = base
            .with_field("score", FieldValue::new(9.99_f64))
            .unwrap();
        let through_selector = base.with(TestRecord::SCORE, 9.99);

        assert_eq!(through_name, through_selector);
    }
}
