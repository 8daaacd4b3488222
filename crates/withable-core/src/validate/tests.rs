use super::*;
use crate::{
    model::FieldModel,
    value::{FieldReader, FieldValue},
};
use core::any::TypeId;

#[derive(Clone, Debug, PartialEq)]
struct Checkpoint {
    name: String,
    distance_m: u32,
}

impl Record for Checkpoint {
    const MODEL: &'static RecordModel = &RecordModel {
        name: "Checkpoint",
        path: "course::Checkpoint",
        shape: Shape::Named,
        lifetimes: &[],
        fields: &[
            FieldModel {
                name: "name",
                ordinal: 0,
                ty: "String",
                type_id: TypeId::of::<String>,
            },
            FieldModel {
                name: "distance_m",
                ordinal: 1,
                ty: "u32",
                type_id: TypeId::of::<u32>,
            },
        ],
    };

    fn record_fields(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::new(self.name.clone()),
            FieldValue::new(self.distance_m),
        ]
    }

    fn from_record_fields(fields: Vec<FieldValue>) -> Result<Self, Error> {
        let mut fields = FieldReader::new(Self::MODEL, fields)?;

        Ok(Self {
            name: fields.take()?,
            distance_m: fields.take()?,
        })
    }
}

// Hand impl whose model claims a lifetime the type does not have; the
// validator believes the model.
#[derive(Clone)]
struct Claimed {
    tag: u8,
}

impl Record for Claimed {
    const MODEL: &'static RecordModel = &RecordModel {
        name: "Claimed",
        path: "course::Claimed",
        shape: Shape::Named,
        lifetimes: &["'src"],
        fields: &[FieldModel {
            name: "tag",
            ordinal: 0,
            ty: "u8",
            type_id: TypeId::of::<u8>,
        }],
    };

    fn record_fields(&self) -> Vec<FieldValue> {
        vec![FieldValue::new(self.tag)]
    }

    fn from_record_fields(fields: Vec<FieldValue>) -> Result<Self, Error> {
        let mut fields = FieldReader::new(Self::MODEL, fields)?;

        Ok(Self {
            tag: fields.take()?,
        })
    }
}

#[test]
fn well_formed_record_passes() {
    assert_eq!(ensure_record::<Checkpoint>(), Ok(()));
    assert!(is_record::<Checkpoint>());
    assert!(!borrows_enclosing_scope::<Checkpoint>());
}

#[test]
fn validation_is_repeatable() {
    assert_eq!(ensure_record::<Checkpoint>(), Ok(()));
    assert_eq!(ensure_record::<Checkpoint>(), Ok(()));
}

#[test]
fn borrowing_record_is_rejected() {
    let err = ensure_record::<Claimed>().unwrap_err();

    assert_eq!(
        err,
        Error::BorrowedRecord {
            path: "course::Claimed",
            lifetime: "'src",
        }
    );
    assert!(
        err.to_string()
            .contains("borrows `'src` from an enclosing scope")
    );
    assert!(!is_record::<Claimed>());
    assert!(borrows_enclosing_scope::<Claimed>());
}

#[test]
fn tuple_shape_is_not_a_record() {
    const MODEL: RecordModel = RecordModel {
        name: "Pair",
        path: "course::Pair",
        shape: Shape::Tuple,
        lifetimes: &[],
        fields: &[],
    };

    let err = ensure_model(&MODEL).unwrap_err();

    assert_eq!(
        err,
        Error::NotARecord {
            path: "course::Pair",
            shape: Shape::Tuple,
        }
    );
    assert!(err.to_string().contains("is not a record"));
    assert!(err.to_string().contains("tuple struct"));
}

#[test]
fn unit_shape_is_not_a_record() {
    const MODEL: RecordModel = RecordModel {
        name: "Marker",
        path: "course::Marker",
        shape: Shape::Unit,
        lifetimes: &[],
        fields: &[],
    };

    assert_eq!(
        ensure_model(&MODEL).unwrap_err(),
        Error::NotARecord {
            path: "course::Marker",
            shape: Shape::Unit,
        }
    );
}

#[test]
fn shape_is_checked_before_lifetimes() {
    const MODEL: RecordModel = RecordModel {
        name: "Pair",
        path: "course::Pair",
        shape: Shape::Tuple,
        lifetimes: &["'a"],
        fields: &[],
    };

    assert!(matches!(
        ensure_model(&MODEL).unwrap_err(),
        Error::NotARecord { .. }
    ));
}

#[test]
fn empty_field_name_breaks_the_constructor() {
    const MODEL: RecordModel = RecordModel {
        name: "Blank",
        path: "course::Blank",
        shape: Shape::Named,
        lifetimes: &[],
        fields: &[FieldModel {
            name: "",
            ordinal: 0,
            ty: "u8",
            type_id: TypeId::of::<u8>,
        }],
    };

    let err = ensure_model(&MODEL).unwrap_err();

    assert!(matches!(err, Error::MissingConstructor { .. }));
    assert!(
        err.to_string()
            .contains("no canonical constructor found for record `course::Blank`")
    );
}

#[test]
fn sparse_ordinals_break_the_constructor() {
    const MODEL: RecordModel = RecordModel {
        name: "Gappy",
        path: "course::Gappy",
        shape: Shape::Named,
        lifetimes: &[],
        fields: &[FieldModel {
            name: "tag",
            ordinal: 1,
            ty: "u8",
            type_id: TypeId::of::<u8>,
        }],
    };

    let err = ensure_model(&MODEL).unwrap_err();

    assert_eq!(
        err,
        Error::MissingConstructor {
            path: "course::Gappy",
            detail: "field `tag` declares ordinal 1 but sits at position 0".to_string(),
        }
    );
}

#[test]
fn duplicate_field_names_break_the_constructor() {
    const MODEL: RecordModel = RecordModel {
        name: "Twice",
        path: "course::Twice",
        shape: Shape::Named,
        lifetimes: &[],
        fields: &[
            FieldModel {
                name: "tag",
                ordinal: 0,
                ty: "u8",
                type_id: TypeId::of::<u8>,
            },
            FieldModel {
                name: "tag",
                ordinal: 1,
                ty: "u8",
                type_id: TypeId::of::<u8>,
            },
        ],
    };

    let err = ensure_model(&MODEL).unwrap_err();

    assert_eq!(
        err,
        Error::MissingConstructor {
            path: "course::Twice",
            detail: "field `tag` is declared twice".to_string(),
        }
    );
}
