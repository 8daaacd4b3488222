use crate::{accessor::Accessor, error::Error, model::RecordModel, value::FieldValue, wither};

///
/// Record
///
/// A struct with named fields behaving as an immutable record: its model is
/// known at compile time, its fields can be read out as boxed values, and a
/// field vector can be fed back through the canonical constructor.
///
/// Normally derived. A hand-written impl is the one place the invariants the
/// derive guarantees (dense ordinals, matching arity, truthful lifetimes)
/// can drift, which is why [`crate::validate`] re-checks models at runtime
/// on the dynamic path.
///

pub trait Record: Sized + 'static {
    /// Model describing this record's shape, lifetimes, and fields.
    const MODEL: &'static RecordModel;

    /// Box every field in declaration order.
    fn record_fields(&self) -> Vec<FieldValue>;

    /// Rebuild an instance from boxed fields in declaration order; the
    /// canonical constructor of the record.
    fn from_record_fields(fields: Vec<FieldValue>) -> Result<Self, Error>;
}

///
/// Withable
///
/// Copy-with-one-field-changed. Both methods leave `self` untouched and hand
/// back a new instance; the typed path is total, the dynamic path reports
/// unknown fields and type drift as [`Error`]s.
///

pub trait Withable: Record + Clone {
    /// Copy of this record with the selected field replaced by `value`.
    #[must_use]
    fn with<V>(&self, accessor: Accessor<Self, V>, value: V) -> Self {
        wither::with(self, accessor, value)
    }

    /// Copy of this record with the named field replaced by `value`.
    fn with_field(&self, field: &str, value: FieldValue) -> Result<Self, Error> {
        wither::with_field(self, field, value)
    }
}
