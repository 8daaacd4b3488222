
use crate::{accessor::Accessor, error::Error, traits::Record, validate, value::FieldValue};

/// Copy `record` with the field selected by `accessor` replaced by `value`.
///
/// Total: the selector pins both the field and the value type at compile
/// time, so nothing is left to check at runtime.
#[must_use]
pub fn with<T, V>(record: &T, accessor: Accessor<T, V>, value: V) -> T
where
    T: Record + Clone,
{
    let mut next = record.clone();
    accessor.set(&mut next, value);

    next
}

/// Copy `record` with the named field replaced by `value`.
///
/// Validates the record's model, resolves the field by name, checks the
/// boxed value against the field's declared type, then reads every component
/// out and rebuilds through the canonical constructor with the target slot
/// substituted. `record` itself is never touched.
pub fn with_field<T: Record>(record: &T, field: &str, value: FieldValue) -> Result<T, Error> {
    validate::ensure_record::<T>()?;

    let model = T::MODEL;
    let Some(target) = model.field(field) else {
        return Err(Error::UnresolvedField {
            path: model.path,
            field: field.to_string(),
        });
    };

    // reject drift at the boundary rather than inside the constructor
    if !target.admits(&value) {
        return Err(Error::TypeMismatch {
            path: model.path,
            field: target.name,
            expected: target.ty,
            actual: value.type_name(),
        });
    }

    let mut fields = record.record_fields();
    if fields.len() != model.arity() {
        return Err(Error::ConstructorArity {
            path: model.path,
            expected: model.arity(),
            actual: fields.len(),
        });
    }
    fields[target.ordinal] = value;

    T::from_record_fields(fields)
}
