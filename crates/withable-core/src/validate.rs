#[cfg(test)]
mod tests;

use crate::{
    error::Error,
    model::{RecordModel, Shape},
    traits::Record,
};

/// Validate a record type ahead of dynamic substitution.
///
/// Derived impls always pass. Hand-written impls are checked for the three
/// things rebuilding relies on: the type is a struct with named fields, it
/// owns its data, and its field list describes a callable canonical
/// constructor.
pub fn ensure_record<T: Record>() -> Result<(), Error> {
    ensure_model(T::MODEL)
}

/// True when [`ensure_record`] passes for the type.
#[must_use]
pub fn is_record<T: Record>() -> bool {
    ensure_record::<T>().is_ok()
}

/// True when the record declares lifetime parameters and therefore cannot
/// travel through the dynamic path.
#[must_use]
pub fn borrows_enclosing_scope<T: Record>() -> bool {
    T::MODEL.borrows()
}

/// Validate a model directly. Checks run in order: shape, then lifetimes,
/// then constructor coherence; the first failure is reported.
pub fn ensure_model(model: &RecordModel) -> Result<(), Error> {
    if model.shape != Shape::Named {
        return Err(Error::NotARecord {
            path: model.path,
            shape: model.shape,
        });
    }

    if let Some(&lifetime) = model.lifetimes.first() {
        return Err(Error::BorrowedRecord {
            path: model.path,
            lifetime,
        });
    }

    ensure_constructor(model)
}

// The canonical constructor takes every field in declaration order, so the
// field list must be dense and unambiguous.
fn ensure_constructor(model: &RecordModel) -> Result<(), Error> {
    for (ordinal, field) in model.fields.iter().enumerate() {
        if field.name.is_empty() {
            return Err(Error::MissingConstructor {
                path: model.path,
                detail: format!("field at position {ordinal} has an empty name"),
            });
        }

        if field.ordinal != ordinal {
            return Err(Error::MissingConstructor {
                path: model.path,
                detail: format!(
                    "field `{}` declares ordinal {} but sits at position {ordinal}",
                    field.name, field.ordinal
                ),
            });
        }

        if model.fields[..ordinal]
            .iter()
            .any(|prev| prev.name == field.name)
        {
            return Err(Error::MissingConstructor {
                path: model.path,
                detail: format!("field `{}` is declared twice", field.name),
            });
        }
    }

    Ok(())
}
