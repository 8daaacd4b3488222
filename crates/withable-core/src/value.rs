
use crate::{error::Error, model::RecordModel};
use core::any::{Any, TypeId, type_name};
use std::fmt;

///
/// FieldValue
///
/// A record component boxed for transport through the dynamic path. Captures
/// the value's type name at the construction site so mismatch diagnostics can
/// say what was actually supplied.
///

pub struct FieldValue {
    value: Box<dyn Any>,
    ty: &'static str,
}

impl FieldValue {
    #[must_use]
    pub fn new<V: Any>(value: V) -> Self {
        Self {
            value: Box::new(value),
            ty: type_name::<V>(),
        }
    }

    /// Type name of the boxed value, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.ty
    }

    /// `TypeId` of the boxed value.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.value.as_ref().type_id()
    }

    /// True when the boxed value is a `V`.
    #[must_use]
    pub fn is<V: Any>(&self) -> bool {
        self.value.is::<V>()
    }

    /// Borrow the boxed value as a `V`.
    #[must_use]
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.value.downcast_ref::<V>()
    }

    /// Unbox as a `V`, handing the value back on mismatch.
    pub fn downcast<V: Any>(self) -> Result<V, Self> {
        match self.value.downcast::<V>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self { value, ty: self.ty }),
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldValue").field(&self.ty).finish()
    }
}

///
/// FieldReader
///
/// Cursor over the field vector handed to a canonical constructor. Checks
/// arity up front, then yields one value per field in declaration order,
/// downcast to the field's declared type. Generated `from_record_fields`
/// bodies are a straight struct literal of [`FieldReader::take`] calls.
///

#[derive(Debug)]
pub struct FieldReader<'m> {
    model: &'m RecordModel,
    values: std::vec::IntoIter<FieldValue>,
    cursor: usize,
}

impl<'m> FieldReader<'m> {
    pub fn new(model: &'m RecordModel, values: Vec<FieldValue>) -> Result<Self, Error> {
        if values.len() != model.arity() {
            return Err(Error::ConstructorArity {
                path: model.path,
                expected: model.arity(),
                actual: values.len(),
            });
        }

        Ok(Self {
            model,
            values: values.into_iter(),
            cursor: 0,
        })
    }

    /// Take the next field in declaration order.
    pub fn take<V: Any>(&mut self) -> Result<V, Error> {
        let taken = self.cursor + 1;
        let (Some(field), Some(value)) = (self.model.field_at(self.cursor), self.values.next())
        else {
            return Err(Error::ConstructorArity {
                path: self.model.path,
                expected: self.model.arity(),
                actual: taken,
            });
        };
        self.cursor = taken;

        value.downcast::<V>().map_err(|value| Error::TypeMismatch {
            path: self.model.path,
            field: field.name,
            expected: field.ty,
            actual: value.type_name(),
        })
    }
}
