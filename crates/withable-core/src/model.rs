
use crate::value::FieldValue;
use core::any::TypeId;
use std::fmt;

///
/// RecordModel
///
/// Compile-time description of a record struct. The derive emits one of
/// these per type as an associated const; the validator and the dynamic
/// wither path work entirely off this description.
///

#[derive(Clone, Copy, Debug)]
pub struct RecordModel {
    /// Unqualified type name, as written at the declaration site.
    pub name: &'static str,

    /// Fully qualified path, `module_path!()` plus the type name.
    pub path: &'static str,

    /// Shape of the declaring struct.
    pub shape: Shape,

    /// Lifetime parameters declared on the type, in declaration order.
    /// Non-empty means the record borrows from an enclosing scope.
    pub lifetimes: &'static [&'static str],

    /// Components of the record, in declaration order.
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    /// Number of components, which is also the arity of the canonical
    /// constructor.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.fields.len()
    }

    /// True when the record declares lifetime parameters.
    #[must_use]
    pub const fn borrows(&self) -> bool {
        !self.lifetimes.is_empty()
    }

    /// Look a field up by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Field at the given position in declaration order.
    #[must_use]
    pub fn field_at(&self, ordinal: usize) -> Option<&FieldModel> {
        self.fields.get(ordinal)
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }
}

///
/// FieldModel
///
/// One record component. `ty` is a display label for diagnostics; `type_id`
/// is the ground truth the dynamic path checks values against.
///

#[derive(Clone, Copy, Debug)]
pub struct FieldModel {
    /// Field name with any raw-identifier prefix stripped.
    pub name: &'static str,

    /// Position in declaration order, dense from zero.
    pub ordinal: usize,

    /// Type label as written in the declaration, for diagnostics only.
    pub ty: &'static str,

    /// Thunk returning the `TypeId` of the field's type.
    pub type_id: fn() -> TypeId,
}

impl FieldModel {
    /// True when the boxed value carries exactly this field's type.
    #[must_use]
    pub fn admits(&self, value: &FieldValue) -> bool {
        (self.type_id)() == value.type_id()
    }
}

///
/// Shape
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    Named,
    Tuple,
    Unit,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named => write!(f, "struct with named fields"),
            Self::Tuple => write!(f, "tuple struct"),
            Self::Unit => write!(f, "unit struct"),
        }
    }
}
