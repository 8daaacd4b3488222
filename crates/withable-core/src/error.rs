use crate::model::Shape;
use thiserror::Error as ThisError;

///
/// Error
///
/// Everything the validator and the dynamic wither path can refuse. The
/// typed path never produces one of these; substitution through an
/// `Accessor` is total.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    /// The record declares a lifetime parameter, so its fields cannot be
    /// boxed as `'static` values and carried through the dynamic path.
    #[error(
        "record `{path}` borrows `{lifetime}` from an enclosing scope and cannot be rebuilt from its fields"
    )]
    BorrowedRecord {
        path: &'static str,
        lifetime: &'static str,
    },

    /// The field vector handed to the canonical constructor has the wrong
    /// length for the record's model.
    #[error("canonical constructor for record `{path}` takes {expected} fields, received {actual}")]
    ConstructorArity {
        path: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The model's field list does not describe a callable canonical
    /// constructor. Only hand-written `Record` impls can get here.
    #[error("no canonical constructor found for record `{path}`: {detail}")]
    MissingConstructor { path: &'static str, detail: String },

    /// The type behind the model is not a struct with named fields.
    #[error("`{path}` is not a record: expected a struct with named fields, found a {shape}")]
    NotARecord { path: &'static str, shape: Shape },

    /// A boxed value does not carry the type its target field declares.
    #[error(
        "type mismatch for field `{field}` of record `{path}`: expected `{expected}`, found `{actual}`"
    )]
    TypeMismatch {
        path: &'static str,
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// The requested field name is not part of the record.
    #[error("record `{path}` has no field named `{field}`")]
    UnresolvedField { path: &'static str, field: String },
}
