//! Runtime half of the withable crates.
//!
//! Holds the record models emitted by the derives, the typed accessors, the
//! boxed field transport used by the dynamic path, the validator, and the
//! wither engine itself. Generated code reaches these types through the
//! `withable` facade, so everything it names is re-exported at the root.

// Generated code refers to `::withable::*`; inside this crate those paths
// resolve to the crate itself.
extern crate self as withable;

pub mod accessor;
pub mod error;
pub mod model;
pub mod traits;
pub mod validate;
pub mod value;
pub mod wither;

pub use accessor::Accessor;
pub use error::Error;
pub use model::{FieldModel, RecordModel, Shape};
pub use traits::{Record, Withable};
pub use value::{FieldReader, FieldValue};
pub use wither::{with, with_field};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        accessor::Accessor,
        error::Error,
        model::{FieldModel, RecordModel, Shape},
        traits::{Record, Withable},
        value::FieldValue,
    };
}
