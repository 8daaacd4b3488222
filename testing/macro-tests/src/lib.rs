//! Behavioral coverage for the withable derives: expansion shape, typed and
//! dynamic substitution, validation, and compile-fail diagnostics.

pub mod fixtures;
pub mod test;

///
/// Prelude
///

pub mod prelude {
    pub use crate::fixtures::*;
    pub use withable::prelude::*;
}
