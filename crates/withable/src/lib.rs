//! Copy-with-one-field-changed for immutable record structs.
//!
//! Deriving [`Record`] gives a struct a compile-time model and one typed
//! [`Accessor`] const per field; deriving [`Withable`] adds the wither
//! surface on top.
//!
//! ```rust
//! use withable::{FieldValue, Record, Withable};
//!
//! #[derive(Clone, Debug, PartialEq, Record, Withable)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let alice = Person {
//!     name: "Alice".to_string(),
//!     age: 30,
//! };
//!
//! // typed path: settled at compile time, cannot fail
//! let older = alice.with(Person::AGE, 31);
//! assert_eq!(older.age, 31);
//! assert_eq!(alice.age, 30);
//!
//! // dynamic path: field resolved by name at runtime
//! let renamed = alice.with_field("name", FieldValue::new("Beth".to_string()))?;
//! assert_eq!(renamed.name, "Beth");
//! # Ok::<(), withable::Error>(())
//! ```

pub use withable_core as core;

pub use withable_core::{
    Accessor, Error, FieldModel, FieldReader, FieldValue, Record, RecordModel, Shape, Withable,
    accessor, error, model, traits, validate, value, with, with_field, wither,
};
pub use withable_derive::{Record, Withable};

///
/// Prelude
///

pub mod prelude {
    pub use withable_core::prelude::*;
    pub use withable_derive::{Record, Withable};
}

/// Crate version, for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
