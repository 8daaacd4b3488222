//! Derive macros for the withable crates.
//!
//! Everything here expands against the `withable` facade; use these through
//! that crate rather than depending on this one directly.

mod record;
mod util;
mod withable;

use proc_macro::TokenStream;

/// Derive `Record` for a struct with named fields.
///
/// Emits the record's model, the boxed-field read-out, the canonical
/// constructor, and one typed `Accessor` const per field, named after the
/// field in upper snake case. Override a const name with
/// `#[record(accessor = "NAME")]` on the field.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input.into()).into()
}

/// Derive `Withable` for a record.
///
/// Emits the trait impl plus one `with_<field>` convenience method per
/// field. Requires `Record` and `Clone` on the same type.
#[proc_macro_derive(Withable, attributes(record))]
pub fn derive_withable(input: TokenStream) -> TokenStream {
    withable::derive(input.into()).into()
}
