
use std::fmt;

///
/// Accessor
///
/// Typed selector for one field of a record. The derive emits one as an
/// associated const per field, named after the field in upper snake case, so
/// call sites read `person.with(Person::AGE, 31)`. Substitution through an
/// accessor cannot fail; the field is part of the type, not a runtime lookup.
///
/// The projection pair is plain fn pointers, so an `Accessor` is `Copy` and
/// const-constructible regardless of the record's own bounds.
///

pub struct Accessor<T, V> {
    name: &'static str,
    ordinal: usize,
    get: fn(&T) -> &V,
    set: fn(&mut T, V),
}

impl<T, V> Accessor<T, V> {
    #[must_use]
    pub const fn new(
        name: &'static str,
        ordinal: usize,
        get: fn(&T) -> &V,
        set: fn(&mut T, V),
    ) -> Self {
        Self {
            name,
            ordinal,
            get,
            set,
        }
    }

    /// Name of the selected field.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        self.name
    }

    /// Position of the selected field in declaration order.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Borrow the selected field.
    #[must_use]
    pub fn get<'r>(&self, record: &'r T) -> &'r V {
        (self.get)(record)
    }

    /// Overwrite the selected field in place.
    pub fn set(&self, record: &mut T, value: V) {
        (self.set)(record, value);
    }
}

// Manual impls so `T: Clone`/`T: Copy` are not required; the selector itself
// is always both.
#[allow(clippy::expl_impl_clone_on_copy)]
impl<T, V> Clone for Accessor<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Accessor<T, V> {}

impl<T, V> fmt::Debug for Accessor<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("name", &self.name)
            .field("ordinal", &self.ordinal)
            .finish()
    }
}
