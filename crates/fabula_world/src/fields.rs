//! Field-by-field diffing of stateful records.
//!
//! Each record exposes its scalar fields as a name → [`Value`] map. A diff
//! is the subset of that map which differs from the record's baseline;
//! fields that exist in the baseline but not in the current record (a
//! removed exit, a cleared flag) appear as `Nil`.

use fabula_foundation::{Result, Value};

/// Named scalar fields of one record.
pub type Diff = im::OrdMap<String, Value>;

/// A record whose scalar fields can be listed and assigned by name.
pub trait Stateful {
    /// Returns every diffable field with its current value.
    fn fields(&self) -> Diff;

    /// Assigns one field from a diff value.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is unknown or the value has the
    /// wrong shape.
    fn set_field(&mut self, name: &str, value: Value) -> Result<()>;

    /// Assigns every field of a diff, in key order.
    ///
    /// # Errors
    ///
    /// Stops at the first field that cannot be assigned.
    fn apply(&mut self, diff: &Diff) -> Result<()> {
        for (name, value) in diff {
            self.set_field(name, value.clone())?;
        }
        Ok(())
    }
}

/// Computes the fields of `current` that differ from `baseline`.
#[must_use]
pub fn diff_fields<T: Stateful>(current: &T, baseline: &T) -> Diff {
    let now = current.fields();
    let base = baseline.fields();

    let mut diff = Diff::new();
    for (name, value) in &now {
        if base.get(name) != Some(value) {
            diff.insert(name.clone(), value.clone());
        }
    }
    for name in base.keys() {
        if !now.contains_key(name) {
            diff.insert(name.clone(), Value::Nil);
        }
    }
    diff
}

/// Implements [`Stateful`] for a struct whose diffable fields all
/// implement [`FieldValue`](fabula_foundation::FieldValue).
macro_rules! stateful_fields {
    ($ty:ty, $owner:literal { $($field:ident),* $(,)? }) => {
        impl $crate::fields::Stateful for $ty {
            fn fields(&self) -> $crate::fields::Diff {
                let mut fields = $crate::fields::Diff::new();
                $(
                    fields.insert(
                        stringify!($field).to_string(),
                        fabula_foundation::FieldValue::to_value(&self.$field),
                    );
                )*
                fields
            }

            fn set_field(
                &mut self,
                name: &str,
                value: fabula_foundation::Value,
            ) -> fabula_foundation::Result<()> {
                match name {
                    $(
                        stringify!($field) => {
                            self.$field = fabula_foundation::FieldValue::from_value(name, value)?;
                        }
                    )*
                    _ => return Err(fabula_foundation::Error::unknown_field($owner, name)),
                }
                Ok(())
            }
        }
    };
}

pub(crate) use stateful_fields;
