//! Record types that can be bulk-assigned from name/value pairs.
//!
//! A [`SimpleDataclass`] owns a static [`FieldTable`] listing the
//! fields it declares. Construction and updates walk the given pairs
//! and assign every value whose name is in the table; everything else
//! is skipped. The table is an allow-list for assignment, it does not
//! validate that all fields are present.
//!
//! The [`simple_dataclass!`](crate::simple_dataclass) macro declares
//! the struct, its defaults and its field table in one go.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::Error;

type Getter<T> = fn(&T) -> &dyn fmt::Debug;
type Setter<T> = fn(&mut T, Value) -> Result<(), serde_json::Error>;

struct Field<T> {
    getter: Getter<T>,
    setter: Setter<T>,
}

/// The fields declared by a record type `T`, in declaration order.
pub struct FieldTable<T> {
    type_name: &'static str,
    fields: IndexMap<&'static str, Field<T>>,
}

impl<T> FieldTable<T> {
    /// Creates an empty table for a type with the given name.
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: IndexMap::new(),
        }
    }

    /// Declares a field with accessors for reading and assigning it.
    ///
    /// Declaring the same name twice replaces the earlier accessors
    /// but keeps the original position.
    pub fn field(mut self, name: &'static str, getter: Getter<T>, setter: Setter<T>) -> Self {
        self.fields.insert(name, Field { getter, setter });
        self
    }

    /// Gets the name of the record type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether a field with the given name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates over the declared field names in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    /// The number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the table declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Assigns `value` to the field `name` of `target`.
    ///
    /// Returns `false` without touching `target` when no such field
    /// is declared.
    pub fn assign(&self, target: &mut T, name: &str, value: Value) -> Result<bool, Error> {
        let Some((&name, field)) = self.fields.get_key_value(name) else {
            log::trace!("Ignoring unknown field '{name}' for '{}'", self.type_name);
            return Ok(false);
        };

        (field.setter)(target, value).map_err(|source| Error::Field { name, source })?;
        Ok(true)
    }

    fn fmt_repr(&self, target: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}(**", self.type_name)?;
        f.debug_map()
            .entries(
                self.fields
                    .iter()
                    .map(|(name, field)| (name, (field.getter)(target))),
            )
            .finish()?;
        f.write_str(")>")
    }
}

impl<T> fmt::Debug for FieldTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldTable")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Displays the current state of a [`SimpleDataclass`] value as
/// `<TypeName(**{"field": value, ...})>`.
pub struct Repr<'a, T: SimpleDataclass>(&'a T);

impl<T: SimpleDataclass> fmt::Display for Repr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::fields().fmt_repr(self.0, f)
    }
}

/// A record type with a fixed set of bulk-assignable fields.
pub trait SimpleDataclass: Default + Sized + 'static {
    /// Gets the table of fields declared by this type.
    fn fields() -> &'static FieldTable<Self>;

    /// Creates a default value and assigns all known fields from the
    /// given pairs to it.
    fn from_fields<I, K, V>(fields: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut this = Self::default();
        this.update(fields)?;
        Ok(this)
    }

    /// Assigns all known fields from the given pairs.
    ///
    /// Unknown names are skipped. On error, pairs processed before
    /// the failing one remain assigned.
    fn update<I, K, V>(&mut self, fields: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let table = Self::fields();
        for (name, value) in fields {
            table.assign(self, name.as_ref(), value.into())?;
        }

        Ok(())
    }

    /// Whether this type declares a field with the given name.
    fn has_field(name: &str) -> bool {
        Self::fields().contains(name)
    }

    /// Gets a displayable representation of the current field values.
    fn repr(&self) -> Repr<'_, Self> {
        Repr(self)
    }
}

/// Declares a struct implementing
/// [`SimpleDataclass`](crate::dataclass::SimpleDataclass).
///
/// Every field is given a default value expression. The field types
/// must implement [`serde::Deserialize`] and [`std::fmt::Debug`]; the
/// generated [`std::fmt::Debug`] impl prints the
/// [`SimpleDataclass::repr`](crate::dataclass::SimpleDataclass::repr).
///
/// ```
/// use ottdadmin_utils::{dataclass::SimpleDataclass, simple_dataclass};
///
/// simple_dataclass! {
///     #[derive(Clone, PartialEq)]
///     pub struct CompanyInfo {
///         pub id: u8 = 0,
///         pub name: String = String::new(),
///     }
/// }
///
/// let info = CompanyInfo::from_fields([("name", "Acme Transport")]).unwrap();
/// assert_eq!(info.name, "Acme Transport");
/// ```
#[macro_export]
macro_rules! simple_dataclass {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default,)*
                }
            }
        }

        impl $crate::dataclass::SimpleDataclass for $name {
            fn fields() -> &'static $crate::dataclass::FieldTable<Self> {
                static FIELDS: $crate::once_cell::sync::Lazy<$crate::dataclass::FieldTable<$name>> =
                    $crate::once_cell::sync::Lazy::new(|| {
                        $crate::dataclass::FieldTable::<$name>::new(::core::stringify!($name))
                            $(
                                .field(
                                    ::core::stringify!($field),
                                    |this| &this.$field as &dyn ::core::fmt::Debug,
                                    |this, value| {
                                        this.$field = $crate::serde_json::from_value(value)?;
                                        Ok(())
                                    },
                                )
                            )*
                    });

                &FIELDS
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&$crate::dataclass::SimpleDataclass::repr(self), f)
            }
        }
    };
}
