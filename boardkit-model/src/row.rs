//! Typed row models and their declarative field tables.
//!
//! A row type declares its column-bearing fields as a `'static` table
//! of fn-pointer accessors instead of being discovered by runtime
//! reflection: the table is type-checked at compile time, costs
//! nothing to "introspect", and the binder resolves it once per row
//! type.

use boardkit_columns::{ColumnResult, ColumnValue};
use boardkit_types::{Asset, Group, ItemId, Update};
use std::fmt;

/// One declared column-bearing field on a row type.
///
/// `set` down-casts a parsed column value into the typed field (a kind
/// mismatch is an error, never a silent reinterpretation); `get`
/// clones the field back out for the write flow. Both are plain fn
/// pointers so the table can live in a `const`.
pub struct ColumnField<R> {
    /// Declared field name. Doubles as the external column id unless
    /// `external_id` overrides it.
    pub name: &'static str,
    /// Explicit external column id override.
    pub external_id: Option<&'static str>,
    pub set: fn(&mut R, ColumnValue) -> ColumnResult<()>,
    pub get: fn(&R) -> Option<ColumnValue>,
}

impl<R> ColumnField<R> {
    /// The external column id this field binds to.
    #[must_use]
    pub fn column_id(&self) -> &'static str {
        self.external_id.unwrap_or(self.name)
    }
}

impl<R> fmt::Debug for ColumnField<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnField")
            .field("name", &self.name)
            .field("external_id", &self.external_id)
            .finish_non_exhaustive()
    }
}

/// The three reserved composite field kinds a row may declare at most
/// one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    Group,
    Assets,
    Updates,
}

impl CompositeKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Assets => "assets",
            Self::Updates => "updates",
        }
    }
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Setter for one of the reserved composite collections on a row type.
pub enum CompositeBinding<R> {
    Group(fn(&mut R, Group)),
    Assets(fn(&mut R, Vec<Asset>)),
    Updates(fn(&mut R, Vec<Update>)),
}

impl<R> CompositeBinding<R> {
    #[must_use]
    pub const fn kind(&self) -> CompositeKind {
        match self {
            Self::Group(_) => CompositeKind::Group,
            Self::Assets(_) => CompositeKind::Assets,
            Self::Updates(_) => CompositeKind::Updates,
        }
    }
}

impl<R> fmt::Debug for CompositeBinding<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompositeBinding::{}", self.kind())
    }
}

/// A typed row model bound from fetched items.
///
/// Implementations declare which columns they carry; the binder does
/// the rest. The [`columns!`](crate::columns) macro generates the
/// field table from field names:
///
/// ```
/// use boardkit_columns::{NumberValue, TextValue};
/// use boardkit_model::{columns, ColumnField, Row};
/// use boardkit_types::ItemId;
///
/// #[derive(Default)]
/// struct Task {
///     id: ItemId,
///     name: String,
///     text0: Option<TextValue>,
///     estimate: Option<NumberValue>,
/// }
///
/// impl Row for Task {
///     fn set_identity(&mut self, id: ItemId, name: &str) {
///         self.id = id;
///         self.name = name.to_owned();
///     }
///
///     fn columns() -> &'static [ColumnField<Self>] {
///         columns!(Task {
///             text0,
///             estimate => "numbers9",
///         })
///     }
/// }
/// ```
pub trait Row: Default {
    /// Assigns the always-present item id and name.
    fn set_identity(&mut self, id: ItemId, name: &str);

    /// The declared column-bearing fields, in declaration order.
    fn columns() -> &'static [ColumnField<Self>]
    where
        Self: Sized;

    /// Reserved composite fields (group, assets, updates). At most one
    /// of each kind; the binder rejects the row type otherwise.
    fn composites() -> &'static [CompositeBinding<Self>]
    where
        Self: Sized,
    {
        &[]
    }
}

/// Declares a row type's column field table.
///
/// Each entry is a field of type `Option<V>` where `V` is one of the
/// column value structs; `field => "column_id"` overrides the external
/// column id, which otherwise defaults to the field name.
#[macro_export]
macro_rules! columns {
    ($row:ty { $( $field:ident $( => $column_id:literal )? ),* $(,)? }) => {{
        const FIELDS: &[$crate::ColumnField<$row>] = &[
            $(
                $crate::ColumnField {
                    name: stringify!($field),
                    external_id: $crate::columns!(@id $( $column_id )?),
                    set: |row: &mut $row, value| {
                        row.$field = Some(value.try_into()?);
                        Ok(())
                    },
                    get: |row: &$row| row.$field.clone().map(Into::into),
                }
            ),*
        ];
        FIELDS
    }};
    (@id) => {
        None
    };
    (@id $column_id:literal) => {
        Some($column_id)
    };
}
