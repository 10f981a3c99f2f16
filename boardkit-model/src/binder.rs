//! Populates typed rows from fetched items and extracts their column
//! values for the write flow.

use crate::error::{BindError, BindResult};
use crate::map::ColumnMap;
use crate::row::{CompositeBinding, CompositeKind, Row};
use boardkit_columns::{parse_column, ColumnValue};
use boardkit_types::{ColumnKind, Item};
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Binds fetched items to one row type.
///
/// Construction runs the row type's configuration check and resolves
/// its column map; both happen exactly once per binder, before any
/// item is seen. The binder is immutable afterwards and safe to share
/// across threads.
#[derive(Debug)]
pub struct RowBinder<R: Row> {
    map: ColumnMap,
    _row: PhantomData<fn() -> R>,
}

impl<R: Row + 'static> RowBinder<R> {
    /// Validates the row type and resolves its column map.
    ///
    /// Fails with [`BindError::Configuration`] when the row type
    /// declares more than one reserved composite field of the same
    /// kind. This is fatal for the row type, independent of any item.
    pub fn new() -> BindResult<Self> {
        for kind in [
            CompositeKind::Group,
            CompositeKind::Assets,
            CompositeKind::Updates,
        ] {
            let declared = R::composites()
                .iter()
                .filter(|binding| binding.kind() == kind)
                .count();
            if declared > 1 {
                warn!(%kind, declared, "row type declares duplicate composite fields");
                return Err(BindError::Configuration(format!(
                    "multiple {kind} fields are not supported"
                )));
            }
        }

        Ok(Self {
            map: ColumnMap::resolve::<R>(),
            _row: PhantomData,
        })
    }

    /// The resolved column map.
    #[must_use]
    pub fn map(&self) -> &ColumnMap {
        &self.map
    }

    /// Populates one row from a fetched item.
    ///
    /// Readings whose column id maps to no declared field are skipped
    /// silently; a reading that fails to parse aborts the rest of this
    /// item's binding and propagates.
    pub fn bind(&self, item: &Item) -> BindResult<R> {
        let mut row = R::default();
        row.set_identity(item.id, &item.name);

        for binding in R::composites() {
            match binding {
                CompositeBinding::Group(set) => {
                    if let Some(group) = &item.group {
                        set(&mut row, group.clone());
                    }
                }
                CompositeBinding::Assets(set) => set(&mut row, item.assets.clone()),
                CompositeBinding::Updates(set) => set(&mut row, item.updates.clone()),
            }
        }

        let fields = R::columns();
        for reading in &item.column_values {
            if reading.kind == ColumnKind::Subtasks {
                continue;
            }
            let Some(index) = self.map.field_index(&reading.id) else {
                debug!(column = %reading.id, "no field mapped to column, skipping");
                continue;
            };
            let value = parse_column(reading)?;
            (fields[index].set)(&mut row, value)?;
        }

        Ok(row)
    }

    /// Collects a row's set column values for the mutation encoder.
    ///
    /// Fields are walked in declaration order; unset fields are
    /// skipped, and each value's external id is defaulted from the
    /// resolved map when the value does not carry one. A set field of
    /// a write-unsupported kind is an error here, before the encoder
    /// ever runs.
    pub fn column_values(&self, row: &R) -> BindResult<Vec<ColumnValue>> {
        let fields = R::columns();
        let mut values = Vec::with_capacity(fields.len());

        for field in fields {
            let Some(value) = (field.get)(row) else {
                continue;
            };
            if !value.supports_write() {
                return Err(boardkit_columns::ColumnError::UnsupportedColumnType(
                    value.kind(),
                )
                .into());
            }
            values.push(value.with_default_id(field.column_id()));
        }

        Ok(values)
    }
}
