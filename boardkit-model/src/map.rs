//! Field name to external column id resolution.

use crate::row::Row;
use std::collections::HashMap;

/// Bidirectional association between a row type's declared fields and
/// external column ids.
///
/// An explicit override on the field wins; otherwise the external id
/// defaults to the field name. Resolved once per row type (the tables
/// are `'static`, so this is a cheap walk, not introspection) and
/// immutable afterwards; safe for concurrent reads.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    by_column_id: HashMap<&'static str, usize>,
    by_field: HashMap<&'static str, &'static str>,
}

impl ColumnMap {
    /// Resolves a row type's declared fields.
    #[must_use]
    pub fn resolve<R: Row + 'static>() -> Self {
        let fields = R::columns();
        let mut by_column_id = HashMap::with_capacity(fields.len());
        let mut by_field = HashMap::with_capacity(fields.len());

        for (index, field) in fields.iter().enumerate() {
            by_column_id.insert(field.column_id(), index);
            by_field.insert(field.name, field.column_id());
        }

        Self {
            by_column_id,
            by_field,
        }
    }

    /// Field-table index for an external column id (read binding).
    #[must_use]
    pub fn field_index(&self, column_id: &str) -> Option<usize> {
        self.by_column_id.get(column_id).copied()
    }

    /// External column id for a declared field name (write encoding).
    #[must_use]
    pub fn column_id(&self, field: &str) -> Option<&'static str> {
        self.by_field.get(field).copied()
    }

    /// Number of declared column-bearing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }
}
