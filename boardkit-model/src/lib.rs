//! Row models, metadata mapping and item binding.
//!
//! Connects application-defined row types to the typed column codec:
//! - [`Row`] — the trait a row type implements by declaring its
//!   column-bearing fields (and at most one group / assets / updates
//!   composite field each) as `'static` accessor tables
//! - [`ColumnMap`] — the per-row-type field name / external column id
//!   association, resolved once and cached on the binder
//! - [`RowBinder`] — validates a row type, populates rows from fetched
//!   items, and extracts ordered column values for the write flow
//!
//! All of it is synchronous and free of shared mutable state; one
//! binder can serve any number of threads.

mod binder;
mod error;
mod map;
mod row;

pub use binder::RowBinder;
pub use error::{BindError, BindResult};
pub use map::ColumnMap;
pub use row::{ColumnField, CompositeBinding, CompositeKind, Row};
