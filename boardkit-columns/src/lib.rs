//! Typed column values and the mutation JSON codec.
//!
//! This crate holds the core of the data-mapping engine:
//! - [`ColumnValue`] — the closed union of column kinds, each owning
//!   an external id and a typed payload
//! - [`parse_column`] — builds the matching value from a raw
//!   `{id, text, type}` reading
//! - [`column_values_json`] — serializes an ordered list of values
//!   into the JSON object the write mutation takes
//!
//! Row models and the metadata-driven binder that connect these to
//! application types live in `boardkit-model`.

mod encode;
mod error;
mod parse;
mod value;

pub use encode::column_values_json;
pub use error::{ColumnError, ColumnResult};
pub use parse::parse_column;
pub use value::{
    CheckboxValue, ColorPickerValue, ColumnValue, DateValue, DropdownValue, EmailValue, FileValue,
    LinkValue, LongTextValue, NumberValue, PhoneValue, RatingValue, StatusValue, TagValue,
    TextValue, TimelineValue,
};
