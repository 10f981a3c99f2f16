//! Column type tags as they appear in read responses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of column type tags the platform reports for a raw
/// column reading.
///
/// `Subtasks` is a pseudo-kind: readings carrying it are recognized and
/// skipped, never parsed or bound. `Unknown` absorbs tags added to the
/// platform after this enumeration was written, so one unfamiliar
/// column cannot fail deserialization of a whole response; the parser
/// reports it as an unsupported column type instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Text,
    LongText,
    #[serde(rename = "numbers")]
    Number,
    Checkbox,
    Status,
    Dropdown,
    Date,
    Timeline,
    Link,
    #[serde(rename = "tags")]
    Tag,
    Email,
    Phone,
    Rating,
    ColorPicker,
    File,
    Subtasks,
    #[serde(other)]
    Unknown,
}

impl ColumnKind {
    /// The wire form of the tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LongText => "long_text",
            Self::Number => "numbers",
            Self::Checkbox => "checkbox",
            Self::Status => "status",
            Self::Dropdown => "dropdown",
            Self::Date => "date",
            Self::Timeline => "timeline",
            Self::Link => "link",
            Self::Tag => "tags",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Rating => "rating",
            Self::ColorPicker => "color_picker",
            Self::File => "file",
            Self::Subtasks => "subtasks",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
