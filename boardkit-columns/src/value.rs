//! The closed set of typed column values.
//!
//! Each kind owns its payload plus an optional external column id.
//! The id is assigned at construction (or defaulted from row metadata
//! during the write flow) and never mutated afterwards; payloads are
//! reached through getters so construction-time invariants hold for
//! the value's lifetime.
//!
//! `From`/`TryFrom` conversions move values between the kind-specific
//! structs and the [`ColumnValue`] union, so row fields stay typed to
//! one kind without any runtime type guessing.

use crate::error::ColumnError;
use boardkit_types::ColumnKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

macro_rules! payload_conversions {
    ($payload:ident, $variant:ident) => {
        impl $payload {
            /// Attaches the external column id.
            #[must_use]
            pub fn with_id(mut self, id: impl Into<String>) -> Self {
                self.id = Some(id.into());
                self
            }

            /// The external column id, when assigned.
            #[must_use]
            pub fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }
        }

        impl From<$payload> for ColumnValue {
            fn from(value: $payload) -> Self {
                ColumnValue::$variant(value)
            }
        }

        impl TryFrom<ColumnValue> for $payload {
            type Error = ColumnError;

            fn try_from(value: ColumnValue) -> Result<Self, Self::Error> {
                match value {
                    ColumnValue::$variant(payload) => Ok(payload),
                    other => Err(ColumnError::KindMismatch {
                        expected: ColumnKind::$variant,
                        found: other.kind(),
                    }),
                }
            }
        }
    };
}

/// A plain text column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextValue {
    id: Option<String>,
    text: Option<String>,
}

impl TextValue {
    /// Creates a text value. Double quotes are replaced with
    /// apostrophes, since the write grammar interpolates the text
    /// verbatim.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: Some(text.into().replace('"', "'")),
        }
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A long text column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LongTextValue {
    id: Option<String>,
    text: Option<String>,
}

impl LongTextValue {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: Some(text.into()),
        }
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A numeric column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberValue {
    id: Option<String>,
    number: Option<f64>,
}

impl NumberValue {
    #[must_use]
    pub fn new(number: f64) -> Self {
        Self {
            id: None,
            number: Some(number),
        }
    }

    #[must_use]
    pub fn number(&self) -> Option<f64> {
        self.number
    }
}

/// A checkbox column. The platform reports checked as the literal
/// text `"v"` on read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckboxValue {
    id: Option<String>,
    checked: bool,
}

impl CheckboxValue {
    #[must_use]
    pub fn new(checked: bool) -> Self {
        Self { id: None, checked }
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

/// A status column, addressed either by label or by index.
///
/// When both are present the label wins at encode time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusValue {
    id: Option<String>,
    label: Option<String>,
    index: Option<u64>,
}

impl StatusValue {
    /// Creates a status addressed by its label.
    #[must_use]
    pub fn by_label(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: Some(label.into()),
            index: None,
        }
    }

    /// Creates a status addressed by its numeric index.
    #[must_use]
    pub fn by_index(index: u64) -> Self {
        Self {
            id: None,
            label: None,
            index: Some(index),
        }
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn index(&self) -> Option<u64> {
        self.index
    }
}

/// A dropdown column.
///
/// Encode precedence: the labels array, then a bare label, then a
/// numeric label id. Labels are case sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownValue {
    id: Option<String>,
    labels: Vec<String>,
    label: Option<String>,
    label_id: Option<u64>,
}

impl DropdownValue {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            id: None,
            labels,
            label: None,
            label_id: None,
        }
    }

    /// Creates a dropdown holding a single bare label.
    #[must_use]
    pub fn single(label: impl Into<String>) -> Self {
        Self {
            id: None,
            labels: Vec::new(),
            label: Some(label.into()),
            label_id: None,
        }
    }

    /// Creates a dropdown addressed by a numeric label id.
    #[must_use]
    pub fn by_id(label_id: u64) -> Self {
        Self {
            id: None,
            labels: Vec::new(),
            label: None,
            label_id: Some(label_id),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn label_id(&self) -> Option<u64> {
        self.label_id
    }
}

/// A date column, optionally carrying a significant time of day.
///
/// `include_time` is a property of the value, not of the type tag: a
/// value parsed from date-only text never claims a time of day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateValue {
    id: Option<String>,
    date: Option<NaiveDateTime>,
    include_time: bool,
}

impl DateValue {
    /// Creates a date-only value.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: None,
            date: Some(date.and_time(NaiveTime::MIN)),
            include_time: false,
        }
    }

    /// Creates a value whose time of day is significant.
    #[must_use]
    pub fn date_time(date_time: NaiveDateTime) -> Self {
        Self {
            id: None,
            date: Some(date_time),
            include_time: true,
        }
    }

    #[must_use]
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    #[must_use]
    pub fn include_time(&self) -> bool {
        self.include_time
    }
}

/// A timeline column spanning two dates.
///
/// The write grammar requires both endpoints or neither; a value
/// holding exactly one fails to encode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineValue {
    id: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl TimelineValue {
    #[must_use]
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            id: None,
            from: Some(from),
            to: Some(to),
        }
    }

    /// Sets the start date.
    #[must_use]
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the end date.
    #[must_use]
    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    #[must_use]
    pub fn from(&self) -> Option<NaiveDate> {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> Option<NaiveDate> {
        self.to
    }
}

/// A link column holding a URL and display text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkValue {
    id: Option<String>,
    url: Option<String>,
    text: Option<String>,
}

impl LinkValue {
    /// Creates a link whose display text is the URL itself.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: None,
            url: Some(url.into()),
            text: None,
        }
    }

    /// Creates a link with explicit display text.
    #[must_use]
    pub fn with_text(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: None,
            url: Some(url.into()),
            text: Some(text.into()),
        }
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Display text; falls back to the URL at encode time when unset.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

/// A tag column.
///
/// The write grammar only carries numeric tag ids. Literal labels are
/// a read-side fallback for boards whose tag text is not numeric and
/// never encode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagValue {
    id: Option<String>,
    tag_ids: Vec<u64>,
    labels: Vec<String>,
}

impl TagValue {
    #[must_use]
    pub fn new(tag_ids: Vec<u64>) -> Self {
        Self {
            id: None,
            tag_ids,
            labels: Vec::new(),
        }
    }

    /// Creates a tag value from literal labels (read-side fallback).
    #[must_use]
    pub fn from_labels(labels: Vec<String>) -> Self {
        Self {
            id: None,
            tag_ids: Vec::new(),
            labels,
        }
    }

    #[must_use]
    pub fn tag_ids(&self) -> &[u64] {
        &self.tag_ids
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// An email column holding an address and a display message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailValue {
    id: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

impl EmailValue {
    /// Creates an email value whose display text is the address.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: None,
            email: Some(email.into()),
            message: None,
        }
    }

    /// Creates an email value with explicit display text.
    #[must_use]
    pub fn with_message(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: None,
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Display text; falls back to the address at encode time.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// A phone column, optionally carrying an ISO country short name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneValue {
    id: Option<String>,
    phone: Option<String>,
    country_code: Option<String>,
}

impl PhoneValue {
    #[must_use]
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            id: None,
            phone: Some(phone.into()),
            country_code: None,
        }
    }

    /// Creates a phone value with a country short name (emitted as
    /// `countryShortName`).
    #[must_use]
    pub fn with_country(phone: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            id: None,
            phone: Some(phone.into()),
            country_code: Some(country_code.into()),
        }
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }
}

/// A rating column, 0 to 5 stars. An unset rating encodes as 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingValue {
    id: Option<String>,
    rating: Option<u8>,
}

impl RatingValue {
    #[must_use]
    pub fn new(rating: u8) -> Self {
        Self {
            id: None,
            rating: Some(rating),
        }
    }

    #[must_use]
    pub fn rating(&self) -> Option<u8> {
        self.rating
    }
}

/// A color picker column. Readable, but the platform exposes no write
/// grammar for it; encoding fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorPickerValue {
    id: Option<String>,
    color: Option<String>,
}

impl ColorPickerValue {
    #[must_use]
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            id: None,
            color: Some(color.into()),
        }
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

/// A file column: a read-only list of absolute URLs. Uploading files
/// goes through a different mutation entirely; encoding fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileValue {
    id: Option<String>,
    urls: Vec<String>,
}

impl FileValue {
    #[must_use]
    pub fn new(urls: Vec<String>) -> Self {
        Self { id: None, urls }
    }

    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.urls
    }
}

payload_conversions!(TextValue, Text);
payload_conversions!(LongTextValue, LongText);
payload_conversions!(NumberValue, Number);
payload_conversions!(CheckboxValue, Checkbox);
payload_conversions!(StatusValue, Status);
payload_conversions!(DropdownValue, Dropdown);
payload_conversions!(DateValue, Date);
payload_conversions!(TimelineValue, Timeline);
payload_conversions!(LinkValue, Link);
payload_conversions!(TagValue, Tag);
payload_conversions!(EmailValue, Email);
payload_conversions!(PhoneValue, Phone);
payload_conversions!(RatingValue, Rating);
payload_conversions!(ColorPickerValue, ColorPicker);
payload_conversions!(FileValue, File);

/// One typed column value of any supported kind.
///
/// The tagged union the parser produces and the mutation encoder
/// consumes. Matching is exhaustive in both, so adding a kind is a
/// compile-time-checked, localized change.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(TextValue),
    LongText(LongTextValue),
    Number(NumberValue),
    Checkbox(CheckboxValue),
    Status(StatusValue),
    Dropdown(DropdownValue),
    Date(DateValue),
    Timeline(TimelineValue),
    Link(LinkValue),
    Tag(TagValue),
    Email(EmailValue),
    Phone(PhoneValue),
    Rating(RatingValue),
    ColorPicker(ColorPickerValue),
    File(FileValue),
}

impl ColumnValue {
    /// The kind tag of this value. Never changes after construction.
    #[must_use]
    pub const fn kind(&self) -> ColumnKind {
        match self {
            Self::Text(_) => ColumnKind::Text,
            Self::LongText(_) => ColumnKind::LongText,
            Self::Number(_) => ColumnKind::Number,
            Self::Checkbox(_) => ColumnKind::Checkbox,
            Self::Status(_) => ColumnKind::Status,
            Self::Dropdown(_) => ColumnKind::Dropdown,
            Self::Date(_) => ColumnKind::Date,
            Self::Timeline(_) => ColumnKind::Timeline,
            Self::Link(_) => ColumnKind::Link,
            Self::Tag(_) => ColumnKind::Tag,
            Self::Email(_) => ColumnKind::Email,
            Self::Phone(_) => ColumnKind::Phone,
            Self::Rating(_) => ColumnKind::Rating,
            Self::ColorPicker(_) => ColumnKind::ColorPicker,
            Self::File(_) => ColumnKind::File,
        }
    }

    /// The external column id, when assigned.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Text(v) => v.id(),
            Self::LongText(v) => v.id(),
            Self::Number(v) => v.id(),
            Self::Checkbox(v) => v.id(),
            Self::Status(v) => v.id(),
            Self::Dropdown(v) => v.id(),
            Self::Date(v) => v.id(),
            Self::Timeline(v) => v.id(),
            Self::Link(v) => v.id(),
            Self::Tag(v) => v.id(),
            Self::Email(v) => v.id(),
            Self::Phone(v) => v.id(),
            Self::Rating(v) => v.id(),
            Self::ColorPicker(v) => v.id(),
            Self::File(v) => v.id(),
        }
    }

    /// Whether this kind has a write grammar.
    #[must_use]
    pub const fn supports_write(&self) -> bool {
        !matches!(self, Self::ColorPicker(_) | Self::File(_))
    }

    /// Fills the external id when the value does not carry one, as the
    /// write flow does from row metadata. A caller-assigned id is kept.
    #[must_use]
    pub fn with_default_id(self, id: &str) -> Self {
        if self.id().is_some() {
            return self;
        }
        match self {
            Self::Text(v) => Self::Text(v.with_id(id)),
            Self::LongText(v) => Self::LongText(v.with_id(id)),
            Self::Number(v) => Self::Number(v.with_id(id)),
            Self::Checkbox(v) => Self::Checkbox(v.with_id(id)),
            Self::Status(v) => Self::Status(v.with_id(id)),
            Self::Dropdown(v) => Self::Dropdown(v.with_id(id)),
            Self::Date(v) => Self::Date(v.with_id(id)),
            Self::Timeline(v) => Self::Timeline(v.with_id(id)),
            Self::Link(v) => Self::Link(v.with_id(id)),
            Self::Tag(v) => Self::Tag(v.with_id(id)),
            Self::Email(v) => Self::Email(v.with_id(id)),
            Self::Phone(v) => Self::Phone(v.with_id(id)),
            Self::Rating(v) => Self::Rating(v.with_id(id)),
            Self::ColorPicker(v) => Self::ColorPicker(v.with_id(id)),
            Self::File(v) => Self::File(v.with_id(id)),
        }
    }
}
