//! Conversion of raw column readings into typed column values.
//!
//! A reading's type tag picks the variant; the raw display text is
//! decoded per kind. Tags with no read format (and tags this library
//! does not know) are reported as unsupported rather than guessed at.

use crate::error::{ColumnError, ColumnResult};
use crate::value::{
    CheckboxValue, ColorPickerValue, ColumnValue, DateValue, DropdownValue, FileValue, LinkValue,
    LongTextValue, NumberValue, StatusValue, TagValue, TextValue, TimelineValue,
};
use boardkit_types::{ColumnKind, ColumnReading};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex_lite::Regex;
use std::sync::OnceLock;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator between the two halves of a timeline reading, and between
/// a link reading's display text and its URL.
const TEXT_SEPARATOR: &str = " - ";

fn url_pattern() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| {
        Regex::new(r"(http|ftp|https)://([\w_-]+(?:(?:\.[\w_-]+)+))([\w.,@?^=%&:/~+#-]*[\w@?^=%&/~+#-])")
            .expect("url pattern is valid")
    })
}

/// Builds the typed column value matching a raw reading.
///
/// Readings with empty or absent text produce the kind's empty value.
/// The `subtasks` pseudo-kind is never parsed (the binder skips it
/// first); reaching it here is an unsupported-type error, as are
/// `email`, `phone` and `rating` readings, which have no defined read
/// format, and tags unknown to this library.
pub fn parse_column(reading: &ColumnReading) -> ColumnResult<ColumnValue> {
    let text = reading.text.as_deref().filter(|t| !t.is_empty());

    let value: ColumnValue = match reading.kind {
        ColumnKind::Text => text.map(TextValue::new).unwrap_or_default().into(),

        ColumnKind::LongText => text.map(LongTextValue::new).unwrap_or_default().into(),

        ColumnKind::Number => match text {
            Some(t) => NumberValue::new(t.trim().parse::<f64>().map_err(|e| {
                ColumnError::malformed(reading.kind, format!("{t:?}: {e}"))
            })?),
            None => NumberValue::default(),
        }
        .into(),

        ColumnKind::Checkbox => CheckboxValue::new(matches!(text, Some("v"))).into(),

        ColumnKind::Status => text.map(StatusValue::by_label).unwrap_or_default().into(),

        ColumnKind::Dropdown => match text {
            Some(t) => DropdownValue::new(split_trimmed(t)),
            None => DropdownValue::default(),
        }
        .into(),

        ColumnKind::Date => match text {
            Some(t) => parse_date(t)?,
            None => DateValue::default(),
        }
        .into(),

        ColumnKind::Timeline => match text {
            Some(t) => parse_timeline(t)?,
            None => TimelineValue::default(),
        }
        .into(),

        ColumnKind::Link => match text {
            Some(t) => parse_link(t)?,
            None => LinkValue::default(),
        }
        .into(),

        ColumnKind::Tag => match text {
            Some(t) => parse_tags(t),
            None => TagValue::default(),
        }
        .into(),

        ColumnKind::ColorPicker => text
            .map(ColorPickerValue::new)
            .unwrap_or_default()
            .into(),

        ColumnKind::File => match text {
            Some(t) => FileValue::new(
                split_trimmed(t)
                    .into_iter()
                    .filter(|token| url_pattern().is_match(token))
                    .collect(),
            ),
            None => FileValue::default(),
        }
        .into(),

        ColumnKind::Email
        | ColumnKind::Phone
        | ColumnKind::Rating
        | ColumnKind::Subtasks
        | ColumnKind::Unknown => {
            return Err(ColumnError::UnsupportedColumnType(reading.kind));
        }
    };

    Ok(value.with_default_id(&reading.id))
}

/// Splits comma-separated text, trimming entries and dropping empties.
fn split_trimmed(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

fn parse_date(text: &str) -> ColumnResult<DateValue> {
    if let Ok(date_time) = NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT) {
        if date_time.time() == NaiveTime::MIN {
            return Ok(DateValue::new(date_time.date()));
        }
        return Ok(DateValue::date_time(date_time));
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(DateValue::new)
        .map_err(|e| ColumnError::malformed(ColumnKind::Date, format!("{text:?}: {e}")))
}

fn parse_timeline(text: &str) -> ColumnResult<TimelineValue> {
    let parts: Vec<&str> = text.split(TEXT_SEPARATOR).collect();
    let &[from, to] = parts.as_slice() else {
        return Err(ColumnError::malformed(
            ColumnKind::Timeline,
            format!("expected \"<from> - <to>\", got {text:?}"),
        ));
    };

    let parse = |part: &str| {
        NaiveDate::parse_from_str(part, DATE_FORMAT)
            .map_err(|e| ColumnError::malformed(ColumnKind::Timeline, format!("{part:?}: {e}")))
    };

    Ok(TimelineValue::new(parse(from)?, parse(to)?))
}

/// Link readings intermix display text and the URL as
/// `<display> - <url>`; the URL is located by pattern and whatever
/// remains (separator stripped) becomes the display text.
fn parse_link(text: &str) -> ColumnResult<LinkValue> {
    let Some(url) = url_pattern().find(text).map(|m| m.as_str()) else {
        return Err(ColumnError::malformed(
            ColumnKind::Link,
            format!("no absolute url in {text:?}"),
        ));
    };

    let remainder = text.replace(url, "");
    let display = match remainder.strip_suffix(TEXT_SEPARATOR) {
        Some(stripped) if !stripped.is_empty() => Some(stripped.to_owned()),
        Some(_) => None,
        None => {
            let trimmed = remainder.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
    };

    Ok(match display {
        Some(display) => LinkValue::with_text(url, display),
        None => LinkValue::new(url),
    })
}

/// Tag readings are comma-separated. When every token is a numeric tag
/// id the value carries ids; otherwise all tokens are kept as literal
/// labels (the write grammar only emits ids, so labels never encode).
fn parse_tags(text: &str) -> TagValue {
    let tokens = split_trimmed(text);
    let ids: Result<Vec<u64>, _> = tokens.iter().map(|token| token.parse::<u64>()).collect();

    match ids {
        Ok(tag_ids) => TagValue::new(tag_ids),
        Err(_) => TagValue::from_labels(tokens),
    }
}
