//! Write-format encoding: per-kind JSON fragments and the mutation
//! payload encoder.
//!
//! The platform's write mutation takes a single JSON object (as text)
//! whose keys are external column ids and whose values follow a
//! per-kind fragment grammar. Fragments interpolate payload text
//! verbatim, so the final payload is re-parsed as a self-check before
//! it is handed back.

use crate::error::{ColumnError, ColumnResult};
use crate::value::ColumnValue;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

impl ColumnValue {
    /// Encodes this value's fragment of the mutation JSON, keyed by its
    /// external id.
    ///
    /// Every write-capable kind emits an explicit `null` (or its
    /// documented empty form) when the value is absent. Write-
    /// unsupported kinds and values with no external id fail.
    pub fn fragment(&self) -> ColumnResult<String> {
        let id = self.id().ok_or_else(|| {
            ColumnError::malformed(self.kind(), "missing external id")
        })?;

        match self {
            Self::Text(v) => Ok(match v.text() {
                Some(text) if !text.is_empty() => format!("\"{id}\":\"{text}\""),
                _ => null_fragment(id),
            }),

            Self::LongText(v) => Ok(match v.text() {
                Some(text) if !text.is_empty() => {
                    format!("\"{id}\":{{\"text\":\"{text}\"}}")
                }
                _ => null_fragment(id),
            }),

            Self::Number(v) => Ok(match v.number() {
                Some(number) => format!("\"{id}\":\"{number}\""),
                None => null_fragment(id),
            }),

            Self::Checkbox(v) => Ok(if v.is_checked() {
                format!("\"{id}\":{{\"checked\":\"true\"}}")
            } else {
                null_fragment(id)
            }),

            Self::Status(v) => Ok(match (v.label(), v.index()) {
                (Some(label), _) if !label.is_empty() => {
                    format!("\"{id}\":{{\"label\":\"{label}\"}}")
                }
                (_, Some(index)) => format!("\"{id}\":{{\"index\":\"{index}\"}}"),
                _ => null_fragment(id),
            }),

            Self::Dropdown(v) => {
                if !v.labels().is_empty() {
                    Ok(format!("\"{id}\":{{\"labels\":[{}]}}", quoted_list(v.labels())))
                } else if let Some(label) = v.label().filter(|l| !l.is_empty()) {
                    Ok(format!("\"{id}\":{{\"labels\":[\"{label}\"]}}"))
                } else if let Some(label_id) = v.label_id() {
                    Ok(format!("\"{id}\":\"{label_id}\""))
                } else {
                    Ok(null_fragment(id))
                }
            }

            Self::Date(v) => Ok(match v.date() {
                Some(date) if v.include_time() => format!(
                    "\"{id}\":{{\"date\":\"{}\",\"time\":\"{}\"}}",
                    date.format(DATE_FORMAT),
                    date.format(TIME_FORMAT),
                ),
                Some(date) => {
                    format!("\"{id}\":{{\"date\":\"{}\"}}", date.format(DATE_FORMAT))
                }
                None => null_fragment(id),
            }),

            Self::Timeline(v) => match (v.from(), v.to()) {
                (Some(from), Some(to)) => Ok(format!(
                    "\"{id}\":{{\"from\":\"{}\",\"to\":\"{}\"}}",
                    from.format(DATE_FORMAT),
                    to.format(DATE_FORMAT),
                )),
                (None, None) => Ok(null_fragment(id)),
                _ => Err(ColumnError::malformed(
                    self.kind(),
                    "timeline requires both endpoints or neither",
                )),
            },

            Self::Link(v) => Ok(match v.url() {
                Some(url) => {
                    let text = v.text().unwrap_or(url);
                    format!("\"{id}\":{{\"url\":\"{url}\",\"text\":\"{text}\"}}")
                }
                None => null_fragment(id),
            }),

            Self::Tag(v) => {
                let ids = v
                    .tag_ids()
                    .iter()
                    .map(u64::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                Ok(format!("\"{id}\":{{\"tag_ids\":[{ids}]}}"))
            }

            Self::Email(v) => Ok(match v.email() {
                Some(email) if !email.is_empty() => {
                    let text = v.message().unwrap_or(email);
                    format!("\"{id}\":{{\"email\":\"{email}\",\"text\":\"{text}\"}}")
                }
                _ => null_fragment(id),
            }),

            Self::Phone(v) => Ok(match v.phone() {
                Some(phone) if !phone.is_empty() => match v.country_code() {
                    Some(country) => format!(
                        "\"{id}\":{{\"phone\":\"{phone}\",\"countryShortName\":\"{country}\"}}"
                    ),
                    None => format!("\"{id}\":{{\"phone\":\"{phone}\"}}"),
                },
                _ => null_fragment(id),
            }),

            Self::Rating(v) => Ok(format!(
                "\"{id}\":{{\"rating\":{}}}",
                v.rating().unwrap_or(0)
            )),

            Self::ColorPicker(_) | Self::File(_) => {
                Err(ColumnError::UnsupportedColumnType(self.kind()))
            }
        }
    }
}

fn null_fragment(id: &str) -> String {
    format!("\"{id}\":null")
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("\"{item}\""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Serializes an ordered list of column values into the single JSON
/// object bound to the write mutation's `column_values` argument.
///
/// Accepts iterators of `&ColumnValue` or of `Option<&ColumnValue>`;
/// `None` entries are skipped. Fragments are joined in input order
/// into a buffer pre-sized from their summed lengths. Carriage returns
/// and line feeds are stripped from the final text (the platform
/// rejects literal newlines inside the JSON argument), and the result
/// is re-parsed as JSON; failure of that self-check signals an encoder
/// defect, not bad user input.
pub fn column_values_json<'a, I, V>(values: I) -> ColumnResult<String>
where
    I: IntoIterator<Item = V>,
    V: Into<Option<&'a ColumnValue>>,
{
    let fragments = values
        .into_iter()
        .filter_map(Into::into)
        .map(ColumnValue::fragment)
        .collect::<ColumnResult<Vec<_>>>()?;

    let body: usize = fragments.iter().map(String::len).sum();
    let mut out = String::with_capacity(body + fragments.len().saturating_sub(1) + 2);

    out.push('{');
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(fragment);
    }
    out.push('}');

    out.retain(|c| c != '\r' && c != '\n');

    serde_json::from_str::<serde_json::Value>(&out)?;
    Ok(out)
}
