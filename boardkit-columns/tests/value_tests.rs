use boardkit_columns::{
    CheckboxValue, ColumnError, ColumnValue, DateValue, DropdownValue, NumberValue, StatusValue,
    TextValue, TimelineValue,
};
use boardkit_types::ColumnKind;
use chrono::NaiveDate;

// ── Construction & ids ───────────────────────────────────────────

#[test]
fn id_is_unset_until_assigned() {
    let value = TextValue::new("hello");
    assert_eq!(value.id(), None);
}

#[test]
fn with_id_assigns_external_id() {
    let value = NumberValue::new(10.0).with_id("numbers9");
    assert_eq!(value.id(), Some("numbers9"));
}

#[test]
fn text_replaces_double_quotes_with_apostrophes() {
    let value = TextValue::new("a \"quoted\" word");
    assert_eq!(value.text(), Some("a 'quoted' word"));
}

#[test]
fn status_by_label_leaves_index_unset() {
    let value = StatusValue::by_label("Done");
    assert_eq!(value.label(), Some("Done"));
    assert_eq!(value.index(), None);
}

#[test]
fn status_by_index_leaves_label_unset() {
    let value = StatusValue::by_index(2);
    assert_eq!(value.label(), None);
    assert_eq!(value.index(), Some(2));
}

#[test]
fn date_only_constructor_is_not_time_significant() {
    let value = DateValue::new(NaiveDate::from_ymd_opt(2023, 11, 29).unwrap());
    assert!(!value.include_time());
}

#[test]
fn date_time_constructor_is_time_significant() {
    let date = NaiveDate::from_ymd_opt(2023, 11, 29).unwrap();
    let value = DateValue::date_time(date.and_hms_opt(17, 30, 0).unwrap());
    assert!(value.include_time());
}

#[test]
fn timeline_builders_set_each_endpoint() {
    let from = NaiveDate::from_ymd_opt(2023, 11, 29).unwrap();
    let value = TimelineValue::default().with_from(from);
    assert_eq!(value.from(), Some(from));
    assert_eq!(value.to(), None);
}

// ── Union conversions ────────────────────────────────────────────

#[test]
fn payload_upcasts_into_union() {
    let value: ColumnValue = CheckboxValue::new(true).into();
    assert_eq!(value.kind(), ColumnKind::Checkbox);
}

#[test]
fn union_downcasts_into_matching_payload() {
    let value: ColumnValue = NumberValue::new(3.5).with_id("n").into();
    let payload = NumberValue::try_from(value).unwrap();
    assert_eq!(payload.number(), Some(3.5));
    assert_eq!(payload.id(), Some("n"));
}

#[test]
fn union_downcast_rejects_kind_mismatch() {
    let value: ColumnValue = TextValue::new("x").into();
    let err = NumberValue::try_from(value).unwrap_err();
    assert!(matches!(
        err,
        ColumnError::KindMismatch {
            expected: ColumnKind::Number,
            found: ColumnKind::Text,
        }
    ));
}

#[test]
fn kind_is_fixed_at_construction() {
    let value: ColumnValue = DropdownValue::single("Red").into();
    assert_eq!(value.kind(), ColumnKind::Dropdown);
    assert_eq!(value.clone().kind(), value.kind());
}

// ── Default-id fill ──────────────────────────────────────────────

#[test]
fn default_id_fills_a_missing_id() {
    let value: ColumnValue = TextValue::new("x").into();
    assert_eq!(value.with_default_id("text0").id(), Some("text0"));
}

#[test]
fn default_id_never_overwrites_a_caller_assigned_id() {
    let value: ColumnValue = TextValue::new("x").with_id("custom").into();
    assert_eq!(value.with_default_id("text0").id(), Some("custom"));
}

// ── Write capability ─────────────────────────────────────────────

#[test]
fn color_picker_and_file_do_not_support_write() {
    use boardkit_columns::{ColorPickerValue, FileValue};
    let color: ColumnValue = ColorPickerValue::new("#ff5ac4").into();
    let file: ColumnValue = FileValue::new(vec![]).into();
    assert!(!color.supports_write());
    assert!(!file.supports_write());
}

#[test]
fn ordinary_kinds_support_write() {
    let value: ColumnValue = TextValue::new("x").into();
    assert!(value.supports_write());
}
