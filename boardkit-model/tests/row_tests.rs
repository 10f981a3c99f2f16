use boardkit_columns::{ColumnError, ColumnValue, NumberValue, StatusValue, TextValue};
use boardkit_model::{columns, ColumnField, ColumnMap, CompositeKind, Row};
use boardkit_types::ItemId;

#[derive(Default)]
struct Card {
    id: ItemId,
    name: String,
    title: Option<TextValue>,
    estimate: Option<NumberValue>,
    status: Option<StatusValue>,
}

impl Row for Card {
    fn set_identity(&mut self, id: ItemId, name: &str) {
        self.id = id;
        self.name = name.to_owned();
    }

    fn columns() -> &'static [ColumnField<Self>] {
        columns!(Card {
            title,
            estimate => "numbers9",
            status => "status7",
        })
    }
}

// ── Field table ──────────────────────────────────────────────────

#[test]
fn field_table_preserves_declaration_order() {
    let names: Vec<_> = Card::columns().iter().map(|f| f.name).collect();
    assert_eq!(names, ["title", "estimate", "status"]);
}

#[test]
fn column_id_defaults_to_the_field_name() {
    assert_eq!(Card::columns()[0].column_id(), "title");
}

#[test]
fn explicit_override_wins_over_the_field_name() {
    assert_eq!(Card::columns()[1].column_id(), "numbers9");
    assert_eq!(Card::columns()[1].name, "estimate");
}

#[test]
fn set_assigns_a_matching_value() {
    let mut card = Card::default();
    let field = &Card::columns()[0];
    (field.set)(&mut card, TextValue::new("hello").into()).unwrap();
    assert_eq!(card.title.unwrap().text(), Some("hello"));
}

#[test]
fn set_rejects_a_kind_mismatch() {
    let mut card = Card::default();
    let field = &Card::columns()[0];
    let err = (field.set)(&mut card, NumberValue::new(1.0).into()).unwrap_err();
    assert!(matches!(err, ColumnError::KindMismatch { .. }));
    assert!(card.title.is_none());
}

#[test]
fn get_clones_the_field_back_out() {
    let card = Card {
        estimate: Some(NumberValue::new(10.0)),
        ..Card::default()
    };
    let value: Option<ColumnValue> = (Card::columns()[1].get)(&card);
    assert_eq!(value.unwrap(), NumberValue::new(10.0).into());
}

#[test]
fn get_returns_none_for_an_unset_field() {
    assert!((Card::columns()[2].get)(&Card::default()).is_none());
}

// ── Column map ───────────────────────────────────────────────────

#[test]
fn map_resolves_column_ids_to_field_indices() {
    let map = ColumnMap::resolve::<Card>();
    assert_eq!(map.field_index("title"), Some(0));
    assert_eq!(map.field_index("numbers9"), Some(1));
    assert_eq!(map.field_index("status7"), Some(2));
}

#[test]
fn map_does_not_resolve_an_overridden_field_name() {
    let map = ColumnMap::resolve::<Card>();
    assert_eq!(map.field_index("estimate"), None);
}

#[test]
fn map_resolves_field_names_to_column_ids() {
    let map = ColumnMap::resolve::<Card>();
    assert_eq!(map.column_id("title"), Some("title"));
    assert_eq!(map.column_id("estimate"), Some("numbers9"));
    assert_eq!(map.column_id("nope"), None);
}

#[test]
fn map_len_counts_declared_fields() {
    let map = ColumnMap::resolve::<Card>();
    assert_eq!(map.len(), 3);
    assert!(!map.is_empty());
}

// ── Composite kinds ──────────────────────────────────────────────

#[test]
fn composite_kinds_display_their_names() {
    assert_eq!(CompositeKind::Group.to_string(), "group");
    assert_eq!(CompositeKind::Assets.to_string(), "assets");
    assert_eq!(CompositeKind::Updates.to_string(), "updates");
}
