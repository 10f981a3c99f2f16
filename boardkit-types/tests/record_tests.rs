use boardkit_types::{Board, BoardKind, ColumnKind, Item, ItemId, State};
use serde_json::json;

// ── Items ────────────────────────────────────────────────────────

#[test]
fn item_deserializes_from_a_query_response() {
    let item: Item = serde_json::from_value(json!({
        "id": "3641816676",
        "name": "Launch checklist",
        "state": "active",
        "group": {"id": "topics", "title": "Topics", "color": "#037f4c"},
        "column_values": [
            {"id": "text0", "text": "Andrew Eberle", "type": "text"},
            {"id": "numbers9", "text": "10", "type": "numbers"},
            {"id": "subtasks3", "text": "Subitem 1", "type": "subtasks"}
        ],
        "assets": [
            {"id": "1019362429", "name": "spec.pdf", "public_url": "https://cdn.example.com/spec.pdf"}
        ],
        "updates": [
            {"id": "2259492586", "text_body": "shipped"}
        ]
    }))
    .unwrap();

    assert_eq!(item.id, ItemId::new(3641816676));
    assert_eq!(item.name, "Launch checklist");
    assert_eq!(item.state, Some(State::Active));
    assert_eq!(item.group.unwrap().id.as_deref(), Some("topics"));
    assert_eq!(item.column_values.len(), 3);
    assert_eq!(item.column_values[1].kind, ColumnKind::Number);
    assert_eq!(item.column_values[2].kind, ColumnKind::Subtasks);
    assert_eq!(item.assets[0].name.as_deref(), Some("spec.pdf"));
    assert_eq!(item.updates[0].text_body.as_deref(), Some("shipped"));
}

#[test]
fn item_tolerates_missing_collections() {
    let item: Item = serde_json::from_value(json!({
        "id": 42,
        "name": "Bare item"
    }))
    .unwrap();

    assert!(item.group.is_none());
    assert!(item.column_values.is_empty());
    assert!(item.assets.is_empty());
    assert!(item.updates.is_empty());
}

#[test]
fn column_reading_text_may_be_null() {
    let item: Item = serde_json::from_value(json!({
        "id": "1",
        "name": "x",
        "column_values": [{"id": "date4", "text": null, "type": "date"}]
    }))
    .unwrap();

    assert_eq!(item.column_values[0].text, None);
}

// ── Boards ───────────────────────────────────────────────────────

#[test]
fn board_deserializes_with_paged_items() {
    let board: Board = serde_json::from_value(json!({
        "id": "1717613454",
        "name": "Roadmap",
        "board_kind": "public",
        "workspace_id": "2632514",
        "items_count": 2,
        "items_page": {
            "cursor": "MSw5NzI4MDA5MDAsaV9YcmxJb0p1VEdYc1VWeGlxbDRJLDg4MiwzNXw0MTQ1NzU1MTE5",
            "items": [
                {"id": "1", "name": "First"},
                {"id": "2", "name": "Second"}
            ]
        }
    }))
    .unwrap();

    assert_eq!(board.name.as_deref(), Some("Roadmap"));
    assert_eq!(board.board_kind, Some(BoardKind::Public));
    assert_eq!(board.workspace_id, Some(2632514));
    let page = board.items_page.unwrap();
    assert!(page.cursor.is_some());
    assert_eq!(page.items.len(), 2);
}

#[test]
fn board_workspace_id_accepts_the_numeric_form() {
    let board: Board = serde_json::from_value(json!({
        "id": 1,
        "workspace_id": 2632514
    }))
    .unwrap();
    assert_eq!(board.workspace_id, Some(2632514));
}

#[test]
fn board_folder_id_may_be_null() {
    let board: Board = serde_json::from_value(json!({
        "id": 1,
        "board_folder_id": null
    }))
    .unwrap();
    assert_eq!(board.board_folder_id, None);
}
