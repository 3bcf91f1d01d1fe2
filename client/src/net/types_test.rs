use super::*;

// =============================================================
// Operator
// =============================================================

#[test]
fn operator_decodes_expanded_children() {
    let op: Operator = serde_json::from_value(serde_json::json!({
        "id": "op-7",
        "name": "Ayşe",
        "surname": "Yılmaz",
        "icon": "https://cdn.example/ayse.png",
        "staff_type": { "name": "Operatör" },
        "shift_type": { "name": "Gece" },
        "createdAt": "2020-01-01"
    }))
    .unwrap();

    assert_eq!(op.id, "op-7");
    assert_eq!(op.display_name(), "Ayşe Yılmaz");
    assert_eq!(op.icon.as_deref(), Some("https://cdn.example/ayse.png"));
    assert_eq!(op.staff_type_name(), "Operatör");
    assert_eq!(op.shift_type_name(), "Gece");
}

#[test]
fn operator_accepts_numeric_id() {
    let op: Operator = serde_json::from_value(serde_json::json!({
        "id": 42,
        "name": "Can",
        "surname": "Demir"
    }))
    .unwrap();
    assert_eq!(op.id, "42");
}

#[test]
fn operator_missing_children_render_placeholder() {
    let op: Operator = serde_json::from_value(serde_json::json!({
        "id": "1",
        "name": "Can",
        "surname": "Demir",
        "staff_type": null
    }))
    .unwrap();
    assert!(op.icon.is_none());
    assert_eq!(op.staff_type_name(), EMPTY_FIELD);
    assert_eq!(op.shift_type_name(), EMPTY_FIELD);
}

#[test]
fn operator_rejects_boolean_id() {
    let result = serde_json::from_value::<Operator>(serde_json::json!({
        "id": true,
        "name": "Can",
        "surname": "Demir"
    }));
    assert!(result.is_err());
}

// =============================================================
// Mission
// =============================================================

#[test]
fn mission_field_formats_scalars_and_named_objects() {
    let mission: Mission = serde_json::from_value(serde_json::json!({
        "id": 11,
        "status": "completed",
        "vehicle": { "name": "Kamyon 12" },
        "approved": true,
        "note": "",
        "extra": [1, 2]
    }))
    .unwrap();

    assert_eq!(mission.id().as_deref(), Some("11"));
    assert_eq!(mission.field("status").as_deref(), Some("completed"));
    assert_eq!(mission.field("vehicle").as_deref(), Some("Kamyon 12"));
    assert_eq!(mission.field("approved").as_deref(), Some("Evet"));
    assert_eq!(mission.field("note"), None);
    assert_eq!(mission.field("extra"), None);
    assert_eq!(mission.field("missing"), None);
}

#[test]
fn mission_list_preserves_server_order() {
    let missions: Vec<Mission> = serde_json::from_value(serde_json::json!([
        { "id": "m-3", "createdAt": "2021-03-01" },
        { "id": "m-1", "createdAt": "2021-01-01" },
        { "id": "m-2", "createdAt": "2021-02-01" }
    ]))
    .unwrap();

    let ids: Vec<_> = missions.iter().filter_map(Mission::id).collect();
    assert_eq!(ids, vec!["m-3", "m-1", "m-2"]);
}
