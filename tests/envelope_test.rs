use rewards_admin::envelope::{decode_items, is_recognizable, unwrap_collection, unwrap_record};
use rewards_admin::models::Reward;
use serde_json::json;

#[test]
fn collection_nested_under_data_key() {
    let body = json!({ "success": true, "data": { "rewards": [{ "id": 1 }, { "id": 2 }] } });
    assert_eq!(unwrap_collection(&body, "rewards").len(), 2);
}

#[test]
fn collection_as_data_array() {
    let body = json!({ "success": true, "data": [{ "id": 1 }] });
    assert_eq!(unwrap_collection(&body, "rewards"), vec![json!({ "id": 1 })]);
}

#[test]
fn collection_as_bare_array_is_unchanged() {
    let body = json!([{ "id": 1 }, { "id": 2 }, { "id": 3 }]);
    let items = unwrap_collection(&body, "rewards");
    assert_eq!(json!(items), body);

    // unwrapping an already unwrapped list changes nothing
    let again = unwrap_collection(&json!(items), "rewards");
    assert_eq!(again, items);
}

#[test]
fn collection_under_resource_key() {
    let body = json!({ "rewards": [{ "id": 9 }] });
    assert_eq!(unwrap_collection(&body, "rewards").len(), 1);
}

#[test]
fn data_key_ignored_without_success_flag() {
    let body = json!({ "success": false, "data": { "rewards": [{ "id": 1 }] } });
    assert!(unwrap_collection(&body, "rewards").is_empty());
}

#[test]
fn unknown_collection_shape_is_empty() {
    assert!(unwrap_collection(&json!({ "items": [1, 2] }), "rewards").is_empty());
    assert!(unwrap_collection(&json!("nope"), "rewards").is_empty());
}

#[test]
fn record_shapes() {
    let nested = json!({ "success": true, "data": { "history": { "id": 5 } } });
    assert_eq!(unwrap_record(&nested, "history"), Some(json!({ "id": 5 })));

    let flat = json!({ "success": true, "data": { "id": 5, "amount": "1.00" } });
    assert_eq!(unwrap_record(&flat, "history"), Some(json!({ "id": 5, "amount": "1.00" })));

    let keyed = json!({ "history": { "id": 5 } });
    assert_eq!(unwrap_record(&keyed, "history"), Some(json!({ "id": 5 })));

    let bare = json!({ "id": 5 });
    assert_eq!(unwrap_record(&bare, "history"), Some(json!({ "id": 5 })));

    assert_eq!(unwrap_record(&json!([1, 2]), "history"), None);
    assert_eq!(unwrap_record(&json!({ "success": true }), "history"), None);
}

#[test]
fn shape_check() {
    assert!(is_recognizable(&json!([]), "rewards"));
    assert!(is_recognizable(&json!({ "success": true }), "rewards"));
    assert!(is_recognizable(&json!({ "data": [] }), "rewards"));
    assert!(is_recognizable(&json!({ "rewards": [] }), "rewards"));
    assert!(!is_recognizable(&json!({ "message": "ok" }), "rewards"));
    assert!(!is_recognizable(&json!({ "data": "text" }), "rewards"));
}

#[test]
fn malformed_items_are_skipped() {
    let items = vec![
        json!({ "id": 1, "reward_name": "Spin" }),
        json!("not an object"),
        json!({ "id": 2 }),
    ];
    let rewards: Vec<Reward> = decode_items(items, "rewards");
    assert_eq!(rewards.len(), 2);
    assert_eq!(rewards[0].reward_name, "Spin");
    assert_eq!(rewards[1].reward_name, "Untitled Reward");
}

#[test]
fn numeric_and_string_success_flags_unwrap() {
    let body = json!({ "success": 1, "data": { "rewards": [{ "id": 1 }, { "id": 2 }] } });
    assert_eq!(unwrap_collection(&body, "rewards").len(), 2);

    let body = json!({ "success": "1", "data": { "reward": { "id": 7 } } });
    assert_eq!(unwrap_record(&body, "reward"), Some(json!({ "id": 7 })));

    let body = json!({ "success": 0, "data": { "rewards": [{ "id": 1 }] } });
    assert!(unwrap_collection(&body, "rewards").is_empty());
}
