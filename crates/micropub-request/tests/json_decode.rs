use micropub_request::{decode_json, try_decode_json, DecodeError, Deletion};
use serde_json::{json, Value};

const URL: &str = "https://example.com/posts/hello-world";

#[test]
fn rejects_null_empty_string_and_empty_object() {
    assert_eq!(decode_json(&Value::Null), None);
    assert_eq!(decode_json(&json!("")), None);
    assert_eq!(decode_json(&json!({})), None);
    assert_eq!(decode_json(&json!(42)), None);
}

#[test]
fn basic_h_entry() {
    let req = decode_json(&json!({
        "type": ["h-entry"],
        "properties": {"content": ["Hello World"]}
    }))
    .unwrap();
    assert_eq!(
        req.to_json(),
        json!({
            "type": "h-entry",
            "action": "create",
            "properties": {"content": ["Hello World"]},
            "commands": {}
        })
    );
}

#[test]
fn top_level_access_token_is_ignored() {
    let req = decode_json(&json!({
        "type": ["h-entry"],
        "access_token": "2ab96390c7dbe3439de74d0c9b0b1767",
        "properties": {"content": ["Hello World"], "access_token": ["leak"]}
    }))
    .unwrap();
    let props = req.properties().unwrap();
    assert!(!props.contains_key("access_token"));
    assert_eq!(props.len(), 1);
}

#[test]
fn html_content_is_kept_verbatim() {
    let req = decode_json(&json!({
        "type": ["h-entry"],
        "properties": {"content": [{"html": "<b>Hello</b> World"}]}
    }))
    .unwrap();
    assert_eq!(
        req.properties().unwrap()["content"],
        vec![json!({"html": "<b>Hello</b> World"})]
    );
}

#[test]
fn command_is_extracted() {
    let req = decode_json(&json!({
        "type": ["h-entry"],
        "properties": {"content": ["Hello World"], "mp-slug": ["hello-world"]}
    }))
    .unwrap();
    assert_eq!(req.commands().unwrap()["slug"], vec![json!("hello-world")]);
    assert!(!req.properties().unwrap().contains_key("mp-slug"));
}

#[test]
fn bare_command_prefix_is_dropped() {
    let req = decode_json(&json!({
        "type": ["h-entry"],
        "properties": {"content": ["Hello World"], "mp-": ["test"]}
    }))
    .unwrap();
    assert!(req.commands().unwrap().is_empty());
    assert_eq!(req.properties().unwrap().len(), 1);
}

#[test]
fn malformed_type_is_rejected() {
    assert_eq!(
        decode_json(&json!({"type": "h-entry", "properties": {"content": ["x"]}})),
        None
    );
    assert_eq!(decode_json(&json!({"type": [], "properties": {"content": ["x"]}})), None);
}

#[test]
fn creation_requires_properties() {
    assert_eq!(
        try_decode_json(&json!({"type": ["h-entry"]})),
        Err(DecodeError::MissingProperties)
    );
    assert_eq!(
        try_decode_json(&json!({"type": ["h-entry"], "properties": {}})),
        Err(DecodeError::MissingProperties)
    );
    assert_eq!(
        try_decode_json(&json!({"type": ["h-entry"], "properties": ["content"]})),
        Err(DecodeError::MissingProperties)
    );
}

#[test]
fn malformed_properties_are_dropped() {
    let req = decode_json(&json!({
        "type": ["h-entry"],
        "properties": {
            "content": "Hello World",
            "photo": {"value": "https://example.com/a.jpg"},
            "category": [],
            "name": ["Hello"]
        }
    }))
    .unwrap();
    let props = req.properties().unwrap();
    assert_eq!(props.keys().collect::<Vec<_>>(), ["name"]);
}

#[test]
fn delete_request() {
    let req = decode_json(&json!({"action": "delete", "url": URL})).unwrap();
    assert_eq!(req.to_json(), json!({"action": "delete", "url": URL}));
}

#[test]
fn delete_without_url_is_rejected() {
    assert_eq!(
        try_decode_json(&json!({"action": "delete"})),
        Err(DecodeError::MissingUrl)
    );
}

#[test]
fn update_replace() {
    let req = decode_json(&json!({
        "action": "update",
        "url": URL,
        "replace": {"content": ["Goodbye World"]}
    }))
    .unwrap();
    assert_eq!(
        req.to_json(),
        json!({
            "action": "update",
            "url": URL,
            "update": {
                "replace": {"content": ["Goodbye World"]},
                "add": {},
                "delete": {}
            }
        })
    );
}

#[test]
fn update_add() {
    let req = decode_json(&json!({
        "action": "update",
        "url": URL,
        "add": {"category": ["indieweb"]}
    }))
    .unwrap();
    assert_eq!(req.update().unwrap().add["category"], vec![json!("indieweb")]);
}

#[test]
fn update_delete_values() {
    let req = decode_json(&json!({
        "action": "update",
        "url": URL,
        "delete": {"category": ["indieweb"]}
    }))
    .unwrap();
    match &req.update().unwrap().delete {
        Deletion::Values(map) => assert_eq!(map["category"], vec![json!("indieweb")]),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn update_delete_properties() {
    let req = decode_json(&json!({
        "action": "update",
        "url": URL,
        "delete": ["category"]
    }))
    .unwrap();
    assert_eq!(
        req.update().unwrap().delete,
        Deletion::Properties(vec!["category".to_string()])
    );
}

#[test]
fn bare_string_delta_leaves_empty_update() {
    let req = decode_json(&json!({"action": "update", "url": URL, "replace": "foo"})).unwrap();
    assert_eq!(
        req.to_json()["update"],
        json!({"replace": {}, "add": {}, "delete": {}})
    );
}

#[test]
fn non_array_delta_entries_are_dropped() {
    let req = decode_json(&json!({
        "action": "update",
        "url": URL,
        "replace": {"content": "Goodbye World"},
        "delete": {"category": "indieweb"}
    }))
    .unwrap();
    assert_eq!(
        req.to_json()["update"],
        json!({"replace": {}, "add": {}, "delete": {}})
    );
}

#[test]
fn mixed_delta_entries_keep_valid_ones() {
    let req = decode_json(&json!({
        "action": "update",
        "url": URL,
        "add": {"category": ["indieweb"], "syndication": "https://x.example"}
    }))
    .unwrap();
    let add = &req.update().unwrap().add;
    assert_eq!(add.len(), 1);
    assert!(add.contains_key("category"));
}

#[test]
fn converts_to_microformats_without_commands() {
    let req = decode_json(&json!({
        "type": ["h-entry"],
        "properties": {"content": ["Hello World"], "mp-slug": ["hello-world"]}
    }))
    .unwrap();
    assert_eq!(
        req.to_microformats(),
        Some(json!({"type": ["h-entry"], "properties": {"content": ["Hello World"]}}))
    );
}

#[test]
fn action_does_not_convert_to_microformats() {
    let req = decode_json(&json!({"action": "delete", "url": URL})).unwrap();
    assert_eq!(req.to_microformats(), None);
}
