use pretty_assertions::assert_eq;
use serde_json::json;
use strata_types::LocaleItem;

#[test]
fn serializes_as_locale_keyed_object() {
    let mut title = LocaleItem::single("en-US", "hehehe".to_string());
    title.set("de", "hehehe-de".to_string());

    let value = serde_json::to_value(&title).unwrap();
    assert_eq!(value, json!({"en-US": "hehehe", "de": "hehehe-de"}));
}

#[test]
fn roundtrip_preserves_values() {
    let original = LocaleItem::single("en-US", "hehehe".to_string());
    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: LocaleItem<String> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, original);
    assert_eq!(decoded.get("en-US"), Some(&"hehehe".to_string()));
}

#[test]
fn get_and_set() {
    let mut item = LocaleItem::new();
    assert!(item.is_empty());
    assert!(item.get("en-US").is_none());

    assert!(item.set("en-US", 1).is_none());
    assert_eq!(item.set("en-US", 2), Some(1));
    assert_eq!(item.get("en-US"), Some(&2));
    assert!(!item.is_empty());
}

#[test]
fn collects_from_pairs() {
    let item: LocaleItem<i32> = vec![("en-US".to_string(), 1), ("de".to_string(), 2)]
        .into_iter()
        .collect();
    assert_eq!(item.get("de"), Some(&2));
}

#[test]
fn nested_value_types() {
    // locale maps also hold structured values, not just strings
    let item = LocaleItem::single("en-US", json!({"fileName": "doge.jpg"}));
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value, json!({"en-US": {"fileName": "doge.jpg"}}));
}

#[test]
fn default_is_empty() {
    let item: LocaleItem<String> = LocaleItem::default();
    assert!(item.is_empty());
}
