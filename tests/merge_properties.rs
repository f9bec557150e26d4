use map_utils::maps::{
    get_length, mapping_from_json, merge, merge_deep, merge_deep_values, merge_missing,
    objects_with_key, to_array, Mapping, Value, ValueType,
};
use serde_json::json;

fn mapping(value: serde_json::Value) -> Mapping {
    mapping_from_json(value).expect("fixture must be a JSON object")
}

#[test]
fn shallow_merge_of_disjoint_maps_is_their_union() {
    let a = mapping(json!({"a": 1, "b": {"x": 1}}));
    let mut b = mapping(json!({"c": "three", "d": [4]}));
    merge(&a, &mut b);

    assert_eq!(
        b,
        mapping(json!({"a": 1, "b": {"x": 1}, "c": "three", "d": [4]}))
    );
}

#[test]
fn shallow_merge_source_wins_on_shared_keys() {
    let a = mapping(json!({"k": {"from": "a"}}));
    let mut b = mapping(json!({"k": {"from": "b", "extra": true}}));
    merge(&a, &mut b);

    assert_eq!(b.get("k"), a.get("k"));
}

#[test]
fn merge_missing_only_adds_absent_keys() {
    let a = mapping(json!({"x": 1, "y": 2, "z": {"deep": 1}}));
    let original = mapping(json!({"x": "keep", "z": {"other": 2}}));
    let mut b = original.clone();
    merge_missing(&a, &mut b);

    for (key, value) in &original {
        assert_eq!(b.get(key), Some(value));
    }
    assert_eq!(b.get("y"), Some(&Value::Integer(2)));
    assert_eq!(b.len(), 3);
}

#[test]
fn merge_deep_follows_documented_examples() {
    let cases = [
        (json!({"a": {"x": 1}}), json!({"a": {"y": 2}}), json!({"a": {"x": 1, "y": 2}})),
        (json!({"a": {"x": 1}}), json!({"a": {"x": 2}}), json!({"a": {"x": 1}})),
        (json!({"a": 1}), json!({"a": {"x": 2}}), json!({"a": 1})),
    ];

    for (src, dest, expected) in cases {
        let src = mapping(src);
        let mut dest = mapping(dest);
        merge_deep(&src, &mut dest);
        assert_eq!(dest, mapping(expected));
    }
}

#[test]
fn merge_deep_leaves_source_untouched() {
    let src = mapping(json!({"a": {"x": 1}}));
    let snapshot = src.clone();
    let mut dest = mapping(json!({"a": {"y": 2}}));
    merge_deep(&src, &mut dest);

    assert_eq!(src, snapshot);
}

#[test]
fn merge_deep_result_is_independent_of_source() {
    let src = mapping(json!({"a": {"x": 1}}));
    let mut dest = Mapping::new();
    merge_deep(&src, &mut dest);

    if let Some(Value::Map(child)) = dest.get_mut("a") {
        child.insert("y".to_string(), Value::from(2));
    }
    assert_eq!(src, mapping(json!({"a": {"x": 1}})));
    assert_eq!(dest, mapping(json!({"a": {"x": 1, "y": 2}})));
}

#[test]
fn merge_deep_values_rejects_null_source() {
    let mut dest = Value::from(json!({"kept": true}));
    let err = merge_deep_values(&Value::Null, &mut dest).unwrap_err();

    assert_eq!(err.code_str(), "maps/invalid-argument");
    assert_eq!(dest, Value::from(json!({"kept": true})));
}

#[test]
fn sizes_and_arrays() {
    assert_eq!(get_length(Some(&Mapping::new())), 0);
    assert_eq!(get_length(None), 0);

    let map = mapping(json!({"a": 1, "b": 2}));
    assert_eq!(get_length(Some(&map)), 2);

    let values = to_array(&map);
    assert_eq!(values.len(), 2);
    assert!(values.contains(&Value::Integer(1)));
    assert!(values.contains(&Value::Integer(2)));
    assert_eq!(values, to_array(&map));
}

#[test]
fn objects_with_key_examples() {
    let map = mapping(json!({"p": {"k": 5}, "q": {}}));
    assert_eq!(
        objects_with_key(&map, "k", None),
        vec![Value::from(json!({"k": 5}))]
    );

    let map = mapping(json!({"p": {"k": 5}}));
    let wanted: ValueType = "string".parse().unwrap();
    assert!(objects_with_key(&map, "k", Some(wanted)).is_empty());
}
