#![cfg(feature = "serde")]

//! Integration tests for serde support of PersistentList.

use listfold::fold::map;
use listfold::persistent::PersistentList;
use rstest::rstest;

#[rstest]
fn test_list_serializes_as_json_array() {
    let list: PersistentList<i32> = (1..=5).collect();
    assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3,4,5]");
}

#[rstest]
fn test_list_json_roundtrip() {
    let list: PersistentList<i32> = (1..=10).collect();
    let json = serde_json::to_string(&list).unwrap();
    let restored: PersistentList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

#[rstest]
fn test_empty_list_roundtrip() {
    let list: PersistentList<String> = PersistentList::new();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[]");
    let restored: PersistentList<String> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_nested_list_roundtrip() {
    let inner = PersistentList::from_slice(&[1, 2]);
    let nested = map(&PersistentList::from_slice(&[0, 10]), |offset: i32| {
        map(&inner, move |value: i32| value + offset)
    });
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, "[[1,2],[11,12]]");
    let restored: PersistentList<PersistentList<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, nested);
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<PersistentList<i32>, _> = serde_json::from_str("{\"head\": 1}");
    assert!(result.is_err());
}
