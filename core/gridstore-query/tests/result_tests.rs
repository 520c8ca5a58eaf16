use gridstore_query::{LoadResult, QueryError};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn envelope_count_is_total() {
    let result = LoadResult::from_response(json!({
        "count": 37,
        "next": "http://api/contacts/?limit=3&offset=3",
        "previous": null,
        "results": [{"id": 1}, {"id": 2}, {"id": 3}]
    }))
    .unwrap();

    assert_eq!(result.total_count, 37);
    assert_eq!(result.data.len(), 3);
    assert_eq!(result.data[2]["id"], json!(3));
}

#[test]
fn bare_array_counts_items() {
    let body = json!([{"id": 1}, {"id": 2}, {"id": 3}, {"id": 4}, {"id": 5}]);
    let result = LoadResult::from_response(body).unwrap();
    assert_eq!(result.total_count, 5);
    assert_eq!(result.data.len(), 5);
}

#[test]
fn envelope_without_count_uses_len() {
    let result = LoadResult::from_response(json!({"results": [{"id": 9}]})).unwrap();
    assert_eq!(result.total_count, 1);
}

#[test]
fn null_body_is_empty() {
    let result = LoadResult::from_response(serde_json::Value::Null).unwrap();
    assert_eq!(result, LoadResult::default());
    assert_eq!(result.total_count, 0);
}

#[test]
fn object_without_results_is_empty_page() {
    let result = LoadResult::from_response(json!({"count": 0})).unwrap();
    assert_eq!(result, LoadResult::default());

    let result = LoadResult::from_response(json!({"detail": "oops"})).unwrap();
    assert_eq!(result, LoadResult::default());
}

#[test]
fn null_results_keeps_count() {
    let result = LoadResult::from_response(json!({"results": null, "count": 0})).unwrap();
    assert_eq!(result, LoadResult::default());

    let result = LoadResult::from_response(json!({"results": null, "count": 12})).unwrap();
    assert!(result.data.is_empty());
    assert_eq!(result.total_count, 12);
}

#[test]
fn scalar_body_is_invalid() {
    let err = LoadResult::from_response(json!("oops")).unwrap_err();
    assert!(matches!(err, QueryError::InvalidResponse(_)));
}

#[test]
fn scalar_records_are_invalid() {
    let err = LoadResult::from_response(json!([1, 2])).unwrap_err();
    assert!(format!("{err}").contains("record 0"));
}

#[test]
fn serializes_camel_case() {
    let result = LoadResult::from_response(json!([{"id": 1}])).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json, json!({"data": [{"id": 1}], "totalCount": 1}));
}
