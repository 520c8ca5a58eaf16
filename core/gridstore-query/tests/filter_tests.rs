use gridstore_query::{FilterNode, FilterOperator, QueryError, QueryParams};
use pretty_assertions::assert_eq;
use serde_json::json;

fn flatten(value: serde_json::Value) -> QueryParams {
    let node = FilterNode::from_value(&value).unwrap().unwrap();
    let mut params = QueryParams::new();
    node.apply_to(&mut params);
    params
}

// ── Operator map ─────────────────────────────────────────────────

#[test]
fn operator_suffixes() {
    assert_eq!(FilterOperator::parse("=").suffix(), "");
    assert_eq!(FilterOperator::parse(">=").suffix(), "__gte");
    assert_eq!(FilterOperator::parse("<=").suffix(), "__lte");
    assert_eq!(FilterOperator::parse(">").suffix(), "__gt");
    assert_eq!(FilterOperator::parse("<").suffix(), "__lt");
    assert_eq!(FilterOperator::parse("contains").suffix(), "__icontains");
    assert_eq!(FilterOperator::parse("startswith").suffix(), "__istartswith");
    assert_eq!(FilterOperator::parse("endswith").suffix(), "__iendswith");
}

#[test]
fn unknown_operator_has_empty_suffix() {
    let op = FilterOperator::parse("notcontains");
    assert_eq!(op, FilterOperator::Other("notcontains".to_string()));
    assert_eq!(op.suffix(), "");
    assert_eq!(op.as_str(), "notcontains");
}

#[test]
fn operator_display_roundtrips_token() {
    for token in ["=", ">=", "<=", ">", "<", "contains", "startswith", "endswith", "<>"] {
        assert_eq!(FilterOperator::parse(token).to_string(), token);
    }
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn single_leaf() {
    let node = FilterNode::from_value(&json!(["age", ">", 30])).unwrap().unwrap();
    assert_eq!(node, FilterNode::leaf("age", ">", 30));
    assert_eq!(node.leaf_count(), 1);
}

#[test]
fn grid_style_group_with_connectors() {
    let node = FilterNode::from_value(&json!([
        ["name", "contains", "ro"],
        "and",
        ["age", ">=", 18]
    ]))
    .unwrap()
    .unwrap();

    assert_eq!(
        node,
        FilterNode::group(vec![
            FilterNode::leaf("name", "contains", "ro"),
            FilterNode::leaf("age", ">=", 18),
        ])
    );
}

#[test]
fn binary_shorthand_means_equality() {
    let node = FilterNode::from_value(&json!(["country", "IT"])).unwrap().unwrap();
    assert_eq!(node, FilterNode::leaf("country", FilterOperator::Equal, "IT"));
}

#[test]
fn negation_is_flattened() {
    let params = flatten(json!(["!", ["name", "=", "Rome"]]));
    assert_eq!(params.get("name"), Some("Rome"));
    assert_eq!(params.len(), 1);
}

#[test]
fn non_string_field_is_rejected() {
    let err = FilterNode::from_value(&json!([1, "=", 2])).unwrap_err();
    assert!(matches!(err, QueryError::InvalidFilter(_)));
}

#[test]
fn non_string_operator_means_equality() {
    let params = flatten(json!(["name", null, "x"]));
    assert_eq!(params.get("name"), Some("x"));
    assert_eq!(params.len(), 1);
}

#[test]
fn non_string_operator_keeps_sibling_leaves() {
    let params = flatten(json!([["name", 5, "x"], "and", ["age", ">", 3]]));
    assert_eq!(params.get("name"), Some("x"));
    assert_eq!(params.get("age__gt"), Some("3"));
}

#[test]
fn overlong_leaf_is_rejected() {
    let err = FilterNode::from_value(&json!(["age", "=", 1, 2])).unwrap_err();
    assert!(format!("{err}").contains("invalid filter"));
}

#[test]
fn deserializes_from_json() {
    let node: FilterNode = serde_json::from_str(r#"[["a","=",1],"or",["b","<",2]]"#).unwrap();
    assert_eq!(node.leaf_count(), 2);
}

#[test]
fn bare_string_deserializes_to_empty_group() {
    let node: FilterNode = serde_json::from_str(r#""and""#).unwrap();
    assert_eq!(node, FilterNode::group(vec![]));
}

// ── Flattening ───────────────────────────────────────────────────

#[test]
fn leaf_emits_field_plus_suffix() {
    let params = flatten(json!(["name", "startswith", "Mi"]));
    assert_eq!(params.get("name__istartswith"), Some("Mi"));
}

#[test]
fn unknown_operator_emits_plain_field() {
    let params = flatten(json!(["name", "<>", "Rome"]));
    assert_eq!(params.get("name"), Some("Rome"));
}

#[test]
fn connector_array_token_is_dropped() {
    let params = flatten(json!([["and"], ["f1", "=", "v1"], ["f2", ">", "v2"]]));
    assert_eq!(params.len(), 2);
    assert_eq!(params.get("f1"), Some("v1"));
    assert_eq!(params.get("f2__gt"), Some("v2"));
}

#[test]
fn or_groups_flatten_like_and() {
    let params = flatten(json!([
        [["city", "=", "Rome"], "or", ["city__x", "=", "Milan"]],
        "and",
        ["age", "<", 40]
    ]));
    assert_eq!(
        params.as_pairs(),
        &[
            ("city".to_string(), "Rome".to_string()),
            ("city__x".to_string(), "Milan".to_string()),
            ("age__lt".to_string(), "40".to_string()),
        ]
    );
}

#[test]
fn duplicate_parameter_last_write_wins() {
    let params = flatten(json!([
        ["city", "=", "Rome"],
        "or",
        ["city", "=", "Milan"]
    ]));
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("city"), Some("Milan"));
}

#[test]
fn depth_first_order() {
    let params = flatten(json!([
        [["a", "=", 1], "and", [["b", "=", 2], "and", ["c", "=", 3]]],
        "and",
        ["d", "=", 4]
    ]));
    let names: Vec<&str> = params.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}
