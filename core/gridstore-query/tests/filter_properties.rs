//! Property-based tests for filter flattening.
//!
//! - Every known operator emits `field + suffix` with the leaf's value
//! - Unknown operators emit the bare field name
//! - The number of parameters never exceeds the number of leaves

use gridstore_query::{FilterNode, FilterOperator, QueryParams};
use proptest::prelude::*;
use serde_json::json;

const KNOWN: [(&str, &str); 8] = [
    ("=", ""),
    (">=", "__gte"),
    ("<=", "__lte"),
    (">", "__gt"),
    ("<", "__lt"),
    ("contains", "__icontains"),
    ("startswith", "__istartswith"),
    ("endswith", "__iendswith"),
];

fn field_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z_]{0,15}").unwrap()
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,30}").unwrap()
}

fn known_operator_strategy() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop::sample::select(KNOWN.to_vec())
}

fn flatten(node: &FilterNode) -> QueryParams {
    let mut params = QueryParams::new();
    node.apply_to(&mut params);
    params
}

proptest! {
    #[test]
    fn known_operator_emits_suffixed_field(
        field in field_strategy(),
        (op, suffix) in known_operator_strategy(),
        value in value_strategy(),
    ) {
        let node = FilterNode::from_value(&json!([field, op, value])).unwrap().unwrap();
        let params = flatten(&node);
        let name = format!("{field}{suffix}");

        prop_assert_eq!(params.len(), 1);
        prop_assert_eq!(params.get(&name), Some(value.as_str()));
    }

    #[test]
    fn unknown_operator_emits_plain_field(
        field in field_strategy(),
        op in prop::string::string_regex("[!~#][a-z]{0,6}").unwrap(),
        value in value_strategy(),
    ) {
        prop_assume!(FilterOperator::parse(&op).suffix().is_empty());
        let node = FilterNode::from_value(&json!([field, op, value])).unwrap().unwrap();
        let params = flatten(&node);

        prop_assert_eq!(params.get(&field), Some(value.as_str()));
    }

    #[test]
    fn params_never_exceed_leaves(
        leaves in prop::collection::vec(
            (field_strategy(), known_operator_strategy(), value_strategy()),
            0..12,
        ),
    ) {
        let mut items = Vec::new();
        for (field, (op, _), value) in &leaves {
            if !items.is_empty() {
                items.push(json!("and"));
            }
            items.push(json!([field, op, value]));
        }
        // Connector-only group contributes no leaves.
        items.push(json!([["and"]]));

        let node = FilterNode::from_value(&serde_json::Value::Array(items)).unwrap().unwrap();
        prop_assert_eq!(node.leaf_count(), leaves.len());
        prop_assert!(flatten(&node).len() <= leaves.len());
    }
}
