
use crate::{
    error::FilterError,
    expr::{FilterExpr, FilterOp},
    value::Value,
};
use serde_json::{Value as JsonValue, json};

fn eq(key: &str, value: impl crate::value::FilterValue) -> FilterExpr {
    FilterExpr::eq(key, value).expect("valid EQ leaf")
}

// Count how many AND levels a right-leaning chain nests.
fn and_chain_depth(value: &JsonValue) -> usize {
    match value.get("op").and_then(JsonValue::as_str) {
        Some("AND") => 1 + and_chain_depth(&value["conditions"][1]),
        _ => 0,
    }
}

#[test]
fn leaves_carry_their_operator_tag() {
    let cases = [
        (eq("a", 1), FilterOp::Eq, "EQ"),
        (FilterExpr::gt("a", 1).unwrap(), FilterOp::Gt, "GT"),
        (FilterExpr::lt("a", 1).unwrap(), FilterOp::Lt, "LT"),
        (FilterExpr::in_iter("a", [1, 2]).unwrap(), FilterOp::In, "IN"),
    ];

    for (expr, op, tag) in cases {
        assert_eq!(expr.op(), op);
        assert!(op.is_leaf());
        assert_eq!(expr.to_canonical()["op"], json!(tag));
        assert_eq!(expr.key(), Some("a"));
    }
}

#[test]
fn equals_scenario() {
    assert_eq!(
        eq("status", "active").to_canonical(),
        json!({"op": "EQ", "key": "status", "value": "active"})
    );
}

#[test]
fn includes_keeps_value_order() {
    let expr = FilterExpr::in_iter("category", ["c", "a", "b"]).unwrap();

    assert_eq!(
        expr.to_canonical(),
        json!({"op": "IN", "key": "category", "values": ["c", "a", "b"]})
    );
    assert_eq!(
        expr.values(),
        Some(
            &[
                Value::Text("c".to_string()),
                Value::Text("a".to_string()),
                Value::Text("b".to_string()),
            ][..]
        )
    );
}

#[test]
fn range_conjunction_scenario() {
    let expr = FilterExpr::gt("price", 10).unwrap() & FilterExpr::lt("price", 100).unwrap();

    assert_eq!(
        expr.to_canonical(),
        json!({
            "op": "AND",
            "conditions": [
                {"op": "GT", "key": "price", "value": 10},
                {"op": "LT", "key": "price", "value": 100},
            ]
        })
    );
}

#[test]
fn negation_scenario() {
    let expr = !eq("deleted", true);

    assert_eq!(
        expr.to_canonical(),
        json!({"op": "NOT", "condition": {"op": "EQ", "key": "deleted", "value": true}})
    );
}

#[test]
fn mixed_nesting_scenario() {
    let expr = eq("a", 1) | (eq("b", 2) & eq("c", 3));

    assert_eq!(
        expr.to_canonical(),
        json!({
            "op": "OR",
            "conditions": [
                {"op": "EQ", "key": "a", "value": 1},
                {"op": "AND", "conditions": [
                    {"op": "EQ", "key": "b", "value": 2},
                    {"op": "EQ", "key": "c", "value": 3},
                ]},
            ]
        })
    );
}

#[test]
fn and_does_not_flatten_nested_conjunctions() {
    let expr = eq("x", 1).and(eq("y", 2)).and(eq("z", 3));

    match &expr {
        FilterExpr::And(children) => {
            assert_eq!(children.len(), 2);
            assert!(matches!(children[0], FilterExpr::And(_)));
        }
        other => panic!("expected And, got {other:?}"),
    }

    assert_eq!(
        expr.to_canonical()["conditions"][0]["conditions"][1],
        json!({"op": "EQ", "key": "y", "value": 2})
    );
}

#[test]
fn duplicate_operands_are_kept() {
    let leaf = eq("a", 1);
    let expr = leaf.clone() | leaf.clone();

    assert_eq!(
        expr.to_canonical()["conditions"],
        json!([leaf.to_canonical(), leaf.to_canonical()])
    );
}

#[test]
fn operators_delegate_to_named_combinators() {
    let (a, b) = (eq("a", 1), eq("b", 2));

    assert_eq!(a.clone() & b.clone(), a.clone().and(b.clone()));
    assert_eq!(a.clone() | b.clone(), a.clone().or(b));
    assert_eq!(!a.clone(), a.not());
}

#[test]
fn composing_leaves_operands_unchanged() {
    let a = eq("a", 1);
    let b = FilterExpr::in_iter("b", ["x", "y"]).unwrap();
    let (before_a, before_b) = (a.to_canonical(), b.to_canonical());

    let _combined = a.clone() & b.clone();
    let _negated = !a.clone();

    assert_eq!(a.to_canonical(), before_a);
    assert_eq!(b.to_canonical(), before_b);
}

#[test]
fn serialization_is_idempotent() {
    let expr = !(eq("a", 1) | FilterExpr::in_iter("b", [1, 2, 3]).unwrap());

    assert_eq!(expr.to_canonical(), expr.to_canonical());
}

#[test]
fn right_leaning_chain_keeps_every_level() {
    const N: usize = 64;

    let mut expr = eq("leaf", 0);
    for i in 1..=N {
        expr = eq("leaf", i64::try_from(i).unwrap()).and(expr);
    }

    assert_eq!(and_chain_depth(&expr.to_canonical()), N);
    assert_eq!(expr.depth(), N + 1);
    assert_eq!(expr.node_count(), 2 * N + 1);
}

#[test]
fn n_ary_builders_preserve_order_and_allow_zero_arity() {
    let none: [FilterExpr; 0] = [];

    let all = FilterExpr::all([eq("a", 1), eq("b", 2), eq("c", 3)]);
    assert_eq!(all.children().len(), 3);
    assert_eq!(all.children()[2].key(), Some("c"));

    assert_eq!(
        FilterExpr::all(none.clone()).to_canonical(),
        json!({"op": "AND", "conditions": []})
    );
    assert_eq!(
        FilterExpr::any(none.clone()).to_canonical(),
        json!({"op": "OR", "conditions": []})
    );
    assert_eq!(FilterExpr::any(none).depth(), 1);
}

#[test]
fn optional_combinators_skip_none() {
    let base = eq("a", 1);

    assert_eq!(base.clone().and_option(None), base);
    assert_eq!(base.clone().or_option(None), base);
    assert_eq!(
        base.clone().and_option(Some(eq("b", 2))),
        base.clone() & eq("b", 2)
    );
    assert_eq!(
        base.clone().or_option(Some(eq("b", 2))),
        base | eq("b", 2)
    );
}

#[test]
fn serialize_matches_canonical_form() {
    let expr = eq("a", 1) | !(FilterExpr::gt("p", 2.5).unwrap() & eq("n", None::<i64>));
    let encoded = serde_json::to_value(&expr).expect("serialize expr");

    assert_eq!(encoded, expr.to_canonical());
}

#[test]
fn canonical_form_decodes_back() {
    let expr = (FilterExpr::gt("price", 10).unwrap() & FilterExpr::lt("price", 99.5).unwrap())
        | !FilterExpr::in_iter("tag", ["x", "y"]).unwrap();

    let decoded = FilterExpr::from_canonical(&expr.to_canonical()).expect("decode");
    assert_eq!(decoded, expr);

    let text = serde_json::to_string(&expr).expect("encode");
    let decoded: FilterExpr = serde_json::from_str(&text).expect("decode text");
    assert_eq!(decoded, expr);
}

#[test]
fn decode_revalidates_leaves() {
    let err = FilterExpr::from_canonical(&json!({"op": "EQ", "key": "", "value": 1}))
        .expect_err("empty key must be rejected");
    assert!(matches!(err, FilterError::Decode(ref msg) if msg.contains("non-empty key")));

    let err = FilterExpr::from_canonical(&json!({"op": "IN", "key": "k", "values": []}))
        .expect_err("empty values must be rejected");
    assert!(matches!(err, FilterError::Decode(_)));
}

#[test]
fn decode_rejects_unknown_shapes() {
    let bad = [
        json!({"op": "XOR", "conditions": []}),
        json!({"key": "a", "value": 1}),
        json!({"op": "EQ", "key": "a", "value": [1, 2]}),
        json!({"op": "NOT"}),
        json!([1, 2, 3]),
    ];

    for value in bad {
        assert!(
            FilterExpr::from_canonical(&value).is_err(),
            "accepted malformed input {value}"
        );
    }
}

#[test]
fn display_names_each_node() {
    let expr = (FilterExpr::gt("price", 10).unwrap() & FilterExpr::lt("price", 100).unwrap())
        | !eq("status", "deleted")
        | FilterExpr::in_iter("tag", ["a", "b"]).unwrap();

    assert_eq!(
        expr.to_string(),
        r#"(((price > 10 AND price < 100) OR NOT status = "deleted") OR tag IN ["a", "b"])"#
    );
    assert_eq!(FilterExpr::all(Vec::new()).to_string(), "TRUE");
    assert_eq!(FilterExpr::any(Vec::new()).to_string(), "FALSE");
}

#[test]
fn trees_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FilterExpr>();

    let expr = std::sync::Arc::new(eq("a", 1) & eq("b", 2));
    let expected = expr.to_canonical();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let expr = std::sync::Arc::clone(&expr);
            std::thread::spawn(move || expr.to_canonical())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("reader thread"), expected);
    }
}

#[test]
fn tracing_is_exercised_under_a_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let expr = eq("a", 1) & eq("b", 2);
        assert_eq!(expr.to_canonical()["op"], json!("AND"));
        assert!(FilterExpr::eq("", 1).is_err());
    });
}

#[test]
fn negative_zero_serializes_as_given() {
    let expr = FilterExpr::gt("t", -0.0).unwrap();
    let value = expr.to_canonical()["value"].as_f64().expect("number");

    assert!(value.is_sign_negative());
    assert_eq!(serde_json::to_string(&expr).unwrap(), r#"{"key":"t","op":"GT","value":-0.0}"#);
}
