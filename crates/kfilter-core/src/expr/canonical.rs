//! Canonical nested-mapping form consumed by query backends.
//!
//! Shapes are fixed per variant:
//!
//! - `{"op": "EQ" | "GT" | "LT", "key": .., "value": ..}`
//! - `{"op": "IN", "key": .., "values": [..]}`
//! - `{"op": "AND" | "OR", "conditions": [..]}`
//! - `{"op": "NOT", "condition": {..}}`

use crate::{
    expr::{Comparison, FilterExpr, FilterOp, Membership},
    value::Value,
};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

impl FilterExpr {
    /// Serialize this tree into its canonical nested mapping.
    ///
    /// Pure and total: children are emitted depth-first in stored order and
    /// nothing is flattened or deduplicated.
    #[must_use]
    pub fn to_canonical(&self) -> JsonValue {
        tracing::trace!(
            op = %self.op(),
            nodes = self.node_count(),
            depth = self.depth(),
            "serializing filter expression"
        );

        self.canonical()
    }

    fn canonical(&self) -> JsonValue {
        match self {
            Self::Eq(c) => comparison(FilterOp::Eq, c),
            Self::Gt(c) => comparison(FilterOp::Gt, c),
            Self::Lt(c) => comparison(FilterOp::Lt, c),
            Self::In(m) => membership(m),
            Self::And(xs) => composite(FilterOp::And, xs),
            Self::Or(xs) => composite(FilterOp::Or, xs),
            Self::Not(x) => {
                let mut map = tagged(FilterOp::Not);
                map.insert("condition".to_string(), x.canonical());
                JsonValue::Object(map)
            }
        }
    }
}

impl Serialize for FilterExpr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.canonical().serialize(serializer)
    }
}

fn tagged(op: FilterOp) -> Map<String, JsonValue> {
    let mut map = Map::new();
    map.insert("op".to_string(), JsonValue::from(op.as_str()));
    map
}

fn comparison(op: FilterOp, c: &Comparison) -> JsonValue {
    let mut map = tagged(op);
    map.insert("key".to_string(), JsonValue::from(c.key()));
    map.insert("value".to_string(), c.value().to_json());
    JsonValue::Object(map)
}

fn membership(m: &Membership) -> JsonValue {
    let mut map = tagged(FilterOp::In);
    map.insert("key".to_string(), JsonValue::from(m.key()));
    map.insert(
        "values".to_string(),
        JsonValue::Array(m.values().iter().map(Value::to_json).collect()),
    );
    JsonValue::Object(map)
}

fn composite(op: FilterOp, children: &[FilterExpr]) -> JsonValue {
    let mut map = tagged(op);
    map.insert(
        "conditions".to_string(),
        JsonValue::Array(children.iter().map(FilterExpr::canonical).collect()),
    );
    JsonValue::Object(map)
}
