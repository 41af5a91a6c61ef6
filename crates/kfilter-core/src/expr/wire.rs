use crate::{error::FilterError, expr::FilterExpr, policy::BuildPolicy, value::Value};
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

///
/// ExprWire
/// Serde decode shape for the canonical form; leaves are re-validated
/// through the strict policy before they become a `FilterExpr`.
///

#[derive(Deserialize)]
#[serde(tag = "op")]
enum ExprWire {
    #[serde(rename = "EQ")]
    Eq { key: String, value: Value },
    #[serde(rename = "IN")]
    In { key: String, values: Vec<Value> },
    #[serde(rename = "GT")]
    Gt { key: String, value: Value },
    #[serde(rename = "LT")]
    Lt { key: String, value: Value },
    #[serde(rename = "AND")]
    And { conditions: Vec<Self> },
    #[serde(rename = "OR")]
    Or { conditions: Vec<Self> },
    #[serde(rename = "NOT")]
    Not { condition: Box<Self> },
}

impl ExprWire {
    // Decode recursively while enforcing leaf invariants.
    fn into_expr(self) -> Result<FilterExpr, FilterError> {
        let policy = BuildPolicy::STRICT;

        match self {
            Self::Eq { key, value } => policy.eq(key, value),
            Self::In { key, values } => policy.in_iter(key, values),
            Self::Gt { key, value } => policy.gt(key, value),
            Self::Lt { key, value } => policy.lt(key, value),
            Self::And { conditions } => Ok(FilterExpr::And(Self::into_children(conditions)?)),
            Self::Or { conditions } => Ok(FilterExpr::Or(Self::into_children(conditions)?)),
            Self::Not { condition } => Ok(FilterExpr::Not(Box::new(condition.into_expr()?))),
        }
    }

    fn into_children(conditions: Vec<Self>) -> Result<Vec<FilterExpr>, FilterError> {
        conditions.into_iter().map(Self::into_expr).collect()
    }
}

impl<'de> Deserialize<'de> for FilterExpr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = ExprWire::deserialize(deserializer)?;
        wire.into_expr().map_err(serde::de::Error::custom)
    }
}

impl FilterExpr {
    /// Rebuild a tree from its canonical mapping.
    pub fn from_canonical(value: &JsonValue) -> Result<Self, FilterError> {
        Self::deserialize(value).map_err(|err| FilterError::Decode(err.to_string()))
    }
}
