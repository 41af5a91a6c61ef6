use crate::{
    error::FilterError,
    expr::{Comparison, FilterExpr, FilterOp, Membership},
    value::{FilterValue, Value},
};
use serde::{Deserialize, Serialize};

///
/// BuildPolicy
///
/// Validation applied when constructing leaf predicates.
///
/// The strict default rejects an empty key and an empty `IN` list since no
/// backend can act on either. `PERMISSIVE` accepts both and produces a
/// vacuous predicate instead. Non-finite floats are rejected under every
/// policy because they have no canonical form.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct BuildPolicy {
    pub allow_empty_key: bool,
    pub allow_empty_values: bool,
}

impl BuildPolicy {
    pub const STRICT: Self = Self {
        allow_empty_key: false,
        allow_empty_values: false,
    };

    pub const PERMISSIVE: Self = Self {
        allow_empty_key: true,
        allow_empty_values: true,
    };

    // --- Comparison ---

    pub fn eq(
        &self,
        key: impl Into<String>,
        value: impl FilterValue,
    ) -> Result<FilterExpr, FilterError> {
        self.comparison(FilterOp::Eq, key.into(), value)
            .map(FilterExpr::Eq)
    }

    pub fn gt(
        &self,
        key: impl Into<String>,
        value: impl FilterValue,
    ) -> Result<FilterExpr, FilterError> {
        self.comparison(FilterOp::Gt, key.into(), value)
            .map(FilterExpr::Gt)
    }

    pub fn lt(
        &self,
        key: impl Into<String>,
        value: impl FilterValue,
    ) -> Result<FilterExpr, FilterError> {
        self.comparison(FilterOp::Lt, key.into(), value)
            .map(FilterExpr::Lt)
    }

    // --- Membership ---

    pub fn in_iter<I>(&self, key: impl Into<String>, values: I) -> Result<FilterExpr, FilterError>
    where
        I: IntoIterator,
        I::Item: FilterValue,
    {
        let key = key.into();
        self.check_key(FilterOp::In, &key)?;

        let values = values
            .into_iter()
            .map(|v| {
                v.into_value().ok_or_else(|| {
                    reject(FilterError::NonFiniteFloat {
                        op: FilterOp::In,
                        key: key.clone(),
                    })
                })
            })
            .collect::<Result<Vec<Value>, _>>()?;

        if values.is_empty() && !self.allow_empty_values {
            return Err(reject(FilterError::EmptyValues { key }));
        }

        Ok(FilterExpr::In(Membership::new(key, values)))
    }

    fn comparison(
        self,
        op: FilterOp,
        key: String,
        value: impl FilterValue,
    ) -> Result<Comparison, FilterError> {
        self.check_key(op, &key)?;

        let value = value
            .into_value()
            .ok_or_else(|| {
                reject(FilterError::NonFiniteFloat {
                    op,
                    key: key.clone(),
                })
            })?;

        Ok(Comparison::new(key, value))
    }

    fn check_key(self, op: FilterOp, key: &str) -> Result<(), FilterError> {
        if key.is_empty() && !self.allow_empty_key {
            return Err(reject(FilterError::EmptyKey { op }));
        }

        Ok(())
    }
}

fn reject(err: FilterError) -> FilterError {
    tracing::debug!(class = %err.class(), error = %err, "rejected filter predicate");

    err
}

///
/// TESTS
///
