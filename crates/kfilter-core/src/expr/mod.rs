mod canonical;
mod display;
mod wire;

#[cfg(test)]
mod tests;

use crate::{
    error::FilterError,
    policy::BuildPolicy,
    value::{FilterValue, Value},
};
use derive_more::Display;
use std::ops::{BitAnd, BitOr, Not};

///
/// FilterOp
///
/// Operator tag carried in the `op` field of the canonical form.
///
/// IMPORTANT:
/// Tag strings are part of the wire contract and must not be renamed.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum FilterOp {
    #[display("EQ")]
    Eq,
    #[display("IN")]
    In,
    #[display("GT")]
    Gt,
    #[display("LT")]
    Lt,
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
    #[display("NOT")]
    Not,
}

impl FilterOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::In => "IN",
            Self::Gt => "GT",
            Self::Lt => "LT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }

    #[must_use]
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Eq | Self::In | Self::Gt | Self::Lt)
    }
}

///
/// Comparison
/// a single `key op value` leaf, shared by EQ, GT and LT
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comparison {
    key: String,
    value: Value,
}

impl Comparison {
    pub(crate) const fn new(key: String, value: Value) -> Self {
        Self { key, value }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

///
/// Membership
/// `key IN [values]`; list order is kept for reproducible output
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Membership {
    key: String,
    values: Vec<Value>,
}

impl Membership {
    pub(crate) const fn new(key: String, values: Vec<Value>) -> Self {
        Self { key, values }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

///
/// FilterExpr
///
/// Backend-agnostic filter predicate tree.
///
/// Leaves are only obtainable through a `BuildPolicy` so their keys and
/// values have been validated. Composites own their children and are never
/// flattened: `(a AND b) AND c` stays two levels deep.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FilterExpr {
    Eq(Comparison),
    In(Membership),
    Gt(Comparison),
    Lt(Comparison),
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

impl FilterExpr {
    // --- Leaves (strict policy) ---

    pub fn eq(key: impl Into<String>, value: impl FilterValue) -> Result<Self, FilterError> {
        BuildPolicy::STRICT.eq(key, value)
    }

    pub fn gt(key: impl Into<String>, value: impl FilterValue) -> Result<Self, FilterError> {
        BuildPolicy::STRICT.gt(key, value)
    }

    pub fn lt(key: impl Into<String>, value: impl FilterValue) -> Result<Self, FilterError> {
        BuildPolicy::STRICT.lt(key, value)
    }

    pub fn in_iter<I>(key: impl Into<String>, values: I) -> Result<Self, FilterError>
    where
        I: IntoIterator,
        I::Item: FilterValue,
    {
        BuildPolicy::STRICT.in_iter(key, values)
    }

    // --- Composition ---

    /// Combine two expressions into `And[self, other]`.
    ///
    /// Operands are moved in as-is; nested `And`s are not flattened.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::And(vec![self, other])
    }

    /// Combine two expressions into `Or[self, other]`, without flattening.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::Or(vec![self, other])
    }

    /// Negate this expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// N-ary conjunction in iteration order. An empty input yields `And[]`.
    #[must_use]
    pub fn all(conditions: impl IntoIterator<Item = Self>) -> Self {
        Self::And(conditions.into_iter().collect())
    }

    /// N-ary disjunction in iteration order. An empty input yields `Or[]`.
    #[must_use]
    pub fn any(conditions: impl IntoIterator<Item = Self>) -> Self {
        Self::Or(conditions.into_iter().collect())
    }

    #[must_use]
    pub fn and_option(self, other: Option<Self>) -> Self {
        match other {
            Some(f) => self.and(f),
            None => self,
        }
    }

    #[must_use]
    pub fn or_option(self, other: Option<Self>) -> Self {
        match other {
            Some(f) => self.or(f),
            None => self,
        }
    }

    // --- Introspection ---

    #[must_use]
    pub const fn op(&self) -> FilterOp {
        match self {
            Self::Eq(_) => FilterOp::Eq,
            Self::In(_) => FilterOp::In,
            Self::Gt(_) => FilterOp::Gt,
            Self::Lt(_) => FilterOp::Lt,
            Self::And(_) => FilterOp::And,
            Self::Or(_) => FilterOp::Or,
            Self::Not(_) => FilterOp::Not,
        }
    }

    /// Field key of a leaf; `None` for composites.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Eq(c) | Self::Gt(c) | Self::Lt(c) => Some(c.key()),
            Self::In(m) => Some(m.key()),
            Self::And(_) | Self::Or(_) | Self::Not(_) => None,
        }
    }

    /// Right-hand value of an EQ/GT/LT leaf.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Eq(c) | Self::Gt(c) | Self::Lt(c) => Some(c.value()),
            _ => None,
        }
    }

    /// Candidate list of an IN leaf.
    #[must_use]
    pub fn values(&self) -> Option<&[Value]> {
        match self {
            Self::In(m) => Some(m.values()),
            _ => None,
        }
    }

    /// Direct children in stored order; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::And(xs) | Self::Or(xs) => xs,
            Self::Not(x) => std::slice::from_ref(&**x),
            Self::Eq(_) | Self::In(_) | Self::Gt(_) | Self::Lt(_) => &[],
        }
    }

    /// Levels in the tree; a leaf or an empty composite is 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Self::depth).max().unwrap_or(0)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }
}

///
/// Bit Operations
/// sugar for `and`, `or` and `not`
///

impl BitAnd for FilterExpr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for FilterExpr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for FilterExpr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::not(self)
    }
}
