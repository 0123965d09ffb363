use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comparison operators supported in rule conditions.
///
/// Raw rule definitions spell these as free-form tokens; normalization maps
/// them onto this closed set so the evaluator can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    In,
    NotIn,
    Gt,
    Gte,
    Lt,
    Lte,
    IsSet,
    IsNotSet,
    IsEmpty,
    IsNotEmpty,
    Truthy,
    Falsy,
}

impl Operator {
    /// Map a raw operator token onto the closed set. Unrecognized tokens
    /// fall back to [`Operator::Equals`] rather than failing.
    pub(crate) fn from_token(token: &str) -> Self {
        let normalized = token.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "equals" | "equal" | "eq" | "==" | "=" => Operator::Equals,
            "not_equals" | "not_equal" | "neq" | "ne" | "!=" | "<>" => Operator::NotEquals,
            "contains" | "includes" => Operator::Contains,
            "not_contains" | "excludes" => Operator::NotContains,
            "in" => Operator::In,
            "not_in" => Operator::NotIn,
            "gt" | ">" => Operator::Gt,
            "gte" | ">=" => Operator::Gte,
            "lt" | "<" => Operator::Lt,
            "lte" | "<=" => Operator::Lte,
            "is_set" | "set" => Operator::IsSet,
            "is_not_set" | "not_set" | "unset" => Operator::IsNotSet,
            "is_empty" | "empty" => Operator::IsEmpty,
            "is_not_empty" | "not_empty" => Operator::IsNotEmpty,
            "truthy" => Operator::Truthy,
            "falsy" => Operator::Falsy,
            _ => Operator::Equals,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not_equals",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::In => "in",
            Operator::NotIn => "not_in",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::IsSet => "is_set",
            Operator::IsNotSet => "is_not_set",
            Operator::IsEmpty => "is_empty",
            Operator::IsNotEmpty => "is_not_empty",
            Operator::Truthy => "truthy",
            Operator::Falsy => "falsy",
        };
        write!(f, "{token}")
    }
}

/// A canonical condition: a field path, an operator, and the expected
/// values the resolved field is tested against.
///
/// Invariant: `field` is non-empty. Conditions without a usable field
/// reference are dropped during normalization and never reach evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: Operator,
    #[serde(default)]
    pub values: Vec<Value>,
}
