use std::fmt;

use serde_json::Value;

use super::evaluation::Evaluation;
use super::rule::Rule;
use crate::error::FieldgateError;

/// A normalized, immutable rule list. Thread-safe and designed to live
/// behind `Arc`; evaluation is pure, so one `RuleSet` can serve any number
/// of concurrent callers.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use fieldgate::RuleSet;
///
/// let rules = RuleSet::normalize(&[json!({
///     "conditions": [{"field": "type", "operator": "equals", "values": ["npc"]}],
///     "actions": [{"target": "alignment", "action": "hide"}],
///     "priority": 0
/// })]);
///
/// let eval = rules.evaluate(&json!({"type": "npc"}));
/// assert!(eval.is_hidden("alignment", true));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Normalize raw rule definitions into a canonical rule set.
    ///
    /// Total: malformed entries are dropped silently (see the crate docs for
    /// the tolerance rules). The resulting rules are sorted ascending by
    /// priority, which fixes evaluation order.
    pub fn normalize(raw: &[Value]) -> Self {
        Self {
            rules: crate::normalize::normalize(raw),
        }
    }

    /// Parse a JSON array of raw rule objects and normalize it.
    ///
    /// # Errors
    ///
    /// Returns [`FieldgateError`] if the input is not valid JSON or its top
    /// level is not an array.
    pub fn from_json(input: &str) -> Result<Self, FieldgateError> {
        let parsed: Value = serde_json::from_str(input)?;
        match parsed {
            Value::Array(raw) => Ok(Self::normalize(&raw)),
            other => Err(FieldgateError::ExpectedArray {
                found: json_type(&other),
            }),
        }
    }

    /// Read a JSON file of raw rule objects and normalize it.
    ///
    /// # Errors
    ///
    /// Returns [`FieldgateError`] on I/O or parse failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, FieldgateError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }

    /// Evaluate every rule against a record, in priority order.
    ///
    /// Pure and stateless: the same `(rules, record)` pair always yields the
    /// same [`Evaluation`], so this is safe to call on every keystroke.
    pub fn evaluate(&self, record: &Value) -> Evaluation {
        crate::evaluate::evaluate(&self.rules, record)
    }

    /// The canonical rules, in evaluation (ascending priority) order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of canonical rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conditions: usize = self.rules.iter().map(|r| r.conditions.len()).sum();
        write!(
            f,
            "RuleSet({} rules, {} conditions)",
            self.rules.len(),
            conditions,
        )
    }
}
