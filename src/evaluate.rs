use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::compare::{self, loose_eq};
use crate::path::resolve_path;
use crate::types::{ActionKind, Condition, Evaluation, MatchMode, Operator, Rule};

/// Fold a canonical rule list (ascending priority order) over a record.
///
/// Later rules overwrite earlier ones per target field. A `show` action adds
/// its target to the override set; a later `hide` on the same target removes
/// it again — whichever applies last wins.
pub(crate) fn evaluate(rules: &[Rule], record: &Value) -> Evaluation {
    let mut actions_by_field: HashMap<String, ActionKind> = HashMap::new();
    let mut show_overrides: HashSet<String> = HashSet::new();

    for rule in rules {
        if !rule_matches(rule, record) {
            continue;
        }
        for action in &rule.actions {
            actions_by_field.insert(action.target.clone(), action.action);
            match action.action {
                ActionKind::Show => {
                    show_overrides.insert(action.target.clone());
                }
                ActionKind::Hide => {
                    show_overrides.remove(&action.target);
                }
                ActionKind::Require | ActionKind::Optional => {}
            }
        }
    }

    Evaluation::new(actions_by_field, show_overrides)
}

/// Combine a rule's conditions per its match mode.
fn rule_matches(rule: &Rule, record: &Value) -> bool {
    let mut hits = rule.conditions.iter().map(|c| eval_condition(c, record));
    match rule.match_mode {
        MatchMode::All => hits.all(|hit| hit),
        MatchMode::Any => hits.any(|hit| hit),
        MatchMode::None => !hits.any(|hit| hit),
    }
}

/// Evaluate one condition against a record. Never fails: an unresolvable
/// field or a type-mismatched comparison evaluates to `false`, except the
/// vacuous-true cases of `not_equals`/`not_in`/`not_contains`.
pub(crate) fn eval_condition(condition: &Condition, record: &Value) -> bool {
    let resolved = resolve_path(record, &condition.field);
    let values = &condition.values;

    match condition.operator {
        Operator::Equals | Operator::In => {
            resolved.is_some_and(|v| values.iter().any(|expected| loose_eq(v, expected)))
        }
        Operator::NotEquals | Operator::NotIn => {
            if values.is_empty() {
                compare::is_set(resolved)
            } else {
                match resolved {
                    Some(v) => !values.iter().any(|expected| loose_eq(v, expected)),
                    None => true,
                }
            }
        }
        Operator::Contains => contains_match(resolved, values),
        Operator::NotContains => match resolved {
            Some(Value::Array(_) | Value::String(_)) => !contains_match(resolved, values),
            // Vacuously true: nothing to contain anything in.
            _ => true,
        },
        Operator::Gt => numeric_cmp(resolved, values, |a, b| a > b),
        Operator::Gte => numeric_cmp(resolved, values, |a, b| a >= b),
        Operator::Lt => numeric_cmp(resolved, values, |a, b| a < b),
        Operator::Lte => numeric_cmp(resolved, values, |a, b| a <= b),
        // is_empty/is_not_empty intentionally alias is_not_set/is_set; rule
        // authors rely on both spellings.
        Operator::IsSet | Operator::IsNotEmpty => compare::is_set(resolved),
        Operator::IsNotSet | Operator::IsEmpty => !compare::is_set(resolved),
        Operator::Truthy => compare::truthy(resolved),
        Operator::Falsy => !compare::truthy(resolved),
    }
}

fn contains_match(resolved: Option<&Value>, values: &[Value]) -> bool {
    match resolved {
        Some(Value::Array(items)) => items
            .iter()
            .any(|el| values.iter().any(|expected| loose_eq(el, expected))),
        Some(Value::String(s)) => {
            let haystack = s.trim().to_lowercase();
            values
                .iter()
                .any(|expected| haystack.contains(&compare::normalized_string(expected)))
        }
        _ => false,
    }
}

/// Numeric comparison against the first non-null expected value. False if
/// either side fails to coerce to a finite number.
fn numeric_cmp(resolved: Option<&Value>, values: &[Value], cmp: impl Fn(f64, f64) -> bool) -> bool {
    let Some(value) = resolved.and_then(compare::as_number) else {
        return false;
    };
    let Some(expected) = values
        .iter()
        .find(|v| !v.is_null())
        .and_then(compare::as_number)
    else {
        return false;
    };
    cmp(value, expected)
}
