use serde_json::{Map, Value};

use crate::types::{Action, ActionKind, Condition, MatchMode, Operator, Rule};

// Raw rule definitions come from many authoring generations, so the same
// concept hides under different property names. Each list below is an
// ordered set of candidate accessors; the first key present wins. All of
// this tolerance lives here — downstream of normalization the model is
// strictly typed.
const CONDITION_LIST_KEYS: &[&str] =
    &["conditions", "criteria", "when", "rules", "predicates", "matchers"];
const ACTION_LIST_KEYS: &[&str] = &["actions", "effects", "apply", "then", "responses"];
const CONDITION_FIELD_KEYS: &[&str] = &["field", "source", "key", "property", "path", "target"];
const OPERATOR_KEYS: &[&str] = &["operator", "op", "comparator", "comparison"];
const VALUE_KEYS: &[&str] = &["values", "value", "expected"];
const ACTION_TARGET_KEYS: &[&str] = &["target", "field", "key", "property"];
const ACTION_KIND_KEYS: &[&str] = &["action", "effect", "type", "kind"];
const MATCH_MODE_KEYS: &[&str] = &["match_mode", "matchMode", "mode", "match", "combinator"];
const PRIORITY_KEYS: &[&str] = &["priority", "order", "sort", "rank"];
const ID_KEYS: &[&str] = &["id", "rule_id", "uuid"];
const NAME_KEYS: &[&str] = &["name", "label", "title"];

/// Canonicalize a list of raw rule objects.
///
/// Total: malformed rules (non-objects, or rules whose conditions or actions
/// list is empty after normalization) are dropped, never reported. The
/// output is sorted ascending by priority; the sort is stable, so rules at
/// equal priority keep authoring order.
pub(crate) fn normalize(raw: &[Value]) -> Vec<Rule> {
    let mut rules: Vec<Rule> = raw
        .iter()
        .enumerate()
        .filter_map(|(index, value)| normalize_rule(value, index))
        .collect();
    rules.sort_by(|a, b| a.priority.total_cmp(&b.priority));
    rules
}

fn normalize_rule(raw: &Value, index: usize) -> Option<Rule> {
    let obj = raw.as_object()?;

    let conditions = collect_conditions(obj);
    if conditions.is_empty() {
        return None;
    }
    let actions = collect_actions(obj);
    if actions.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let priority = first_present(obj, PRIORITY_KEYS)
        .and_then(Value::as_f64)
        .unwrap_or(index as f64);
    let match_mode = string_at(obj, MATCH_MODE_KEYS)
        .map(|token| MatchMode::from_token(&token))
        .unwrap_or_default();
    let id = string_at(obj, ID_KEYS).unwrap_or_else(|| format!("rule-{index}"));
    let name = string_at(obj, NAME_KEYS).unwrap_or_else(|| id.clone());

    Some(Rule {
        id,
        name,
        match_mode,
        conditions,
        actions,
        priority,
    })
}

fn collect_conditions(obj: &Map<String, Value>) -> Vec<Condition> {
    match first_present(obj, CONDITION_LIST_KEYS) {
        Some(Value::Array(entries)) => entries.iter().filter_map(normalize_condition).collect(),
        // A single bare condition object is accepted in place of a list.
        Some(entry @ Value::Object(_)) => normalize_condition(entry).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn normalize_condition(raw: &Value) -> Option<Condition> {
    let obj = raw.as_object()?;
    // A condition without a usable field reference is dropped here, not at
    // evaluation time.
    let field = string_at(obj, CONDITION_FIELD_KEYS)?;
    let operator = string_at(obj, OPERATOR_KEYS)
        .map(|token| Operator::from_token(&token))
        .unwrap_or(Operator::Equals);
    let values = match first_present(obj, VALUE_KEYS) {
        Some(Value::Array(entries)) => entries.clone(),
        Some(Value::Null) | None => Vec::new(),
        Some(single) => vec![single.clone()],
    };
    Some(Condition {
        field,
        operator,
        values,
    })
}

fn collect_actions(obj: &Map<String, Value>) -> Vec<Action> {
    match first_present(obj, ACTION_LIST_KEYS) {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_object)
            .flat_map(normalize_action)
            .collect(),
        Some(Value::Object(entry)) => normalize_action(entry),
        // No action container: infer from a flat `target`/`action` pair or a
        // `targets` list on the rule object itself.
        _ => normalize_action(obj),
    }
}

/// Normalize one action entry. An entry with a `targets` list fans out into
/// one action per target, all sharing the entry's action kind. Entries with
/// an unknown action token (or no usable target) yield nothing.
fn normalize_action(obj: &Map<String, Value>) -> Vec<Action> {
    let Some(kind) = string_at(obj, ACTION_KIND_KEYS).and_then(|t| ActionKind::from_token(&t))
    else {
        return Vec::new();
    };

    if let Some(Value::Array(targets)) = obj.get("targets") {
        return targets
            .iter()
            .filter_map(as_key_string)
            .map(|target| Action {
                target,
                action: kind,
            })
            .collect();
    }

    string_at(obj, ACTION_TARGET_KEYS)
        .map(|target| Action {
            target,
            action: kind,
        })
        .into_iter()
        .collect()
}

/// First value present under any of the candidate keys, in priority order.
fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}

/// First non-empty string (or number, stringified) under the candidate keys.
fn string_at(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(as_key_string)
}

fn as_key_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
