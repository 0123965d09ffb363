use serde_json::Value;

/// Loose equality between two record/rule values.
///
/// If either side is an array, this is a contains-match: true if any element
/// equals the other side under the same rule. Otherwise both sides are
/// coerced to numbers when possible and compared numerically; failing that,
/// they are compared as trimmed, case-insensitive strings.
pub(crate) fn loose_eq(a: &Value, b: &Value) -> bool {
    if let Value::Array(items) = a {
        return items.iter().any(|el| loose_eq(el, b));
    }
    if let Value::Array(items) = b {
        return items.iter().any(|el| loose_eq(a, el));
    }
    if let (Some(x), Some(y)) = (as_number(a), as_number(b)) {
        return x == y;
    }
    normalized_string(a) == normalized_string(b)
}

/// Coerce a value to a finite number. Strings are trimmed and parsed;
/// booleans and nulls do not coerce.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

/// Normalize a value to its canonical comparison string: trimmed and
/// lowercased for strings, `"true"`/`"false"` for booleans, and the JSON
/// serialization for everything else (numbers, null, objects).
pub(crate) fn normalized_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_lowercase(),
        Value::Bool(b) => {
            if *b {
                "true".to_owned()
            } else {
                "false".to_owned()
            }
        }
        other => other.to_string(),
    }
}

/// Presence test: a value is set if it resolves, is not null, and (for
/// strings) is non-empty after trimming, (for arrays) non-empty, (for
/// objects) has at least one key. `0` and `false` count as set.
pub(crate) fn is_set(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(_) => true,
    }
}

/// Plain boolean coercion: null/missing, `false`, `0`, NaN, and the empty
/// string are falsy; arrays and objects are always truthy.
pub(crate) fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
