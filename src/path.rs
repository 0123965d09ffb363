use serde_json::Value;

/// Resolve a dotted/bracketed field path against a nested record.
///
/// Supports `"user.profile.age"`, bracket access like `"stats[hp]"` or
/// `"tags[0]"` (quotes around the bracketed token are stripped), and `*`
/// segments, which are treated as literal pass-throughs rather than
/// wildcards. Returns `None` if the path is empty, does not exist, or any
/// step along the way is `null`.
#[must_use]
pub fn resolve_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let segments = split_path(path);
    if segments.is_empty() {
        return None;
    }

    let mut current = record;
    for segment in &segments {
        if segment == "*" {
            continue;
        }
        current = match current {
            Value::Object(map) => map.get(segment.as_str())?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Split a path into non-empty segment names, rewriting `[token]` into a
/// plain segment. Empty segments (e.g. a leading `.`) are discarded.
fn split_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                let mut token = String::new();
                for inner in chars.by_ref() {
                    if inner == ']' {
                        break;
                    }
                    token.push(inner);
                }
                let token = token.trim_matches(|q| q == '"' || q == '\'');
                if !token.is_empty() {
                    segments.push(token.to_owned());
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_top_level_key() {
        let record = json!({"name": "alice"});
        assert_eq!(resolve_path(&record, "name"), Some(&json!("alice")));
    }

    #[test]
    fn resolve_nested_path() {
        let record = json!({"user": {"profile": {"age": 25}}});
        assert_eq!(resolve_path(&record, "user.profile.age"), Some(&json!(25)));
    }

    #[test]
    fn resolve_bracket_access() {
        let record = json!({"stats": {"hp": 12}});
        assert_eq!(resolve_path(&record, "stats[hp]"), Some(&json!(12)));
        assert_eq!(resolve_path(&record, "stats[\"hp\"]"), Some(&json!(12)));
        assert_eq!(resolve_path(&record, "stats['hp']"), Some(&json!(12)));
    }

    #[test]
    fn resolve_array_index() {
        let record = json!({"tags": ["npc", "hostile"]});
        assert_eq!(resolve_path(&record, "tags[1]"), Some(&json!("hostile")));
        assert_eq!(resolve_path(&record, "tags.0"), Some(&json!("npc")));
        assert_eq!(resolve_path(&record, "tags[9]"), None);
    }

    #[test]
    fn resolve_missing_returns_none() {
        let record = json!({"user": {"age": 25}});
        assert_eq!(resolve_path(&record, "user.name"), None);
        assert_eq!(resolve_path(&record, "nonexistent.deep.path"), None);
    }

    #[test]
    fn resolve_null_step_short_circuits() {
        let record = json!({"user": null});
        assert_eq!(resolve_path(&record, "user.age"), None);
        assert_eq!(resolve_path(&record, "user"), None);
    }

    #[test]
    fn resolve_through_scalar_returns_none() {
        let record = json!({"user": "alice"});
        assert_eq!(resolve_path(&record, "user.age"), None);
    }

    #[test]
    fn empty_path_returns_none() {
        let record = json!({"x": 1});
        assert_eq!(resolve_path(&record, ""), None);
        assert_eq!(resolve_path(&record, "..."), None);
    }

    #[test]
    fn leading_dot_is_discarded() {
        let record = json!({"x": 1});
        assert_eq!(resolve_path(&record, ".x"), Some(&json!(1)));
    }

    #[test]
    fn star_segment_passes_through() {
        let record = json!({"user": {"age": 25}});
        assert_eq!(resolve_path(&record, "user.*.age"), Some(&json!(25)));
        // A lone `*` leaves the accumulator at the record itself.
        assert_eq!(resolve_path(&record, "*"), Some(&record));
    }

    #[test]
    fn split_rewrites_brackets() {
        assert_eq!(split_path("a[0].b['c']"), vec!["a", "0", "b", "c"]);
        assert_eq!(split_path(".lead.trail."), vec!["lead", "trail"]);
        assert!(split_path("").is_empty());
    }
}
