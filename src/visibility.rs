use std::collections::HashSet;

use crate::types::ActionKind;

/// Decide whether a field is hidden, given the engine's action for it, the
/// show-override set, and the field's default visibility.
///
/// Decision order, first match wins:
/// 1. field is in `show_overrides` (case-insensitively) — visible
/// 2. action is `show` — visible
/// 3. action is `hide` — hidden
/// 4. `default_visible` is false — hidden
/// 5. otherwise — visible
///
/// `require`/`optional` actions never affect visibility; they fall through
/// to the default.
#[must_use]
pub fn is_hidden(
    field_key: &str,
    action: Option<ActionKind>,
    show_overrides: &HashSet<String>,
    default_visible: bool,
) -> bool {
    if show_overrides.contains(field_key) {
        return false;
    }
    let key = field_key.trim();
    if show_overrides
        .iter()
        .any(|k| k.trim().eq_ignore_ascii_case(key))
    {
        return false;
    }
    match action {
        Some(ActionKind::Show) => false,
        Some(ActionKind::Hide) => true,
        _ => !default_visible,
    }
}
