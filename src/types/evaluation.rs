use std::collections::{HashMap, HashSet};
use std::fmt;

use super::action::ActionKind;

/// Result of one engine pass: the last applicable action per target field,
/// plus the set of fields explicitly forced visible by a `show` action.
///
/// Returned by [`RuleSet::evaluate()`](super::ruleset::RuleSet::evaluate).
/// A freshly computed value every call; nothing is cached or shared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[must_use]
pub struct Evaluation {
    actions_by_field: HashMap<String, ActionKind>,
    show_overrides: HashSet<String>,
}

impl Evaluation {
    pub(crate) fn new(
        actions_by_field: HashMap<String, ActionKind>,
        show_overrides: HashSet<String>,
    ) -> Self {
        Self {
            actions_by_field,
            show_overrides,
        }
    }

    /// The action applied to a field, if any rule targeted it.
    #[must_use]
    pub fn action_for(&self, field: &str) -> Option<ActionKind> {
        self.actions_by_field.get(field).copied()
    }

    /// The full target-field → action map from this pass.
    #[must_use]
    pub fn actions_by_field(&self) -> &HashMap<String, ActionKind> {
        &self.actions_by_field
    }

    /// Fields explicitly forced visible by a matched `show` action.
    #[must_use]
    pub fn show_overrides(&self) -> &HashSet<String> {
        &self.show_overrides
    }

    /// Whether a field should be hidden, combining this pass's action for
    /// the field with its default visibility.
    ///
    /// Convenience over [`is_hidden()`](crate::is_hidden), which callers can
    /// use directly to resolve per-field without re-running the engine.
    #[must_use]
    pub fn is_hidden(&self, field_key: &str, default_visible: bool) -> bool {
        crate::visibility::is_hidden(
            field_key,
            self.action_for(field_key),
            &self.show_overrides,
            default_visible,
        )
    }

    /// Whether a matched rule marked this field `require`.
    #[must_use]
    pub fn is_required(&self, field_key: &str) -> bool {
        matches!(self.action_for(field_key), Some(ActionKind::Require))
    }

    /// True if no rule matched any target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions_by_field.is_empty() && self.show_overrides.is_empty()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Evaluation({} actions, {} show overrides)",
            self.actions_by_field.len(),
            self.show_overrides.len(),
        )
    }
}
