use std::fmt;

use serde::{Deserialize, Serialize};

/// What a matched rule does to its target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Show,
    Hide,
    Require,
    Optional,
}

impl ActionKind {
    /// Map a raw action token onto the closed set. Unlike operators, unknown
    /// action tokens have no fallback: the entry is dropped.
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "show" | "visible" => Some(ActionKind::Show),
            "hide" | "hidden" => Some(ActionKind::Hide),
            "require" | "required" => Some(ActionKind::Require),
            "optional" => Some(ActionKind::Optional),
            _ => None,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            ActionKind::Show => "show",
            ActionKind::Hide => "hide",
            ActionKind::Require => "require",
            ActionKind::Optional => "optional",
        };
        write!(f, "{token}")
    }
}

/// A canonical action: apply `action` to the field at `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub target: String,
    pub action: ActionKind,
}
