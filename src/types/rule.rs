use serde::{Deserialize, Serialize};

use super::action::Action;
use super::condition::Condition;

/// Boolean combinator applied across a rule's conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Every condition must match (logical AND).
    #[default]
    All,
    /// At least one condition must match (logical OR).
    Any,
    /// No condition may match (NOR).
    None,
}

impl MatchMode {
    /// Map a raw match-mode token onto the combinator set. Unrecognized
    /// tokens fall back to [`MatchMode::All`].
    pub(crate) fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "any" | "or" | "some" => MatchMode::Any,
            "none" | "nor" | "not" => MatchMode::None,
            _ => MatchMode::All,
        }
    }
}

/// A canonical rule, produced by normalization.
///
/// Invariants: `conditions` and `actions` are non-empty — a raw rule that
/// normalizes to either list being empty is discarded entirely. Rules are
/// evaluated in ascending `priority` order; ties keep authoring order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub match_mode: MatchMode,
    pub conditions: Vec<Condition>,
    pub actions: Vec<Action>,
    pub priority: f64,
}
