mod action;
mod condition;
mod evaluation;
mod rule;
mod ruleset;

pub use action::{Action, ActionKind};
pub use condition::{Condition, Operator};
pub use evaluation::Evaluation;
pub use rule::{MatchMode, Rule};
pub use ruleset::RuleSet;
