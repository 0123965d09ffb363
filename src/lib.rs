mod compare;
mod error;
mod evaluate;
mod normalize;
mod path;
mod types;
mod visibility;

pub use error::FieldgateError;
pub use path::resolve_path;
pub use types::{Action, ActionKind, Condition, Evaluation, MatchMode, Operator, Rule, RuleSet};
pub use visibility::is_hidden;
