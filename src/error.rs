use thiserror::Error;

/// Errors from the rule ingestion boundary.
///
/// Only [`RuleSet::from_json()`](crate::RuleSet::from_json) and
/// [`RuleSet::from_file()`](crate::RuleSet::from_file) can fail; the engine
/// itself (normalization, evaluation, visibility resolution) is total and
/// degrades silently on malformed input.
#[derive(Debug, Error)]
pub enum FieldgateError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("expected a JSON array of rule objects, got {found}")]
    ExpectedArray { found: &'static str },
}
