use crate::domain::values::outcome::IndicatorOutcome;
use serde::Serialize;

/// Sentinel used when no as-of date can be resolved for an indicator.
pub const DATE_NOT_AVAILABLE: &str = "Date not available";

/// The normalized form every indicator is reduced to: a raw outcome
/// plus its as-of date and provenance label.
#[derive(Debug, Clone, Serialize)]
pub struct CanonicalRecord {
    pub outcome: IndicatorOutcome,
    /// As-of date of the underlying data (`YYYY-MM-DD`), or the
    /// [`DATE_NOT_AVAILABLE`] sentinel. Always present, never empty.
    pub as_of: String,
    pub source: String,
}

impl CanonicalRecord {
    pub fn new(outcome: IndicatorOutcome, as_of: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            outcome,
            as_of: as_of.into(),
            source: source.into(),
        }
    }
}
