use serde::{Deserialize, Serialize};

/// Output of the signal scorer for one candidate.
///
/// `confidence` is clamped to at most 1.0 when scoring finishes but carries
/// no lower clamp: a heavily penalized candidate can go negative, and
/// downstream consumers treat negative confidence as a rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub url: String,
    pub confidence: f64,
    /// Matched-signal tags in evaluation order, for audit and re-scoring.
    pub signals: Vec<String>,
    /// Whether the multi-stage oracle verifier refined this score.
    pub oracle_verified: bool,
    pub oracle_rationale: Option<String>,
}

impl ScoreResult {
    pub fn new(url: impl Into<String>, confidence: f64, signals: Vec<String>) -> Self {
        Self {
            url: url.into(),
            confidence,
            signals,
            oracle_verified: false,
            oracle_rationale: None,
        }
    }

    /// Record a matched signal tag.
    pub fn add_signal(&mut self, tag: impl Into<String>) {
        self.signals.push(tag.into());
    }
}
