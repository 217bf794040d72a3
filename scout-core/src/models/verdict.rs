use serde::{Deserialize, Serialize};

use crate::constants::MAX_FALLBACK_RATIONALE_LEN;

/// Parse-fallback confidence: the oracle answered but said something
/// unusable, so we hold a weak, non-committal position.
pub const PARSE_FALLBACK_CONFIDENCE: f64 = 0.4;

/// Transport-failure confidence: the oracle never answered. Least confident
/// possible verdict; callers must treat it as inconclusive, never as a
/// disqualification.
pub const INCONCLUSIVE_CONFIDENCE: f64 = 0.2;

/// Normalized output of one oracle judgment stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageVerdict {
    pub verdict: bool,
    /// Confidence in [0.0, 1.0].
    pub confidence: f64,
    pub rationale: String,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub contradictions: Vec<String>,
}

impl StageVerdict {
    pub fn new(verdict: bool, confidence: f64, rationale: impl Into<String>) -> Self {
        Self {
            verdict,
            confidence: confidence.clamp(0.0, 1.0),
            rationale: rationale.into(),
            evidence: Vec::new(),
            contradictions: Vec::new(),
        }
    }

    /// Fixed-point default when the oracle's response could not be parsed
    /// even with best-effort extraction. Carries the truncated raw text.
    pub fn parse_fallback(raw: &str) -> Self {
        let snippet: String = raw.chars().take(MAX_FALLBACK_RATIONALE_LEN).collect();
        Self::new(
            false,
            PARSE_FALLBACK_CONFIDENCE,
            format!("unparsable oracle response: {snippet}"),
        )
    }

    /// Least-confident verdict for a failed oracle call.
    pub fn inconclusive(reason: impl Into<String>) -> Self {
        Self::new(
            false,
            INCONCLUSIVE_CONFIDENCE,
            format!("oracle unavailable: {}", reason.into()),
        )
    }

    /// Rationale with evidence and contradiction lists appended.
    pub fn full_rationale(&self) -> String {
        let mut out = self.rationale.clone();
        if !self.evidence.is_empty() {
            out.push_str("\nEvidence: ");
            out.push_str(&self.evidence.join("; "));
        }
        if !self.contradictions.is_empty() {
            out.push_str("\nContradictions: ");
            out.push_str(&self.contradictions.join("; "));
        }
        out
    }
}

/// Final output of the multi-stage verifier for one candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub is_match: bool,
    pub confidence: f64,
    /// Concatenation of all stage rationales.
    pub rationale: String,
    /// True when an oracle stage failed and the pre-verification heuristic
    /// score was carried forward instead.
    pub degraded: bool,
}

impl VerificationOutcome {
    pub fn new(is_match: bool, confidence: f64, rationale: impl Into<String>) -> Self {
        Self {
            is_match,
            confidence,
            rationale: rationale.into(),
            degraded: false,
        }
    }

    /// Fall back to the caller's heuristic score after an oracle failure.
    pub fn degraded(prior_confidence: f64, accept_bar: f64, reason: impl Into<String>) -> Self {
        Self {
            is_match: prior_confidence > accept_bar,
            confidence: prior_confidence,
            rationale: format!("verification degraded: {}", reason.into()),
            degraded: true,
        }
    }
}
