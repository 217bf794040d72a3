use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the multi-stage and batch verifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Stage 1 rejection bar: implausible category at above this confidence
    /// rejects without running the later stages.
    pub category_reject_bar: f64,
    /// Stage 3 rejection bar for disqualifying evidence.
    pub disqualifier_reject_bar: f64,
    /// Final confidence assigned to stage rejections.
    pub reject_confidence: f64,
    /// Floor on the category-confidence discount applied to the identity stage.
    pub stage_discount_floor: f64,
    /// Inclusive confidence band that triggers oracle verification.
    pub borderline_low: f64,
    pub borderline_high: f64,
    /// Results at or below this confidence are dropped from batch output.
    pub min_accept_confidence: f64,
    /// Worker pool width for batch scoring.
    pub workers: usize,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            category_reject_bar: defaults::CATEGORY_REJECT_BAR,
            disqualifier_reject_bar: defaults::DISQUALIFIER_REJECT_BAR,
            reject_confidence: defaults::REJECT_CONFIDENCE,
            stage_discount_floor: defaults::STAGE_DISCOUNT_FLOOR,
            borderline_low: defaults::BORDERLINE_LOW,
            borderline_high: defaults::BORDERLINE_HIGH,
            min_accept_confidence: defaults::MIN_ACCEPT_CONFIDENCE,
            workers: defaults::DEFAULT_WORKERS,
        }
    }
}

impl VerifyConfig {
    /// Whether a heuristic confidence falls in the band worth paying for
    /// oracle verification.
    pub fn is_borderline(&self, confidence: f64) -> bool {
        confidence >= self.borderline_low && confidence <= self.borderline_high
    }
}
