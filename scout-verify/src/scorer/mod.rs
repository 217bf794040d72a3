//! Pure signal scoring: (candidate, person context) → base confidence.
//!
//! Confidence accumulates additively from 0.0 and is upper-clamped to 1.0
//! only at the end, so a large penalty can cancel several positive signals.
//! No lower clamp: downstream treats negative confidence as a rejection.
//! Malformed or missing fields contribute nothing; scoring never fails.

mod bio_signals;
mod contact_signals;
mod url_signals;
mod username;

pub use username::extract_social_username;

use scout_core::config::SignalWeights;
use scout_core::models::{Candidate, PersonContext, Provenance, ScoreResult};

/// Running total of signal contributions, in evaluation order.
pub(crate) struct Accumulator {
    pub confidence: f64,
    pub signals: Vec<String>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            confidence: 0.0,
            signals: Vec::new(),
        }
    }

    pub fn add(&mut self, weight: f64, tag: impl Into<String>) {
        self.confidence += weight;
        self.signals.push(tag.into());
    }
}

/// Score a candidate against the target person. Pure and deterministic.
pub fn score(candidate: &Candidate, ctx: &PersonContext, weights: &SignalWeights) -> ScoreResult {
    let mut acc = Accumulator::new();
    let url_lower = candidate.url.to_lowercase();

    match candidate.provenance {
        Provenance::High => acc.add(weights.provenance_high, "high_credibility_source"),
        Provenance::Medium => acc.add(weights.provenance_medium, "medium_credibility_source"),
        Provenance::Unknown => {}
    }

    url_signals::apply(&mut acc, &url_lower, ctx, weights);
    username::apply(&mut acc, &url_lower, ctx, weights);

    if let Some(email) = &candidate.email {
        contact_signals::apply(&mut acc, &email.to_lowercase(), ctx, weights);
    }
    if let Some(bio) = &candidate.bio {
        bio_signals::apply_bio(&mut acc, &bio.to_lowercase(), ctx, weights);
    }
    if let Some(rationale) = &candidate.rationale {
        bio_signals::apply_rationale(&mut acc, &rationale.to_lowercase(), weights);
    }

    ScoreResult::new(
        candidate.url.clone(),
        acc.confidence.min(1.0),
        acc.signals,
    )
}
