//! Multi-stage identity verification.
//!
//! Three oracle judgments run in strict order with short-circuit rejection:
//!
//! 1. category plausibility (is this an athlete profile at all),
//! 2. specific identity (is it THIS athlete), discounted by stage 1,
//! 3. disqualifiers (is there proof it is NOT this athlete).
//!
//! A transport failure at any stage carries the caller's heuristic score
//! forward as a degraded outcome instead of failing the candidate.

use tracing::{debug, info};

use scout_core::config::VerifyConfig;
use scout_core::models::{Candidate, PersonContext, ScoreResult, VerificationOutcome};

use crate::oracle::{candidate_evidence, OracleAdapter};

pub struct VerificationEngine {
    adapter: OracleAdapter,
    config: VerifyConfig,
}

impl VerificationEngine {
    pub fn new(adapter: OracleAdapter, config: VerifyConfig) -> Self {
        Self { adapter, config }
    }

    /// Run the three-stage protocol for one candidate. Never fails: oracle
    /// transport errors degrade to the heuristic score.
    pub fn verify(
        &self,
        candidate: &Candidate,
        score: &ScoreResult,
        person: &PersonContext,
    ) -> VerificationOutcome {
        let prior = score.confidence;
        let evidence = candidate_evidence(candidate, score);

        let category = match self.adapter.assess_category_plausibility(&evidence) {
            Ok(verdict) => verdict,
            Err(err) => return self.degrade(&candidate.url, prior, err.to_string()),
        };
        if !category.verdict && category.confidence > self.config.category_reject_bar {
            info!(url = %candidate.url, confidence = category.confidence, "rejected at category stage");
            return VerificationOutcome::new(
                false,
                self.config.reject_confidence,
                format!("Category: {}", category.full_rationale()),
            );
        }

        let identity = match self
            .adapter
            .assess_specific_identity(&evidence, person, category.confidence)
        {
            Ok(verdict) => verdict,
            Err(err) => return self.degrade(&candidate.url, prior, err.to_string()),
        };

        let disqualifiers = match self.adapter.assess_disqualifiers(&evidence, person) {
            Ok(verdict) => verdict,
            Err(err) => return self.degrade(&candidate.url, prior, err.to_string()),
        };
        if disqualifiers.verdict && disqualifiers.confidence > self.config.disqualifier_reject_bar {
            info!(url = %candidate.url, confidence = disqualifiers.confidence, "rejected on disqualifiers");
            return VerificationOutcome::new(
                false,
                self.config.reject_confidence,
                format!(
                    "Category: {} / Identity: {} / Disqualifiers: {}",
                    category.rationale,
                    identity.rationale,
                    disqualifiers.full_rationale()
                ),
            );
        }

        debug!(
            url = %candidate.url,
            is_match = identity.verdict,
            confidence = identity.confidence,
            "verification complete"
        );
        VerificationOutcome::new(
            identity.verdict,
            identity.confidence,
            format!(
                "Category: {} / Identity: {} / Disqualifiers: {}",
                category.rationale,
                identity.full_rationale(),
                disqualifiers.rationale
            ),
        )
    }

    fn degrade(&self, url: &str, prior: f64, reason: String) -> VerificationOutcome {
        info!(url = %url, prior, reason = %reason, "oracle unavailable, keeping heuristic score");
        VerificationOutcome::degraded(prior, self.config.min_accept_confidence, reason)
    }
}
