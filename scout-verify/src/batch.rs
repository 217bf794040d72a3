//! Concurrent batch verification over a bounded worker pool.
//!
//! Every candidate gets a heuristic score; only scores inside the borderline
//! band pay for the multi-stage oracle protocol. All scored results are
//! cached by URL so a repeated batch is answered without recomputation, and
//! only results clearing the acceptance bar appear in the output map.

use std::collections::HashMap;

use moka::sync::Cache;
use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::{debug, info};

use scout_core::config::{SignalWeights, VerifyConfig};
use scout_core::constants::SCORE_CACHE_CAPACITY;
use scout_core::errors::{ScoutError, ScoutResult};
use scout_core::models::{Candidate, PersonContext, ScoreResult};

use crate::engine::VerificationEngine;
use crate::scorer;

pub struct BatchVerifier {
    engine: VerificationEngine,
    weights: SignalWeights,
    config: VerifyConfig,
    cache: Cache<String, ScoreResult>,
    pool: ThreadPool,
}

impl BatchVerifier {
    pub fn new(
        engine: VerificationEngine,
        weights: SignalWeights,
        config: VerifyConfig,
    ) -> ScoutResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()
            .map_err(|err| ScoutError::Config {
                message: format!("worker pool: {err}"),
            })?;
        Ok(Self {
            engine,
            weights,
            config,
            cache: Cache::new(SCORE_CACHE_CAPACITY),
            pool,
        })
    }

    /// Score and verify a batch of candidates.
    ///
    /// Returns URL → result for every candidate whose final confidence
    /// clears the acceptance bar. Cached URLs are answered from cache.
    /// A single candidate's oracle failure degrades that candidate only.
    pub fn verify_batch(
        &self,
        candidates: &[Candidate],
        person: &PersonContext,
    ) -> HashMap<String, ScoreResult> {
        let (hits, misses): (Vec<_>, Vec<_>) = candidates
            .iter()
            .partition(|c| self.cache.contains_key(&c.url));

        let mut scored: Vec<ScoreResult> = hits
            .iter()
            .filter_map(|c| self.cache.get(&c.url))
            .collect();
        debug!(
            total = candidates.len(),
            cached = scored.len(),
            "batch verification started"
        );

        let fresh: Vec<ScoreResult> = self.pool.install(|| {
            misses
                .par_iter()
                .map(|candidate| self.score_one(candidate, person))
                .collect()
        });
        for result in &fresh {
            self.cache.insert(result.url.clone(), result.clone());
        }
        scored.extend(fresh);

        let accepted: HashMap<String, ScoreResult> = scored
            .into_iter()
            .filter(|r| r.confidence > self.config.min_accept_confidence)
            .map(|r| (r.url.clone(), r))
            .collect();
        info!(
            candidates = candidates.len(),
            accepted = accepted.len(),
            person = %person.full_name(),
            "batch verification finished"
        );
        accepted
    }

    fn score_one(&self, candidate: &Candidate, person: &PersonContext) -> ScoreResult {
        let mut result = scorer::score(candidate, person, &self.weights);
        if !self.config.is_borderline(result.confidence) {
            return result;
        }

        let outcome = self.engine.verify(candidate, &result, person);
        result.confidence = outcome.confidence;
        result.oracle_verified = !outcome.degraded;
        result.oracle_rationale = Some(outcome.rationale);
        result.add_signal(if outcome.degraded {
            "oracle_degraded"
        } else if outcome.is_match {
            "oracle_confirmed"
        } else {
            "oracle_rejected"
        });
        result
    }
}
