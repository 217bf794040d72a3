use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Platform;

/// Configuration for the adaptive learning store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Starting threshold for a (sport, platform) pair with no feedback yet.
    pub initial_threshold: f64,
    /// Bang-bang adjustment step applied per conflicting observation.
    pub threshold_step: f64,
    pub threshold_floor: f64,
    pub threshold_ceiling: f64,
    /// Effectiveness score: weight on match rate vs average confidence.
    pub match_rate_weight: f64,
    pub avg_confidence_weight: f64,
    /// Combination: weight on the sport-level score vs the platform-level score.
    pub sport_score_weight: f64,
    pub platform_score_weight: f64,
    /// Multiplier for queries proven over repeated use.
    pub proven_query_bonus: f64,
    pub proven_query_min_uses: u64,
    pub proven_query_min_match_rate: f64,
    /// Default query-suggestion count.
    pub max_queries: usize,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            initial_threshold: defaults::DEFAULT_THRESHOLD,
            threshold_step: defaults::THRESHOLD_STEP,
            threshold_floor: defaults::THRESHOLD_FLOOR,
            threshold_ceiling: defaults::THRESHOLD_CEILING,
            match_rate_weight: defaults::MATCH_RATE_WEIGHT,
            avg_confidence_weight: defaults::AVG_CONFIDENCE_WEIGHT,
            sport_score_weight: defaults::SPORT_SCORE_WEIGHT,
            platform_score_weight: defaults::PLATFORM_SCORE_WEIGHT,
            proven_query_bonus: defaults::PROVEN_QUERY_BONUS,
            proven_query_min_uses: defaults::PROVEN_QUERY_MIN_USES,
            proven_query_min_match_rate: defaults::PROVEN_QUERY_MIN_MATCH_RATE,
            max_queries: defaults::DEFAULT_MAX_QUERIES,
        }
    }
}

impl LearningConfig {
    /// Static per-platform fallback threshold. Contact channels demand more
    /// certainty than social profiles.
    pub fn default_threshold(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Twitter | Platform::Instagram => 0.6,
            Platform::Facebook => 0.65,
            Platform::Email => 0.7,
            Platform::Phone => 0.75,
            Platform::Other => self.initial_threshold,
        }
    }
}
