use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::candidate::Platform;

/// One verification outcome in a person's history. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub platform: Platform,
    pub url: String,
    pub confidence: f64,
    /// None until manual feedback arrives.
    pub is_correct: Option<bool>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub feedback_timestamp: Option<DateTime<Utc>>,
}

impl VerificationRecord {
    pub fn new(platform: Platform, url: impl Into<String>, confidence: f64) -> Self {
        Self {
            platform,
            url: url.into(),
            confidence,
            is_correct: None,
            timestamp: Utc::now(),
            feedback_timestamp: None,
        }
    }
}

/// Usage aggregate for one channel (a platform or a sport) of one query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelStats {
    pub uses: u64,
    pub matches: u64,
    pub total_confidence: f64,
}

impl ChannelStats {
    pub fn record(&mut self, matches_found: u64, top_confidence: f64) {
        self.uses += 1;
        self.matches += matches_found;
        self.total_confidence += top_confidence;
    }

    pub fn match_rate(&self) -> f64 {
        if self.uses == 0 {
            0.0
        } else {
            self.matches as f64 / self.uses as f64
        }
    }

    pub fn avg_confidence(&self) -> f64 {
        if self.uses == 0 {
            0.0
        } else {
            self.total_confidence / self.uses as f64
        }
    }
}

/// Effectiveness aggregate for one exact query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryStats {
    pub total_uses: u64,
    pub found_matches: u64,
    pub total_confidence: f64,
    pub by_platform: HashMap<Platform, ChannelStats>,
    pub by_sport: HashMap<String, ChannelStats>,
}

impl QueryStats {
    pub fn record(
        &mut self,
        platform: Platform,
        sport: &str,
        matches_found: u64,
        top_confidence: f64,
    ) {
        self.total_uses += 1;
        self.found_matches += matches_found;
        self.total_confidence += top_confidence;
        self.by_platform
            .entry(platform)
            .or_default()
            .record(matches_found, top_confidence);
        self.by_sport
            .entry(sport.to_string())
            .or_default()
            .record(matches_found, top_confidence);
    }

    pub fn overall_match_rate(&self) -> f64 {
        if self.total_uses == 0 {
            0.0
        } else {
            self.found_matches as f64 / self.total_uses as f64
        }
    }
}

/// Composite key for the adaptive threshold store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThresholdKey {
    pub sport: String,
    pub platform: Platform,
}

impl ThresholdKey {
    pub fn new(sport: impl Into<String>, platform: Platform) -> Self {
        Self {
            sport: sport.into(),
            platform,
        }
    }
}

/// Composite key for the query template cache: (sport, platform[, role]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternKey {
    pub sport: String,
    pub platform: Platform,
    #[serde(default)]
    pub role: Option<String>,
}

impl PatternKey {
    pub fn new(sport: impl Into<String>, platform: Platform, role: Option<String>) -> Self {
        Self {
            sport: sport.into(),
            platform,
            role,
        }
    }
}

/// Counters for the adaptive learning system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningStats {
    pub total_verifications: u64,
    pub successful_verifications: u64,
    /// Lookups answered by a learned (non-default) threshold.
    pub cache_hits: u64,
    /// Query suggestions answered from the pattern cache.
    pub pattern_matches: u64,
    pub threshold_adjustments: u64,
    // Derived fields, populated in snapshots.
    #[serde(default)]
    pub verification_history_size: usize,
    #[serde(default)]
    pub query_effectiveness_size: usize,
    #[serde(default)]
    pub pattern_cache_size: usize,
    #[serde(default)]
    pub success_rate: f64,
}
