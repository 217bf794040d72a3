//! The adaptive learning store.
//!
//! Four documents, each guarded by its own mutex around the
//! load-mutate-persist cycle. Persistence is write-through: every mutation
//! serializes the whole document back to the state store. A failed load
//! starts that store empty with a warning; a failed save logs and keeps the
//! in-memory state authoritative for the rest of the session.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use scout_core::config::LearningConfig;
use scout_core::constants::{
    KEY_CONFIDENCE_THRESHOLDS, KEY_PATTERN_CACHE, KEY_QUERY_EFFECTIVENESS,
    KEY_VERIFICATION_HISTORY,
};
use scout_core::models::pair_map;
use scout_core::models::{
    LearningStats, PatternKey, PersonContext, Platform, QueryStats, ThresholdKey,
    VerificationRecord,
};
use scout_core::traits::IStateStore;

use crate::{defaults, effectiveness, templates, thresholds};

#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryDoc {
    records: HashMap<String, Vec<VerificationRecord>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct EffectivenessDoc {
    queries: HashMap<String, QueryStats>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ThresholdDoc {
    #[serde(with = "pair_map")]
    thresholds: HashMap<ThresholdKey, f64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PatternDoc {
    #[serde(with = "pair_map")]
    patterns: HashMap<PatternKey, Vec<String>>,
}

pub struct LearningStore {
    state: Arc<dyn IStateStore>,
    config: LearningConfig,
    history: Mutex<HistoryDoc>,
    queries: Mutex<EffectivenessDoc>,
    thresholds: Mutex<ThresholdDoc>,
    patterns: Mutex<PatternDoc>,
    stats: Mutex<LearningStats>,
}

impl LearningStore {
    /// Open the store, hydrating each document from the state store.
    pub fn new(state: Arc<dyn IStateStore>, config: LearningConfig) -> Self {
        let store = Self {
            history: Mutex::new(load_doc(&*state, KEY_VERIFICATION_HISTORY)),
            queries: Mutex::new(load_doc(&*state, KEY_QUERY_EFFECTIVENESS)),
            thresholds: Mutex::new(load_doc(&*state, KEY_CONFIDENCE_THRESHOLDS)),
            patterns: Mutex::new(load_doc(&*state, KEY_PATTERN_CACHE)),
            stats: Mutex::new(LearningStats::default()),
            state,
            config,
        };
        info!(
            history = lock(&store.history).records.len(),
            queries = lock(&store.queries).queries.len(),
            thresholds = lock(&store.thresholds).thresholds.len(),
            patterns = lock(&store.patterns).patterns.len(),
            "learning store hydrated"
        );
        store
    }

    /// Append a verification outcome to the person's history. When the
    /// correctness is already known it is stamped on the record and fed
    /// straight into threshold adjustment.
    pub fn record_verification(
        &self,
        person: &PersonContext,
        platform: Platform,
        url: &str,
        confidence: f64,
        is_correct: Option<bool>,
    ) {
        let threshold = self.get_confidence_threshold(&person.sport_key(), platform);
        {
            let mut stats = lock(&self.stats);
            stats.total_verifications += 1;
            if confidence >= threshold {
                stats.successful_verifications += 1;
            }
        }

        {
            let mut history = lock(&self.history);
            let mut record = VerificationRecord::new(platform, url, confidence);
            if is_correct.is_some() {
                record.is_correct = is_correct;
                record.feedback_timestamp = Some(chrono::Utc::now());
            }
            history
                .records
                .entry(person.history_key())
                .or_default()
                .push(record);
            self.persist(KEY_VERIFICATION_HISTORY, &*history);
        }

        if let Some(correct) = is_correct {
            self.update_threshold(&person.sport_key(), platform, confidence, correct);
        }
    }

    /// Record how one query performed: how many matches it surfaced and the
    /// best confidence among them. Queries that find matches are generalized
    /// into the pattern cache.
    pub fn record_query_effectiveness(
        &self,
        query: &str,
        person: &PersonContext,
        platform: Platform,
        matches_found: u64,
        top_confidence: f64,
    ) {
        let sport = person.sport_key();
        {
            let mut queries = lock(&self.queries);
            queries.queries.entry(query.to_string()).or_default().record(
                platform,
                &sport,
                matches_found,
                top_confidence,
            );
            self.persist(KEY_QUERY_EFFECTIVENESS, &*queries);
        }

        if matches_found > 0 {
            self.cache_pattern(query, person, platform);
        }
    }

    /// Suggest up to `max_n` search queries for a person and platform.
    /// Learned templates win outright when any exist; only an empty pattern
    /// cache falls through to the highest-scoring proven queries, with
    /// default shapes filling remaining slots.
    pub fn suggest_queries(
        &self,
        person: &PersonContext,
        platform: Platform,
        max_n: usize,
    ) -> Vec<String> {
        let sport = person.sport_key();
        let mut suggestions: Vec<String> = Vec::new();

        let cached = self.cached_templates(person, platform);
        if !cached.is_empty() {
            lock(&self.stats).pattern_matches += 1;
            for template in cached {
                push_unique(&mut suggestions, templates::personalize(&template, person));
            }
            suggestions.truncate(max_n);
            debug!(
                person = %person.full_name(),
                platform = %platform,
                count = suggestions.len(),
                "query suggestions built from cached templates"
            );
            return suggestions;
        }

        for query in self.ranked_queries(person, platform, &sport) {
            if suggestions.len() >= max_n {
                break;
            }
            push_unique(&mut suggestions, query);
        }

        for query in defaults::default_queries(person, platform) {
            if suggestions.len() >= max_n {
                break;
            }
            push_unique(&mut suggestions, query);
        }

        suggestions.truncate(max_n);
        debug!(
            person = %person.full_name(),
            platform = %platform,
            count = suggestions.len(),
            "query suggestions built"
        );
        suggestions
    }

    /// Acceptance threshold for a (sport, platform) pair: the learned value
    /// when feedback has produced one, else the platform default.
    pub fn get_confidence_threshold(&self, sport: &str, platform: Platform) -> f64 {
        let key = ThresholdKey::new(sport, platform);
        if let Some(threshold) = lock(&self.thresholds).thresholds.get(&key).copied() {
            lock(&self.stats).cache_hits += 1;
            return threshold;
        }
        self.config.default_threshold(platform)
    }

    /// Manual feedback on a previously recorded verification. Locates the
    /// earliest un-judged record for the URL, stamps it, and moves the
    /// (sport, platform) threshold toward agreeing with the observation.
    /// Feedback for an unknown URL records a fresh neutral observation.
    pub fn provide_feedback(
        &self,
        person: &PersonContext,
        platform: Platform,
        url: &str,
        is_correct: bool,
    ) {
        let confidence = {
            let mut history = lock(&self.history);
            let records = history.records.entry(person.history_key()).or_default();
            let confidence = match records
                .iter_mut()
                .find(|r| r.url == url && r.platform == platform && r.is_correct.is_none())
            {
                Some(record) => {
                    record.is_correct = Some(is_correct);
                    record.feedback_timestamp = Some(chrono::Utc::now());
                    record.confidence
                }
                None => {
                    // Feedback arrived without a recorded verification; keep
                    // it as a neutral-confidence observation.
                    let mut record = VerificationRecord::new(platform, url, 0.5);
                    record.is_correct = Some(is_correct);
                    record.feedback_timestamp = Some(chrono::Utc::now());
                    let confidence = record.confidence;
                    records.push(record);
                    confidence
                }
            };
            self.persist(KEY_VERIFICATION_HISTORY, &*history);
            confidence
        };

        self.update_threshold(&person.sport_key(), platform, confidence, is_correct);
    }

    /// Move the (sport, platform) threshold one step when an observation
    /// disagrees with it.
    pub fn update_threshold(
        &self,
        sport: &str,
        platform: Platform,
        confidence: f64,
        is_correct: bool,
    ) {
        let key = ThresholdKey::new(sport, platform);
        let mut thresholds = lock(&self.thresholds);
        let current = thresholds
            .thresholds
            .get(&key)
            .copied()
            .unwrap_or_else(|| self.config.default_threshold(platform));

        if let Some(updated) = thresholds::adjust(current, confidence, is_correct, &self.config) {
            info!(
                sport,
                platform = %platform,
                from = current,
                to = updated,
                "confidence threshold adjusted"
            );
            thresholds.thresholds.insert(key, updated);
            lock(&self.stats).threshold_adjustments += 1;
            self.persist(KEY_CONFIDENCE_THRESHOLDS, &*thresholds);
        }
    }

    /// Snapshot of the learning counters with derived sizes and rates.
    pub fn get_statistics(&self) -> LearningStats {
        let mut stats = lock(&self.stats).clone();
        stats.verification_history_size = lock(&self.history).records.len();
        stats.query_effectiveness_size = lock(&self.queries).queries.len();
        stats.pattern_cache_size = lock(&self.patterns).patterns.len();
        stats.success_rate = if stats.total_verifications == 0 {
            0.0
        } else {
            stats.successful_verifications as f64 / stats.total_verifications as f64
        };
        stats
    }

    /// Templates for this sport and platform: role-specific ones first when
    /// the person has a position, then the general set. Sorted for
    /// deterministic suggestion order.
    fn cached_templates(&self, person: &PersonContext, platform: Platform) -> Vec<String> {
        let sport = person.sport_key();
        let patterns = lock(&self.patterns);
        let mut out: Vec<String> = Vec::new();
        if let Some(role) = role_of(person) {
            if let Some(specific) = patterns
                .patterns
                .get(&PatternKey::new(&sport, platform, Some(role)))
            {
                let mut specific = specific.clone();
                specific.sort();
                out.extend(specific);
            }
        }
        if let Some(general) = patterns.patterns.get(&PatternKey::new(&sport, platform, None)) {
            let mut general = general.clone();
            general.sort();
            for template in general {
                if !out.contains(&template) {
                    out.push(template);
                }
            }
        }
        out
    }

    fn cache_pattern(&self, query: &str, person: &PersonContext, platform: Platform) {
        let template = templates::generalize(query, person);
        let key = PatternKey::new(person.sport_key(), platform, role_of(person));
        let mut patterns = lock(&self.patterns);
        let entry = patterns.patterns.entry(key).or_default();
        if !entry.contains(&template) {
            debug!(template = %template, "query template cached");
            entry.push(template);
            self.persist(KEY_PATTERN_CACHE, &*patterns);
        }
    }

    /// Proven queries for this platform and sport, best first. Queries that
    /// never found a match are skipped; ties break on the query string so
    /// suggestions are deterministic.
    fn ranked_queries(
        &self,
        person: &PersonContext,
        platform: Platform,
        sport: &str,
    ) -> Vec<String> {
        let queries = lock(&self.queries);
        let mut ranked: Vec<(f64, String)> = queries
            .queries
            .iter()
            .filter(|(_, stats)| stats.found_matches > 0)
            .map(|(query, stats)| {
                (
                    effectiveness::score(stats, platform, sport, &self.config),
                    query.clone(),
                )
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });
        drop(queries);

        ranked
            .into_iter()
            .map(|(_, query)| templates::personalize(&templates::generalize(&query, person), person))
            .collect()
    }

    fn persist<T: Serialize>(&self, key: &str, doc: &T) {
        let json = match serde_json::to_string(doc) {
            Ok(json) => json,
            Err(err) => {
                error!(key, error = %err, "learning store serialization failed");
                return;
            }
        };
        if let Err(err) = self.state.save(key, &json) {
            error!(key, error = %err, "learning store save failed, continuing in memory");
        }
    }
}

/// Pattern-cache role dimension: the person's position, normalized.
fn role_of(person: &PersonContext) -> Option<String> {
    person
        .position
        .as_deref()
        .map(str::to_lowercase)
        .filter(|p| !p.is_empty())
}

/// Mutex recovery: a poisoned learning store keeps serving its last state.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

fn load_doc<T: DeserializeOwned + Default>(state: &dyn IStateStore, key: &str) -> T {
    match state.load(key) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(doc) => doc,
            Err(err) => {
                warn!(key, error = %err, "corrupt learning document, starting empty");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(err) => {
            warn!(key, error = %err, "learning document unavailable, starting empty");
            T::default()
        }
    }
}

fn push_unique(queries: &mut Vec<String>, query: String) {
    if !query.is_empty() && !queries.contains(&query) {
        queries.push(query);
    }
}
