//! Adapter between the verification pipeline and the external reasoning
//! service. Normalizes every judgment into a [`StageVerdict`], caches
//! successful judgments by content hash, and keeps transport failures typed
//! so callers can degrade instead of aborting.

pub mod parse;
pub mod prompts;

use std::sync::Arc;

use moka::sync::Cache;
use tracing::{debug, warn};

use scout_core::config::VerifyConfig;
use scout_core::constants::ORACLE_CACHE_CAPACITY;
use scout_core::errors::OracleError;
use scout_core::models::{Candidate, PersonContext, ScoreResult, StageVerdict};
use scout_core::traits::IOracleTransport;

/// Which of the four judgments a cache entry answers.
#[derive(Debug, Clone, Copy)]
enum Judgment {
    CategoryPlausibility,
    SpecificIdentity,
    Disqualifiers,
    FreeTextContent,
}

impl Judgment {
    fn as_str(self) -> &'static str {
        match self {
            Self::CategoryPlausibility => "category_plausibility",
            Self::SpecificIdentity => "specific_identity",
            Self::Disqualifiers => "disqualifiers",
            Self::FreeTextContent => "free_text_content",
        }
    }
}

/// Bundle the evidence the oracle stages reason over for one candidate.
pub fn candidate_evidence(candidate: &Candidate, score: &ScoreResult) -> serde_json::Value {
    serde_json::json!({
        "url": candidate.url,
        "platform": candidate.platform.as_str(),
        "email": candidate.email,
        "bio": candidate.bio,
        "heuristic_confidence": score.confidence,
        "heuristic_signals": score.signals,
    })
}

pub struct OracleAdapter {
    transport: Arc<dyn IOracleTransport>,
    cache: Cache<String, StageVerdict>,
    config: VerifyConfig,
}

impl OracleAdapter {
    pub fn new(transport: Arc<dyn IOracleTransport>, config: VerifyConfig) -> Self {
        Self {
            transport,
            cache: Cache::new(ORACLE_CACHE_CAPACITY),
            config,
        }
    }

    /// Stage 1: is the evidence plausibly a student-athlete profile at all?
    pub fn assess_category_plausibility(
        &self,
        evidence: &serde_json::Value,
    ) -> Result<StageVerdict, OracleError> {
        self.judge(Judgment::CategoryPlausibility, "", evidence, || {
            prompts::category_plausibility(evidence)
        })
    }

    /// Stage 2: is this the specific target person? Identity confidence is
    /// discounted by the category confidence, floored so a shaky category
    /// call never zeroes the stage.
    pub fn assess_specific_identity(
        &self,
        evidence: &serde_json::Value,
        person: &PersonContext,
        category_confidence: f64,
    ) -> Result<StageVerdict, OracleError> {
        let mut verdict = self.judge(
            Judgment::SpecificIdentity,
            &person.history_key(),
            evidence,
            || prompts::specific_identity(evidence, person),
        )?;
        verdict.confidence *= category_confidence.max(self.config.stage_discount_floor);
        Ok(verdict)
    }

    /// Stage 3: does the evidence prove this is NOT the target person?
    pub fn assess_disqualifiers(
        &self,
        evidence: &serde_json::Value,
        person: &PersonContext,
    ) -> Result<StageVerdict, OracleError> {
        self.judge(Judgment::Disqualifiers, &person.history_key(), evidence, || {
            prompts::disqualifiers(evidence, person)
        })
    }

    /// Free-text page judgment used by search-results analysis.
    pub fn assess_free_text_content(
        &self,
        url: &str,
        content: &str,
        person: &PersonContext,
    ) -> Result<StageVerdict, OracleError> {
        let evidence = serde_json::json!({ "url": url, "content": content });
        self.judge(Judgment::FreeTextContent, &person.history_key(), &evidence, || {
            prompts::free_text_content(url, content, person)
        })
    }

    /// One cached round trip: ask, interpret, remember. Only successful
    /// calls are cached; a transport failure must stay retryable.
    fn judge(
        &self,
        kind: Judgment,
        identity: &str,
        evidence: &serde_json::Value,
        build_prompt: impl FnOnce() -> String,
    ) -> Result<StageVerdict, OracleError> {
        let key = cache_key(identity, kind, evidence);
        if let Some(cached) = self.cache.get(&key) {
            debug!(judgment = kind.as_str(), "oracle cache hit");
            return Ok(cached);
        }

        let raw = self
            .transport
            .ask(&build_prompt(), prompts::VERDICT_SCHEMA_HINT)
            .map_err(|err| {
                warn!(judgment = kind.as_str(), error = %err, "oracle call failed");
                err
            })?;
        let verdict = parse::interpret(&raw);
        self.cache.insert(key, verdict.clone());
        Ok(verdict)
    }
}

fn cache_key(identity: &str, kind: Judgment, evidence: &serde_json::Value) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(identity.as_bytes());
    hasher.update(kind.as_str().as_bytes());
    hasher.update(evidence.to_string().as_bytes());
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingOracle {
        calls: AtomicUsize,
        response: String,
    }

    impl IOracleTransport for CountingOracle {
        fn ask(&self, _prompt: &str, _schema_hint: &str) -> Result<String, OracleError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    fn adapter(response: &str) -> (OracleAdapter, Arc<CountingOracle>) {
        let oracle = Arc::new(CountingOracle {
            calls: AtomicUsize::new(0),
            response: response.to_string(),
        });
        (
            OracleAdapter::new(oracle.clone(), VerifyConfig::default()),
            oracle,
        )
    }

    #[test]
    fn identical_evidence_is_answered_from_cache() {
        let (adapter, oracle) =
            adapter(r#"{"verdict": true, "confidence": 0.9, "rationale": "athlete page"}"#);
        let evidence = serde_json::json!({"url": "https://x.test/a"});
        let first = adapter.assess_category_plausibility(&evidence).unwrap();
        let second = adapter.assess_category_plausibility(&evidence).unwrap();
        assert!(first.verdict && second.verdict);
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn identity_confidence_is_discounted_with_floor() {
        let (adapter, _) =
            adapter(r#"{"verdict": true, "confidence": 0.8, "rationale": "same person"}"#);
        let person = PersonContext::new("Jane", "Doe");
        let evidence = serde_json::json!({"url": "https://x.test/a"});

        // Category confidence below the floor discounts by the floor itself.
        let v = adapter
            .assess_specific_identity(&evidence, &person, 0.2)
            .unwrap();
        assert!((v.confidence - 0.8 * 0.5).abs() < 1e-9);

        let v = adapter
            .assess_specific_identity(&evidence, &person, 0.9)
            .unwrap();
        assert!((v.confidence - 0.8 * 0.9).abs() < 1e-9);
    }

    #[test]
    fn transport_failure_is_not_cached() {
        struct FailingOracle {
            calls: AtomicUsize,
        }
        impl IOracleTransport for FailingOracle {
            fn ask(&self, _prompt: &str, _schema_hint: &str) -> Result<String, OracleError> {
                self.calls.fetch_add(1, Ordering::SeqCst);
                Err(OracleError::transport("connection refused"))
            }
        }
        let oracle = Arc::new(FailingOracle {
            calls: AtomicUsize::new(0),
        });
        let adapter = OracleAdapter::new(oracle.clone(), VerifyConfig::default());
        let evidence = serde_json::json!({"url": "https://x.test/a"});
        assert!(adapter.assess_category_plausibility(&evidence).is_err());
        assert!(adapter.assess_category_plausibility(&evidence).is_err());
        assert_eq!(oracle.calls.load(Ordering::SeqCst), 2);
    }
}
