/// Scout system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Persistence keys for the four learning stores.
pub const KEY_VERIFICATION_HISTORY: &str = "verification_history";
pub const KEY_QUERY_EFFECTIVENESS: &str = "query_effectiveness";
pub const KEY_CONFIDENCE_THRESHOLDS: &str = "confidence_thresholds";
pub const KEY_PATTERN_CACHE: &str = "pattern_cache";

/// Maximum characters of raw oracle output carried into a fallback rationale.
pub const MAX_FALLBACK_RATIONALE_LEN: usize = 200;

/// Maximum entries in the oracle response cache.
pub const ORACLE_CACHE_CAPACITY: u64 = 10_000;

/// Maximum entries in the batch verifier's per-URL score cache.
pub const SCORE_CACHE_CAPACITY: u64 = 50_000;
