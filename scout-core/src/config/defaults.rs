//! Default values for all subsystem configs.
//!
//! The weighting constants are empirical values carried from field use;
//! they are exposed as config rather than re-derived.

// --- Signal scorer contributions ---
pub const WEIGHT_PROVENANCE_HIGH: f64 = 0.30;
pub const WEIGHT_PROVENANCE_MEDIUM: f64 = 0.15;
pub const WEIGHT_EDU_ATHLETICS: f64 = 0.30;
pub const WEIGHT_LEAGUE_DOMAIN: f64 = 0.30;
pub const WEIGHT_PROFILE_PATH: f64 = 0.15;
pub const WEIGHT_PROFESSIONAL_SITE_PENALTY: f64 = -0.30;
pub const WEIGHT_EXACT_USERNAME: f64 = 0.40;
pub const WEIGHT_PARTIAL_USERNAME: f64 = 0.20;
pub const WEIGHT_URL_USERNAME_PATTERN: f64 = 0.20;
pub const WEIGHT_SCHOOL_IN_URL: f64 = 0.25;
pub const WEIGHT_POSITION_IN_URL: f64 = 0.20;
pub const WEIGHT_MASCOT_IN_URL: f64 = 0.20;
pub const WEIGHT_GENERIC_KEYWORD: f64 = 0.10;
pub const WEIGHT_EDU_EMAIL: f64 = 0.30;
pub const WEIGHT_SCHOOL_IN_EMAIL: f64 = 0.20;
pub const WEIGHT_NAME_IN_EMAIL: f64 = 0.20;
pub const WEIGHT_EXACT_EMAIL_USERNAME: f64 = 0.30;
pub const WEIGHT_PARTIAL_EMAIL_USERNAME: f64 = 0.15;
pub const WEIGHT_SCHOOL_IN_BIO: f64 = 0.25;
pub const WEIGHT_POSITION_IN_BIO: f64 = 0.20;
pub const WEIGHT_YEAR_IN_BIO: f64 = 0.15;
pub const WEIGHT_LEAGUE_IN_BIO: f64 = 0.20;
pub const WEIGHT_POSITIVE_RATIONALE: f64 = 0.10;
pub const WEIGHT_NEGATIVE_RATIONALE: f64 = -0.20;

// --- Multi-stage verification ---
/// Stage 1: reject outright when the oracle is this confident the candidate
/// is the wrong category of profile.
pub const CATEGORY_REJECT_BAR: f64 = 0.6;
/// Stage 3: reject when the oracle is this confident it found disqualifiers.
pub const DISQUALIFIER_REJECT_BAR: f64 = 0.7;
/// Confidence assigned to stage rejections.
pub const REJECT_CONFIDENCE: f64 = 0.1;
/// Identity confidence is discounted by the category confidence, floored
/// here so a shaky category call never zeroes the identity stage.
pub const STAGE_DISCOUNT_FLOOR: f64 = 0.5;

// --- Batch verification ---
pub const BORDERLINE_LOW: f64 = 0.4;
pub const BORDERLINE_HIGH: f64 = 0.8;
pub const MIN_ACCEPT_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_WORKERS: usize = 3;

// --- Adaptive learning ---
pub const DEFAULT_THRESHOLD: f64 = 0.7;
pub const THRESHOLD_STEP: f64 = 0.05;
pub const THRESHOLD_FLOOR: f64 = 0.5;
pub const THRESHOLD_CEILING: f64 = 0.9;
pub const MATCH_RATE_WEIGHT: f64 = 0.7;
pub const AVG_CONFIDENCE_WEIGHT: f64 = 0.3;
pub const SPORT_SCORE_WEIGHT: f64 = 0.7;
pub const PLATFORM_SCORE_WEIGHT: f64 = 0.3;
pub const PROVEN_QUERY_BONUS: f64 = 1.2;
pub const PROVEN_QUERY_MIN_USES: u64 = 5;
pub const PROVEN_QUERY_MIN_MATCH_RATE: f64 = 0.5;
pub const DEFAULT_MAX_QUERIES: usize = 5;
