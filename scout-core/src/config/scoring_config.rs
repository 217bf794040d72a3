use serde::{Deserialize, Serialize};

use super::defaults;

/// Additive confidence contributions for each scorer signal.
///
/// Values are empirical; contributions accumulate from 0.0 and the total is
/// upper-clamped to 1.0 only after all signals are applied, so a large
/// penalty can cancel several positive signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    pub provenance_high: f64,
    pub provenance_medium: f64,
    /// Official .edu domain with an athletics/roster path segment.
    pub edu_athletics: f64,
    /// Official league-wide domain (ncaa.com).
    pub league_domain: f64,
    /// Generic roster/player/bio/profile path segment.
    pub profile_path: f64,
    /// Professional-network domains (linkedin, indeed, career sites).
    pub professional_site_penalty: f64,
    pub exact_username: f64,
    pub partial_username: f64,
    /// Known username pattern appearing in a non-social URL.
    pub url_username_pattern: f64,
    pub school_in_url: f64,
    pub position_in_url: f64,
    pub mascot_in_url: f64,
    pub generic_keyword: f64,
    pub edu_email: f64,
    pub school_in_email: f64,
    pub name_in_email: f64,
    pub exact_email_username: f64,
    pub partial_email_username: f64,
    pub school_in_bio: f64,
    pub position_in_bio: f64,
    pub year_in_bio: f64,
    pub league_in_bio: f64,
    pub positive_rationale: f64,
    pub negative_rationale: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            provenance_high: defaults::WEIGHT_PROVENANCE_HIGH,
            provenance_medium: defaults::WEIGHT_PROVENANCE_MEDIUM,
            edu_athletics: defaults::WEIGHT_EDU_ATHLETICS,
            league_domain: defaults::WEIGHT_LEAGUE_DOMAIN,
            profile_path: defaults::WEIGHT_PROFILE_PATH,
            professional_site_penalty: defaults::WEIGHT_PROFESSIONAL_SITE_PENALTY,
            exact_username: defaults::WEIGHT_EXACT_USERNAME,
            partial_username: defaults::WEIGHT_PARTIAL_USERNAME,
            url_username_pattern: defaults::WEIGHT_URL_USERNAME_PATTERN,
            school_in_url: defaults::WEIGHT_SCHOOL_IN_URL,
            position_in_url: defaults::WEIGHT_POSITION_IN_URL,
            mascot_in_url: defaults::WEIGHT_MASCOT_IN_URL,
            generic_keyword: defaults::WEIGHT_GENERIC_KEYWORD,
            edu_email: defaults::WEIGHT_EDU_EMAIL,
            school_in_email: defaults::WEIGHT_SCHOOL_IN_EMAIL,
            name_in_email: defaults::WEIGHT_NAME_IN_EMAIL,
            exact_email_username: defaults::WEIGHT_EXACT_EMAIL_USERNAME,
            partial_email_username: defaults::WEIGHT_PARTIAL_EMAIL_USERNAME,
            school_in_bio: defaults::WEIGHT_SCHOOL_IN_BIO,
            position_in_bio: defaults::WEIGHT_POSITION_IN_BIO,
            year_in_bio: defaults::WEIGHT_YEAR_IN_BIO,
            league_in_bio: defaults::WEIGHT_LEAGUE_IN_BIO,
            positive_rationale: defaults::WEIGHT_POSITIVE_RATIONALE,
            negative_rationale: defaults::WEIGHT_NEGATIVE_RATIONALE,
        }
    }
}
