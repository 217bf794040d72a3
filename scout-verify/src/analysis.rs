//! Search-results analysis: turn raw search output into candidates.
//!
//! The oracle is asked to extract candidate profiles from the result text;
//! when its answer cannot be parsed, extraction falls back to direct link
//! inspection with name-derived confidence estimates. Either path produces
//! candidates with an extraction confidence, which the batch verifier then
//! re-scores on its own signals.

use std::sync::Arc;

use tracing::{debug, warn};

use scout_core::errors::OracleError;
use scout_core::models::{Candidate, PersonContext, Platform, Provenance, StageVerdict};
use scout_core::traits::IOracleTransport;

use crate::oracle::OracleAdapter;
use crate::scorer::extract_social_username;

const EXTRACTION_SCHEMA_HINT: &str =
    r#"[{"url": string, "platform": string, "confidence": number between 0 and 1, "reasoning": string}]"#;

/// Paths that are platform or site chrome, never a person's profile.
const NON_PROFILE_SEGMENTS: [&str; 8] = [
    "/search", "/login", "/signup", "/help", "/about", "/privacy", "/terms", "/sitemap",
];

const BASE_CONFIDENCE: f64 = 0.4;
const EXACT_NAME_CONFIDENCE: f64 = 0.7;
const INITIAL_NAME_CONFIDENCE: f64 = 0.65;
const PARTIAL_NAME_CONFIDENCE: f64 = 0.6;
const NAME_IN_URL_CONFIDENCE: f64 = 0.55;
const EDU_ATHLETICS_CONFIDENCE: f64 = 0.6;
const SCHOOL_OR_SPORT_BONUS: f64 = 0.1;
const POSITION_BONUS: f64 = 0.05;
const LEAGUE_KEYWORD_BONUS: f64 = 0.1;
const EXTRACTION_CAP: f64 = 0.85;

/// A candidate pulled out of search results, with the extractor's own
/// confidence that the link is worth verifying at all.
#[derive(Debug, Clone)]
pub struct ExtractedCandidate {
    pub candidate: Candidate,
    pub confidence: f64,
}

pub struct SearchAnalyzer {
    transport: Arc<dyn IOracleTransport>,
}

impl SearchAnalyzer {
    pub fn new(transport: Arc<dyn IOracleTransport>) -> Self {
        Self { transport }
    }

    /// Extract candidate profiles from search-result text and links.
    ///
    /// Never fails: an unreachable or unparsable oracle falls back to
    /// direct link extraction.
    pub fn analyze_search_results(
        &self,
        text: &str,
        links: &[String],
        person: &PersonContext,
    ) -> Vec<ExtractedCandidate> {
        match self.ask_for_candidates(text, person) {
            Ok(candidates) if !candidates.is_empty() => candidates,
            Ok(_) => {
                debug!("oracle extracted no candidates, using direct extraction");
                extract_directly(links, person)
            }
            Err(err) => {
                warn!(error = %err, "candidate extraction via oracle failed");
                extract_directly(links, person)
            }
        }
    }

    /// Judge a fetched page against the target person. Transport failure
    /// maps to the inconclusive verdict rather than an error.
    pub fn analyze_profile_content(
        &self,
        adapter: &OracleAdapter,
        url: &str,
        content: &str,
        person: &PersonContext,
    ) -> StageVerdict {
        match adapter.assess_free_text_content(url, content, person) {
            Ok(verdict) => verdict,
            Err(err) => StageVerdict::inconclusive(err.to_string()),
        }
    }

    fn ask_for_candidates(
        &self,
        text: &str,
        person: &PersonContext,
    ) -> Result<Vec<ExtractedCandidate>, OracleError> {
        let prompt = format!(
            "Extract every link from these search results that could be a \
             profile or contact page for {} ({}, {}). Ignore navigation, \
             news articles, and unrelated people.\n\nSearch results:\n{}\n\n\
             Respond only with a JSON array matching: {}",
            person.full_name(),
            person.sport_key(),
            person.school.as_deref().unwrap_or("school unknown"),
            text,
            EXTRACTION_SCHEMA_HINT,
        );
        let raw = self.transport.ask(&prompt, EXTRACTION_SCHEMA_HINT)?;
        parse_candidate_list(&raw).ok_or_else(|| OracleError::parse(truncate(&raw)))
    }
}

fn truncate(raw: &str) -> String {
    raw.chars().take(120).collect()
}

fn parse_candidate_list(raw: &str) -> Option<Vec<ExtractedCandidate>> {
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    let items: Vec<serde_json::Value> = serde_json::from_str(&raw[start..=end]).ok()?;

    let mut out = Vec::new();
    for item in items {
        let Some(url) = item.get("url").and_then(|v| v.as_str()) else {
            continue;
        };
        let confidence = item
            .get("confidence")
            .and_then(|v| v.as_f64())
            .unwrap_or(BASE_CONFIDENCE)
            .clamp(0.0, 1.0);
        let mut candidate =
            Candidate::new(url, Platform::classify(url), Provenance::Unknown);
        candidate.rationale = item
            .get("reasoning")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        out.push(ExtractedCandidate {
            candidate,
            confidence,
        });
    }
    Some(out)
}

/// Direct extraction path: classify each link and estimate confidence from
/// how strongly the URL itself echoes the person's name and context.
fn extract_directly(links: &[String], person: &PersonContext) -> Vec<ExtractedCandidate> {
    links
        .iter()
        .filter(|url| is_plausible_profile_link(url))
        .map(|url| {
            let candidate = Candidate::new(
                url.clone(),
                Platform::classify(url),
                Provenance::Unknown,
            );
            let confidence = estimate_url_confidence(url, person);
            ExtractedCandidate {
                candidate,
                confidence,
            }
        })
        .collect()
}

fn is_plausible_profile_link(url: &str) -> bool {
    let lower = url.to_lowercase();
    if !lower.starts_with("http") {
        return false;
    }
    if NON_PROFILE_SEGMENTS.iter().any(|seg| lower.contains(seg)) {
        return false;
    }
    // Social-platform links must resolve to an actual username, not chrome.
    let social = matches!(
        Platform::classify(url),
        Platform::Twitter | Platform::Facebook | Platform::Instagram
    );
    !social || extract_social_username(&lower).is_some()
}

fn estimate_url_confidence(url: &str, person: &PersonContext) -> f64 {
    let lower = url.to_lowercase();
    let first = person.first_name.to_lowercase();
    let last = person.last_name.to_lowercase();
    let username = extract_social_username(&lower).unwrap_or_else(|| {
        lower
            .rsplit('/')
            .find(|seg| !seg.is_empty())
            .unwrap_or("")
            .to_string()
    });

    let mut confidence = BASE_CONFIDENCE;
    if let (Some(fi), Some(li)) = (first.chars().next(), last.chars().next()) {
        let exact = format!("{first}{last}");
        let initial_last = format!("{fi}{last}");
        let first_initial = format!("{first}{li}");
        if username == exact {
            confidence = EXACT_NAME_CONFIDENCE;
        } else if username == initial_last || username == first_initial {
            confidence = INITIAL_NAME_CONFIDENCE;
        } else if username.contains(&last) || username.contains(&first) {
            confidence = PARTIAL_NAME_CONFIDENCE;
        } else if lower.contains(&last) || lower.contains(&first) {
            confidence = NAME_IN_URL_CONFIDENCE;
        }
    }
    if lower.contains(".edu") && (lower.contains("athletics") || lower.contains("roster")) {
        confidence = confidence.max(EDU_ATHLETICS_CONFIDENCE);
    }

    let school = person.school.as_deref().map(str::to_lowercase);
    if school.as_deref().is_some_and(|s| !s.is_empty() && lower.contains(s))
        || (!person.sport.is_empty() && lower.contains(&person.sport_key()))
    {
        confidence += SCHOOL_OR_SPORT_BONUS;
    }
    let position = person.position.as_deref().map(str::to_lowercase);
    if position.as_deref().is_some_and(|p| !p.is_empty() && lower.contains(p)) {
        confidence += POSITION_BONUS;
    }
    if lower.contains("ncaa") || lower.contains("athlete") {
        confidence += LEAGUE_KEYWORD_BONUS;
    }

    confidence.min(EXTRACTION_CAP)
}
