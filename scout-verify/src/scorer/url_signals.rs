//! Domain, path, and keyword signals read off the candidate URL.

use scout_core::config::SignalWeights;
use scout_core::models::PersonContext;

use super::Accumulator;

const ATHLETICS_TERMS: [&str; 3] = ["athletics", "sports", "roster"];
const PROFILE_PATH_TERMS: [&str; 4] = ["roster", "player", "bio", "profile"];
const PROFESSIONAL_TERMS: [&str; 3] = ["linkedin.com", "indeed.com", "career"];
const GENERIC_KEYWORDS: [&str; 4] = ["ncaa", "athlete", "football", "college"];

pub(crate) fn apply(
    acc: &mut Accumulator,
    url_lower: &str,
    ctx: &PersonContext,
    weights: &SignalWeights,
) {
    // Official institutional and league sources, strongest first. The arms
    // are exclusive: an .edu athletics page does not also collect the
    // generic profile-path contribution.
    if url_lower.contains(".edu") && ATHLETICS_TERMS.iter().any(|t| url_lower.contains(t)) {
        acc.add(weights.edu_athletics, "official_edu_athletics_source");
    } else if url_lower.contains("ncaa.com") {
        acc.add(weights.league_domain, "official_ncaa_source");
    } else if PROFILE_PATH_TERMS.iter().any(|t| url_lower.contains(t)) {
        acc.add(weights.profile_path, "player_profile_page");
    }

    if PROFESSIONAL_TERMS.iter().any(|t| url_lower.contains(t)) {
        acc.add(weights.professional_site_penalty, "professional_profile_penalty");
    }

    // Weighted keyword hits: person-specific keywords outrank generic ones.
    let school = ctx.school.as_deref().map(str::to_lowercase);
    let position = ctx.position.as_deref().map(str::to_lowercase);
    let mascot = ctx.mascot.as_deref().map(str::to_lowercase);

    for kw in &ctx.search_keywords {
        let kw = kw.to_lowercase();
        if kw.is_empty() || !url_lower.contains(&kw) {
            continue;
        }
        if school.as_deref() == Some(kw.as_str()) {
            acc.add(weights.school_in_url, "school_name_match");
        } else if position.as_deref() == Some(kw.as_str()) {
            acc.add(weights.position_in_url, "position_match");
        } else if mascot.as_deref() == Some(kw.as_str()) {
            acc.add(weights.mascot_in_url, "mascot_match");
        } else if GENERIC_KEYWORDS.contains(&kw.as_str()) || kw == ctx.sport_key() {
            acc.add(weights.generic_keyword, format!("keyword_match_{kw}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::config::SignalWeights;

    fn run(url: &str, ctx: &PersonContext) -> Accumulator {
        let mut acc = Accumulator {
            confidence: 0.0,
            signals: Vec::new(),
        };
        apply(&mut acc, url, ctx, &SignalWeights::default());
        acc
    }

    #[test]
    fn edu_athletics_beats_generic_profile_path() {
        let ctx = PersonContext::default();
        let acc = run("https://state.edu/athletics/roster/jane", &ctx);
        // Only the .edu arm fires even though "roster" is also a profile term.
        assert_eq!(acc.signals, vec!["official_edu_athletics_source"]);
        assert!((acc.confidence - 0.30).abs() < 1e-9);
    }

    #[test]
    fn ncaa_domain_counts_as_league_source() {
        let acc = run("https://www.ncaa.com/player/jane-doe", &PersonContext::default());
        assert_eq!(acc.signals, vec!["official_ncaa_source"]);
    }

    #[test]
    fn keyword_classes_are_weighted() {
        let mut ctx = PersonContext::new("Jane", "Doe");
        ctx.sport = "soccer".to_string();
        ctx.school = Some("stateu".to_string());
        ctx.mascot = Some("wolves".to_string());
        ctx.search_keywords = vec![
            "stateu".to_string(),
            "wolves".to_string(),
            "ncaa".to_string(),
            "soccer".to_string(),
        ];
        let acc = run("https://stateu.edu/wolves/ncaa/soccer", &ctx);
        assert!(acc.signals.contains(&"school_name_match".to_string()));
        assert!(acc.signals.contains(&"mascot_match".to_string()));
        assert!(acc.signals.contains(&"keyword_match_ncaa".to_string()));
        assert!(acc.signals.contains(&"keyword_match_soccer".to_string()));
    }
}
