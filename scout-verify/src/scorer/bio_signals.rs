//! Free-text signals from profile bios and upstream analysis rationale.

use scout_core::config::SignalWeights;
use scout_core::models::PersonContext;

use super::Accumulator;

const LEAGUE_TERMS: [&str; 3] = ["ncaa", "college football", "athlete"];
const POSITIVE_RATIONALE_TERMS: [&str; 3] = ["official", "verified", "confirmed"];
const NEGATIVE_RATIONALE_TERMS: [&str; 3] = ["unrelated", "different person", "not the athlete"];

pub(crate) fn apply_bio(
    acc: &mut Accumulator,
    bio_lower: &str,
    ctx: &PersonContext,
    weights: &SignalWeights,
) {
    if let Some(school) = ctx.school.as_deref() {
        let school = school.to_lowercase();
        if !school.is_empty() && bio_lower.contains(&school) {
            acc.add(weights.school_in_bio, "school_in_bio");
        }
    }
    if let Some(position) = ctx.position.as_deref() {
        let position = position.to_lowercase();
        if !position.is_empty() && bio_lower.contains(&position) {
            acc.add(weights.position_in_bio, "position_in_bio");
        }
    }
    if let Some(year) = ctx.year.as_deref() {
        let year = year.to_lowercase();
        if !year.is_empty() && bio_lower.contains(&year) {
            acc.add(weights.year_in_bio, "year_in_bio");
        }
    }
    if LEAGUE_TERMS.iter().any(|t| bio_lower.contains(t)) {
        acc.add(weights.league_in_bio, "ncaa_reference_in_bio");
    }
}

/// Rationale text attached by an earlier analysis pass carries a weak
/// endorsement or a strong refutation.
pub(crate) fn apply_rationale(
    acc: &mut Accumulator,
    rationale_lower: &str,
    weights: &SignalWeights,
) {
    if POSITIVE_RATIONALE_TERMS
        .iter()
        .any(|t| rationale_lower.contains(t))
    {
        acc.add(weights.positive_rationale, "positive_ai_reasoning");
    }
    if NEGATIVE_RATIONALE_TERMS
        .iter()
        .any(|t| rationale_lower.contains(t))
    {
        acc.add(weights.negative_rationale, "negative_ai_reasoning");
    }
}
