//! Prompt construction for the four oracle judgments.
//!
//! Each prompt states the question, pins the response to a JSON shape, and
//! carries whatever person context the judgment needs. The schema hint is
//! passed alongside so transports that support response-format constraints
//! can enforce it.

use scout_core::models::PersonContext;

/// JSON shape every judgment is asked to answer in.
pub const VERDICT_SCHEMA_HINT: &str = r#"{"verdict": boolean, "confidence": number between 0 and 1, "rationale": string, "evidence": [string], "contradictions": [string]}"#;

/// Sport-specific vocabulary that helps the oracle recognize in-domain
/// evidence (roster pages, stat lines, position names).
fn sport_context(person: &PersonContext) -> String {
    let terms = match person.sport_key().as_str() {
        "football" => "depth chart, recruiting class, positions like QB/WR/LB, hudl highlights",
        "basketball" => "starting lineup, points per game, positions like guard/forward/center",
        "soccer" => "match reports, positions like midfielder/striker/keeper, club and school teams",
        "baseball" | "softball" => "batting average, ERA, positions like pitcher/catcher/shortstop",
        "track" | "track and field" => "meet results, event times, sprints/distance/field events",
        _ => "roster listings, season statistics, position or event names",
    };
    format!(
        "The target competes in {}. Relevant evidence often includes: {}.",
        person.sport_key(),
        terms
    )
}

fn person_block(person: &PersonContext) -> String {
    let mut block = format!(
        "Target person:\n- name: {}\n- sport: {}",
        person.full_name(),
        person.sport_key()
    );
    if let Some(school) = &person.school {
        block.push_str(&format!("\n- school: {school}"));
    }
    if let Some(position) = &person.position {
        block.push_str(&format!("\n- position: {position}"));
    }
    if let Some(year) = &person.year {
        block.push_str(&format!("\n- year: {year}"));
    }
    if let Some(state) = &person.state {
        block.push_str(&format!("\n- state: {state}"));
    }
    block
}

pub(crate) fn category_plausibility(evidence: &serde_json::Value) -> String {
    format!(
        "You are screening web evidence about a person.\n\
         Question: is this plausibly the profile of a college or high school \
         student-athlete at all, as opposed to a business, a team account, a \
         news article, or an adult professional?\n\n\
         Evidence:\n{evidence}\n\n\
         Answer with verdict=true when the category is plausible. \
         Respond only with JSON matching: {VERDICT_SCHEMA_HINT}"
    )
}

pub(crate) fn specific_identity(evidence: &serde_json::Value, person: &PersonContext) -> String {
    format!(
        "{}\n{}\n\n\
         Question: does this evidence belong to this specific person, not \
         merely someone with a similar name?\n\n\
         Evidence:\n{evidence}\n\n\
         Weigh name, school, sport, position, and location agreement. \
         List supporting points in \"evidence\" and conflicts in \
         \"contradictions\". Respond only with JSON matching: {VERDICT_SCHEMA_HINT}",
        person_block(person),
        sport_context(person),
    )
}

pub(crate) fn disqualifiers(evidence: &serde_json::Value, person: &PersonContext) -> String {
    format!(
        "{}\n\n\
         Question: does this evidence contain disqualifying facts proving it \
         is NOT the target person (wrong school, wrong sport, wrong location, \
         age or graduation year incompatible, explicitly a different person)?\n\n\
         Evidence:\n{evidence}\n\n\
         Answer with verdict=true only when a disqualifier is present, and \
         list each one in \"contradictions\". Respond only with JSON \
         matching: {VERDICT_SCHEMA_HINT}",
        person_block(person),
    )
}

pub(crate) fn free_text_content(url: &str, content: &str, person: &PersonContext) -> String {
    format!(
        "{}\n{}\n\n\
         Page URL: {url}\n\
         Page content:\n{content}\n\n\
         Question: is this page about the target person? Answer with \
         verdict=true when it is. Respond only with JSON matching: \
         {VERDICT_SCHEMA_HINT}",
        person_block(person),
        sport_context(person),
    )
}
