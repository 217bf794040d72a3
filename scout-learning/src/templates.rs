//! Query template generalization and personalization.
//!
//! A proven query is generalized by replacing person-specific text with
//! `{first_name}`-style placeholder tokens, cached, and later personalized
//! for the next person by substituting their values back in. Placeholders
//! with no value for the new person are dropped and whitespace is collapsed
//! so templates stay well formed across people with different context.

use std::sync::LazyLock;

use regex::Regex;
use scout_core::models::PersonContext;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Quoted capitalized name pairs are treated as a person name even when they
/// belong to someone other than the person being generalized against, so a
/// proven query about one athlete can be reused for another.
static QUOTED_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[A-Z][a-z]+ [A-Z][a-z]+""#).unwrap());

/// Case-insensitive literal replacement.
fn replace_ci(haystack: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }
    let lower_haystack = haystack.to_lowercase();
    let lower_needle = needle.to_lowercase();
    let mut out = String::with_capacity(haystack.len());
    let mut cursor = 0;
    while let Some(found) = lower_haystack[cursor..].find(&lower_needle) {
        let start = cursor + found;
        out.push_str(&haystack[cursor..start]);
        out.push_str(replacement);
        cursor = start + needle.len();
    }
    out.push_str(&haystack[cursor..]);
    out
}

fn collapse(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").to_string()
}

/// Strip one person's specifics out of a query, longest fields first so the
/// full name is tokenized before its parts.
pub(crate) fn generalize(query: &str, person: &PersonContext) -> String {
    let quoted = QUOTED_NAME_RE
        .replace_all(query, r#""{first_name} {last_name}""#)
        .to_string();
    let mut template = replace_ci(&quoted, &person.full_name(), "{first_name} {last_name}");
    template = replace_ci(&template, &person.first_name, "{first_name}");
    template = replace_ci(&template, &person.last_name, "{last_name}");
    if let Some(school) = &person.school {
        template = replace_ci(&template, school, "{school}");
    }
    if let Some(state) = &person.state {
        template = replace_ci(&template, state, "{state}");
    }
    if let Some(position) = &person.position {
        template = replace_ci(&template, position, "{position}");
    }
    if let Some(year) = &person.year {
        template = replace_ci(&template, year, "{year}");
    }
    if let Some(mascot) = &person.mascot {
        template = replace_ci(&template, mascot, "{mascot}");
    }
    if !person.sport.is_empty() {
        template = replace_ci(&template, &person.sport, "{sport}");
    }
    collapse(&template)
}

/// Fill a template with a person's values. Placeholders the person has no
/// value for are removed.
pub(crate) fn personalize(template: &str, person: &PersonContext) -> String {
    let filled = template
        .replace("{first_name}", &person.first_name)
        .replace("{last_name}", &person.last_name)
        .replace("{school}", person.school.as_deref().unwrap_or(""))
        .replace("{state}", person.state.as_deref().unwrap_or(""))
        .replace("{position}", person.position.as_deref().unwrap_or(""))
        .replace("{year}", person.year.as_deref().unwrap_or(""))
        .replace("{mascot}", person.mascot.as_deref().unwrap_or(""))
        .replace("{sport}", &person.sport);
    collapse(&filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> PersonContext {
        let mut p = PersonContext::new("Jane", "Doe");
        p.sport = "soccer".to_string();
        p.school = Some("Central State".to_string());
        p.state = Some("Ohio".to_string());
        p
    }

    #[test]
    fn round_trip_through_a_template() {
        let query = r#""Jane Doe" Central State soccer roster"#;
        let template = generalize(query, &jane());
        assert_eq!(
            template,
            r#""{first_name} {last_name}" {school} {sport} roster"#
        );

        let mut bob = PersonContext::new("Bob", "Smith");
        bob.sport = "football".to_string();
        bob.school = Some("Western Tech".to_string());
        assert_eq!(
            personalize(&template, &bob),
            r#""Bob Smith" Western Tech football roster"#
        );
    }

    #[test]
    fn generalization_is_case_insensitive() {
        let template = generalize("jane doe OHIO soccer", &jane());
        assert_eq!(template, "{first_name} {last_name} {state} {sport}");
    }

    #[test]
    fn year_and_mascot_round_trip() {
        let mut person = jane();
        person.year = Some("junior".to_string());
        person.mascot = Some("wolves".to_string());
        let template = generalize("jane doe junior wolves soccer", &person);
        assert_eq!(
            template,
            "{first_name} {last_name} {year} {mascot} {sport}"
        );

        let mut bob = PersonContext::new("Bob", "Smith");
        bob.sport = "football".to_string();
        bob.year = Some("senior".to_string());
        bob.mascot = Some("eagles".to_string());
        assert_eq!(
            personalize(&template, &bob),
            "Bob Smith senior eagles football"
        );
    }

    #[test]
    fn quoted_names_of_other_people_are_generalized() {
        let template = generalize(r#""Alex Jones" soccer roster"#, &jane());
        assert_eq!(template, r#""{first_name} {last_name}" {sport} roster"#);
    }

    #[test]
    fn missing_values_collapse_cleanly() {
        let person = PersonContext::new("Bob", "Smith");
        let filled = personalize("{first_name} {last_name} {school} {sport} athlete", &person);
        assert_eq!(filled, "Bob Smith athlete");
    }
}
