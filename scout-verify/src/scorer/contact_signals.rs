//! Email-address signals: institutional domain, school and name presence,
//! and local-part matches against known username patterns.

use scout_core::config::SignalWeights;
use scout_core::models::PersonContext;

use super::Accumulator;

pub(crate) fn apply(
    acc: &mut Accumulator,
    email_lower: &str,
    ctx: &PersonContext,
    weights: &SignalWeights,
) {
    // The school bonus only applies on top of an institutional address.
    if email_lower.ends_with(".edu") {
        acc.add(weights.edu_email, "edu_email_domain");
        if let Some(school) = ctx.school.as_deref() {
            let school = school.to_lowercase();
            let compact: String = school.split_whitespace().collect();
            if !compact.is_empty() && email_lower.contains(&compact) {
                acc.add(weights.school_in_email, "school_in_email");
            }
        }
    }

    if ctx
        .name_parts()
        .iter()
        .any(|part| email_lower.contains(part.as_str()))
    {
        acc.add(weights.name_in_email, "name_in_email");
    }

    let local_part = match email_lower.split('@').next() {
        Some(local) if !local.is_empty() => local,
        _ => return,
    };
    for pattern in &ctx.username_patterns {
        if pattern.is_empty() {
            continue;
        }
        if local_part == pattern {
            acc.add(weights.exact_email_username, "exact_email_username_match");
            return;
        }
        if local_part.contains(pattern.as_str()) {
            acc.add(weights.partial_email_username, "partial_email_username_match");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_core::config::SignalWeights;

    fn run(email: &str, ctx: &PersonContext) -> Accumulator {
        let mut acc = Accumulator {
            confidence: 0.0,
            signals: Vec::new(),
        };
        apply(&mut acc, email, ctx, &SignalWeights::default());
        acc
    }

    fn ctx() -> PersonContext {
        let mut ctx = PersonContext::new("Jane", "Doe");
        ctx.school = Some("Central State".to_string());
        ctx.username_patterns = vec!["janedoe".to_string(), "jdoe".to_string()];
        ctx
    }

    #[test]
    fn institutional_email_with_school_and_name() {
        let acc = run("jane.doe@centralstate.edu", &ctx());
        assert!(acc.signals.contains(&"edu_email_domain".to_string()));
        assert!(acc.signals.contains(&"school_in_email".to_string()));
        assert!(acc.signals.contains(&"name_in_email".to_string()));
    }

    #[test]
    fn exact_local_part_stops_pattern_scan() {
        let acc = run("jdoe@gmail.com", &ctx());
        assert!(acc
            .signals
            .contains(&"exact_email_username_match".to_string()));
        assert!(!acc
            .signals
            .contains(&"partial_email_username_match".to_string()));
    }

    #[test]
    fn partial_local_part_match() {
        let acc = run("janedoe22@gmail.com", &ctx());
        assert!(acc
            .signals
            .contains(&"partial_email_username_match".to_string()));
    }

    #[test]
    fn school_bonus_requires_an_institutional_address() {
        let acc = run("contact@centralstatefans.com", &ctx());
        assert!(!acc.signals.contains(&"edu_email_domain".to_string()));
        assert!(!acc.signals.contains(&"school_in_email".to_string()));
    }

    #[test]
    fn edu_must_be_the_domain_suffix() {
        let acc = run("info@centralstate.education", &ctx());
        assert!(!acc.signals.contains(&"edu_email_domain".to_string()));
    }

    #[test]
    fn unrelated_email_scores_nothing() {
        let acc = run("bob.smith@gmail.com", &ctx());
        assert!(acc.signals.is_empty());
        assert_eq!(acc.confidence, 0.0);
    }
}
