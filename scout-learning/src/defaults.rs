//! Default query shapes used when no learned pattern applies.

use scout_core::models::{PersonContext, Platform};

use crate::templates;

/// Template set for a platform, in preference order. Social platforms pin
/// the search to their domain; contact channels lean on institutional pages.
fn shapes(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Twitter => &[
            r#"site:twitter.com "{first_name} {last_name}" {sport}"#,
            r#"site:twitter.com "{first_name} {last_name}" {school}"#,
            r#""{first_name} {last_name}" {sport} twitter"#,
        ],
        Platform::Instagram => &[
            r#"site:instagram.com "{first_name} {last_name}" {sport}"#,
            r#""{first_name} {last_name}" {school} instagram"#,
        ],
        Platform::Facebook => &[
            r#"site:facebook.com "{first_name} {last_name}" {school}"#,
            r#""{first_name} {last_name}" {sport} facebook"#,
        ],
        Platform::Email => &[
            r#"site:.edu "{first_name} {last_name}" email {school}"#,
            r#""{first_name} {last_name}" {school} athletics contact"#,
        ],
        Platform::Phone => &[r#""{first_name} {last_name}" {school} athletics contact"#],
        Platform::Other => &[
            r#"site:.edu athletics roster "{first_name} {last_name}""#,
            r#""{first_name} {last_name}" {school} {sport}"#,
            r#""{first_name} {last_name}" {state} {sport}"#,
            r#"site:ncaa.com "{first_name} {last_name}""#,
            r#""{first_name} {last_name}" {sport} athlete"#,
        ],
    }
}

/// Personalized default queries for a platform, already deduplicated.
pub(crate) fn default_queries(person: &PersonContext, platform: Platform) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for shape in shapes(platform) {
        let query = templates::personalize(shape, person);
        if !out.contains(&query) {
            out.push(query);
        }
    }
    out
}
