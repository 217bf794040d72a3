//! Username pattern matching against the candidate URL.
//!
//! Social URLs get their username segment extracted and compared against
//! the person's known patterns; platform navigation paths (search, explore,
//! pages, ...) are never treated as usernames.

use std::sync::LazyLock;

use regex::Regex;

use scout_core::config::SignalWeights;
use scout_core::models::PersonContext;

use super::Accumulator;

static TWITTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:twitter\.com|x\.com)/([^/?#]+)").unwrap());
static FACEBOOK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"facebook\.com/([^/?#]+)").unwrap());
static FACEBOOK_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"profile\.php\?id=(\d+)").unwrap());
static INSTAGRAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"instagram\.com/([^/?#]+)").unwrap());

const TWITTER_NON_PROFILE: [&str; 8] = [
    "home", "search", "explore", "notifications", "messages", "i", "settings", "compose",
];
const FACEBOOK_NON_PROFILE: [&str; 7] = [
    "public", "pages", "groups", "events", "marketplace", "watch", "gaming",
];
const INSTAGRAM_NON_PROFILE: [&str; 7] =
    ["explore", "direct", "stories", "reels", "tv", "shop", "accounts"];

/// Extract the username segment from a social-profile URL, filtering out
/// platform navigation paths. Returns `None` for non-social URLs.
pub fn extract_social_username(url_lower: &str) -> Option<String> {
    if url_lower.contains("twitter.com") || url_lower.contains("x.com/") {
        let username = TWITTER_RE.captures(url_lower)?.get(1)?.as_str();
        if TWITTER_NON_PROFILE.contains(&username) {
            return None;
        }
        return Some(username.to_string());
    }
    if url_lower.contains("facebook.com") {
        if let Some(caps) = FACEBOOK_ID_RE.captures(url_lower) {
            return Some(format!("profile_{}", &caps[1]));
        }
        let username = FACEBOOK_RE.captures(url_lower)?.get(1)?.as_str();
        if FACEBOOK_NON_PROFILE.contains(&username) {
            return None;
        }
        return Some(username.to_string());
    }
    if url_lower.contains("instagram.com") {
        let username = INSTAGRAM_RE.captures(url_lower)?.get(1)?.as_str();
        if INSTAGRAM_NON_PROFILE.contains(&username) {
            return None;
        }
        return Some(username.to_string());
    }
    None
}

pub(crate) fn apply(
    acc: &mut Accumulator,
    url_lower: &str,
    ctx: &PersonContext,
    weights: &SignalWeights,
) {
    if !ctx
        .username_patterns
        .iter()
        .any(|p| !p.is_empty() && url_lower.contains(p.as_str()))
    {
        return;
    }

    let username = extract_social_username(url_lower);
    for pattern in &ctx.username_patterns {
        if pattern.is_empty() {
            continue;
        }
        match &username {
            Some(name) => {
                if name == pattern || name.starts_with(pattern.as_str()) {
                    acc.add(weights.exact_username, "exact_username_match");
                    return;
                }
                if name.contains(pattern.as_str()) {
                    acc.add(weights.partial_username, "partial_username_match");
                    return;
                }
            }
            None => {
                if url_lower.contains(pattern.as_str()) {
                    acc.add(weights.url_username_pattern, "url_contains_username_pattern");
                    return;
                }
            }
        }
    }
}
