use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a piece of candidate evidence can live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    Email,
    Phone,
    Other,
}

impl Platform {
    /// Classify a URL or contact string into a platform.
    ///
    /// This is the only sanctioned re-classification path; a candidate's
    /// platform tag is never reinterpreted elsewhere.
    pub fn classify(url: &str) -> Self {
        let lower = url.to_lowercase();
        if lower.contains("twitter.com") || lower.contains("x.com/") {
            Self::Twitter
        } else if lower.contains("facebook.com") {
            Self::Facebook
        } else if lower.contains("instagram.com") {
            Self::Instagram
        } else if lower.contains('@') && !lower.starts_with("http") {
            Self::Email
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How trustworthy the upstream source of a candidate was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    High,
    Medium,
    #[default]
    Unknown,
}

/// One putative piece of contact/profile evidence for a target person.
///
/// Created fresh per search; only aggregated statistics persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// URL or contact string.
    pub url: String,
    pub platform: Platform,
    #[serde(default)]
    pub provenance: Provenance,
    /// Contact email when the candidate carries one separately from the URL.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-text bio or snippet from the source page.
    #[serde(default)]
    pub bio: Option<String>,
    /// Rationale text carried from upstream extraction.
    #[serde(default)]
    pub rationale: Option<String>,
}

impl Candidate {
    pub fn new(url: impl Into<String>, platform: Platform, provenance: Provenance) -> Self {
        Self {
            url: url.into(),
            platform,
            provenance,
            email: None,
            bio: None,
            rationale: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_social_urls() {
        assert_eq!(
            Platform::classify("https://twitter.com/jdoe"),
            Platform::Twitter
        );
        assert_eq!(
            Platform::classify("https://www.instagram.com/jdoe"),
            Platform::Instagram
        );
        assert_eq!(
            Platform::classify("https://facebook.com/jdoe"),
            Platform::Facebook
        );
    }

    #[test]
    fn classifies_email_and_other() {
        assert_eq!(Platform::classify("jdoe@school.edu"), Platform::Email);
        assert_eq!(
            Platform::classify("https://school.edu/roster/jdoe"),
            Platform::Other
        );
    }
}
