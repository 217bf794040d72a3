use serde::{Deserialize, Serialize};

/// Everything known about the target athlete before a search session starts.
///
/// Constructed once per session and never mutated mid-search; acquired
/// context (e.g. roster data found along the way) is merged in before
/// scoring begins. Absent attributes are explicit `None`, never magic
/// empty-string sentinels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonContext {
    pub first_name: String,
    pub last_name: String,
    /// Sport, lowercased on access for keying (e.g. "football").
    pub sport: String,
    pub school: Option<String>,
    pub position: Option<String>,
    /// Tenure year, e.g. "freshman" or "2024".
    pub year: Option<String>,
    pub state: Option<String>,
    /// Team mascot / nickname, e.g. "crimson tide".
    pub mascot: Option<String>,
    /// Likely username shapes, already lowercased (e.g. "jsmith", "johnsmith22").
    pub username_patterns: Vec<String>,
    /// Keywords to weigh when they appear in URLs (school, position, mascot,
    /// plus generic terms like "ncaa", "athlete").
    pub search_keywords: Vec<String>,
}

impl PersonContext {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// "First Last" display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Key used for the verification history store: "First-Last".
    pub fn history_key(&self) -> String {
        format!("{}-{}", self.first_name, self.last_name)
    }

    /// Sport in the lowercase form used for learning-store keys.
    pub fn sport_key(&self) -> String {
        if self.sport.is_empty() {
            "unknown".to_string()
        } else {
            self.sport.to_lowercase()
        }
    }

    /// Lowercased name fragments for email/username containment checks.
    /// Empty fragments are dropped so they never match everything.
    pub fn name_parts(&self) -> Vec<String> {
        [&self.first_name, &self.last_name]
            .iter()
            .map(|s| s.to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
