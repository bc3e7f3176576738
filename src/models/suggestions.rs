use std::collections::HashSet;

use serde::Serialize;

use super::photos::PhotoCategory;
use super::users::UserSummary;

/// Derived per-user interest profile. Rebuilt on demand from approved
/// photos, never persisted.
#[derive(Debug, Clone, Default)]
pub struct InterestProfile {
    pub tags: HashSet<String>,
    pub categories: HashSet<PhotoCategory>,
}

impl InterestProfile {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.categories.is_empty()
    }
}

/// One ranked friend suggestion, ready for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub user: UserSummary,
    pub shared_interests: Vec<String>,
    pub match_score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_photo: Option<String>,
}
