use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::PhotoCategory;

/// Outcome of the external content-analysis call for one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationResult {
    pub contains_people: bool,
    pub is_famous_person: bool,
    pub category: PhotoCategory,
    pub tags: Vec<String>,
    pub description: String,
}

impl ModerationResult {
    /// Fallback applied when the classifier cannot answer: let the
    /// upload through unmatched instead of rejecting it.
    pub fn safe_default() -> Self {
        Self {
            contains_people: false,
            is_famous_person: false,
            category: PhotoCategory::Other,
            tags: vec!["unanalyzed".to_string()],
            description: "Image pending review".to_string(),
        }
    }

    /// Parses a raw classifier reply. Model-backed classifiers tend to
    /// wrap the JSON body in a markdown code fence; tolerate that.
    pub fn from_reply(reply: &str) -> AppResult<Self> {
        let body = reply.trim();
        let body = body
            .strip_prefix("```json")
            .or_else(|| body.strip_prefix("```"))
            .unwrap_or(body);
        let body = body.strip_suffix("```").unwrap_or(body);
        serde_json::from_str(body.trim())
            .map_err(|err| AppError::ClassifierUnavailable(err.to_string()))
    }
}

/// Boundary to the external image moderation/tagging service.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Moderates and categorizes one image. Fails with
    /// `AppError::ClassifierUnavailable` when the service cannot answer;
    /// the upload path recovers with [`ModerationResult::safe_default`].
    async fn classify(&self, image: &[u8]) -> AppResult<ModerationResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{
        "contains_people": false,
        "is_famous_person": false,
        "category": "animals",
        "tags": ["dogs", "park"],
        "description": "A dog in a park"
    }"#;

    #[test]
    fn parses_a_bare_json_reply() {
        let result = ModerationResult::from_reply(REPLY).unwrap();
        assert_eq!(result.category, PhotoCategory::Animals);
        assert_eq!(result.tags, ["dogs", "park"]);
    }

    #[test]
    fn parses_a_fenced_reply() {
        let fenced = format!("```json\n{REPLY}\n```");
        let result = ModerationResult::from_reply(&fenced).unwrap();
        assert!(!result.contains_people);
        assert_eq!(result.description, "A dog in a park");
    }

    #[test]
    fn garbage_reply_is_a_classifier_failure() {
        assert!(matches!(
            ModerationResult::from_reply("I could not look at the image"),
            Err(AppError::ClassifierUnavailable(_))
        ));
    }
}
