use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User document as the identity provider stores it. This side only
/// reads users and maintains their blocked list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub nickname: String,
    pub display_name: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub blocked_users: Vec<String>,
    pub is_active: bool,
}

impl User {
    pub fn has_blocked(&self, user_id: &str) -> bool {
        self.blocked_users.iter().any(|id| id == user_id)
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            nickname: self.display_name.clone(),
            avatar_url: self.avatar_url.clone(),
            created_at: self.created_at,
        }
    }
}

/// Public projection of a user. Blocked lists and the active flag never
/// leave the crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub nickname: String,
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
}
