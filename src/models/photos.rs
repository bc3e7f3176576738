use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed category vocabulary the classifier assigns to every photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoCategory {
    Animals,
    Nature,
    Food,
    Sports,
    Music,
    Art,
    Colors,
    Objects,
    Places,
    Other,
}

/// Photo document. Only approved photos contribute to interest profiles;
/// photos are immutable after upload apart from owner deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub user_id: String,
    /// Opaque reference into the external image store.
    pub image_ref: String,
    pub category: PhotoCategory,
    pub tags: Vec<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub is_approved: bool,
}
