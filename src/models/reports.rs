use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Report document. Status is `pending` until a reviewer resolves it
/// with an action string (e.g. "dismissed").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub reporter_id: String,
    pub reported_user_id: Option<String>,
    pub reported_photo_id: Option<String>,
    pub reason: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Report {
    pub const PENDING: &'static str = "pending";
}
