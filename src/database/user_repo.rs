use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::User;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, user_id: &str) -> AppResult<Option<User>>;

    async fn insert_user(&self, user: User) -> AppResult<()>;

    /// Active users whose id is not in `excluding`, capped at `limit`.
    async fn list_active_users(
        &self,
        excluding: &HashSet<String>,
        limit: usize,
    ) -> AppResult<Vec<User>>;

    /// Adds `blocked_id` to the user's blocked set. No-op when already present.
    async fn add_blocked_user(&self, user_id: &str, blocked_id: &str) -> AppResult<()>;

    /// Removes `blocked_id` from the user's blocked set. No-op when absent.
    async fn remove_blocked_user(&self, user_id: &str, blocked_id: &str) -> AppResult<()>;
}
