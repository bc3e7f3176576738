use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::Photo;

#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn insert_photo(&self, photo: Photo) -> AppResult<()>;

    /// Approved photos owned by `user_id`, newest first.
    async fn list_approved_photos_by_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> AppResult<Vec<Photo>>;

    /// Approved photos from any owner not in `excluding`, newest first.
    async fn list_approved_photos_excluding(
        &self,
        excluding: &HashSet<String>,
        limit: usize,
    ) -> AppResult<Vec<Photo>>;

    /// Deletes the photo when it exists and belongs to `owner_id`.
    /// Returns whether a document was removed.
    async fn delete_photo_owned(&self, photo_id: &str, owner_id: &str) -> AppResult<bool>;
}
