use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::Message;

#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn insert_message(&self, message: Message) -> AppResult<()>;

    /// Messages exchanged between `a` and `b` in either direction, oldest first.
    async fn list_messages_between(&self, a: &str, b: &str, limit: usize)
        -> AppResult<Vec<Message>>;

    /// Messages sent or received by `user_id`, newest first.
    async fn list_messages_involving(
        &self,
        user_id: &str,
        limit: usize,
    ) -> AppResult<Vec<Message>>;

    /// Marks everything `sender_id` sent to `receiver_id` as read.
    async fn mark_messages_read(&self, sender_id: &str, receiver_id: &str) -> AppResult<()>;
}
