use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{FriendRequest, RequestStatus};

#[async_trait]
pub trait FriendRequestStore: Send + Sync {
    /// The request linking `a` and `b`, sent in either direction, any status.
    async fn find_request_by_pair(&self, a: &str, b: &str) -> AppResult<Option<FriendRequest>>;

    async fn insert_request(&self, request: FriendRequest) -> AppResult<()>;

    /// Conditionally moves the request matching (id, receiver, expected
    /// status) to `new_status`. Returns the number of documents modified,
    /// so a caller can distinguish "accepted" from "nothing matched".
    async fn update_request_status(
        &self,
        request_id: &str,
        receiver_id: &str,
        expected: RequestStatus,
        new_status: RequestStatus,
    ) -> AppResult<u64>;

    /// Pending requests addressed to `receiver_id`, oldest first.
    async fn list_pending_requests_for(
        &self,
        receiver_id: &str,
        limit: usize,
    ) -> AppResult<Vec<FriendRequest>>;

    /// Every request involving `user_id`, regardless of direction or status.
    async fn list_requests_involving(
        &self,
        user_id: &str,
        limit: usize,
    ) -> AppResult<Vec<FriendRequest>>;
}
