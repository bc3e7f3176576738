use std::collections::HashSet;

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::database::Storage;
use crate::error::{AppError, AppResult};
use crate::models::{FriendRequest, RequestStatus, UserSummary};

/// An incoming pending request with the sender attached.
#[derive(Debug, Clone, Serialize)]
pub struct IncomingRequest {
    pub request: FriendRequest,
    pub sender: UserSummary,
}

/// Opens a pending request from `sender_id` to `receiver_id`. One
/// request document per unordered pair, ever: a second attempt in either
/// direction fails with `DuplicateRequest` whatever the status.
pub async fn send_friend_request(
    store: &dyn Storage,
    sender_id: &str,
    receiver_id: &str,
) -> AppResult<FriendRequest> {
    if sender_id == receiver_id {
        return Err(AppError::SelfRequest);
    }
    if store
        .find_request_by_pair(sender_id, receiver_id)
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateRequest);
    }

    let request = FriendRequest {
        id: Uuid::new_v4().to_string(),
        sender_id: sender_id.to_string(),
        receiver_id: receiver_id.to_string(),
        status: RequestStatus::Pending,
        created_at: Utc::now(),
    };
    store.insert_request(request.clone()).await?;
    info!(sender = sender_id, receiver = receiver_id, "friend request sent");
    Ok(request)
}

/// Accepts a pending request. Only the receiver can, and only once;
/// anything else (absent request, wrong receiver, already accepted)
/// fails with `NotFound`. Accepted edges are permanent.
pub async fn accept_friend_request(
    store: &dyn Storage,
    request_id: &str,
    receiver_id: &str,
) -> AppResult<()> {
    let modified = store
        .update_request_status(
            request_id,
            receiver_id,
            RequestStatus::Pending,
            RequestStatus::Accepted,
        )
        .await?;
    if modified == 0 {
        return Err(AppError::not_found("friend request"));
    }
    info!(request = request_id, receiver = receiver_id, "friend request accepted");
    Ok(())
}

/// Incoming pending requests, oldest first, senders attached. Requests
/// whose sender vanished are skipped.
pub async fn pending_requests(
    store: &dyn Storage,
    config: &Config,
    receiver_id: &str,
) -> AppResult<Vec<IncomingRequest>> {
    let requests = store
        .list_pending_requests_for(receiver_id, config.user_scan_limit)
        .await?;

    let mut incoming = Vec::new();
    for request in requests {
        let Some(sender) = store.find_user(&request.sender_id).await? else {
            continue;
        };
        incoming.push(IncomingRequest {
            sender: sender.summary(),
            request,
        });
    }
    Ok(incoming)
}

/// Everyone on the other side of an accepted request involving `user_id`.
pub async fn friends_of(
    store: &dyn Storage,
    config: &Config,
    user_id: &str,
) -> AppResult<Vec<UserSummary>> {
    let requests = store
        .list_requests_involving(user_id, config.user_scan_limit)
        .await?;

    let mut friends = Vec::new();
    for request in requests {
        if request.status != RequestStatus::Accepted {
            continue;
        }
        let Some(friend) = store.find_user(request.other_member(user_id)).await? else {
            continue;
        };
        friends.push(friend.summary());
    }
    Ok(friends)
}

/// Ids linked to `user_id` by a request in any status. Pending counts:
/// an open request already keeps the pair out of each other's
/// suggestions.
pub async fn connected_user_ids(
    store: &dyn Storage,
    config: &Config,
    user_id: &str,
) -> AppResult<HashSet<String>> {
    let requests = store
        .list_requests_involving(user_id, config.user_scan_limit)
        .await?;
    Ok(requests
        .iter()
        .map(|request| request.other_member(user_id).to_string())
        .collect())
}
