use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::models::{FriendRequest, Message, Photo, Report, RequestStatus, User};

use super::{FriendRequestStore, MessageStore, PhotoStore, ReportStore, UserStore};

/// Document store over in-process maps. Backs the test suite and any
/// embedding that does not bring its own database. Scans sort on stable
/// keys so results are deterministic regardless of map iteration order.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    photos: RwLock<HashMap<String, Photo>>,
    friend_requests: RwLock<HashMap<String, FriendRequest>>,
    messages: RwLock<HashMap<String, Message>>,
    reports: RwLock<HashMap<String, Report>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, user_id: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn insert_user(&self, user: User) -> AppResult<()> {
        self.users.write().await.insert(user.id.clone(), user);
        Ok(())
    }

    async fn list_active_users(
        &self,
        excluding: &HashSet<String>,
        limit: usize,
    ) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        let mut active: Vec<User> = users
            .values()
            .filter(|user| user.is_active && !excluding.contains(&user.id))
            .cloned()
            .collect();
        active.sort_by(|a, b| a.id.cmp(&b.id));
        active.truncate(limit);
        Ok(active)
    }

    async fn add_blocked_user(&self, user_id: &str, blocked_id: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        if let Some(user) = users.get_mut(user_id) {
            if !user.has_blocked(blocked_id) {
                user.blocked_users.push(blocked_id.to_string());
            }
        }
        Ok(())
    }

    async fn remove_blocked_user(&self, user_id: &str, blocked_id: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        if let Some(user) = users.get_mut(user_id) {
            user.blocked_users.retain(|id| id != blocked_id);
        }
        Ok(())
    }
}

#[async_trait]
impl PhotoStore for MemoryStore {
    async fn insert_photo(&self, photo: Photo) -> AppResult<()> {
        self.photos.write().await.insert(photo.id.clone(), photo);
        Ok(())
    }

    async fn list_approved_photos_by_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> AppResult<Vec<Photo>> {
        let photos = self.photos.read().await;
        let mut owned: Vec<Photo> = photos
            .values()
            .filter(|photo| photo.user_id == user_id && photo.is_approved)
            .cloned()
            .collect();
        sort_newest_first(&mut owned);
        owned.truncate(limit);
        Ok(owned)
    }

    async fn list_approved_photos_excluding(
        &self,
        excluding: &HashSet<String>,
        limit: usize,
    ) -> AppResult<Vec<Photo>> {
        let photos = self.photos.read().await;
        let mut visible: Vec<Photo> = photos
            .values()
            .filter(|photo| photo.is_approved && !excluding.contains(&photo.user_id))
            .cloned()
            .collect();
        sort_newest_first(&mut visible);
        visible.truncate(limit);
        Ok(visible)
    }

    async fn delete_photo_owned(&self, photo_id: &str, owner_id: &str) -> AppResult<bool> {
        let mut photos = self.photos.write().await;
        match photos.get(photo_id) {
            Some(photo) if photo.user_id == owner_id => {
                photos.remove(photo_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl FriendRequestStore for MemoryStore {
    async fn find_request_by_pair(&self, a: &str, b: &str) -> AppResult<Option<FriendRequest>> {
        let requests = self.friend_requests.read().await;
        Ok(requests
            .values()
            .find(|request| {
                (request.sender_id == a && request.receiver_id == b)
                    || (request.sender_id == b && request.receiver_id == a)
            })
            .cloned())
    }

    async fn insert_request(&self, request: FriendRequest) -> AppResult<()> {
        self.friend_requests
            .write()
            .await
            .insert(request.id.clone(), request);
        Ok(())
    }

    async fn update_request_status(
        &self,
        request_id: &str,
        receiver_id: &str,
        expected: RequestStatus,
        new_status: RequestStatus,
    ) -> AppResult<u64> {
        let mut requests = self.friend_requests.write().await;
        match requests.get_mut(request_id) {
            Some(request) if request.receiver_id == receiver_id && request.status == expected => {
                request.status = new_status;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn list_pending_requests_for(
        &self,
        receiver_id: &str,
        limit: usize,
    ) -> AppResult<Vec<FriendRequest>> {
        let requests = self.friend_requests.read().await;
        let mut pending: Vec<FriendRequest> = requests
            .values()
            .filter(|request| {
                request.receiver_id == receiver_id && request.status == RequestStatus::Pending
            })
            .cloned()
            .collect();
        pending.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        pending.truncate(limit);
        Ok(pending)
    }

    async fn list_requests_involving(
        &self,
        user_id: &str,
        limit: usize,
    ) -> AppResult<Vec<FriendRequest>> {
        let requests = self.friend_requests.read().await;
        let mut involving: Vec<FriendRequest> = requests
            .values()
            .filter(|request| request.involves(user_id))
            .cloned()
            .collect();
        involving.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        involving.truncate(limit);
        Ok(involving)
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn insert_message(&self, message: Message) -> AppResult<()> {
        self.messages
            .write()
            .await
            .insert(message.id.clone(), message);
        Ok(())
    }

    async fn list_messages_between(
        &self,
        a: &str,
        b: &str,
        limit: usize,
    ) -> AppResult<Vec<Message>> {
        let messages = self.messages.read().await;
        let mut between: Vec<Message> = messages
            .values()
            .filter(|message| {
                (message.sender_id == a && message.receiver_id == b)
                    || (message.sender_id == b && message.receiver_id == a)
            })
            .cloned()
            .collect();
        between.sort_by(|x, y| x.created_at.cmp(&y.created_at).then_with(|| x.id.cmp(&y.id)));
        between.truncate(limit);
        Ok(between)
    }

    async fn list_messages_involving(
        &self,
        user_id: &str,
        limit: usize,
    ) -> AppResult<Vec<Message>> {
        let messages = self.messages.read().await;
        let mut involving: Vec<Message> = messages
            .values()
            .filter(|message| message.sender_id == user_id || message.receiver_id == user_id)
            .cloned()
            .collect();
        involving.sort_by(|x, y| y.created_at.cmp(&x.created_at).then_with(|| y.id.cmp(&x.id)));
        involving.truncate(limit);
        Ok(involving)
    }

    async fn mark_messages_read(&self, sender_id: &str, receiver_id: &str) -> AppResult<()> {
        let mut messages = self.messages.write().await;
        for message in messages.values_mut() {
            if message.sender_id == sender_id && message.receiver_id == receiver_id {
                message.is_read = true;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ReportStore for MemoryStore {
    async fn insert_report(&self, report: Report) -> AppResult<()> {
        self.reports.write().await.insert(report.id.clone(), report);
        Ok(())
    }

    async fn list_pending_reports(&self, limit: usize) -> AppResult<Vec<Report>> {
        let reports = self.reports.read().await;
        let mut pending: Vec<Report> = reports
            .values()
            .filter(|report| report.status == Report::PENDING)
            .cloned()
            .collect();
        pending.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        pending.truncate(limit);
        Ok(pending)
    }

    async fn resolve_report(
        &self,
        report_id: &str,
        status: &str,
        resolved_at: DateTime<Utc>,
    ) -> AppResult<u64> {
        let mut reports = self.reports.write().await;
        match reports.get_mut(report_id) {
            Some(report) => {
                report.status = status.to_string();
                report.resolved_at = Some(resolved_at);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

fn sort_newest_first(photos: &mut [Photo]) {
    photos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
}
