use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;
use crate::database::Storage;
use crate::error::{AppError, AppResult};
use crate::models::{Message, MessageType, UserSummary};

pub struct NewMessage {
    pub receiver_id: String,
    pub content: String,
    pub message_type: MessageType,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationPreview {
    pub partner: UserSummary,
    pub last_message: LastMessage,
    pub unread_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LastMessage {
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_mine: bool,
}

/// Delivers a message. Unknown receivers fail with `NotFound`; a
/// receiver who has blocked the sender fails with `Blocked`.
pub async fn send_message(
    store: &dyn Storage,
    sender_id: &str,
    new_message: NewMessage,
) -> AppResult<Message> {
    let receiver = store
        .find_user(&new_message.receiver_id)
        .await?
        .ok_or_else(|| AppError::not_found("user"))?;
    if receiver.has_blocked(sender_id) {
        return Err(AppError::Blocked);
    }

    let message = Message {
        id: Uuid::new_v4().to_string(),
        sender_id: sender_id.to_string(),
        receiver_id: new_message.receiver_id,
        content: new_message.content,
        message_type: new_message.message_type,
        created_at: Utc::now(),
        is_read: false,
    };
    store.insert_message(message.clone()).await?;
    Ok(message)
}

/// The exchange with `partner_id`, oldest first. Reading a conversation
/// marks the partner's messages as read.
pub async fn conversation_with(
    store: &dyn Storage,
    config: &Config,
    user_id: &str,
    partner_id: &str,
) -> AppResult<Vec<Message>> {
    let messages = store
        .list_messages_between(user_id, partner_id, config.conversation_page_size)
        .await?;
    store.mark_messages_read(partner_id, user_id).await?;
    Ok(messages)
}

/// Inbox view: one entry per conversation partner, most recent exchange
/// first, with the unread count of what the partner sent. Partners whose
/// user document vanished are skipped.
pub async fn conversations(
    store: &dyn Storage,
    config: &Config,
    user_id: &str,
) -> AppResult<Vec<ConversationPreview>> {
    let messages = store
        .list_messages_involving(user_id, config.inbox_scan_limit)
        .await?;

    // The scan is newest first, so the first sighting of a partner is
    // the conversation head.
    let mut order: Vec<String> = Vec::new();
    let mut heads: HashMap<String, &Message> = HashMap::new();
    let mut unread: HashMap<String, usize> = HashMap::new();
    for message in &messages {
        let partner_id = if message.sender_id == user_id {
            &message.receiver_id
        } else {
            &message.sender_id
        };
        if !heads.contains_key(partner_id.as_str()) {
            order.push(partner_id.clone());
            heads.insert(partner_id.clone(), message);
        }
        if message.receiver_id == user_id && !message.is_read {
            *unread.entry(partner_id.clone()).or_default() += 1;
        }
    }

    let mut previews = Vec::new();
    for partner_id in order {
        let Some(partner) = store.find_user(&partner_id).await? else {
            continue;
        };
        let head = heads[&partner_id];
        previews.push(ConversationPreview {
            partner: partner.summary(),
            last_message: LastMessage {
                content: head.content.clone(),
                created_at: head.created_at,
                is_mine: head.sender_id == user_id,
            },
            unread_count: unread.get(&partner_id).copied().unwrap_or(0),
        });
    }
    Ok(previews)
}
