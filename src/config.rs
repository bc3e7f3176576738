use std::env;
use std::str::FromStr;

use tracing::info;

/// Scan caps and result limits. Every read the services perform is a
/// bounded scan; these are the bounds. Values come from the environment
/// with sensible defaults, so embedding code can tune them per deploy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cap on the active-user scan behind a suggestion pass.
    pub user_scan_limit: usize,
    /// Cap on the per-user photo scan behind a profile build.
    pub photo_scan_limit: usize,
    /// Number of feed entries returned per call.
    pub feed_page_size: usize,
    /// Number of messages returned for one conversation.
    pub conversation_page_size: usize,
    /// Cap on the message scan behind the inbox aggregation.
    pub inbox_scan_limit: usize,
    /// Ranked suggestions are truncated to this many entries.
    pub max_suggestions: usize,
    /// Shared-interest phrases per suggestion.
    pub max_shared_interests: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_scan_limit: 100,
            photo_scan_limit: 100,
            feed_page_size: 50,
            conversation_page_size: 200,
            inbox_scan_limit: 500,
            max_suggestions: 10,
            max_shared_interests: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = Self {
            user_scan_limit: env_or("SNAPMATCH_USER_SCAN_LIMIT", defaults.user_scan_limit),
            photo_scan_limit: env_or("SNAPMATCH_PHOTO_SCAN_LIMIT", defaults.photo_scan_limit),
            feed_page_size: env_or("SNAPMATCH_FEED_PAGE_SIZE", defaults.feed_page_size),
            conversation_page_size: env_or(
                "SNAPMATCH_CONVERSATION_PAGE_SIZE",
                defaults.conversation_page_size,
            ),
            inbox_scan_limit: env_or("SNAPMATCH_INBOX_SCAN_LIMIT", defaults.inbox_scan_limit),
            max_suggestions: env_or("SNAPMATCH_MAX_SUGGESTIONS", defaults.max_suggestions),
            max_shared_interests: env_or(
                "SNAPMATCH_MAX_SHARED_INTERESTS",
                defaults.max_shared_interests,
            ),
        };
        info!(?config, "configuration loaded");
        config
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
