//! snapmatch: interest-matching and social graph core for a photo-sharing
//! backend. Profiles are derived from classified photos, friend suggestions
//! are ranked by shared interests, and the friend-request, messaging and
//! moderation flows run as plain CRUD over an injected document store.

pub mod auth;
pub mod classifier;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
