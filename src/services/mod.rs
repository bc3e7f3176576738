pub mod chat_service;
pub mod friendship_service;
pub mod moderation_service;
pub mod photo_service;
pub mod profile_service;
pub mod suggestion_service;
