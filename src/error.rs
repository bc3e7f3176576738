use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Shared error type for every service and store operation.
///
/// Policy rejections (`DuplicateRequest`, `SelfRequest`, `PhotoRejected`,
/// `Blocked`) are user-facing outcomes, not retryable faults.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Friend request already sent!")]
    DuplicateRequest,

    #[error("You can't add yourself as a friend!")]
    SelfRequest,

    #[error("Image analysis unavailable: {0}")]
    ClassifierUnavailable(String),

    #[error("{0}")]
    PhotoRejected(String),

    #[error("Cannot send message to this user")]
    Blocked,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn not_found(entity: &'static str) -> Self {
        AppError::NotFound { entity }
    }
}
