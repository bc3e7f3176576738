use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};

/// Boundary to the identity provider: token in, user id out.
/// Registration, credential checks and token issuance live on the other
/// side of this trait.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves a bearer token to the user id it was issued for.
    /// Fails with `AppError::Unauthorized` for a missing, expired or
    /// otherwise invalid token.
    async fn verify(&self, token: &str) -> AppResult<String>;
}

/// Token table for tests and embeddings without a real identity provider.
#[derive(Debug, Default)]
pub struct StaticTokenProvider {
    tokens: HashMap<String, String>,
}

impl StaticTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, token: impl Into<String>, user_id: impl Into<String>) {
        self.tokens.insert(token.into(), user_id.into());
    }
}

#[async_trait]
impl IdentityProvider for StaticTokenProvider {
    async fn verify(&self, token: &str) -> AppResult<String> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
