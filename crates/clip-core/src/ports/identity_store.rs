use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityStoreError {
    #[error("identity store failed: {0}")]
    Store(String),

    #[error("identity data corrupt: {0}")]
    Corrupt(String),
}

/// Persistent storage for the local display name.
pub trait IdentityStorePort: Send + Sync {
    /// Load the stored display name, if any.
    fn load_username(&self) -> Result<Option<String>, IdentityStoreError>;

    /// Store the display name. Must be idempotent (overwrite if exists).
    fn store_username(&self, username: &str) -> Result<(), IdentityStoreError>;
}
