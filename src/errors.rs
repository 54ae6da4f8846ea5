use thiserror::Error;

/// Unified error type for engine, profile, and storage layers.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Profile not initialized")]
    ProfileNotInitialized,
    #[error("Profile already exists")]
    ProfileExists,
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid backup: {0}")]
    InvalidBackup(String),
    #[error("Cannot remove the last remaining account")]
    LastAccount,
    #[error("Avatar `{0}` is locked")]
    AvatarLocked(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}
