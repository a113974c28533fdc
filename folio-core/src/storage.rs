use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Persistent storage is not available")]
    Unavailable,
    #[error("Storage access failed for '{key}': {message}")]
    Access { key: String, message: String },
}

/// Durable string key-value store scoped to the page origin.
pub trait PreferenceStore: 'static {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
