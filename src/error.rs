//! Error types for storage access and persisted-session decoding.
//!
//! ERROR HANDLING
//! ==============
//! None of these errors reach callers of [`crate::store::SessionStore`]. The
//! store logs them and degrades to an empty session; they exist so internal
//! helpers can use `?` and so log lines carry structured causes.

use crate::storage::StorageArea;

/// Failure talking to a key/value storage area.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The storage area cannot be reached (no window, privacy mode, etc.).
    #[error("{0} storage is unavailable")]
    Unavailable(StorageArea),
    /// A write was rejected, typically because the quota is exhausted.
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// A removal was rejected.
    #[error("failed to remove `{key}`: {reason}")]
    Remove { key: String, reason: String },
}

/// Failure restoring or persisting a session record.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The stored `user` record is not valid JSON for the record schema.
    #[error("malformed session record in {area} storage: {source}")]
    Malformed {
        area: StorageArea,
        #[source]
        source: serde_json::Error,
    },
    /// The record could not be serialized for writing.
    #[error("failed to encode session record: {0}")]
    Encode(#[source] serde_json::Error),
    /// The underlying storage area failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
