use thiserror::Error;

/// Failures at the storage boundary. Every repository operation returns one
/// of these instead of panicking; callers that want the historical
/// fail-soft behavior can map any error to the empty collection.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] rusqlite::Error),

    #[error("corrupt record in bucket '{bucket}': {source}")]
    Corrupt {
        bucket: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize bucket '{bucket}': {source}")]
    Serialize {
        bucket: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Form-level validation failures. The `Display` text is shown to the user
/// as-is by the presentation layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a duration for your workout.")]
    MissingDuration,

    #[error("Please fill in all fields")]
    MissingField,

    #[error("This workout type already exists.")]
    DuplicateType,
}
