//! Store error model.

use thiserror::Error;

/// Failure loading or saving the inventory snapshot.
///
/// "Document does not exist yet" is not an error; the file store treats it
/// as an empty catalog (see [`crate::JsonFileStore`]).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying medium could not be read or written.
    #[error("inventory store io failure: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be encoded or decoded.
    #[error("inventory document malformed: {0}")]
    Document(#[from] serde_json::Error),
}
