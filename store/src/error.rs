use thiserror::Error;

/// Failures surfaced when writing a store back to disk. Reads never fail:
/// missing or malformed files degrade to an empty collection.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store file could not be written")]
    Io(#[from] std::io::Error),
    #[error("records could not be encoded")]
    Encode(#[from] serde_json::Error),
}
