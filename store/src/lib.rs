use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use error::*;
pub use scores::*;
pub use seeds::*;

mod error;
mod scores;
mod seeds;

/// Reads a JSON collection, treating a missing file as an empty
/// collection and malformed content as a recoverable condition: it is
/// logged and replaced by an empty collection on the next write.
pub(crate) fn load_or_empty<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            log::warn!("could not read {}: {err}", path.display());
            return Vec::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(records) => records,
        Err(err) => {
            log::warn!(
                "malformed records in {}, treating as empty: {err}",
                path.display()
            );
            Vec::new()
        }
    }
}

pub(crate) fn write_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}
