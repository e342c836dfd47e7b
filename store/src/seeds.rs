use std::path::PathBuf;

use demineur_core::SeedRecord;

use crate::{StoreError, load_or_empty, write_collection};

pub const SEEDS_FILE: &str = "board_seeds.json";

/// How many replayable games are kept; the oldest is evicted first.
pub const SEED_CAPACITY: usize = 5;

/// Bounded history of replayable board configurations, backed by a flat
/// JSON file. Oldest-first on disk, newest-first when queried.
#[derive(Clone, Debug)]
pub struct SeedStore {
    path: PathBuf,
}

impl SeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, record: SeedRecord) -> Result<(), StoreError> {
        let mut seeds: Vec<SeedRecord> = load_or_empty(&self.path);
        while seeds.len() >= SEED_CAPACITY {
            seeds.remove(0);
        }
        seeds.push(record);
        write_collection(&self.path, &seeds)
    }

    /// Up to `limit` most recent records, newest first; empty if the file
    /// is missing or unreadable.
    pub fn recent(&self, limit: usize) -> Vec<SeedRecord> {
        let seeds: Vec<SeedRecord> = load_or_empty(&self.path);
        seeds.into_iter().rev().take(limit).collect()
    }
}
