use std::path::PathBuf;

use demineur_core::ScoreRecord;

use crate::{StoreError, load_or_empty, write_collection};

pub const SCORES_FILE: &str = "high_scores.json";

/// Append-only high-score collection backed by a flat JSON file. Records
/// are kept sorted by board configuration `(width, height, mines)` and
/// then by elapsed time; nothing is ever pruned.
#[derive(Clone, Debug)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, record: ScoreRecord) -> Result<(), StoreError> {
        let mut scores: Vec<ScoreRecord> = load_or_empty(&self.path);
        scores.push(record);
        scores.sort_by_key(ScoreRecord::sort_key);
        write_collection(&self.path, &scores)
    }

    /// The full sorted collection; empty if the file is missing or
    /// unreadable.
    pub fn all(&self) -> Vec<ScoreRecord> {
        load_or_empty(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TempStore;
    use demineur_core::BoardConfig;

    fn record(name: &str, time: u64, config: BoardConfig) -> ScoreRecord {
        ScoreRecord::basic(name, time, config)
    }

    #[test]
    fn missing_file_is_an_empty_collection() {
        let tmp = TempStore::new("scores-missing");
        let store = ScoreStore::new(&tmp.path);

        assert!(store.all().is_empty());
    }

    #[test]
    fn malformed_file_is_treated_as_empty() {
        let tmp = TempStore::new("scores-malformed");
        std::fs::write(&tmp.path, "{not json").unwrap();
        let store = ScoreStore::new(&tmp.path);

        assert!(store.all().is_empty());

        // Appending over garbage starts a fresh collection.
        let easy = BoardConfig::new(9, 9, 10).unwrap();
        store.append(record("alice", 30, easy)).unwrap();
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn records_are_sorted_by_configuration_then_time() {
        let tmp = TempStore::new("scores-sorted");
        let store = ScoreStore::new(&tmp.path);
        let easy = BoardConfig::new(9, 9, 10).unwrap();
        let medium = BoardConfig::new(16, 16, 40).unwrap();

        store.append(record("carol", 120, medium)).unwrap();
        store.append(record("alice", 55, easy)).unwrap();
        store.append(record("bob", 30, easy)).unwrap();

        let names: Vec<_> = store.all().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["bob", "alice", "carol"]);
    }

    #[test]
    fn replay_fields_survive_the_file_round_trip() {
        let tmp = TempStore::new("scores-replay-fields");
        let store = ScoreStore::new(&tmp.path);
        let easy = BoardConfig::new(9, 9, 10).unwrap();

        let mut with_seed = record("dave", 45, easy);
        with_seed.seed = Some(1234);
        with_seed.first_click = Some((4, 4));
        store.append(with_seed).unwrap();
        store.append(record("erin", 50, easy)).unwrap();

        let scores = store.all();
        assert_eq!(scores[0].seed, Some(1234));
        assert_eq!(scores[0].first_click, Some((4, 4)));
        assert_eq!(scores[1].seed, None);
    }
}
