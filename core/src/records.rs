use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description;

use crate::{Board, BoardConfig, CellCount, Coord, Coord2, GameError, Result};

/// Replay key for a finished or in-progress board: the stored seed,
/// dimensions, mine count, and first click reconstruct a bit-identical
/// mine layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    pub seed: u64,
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    pub first_click: Coord2,
    pub date: String,
}

impl SeedRecord {
    /// Snapshots a started board. Fails with [`GameError::NotStarted`] if
    /// no first click has been recorded yet.
    pub fn capture(board: &Board) -> Result<Self> {
        let first_click = board.first_click().ok_or(GameError::NotStarted)?;
        Ok(Self {
            seed: board.seed(),
            width: board.width(),
            height: board.height(),
            mines: board.mines(),
            first_click,
            date: timestamp(),
        })
    }

    /// Rebuilds the recorded board with its mines already placed.
    ///
    /// Goes through `new_unchecked` rather than the config validators: the
    /// record came from a live board, and a board whose mine count was
    /// clamped to zero must still replay.
    pub fn reconstruct(&self) -> Result<Board> {
        if self.height == 0 || self.width == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let config = BoardConfig::new_unchecked(self.height, self.width, self.mines);
        Board::replay(config, self.seed, self.first_click)
    }
}

/// A won game's result. `seed` and `first_click` are present when the
/// score was recorded with replay support and absent in the score-only
/// format, which both serialize and deserialize compatibly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub time: u64,
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_click: Option<Coord2>,
}

impl ScoreRecord {
    /// Full record from a won board, carrying the replay key.
    pub fn from_board(name: impl Into<String>, elapsed_seconds: u64, board: &Board) -> Self {
        Self {
            name: name.into(),
            time: elapsed_seconds,
            width: board.width(),
            height: board.height(),
            mines: board.mines(),
            date: timestamp(),
            seed: Some(board.seed()),
            first_click: board.first_click(),
        }
    }

    /// Score-only record without the replay key.
    pub fn basic(
        name: impl Into<String>,
        elapsed_seconds: u64,
        config: BoardConfig,
    ) -> Self {
        Self {
            name: name.into(),
            time: elapsed_seconds,
            width: config.width,
            height: config.height,
            mines: config.mines,
            date: timestamp(),
            seed: None,
            first_click: None,
        }
    }

    /// Ordering key: board configuration first, then elapsed time.
    pub fn sort_key(&self) -> (Coord, Coord, CellCount, u64) {
        (self.width, self.height, self.mines, self.time)
    }
}

/// `YYYY-MM-DD HH:MM:SS`, matching the stored record format.
pub fn timestamp() -> String {
    let format = format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
        .expect("timestamp format is well formed");
    OffsetDateTime::now_utc()
        .format(&format)
        .expect("timestamp formatting")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_board() -> Board {
        let config = BoardConfig::new(5, 5, 5).unwrap();
        let mut board = Board::with_seed(config, 7);
        board.place_mines(0, 0).unwrap();
        board
    }

    #[test]
    fn capture_requires_a_started_board() {
        let config = BoardConfig::new(5, 5, 5).unwrap();
        let board = Board::with_seed(config, 7);

        assert_eq!(SeedRecord::capture(&board), Err(GameError::NotStarted));
    }

    #[test]
    fn capture_then_reconstruct_reproduces_the_layout() {
        let board = started_board();
        let record = SeedRecord::capture(&board).unwrap();

        assert_eq!(record.seed, 7);
        assert_eq!((record.height, record.width), (5, 5));
        assert_eq!(record.mines, 5);
        assert_eq!(record.first_click, (0, 0));

        let replayed = record.reconstruct().unwrap();
        assert_eq!(replayed.mine_positions(), board.mine_positions());
    }

    #[test]
    fn clamped_to_zero_board_still_replays() {
        let config = BoardConfig::new(3, 3, 1).unwrap();
        let mut board = Board::with_seed(config, 42);
        board.place_mines(1, 1).unwrap();
        assert_eq!(board.mines(), 0);

        let record = SeedRecord::capture(&board).unwrap();
        let replayed = record.reconstruct().unwrap();
        assert!(replayed.mine_positions().is_empty());
    }

    #[test]
    fn timestamp_has_the_stored_shape() {
        let stamp = timestamp();

        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }

    #[test]
    fn score_record_omits_absent_replay_fields() {
        let config = BoardConfig::new(9, 9, 10).unwrap();
        let record = ScoreRecord::basic("alice", 42, config);
        let json = serde_json::to_string(&record).unwrap();

        assert!(!json.contains("seed"));
        assert!(!json.contains("first_click"));

        let full = ScoreRecord::from_board("bob", 99, &started_board());
        let json = serde_json::to_string(&full).unwrap();
        assert!(json.contains("\"seed\":7"));
        assert!(json.contains("\"first_click\":[0,0]"));
    }

    #[test]
    fn sort_key_orders_by_configuration_then_time() {
        let config = BoardConfig::new(9, 9, 10).unwrap();
        let fast = ScoreRecord::basic("fast", 10, config);
        let slow = ScoreRecord::basic("slow", 50, config);
        let bigger = ScoreRecord::basic("big", 5, BoardConfig::new(16, 16, 40).unwrap());

        assert!(fast.sort_key() < slow.sort_key());
        assert!(slow.sort_key() < bigger.sort_key());
    }
}
