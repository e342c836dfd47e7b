use serde::{Deserialize, Serialize};

/// A single cell of the board. Knows nothing about its neighbors; the
/// adjacent-mine count is computed by the board at placement time and
/// stored here.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    is_revealed: bool,
    is_flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    /// Marks the cell as revealed unconditionally. Callers are expected to
    /// pre-check the flagged/revealed guards.
    pub fn reveal(&mut self) {
        self.is_revealed = true;
    }

    /// Flips the flag, unless the cell is already revealed. Returns whether
    /// the flag state changed.
    pub fn toggle_flag(&mut self) -> bool {
        if self.is_revealed {
            return false;
        }
        self.is_flagged = !self.is_flagged;
        true
    }

    /// Only valid before the board's adjacency counts are computed.
    pub fn place_mine(&mut self) {
        self.is_mine = true;
    }

    pub fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
    }

    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    /// Meaningful only when `is_mine` is false.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }
}
