use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use records::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod records;
mod types;

/// Validated board parameters. Construction is the configuration-error
/// boundary: a [`Board`] built from a `BoardConfig` cannot fail on
/// dimensions or mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub height: Coord,
    pub width: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const CUSTOM_HEIGHT: RangeInclusive<Coord> = 5..=30;
    pub const CUSTOM_WIDTH: RangeInclusive<Coord> = 5..=35;
    pub const CUSTOM_MINES: RangeInclusive<CellCount> = 1..=500;

    pub const fn new_unchecked(height: Coord, width: Coord, mines: CellCount) -> Self {
        Self {
            height,
            width,
            mines,
        }
    }

    /// Requires positive dimensions and `0 < mines < height * width`.
    pub fn new(height: Coord, width: Coord, mines: CellCount) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let cells = cell_count(height, width);
        if mines == 0 || mines >= cells {
            return Err(GameError::InvalidMineCount { max: cells - 1 });
        }

        Ok(Self::new_unchecked(height, width, mines))
    }

    /// Custom-game path: same rules as [`BoardConfig::new`] plus the menu
    /// bounds on each field.
    pub fn custom(height: Coord, width: Coord, mines: CellCount) -> Result<Self> {
        if !Self::CUSTOM_HEIGHT.contains(&height)
            || !Self::CUSTOM_WIDTH.contains(&width)
            || !Self::CUSTOM_MINES.contains(&mines)
        {
            return Err(GameError::OutsideCustomBounds);
        }

        Self::new(height, width, mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_count(self.height, self.width)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Easy => BoardConfig::new_unchecked(9, 9, 10),
            Self::Medium => BoardConfig::new_unchecked(16, 16, 40),
            Self::Hard => BoardConfig::new_unchecked(16, 30, 99),
        }
    }
}
