use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board dimensions must be positive")]
    InvalidDimensions,
    #[error("mine count must be between 1 and {max}")]
    InvalidMineCount { max: CellCount },
    #[error("custom settings are outside the allowed bounds")]
    OutsideCustomBounds,
    #[error("coordinates are outside the board")]
    InvalidCoords,
    #[error("mines have already been placed on this board")]
    AlreadyStarted,
    #[error("mines have not been placed on this board yet")]
    NotStarted,
}

pub type Result<T> = core::result::Result<T, GameError>;
