use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{
    BoardConfig, Cell, CellCount, Coord, Coord2, GameError, Result, ToGridIndex, neighbors,
};

/// Board lifecycle. `Lost` is entered when a mine is revealed, `Won` when
/// every mine is flagged and every safe cell revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Unstarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Unstarted
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    height: Coord,
    width: Coord,
    mines: CellCount,
    seed: u64,
    cells: Array2<Cell>,
    started: bool,
    first_click: Option<Coord2>,
    state: GameState,
}

impl Board {
    /// Fresh board with a time-derived seed. Mines stay unplaced until the
    /// first reveal position is known.
    pub fn new(config: BoardConfig) -> Self {
        Self::with_seed(config, time_seed())
    }

    /// Fresh board with an explicit seed, still waiting for its first click.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        let BoardConfig {
            height,
            width,
            mines,
        } = config;

        Self {
            height,
            width,
            mines,
            seed,
            cells: Array2::default((usize::from(height), usize::from(width))),
            started: false,
            first_click: None,
            state: GameState::default(),
        }
    }

    /// Replay path: reconstructs the board a stored seed and first click
    /// originally produced, placing mines immediately.
    pub fn replay(config: BoardConfig, seed: u64, first_click: Coord2) -> Result<Self> {
        let mut board = Self::with_seed(config, seed);
        board.first_click = Some(first_click);
        board.place_mines(first_click.0, first_click.1)?;
        Ok(board)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    /// Effective mine count. May be lower than requested if the safe zone
    /// left too few candidate cells at placement time.
    pub fn mines(&self) -> CellCount {
        self.mines
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn first_click(&self) -> Option<Coord2> {
        self.first_click
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn cell(&self, row: Coord, col: Coord) -> Result<&Cell> {
        let coords = self.validate_coords((row, col))?;
        Ok(&self.cells[coords.to_grid_index()])
    }

    /// All cells with their coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    /// Coordinates of every mine, for the end-of-game reveal.
    pub fn mine_positions(&self) -> Vec<Coord2> {
        self.cells()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(coords, _)| coords)
            .collect()
    }

    /// Places mines outside the 3x3 safe zone around the first click, then
    /// computes every adjacency count. Placement consumes a private
    /// generator seeded from `self.seed` in a pinned order, so identical
    /// `(height, width, mines, seed, first_click)` always produce the
    /// identical mine set.
    pub fn place_mines(&mut self, row: Coord, col: Coord) -> Result<()> {
        let first = self.validate_coords((row, col))?;
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        let mut safe_zone = vec![first];
        safe_zone.extend(neighbors(first, self.bounds()));

        // Candidate list built by row-major scan, minus the safe zone.
        let mut candidates: Vec<Coord2> = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if !safe_zone.contains(&(row, col)) {
                    candidates.push((row, col));
                }
            }
        }

        let available = candidates.len() as CellCount;
        if self.mines > available {
            log::warn!(
                "requested {} mines but only {} cells fit outside the safe zone, clamping",
                self.mines,
                available
            );
            self.mines = available;
        }

        // Partial Fisher-Yates over the candidate list: the first `mines`
        // slots end up holding a uniform sample without replacement.
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let picked = usize::from(self.mines);
        for i in 0..picked {
            let j = rng.random_range(i..candidates.len());
            candidates.swap(i, j);
        }

        for &coords in &candidates[..picked] {
            self.cells[coords.to_grid_index()].place_mine();
        }

        self.compute_adjacent_counts();
        self.started = true;
        if self.first_click.is_none() {
            self.first_click = Some(first);
        }
        self.state = GameState::InProgress;
        Ok(())
    }

    /// Reveals a cell and, for a zero-adjacency cell, its whole connected
    /// zero region plus that region's numbered border. Returns every newly
    /// revealed coordinate exactly once; the order is unspecified.
    ///
    /// Flagged and already-revealed cells are inert and yield an empty
    /// list. Revealing a mine is legal: it is returned alone and the board
    /// transitions to `Lost`.
    pub fn reveal_cell(&mut self, row: Coord, col: Coord) -> Result<Vec<Coord2>> {
        let first = self.validate_coords((row, col))?;
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if self.state.is_finished() {
            return Ok(Vec::new());
        }

        let clicked = self.cells[first.to_grid_index()];
        if clicked.is_revealed() || clicked.is_flagged() {
            return Ok(Vec::new());
        }

        // Iterative flood fill. The revealed/flagged flags double as the
        // visited set, so each cell is processed at most once and the queue
        // cannot cycle.
        let mut revealed = Vec::new();
        let mut to_visit = VecDeque::from([first]);
        while let Some(coords) = to_visit.pop_front() {
            let index = coords.to_grid_index();
            if self.cells[index].is_revealed() || self.cells[index].is_flagged() {
                continue;
            }

            self.cells[index].reveal();
            revealed.push(coords);

            let cell = self.cells[index];
            if !cell.is_mine() && cell.adjacent_mines() == 0 {
                to_visit.extend(neighbors(coords, self.bounds()));
            }
        }

        if self.cells[first.to_grid_index()].is_mine() {
            self.state = GameState::Lost;
        } else if self.check_win() {
            self.state = GameState::Won;
        }

        Ok(revealed)
    }

    /// Flags or unflags a cell, delegating the revealed-cell guard to
    /// [`Cell::toggle_flag`]. Returns whether the flag state changed.
    pub fn toggle_flag(&mut self, row: Coord, col: Coord) -> Result<bool> {
        let coords = self.validate_coords((row, col))?;
        if self.state.is_finished() {
            return Ok(false);
        }

        let changed = self.cells[coords.to_grid_index()].toggle_flag();
        if changed && self.check_win() {
            self.state = GameState::Won;
        }
        Ok(changed)
    }

    /// True iff every mine is flagged and every safe cell is revealed.
    /// Revealing all safe cells without flagging the mines is not a win.
    /// An un-started board is never won.
    pub fn check_win(&self) -> bool {
        self.started
            && self.cells.iter().all(|cell| {
                if cell.is_mine() {
                    cell.is_flagged()
                } else {
                    cell.is_revealed()
                }
            })
    }

    fn compute_adjacent_counts(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[(row, col).to_grid_index()].is_mine() {
                    continue;
                }

                let count = neighbors((row, col), self.bounds())
                    .filter(|&coords| self.cells[coords.to_grid_index()].is_mine())
                    .count() as u8;
                self.cells[(row, col).to_grid_index()].set_adjacent_mines(count);
            }
        }
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.height && coords.1 < self.width {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn bounds(&self) -> Coord2 {
        (self.height, self.width)
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
