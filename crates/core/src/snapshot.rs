//! Read-only snapshot of the engine for the presentation layer.
//!
//! A fresh snapshot is valid after every accepted transition; the
//! presentation layer diffs consecutive snapshots and never reaches into
//! live state.

use arrayvec::ArrayVec;

use sumfall_types::{Mode, Phase, TileId, CELL_COUNT, GRID_COLS, GRID_ROWS};

use crate::grid::Tile;

/// One visible tile: identity, value, and whether it is in the current hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub id: TileId,
    pub value: u8,
    pub selected: bool,
}

impl TileView {
    pub fn new(tile: &Tile, selected: bool) -> Self {
        Self {
            id: tile.id,
            value: tile.value,
            selected,
        }
    }
}

/// Dense cell view, `cells[row][col]`, row 0 at the top
pub type CellGrid = [[Option<TileView>; GRID_COLS as usize]; GRID_ROWS as usize];

/// Complete observable game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cells: CellGrid,
    pub mode: Option<Mode>,
    pub phase: Phase,
    pub target: u32,
    pub selection_sum: u32,
    /// Picked tile ids in insertion order (the "current hand")
    pub selection: ArrayVec<TileId, CELL_COUNT>,
    pub score: u32,
    pub level: u32,
    /// Seconds left on the countdown; 0 outside time-attack
    pub time_left: u32,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[None; GRID_COLS as usize]; GRID_ROWS as usize];
        self.mode = None;
        self.phase = Phase::Menu;
        self.target = 0;
        self.selection_sum = 0;
        self.selection.clear();
        self.score = 0;
        self.level = 0;
        self.time_left = 0;
        self.paused = false;
        self.game_over = false;
        self.episode_id = 0;
        self.seed = 0;
    }

    /// True while input can mutate the board
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Number of live tiles
    pub fn tile_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| c.is_some())
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[None; GRID_COLS as usize]; GRID_ROWS as usize],
            mode: None,
            phase: Phase::Menu,
            target: 0,
            selection_sum: 0,
            selection: ArrayVec::new(),
            score: 0,
            level: 0,
            time_left: 0,
            paused: false,
            game_over: false,
            episode_id: 0,
            seed: 0,
        }
    }
}
