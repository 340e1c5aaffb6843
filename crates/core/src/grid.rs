//! Grid module - owns the live tiles and their coordinates
//!
//! The grid is a 6x10 board where each cell holds at most one numbered tile.
//! Tiles are stored sparsely in a bounded vector (the board never exceeds
//! `CELL_COUNT` tiles) rather than a dense cell array, because tiles carry
//! identity: the selection tracker and the presentation layer refer to them
//! by id across shifts and gravity moves.
//!
//! Coordinates: (row, col) with row 0 at the top (the danger edge) and row
//! `GRID_ROWS - 1` at the bottom where new rows arrive.

use arrayvec::ArrayVec;

use sumfall_types::{TileId, CELL_COUNT, GRID_COLS, GRID_ROWS};

use crate::rng::SimpleRng;

/// A single numbered tile occupying one grid cell.
///
/// `value` is immutable after creation; `row`/`col` mutate only via
/// `shift_up` and `apply_gravity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub value: u8,
    pub row: u8,
    pub col: u8,
}

/// Monotonic tile id source.
///
/// Sole contract: an issued id never repeats among live tiles.
#[derive(Debug, Clone, Default)]
pub struct IdSource {
    next: u32,
}

impl IdSource {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    pub fn issue(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// The game grid - exclusive owner of all live tiles.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    tiles: ArrayVec<Tile, CELL_COUNT>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            tiles: ArrayVec::new(),
        }
    }

    /// Number of live tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All live tiles, in insertion order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Look up a tile by id
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.get(id).is_some()
    }

    /// Tile occupying (row, col), if any
    pub fn tile_at(&self, row: u8, col: u8) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.row == row && t.col == col)
    }

    /// True iff any tile occupies row 0.
    ///
    /// Gate for `shift_up`: a shift while overflowing would push tiles off
    /// the board, so the attrition check transitions to game over instead.
    pub fn is_overflowing(&self) -> bool {
        self.tiles.iter().any(|t| t.row == 0)
    }

    /// Populate the bottom `initial_rows` rows with fresh tiles.
    ///
    /// Called once per game start on an empty grid.
    pub fn fill(&mut self, initial_rows: u8, rng: &mut SimpleRng, ids: &mut IdSource) {
        debug_assert!(self.tiles.is_empty());
        let first_row = GRID_ROWS.saturating_sub(initial_rows);
        for row in first_row..GRID_ROWS {
            for col in 0..GRID_COLS {
                self.spawn_tile(row, col, rng, ids);
            }
        }
    }

    /// Decrement every tile's row by one.
    ///
    /// Caller must have checked `is_overflowing()` first.
    pub fn shift_up(&mut self) {
        debug_assert!(!self.is_overflowing());
        for tile in &mut self.tiles {
            tile.row -= 1;
        }
    }

    /// Insert `GRID_COLS` fresh tiles along the bottom row
    pub fn append_row(&mut self, rng: &mut SimpleRng, ids: &mut IdSource) {
        for col in 0..GRID_COLS {
            self.spawn_tile(GRID_ROWS - 1, col, rng, ids);
        }
    }

    /// Delete the tiles whose ids are in `doomed`.
    ///
    /// Intermediate states are never observable; the presentation layer only
    /// sees the snapshot taken after the full resolution step.
    pub fn remove_tiles(&mut self, doomed: &[TileId]) {
        self.tiles.retain(|t| !doomed.contains(&t.id));
    }

    /// Close the gaps left by removal, per column.
    ///
    /// Surviving tiles in each column are re-packed bottom-up: the
    /// bottom-most survivor lands on row `GRID_ROWS - 1`, the next one above
    /// it, and so on. Tiles never change column.
    pub fn apply_gravity(&mut self) {
        for col in 0..GRID_COLS {
            // Indices of this column's tiles, bottom-most first.
            let mut members: ArrayVec<usize, { GRID_ROWS as usize }> = ArrayVec::new();
            for (i, tile) in self.tiles.iter().enumerate() {
                if tile.col == col {
                    members.push(i);
                }
            }
            members.sort_unstable_by(|&a, &b| self.tiles[b].row.cmp(&self.tiles[a].row));

            for (slot, &i) in members.iter().enumerate() {
                self.tiles[i].row = GRID_ROWS - 1 - slot as u8;
            }
        }
    }

    /// Drop all tiles (quit back to menu)
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    fn spawn_tile(&mut self, row: u8, col: u8, rng: &mut SimpleRng, ids: &mut IdSource) {
        debug_assert!(self.tile_at(row, col).is_none());
        self.tiles.push(Tile {
            id: ids.issue(),
            value: rng.next_tile_value(),
            row,
            col,
        });
    }

    /// Check the one-tile-per-cell invariant (test support)
    #[cfg(test)]
    pub fn positions_are_unique(&self) -> bool {
        for (i, a) in self.tiles.iter().enumerate() {
            for b in &self.tiles[i + 1..] {
                if a.row == b.row && a.col == b.col {
                    return false;
                }
            }
        }
        true
    }
}
