//! Selection module - the player's current hand of picked tiles
//!
//! Insertion-ordered so the presentation layer can display the hand in the
//! order it was built. Cleared on every resolution outcome; never persisted.

use arrayvec::ArrayVec;

use sumfall_types::{TileId, CELL_COUNT};

use crate::grid::Grid;

/// Ordered set of tile ids currently chosen by the player
#[derive(Debug, Clone, Default)]
pub struct Selection {
    picked: ArrayVec<TileId, CELL_COUNT>,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            picked: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.picked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.picked.contains(&id)
    }

    /// Picked ids in insertion order
    pub fn ids(&self) -> &[TileId] {
        &self.picked
    }

    /// Flip membership of `id`; returns true when the tile is now selected
    pub fn toggle(&mut self, id: TileId) -> bool {
        if let Some(pos) = self.picked.iter().position(|&p| p == id) {
            self.picked.remove(pos);
            false
        } else {
            self.picked.push(id);
            true
        }
    }

    /// Running sum of the picked tiles' values.
    ///
    /// Ids are always backed by live tiles (removal and selection-clear are
    /// atomic within a resolution step); a stale id would simply contribute
    /// nothing.
    pub fn sum(&self, grid: &Grid) -> u32 {
        self.picked
            .iter()
            .filter_map(|&id| grid.get(id))
            .map(|t| u32::from(t.value))
            .sum()
    }

    pub fn clear(&mut self) {
        self.picked.clear();
    }
}
