//! Target module - target-sum generation and match scoring
//!
//! A target is built by sampling a small subset of the live tiles and
//! summing their values, so every target is achievable by at least one
//! subset at the moment it is generated. A later row arrival can bury that
//! subset; rows keep arriving independently of target state, so the
//! guarantee holds at generation time only.

use arrayvec::ArrayVec;

use sumfall_types::{
    BIG_CLEAR_THRESHOLD, CELL_COUNT, POINTS_PER_TILE, TARGET_SUBSET_MIN, TARGET_SUBSET_MAX,
};

use crate::grid::Tile;
use crate::rng::SimpleRng;

/// Roll a fresh target from the live tiles.
///
/// Draws a subset size `k` uniformly from
/// `[TARGET_SUBSET_MIN, min(TARGET_SUBSET_MAX, tile_count)]`, samples `k`
/// tiles without replacement, and returns the sum of their values. Boards
/// with fewer than `TARGET_SUBSET_MIN` tiles clamp `k` to the tile count.
///
/// An empty board yields the neutral target 0 (effectively unreachable,
/// pending the next row arrival).
pub fn roll_target(tiles: &[Tile], rng: &mut SimpleRng) -> u32 {
    if tiles.is_empty() {
        return 0;
    }

    let n = tiles.len();
    let lo = TARGET_SUBSET_MIN.min(n);
    let hi = TARGET_SUBSET_MAX.min(n);
    let k = lo + rng.next_range((hi - lo + 1) as u32) as usize;

    let mut values: ArrayVec<u8, CELL_COUNT> = tiles.iter().map(|t| t.value).collect();
    rng.sample_prefix(&mut values, k);
    values[..k].iter().map(|&v| u32::from(v)).sum()
}

/// Points awarded for clearing `count` tiles in one exact match
pub fn clear_points(count: usize) -> u32 {
    count as u32 * POINTS_PER_TILE
}

/// Whether an award crosses the celebration threshold
pub fn is_big_clear(points: u32) -> bool {
    points > BIG_CLEAR_THRESHOLD
}
