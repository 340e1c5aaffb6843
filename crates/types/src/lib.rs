//! Core types module - shared data structures and tuning constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, presentation boundary, tests).
//!
//! # Board Dimensions
//!
//! - **Columns**: 6 (indexed 0-5)
//! - **Rows**: 10 (indexed 0-9, row 0 = top/danger edge)
//! - **Initial fill**: bottom 4 rows at game start
//!
//! # Timing Constants
//!
//! Timing values are milliseconds of virtual elapsed time fed through
//! `tick`; the engine never reads a wall clock:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Suggested driver timestep (~60 FPS) |
//! | `CLASSIC_ROW_DELAY_MS` | 300 | Deferred row add after a clear (classic) |
//! | `COUNTDOWN_TICK_MS` | 1000 | Countdown cadence (time-attack) |
//! | `TIME_ATTACK_LIMIT_SECS` | 10 | Countdown reset value (time-attack) |
//!
//! # Scoring
//!
//! An exact match awards `POINTS_PER_TILE` per cleared tile. Awards above
//! `BIG_CLEAR_THRESHOLD` additionally raise the big-clear celebration flag.
//!
//! # Examples
//!
//! ```
//! use sumfall_types::{Mode, Phase, GRID_COLS, GRID_ROWS};
//!
//! let mode = Mode::from_str("timeAttack").unwrap();
//! assert_eq!(mode, Mode::TimeAttack);
//! assert_eq!(mode.as_str(), "timeAttack");
//!
//! assert_eq!(Phase::Menu.as_str(), "menu");
//!
//! assert_eq!(GRID_COLS, 6);
//! assert_eq!(GRID_ROWS, 10);
//! ```

/// Board height in rows (row 0 = top/danger edge)
pub const GRID_ROWS: u8 = 10;

/// Board width in columns
pub const GRID_COLS: u8 = 6;

/// Total number of cells on the board
pub const CELL_COUNT: usize = (GRID_ROWS as usize) * (GRID_COLS as usize);

/// Rows populated by the initial fill at game start
pub const INITIAL_FILL_ROWS: u8 = 4;

/// Largest tile value; fresh tiles draw uniformly from `1..=MAX_TILE_VALUE`
pub const MAX_TILE_VALUE: u8 = 9;

/// Smallest subset size used to construct a target sum
pub const TARGET_SUBSET_MIN: usize = 2;

/// Largest subset size used to construct a target sum
pub const TARGET_SUBSET_MAX: usize = 4;

/// Points awarded per tile in an exact match
pub const POINTS_PER_TILE: u32 = 10;

/// Awards strictly above this raise the big-clear celebration flag
pub const BIG_CLEAR_THRESHOLD: u32 = 30;

/// Fixed timestep interval in milliseconds (16ms, roughly 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay before the deferred row add fires after a clear (classic mode)
pub const CLASSIC_ROW_DELAY_MS: u32 = 300;

/// Countdown tick cadence in milliseconds (time-attack mode)
pub const COUNTDOWN_TICK_MS: u32 = 1000;

/// Countdown reset value in seconds (time-attack mode)
pub const TIME_ATTACK_LIMIT_SECS: u32 = 10;

/// Process-unique identifier of a live tile.
///
/// Issued by a monotonically increasing counter; never repeats among live
/// tiles within an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl TileId {
    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// Attrition pacing modes
///
/// - **Classic**: the board grows a fixed delay after every successful clear
/// - **TimeAttack**: a one-second countdown grows the board when it runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Classic,
    TimeAttack,
}

impl Mode {
    /// Parse mode from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use sumfall_types::Mode;
    ///
    /// assert_eq!(Mode::from_str("classic"), Some(Mode::Classic));
    /// assert_eq!(Mode::from_str("timeattack"), Some(Mode::TimeAttack));
    /// assert_eq!(Mode::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Mode::Classic),
            "timeattack" | "time-attack" => Some(Mode::TimeAttack),
            _ => None,
        }
    }

    /// Convert to camelCase string for the boundary protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Classic => "classic",
            Mode::TimeAttack => "timeAttack",
        }
    }
}

/// Controller phases
///
/// The lifecycle goes: Menu → Playing ↔ Paused, Playing → GameOver →
/// Playing (restart), and any phase → Menu (quit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl Phase {
    /// Convert to camelCase string for the boundary protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Input events accepted by the game controller
///
/// These are the only mutations the presentation layer can request. Events
/// that are not legal in the current phase are absorbed silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the menu and start a game in the given mode
    SelectMode(Mode),
    /// Toggle membership of a tile in the current selection
    ClickTile(TileId),
    /// Toggle between Playing and Paused
    TogglePause,
    /// Start a fresh game in the same mode after a game over
    Restart,
    /// Abandon the session and return to the menu
    Quit,
}

/// Core-side event emitted after a successful match.
///
/// Consumed by the presentation layer (via `take_last_clear`) for optional
/// celebration effects; carries no state beyond the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearEvent {
    /// Number of tiles removed by the match
    pub tiles_cleared: u32,
    /// Points awarded for the match
    pub points: u32,
    /// True when `points` exceeded `BIG_CLEAR_THRESHOLD`
    pub big_clear: bool,
}
