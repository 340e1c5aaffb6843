//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic for the falling-tile arithmetic puzzle. It has **zero dependencies**
//! on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Bounded, allocation-free collections on the hot paths
//!
//! # Module Structure
//!
//! - [`grid`]: 6x10 tile board with row shift, row append, and gravity
//! - [`game_state`]: the controller state machine and input contract
//! - [`rng`]: seeded LCG behind every randomized decision
//! - [`selection`]: the player's insertion-ordered hand of picked tiles
//! - [`scheduler`]: cancellable virtual-time attrition timers
//! - [`snapshot`]: read-only state view for the presentation layer
//! - [`target`]: achievable-by-construction target sums and match scoring
//!
//! # Game Rules
//!
//! - Tiles carry values 1-9; the board starts with its bottom 4 rows filled.
//! - A target sum is built from 2-4 live tiles, so it is always achievable
//!   at the moment it is generated.
//! - Picking tiles that sum exactly to the target clears them (10 points per
//!   tile), compacts each column downward, and rolls a fresh target.
//! - Overshooting the target wipes the hand; nothing else changes.
//! - The board grows a row 300ms after each clear (classic) or whenever the
//!   10-second countdown runs out (time-attack). A growth that would push a
//!   tile past the top row ends the game instead.
//!
//! # Example
//!
//! ```
//! use sumfall_core::GameState;
//! use sumfall_types::{InputEvent, Mode, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.apply(InputEvent::SelectMode(Mode::Classic));
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! // Pick the first live tile.
//! let id = game.grid().tiles()[0].id;
//! game.apply(InputEvent::ClickTile(id));
//!
//! // Drive virtual time; attrition fires through here.
//! game.tick(16);
//!
//! let snapshot = game.snapshot();
//! assert!(snapshot.playable());
//! ```
//!
//! # Timing
//!
//! The engine never reads a wall clock. The driver feeds elapsed
//! milliseconds through [`GameState::tick`]; both attrition timers are
//! entries in one cancellable scheduler advanced by that virtual time.

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod scheduler;
pub mod selection;
pub mod snapshot;
pub mod target;

pub use sumfall_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::{Grid, IdSource, Tile};
pub use rng::SimpleRng;
pub use scheduler::{Scheduler, TimerKind};
pub use selection::Selection;
pub use snapshot::{GameSnapshot, TileView};
pub use target::{clear_points, is_big_clear, roll_target};
