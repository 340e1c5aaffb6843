//! Adapter module - the presentation-layer boundary protocol
//!
//! The engine exposes exactly one surface to the outside: input events go
//! in, observation snapshots come out. This crate gives that contract a
//! **line-delimited JSON** shape so any presentation layer (TUI, GUI, test
//! harness) can drive a game without linking against engine internals.
//!
//! # Message Types
//!
//! ## Presentation → Engine
//!
//! - **selectMode**: leave the menu and start a session
//! - **clickTile**: toggle a tile in the current selection
//! - **togglePause** / **restart** / **quit**: lifecycle control
//! - **tick**: advance virtual time by `elapsedMs`
//!
//! ## Engine → Presentation
//!
//! - **observation**: full game state snapshot, re-emitted after every
//!   accepted transition
//! - **clear**: discrete celebration signal (tiles cleared, points,
//!   big-clear flag)
//! - **rejected**: a well-formed input the state machine absorbed silently
//!
//! # Example Protocol Flow
//!
//! ```text
//! Presentation -> Engine: {"type":"selectMode","mode":"timeAttack"}
//! Engine -> Presentation: {"type":"observation","seq":1,"phase":"playing",...}
//! Presentation -> Engine: {"type":"clickTile","id":4}
//! Engine -> Presentation: {"type":"observation","seq":2,...}
//! Presentation -> Engine: {"type":"tick","elapsedMs":1000}
//! Engine -> Presentation: {"type":"observation","seq":3,"timeLeft":9,...}
//! ```
//!
//! # Error Handling
//!
//! Only unparseable lines are errors (`anyhow` with the offending line in
//! context). Inputs that are illegal in the current phase — clicking while
//! paused, restarting mid-game — answer with a `rejected` status instead,
//! mirroring the engine's silent-no-op contract.

pub mod protocol;
pub mod session;

pub use sumfall_core as core;
pub use sumfall_types as types;

// Re-export protocol types for convenience
pub use protocol::{InboundMessage, ObservationMessage, OutboundMessage, TileMessage};
pub use session::Session;
