//! Protocol module - JSON message types for the presentation boundary
//!
//! Line-delimited JSON, one message per line. Inbound messages carry the
//! input events and the driver's virtual-time ticks; outbound messages are
//! full observation snapshots plus the discrete clear/celebration signal.
//! Engine enums cross the wire as their camelCase strings.

use serde::{Deserialize, Serialize};

use sumfall_core::snapshot::GameSnapshot;
use sumfall_types::{ClearEvent, GRID_COLS, GRID_ROWS};

/// Presentation layer → engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InboundMessage {
    /// Leave the menu in the given mode ("classic" | "timeAttack")
    SelectMode { mode: String },
    /// Toggle a tile in the selection
    ClickTile { id: u32 },
    TogglePause,
    Restart,
    Quit,
    /// Advance virtual time by the given span
    Tick {
        #[serde(rename = "elapsedMs")]
        elapsed_ms: u32,
    },
}

/// One visible tile on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMessage {
    pub id: u32,
    pub value: u8,
    pub selected: bool,
}

/// Engine → presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundMessage {
    /// Full snapshot, re-emitted after every accepted transition
    Observation(ObservationMessage),
    /// Celebration signal for a successful match
    Clear {
        seq: u64,
        #[serde(rename = "tilesCleared")]
        tiles_cleared: u32,
        points: u32,
        #[serde(rename = "bigClear")]
        big_clear: bool,
    },
    /// Well-formed input that the state machine absorbed as a no-op
    Rejected { seq: u64 },
}

/// Observation payload mirroring [`GameSnapshot`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationMessage {
    pub seq: u64,
    pub phase: String,
    pub mode: Option<String>,
    pub target: u32,
    #[serde(rename = "selectionSum")]
    pub selection_sum: u32,
    /// Picked tile ids in insertion order
    pub selection: Vec<u32>,
    pub score: u32,
    pub level: u32,
    #[serde(rename = "timeLeft")]
    pub time_left: u32,
    pub paused: bool,
    #[serde(rename = "gameOver")]
    pub game_over: bool,
    #[serde(rename = "episodeId")]
    pub episode_id: u32,
    pub seed: u32,
    /// `board[row][col]`, row 0 at the top
    pub board: Vec<Vec<Option<TileMessage>>>,
}

impl ObservationMessage {
    pub fn from_snapshot(snap: &GameSnapshot, seq: u64) -> Self {
        let mut board =
            vec![vec![None; GRID_COLS as usize]; GRID_ROWS as usize];
        for (row, cells) in snap.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                board[row][col] = cell.map(|view| TileMessage {
                    id: view.id.raw(),
                    value: view.value,
                    selected: view.selected,
                });
            }
        }

        Self {
            seq,
            phase: snap.phase.as_str().to_string(),
            mode: snap.mode.map(|m| m.as_str().to_string()),
            target: snap.target,
            selection_sum: snap.selection_sum,
            selection: snap.selection.iter().map(|id| id.raw()).collect(),
            score: snap.score,
            level: snap.level,
            time_left: snap.time_left,
            paused: snap.paused,
            game_over: snap.game_over,
            episode_id: snap.episode_id,
            seed: snap.seed,
            board,
        }
    }
}

impl OutboundMessage {
    pub fn clear(event: ClearEvent, seq: u64) -> Self {
        Self::Clear {
            seq,
            tiles_cleared: event.tiles_cleared,
            points: event.points,
            big_clear: event.big_clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_parses_camel_case_tags() {
        let msg: InboundMessage =
            serde_json::from_str(r#"{"type":"selectMode","mode":"classic"}"#).unwrap();
        assert_eq!(
            msg,
            InboundMessage::SelectMode {
                mode: "classic".to_string()
            }
        );

        let msg: InboundMessage =
            serde_json::from_str(r#"{"type":"clickTile","id":7}"#).unwrap();
        assert_eq!(msg, InboundMessage::ClickTile { id: 7 });

        let msg: InboundMessage =
            serde_json::from_str(r#"{"type":"tick","elapsedMs":16}"#).unwrap();
        assert_eq!(msg, InboundMessage::Tick { elapsed_ms: 16 });
    }

    #[test]
    fn inbound_rejects_unknown_types() {
        assert!(serde_json::from_str::<InboundMessage>(r#"{"type":"hello"}"#).is_err());
    }

    #[test]
    fn outbound_round_trips() {
        let msg = OutboundMessage::Clear {
            seq: 3,
            tiles_cleared: 4,
            points: 40,
            big_clear: true,
        };
        let line = serde_json::to_string(&msg).unwrap();
        assert!(line.contains(r#""type":"clear""#));
        assert!(line.contains(r#""bigClear":true"#));
        let back: OutboundMessage = serde_json::from_str(&line).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn observation_mirrors_the_snapshot() {
        let mut game = sumfall_core::GameState::new(12345);
        game.select_mode(sumfall_types::Mode::TimeAttack);
        let snap = game.snapshot();

        let obs = ObservationMessage::from_snapshot(&snap, 1);
        assert_eq!(obs.phase, "playing");
        assert_eq!(obs.mode.as_deref(), Some("timeAttack"));
        assert_eq!(obs.board.len(), GRID_ROWS as usize);
        assert_eq!(obs.board[0].len(), GRID_COLS as usize);
        let tiles: usize = obs
            .board
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count();
        assert_eq!(tiles, snap.tile_count());
    }
}
