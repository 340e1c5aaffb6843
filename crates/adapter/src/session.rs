//! Session module - the synchronous event/query loop
//!
//! A `Session` owns one engine instance and turns inbound protocol lines
//! into state transitions, answering each with the outbound messages the
//! presentation layer should render: an observation after every accepted
//! transition (plus the clear signal when a match fired), a `rejected`
//! status for well-formed inputs the state machine absorbed, and an error
//! only for lines that do not parse.

use anyhow::{anyhow, Context, Result};

use sumfall_core::snapshot::GameSnapshot;
use sumfall_core::GameState;
use sumfall_types::{InputEvent, Mode, TileId};

use crate::protocol::{InboundMessage, ObservationMessage, OutboundMessage};

/// One presentation-layer connection to one engine
#[derive(Debug)]
pub struct Session {
    state: GameState,
    /// Reused snapshot buffer; observations copy out of it.
    snapshot: GameSnapshot,
    seq: u64,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            state: GameState::new(seed),
            snapshot: GameSnapshot::default(),
            seq: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Handle one raw protocol line, answering with encoded lines
    pub fn handle_line(&mut self, line: &str) -> Result<Vec<String>> {
        let msg: InboundMessage = serde_json::from_str(line.trim())
            .with_context(|| format!("malformed protocol line: {line:?}"))?;
        let replies = self.handle(msg)?;
        replies
            .iter()
            .map(|m| serde_json::to_string(m).context("encoding reply"))
            .collect()
    }

    /// Handle one decoded message
    pub fn handle(&mut self, msg: InboundMessage) -> Result<Vec<OutboundMessage>> {
        match msg {
            InboundMessage::Tick { elapsed_ms } => Ok(self.tick(elapsed_ms)),
            _ => {
                let event = self.decode_event(msg)?;
                Ok(self.apply(event))
            }
        }
    }

    /// Apply an input event, producing the render-ready replies
    pub fn apply(&mut self, event: InputEvent) -> Vec<OutboundMessage> {
        if !self.state.apply(event) {
            self.seq += 1;
            return vec![OutboundMessage::Rejected { seq: self.seq }];
        }

        let mut replies = Vec::with_capacity(2);
        if let Some(clear) = self.state.take_last_clear() {
            self.seq += 1;
            replies.push(OutboundMessage::clear(clear, self.seq));
        }
        replies.push(self.observe());
        replies
    }

    /// Advance virtual time; an observation is emitted only when a timer
    /// actually fired (otherwise nothing observable changed).
    pub fn tick(&mut self, elapsed_ms: u32) -> Vec<OutboundMessage> {
        if self.state.tick(elapsed_ms) {
            vec![self.observe()]
        } else {
            Vec::new()
        }
    }

    fn observe(&mut self) -> OutboundMessage {
        self.seq += 1;
        self.state.snapshot_into(&mut self.snapshot);
        OutboundMessage::Observation(ObservationMessage::from_snapshot(
            &self.snapshot,
            self.seq,
        ))
    }

    fn decode_event(&self, msg: InboundMessage) -> Result<InputEvent> {
        Ok(match msg {
            InboundMessage::SelectMode { mode } => {
                let mode = Mode::from_str(&mode)
                    .ok_or_else(|| anyhow!("unknown mode: {mode:?}"))?;
                InputEvent::SelectMode(mode)
            }
            InboundMessage::ClickTile { id } => InputEvent::ClickTile(TileId(id)),
            InboundMessage::TogglePause => InputEvent::TogglePause,
            InboundMessage::Restart => InputEvent::Restart,
            InboundMessage::Quit => InputEvent::Quit,
            InboundMessage::Tick { .. } => unreachable!("ticks handled by caller"),
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
