//! Game state module - the controller state machine
//!
//! Ties together grid, selection, target generation, and the attrition
//! scheduler behind the input/query contract the presentation layer sees.
//! Every transition is an explicit, directly-invoked method that either
//! mutates state and reports acceptance, or is absorbed as a silent no-op;
//! there is no reactive re-triggering, so each toggle is evaluated exactly
//! once.

use arrayvec::ArrayVec;

use sumfall_types::{
    ClearEvent, InputEvent, Mode, Phase, TileId, CELL_COUNT, CLASSIC_ROW_DELAY_MS,
    COUNTDOWN_TICK_MS, INITIAL_FILL_ROWS, TIME_ATTACK_LIMIT_SECS,
};

use crate::grid::{Grid, IdSource};
use crate::rng::SimpleRng;
use crate::scheduler::{Scheduler, TimerKind};
use crate::selection::Selection;
use crate::snapshot::{GameSnapshot, TileView};
use crate::target::{clear_points, is_big_clear, roll_target};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    selection: Selection,
    scheduler: Scheduler,
    rng: SimpleRng,
    ids: IdSource,
    phase: Phase,
    mode: Option<Mode>,
    target: u32,
    score: u32,
    /// Reserved for future scaling; constant 1 while a session runs.
    level: u32,
    /// Seconds left on the countdown (time-attack only).
    time_left: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Last successful match (consumed by observers).
    last_clear: Option<ClearEvent>,
}

impl GameState {
    /// Create a new engine in the menu phase with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            selection: Selection::new(),
            scheduler: Scheduler::new(),
            rng: SimpleRng::new(seed),
            ids: IdSource::new(),
            phase: Phase::Menu,
            mode: None,
            target: 0,
            score: 0,
            level: 0,
            time_left: 0,
            episode_id: 0,
            last_clear: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Picked tile ids in insertion order
    pub fn selection_ids(&self) -> &[TileId] {
        self.selection.ids()
    }

    /// Running sum of the current selection
    pub fn selection_sum(&self) -> u32 {
        self.selection.sum(&self.grid)
    }

    /// Current RNG state (for restarting with a reproducible stream)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Take and clear the last match event
    pub fn take_last_clear(&mut self) -> Option<ClearEvent> {
        self.last_clear.take()
    }

    /// Apply an input event; returns whether the transition was accepted
    pub fn apply(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::SelectMode(mode) => self.select_mode(mode),
            InputEvent::ClickTile(id) => self.click_tile(id),
            InputEvent::TogglePause => self.toggle_pause(),
            InputEvent::Restart => self.restart(),
            InputEvent::Quit => self.quit(),
        }
    }

    /// Menu → Playing: choose a mode and start a session
    pub fn select_mode(&mut self, mode: Mode) -> bool {
        if self.phase != Phase::Menu {
            return false;
        }
        self.start_session(mode);
        true
    }

    /// GameOver → Playing: fresh session in the same mode
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }
        let Some(mode) = self.mode else {
            return false;
        };
        self.episode_id = self.episode_id.wrapping_add(1);
        self.start_session(mode);
        true
    }

    /// Playing ↔ Paused
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Playing => {
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Playing;
                true
            }
            _ => false,
        }
    }

    /// Any phase → Menu; cancels all pending attrition
    pub fn quit(&mut self) -> bool {
        if self.phase == Phase::Menu {
            return false;
        }
        self.scheduler.cancel_all();
        self.grid.clear();
        self.selection.clear();
        self.phase = Phase::Menu;
        self.mode = None;
        self.target = 0;
        self.score = 0;
        self.level = 0;
        self.time_left = 0;
        self.last_clear = None;
        true
    }

    /// Toggle a tile in the selection and evaluate the outcome.
    ///
    /// Only processed while Playing; stale ids are absorbed silently.
    pub fn click_tile(&mut self, id: TileId) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        if !self.grid.contains(id) {
            return false;
        }
        self.selection.toggle(id);
        self.resolve_selection();
        true
    }

    /// Advance virtual time; fires due attrition while Playing.
    ///
    /// Returns true when at least one timer fired. Paused and terminal
    /// phases hold all timers in place.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        let fired = self.scheduler.advance(elapsed_ms);
        let any = !fired.is_empty();
        for kind in fired {
            if self.phase != Phase::Playing {
                break;
            }
            match kind {
                TimerKind::DeferredRow => self.attrition_check(),
                TimerKind::Countdown => self.countdown_tick(),
            }
        }
        any
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        for tile in self.grid.tiles() {
            let selected = self.selection.contains(tile.id);
            out.cells[tile.row as usize][tile.col as usize] = Some(TileView::new(tile, selected));
        }
        out.selection.clear();
        out.selection.extend(self.selection.ids().iter().copied());
        out.mode = self.mode;
        out.phase = self.phase;
        out.target = self.target;
        out.selection_sum = self.selection_sum();
        out.score = self.score;
        out.level = self.level;
        out.time_left = self.time_left;
        out.paused = self.paused();
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.seed = self.rng.state();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn start_session(&mut self, mode: Mode) {
        self.scheduler.cancel_all();
        self.grid.clear();
        self.selection.clear();
        self.phase = Phase::Playing;
        self.mode = Some(mode);
        self.score = 0;
        self.level = 1;
        self.last_clear = None;
        self.time_left = match mode {
            Mode::TimeAttack => TIME_ATTACK_LIMIT_SECS,
            Mode::Classic => 0,
        };

        self.grid.fill(INITIAL_FILL_ROWS, &mut self.rng, &mut self.ids);
        self.target = roll_target(self.grid.tiles(), &mut self.rng);

        if mode == Mode::TimeAttack {
            self.scheduler
                .schedule_every(TimerKind::Countdown, COUNTDOWN_TICK_MS);
        }
    }

    /// Evaluate the selection after a toggle; runs exactly once per toggle.
    fn resolve_selection(&mut self) {
        if self.selection.is_empty() {
            // The player backed out of their last pick.
            self.reroll_target();
            return;
        }

        let sum = self.selection.sum(&self.grid);
        if self.target > 0 && sum == self.target {
            self.clear_match();
        } else if sum > self.target {
            // Overshoot: wipe the hand, score and grid untouched.
            self.selection.clear();
            self.reroll_target();
        }
        // Undershoot: the hand persists, awaiting further toggles.
    }

    /// Exact match: award, remove, compact, re-target, schedule attrition.
    ///
    /// Removal and selection-clear happen within this one step; observers
    /// only ever see the settled outcome.
    fn clear_match(&mut self) {
        let count = self.selection.len();
        let points = clear_points(count);
        self.score += points;

        let doomed: ArrayVec<TileId, CELL_COUNT> = self.selection.ids().iter().copied().collect();
        self.grid.remove_tiles(&doomed);
        self.grid.apply_gravity();
        self.selection.clear();
        self.reroll_target();

        self.last_clear = Some(ClearEvent {
            tiles_cleared: count as u32,
            points,
            big_clear: is_big_clear(points),
        });

        match self.mode {
            Some(Mode::Classic) => {
                self.scheduler
                    .schedule_once(TimerKind::DeferredRow, CLASSIC_ROW_DELAY_MS);
            }
            Some(Mode::TimeAttack) => {
                self.time_left = TIME_ATTACK_LIMIT_SECS;
            }
            None => {}
        }
    }

    /// One firing of the time-attack countdown.
    ///
    /// The display never shows zero: the tick that would reach it runs the
    /// attrition check and winds the countdown back to the limit.
    fn countdown_tick(&mut self) {
        if self.time_left <= 1 {
            self.attrition_check();
            if self.phase == Phase::Playing {
                self.time_left = TIME_ATTACK_LIMIT_SECS;
            }
        } else {
            self.time_left -= 1;
        }
    }

    /// Shared row-attrition check: overflow ends the game with the grid
    /// untouched, otherwise the board shifts up and grows a fresh row.
    fn attrition_check(&mut self) {
        if self.grid.is_overflowing() {
            self.phase = Phase::GameOver;
            self.scheduler.cancel_all();
            return;
        }
        self.grid.shift_up();
        self.grid.append_row(&mut self.rng, &mut self.ids);

        // A board that emptied out waits with the neutral target until rows
        // arrive; the empty selection can never re-trigger on its own.
        if self.target == 0 && self.selection.is_empty() {
            self.reroll_target();
        }
    }

    fn reroll_target(&mut self) {
        self.target = roll_target(self.grid.tiles(), &mut self.rng);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
