//! Scheduler module - the cancellable scheduled-event facility
//!
//! Both attrition timers (the deferred row add in classic mode and the one
//! second countdown in time-attack) live here as entries advanced by virtual
//! elapsed milliseconds. The game state advances the scheduler only while
//! actively playing, which is what suspends entries under pause; quit,
//! restart, and overflow cancel entries outright via `cancel_all`.
//!
//! At most one entry per kind exists; arming a kind again replaces the
//! prior entry.

use arrayvec::ArrayVec;

/// Timer identities, one slot each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// One-shot row add after a successful clear (classic mode)
    DeferredRow,
    /// Periodic one-second countdown tick (time-attack mode)
    Countdown,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    kind: TimerKind,
    remaining_ms: u32,
    period_ms: Option<u32>,
}

/// Fired-event buffer; large enough for any sane `advance` span
pub type Fired = ArrayVec<TimerKind, 16>;

/// Owns every pending timer of a game session
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    entries: ArrayVec<Entry, 2>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            entries: ArrayVec::new(),
        }
    }

    /// Arm a one-shot entry, replacing any prior entry of the same kind
    pub fn schedule_once(&mut self, kind: TimerKind, delay_ms: u32) {
        self.cancel(kind);
        self.entries.push(Entry {
            kind,
            remaining_ms: delay_ms,
            period_ms: None,
        });
    }

    /// Arm a periodic entry, replacing any prior entry of the same kind
    pub fn schedule_every(&mut self, kind: TimerKind, period_ms: u32) {
        debug_assert!(period_ms > 0);
        self.cancel(kind);
        self.entries.push(Entry {
            kind,
            remaining_ms: period_ms,
            period_ms: Some(period_ms),
        });
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        self.entries.retain(|e| e.kind != kind);
    }

    /// Drop every pending entry (mode exit, restart, overflow)
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_scheduled(&self, kind: TimerKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    /// Milliseconds until `kind` fires next, if armed
    pub fn remaining_ms(&self, kind: TimerKind) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.remaining_ms)
    }

    /// Advance virtual time and collect fired entries.
    ///
    /// A periodic entry spanning several periods fires once per period.
    /// One-shot entries fire once and disarm. Events are reported per entry
    /// in arming order.
    pub fn advance(&mut self, elapsed_ms: u32) -> Fired {
        let mut fired = Fired::new();

        let mut i = 0;
        while i < self.entries.len() {
            let entry = &mut self.entries[i];
            let mut left = elapsed_ms;
            let mut disarmed = false;

            while left >= entry.remaining_ms {
                left -= entry.remaining_ms;
                if !fired.is_full() {
                    fired.push(entry.kind);
                }
                match entry.period_ms {
                    Some(period) => entry.remaining_ms = period,
                    None => {
                        disarmed = true;
                        break;
                    }
                }
            }

            if disarmed {
                self.entries.remove(i);
            } else {
                entry.remaining_ms -= left;
                i += 1;
            }
        }

        fired
    }
}
