//! Boot Sequencer: priming animation with session-scoped skip
//!
//! Transitions:
//! - start, visited flag set → READY immediately, zero ticks
//! - start, flag unset → PRIMING, progress 0
//! - tick → progress +2, clamped to exactly 100, timer halts at 100
//! - settle (after the 500 ms delay) → flag set, READY, exactly once
//! - cancel → no further tick or settle ever fires
//!
//! The sequencer is a pure state machine; the shell owns the real timers
//! and drives `tick()` / `settle()`. The started/cancelled/completed
//! latches make late callbacks structural no-ops.

use crate::core::store::SessionStore;
use crate::types::{BootOutput, BootPhase, ReasonCode};
use crate::{PROGRESS_STEP, VISITED_KEY, VISITED_VALUE};

/// Boot sequencer state machine
#[derive(Debug)]
pub struct BootSequencer<S: SessionStore> {
    /// Current phase
    phase: BootPhase,
    /// Progress percentage, integer in [0, 100], monotone
    progress: u8,
    /// Session store collaborator
    store: S,
    /// Has start() run?
    started: bool,
    /// Has cancel() run? Latch, never cleared.
    cancelled: bool,
    /// Has the completion path run (or been skipped)? Latch.
    completed: bool,
    /// Number of effective timer ticks
    tick_count: u64,
}

impl<S: SessionStore> BootSequencer<S> {
    /// Create new sequencer around a session store
    pub fn new(store: S) -> Self {
        Self {
            phase: BootPhase::Priming,
            progress: 0,
            store,
            started: false,
            cancelled: false,
            completed: false,
            tick_count: 0,
        }
    }

    /// Begin the boot sequence. Skips priming when the visited flag is set.
    pub fn start(&mut self) -> BootOutput {
        if self.started {
            return self.output(ReasonCode::B004_TICK_IGNORED);
        }
        self.started = true;

        // Storage failure reads as "not visited": full priming every time
        let visited = self
            .store
            .get(VISITED_KEY)
            .ok()
            .flatten()
            .map(|v| v == VISITED_VALUE)
            .unwrap_or(false);

        if visited {
            self.phase = BootPhase::Ready;
            self.completed = true;
            return self.output(ReasonCode::B001_PRIMING_SKIPPED);
        }

        self.output(ReasonCode::B001_PRIMING_STARTED)
    }

    /// One timer callback: advance progress by the fixed step, clamped to 100
    pub fn tick(&mut self) -> BootOutput {
        if !self.is_running() || self.progress >= 100 {
            return self.output(ReasonCode::B004_TICK_IGNORED);
        }

        self.tick_count += 1;
        self.progress = (self.progress + PROGRESS_STEP).min(100);

        if self.progress >= 100 {
            self.output(ReasonCode::B002_PROGRESS_COMPLETE)
        } else {
            self.output(ReasonCode::B002_PROGRESS_ADVANCING)
        }
    }

    /// Completion callback, fired once after the settle delay:
    /// persist the visited flag and reveal content
    pub fn settle(&mut self) -> BootOutput {
        if !self.is_running() || self.progress < 100 {
            return self.output(ReasonCode::B004_TICK_IGNORED);
        }

        self.completed = true;
        // Write failure degrades to re-priming next session
        let _ = self.store.set(VISITED_KEY, VISITED_VALUE);
        self.phase = BootPhase::Ready;

        self.output(ReasonCode::B003_BOOT_SETTLED)
    }

    /// Cancel the sequencer. Safe to call repeatedly; after this no tick
    /// or settle ever takes effect.
    pub fn cancel(&mut self) -> BootOutput {
        if !self.completed {
            self.cancelled = true;
        }
        self.output(ReasonCode::B004_CANCELLED)
    }

    fn is_running(&self) -> bool {
        self.started && !self.cancelled && !self.completed
    }

    fn output(&self, reason: ReasonCode) -> BootOutput {
        BootOutput::new(self.progress, self.phase, reason)
    }

    /// Get current phase
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Get current progress percentage
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Has cancel() been called before completion?
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Has the sequencer completed (or skipped) the boot?
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Get effective tick count
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Access the session store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the session store back, e.g. to carry it into a later boot
    /// within the same session
    pub fn into_store(self) -> S {
        self.store
    }

    /// Current output without advancing
    pub fn current_output(&self) -> BootOutput {
        self.output(match self.phase {
            BootPhase::Priming => ReasonCode::B002_PROGRESS_ADVANCING,
            BootPhase::Ready => ReasonCode::B003_BOOT_SETTLED,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
