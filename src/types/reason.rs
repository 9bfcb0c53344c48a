//! Reason codes for detector and boot state changes

use serde::{Deserialize, Serialize};

/// Reason codes for all observable transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // K001: Symbol intake
    // =========================================================================
    /// Symbol accepted into the rolling window
    K001_SYMBOL_ACCEPTED,
    /// Symbol outside the alphabet, window untouched
    K001_SYMBOL_IGNORED,

    // =========================================================================
    // K002: Detector lifecycle
    // =========================================================================
    /// Detector already unlocked, input dropped
    K002_DETECTOR_INERT,

    // =========================================================================
    // K003: Unlock
    // =========================================================================
    /// Window matched the secret sequence, unlock transition
    K003_SEQUENCE_MATCHED,

    // =========================================================================
    // K004: Playback creation
    // =========================================================================
    /// Playback resource created and autostarted
    K004_PLAYBACK_STARTED,
    /// Playback resource could not be created, unlock unaffected
    K004_PLAYBACK_UNAVAILABLE,

    // =========================================================================
    // K005: Playback toggle
    // =========================================================================
    /// Toggle resumed playback
    K005_PLAYBACK_RESUMED,
    /// Toggle paused playback
    K005_PLAYBACK_PAUSED,
    /// Toggle before unlock or before resource exists, no-op
    K005_TOGGLE_IGNORED,

    // =========================================================================
    // B001: Boot start
    // =========================================================================
    /// First boot this session, priming started
    B001_PRIMING_STARTED,
    /// Visited flag set, priming skipped entirely
    B001_PRIMING_SKIPPED,

    // =========================================================================
    // B002: Progress
    // =========================================================================
    /// Progress advancing toward 100
    B002_PROGRESS_ADVANCING,
    /// Progress reached 100, timer halted
    B002_PROGRESS_COMPLETE,

    // =========================================================================
    // B003: Completion
    // =========================================================================
    /// Settle delay elapsed: visited flag set, phase READY
    B003_BOOT_SETTLED,

    // =========================================================================
    // B004: Cancellation
    // =========================================================================
    /// Sequencer cancelled, no further ticks or completion
    B004_CANCELLED,
    /// Tick or settle after cancel/completion, structurally ignored
    B004_TICK_IGNORED,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::K001_SYMBOL_ACCEPTED => "K001_SYMBOL_ACCEPTED",
            Self::K001_SYMBOL_IGNORED => "K001_SYMBOL_IGNORED",
            Self::K002_DETECTOR_INERT => "K002_DETECTOR_INERT",
            Self::K003_SEQUENCE_MATCHED => "K003_SEQUENCE_MATCHED",
            Self::K004_PLAYBACK_STARTED => "K004_PLAYBACK_STARTED",
            Self::K004_PLAYBACK_UNAVAILABLE => "K004_PLAYBACK_UNAVAILABLE",
            Self::K005_PLAYBACK_RESUMED => "K005_PLAYBACK_RESUMED",
            Self::K005_PLAYBACK_PAUSED => "K005_PLAYBACK_PAUSED",
            Self::K005_TOGGLE_IGNORED => "K005_TOGGLE_IGNORED",
            Self::B001_PRIMING_STARTED => "B001_PRIMING_STARTED",
            Self::B001_PRIMING_SKIPPED => "B001_PRIMING_SKIPPED",
            Self::B002_PROGRESS_ADVANCING => "B002_PROGRESS_ADVANCING",
            Self::B002_PROGRESS_COMPLETE => "B002_PROGRESS_COMPLETE",
            Self::B003_BOOT_SETTLED => "B003_BOOT_SETTLED",
            Self::B004_CANCELLED => "B004_CANCELLED",
            Self::B004_TICK_IGNORED => "B004_TICK_IGNORED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::K001_SYMBOL_ACCEPTED => "Symbol accepted into window",
            Self::K001_SYMBOL_IGNORED => "Symbol outside alphabet",
            Self::K002_DETECTOR_INERT => "Detector inert after unlock",
            Self::K003_SEQUENCE_MATCHED => "Secret sequence matched",
            Self::K004_PLAYBACK_STARTED => "Playback created and started",
            Self::K004_PLAYBACK_UNAVAILABLE => "Playback creation failed",
            Self::K005_PLAYBACK_RESUMED => "Playback resumed",
            Self::K005_PLAYBACK_PAUSED => "Playback paused",
            Self::K005_TOGGLE_IGNORED => "Toggle ignored, nothing to play",
            Self::B001_PRIMING_STARTED => "Priming animation started",
            Self::B001_PRIMING_SKIPPED => "Already visited, priming skipped",
            Self::B002_PROGRESS_ADVANCING => "Progress advancing",
            Self::B002_PROGRESS_COMPLETE => "Progress at 100, timer halted",
            Self::B003_BOOT_SETTLED => "Boot settled, content revealed",
            Self::B004_CANCELLED => "Sequencer cancelled",
            Self::B004_TICK_IGNORED => "Tick ignored",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
