//! Output structures for terminal display

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::types::{BootPhase, ReasonCode};

/// Output structure for each detector observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Symbol that produced this output, if any
    pub symbol: Option<char>,
    /// Current rolling window contents, oldest first
    pub window: String,
    /// Has the secret sequence been matched?
    pub unlocked: bool,
    /// Is the playback resource currently playing?
    pub playing: bool,
    /// Reason for this output
    pub reason: ReasonCode,
}

impl DetectorOutput {
    /// Create new output
    pub fn new(
        symbol: Option<char>,
        window: String,
        unlocked: bool,
        playing: bool,
        reason: ReasonCode,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            symbol,
            window,
            unlocked,
            playing,
            reason,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let (color, emoji) = if self.unlocked {
            ("\x1b[32m", "🔓")
        } else {
            ("\x1b[90m", "🔒")
        };

        format!(
            "{}{} window=[{}] | unlocked={} | playing={} | {}\x1b[0m",
            color,
            emoji,
            self.window,
            self.unlocked,
            self.playing,
            self.reason.code()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "window=[{}] | unlocked={} | playing={} | reason={}",
            self.window,
            self.unlocked,
            self.playing,
            self.reason.code()
        )
    }
}

/// Output structure for each boot sequencer step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Progress percentage, integer in [0, 100]
    pub progress: u8,
    /// Current phase
    pub phase: BootPhase,
    /// Reason for this output
    pub reason: ReasonCode,
}

impl BootOutput {
    /// Create new output
    pub fn new(progress: u8, phase: BootPhase, reason: ReasonCode) -> Self {
        Self {
            timestamp: Utc::now(),
            progress,
            phase,
            reason,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.phase.color_code();
        let reset = BootPhase::color_reset();
        let emoji = self.phase.emoji();

        format!(
            "{}{} progress={}% | phase={} | {}{}",
            color,
            emoji,
            self.progress,
            self.phase,
            self.reason.code(),
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "progress={}% | phase={} | reason={}",
            self.progress,
            self.phase,
            self.reason.code()
        )
    }
}
