//! Boot phase definitions

use serde::{Deserialize, Serialize};

/// The two phases of the boot sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BootPhase {
    /// First visit this session: progress animation running
    Priming,
    /// Boot complete (or skipped), full content visible
    Ready,
}

impl BootPhase {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            BootPhase::Priming => "\x1b[90m", // Gray
            BootPhase::Ready => "\x1b[32m",   // Green
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for phase
    pub fn emoji(&self) -> &'static str {
        match self {
            BootPhase::Priming => "⏳",
            BootPhase::Ready => "✨",
        }
    }
}

impl std::fmt::Display for BootPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BootPhase::Priming => "PRIMING",
            BootPhase::Ready => "READY",
        };
        write!(f, "{}", name)
    }
}
