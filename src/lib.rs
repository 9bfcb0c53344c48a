//! Keygate: keystroke-sequence unlock detector and boot sequencer
//!
//! Two independent state machines composed by the CLI shell:
//! key events → SequenceDetector → unlock/playback, and
//! timer ticks → BootSequencer → content reveal.

pub mod core;
pub mod types;

// =============================================================================
// SEQUENCE DETECTOR CONSTANTS [C]
// =============================================================================

/// Recognized input symbols (everything else is ignored)
pub const ALPHABET: [char; 4] = ['x', 'a', 'b', 'y'];

/// The unlock sequence, in order
pub const SECRET_SEQUENCE: [char; 4] = ['x', 'a', 'b', 'y'];

/// Window capacity = length of the unlock sequence
pub const SEQUENCE_LEN: usize = SECRET_SEQUENCE.len();

/// Playback resource created on unlock
pub const PLAYBACK_RESOURCE: &str = "audio/corridors_of_time.mp3";

/// Playback volume on creation (0.0-1.0)
pub const PLAYBACK_VOLUME: f32 = 0.3;

// =============================================================================
// BOOT SEQUENCER CONSTANTS [C]
// =============================================================================

/// Progress added per timer tick
pub const PROGRESS_STEP: u8 = 2;

/// Timer tick cadence (milliseconds)
pub const PROGRESS_TICK_MS: u64 = 20;

/// Delay between full progress and the completion callback (milliseconds)
pub const SETTLE_DELAY_MS: u64 = 500;

/// Session-store key for the visited flag
pub const VISITED_KEY: &str = "hasVisited";

/// Session-store value marking a completed boot
pub const VISITED_VALUE: &str = "true";

/// Ticks needed to go from 0 to 100 at PROGRESS_STEP per tick
pub const TICKS_TO_FULL: u64 = 100 / PROGRESS_STEP as u64;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
