//! Sequence Detector: rolling-window keystroke matcher
//!
//! Transitions:
//! - symbol in alphabet → window slides (capacity 4, oldest evicted)
//! - window == secret sequence → UNLOCKED (one-time, irreversible)
//! - after unlock → detector inert, all input dropped
//!
//! Unlock creates the playback resource exactly once: looping, volume 0.3,
//! autostart. Creation failure leaves the unlock valid, playback off.

use std::collections::VecDeque;

use crate::core::playback::PlaybackDevice;
use crate::types::{DetectorOutput, ReasonCode};
use crate::{ALPHABET, PLAYBACK_RESOURCE, PLAYBACK_VOLUME, SECRET_SEQUENCE, SEQUENCE_LEN};

/// Keystroke sequence detector state machine
#[derive(Debug)]
pub struct SequenceDetector<P: PlaybackDevice> {
    /// Rolling window of accepted symbols, oldest first
    window: VecDeque<char>,
    /// Has the secret sequence been matched? Monotonic.
    unlocked: bool,
    /// Observable playback flag, mirrors the resource state
    playing: bool,
    /// Playback collaborator
    playback: P,
    /// Has the playback resource been created? At most one per detector.
    resource_created: bool,
    /// Outcome of the one-time creation attempt
    playback_reason: Option<ReasonCode>,
    /// Number of observe calls
    observe_count: u64,
}

impl<P: PlaybackDevice> SequenceDetector<P> {
    /// Create new detector around a playback collaborator
    pub fn new(playback: P) -> Self {
        Self {
            window: VecDeque::with_capacity(SEQUENCE_LEN),
            unlocked: false,
            playing: false,
            playback,
            resource_created: false,
            playback_reason: None,
            observe_count: 0,
        }
    }

    /// Observe one raw key symbol, return output with window and unlock state
    pub fn observe(&mut self, raw: char) -> DetectorOutput {
        self.observe_count += 1;
        let symbol = raw.to_ascii_lowercase();

        // Inert once unlocked: no buffer mutation, no side effects
        if self.unlocked {
            return self.output(Some(symbol), ReasonCode::K002_DETECTOR_INERT);
        }

        // Non-alphabet symbols never touch the window
        if !ALPHABET.contains(&symbol) {
            return self.output(Some(symbol), ReasonCode::K001_SYMBOL_IGNORED);
        }

        self.window.push_back(symbol);
        while self.window.len() > SEQUENCE_LEN {
            self.window.pop_front();
        }

        // Fresh positional comparison of the full window each keystroke
        if self.window.len() == SEQUENCE_LEN
            && self.window.iter().eq(SECRET_SEQUENCE.iter())
        {
            self.unlocked = true;
            self.create_playback();
            return self.output(Some(symbol), ReasonCode::K003_SEQUENCE_MATCHED);
        }

        self.output(Some(symbol), ReasonCode::K001_SYMBOL_ACCEPTED)
    }

    /// One-time guarded playback creation
    fn create_playback(&mut self) {
        if self.resource_created {
            return;
        }

        match self.playback.create(PLAYBACK_RESOURCE) {
            Ok(()) => {
                self.resource_created = true;
                self.playback.set_looping(true);
                self.playback.set_volume(PLAYBACK_VOLUME);
                self.playback.play();
                self.playing = self.playback.is_playing();
                self.playback_reason = Some(ReasonCode::K004_PLAYBACK_STARTED);
            }
            Err(_) => {
                // Unlock stands regardless of audio availability
                self.playback_reason = Some(ReasonCode::K004_PLAYBACK_UNAVAILABLE);
            }
        }
    }

    /// Flip play/pause on the existing resource; no-op before unlock
    /// or when no resource was created
    pub fn toggle_playback(&mut self) -> DetectorOutput {
        if !self.unlocked || !self.resource_created {
            return self.output(None, ReasonCode::K005_TOGGLE_IGNORED);
        }

        if self.playing {
            self.playback.pause();
            self.playing = self.playback.is_playing();
            self.output(None, ReasonCode::K005_PLAYBACK_PAUSED)
        } else {
            self.playback.play();
            self.playing = self.playback.is_playing();
            self.output(None, ReasonCode::K005_PLAYBACK_RESUMED)
        }
    }

    fn output(&self, symbol: Option<char>, reason: ReasonCode) -> DetectorOutput {
        DetectorOutput::new(
            symbol,
            self.window_string(),
            self.unlocked,
            self.playing,
            reason,
        )
    }

    /// Window contents as a string, oldest first
    pub fn window_string(&self) -> String {
        self.window.iter().collect()
    }

    /// Has the secret sequence been matched?
    pub fn unlocked(&self) -> bool {
        self.unlocked
    }

    /// Is the achievement notification visible? Persists once shown.
    pub fn achievement_visible(&self) -> bool {
        self.unlocked
    }

    /// Is playback currently active?
    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Outcome of the one-time playback creation, if it happened
    pub fn playback_reason(&self) -> Option<ReasonCode> {
        self.playback_reason
    }

    /// Get observe call count
    pub fn observe_count(&self) -> u64 {
        self.observe_count
    }

    /// Current output without observing
    pub fn current_output(&self) -> DetectorOutput {
        self.output(
            None,
            if self.unlocked {
                ReasonCode::K003_SEQUENCE_MATCHED
            } else {
                ReasonCode::K001_SYMBOL_ACCEPTED
            },
        )
    }
}

impl<P: PlaybackDevice> Drop for SequenceDetector<P> {
    fn drop(&mut self) {
        // No dangling playback after disposal
        if self.resource_created {
            self.playback.stop();
            self.playing = false;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
