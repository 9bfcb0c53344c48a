//! Integration tests for the sequence detector
//!
//! Tests the full path: raw key stream → SequenceDetector → output

use pretty_assertions::assert_eq;

use keygate::core::{PlaybackDevice, PlaybackError, SequenceDetector, SilentPlayback};
use keygate::types::ReasonCode;
use keygate::{ALPHABET, SECRET_SEQUENCE, SEQUENCE_LEN};

/// Playback device that refuses to create its resource
#[derive(Debug, Default)]
struct UnavailablePlayback;

impl PlaybackDevice for UnavailablePlayback {
    fn create(&mut self, _resource: &str) -> Result<(), PlaybackError> {
        Err(PlaybackError::new("media unavailable"))
    }

    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn stop(&mut self) {}
    fn set_looping(&mut self, _looping: bool) {}
    fn set_volume(&mut self, _volume: f32) {}

    fn is_playing(&self) -> bool {
        false
    }
}

fn detector() -> SequenceDetector<SilentPlayback> {
    SequenceDetector::new(SilentPlayback::new())
}

/// The constants agree: target drawn from the alphabet, window sized to it
#[test]
fn test_sequence_constants_consistent() {
    assert_eq!(SEQUENCE_LEN, SECRET_SEQUENCE.len());
    for symbol in SECRET_SEQUENCE {
        assert!(ALPHABET.contains(&symbol));
    }
}

/// Straight-through unlock on the exact sequence
#[test]
fn test_direct_unlock() {
    let mut det = detector();

    let mut outputs = Vec::new();
    for c in "xaby".chars() {
        outputs.push(det.observe(c));
    }

    assert!(!outputs[0].unlocked);
    assert!(!outputs[1].unlocked);
    assert!(!outputs[2].unlocked);
    assert!(outputs[3].unlocked);
    assert_eq!(outputs[3].reason, ReasonCode::K003_SEQUENCE_MATCHED);
    assert!(outputs[3].playing);
}

/// Unlock happens exactly when the trailing window matches, not earlier
#[test]
fn test_unlock_on_sixth_symbol() {
    let mut det = detector();

    // a,b,x,a,b,y → trailing window equals the target only at the 6th symbol
    let stream: Vec<char> = "abxaby".chars().collect();
    for (i, &c) in stream.iter().enumerate() {
        let output = det.observe(c);
        if i < 5 {
            assert!(!output.unlocked, "unlocked early at symbol {}", i + 1);
        } else {
            assert!(output.unlocked);
        }
    }
}

/// Noisy stream with overwritten partial matches
#[test]
fn test_partial_match_overwritten() {
    let mut det = detector();

    for c in "xbabxab".chars() {
        assert!(!det.observe(c).unlocked);
    }
    // Window here is [x,a,b] plus the evicted history; the final y completes it
    let output = det.observe('y');
    assert!(output.unlocked);
    assert_eq!(output.window, "xaby");
}

/// Mixed case and junk characters across the stream
#[test]
fn test_normalization_and_noise() {
    let mut det = detector();

    for c in "Qx!A 9b#".chars() {
        det.observe(c);
    }
    assert_eq!(det.window_string(), "xab");

    let output = det.observe('Y');
    assert!(output.unlocked);
}

/// Unlock is monotonic: no later input reverts or re-triggers it
#[test]
fn test_unlock_monotonic() {
    let mut det = detector();
    for c in "xaby".chars() {
        det.observe(c);
    }
    let count_after_unlock = det.observe_count();

    for c in "xabyxabyqqqq".chars() {
        let output = det.observe(c);
        assert!(output.unlocked);
        assert_eq!(output.reason, ReasonCode::K002_DETECTOR_INERT);
        assert_eq!(output.window, "xaby");
    }
    assert_eq!(det.observe_count(), count_after_unlock + 12);
}

/// Playback failure leaves the unlock and achievement intact
#[test]
fn test_unlock_survives_playback_failure() {
    let mut det = SequenceDetector::new(UnavailablePlayback);

    for c in "xaby".chars() {
        det.observe(c);
    }

    assert!(det.unlocked());
    assert!(det.achievement_visible());
    assert!(!det.playing());
    assert_eq!(det.playback_reason(), Some(ReasonCode::K004_PLAYBACK_UNAVAILABLE));

    // And toggling has nothing to act on
    let output = det.toggle_playback();
    assert_eq!(output.reason, ReasonCode::K005_TOGGLE_IGNORED);
    assert!(!output.playing);
}

/// Toggle alternates play/pause starting from playing
#[test]
fn test_toggle_cycle() {
    let mut det = detector();
    for c in "xaby".chars() {
        det.observe(c);
    }
    assert!(det.playing());

    assert!(!det.toggle_playback().playing);
    assert!(det.toggle_playback().playing);
    assert!(!det.toggle_playback().playing);
}

/// Detector output serializes and deserializes
#[test]
fn test_json_output_valid() {
    let mut det = detector();
    let output = det.observe('x');

    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"window\""));
    assert!(json.contains("\"unlocked\""));
    assert!(json.contains("\"reason\""));

    let _: keygate::types::DetectorOutput = serde_json::from_str(&json).unwrap();
}

/// Parseable output format carries the observable fields
#[test]
fn test_parseable_output_format() {
    let mut det = detector();
    let output = det.observe('x');

    let formatted = output.to_parseable_string();
    assert!(formatted.contains("window="));
    assert!(formatted.contains("unlocked="));
    assert!(formatted.contains("playing="));
    assert!(formatted.contains("reason="));
}
