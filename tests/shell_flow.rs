//! Integration tests composing both state machines the way the shell does:
//! boot to READY, then drive the key stream to the unlock.

use pretty_assertions::assert_eq;

use keygate::core::{BootSequencer, MemoryStore, SequenceDetector, SilentPlayback};
use keygate::types::{BootPhase, ReasonCode};

/// First session end-to-end: prime, settle, unlock, toggle, dispose
#[test]
fn test_first_session_flow() {
    let mut sequencer = BootSequencer::new(MemoryStore::new());
    sequencer.start();
    while sequencer.progress() < 100 {
        sequencer.tick();
    }
    let boot = sequencer.settle();
    assert_eq!(boot.phase, BootPhase::Ready);

    // Content revealed, key stream begins
    let mut detector = SequenceDetector::new(SilentPlayback::new());
    for c in "hello xaby".chars() {
        detector.observe(c);
    }

    assert!(detector.unlocked());
    assert!(detector.playing());

    let output = detector.toggle_playback();
    assert_eq!(output.reason, ReasonCode::K005_PLAYBACK_PAUSED);

    drop(detector);
}

/// The two machines are independent: a cancelled boot does not gate the
/// detector, and an unlock does not touch the boot store
#[test]
fn test_components_independent() {
    let mut sequencer = BootSequencer::new(MemoryStore::new());
    sequencer.start();
    sequencer.cancel();

    let mut detector = SequenceDetector::new(SilentPlayback::new());
    for c in "xaby".chars() {
        detector.observe(c);
    }

    assert!(detector.unlocked());
    assert_eq!(sequencer.phase(), BootPhase::Priming);
    assert!(sequencer.store().is_empty());
}

/// Revisit flow: settled store carried forward, priming skipped, detector
/// starts fresh (unlock is per-detector, not persisted)
#[test]
fn test_revisit_session_flow() {
    let mut first = BootSequencer::new(MemoryStore::new());
    first.start();
    while first.progress() < 100 {
        first.tick();
    }
    first.settle();

    let mut second = BootSequencer::new(first.into_store());
    assert_eq!(second.start().reason, ReasonCode::B001_PRIMING_SKIPPED);

    let detector: SequenceDetector<SilentPlayback> =
        SequenceDetector::new(SilentPlayback::new());
    assert!(!detector.unlocked());
}
