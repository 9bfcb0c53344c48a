//! Core modules for keygate

pub mod boot;
pub mod detector;
pub mod playback;
pub mod store;

pub use boot::BootSequencer;
pub use detector::SequenceDetector;
pub use playback::{PlaybackDevice, PlaybackError, SilentPlayback};
pub use store::{MemoryStore, SessionStore, StoreError};
