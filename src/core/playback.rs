//! Playback device seam
//!
//! The detector treats audio as an opaque collaborator: one resource,
//! created lazily on unlock, looping, stopped on disposal. Implementations
//! own at most one resource at a time.

/// Error from playback resource creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackError {
    message: String,
}

impl PlaybackError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "playback error: {}", self.message)
    }
}

impl std::error::Error for PlaybackError {}

/// Opaque playback collaborator
pub trait PlaybackDevice {
    /// Create the playback resource. Called at most once per detector.
    fn create(&mut self, resource: &str) -> Result<(), PlaybackError>;

    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback, keeping position
    fn pause(&mut self);

    /// Halt playback and reset position to the start
    fn stop(&mut self);

    /// Enable or disable looping
    fn set_looping(&mut self, looping: bool);

    /// Set volume in [0.0, 1.0]
    fn set_volume(&mut self, volume: f32);

    /// Is the resource currently playing?
    fn is_playing(&self) -> bool;
}

/// Terminal stand-in: tracks resource state without emitting sound
#[derive(Debug, Default)]
pub struct SilentPlayback {
    resource: Option<String>,
    playing: bool,
    looping: bool,
    volume: f32,
}

impl SilentPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource path, if created
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }
}

impl PlaybackDevice for SilentPlayback {
    fn create(&mut self, resource: &str) -> Result<(), PlaybackError> {
        self.resource = Some(resource.to_string());
        Ok(())
    }

    fn play(&mut self) {
        if self.resource.is_some() {
            self.playing = true;
        }
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn stop(&mut self) {
        self.playing = false;
    }

    fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_playback_lifecycle() {
        let mut device = SilentPlayback::new();
        assert!(!device.is_playing());

        device.create("audio/test.mp3").unwrap();
        assert_eq!(device.resource(), Some("audio/test.mp3"));

        device.set_looping(true);
        device.set_volume(0.3);
        device.play();

        assert!(device.is_playing());
        assert!(device.looping());
        assert!((device.volume() - 0.3).abs() < f32::EPSILON);

        device.pause();
        assert!(!device.is_playing());

        device.play();
        device.stop();
        assert!(!device.is_playing());
    }

    #[test]
    fn test_play_without_resource_is_noop() {
        let mut device = SilentPlayback::new();
        device.play();
        assert!(!device.is_playing());
    }
}
