use crate::audio::error::AudioError;
use std::time::Duration;

/// The output side of playback. Implemented by the rodio sink and by fakes.
pub trait PlaybackControl {
    /// Replaces whatever is loaded with `bytes`, leaving output paused.
    /// Returns the decoded length when the container reports one.
    fn load(&self, bytes: Vec<u8>) -> Result<Option<Duration>, AudioError>;
    fn play(&self);
    fn pause(&self);
    fn stop(&self);
    fn seek(&self, position: Duration) -> Result<(), AudioError>;
    fn set_volume(&self, volume: f32);
    fn position(&self) -> Duration;
    /// True once the loaded source has drained.
    fn is_finished(&self) -> bool;
}
