use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::audio::{error::AudioError, traits::PlaybackControl};

/// Output that records what it was asked to do.
#[derive(Default)]
pub struct FakeSink {
    pub loads: Cell<usize>,
    pub stops: Cell<usize>,
    pub playing: Cell<bool>,
    pub finished: Cell<bool>,
    pub fail_decode: Cell<bool>,
    pub total: Cell<Option<Duration>>,
    pub position: Cell<Duration>,
    pub volume: Cell<f32>,
}

pub struct FakeEngine(pub Rc<FakeSink>);

impl PlaybackControl for FakeEngine {
    fn load(&self, _bytes: Vec<u8>) -> Result<Option<Duration>, AudioError> {
        if self.0.fail_decode.get() {
            return Err(AudioError::DecodingError("bad data".into()));
        }
        self.0.loads.set(self.0.loads.get() + 1);
        self.0.playing.set(false);
        self.0.finished.set(false);
        Ok(self.0.total.get())
    }

    fn play(&self) {
        self.0.playing.set(true);
    }

    fn pause(&self) {
        self.0.playing.set(false);
    }

    fn stop(&self) {
        self.0.stops.set(self.0.stops.get() + 1);
        self.0.playing.set(false);
    }

    fn seek(&self, position: Duration) -> Result<(), AudioError> {
        self.0.position.set(position);
        Ok(())
    }

    fn set_volume(&self, volume: f32) {
        self.0.volume.set(volume);
    }

    fn position(&self) -> Duration {
        self.0.position.get()
    }

    fn is_finished(&self) -> bool {
        self.0.finished.get()
    }
}
