use std::io::Cursor;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::audio::{error::AudioError, traits::PlaybackControl};

pub struct PlaybackEngine {
    _stream: OutputStream,
    sink: Sink,
}

impl PlaybackEngine {
    pub fn new() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::DeviceError(e.to_string()))?;
        // rodio reports the drop on stderr, which the TUI owns
        stream.log_on_drop(false);
        let sink = Sink::connect_new(stream.mixer());

        Ok(Self {
            _stream: stream,
            sink,
        })
    }
}

impl PlaybackControl for PlaybackEngine {
    fn load(&self, bytes: Vec<u8>) -> Result<Option<Duration>, AudioError> {
        let source =
            Decoder::new(Cursor::new(bytes)).map_err(|e| AudioError::DecodingError(e.to_string()))?;
        let total = source.total_duration();

        self.sink.clear();
        self.sink.append(source);
        self.sink.pause();

        Ok(total)
    }

    fn play(&self) {
        self.sink.play();
    }

    fn pause(&self) {
        self.sink.pause();
    }

    fn stop(&self) {
        self.sink.clear();
    }

    fn seek(&self, position: Duration) -> Result<(), AudioError> {
        self.sink
            .try_seek(position)
            .map_err(|e| AudioError::SeekError(e.to_string()))
    }

    fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume);
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}
