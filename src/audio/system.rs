use std::sync::Arc;
use std::time::Duration;

use flume::Sender;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::{
    audio::{progress::TrackProgress, state::PlaybackState, traits::PlaybackControl},
    catalog::Song,
    config::AudioConfig,
    event::events::Event,
    http::ApiService,
};

/// Owns the output sink and the playback state, and keeps them in sync.
///
/// Track audio is downloaded in a background task that reports back with
/// [`Event::TrackFetched`]; results from superseded selections are dropped
/// by comparing generations.
pub struct AudioSystem {
    engine: Box<dyn PlaybackControl>,
    state: PlaybackState,
    track_progress: TrackProgress,
    event_tx: Sender<Event>,
    api: Arc<ApiService>,

    generation: u64,
    is_loaded: bool,
    is_suspended: bool,
    fetch_task: Option<JoinHandle<()>>,

    volume: f32,
    is_muted: bool,
    volume_step: f32,
    seek_step: Duration,
}

impl AudioSystem {
    pub fn new(
        engine: Box<dyn PlaybackControl>,
        event_tx: Sender<Event>,
        api: Arc<ApiService>,
        config: &AudioConfig,
    ) -> Self {
        let system = Self {
            engine,
            state: PlaybackState::Idle,
            track_progress: TrackProgress::new(),
            event_tx,
            api,
            generation: 0,
            is_loaded: false,
            is_suspended: false,
            fetch_task: None,
            volume: config.volume.clamp(0.0, 1.0),
            is_muted: false,
            volume_step: config.volume_step,
            seek_step: Duration::from_secs(config.seek_step_secs),
        };

        system.apply_volume();
        system
    }

    /// Makes `song` current. Always lands paused.
    pub fn select(&mut self, song: &Song) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }

        self.generation += 1;
        self.engine.stop();
        self.is_loaded = false;
        self.track_progress.reset();
        if let Some(total) = song
            .duration_seconds
            .and_then(|s| Duration::try_from_secs_f64(s).ok())
        {
            self.track_progress.set_total_duration(total);
        }
        self.state.select(song.index);
        debug!("Selected \"{}\" ({})", song.name, song.index);

        let generation = self.generation;
        let api = self.api.clone();
        let event_tx = self.event_tx.clone();
        let url = song.url.clone();

        self.fetch_task = Some(tokio::spawn(async move {
            match api.fetch_audio(&url).await {
                Ok(bytes) => {
                    let _ = event_tx.send(Event::TrackFetched { generation, bytes });
                }
                Err(e) => {
                    let _ = event_tx.send(Event::TrackFetchFailed {
                        generation,
                        error: e.to_string(),
                    });
                }
            }
        }));
    }

    /// Hands downloaded audio to the sink. Returns false for stale downloads.
    pub fn on_track_fetched(&mut self, generation: u64, bytes: Vec<u8>) -> bool {
        if generation != self.generation || self.state.current().is_none() {
            return false;
        }
        self.fetch_task = None;

        match self.engine.load(bytes) {
            Ok(total) => {
                if let Some(total) = total {
                    self.track_progress.set_total_duration(total);
                }
                self.is_loaded = true;
                self.apply_volume();
                self.sync_output();
                info!("Track {:?} ready", self.state.current());
                true
            }
            Err(e) => {
                error!("Failed to decode track: {e}");
                self.state.pause();
                false
            }
        }
    }

    pub fn on_track_fetch_failed(&mut self, generation: u64, error: &str) {
        if generation != self.generation {
            return;
        }
        self.fetch_task = None;
        error!("Failed to load track: {error}");
        self.state.pause();
    }

    /// Play/pause; ignored while nothing is selected.
    pub fn play_pause(&mut self) {
        if self.state.toggle() {
            debug!("Playback state: {:?}", self.state);
            self.sync_output();
        }
    }

    /// Samples the sink. Emits [`Event::TrackEnded`] once the current track drains.
    pub fn poll(&mut self) {
        if !self.is_loaded {
            return;
        }

        self.track_progress
            .set_current_position(self.engine.position());

        if self.state.is_playing() && !self.is_suspended && self.engine.is_finished() {
            self.state.pause();
            let _ = self.event_tx.send(Event::TrackEnded);
        }
    }

    /// Output pauses while the terminal is unfocused; the state is untouched.
    pub fn suspend(&mut self) {
        self.is_suspended = true;
        if self.is_loaded {
            self.engine.pause();
        }
    }

    /// Resumes output only if playback was active before [`Self::suspend`].
    pub fn resume(&mut self) {
        self.is_suspended = false;
        self.sync_output();
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
        self.generation += 1;
        self.engine.stop();
        self.is_loaded = false;
        self.track_progress.reset();
        self.state = PlaybackState::Idle;
    }

    pub fn seek_to(&mut self, seconds: f64) {
        if !self.is_loaded || !seconds.is_finite() {
            return;
        }

        let total = self.track_progress.total_secs();
        let target = if total > 0.0 {
            seconds.clamp(0.0, total)
        } else {
            seconds.max(0.0)
        };
        let position = Duration::from_secs_f64(target);

        match self.engine.seek(position) {
            Ok(()) => self.track_progress.set_current_position(position),
            Err(e) => warn!("{e}"),
        }
    }

    /// Seeks to a fraction of the track, as when clicking the seek bar.
    pub fn seek_to_ratio(&mut self, ratio: f64) {
        let total = self.track_progress.total_secs();
        if total > 0.0 {
            self.seek_to(ratio.clamp(0.0, 1.0) * total);
        }
    }

    pub fn seek_forwards(&mut self) {
        let target = self.track_progress.current_secs() + self.seek_step.as_secs_f64();
        self.seek_to(target);
    }

    pub fn seek_backwards(&mut self) {
        let target = self.track_progress.current_secs() - self.seek_step.as_secs_f64();
        self.seek_to(target.max(0.0));
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.is_muted = false;
        self.apply_volume();
    }

    pub fn volume_up(&mut self) {
        self.set_volume(self.volume + self.volume_step);
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.volume - self.volume_step);
    }

    pub fn toggle_mute(&mut self) {
        self.is_muted = !self.is_muted;
        self.apply_volume();
    }

    fn apply_volume(&self) {
        let volume = if self.is_muted { 0.0 } else { self.volume };
        self.engine.set_volume(volume);
    }

    fn sync_output(&self) {
        if !self.is_loaded {
            return;
        }
        if self.state.is_playing() && !self.is_suspended {
            self.engine.play();
        } else {
            self.engine.pause();
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn track_progress(&self) -> &TrackProgress {
        &self.track_progress
    }
}
