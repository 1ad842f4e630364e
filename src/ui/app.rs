use std::sync::Arc;
use std::time::Duration;

use flume::Receiver;
use ratatui::Frame;
use tracing::{error, info};

use crate::{
    audio::{
        playback::PlaybackEngine,
        probe::HttpDurationProbe,
        state::{next_in_view, previous_in_view},
        system::AudioSystem,
        traits::PlaybackControl,
    },
    catalog::{CatalogBuilder, Tab},
    config::Config,
    event::events::Event,
    http::ApiService,
    util::task::TaskManager,
};

use super::{
    context::AppContext,
    layout::AppLayout,
    message::AppMessage,
    state::{AppState, CatalogLoad},
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
    views::{MusicDisplay, MusicList},
};

pub struct App {
    pub ctx: AppContext,
    pub state: AppState,
    pub event_rx: Receiver<Event>,
    pub task_manager: TaskManager,
    pub list: MusicList,
    pub display: MusicDisplay,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let engine = PlaybackEngine::new()?;
        Self::with_engine(config, Box::new(engine))
    }

    /// Builds the app around any output, e.g. one without an audio device.
    pub fn with_engine(
        config: Config,
        engine: Box<dyn PlaybackControl>,
    ) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let api = Arc::new(ApiService::new(&config.api)?);
        let audio_system = AudioSystem::new(
            engine,
            event_tx.clone(),
            api.clone(),
            &config.audio,
        );

        Ok(Self {
            ctx: AppContext {
                api,
                audio_system,
                event_tx,
                config,
            },
            state: AppState::default(),
            event_rx,
            task_manager: TaskManager::new(),
            list: MusicList::default(),
            display: MusicDisplay::default(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.mouse(true).focus(true);
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        let mut should_render = true;
        while !self.should_quit {
            if should_render {
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }

            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        self.ctx.audio_system.stop();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        let area = frame.area();
        AppLayout::new(self).render(frame, area);
    }

    pub fn update(&mut self, msg: AppMessage) {
        let audio = &mut self.ctx.audio_system;
        match msg {
            AppMessage::TogglePlayPause => audio.play_pause(),
            AppMessage::NextTrack => self.next(),
            AppMessage::PreviousTrack => self.previous(),
            AppMessage::VolumeUp => audio.volume_up(),
            AppMessage::VolumeDown => audio.volume_down(),
            AppMessage::ToggleMute => audio.toggle_mute(),
            AppMessage::SeekForward => audio.seek_forwards(),
            AppMessage::SeekBackward => audio.seek_backwards(),
            AppMessage::NextTab => self.state.ui.active_tab = self.state.ui.active_tab.next(),
            AppMessage::PreviousTab => self.state.ui.active_tab = self.state.ui.active_tab.prev(),
            AppMessage::SetTab(position) => self.state.ui.active_tab = Tab::from_position(position),
            AppMessage::ToggleMenu => self.state.ui.menu_open = !self.state.ui.menu_open,
            AppMessage::Quit => self.should_quit = true,
        }
    }

    /// Makes the catalog entry `index` current, starting it when autoplay is on.
    pub fn select_song(&mut self, index: usize) {
        let Some(song) = self.state.data.song(index) else {
            return;
        };

        self.ctx.audio_system.select(song);
        if self.ctx.config.playback.autoplay {
            self.ctx.audio_system.play_pause();
        }
    }

    pub fn next(&mut self) {
        let view = self.state.visible_indices();
        if let Some(index) = next_in_view(&view, self.ctx.audio_system.current_index()) {
            self.select_song(index);
        }
    }

    pub fn previous(&mut self) {
        let view = self.state.visible_indices();
        if let Some(index) = previous_in_view(&view, self.ctx.audio_system.current_index()) {
            self.select_song(index);
        }
    }

    /// Fetches the catalog and probes every entry in the background.
    pub fn start_catalog_load(&mut self) {
        self.state.data.load = CatalogLoad::Fetching;

        let api = self.ctx.api.clone();
        let tx = self.ctx.event_tx.clone();
        let probe_config = self.ctx.config.probe.clone();

        self.task_manager.spawn(
            "catalog",
            tokio::spawn(async move {
                let records = api.fetch_songs().await;
                info!("Fetched {} song records", records.len());

                let probe = HttpDurationProbe::new(
                    api.clone(),
                    Duration::from_secs(probe_config.timeout_secs),
                );
                let builder = CatalogBuilder::new(&probe, api.asset_base())
                    .on_failure(probe_config.on_failure);

                let progress_tx = tx.clone();
                let songs = match builder
                    .build(records, |progress| {
                        let _ = progress_tx.send(Event::CatalogProgress(progress));
                    })
                    .await
                {
                    Ok(songs) => songs,
                    Err(e) => {
                        error!("Failed to build catalog: {e}");
                        Vec::new()
                    }
                };

                let _ = tx.send(Event::CatalogLoaded(songs));
            }),
        );
    }
}
