use crossterm::event::KeyCode;
use ratatui::crossterm::event::{
    KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use tracing::info;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        state::CatalogLoad,
        traits::{Action, View},
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => app.start_catalog_load(),
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                if app.ctx.config.playback.pause_on_focus_loss {
                    app.ctx.audio_system.resume();
                }
                tui.clear()?;
            }
            TerminalEvent::FocusLost => {
                app.has_focus = false;
                if app.ctx.config.playback.pause_on_focus_loss {
                    app.ctx.audio_system.suspend();
                }
            }
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Tick => {
                app.ctx.audio_system.poll();
                return Ok(app.has_focus);
            }
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::CatalogProgress(progress) => {
                app.state.data.load = CatalogLoad::Probing(progress);
            }
            Event::CatalogLoaded(songs) => {
                info!("Catalog ready with {} songs", songs.len());
                app.state.data.catalog = songs;
                app.state.data.load = CatalogLoad::Ready;
            }
            Event::TrackFetched { generation, bytes } => {
                app.ctx.audio_system.on_track_fetched(generation, bytes);
            }
            Event::TrackFetchFailed { generation, error } => {
                app.ctx.audio_system.on_track_fetch_failed(generation, &error);
            }
            Event::TrackEnded => app.next(),
        }
    }

    fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        if evt.code == KeyCode::Char('c') && evt.modifiers == KeyModifiers::CONTROL {
            app.update(AppMessage::Quit);
            return;
        }

        // the list takes keys first while it is on screen
        if app.list.is_visible() || app.list.is_editing() {
            if let Some(action) = app.list.handle_input(evt, &app.state, &app.ctx) {
                Self::dispatch_action(app, action);
                return;
            }
        }

        if let Some(msg) = InputHandler::handle_key(evt) {
            app.update(msg);
        }
    }

    fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Select(index) => {
                app.select_song(index);
                app.state.ui.menu_open = false;
            }
            Action::SearchChanged(term) => app.state.ui.search_term = term,
            Action::None => {}
        }
    }

    fn handle_mouse_event(app: &mut App, evt: MouseEvent) {
        let audio = &mut app.ctx.audio_system;
        match (evt.kind, evt.modifiers) {
            (MouseEventKind::ScrollUp, KeyModifiers::SHIFT) => audio.seek_forwards(),
            (MouseEventKind::ScrollUp, _) => audio.volume_up(),
            (MouseEventKind::ScrollDown, KeyModifiers::SHIFT) => audio.seek_backwards(),
            (MouseEventKind::ScrollDown, _) => audio.volume_down(),
            (MouseEventKind::Down(MouseButton::Left), _) => {
                if let Some(area) = app.display.seek_area() {
                    if area.contains(Position::new(evt.column, evt.row)) {
                        let offset = (evt.column - area.x) as f64;
                        audio.seek_to_ratio(offset / area.width as f64);
                        return;
                    }
                }

                if let Some(index) = app.list.song_at(evt.column, evt.row) {
                    Self::dispatch_action(app, Action::Select(index));
                }
            }
            _ => {}
        }
    }
}
