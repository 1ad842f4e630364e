use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    ui::{
        components::{controls::PlayerControlsWidget, progress::SeekBar},
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// Detail pane for the current song with its transport controls.
#[derive(Default)]
pub struct MusicDisplay {
    seek_area: Option<Rect>,
}

impl MusicDisplay {
    /// Cells of the seek bar as last rendered.
    pub fn seek_area(&self) -> Option<Rect> {
        self.seek_area
    }

    pub fn hide(&mut self) {
        self.seek_area = None;
    }
}

impl View for MusicDisplay {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        let audio = &ctx.audio_system;
        let area = area.inner(Margin::new(2, 1));

        let Some(song) = audio.current_index().and_then(|i| state.data.song(i)) else {
            self.seek_area = None;
            let [_, placeholder, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .areas(area);
            f.render_widget(
                Paragraph::new(vec![
                    Line::from("Nothing playing").fg(colors::SECONDARY).bold(),
                    Line::from("Pick a song from the list").fg(colors::MUTED),
                ])
                .centered(),
                placeholder,
            );
            return;
        };

        let [name_area, artist_area, _, cover_area, seek_area, controls_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .areas(area);

        f.render_widget(
            Paragraph::new(song.name.as_str()).fg(colors::PRIMARY).bold(),
            name_area,
        );
        f.render_widget(
            Paragraph::new(song.artist.as_str()).fg(colors::MUTED),
            artist_area,
        );

        let cover_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL))
            .title(" cover ".fg(colors::MUTED));
        let cover_inner = cover_block.inner(cover_area);
        f.render_widget(cover_block, cover_area);

        let [_, cover_text, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(cover_inner);
        f.render_widget(
            Paragraph::new(vec![
                Line::from("󰝚").fg(colors::SECONDARY),
                Line::from(song.cover_url.as_str()).fg(colors::NEUTRAL),
            ])
            .centered()
            .wrap(Wrap { trim: true }),
            cover_text,
        );

        f.render_widget(
            SeekBar::new(audio.track_progress(), audio.is_playing()),
            seek_area,
        );
        self.seek_area = Some(SeekBar::track_area(seek_area));

        f.render_widget(
            PlayerControlsWidget::new(audio.is_playing(), true, audio.volume(), audio.is_muted()),
            controls_area,
        );
    }

    fn handle_input(
        &mut self,
        _key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        None
    }
}
