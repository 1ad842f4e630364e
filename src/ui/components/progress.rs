use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::ToSpan,
    widgets::{Block, Borders, Widget},
};

use crate::{
    audio::progress::TrackProgress, ui::components::gauge::SeekGauge, util::colors,
    util::time::format_time,
};

/// Seek bar for the current track, labelled `current / total`.
pub struct SeekBar<'a> {
    progress: &'a TrackProgress,
    is_playing: bool,
}

impl<'a> SeekBar<'a> {
    pub fn new(progress: &'a TrackProgress, is_playing: bool) -> Self {
        Self {
            progress,
            is_playing,
        }
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL))
    }

    /// The clickable part of the bar when rendered into `area`.
    pub fn track_area(area: Rect) -> Rect {
        Self::block().inner(area)
    }
}

impl Widget for SeekBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = format!(
            "{} / {}",
            format_time(self.progress.current_secs()),
            format_time(self.progress.total_secs())
        );
        let status = if self.is_playing { "playing" } else { "paused" };

        SeekGauge::default()
            .block(
                Self::block()
                    .title_bottom(status.fg(colors::MUTED))
                    .title_alignment(Alignment::Center),
            )
            .ratio(self.progress.ratio())
            .label(label.to_span().fg(colors::PRIMARY))
            .filled_style(Style::default().fg(colors::PRIMARY).bg(colors::HIGHLIGHT))
            .empty_style(Style::default().fg(colors::HIGHLIGHT).bg(colors::HIGHLIGHT))
            .render(area, buf);
    }
}
