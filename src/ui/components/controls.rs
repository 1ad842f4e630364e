use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::util::colors;

/// Transport buttons and the volume gauge under the seek bar.
pub struct PlayerControlsWidget {
    is_playing: bool,
    has_song: bool,
    volume: f32,
    is_muted: bool,
}

impl PlayerControlsWidget {
    pub fn new(is_playing: bool, has_song: bool, volume: f32, is_muted: bool) -> Self {
        Self {
            is_playing,
            has_song,
            volume,
            is_muted,
        }
    }
}

impl Widget for PlayerControlsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fg = if self.has_song {
            colors::PRIMARY
        } else {
            colors::NEUTRAL
        };
        let play_icon = if self.is_playing { "󰏤" } else { "󰐊" };

        let mut controls_text = Line::default();
        controls_text.push_span("󰒮".fg(fg));
        controls_text.push_span("   ");
        controls_text.push_span(play_icon.fg(fg).bold());
        controls_text.push_span("   ");
        controls_text.push_span("󰒭".fg(fg));

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(13), Constraint::Length(14)])
            .split(area);

        let controls_block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL));
        let controls = Paragraph::new(controls_text)
            .block(controls_block)
            .centered();
        controls.render(layout[0], buf);

        let (ratio, label) = if self.is_muted {
            (0.0, Span::styled("󰝟 muted", Style::new().fg(colors::MUTED)))
        } else {
            let percent = (self.volume * 100.0).round() as u8;
            (self.volume as f64, Span::raw(format!("󰕾 {percent}%")))
        };

        let volume_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL));

        Gauge::default()
            .block(volume_block)
            .gauge_style(Style::new().fg(colors::SECONDARY).bg(colors::HIGHLIGHT))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(label)
            .render(layout[1], buf);
    }
}
