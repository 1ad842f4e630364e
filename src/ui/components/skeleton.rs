use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Widget,
};

use crate::{catalog::BuildProgress, ui::components::spinner::Spinner, util::colors};

/// Placeholder rows shown while the catalog is fetched and probed.
pub struct Skeleton {
    progress: Option<BuildProgress>,
}

impl Skeleton {
    pub fn new(progress: Option<BuildProgress>) -> Self {
        Self { progress }
    }

    fn label(&self) -> String {
        match self.progress {
            Some(BuildProgress { probed, total }) => format!("Loading songs {probed}/{total}"),
            None => "Fetching songs".to_string(),
        }
    }
}

impl Widget for Skeleton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [rows_area, spinner_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let style = Style::new().fg(colors::HIGHLIGHT);
        let name_width = (rows_area.width / 2).max(1) as usize;
        let artist_width = (rows_area.width / 3).max(1) as usize;

        // two lines per row with a gap, like the real list
        for (i, y) in (rows_area.top()..rows_area.bottom()).step_by(3).enumerate() {
            let shrink = i % 3;
            buf.set_stringn(
                rows_area.x + 2,
                y,
                "▀".repeat(name_width.saturating_sub(shrink * 2)),
                rows_area.width.saturating_sub(2) as usize,
                style,
            );
            if y + 1 < rows_area.bottom() {
                buf.set_stringn(
                    rows_area.x + 2,
                    y + 1,
                    "▀".repeat(artist_width.saturating_sub(shrink)),
                    rows_area.width.saturating_sub(2) as usize,
                    style,
                );
            }
        }

        let label = self.label();
        Spinner::new()
            .with_style(Style::new().fg(colors::MUTED))
            .with_label(label)
            .render(spinner_area, buf);
    }
}
