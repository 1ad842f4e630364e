use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{List, ListItem, Paragraph, Widget},
};

use crate::{catalog::Tab, util::colors};

const KEY_HINTS: [&str; 4] = ["/ search", "tab switch", "space play", "q quit"];

/// Brand, tab navigation and key hints on the left edge of wide layouts.
pub struct Sidebar {
    active_tab: Tab,
    song_count: usize,
}

impl Sidebar {
    pub fn new(active_tab: Tab, song_count: usize) -> Self {
        Self {
            active_tab,
            song_count,
        }
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [brand_area, tabs_area, hints_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(KEY_HINTS.len() as u16),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![
            " 󰝚 ".fg(colors::PRIMARY),
            env!("CARGO_PKG_NAME").fg(colors::PRIMARY).bold(),
        ]))
        .render(brand_area, buf);

        let items: Vec<ListItem> = Tab::ALL
            .iter()
            .map(|tab| {
                let style = if *tab == self.active_tab {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::SECONDARY)
                };
                ListItem::new(format!("  {}", tab.title())).style(style)
            })
            .chain(std::iter::once(
                ListItem::new(format!("  {} songs", self.song_count)).fg(colors::NEUTRAL),
            ))
            .collect();
        List::new(items).render(tabs_area, buf);

        let hints: Vec<Line> = KEY_HINTS
            .iter()
            .map(|hint| Line::from(format!(" {hint}")).fg(colors::NEUTRAL))
            .collect();
        Paragraph::new(hints).render(hints_area, buf);
    }
}
