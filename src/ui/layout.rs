use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Borders},
};

use crate::{
    ui::{app::App, components::sidebar::Sidebar, traits::View},
    util::colors,
};

/// Terminals at least this wide show sidebar, list and detail side by side.
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panes {
    pub sidebar: Option<Rect>,
    pub header: Option<Rect>,
    pub list: Option<Rect>,
    pub detail: Option<Rect>,
}

impl Panes {
    pub fn split(area: Rect, menu_open: bool) -> Self {
        if area.width >= WIDE_LAYOUT_MIN_WIDTH {
            let [sidebar, list, detail] = Layout::horizontal([
                Constraint::Ratio(1, 6),
                Constraint::Ratio(2, 6),
                Constraint::Ratio(3, 6),
            ])
            .areas(area);

            return Self {
                sidebar: Some(sidebar),
                list: Some(list),
                detail: Some(detail),
                ..Self::default()
            };
        }

        let [header, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);
        Self {
            header: Some(header),
            list: menu_open.then_some(body),
            detail: (!menu_open).then_some(body),
            ..Self::default()
        }
    }
}

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let App {
            ctx,
            state,
            list,
            display,
            ..
        } = self.app;

        let current = ctx
            .audio_system
            .current_index()
            .and_then(|i| state.data.song(i));
        let accent = colors::accent_or_background(current.map(|song| song.accent.as_str()));

        f.buffer_mut()
            .set_style(area, Style::new().bg(colors::BACKGROUND));

        let panes = Panes::split(area, state.ui.menu_open);

        if let Some(sidebar_area) = panes.sidebar {
            f.render_widget(
                Sidebar::new(state.ui.active_tab, state.data.catalog.len()),
                sidebar_area,
            );
        }

        if let Some(header_area) = panes.header {
            let hint = if state.ui.menu_open {
                "b: now playing"
            } else {
                "b: songs"
            };
            let header = Block::default()
                .borders(Borders::BOTTOM)
                .border_set(border::ROUNDED)
                .border_style(Style::new().fg(colors::NEUTRAL))
                .title(Line::from(format!(" 󰝚 {}", env!("CARGO_PKG_NAME"))).bold())
                .title(
                    Line::from(format!("󰍜 {hint} "))
                        .fg(colors::MUTED)
                        .alignment(Alignment::Right),
                );
            f.render_widget(header, header_area);
        }

        match panes.list {
            Some(list_area) => {
                f.buffer_mut().set_style(list_area, Style::new().bg(accent));
                list.render(f, list_area, state, ctx);
            }
            None => list.hide(),
        }

        match panes.detail {
            Some(detail_area) => {
                f.buffer_mut().set_style(detail_area, Style::new().bg(accent));
                display.render(f, detail_area, state, ctx);
            }
            None => display.hide(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_terminals_show_every_pane() {
        let panes = Panes::split(Rect::new(0, 0, 120, 40), false);
        assert_eq!(panes.sidebar.map(|r| r.width), Some(20));
        assert_eq!(panes.list.map(|r| r.width), Some(40));
        assert_eq!(panes.detail.map(|r| r.width), Some(60));
        assert!(panes.header.is_none());
    }

    #[test]
    fn narrow_terminals_toggle_between_list_and_detail() {
        let area = Rect::new(0, 0, 80, 30);

        let closed = Panes::split(area, false);
        assert!(closed.sidebar.is_none());
        assert!(closed.list.is_none());
        assert_eq!(closed.detail, Some(Rect::new(0, 3, 80, 27)));
        assert_eq!(closed.header, Some(Rect::new(0, 0, 80, 3)));

        let open = Panes::split(area, true);
        assert_eq!(open.list, Some(Rect::new(0, 3, 80, 27)));
        assert!(open.detail.is_none());
    }
}
