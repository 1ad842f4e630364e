use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    catalog::{Song, Tab},
    ui::{
        components::skeleton::Skeleton,
        context::AppContext,
        state::{AppState, CatalogLoad},
        traits::{Action, View},
        util::get_active_track_icon,
    },
    util::colors,
};

const ROW_HEIGHT: u16 = 2;
const HIGHLIGHT_SYMBOL: &str = "> ";

/// Tabbed, searchable song list.
#[derive(Default)]
pub struct MusicList {
    list_state: ListState,
    is_editing: bool,
    /// Current song the cursor last jumped to.
    followed: Option<usize>,
    rows_area: Option<Rect>,
    rows: Vec<usize>,
}

impl MusicList {
    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn is_visible(&self) -> bool {
        self.rows_area.is_some()
    }

    /// Catalog index of the row under a terminal cell, if any.
    pub fn song_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.rows_area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let offset = ((row - area.y) / ROW_HEIGHT) as usize;
        self.rows
            .get(self.list_state.offset() + offset)
            .copied()
    }

    /// Forget hit-test areas while the list is not on screen.
    pub fn hide(&mut self) {
        self.rows_area = None;
        self.is_editing = false;
    }

    fn sync_cursor(&mut self, current: Option<usize>) {
        let view = &self.rows;
        if view.is_empty() {
            self.list_state.select(None);
            return;
        }

        if current != self.followed {
            self.followed = current;
            if let Some(pos) = current.and_then(|c| view.iter().position(|&i| i == c)) {
                self.list_state.select(Some(pos));
                return;
            }
        }

        match self.list_state.selected() {
            None => self.list_state.select(Some(0)),
            Some(i) if i >= view.len() => self.list_state.select(Some(view.len() - 1)),
            Some(_) => {}
        }
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect, active: Tab) {
        let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
            .select(active.position())
            .style(Style::default().fg(colors::MUTED))
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(" ");
        f.render_widget(tabs, area);
    }

    fn render_search(&self, f: &mut Frame, area: Rect, term: &str) {
        let border_style = if self.is_editing {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_style);
        let inner = block.inner(area);

        let content = if term.is_empty() && !self.is_editing {
            Line::from(" Search song, artist  (/)").fg(colors::NEUTRAL)
        } else {
            Line::from(format!(" {term}")).fg(colors::PRIMARY)
        };
        f.render_widget(Paragraph::new(content).block(block), area);

        if self.is_editing {
            let x = inner.x + 1 + term.width() as u16;
            f.set_cursor_position(Position::new(x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }

    fn row(song: &Song, width: u16, is_current: bool, is_playing: bool) -> ListItem<'_> {
        let prefix = if is_current {
            format!("{} ", get_active_track_icon(is_playing))
        } else {
            "  ".to_string()
        };
        let duration = song.duration_label();
        let used = prefix.width() + song.name.width() + duration.width();
        let padding = (width as usize).saturating_sub(used + HIGHLIGHT_SYMBOL.len() + 1);

        let title = Line::from(vec![
            Span::raw(prefix),
            Span::raw(song.name.as_str()).bold(),
            Span::raw(" ".repeat(padding)),
            Span::raw(duration).fg(colors::MUTED),
        ]);
        let artist = Line::from(format!("  {}", song.artist)).fg(colors::MUTED);

        let item = ListItem::new(Text::from(vec![title, artist]));
        if is_current {
            item.style(Style::default().fg(colors::PRIMARY).bg(colors::HIGHLIGHT))
        } else {
            item.style(Style::default().fg(colors::SECONDARY))
        }
    }
}

impl View for MusicList {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        let [tabs_area, search_area, rows_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(area);

        self.render_tabs(f, tabs_area, state.ui.active_tab);
        self.render_search(f, search_area, &state.ui.search_term);

        self.rows = state.visible_indices();
        self.rows_area = Some(rows_area);

        if state.data.catalog.is_empty() {
            self.list_state.select(None);
            match state.data.load {
                CatalogLoad::Fetching => f.render_widget(Skeleton::new(None), rows_area),
                CatalogLoad::Probing(progress) => {
                    f.render_widget(Skeleton::new(Some(progress)), rows_area)
                }
                CatalogLoad::Ready => f.render_widget(
                    Paragraph::new("No songs").fg(colors::MUTED).centered(),
                    rows_area,
                ),
            }
            return;
        }

        if self.rows.is_empty() {
            self.list_state.select(None);
            f.render_widget(
                Paragraph::new("Nothing matches your search")
                    .fg(colors::MUTED)
                    .centered(),
                rows_area,
            );
            return;
        }

        let current = ctx.audio_system.current_index();
        let is_playing = ctx.audio_system.is_playing();
        self.sync_cursor(current);

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .filter_map(|&i| state.data.song(i))
            .map(|song| Self::row(song, rows_area.width, Some(song.index) == current, is_playing))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        f.render_stateful_widget(list, rows_area, &mut self.list_state);
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        if self.is_editing {
            let mut term = state.ui.search_term.clone();
            return match key.code {
                KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
                KeyCode::Esc | KeyCode::Enter => {
                    self.is_editing = false;
                    Some(Action::None)
                }
                KeyCode::Backspace => {
                    term.pop();
                    Some(Action::SearchChanged(term))
                }
                KeyCode::Char(c) => {
                    term.push(c);
                    Some(Action::SearchChanged(term))
                }
                _ => Some(Action::None),
            };
        }

        let view = state.visible_indices();
        let len = view.len();
        match key.code {
            KeyCode::Char('/') => {
                self.is_editing = true;
                Some(Action::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| (i + 1).min(len - 1));
                    self.list_state.select(Some(i));
                }
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if len > 0 {
                    let i = self
                        .list_state
                        .selected()
                        .map_or(0, |i| i.saturating_sub(1));
                    self.list_state.select(Some(i));
                }
                Some(Action::None)
            }
            KeyCode::Char('g') => {
                if len > 0 {
                    self.list_state.select(Some(0));
                }
                Some(Action::None)
            }
            KeyCode::Char('G') => {
                if len > 0 {
                    self.list_state.select(Some(len - 1));
                }
                Some(Action::None)
            }
            KeyCode::Enter => self
                .list_state
                .selected()
                .and_then(|i| view.get(i).copied())
                .map(Action::Select),
            _ => None,
        }
    }
}
