use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::ui::{context::AppContext, state::AppState};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Make the catalog entry with this index current.
    Select(usize),
    SearchChanged(String),
    /// The key was consumed.
    None,
}

pub trait View {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext);

    /// `None` lets the key fall through to the global bindings.
    fn handle_input(&mut self, key: KeyEvent, state: &AppState, ctx: &AppContext)
    -> Option<Action>;
}
