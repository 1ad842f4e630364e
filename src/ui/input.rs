use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char(' '), _) => Some(AppMessage::TogglePlayPause),
            (KeyCode::Char('n'), _) => Some(AppMessage::NextTrack),
            (KeyCode::Char('p'), _) => Some(AppMessage::PreviousTrack),
            (KeyCode::Char('+'), _) => Some(AppMessage::VolumeUp),
            (KeyCode::Char('='), _) => Some(AppMessage::VolumeUp),
            (KeyCode::Char('-'), _) => Some(AppMessage::VolumeDown),
            (KeyCode::Char('m'), _) => Some(AppMessage::ToggleMute),
            (KeyCode::Char('H'), _) => Some(AppMessage::SeekBackward),
            (KeyCode::Char('L'), _) => Some(AppMessage::SeekForward),
            (KeyCode::Tab, _) => Some(AppMessage::NextTab),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousTab),
            (KeyCode::Char('1'), _) => Some(AppMessage::SetTab(0)),
            (KeyCode::Char('2'), _) => Some(AppMessage::SetTab(1)),
            (KeyCode::Char('b'), _) => Some(AppMessage::ToggleMenu),
            _ => None,
        }
    }
}
