//! Event handling utilities

use crossterm::event::KeyCode;

use crate::theme::Mode;

/// Vim-style key mapping
pub fn key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Some(Action::NextSection),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Some(Action::PrevSection),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
        KeyCode::Char('d') | KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Char('u') | KeyCode::PageUp => Some(Action::PageUp),
        // Mode switch: direct selection plus cycling
        KeyCode::Char('1') => Some(Action::SetMode(Mode::Light)),
        KeyCode::Char('2') => Some(Action::SetMode(Mode::Dark)),
        KeyCode::Char('3') => Some(Action::SetMode(Mode::Surprise)),
        KeyCode::Char('t') => Some(Action::CycleMode),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Content scrolling
    Up,
    Down,
    Top,
    Bottom,
    PageUp,
    PageDown,

    // Section navigation
    NextSection,
    PrevSection,

    // Theming
    SetMode(Mode),
    CycleMode,

    Quit,
}
