//! The mode switch widget
//!
//! Presents the three theme modes and mirrors the engine's active mode.
//! The widget holds no state of its own; selection happens through key
//! handling in the app, which calls the engine.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::{Mode, TermStyles};

/// Draw the switch, highlighting the active mode
pub fn draw(frame: &mut Frame, area: Rect, active: Mode, styles: &TermStyles) {
    let widget = Paragraph::new(switch_line(active, styles)).alignment(Alignment::Right);
    frame.render_widget(widget, area);
}

fn icon(mode: Mode) -> &'static str {
    match mode {
        Mode::Light => "☀",
        Mode::Dark => "☾",
        Mode::Surprise => "✦",
    }
}

/// Key hint shown next to each option
fn hotkey(mode: Mode) -> &'static str {
    match mode {
        Mode::Light => "1",
        Mode::Dark => "2",
        Mode::Surprise => "3",
    }
}

fn switch_line(active: Mode, styles: &TermStyles) -> Line<'static> {
    let mut spans = Vec::new();

    for mode in Mode::ALL {
        let selected = mode == active;
        let style = if selected {
            Style::default().fg(styles.primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(styles.muted)
        };
        let marker = if selected { "●" } else { "○" };
        spans.push(Span::styled(
            format!(" {marker} {} {} [{}] ", icon(mode), mode.label(), hotkey(mode)),
            style,
        ));
    }

    Line::from(spans)
}
