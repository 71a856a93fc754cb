//! Section list panel

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;
use crate::theme::TermStyles;

/// Draw the section list with the selected section highlighted
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, styles: &TermStyles) {
    let block = Block::default()
        .title(" Sections ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styles.border))
        .style(Style::default().bg(styles.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = state
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            if i == state.selected {
                Line::from(Span::styled(
                    format!("▸ {}", section.title()),
                    Style::default().fg(styles.primary).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", section.title()),
                    Style::default().fg(styles.muted),
                ))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
