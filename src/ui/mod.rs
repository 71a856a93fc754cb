//! UI rendering components

pub mod layout;
pub mod nav;
pub mod sections;
pub mod status;
pub mod theme_switch;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph},
};

use crate::app::state::AppState;
use crate::content::SiteData;
use crate::theme::{EffectiveStyles, TermStyles};

/// Main draw function
pub fn draw(
    frame: &mut Frame,
    state: &mut AppState,
    data: &SiteData,
    effective: &EffectiveStyles,
    styles: &TermStyles,
) {
    let areas = layout::screen(frame.area());

    // Paint the themed background across the whole screen first
    let background = Block::default().style(Style::default().bg(styles.background));
    frame.render_widget(background, frame.area());

    draw_header(frame, areas.header, data, effective, styles);
    nav::draw(frame, areas.nav, state, styles);
    sections::draw(frame, areas.content, state, data, styles);
    status::draw(frame, areas.status, effective, styles);
}

/// Header row: name on the left, mode switch on the right
fn draw_header(
    frame: &mut Frame,
    area: Rect,
    data: &SiteData,
    effective: &EffectiveStyles,
    styles: &TermStyles,
) {
    let columns = layout::header_columns(area);

    let name = Paragraph::new(Span::styled(
        format!(" {}", data.profile.name),
        Style::default().fg(styles.primary).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(name, columns.0);

    theme_switch::draw(frame, columns.1, effective.mode, styles);
}
