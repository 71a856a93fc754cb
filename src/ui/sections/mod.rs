//! Section renderers
//!
//! Each section produces styled lines from the content model; this
//! module owns the shared panel chrome, scrolling and the scrollbar.

mod about;
mod career;
mod contact;
mod education;
mod hero;
mod projects;
mod skills;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, Section};
use crate::content::SiteData;
use crate::theme::TermStyles;

/// Draw the selected section into the content panel
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    data: &SiteData,
    styles: &TermStyles,
) {
    let section = state.selected_section();

    let block = Block::default()
        .title(format!(" {} ", section.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styles.border))
        .style(Style::default().bg(styles.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Reserve 1 column for the scrollbar
    let content_width = inner.width.saturating_sub(2) as usize;
    let content_area =
        Rect { x: inner.x, y: inner.y, width: inner.width.saturating_sub(1), height: inner.height };
    let scrollbar_x = inner.x + inner.width.saturating_sub(1);

    let lines = section_lines(section, data, styles, content_width);
    let total_lines = lines.len();
    let visible_height = inner.height as usize;

    // Update state with content metrics for scroll clamping
    state.content.total_lines = total_lines;
    state.content.visible_height = visible_height;
    state.content.clamp_scroll();

    let scroll_offset = state.content.scroll_offset;
    let end = (scroll_offset + visible_height).min(total_lines);
    let visible: Vec<Line> =
        lines.into_iter().skip(scroll_offset).take(end - scroll_offset).collect();

    frame.render_widget(Paragraph::new(visible), content_area);

    draw_scrollbar(frame, scrollbar_x, inner.y, inner.height, scroll_offset, total_lines, styles);
}

/// Render the lines for one section
pub fn section_lines(
    section: Section,
    data: &SiteData,
    styles: &TermStyles,
    width: usize,
) -> Vec<Line<'static>> {
    match section {
        Section::Hero => hero::lines(&data.profile, styles, width),
        Section::About => about::lines(&data.profile, styles, width),
        Section::Skills => skills::lines(&data.profile.skills, styles, width),
        Section::Projects => projects::lines(&data.projects, styles, width),
        Section::Career => career::lines(&data.experience, styles, width),
        Section::Education => education::lines(&data.education, &data.certifications, styles),
        Section::Contact => contact::lines(&data.profile, styles),
    }
}

/// Draw a scrollbar indicator
fn draw_scrollbar(
    frame: &mut Frame,
    x: u16,
    y: u16,
    height: u16,
    scroll_offset: usize,
    total_lines: usize,
    styles: &TermStyles,
) {
    if total_lines == 0 || height == 0 {
        return;
    }

    let height = height as usize;

    let visible_ratio = (height as f64 / total_lines as f64).min(1.0);
    let thumb_height = ((height as f64 * visible_ratio).ceil() as usize).max(1);

    let max_scroll = total_lines.saturating_sub(height / 2);
    let scroll_ratio = if total_lines <= height || max_scroll == 0 {
        0.0
    } else {
        scroll_offset as f64 / max_scroll as f64
    };
    let thumb_top = ((height - thumb_height) as f64 * scroll_ratio).round() as usize;

    for i in 0..height {
        let in_thumb = i >= thumb_top && i < thumb_top + thumb_height;
        let ch = if in_thumb { "█" } else { "░" };
        let style = if in_thumb {
            Style::default().fg(styles.secondary)
        } else {
            Style::default().fg(styles.border)
        };

        frame.render_widget(
            Paragraph::new(ch).style(style),
            Rect { x, y: y.saturating_add(i as u16), width: 1, height: 1 },
        );
    }
}
