//! Screen layout

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Minimum width for the section list panel
const NAV_MIN_WIDTH: u16 = 18;

/// The fixed screen regions
#[derive(Debug, Clone, Copy)]
pub struct Areas {
    pub header: Rect,
    pub nav: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Split the screen into header, nav, content and status regions
pub fn screen(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let nav_width = (area.width / 5).max(NAV_MIN_WIDTH);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(nav_width), Constraint::Min(30)])
        .split(rows[1]);

    Areas { header: rows[0], nav: columns[0], content: columns[1], status: rows[2] }
}

/// Split the header into name (left) and mode switch (right)
pub fn header_columns(area: Rect) -> (Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(40)])
        .split(area);
    (columns[0], columns[1])
}
