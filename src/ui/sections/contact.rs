//! Contact section

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::Profile;
use crate::theme::TermStyles;

pub fn lines(profile: &Profile, styles: &TermStyles) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    lines.push(Line::from(Span::styled(
        "Let's talk.",
        Style::default().fg(styles.primary).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    let contacts = profile.contacts.entries();
    if contacts.is_empty() {
        lines.push(Line::from(Span::styled(
            "No contact details published.",
            Style::default().fg(styles.muted),
        )));
        return lines;
    }

    for (label, value) in contacts {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:>10}  "), Style::default().fg(styles.muted)),
            Span::styled(value.to_string(), Style::default().fg(styles.secondary)),
        ]));
    }

    lines
}
