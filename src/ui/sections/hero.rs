//! Hero section: name, title and the first impression

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::{Profile, markdown};
use crate::theme::TermStyles;

pub fn lines(profile: &Profile, styles: &TermStyles, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    lines.push(Line::from(Span::styled(
        profile.name.clone(),
        Style::default().fg(styles.primary).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        profile.title.clone(),
        Style::default().fg(styles.secondary),
    )));

    if let Some(subtitle) = &profile.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.clone(),
            Style::default().fg(styles.muted).add_modifier(Modifier::ITALIC),
        )));
    }

    if !profile.tags.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            profile.tags.join(" · "),
            Style::default().fg(styles.accent),
        )));
    }

    if let Some(summary) = &profile.summary {
        lines.push(Line::from(""));
        lines.extend(markdown::render(summary, styles, width));
    }

    if let Some(location) = &profile.location {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Based in {location}"),
            Style::default().fg(styles.muted),
        )));
    }

    let social = profile.social.entries();
    if !social.is_empty() {
        lines.push(Line::from(""));
        for (label, value) in social {
            lines.push(Line::from(vec![
                Span::styled(format!("{label:>10}  "), Style::default().fg(styles.muted)),
                Span::styled(value.to_string(), Style::default().fg(styles.secondary)),
            ]));
        }
    }

    lines
}
