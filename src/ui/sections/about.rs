//! About section: the long-form summary plus availability and languages

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::{Profile, markdown};
use crate::theme::TermStyles;

pub fn lines(profile: &Profile, styles: &TermStyles, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    let summary = profile.long_summary.as_deref().or(profile.summary.as_deref());
    match summary {
        Some(text) => lines.extend(markdown::render(text, styles, width)),
        None => lines.push(Line::from(Span::styled(
            "Nothing to tell, yet.",
            Style::default().fg(styles.muted),
        ))),
    }

    if let Some(availability) = &profile.availability {
        lines.push(Line::from(""));
        lines.push(heading("Availability", styles));
        lines.push(Line::from(vec![
            Span::styled("Base       ", Style::default().fg(styles.muted)),
            Span::styled(availability.base.clone(), Style::default().fg(styles.foreground)),
        ]));
        if !availability.work_regions.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Regions    ", Style::default().fg(styles.muted)),
                Span::styled(
                    availability.work_regions.join(", "),
                    Style::default().fg(styles.foreground),
                ),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("Status     ", Style::default().fg(styles.muted)),
            Span::styled(availability.status.clone(), Style::default().fg(styles.accent)),
        ]));
    }

    if !profile.languages.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Languages", styles));
        for (language, proficiency) in &profile.languages {
            lines.push(Line::from(vec![
                Span::styled(format!("{language:<12}"), Style::default().fg(styles.foreground)),
                Span::styled(proficiency.clone(), Style::default().fg(styles.muted)),
            ]));
        }
    }

    lines
}

fn heading(text: &'static str, styles: &TermStyles) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(styles.primary).add_modifier(Modifier::BOLD),
    ))
}
