//! Projects section: one card per project

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::{Project, markdown};
use crate::theme::TermStyles;

pub fn lines(projects: &[Project], styles: &TermStyles, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for project in projects {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            project.title.clone(),
            Style::default().fg(styles.primary).add_modifier(Modifier::BOLD),
        )));

        lines.extend(markdown::render(&project.summary, styles, width));

        if let Some(impact) = &project.impact {
            let wrapped = textwrap::wrap(impact, width.saturating_sub(8).max(16));
            for (i, piece) in wrapped.into_iter().enumerate() {
                let label = if i == 0 { "Impact  " } else { "        " };
                lines.push(Line::from(vec![
                    Span::styled(label, Style::default().fg(styles.muted)),
                    Span::styled(piece.to_string(), Style::default().fg(styles.accent)),
                ]));
            }
        }

        if !project.stack.is_empty() {
            lines.push(Line::from(Span::styled(
                project.stack.join(" · "),
                Style::default().fg(styles.secondary),
            )));
        }

        for (label, url) in [("Code", &project.links.code), ("Demo", &project.links.demo)] {
            if let Some(url) = url {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label}    "), Style::default().fg(styles.muted)),
                    Span::styled(url.clone(), Style::default().fg(styles.secondary)),
                ]));
            }
        }

        lines.push(Line::from(Span::styled(
            "─".repeat(width.max(8)),
            Style::default().fg(styles.border),
        )));
    }

    lines
}
