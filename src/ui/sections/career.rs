//! Career section: the role timeline

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::{Career, markdown};
use crate::theme::TermStyles;

pub fn lines(experience: &[Career], styles: &TermStyles, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for role in experience {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(role.period.clone(), Style::default().fg(styles.muted)),
            Span::raw("  "),
            Span::styled(
                role.role.clone(),
                Style::default().fg(styles.primary).add_modifier(Modifier::BOLD),
            ),
        ]));

        let mut company = role.company.clone();
        if let Some(location) = &role.location {
            company.push_str(&format!(" — {location}"));
        }
        lines.push(Line::from(Span::styled(company, Style::default().fg(styles.secondary))));

        if !role.highlights.is_empty() {
            let bullets: String =
                role.highlights.iter().map(|h| format!("- {h}\n")).collect();
            lines.extend(markdown::render(&bullets, styles, width));
        }

        if !role.tech.is_empty() {
            lines.push(Line::from(Span::styled(
                role.tech.join(" · "),
                Style::default().fg(styles.muted),
            )));
        }
    }

    lines
}
