//! Education section: degrees and certifications

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::{Certification, Education};
use crate::theme::TermStyles;

pub fn lines(
    education: &[Education],
    certifications: &[Certification],
    styles: &TermStyles,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for entry in education {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            entry.degree.clone(),
            Style::default().fg(styles.primary).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled(entry.institution.clone(), Style::default().fg(styles.secondary)),
            Span::styled(format!("  {}", entry.years), Style::default().fg(styles.muted)),
        ]));
    }

    if !certifications.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Certifications",
            Style::default().fg(styles.primary).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for cert in certifications {
            lines.push(Line::from(vec![
                Span::styled(format!("{}  ", cert.year), Style::default().fg(styles.muted)),
                Span::styled(cert.name.clone(), Style::default().fg(styles.foreground)),
                Span::styled(format!("  {}", cert.issuer), Style::default().fg(styles.secondary)),
            ]));
        }
    }

    lines
}
