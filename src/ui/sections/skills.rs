//! Skills section: proficiency bars per skill group

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::{Skill, SkillGroups};
use crate::theme::TermStyles;

/// Widest a proficiency bar gets, in cells
const BAR_WIDTH: usize = 24;

pub fn lines(skills: &SkillGroups, styles: &TermStyles, width: usize) -> Vec<Line<'static>> {
    let bar_width = BAR_WIDTH.min(width.saturating_sub(26)).max(8);
    let mut lines = Vec::new();

    for (title, group) in skills.groups() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            title,
            Style::default().fg(styles.primary).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for skill in group {
            lines.push(skill_line(skill, styles, bar_width));
        }
    }

    lines
}

fn skill_line(skill: &Skill, styles: &TermStyles, bar_width: usize) -> Line<'static> {
    let level = skill.level.min(100) as usize;
    let filled = level * bar_width / 100;

    Line::from(vec![
        Span::styled(format!("{:<16}", skill.name), Style::default().fg(styles.foreground)),
        Span::styled("█".repeat(filled), Style::default().fg(styles.secondary)),
        Span::styled("░".repeat(bar_width - filled), Style::default().fg(styles.border)),
        Span::styled(format!(" {level:>3}%"), Style::default().fg(styles.muted)),
    ])
}
