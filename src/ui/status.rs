//! Status line: key hints plus the active theme tags

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::{EffectiveStyles, Mode, TermStyles};

/// Draw the status line
pub fn draw(frame: &mut Frame, area: Rect, effective: &EffectiveStyles, styles: &TermStyles) {
    let hints = Paragraph::new(Span::styled(
        " j/k scroll · h/l sections · 1/2/3 theme · t cycle · q quit",
        Style::default().fg(styles.muted),
    ));
    frame.render_widget(hints, area);

    let tags = Paragraph::new(theme_tags(effective, styles)).alignment(Alignment::Right);
    frame.render_widget(tags, area);
}

/// The active mode, and for surprise the chosen palette name and style
fn theme_tags(effective: &EffectiveStyles, styles: &TermStyles) -> Line<'static> {
    match (effective.mode, effective.palette_name, effective.palette_style) {
        (Mode::Surprise, Some(name), Some(style)) => Line::from(vec![
            Span::styled("surprise", Style::default().fg(styles.accent)),
            Span::styled(format!(" · {name} · {style} "), Style::default().fg(styles.muted)),
        ]),
        (mode, _, _) => {
            Line::from(Span::styled(format!("{mode} "), Style::default().fg(styles.muted)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MemoryModeStore, ThemeEngine};

    fn term_styles() -> TermStyles {
        TermStyles::resolve(&EffectiveStyles::default())
    }

    #[test]
    fn surprise_tags_show_the_palette() {
        let mut engine = ThemeEngine::new(Box::new(MemoryModeStore::new())).unwrap();
        engine.set_mode(Mode::Surprise);

        let effective = engine.styles();
        let line = theme_tags(&effective, &term_styles());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(text.contains("surprise"));
        assert!(text.contains(effective.palette_name.unwrap()));
        assert!(text.contains(effective.palette_style.unwrap()));
    }

    #[test]
    fn plain_modes_show_only_the_mode() {
        let mut engine = ThemeEngine::new(Box::new(MemoryModeStore::new())).unwrap();
        engine.set_mode(Mode::Dark);

        let line = theme_tags(&engine.styles(), &term_styles());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(text.contains("dark"));
        assert!(!text.contains("·"));
    }
}
