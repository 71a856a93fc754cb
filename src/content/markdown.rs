//! Markdown rendering for profile rich text
//!
//! Converts the small markdown subset used in portfolio prose
//! (paragraphs, emphasis, inline code, bullet lists, headings) into
//! styled, word-wrapped ratatui lines.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::TermStyles;

/// Render markdown text to styled lines wrapped to `width`
pub fn render(text: &str, styles: &TermStyles, width: usize) -> Vec<Line<'static>> {
    let parser = Parser::new_ext(text, Options::empty());

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut strong = 0usize;
    let mut emphasis = 0usize;
    let mut in_heading = false;
    let mut in_item = false;

    for event in parser {
        match event {
            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => {
                // Paragraphs inside list items flush at the item end
                if !in_item {
                    flush_paragraph(&mut spans, &mut lines, width);
                }
            }

            Event::Start(Tag::Heading { .. }) => {
                spans.clear();
                in_heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                in_heading = false;
                flush_paragraph(&mut spans, &mut lines, width);
            }

            Event::Start(Tag::Item) => {
                spans.clear();
                in_item = true;
            }
            Event::End(TagEnd::Item) => {
                in_item = false;
                flush_item(&mut spans, &mut lines, width, styles);
            }
            Event::End(TagEnd::List(_)) => {
                lines.push(Line::from(""));
            }

            Event::Start(Tag::Emphasis) => emphasis += 1,
            Event::End(TagEnd::Emphasis) => emphasis = emphasis.saturating_sub(1),
            Event::Start(Tag::Strong) => strong += 1,
            Event::End(TagEnd::Strong) => strong = strong.saturating_sub(1),

            Event::Code(code) => {
                let style = Style::default().fg(styles.accent).bg(styles.card);
                spans.push(Span::styled(code.to_string(), style));
            }
            Event::Text(text) => {
                let mut style = if in_heading {
                    Style::default().fg(styles.primary).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(styles.foreground)
                };
                if strong > 0 {
                    style = style.add_modifier(Modifier::BOLD);
                }
                if emphasis > 0 {
                    style = style.add_modifier(Modifier::ITALIC);
                }
                spans.push(Span::styled(text.to_string(), style));
            }
            Event::SoftBreak | Event::HardBreak => {
                spans.push(Span::styled(" ".to_string(), Style::default().fg(styles.foreground)));
            }

            _ => {}
        }
    }

    if !spans.is_empty() {
        flush_paragraph(&mut spans, &mut lines, width);
    }

    // Drop a single trailing blank line left by the last block
    if lines.last().is_some_and(|line| line.width() == 0) {
        lines.pop();
    }

    lines
}

fn flush_paragraph(spans: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>, width: usize) {
    let flushed = std::mem::take(spans);
    lines.extend(wrap_spans(flushed, width));
    lines.push(Line::from(""));
}

fn flush_item(
    spans: &mut Vec<Span<'static>>,
    lines: &mut Vec<Line<'static>>,
    width: usize,
    styles: &TermStyles,
) {
    let flushed = std::mem::take(spans);
    let wrapped = wrap_spans(flushed, width.saturating_sub(2));

    for (i, line) in wrapped.into_iter().enumerate() {
        let marker = if i == 0 { "• " } else { "  " };
        let mut item_spans = vec![Span::styled(marker, Style::default().fg(styles.primary))];
        item_spans.extend(line.spans);
        lines.push(Line::from(item_spans));
    }
}

/// Word-wrap styled spans to a target width, preserving span styles
fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![Line::from(spans)];
    }

    let mut lines = Vec::new();
    let mut current_line: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0;

    for span in spans {
        let text = span.content.to_string();
        let style = span.style;

        for word in text.split_inclusive(char::is_whitespace) {
            let word_len = word.chars().count();

            if current_width + word_len > width && current_width > 0 {
                lines.push(Line::from(current_line.clone()));
                current_line.clear();
                current_width = 0;
            }

            current_line.push(Span::styled(word.to_string(), style));
            current_width += word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(Line::from(current_line));
    }

    if lines.is_empty() {
        lines.push(Line::from(""));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{EffectiveStyles, TermStyles};

    fn styles() -> TermStyles {
        TermStyles::resolve(&EffectiveStyles::default())
    }

    fn plain_text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn paragraphs_are_wrapped_to_width() {
        let lines = render("one two three four five six seven", &styles(), 10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width() <= 10);
        }
    }

    #[test]
    fn strong_text_is_bold() {
        let lines = render("plain **loud** plain", &styles(), 80);
        let bold = lines[0]
            .spans
            .iter()
            .find(|s| s.content.as_ref().contains("loud"))
            .expect("bold span present");
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn inline_code_keeps_its_own_style() {
        let term = styles();
        let lines = render("uses `ratatui` heavily", &term, 80);
        let code = lines[0]
            .spans
            .iter()
            .find(|s| s.content.as_ref() == "ratatui")
            .expect("code span present");
        assert_eq!(code.style.fg, Some(term.accent));
    }

    #[test]
    fn list_items_get_bullet_markers() {
        let lines = render("- first\n- second", &styles(), 80);
        let text = plain_text(&lines);
        assert!(text.contains("• first"));
        assert!(text.contains("• second"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(render("", &styles(), 80).is_empty());
    }
}
