//! Terminal projection of the effective style set
//!
//! Renderers never look at modes or palettes directly; they consume the
//! fixed slots resolved here.

use ratatui::style::Color;

use super::engine::EffectiveStyles;

/// Resolved terminal colors for the current theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermStyles {
    pub background: Color,
    pub card: Color,
    pub foreground: Color,
    pub muted: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub border: Color,
}

/// Baseline styling when no overrides and no darkness flag are applied
const LIGHT: TermStyles = TermStyles {
    background: Color::Rgb(250, 250, 248),
    card: Color::Rgb(242, 242, 238),
    foreground: Color::Rgb(32, 33, 36),
    muted: Color::Rgb(118, 120, 130),
    primary: Color::Rgb(124, 58, 237),
    secondary: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(219, 39, 119),
    border: Color::Rgb(214, 214, 210),
};

/// Built-in dark styling, selected by the darkness flag
const DARK: TermStyles = TermStyles {
    background: Color::Rgb(24, 24, 27),
    card: Color::Rgb(39, 39, 42),
    foreground: Color::Rgb(228, 228, 231),
    muted: Color::Rgb(140, 142, 152),
    primary: Color::Rgb(167, 139, 250),
    secondary: Color::Rgb(96, 165, 250),
    accent: Color::Rgb(244, 114, 182),
    border: Color::Rgb(63, 63, 70),
};

impl TermStyles {
    /// Project the effective style set onto terminal colors
    pub fn resolve(styles: &EffectiveStyles) -> Self {
        match &styles.overrides {
            Some(overrides) => Self {
                background: overrides.background.into(),
                card: overrides.card.into(),
                foreground: overrides.foreground.into(),
                muted: overrides.muted.into(),
                primary: overrides.primary.into(),
                secondary: overrides.secondary.into(),
                accent: overrides.accent.into(),
                border: overrides.muted.into(),
            },
            None if styles.dark => DARK,
            None => LIGHT,
        }
    }
}
