//! The surprise palette catalogue
//!
//! A fixed set of creative palettes inspired by various design styles.
//! Defined once, never mutated; surprise mode picks one at random.

use super::color::Oklch;

/// A named bundle of color values plus a descriptive style tag.
///
/// The style tag is presentation-only; no logic branches on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub primary: Oklch,
    pub secondary: Oklch,
    pub background: Oklch,
    pub foreground: Oklch,
    pub card: Oklch,
    pub accent: Oklch,
    pub style: &'static str,
}

impl Palette {
    /// Slot name/value pairs in application order
    pub fn slots(&self) -> [(&'static str, Oklch); 6] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("background", self.background),
            ("foreground", self.foreground),
            ("card", self.card),
            ("accent", self.accent),
        ]
    }
}

static PALETTES: &[Palette] = &[
    Palette {
        name: "doom-64",
        primary: Oklch::new(0.6083, 0.2090, 27.0276),
        secondary: Oklch::new(0.6423, 0.1467, 133.0145),
        background: Oklch::new(0.2178, 0.0, 0.0),
        foreground: Oklch::new(0.9067, 0.0, 0.0),
        card: Oklch::new(0.25, 0.0, 0.0),
        accent: Oklch::new(0.7482, 0.1235, 244.7492),
        style: "retro-gaming",
    },
    Palette {
        name: "mono",
        primary: Oklch::new(0.5555, 0.0, 0.0),
        secondary: Oklch::new(0.2686, 0.0, 0.0),
        background: Oklch::new(0.1, 0.0, 0.0),
        foreground: Oklch::new(0.95, 0.0, 0.0),
        card: Oklch::new(0.15, 0.0, 0.0),
        accent: Oklch::new(0.7022, 0.1892, 22.2279),
        style: "monochrome",
    },
    Palette {
        name: "neo-brutalism",
        primary: Oklch::new(0.7044, 0.1872, 23.1858),
        secondary: Oklch::new(0.9691, 0.2005, 109.6228),
        background: Oklch::new(0.0, 0.0, 0.0),
        foreground: Oklch::new(1.0, 0.0, 0.0),
        card: Oklch::new(0.3211, 0.0, 0.0),
        accent: Oklch::new(0.6755, 0.1765, 252.2592),
        style: "brutalist",
    },
    Palette {
        name: "notebook",
        primary: Oklch::new(0.4891, 0.0, 0.0),
        secondary: Oklch::new(0.7572, 0.0, 0.0),
        background: Oklch::new(0.9821, 0.0, 0.0),
        foreground: Oklch::new(0.3485, 0.0, 0.0),
        card: Oklch::new(0.98, 0.0, 0.0),
        accent: Oklch::new(0.9354, 0.0456, 94.8549),
        style: "paper",
    },
    Palette {
        name: "bubblegum",
        primary: Oklch::new(0.9195, 0.0801, 87.667),
        secondary: Oklch::new(0.7794, 0.0803, 4.133),
        background: Oklch::new(0.2497, 0.0305, 234.1628),
        foreground: Oklch::new(0.9306, 0.0197, 349.0785),
        card: Oklch::new(0.2902, 0.0299, 233.5352),
        accent: Oklch::new(0.6699, 0.0988, 356.9762),
        style: "playful",
    },
    Palette {
        name: "sunset-vaporwave",
        primary: Oklch::new(0.75, 0.20, 330.0),
        secondary: Oklch::new(0.80, 0.18, 280.0),
        background: Oklch::new(0.15, 0.05, 260.0),
        foreground: Oklch::new(0.95, 0.05, 320.0),
        card: Oklch::new(0.20, 0.08, 270.0),
        accent: Oklch::new(0.85, 0.25, 300.0),
        style: "vaporwave",
    },
    Palette {
        name: "forest-depths",
        primary: Oklch::new(0.55, 0.15, 150.0),
        secondary: Oklch::new(0.65, 0.12, 130.0),
        background: Oklch::new(0.12, 0.03, 140.0),
        foreground: Oklch::new(0.88, 0.05, 160.0),
        card: Oklch::new(0.18, 0.05, 145.0),
        accent: Oklch::new(0.70, 0.20, 110.0),
        style: "nature",
    },
    Palette {
        name: "cyber-tokyo",
        primary: Oklch::new(0.70, 0.28, 350.0),
        secondary: Oklch::new(0.75, 0.25, 200.0),
        background: Oklch::new(0.08, 0.02, 280.0),
        foreground: Oklch::new(0.95, 0.03, 320.0),
        card: Oklch::new(0.12, 0.05, 290.0),
        accent: Oklch::new(0.80, 0.30, 30.0),
        style: "cyberpunk",
    },
];

/// The built-in palette catalogue: fixed, ordered and non-empty
pub fn palettes() -> &'static [Palette] {
    PALETTES
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn registry_is_non_empty() {
        assert!(!palettes().is_empty());
    }

    #[test]
    fn palette_names_are_unique() {
        let names: HashSet<_> = palettes().iter().map(|p| p.name).collect();
        assert_eq!(names.len(), palettes().len());
    }

    #[test]
    fn every_palette_has_six_slots() {
        for palette in palettes() {
            assert_eq!(palette.slots().len(), 6);
        }
    }

    #[test]
    fn lightness_values_are_in_range() {
        for palette in palettes() {
            for (slot, color) in palette.slots() {
                assert!(
                    (0.0..=1.0).contains(&color.l),
                    "{}.{slot} lightness out of range",
                    palette.name
                );
            }
        }
    }
}
