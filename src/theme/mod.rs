//! Theming runtime for Folio
//!
//! The one stateful corner of the application: a persistent display
//! mode, a fixed catalogue of surprise palettes, and an engine that
//! selects, derives and applies the effective style set.

mod color;
mod engine;
mod palette;
mod store;
mod term;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use color::Oklch;
pub use engine::{DEFAULT_MODE, EffectiveStyles, Overrides, ThemeEngine, derive_muted};
pub use palette::{Palette, palettes};
pub use store::{FileModeStore, MemoryModeStore, ModeStore};
pub use term::TermStyles;

/// Errors from the theming runtime
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A persisted or user-supplied mode string was not recognised
    #[error("unknown theme mode {0:?} (expected light, dark or surprise)")]
    UnknownMode(String),

    /// The engine was constructed with no palettes to choose from
    #[error("palette registry is empty")]
    EmptyRegistry,
}

/// The top-level theming selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
    Surprise,
}

impl Mode {
    /// All modes, in the order the mode switch presents them
    pub const ALL: [Mode; 3] = [Mode::Light, Mode::Dark, Mode::Surprise];

    /// The persisted string form
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
            Mode::Surprise => "surprise",
        }
    }

    /// Display label for the mode switch
    pub fn label(self) -> &'static str {
        match self {
            Mode::Light => "Light",
            Mode::Dark => "Dark",
            Mode::Surprise => "Surprise",
        }
    }

    /// The next mode in presentation order, wrapping around
    pub fn next(self) -> Mode {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Surprise,
            Mode::Surprise => Mode::Light,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            "surprise" => Ok(Mode::Surprise),
            other => Err(ThemeError::UnknownMode(other.to_string())),
        }
    }
}
