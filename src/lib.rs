//! Folio - a terminal portfolio viewer
//!
//! Folio renders a personal portfolio from a static JSON content file.
//! At its core sits a persistent theming runtime: light and dark modes
//! plus a surprise mode that draws a random palette and derives a muted
//! tone from it on every activation.

pub mod app;
pub mod content;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{Mode, ThemeEngine};
