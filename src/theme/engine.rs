//! The theme engine
//!
//! A three-state machine over light, dark and surprise. The engine owns
//! the persisted mode, draws surprise palettes from the registry and is
//! the sole writer of the active visual context; everything else holds
//! read handles.

use std::cell::RefCell;
use std::rc::Rc;

use rand::{Rng, RngCore};

use super::color::Oklch;
use super::palette::{self, Palette};
use super::store::ModeStore;
use super::{Mode, ThemeError};

/// Mode applied when nothing valid is persisted
pub const DEFAULT_MODE: Mode = Mode::Dark;

/// Override color slots applied in surprise mode: the six palette slots
/// plus the derived muted tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overrides {
    pub primary: Oklch,
    pub secondary: Oklch,
    pub background: Oklch,
    pub foreground: Oklch,
    pub card: Oklch,
    pub accent: Oklch,
    pub muted: Oklch,
}

impl Overrides {
    fn from_palette(palette: &Palette) -> Self {
        Self {
            primary: palette.primary,
            secondary: palette.secondary,
            background: palette.background,
            foreground: palette.foreground,
            card: palette.card,
            accent: palette.accent,
            muted: derive_muted(palette.background),
        }
    }

    /// Slot name/value pairs, muted last
    pub fn slots(&self) -> [(&'static str, Oklch); 7] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("background", self.background),
            ("foreground", self.foreground),
            ("card", self.card),
            ("accent", self.accent),
            ("muted", self.muted),
        ]
    }
}

/// The fully resolved style values for the current mode.
///
/// This is the active visual context, the only artifact the rest of the
/// application consumes. The engine replaces the whole value on every
/// apply, so readers never observe a partially updated set.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveStyles {
    /// Active mode tag
    pub mode: Mode,
    /// Whether the built-in dark styling is active
    pub dark: bool,
    /// Chosen palette name (surprise mode only)
    pub palette_name: Option<&'static str>,
    /// Chosen palette style label (surprise mode only)
    pub palette_style: Option<&'static str>,
    /// Override color slots (surprise mode only)
    pub overrides: Option<Overrides>,
}

impl EffectiveStyles {
    fn baseline(mode: Mode) -> Self {
        Self {
            mode,
            dark: mode == Mode::Dark,
            palette_name: None,
            palette_style: None,
            overrides: None,
        }
    }

    /// Number of override color slots currently applied
    pub fn override_count(&self) -> usize {
        self.overrides.map_or(0, |o| o.slots().len())
    }
}

impl Default for EffectiveStyles {
    fn default() -> Self {
        Self::baseline(DEFAULT_MODE)
    }
}

/// Compute the muted tone for a palette background.
///
/// The muted lightness stays on the opposite side of mid-gray from the
/// background: backgrounds lighter than 0.5 step down by 0.1, darker
/// ones step up. Chroma and hue are fixed near-neutral constants.
pub fn derive_muted(background: Oklch) -> Oklch {
    let lightness = if background.l > 0.5 { background.l - 0.1 } else { background.l + 0.1 };
    Oklch::new(lightness, 0.01, 0.0)
}

/// The theming runtime: persists the chosen mode and applies the
/// effective style set to the shared visual context.
pub struct ThemeEngine {
    store: Box<dyn ModeStore>,
    rng: Box<dyn RngCore>,
    registry: &'static [Palette],
    context: Rc<RefCell<EffectiveStyles>>,
    mode: Mode,
}

impl ThemeEngine {
    /// Engine over the built-in palette catalogue with a thread-local
    /// random source
    pub fn new(store: Box<dyn ModeStore>) -> Result<Self, ThemeError> {
        Self::with_registry(store, Box::new(rand::thread_rng()), palette::palettes())
    }

    /// Engine with explicit collaborators, for tests and diagnostics.
    ///
    /// Fails fast on an empty registry: an engine with nothing to pick
    /// from is a configuration error, not a runtime branch.
    pub fn with_registry(
        store: Box<dyn ModeStore>,
        rng: Box<dyn RngCore>,
        registry: &'static [Palette],
    ) -> Result<Self, ThemeError> {
        if registry.is_empty() {
            return Err(ThemeError::EmptyRegistry);
        }
        Ok(Self {
            store,
            rng,
            registry,
            context: Rc::new(RefCell::new(EffectiveStyles::baseline(DEFAULT_MODE))),
            mode: DEFAULT_MODE,
        })
    }

    /// Handle to the active visual context. The engine remains the sole
    /// writer; holders only read.
    pub fn context(&self) -> Rc<RefCell<EffectiveStyles>> {
        Rc::clone(&self.context)
    }

    /// Snapshot of the last-applied style set
    pub fn styles(&self) -> EffectiveStyles {
        self.context.borrow().clone()
    }

    /// The last-applied mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Seed the engine from the persisted mode and apply it.
    ///
    /// An absent or unrecognised persisted value falls back to
    /// [`DEFAULT_MODE`], which is then persisted in its place.
    pub fn init(&mut self) -> Mode {
        let stored = match self.store.load() {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Could not read persisted theme mode: {err:#}");
                None
            }
        };
        let mode = match stored.as_deref() {
            Some(value) => value.parse::<Mode>().unwrap_or_else(|_| {
                tracing::debug!("Ignoring unrecognised persisted theme mode {value:?}");
                DEFAULT_MODE
            }),
            None => DEFAULT_MODE,
        };
        self.set_mode(mode);
        mode
    }

    /// Switch to `mode`: persist it, then recompute and apply the
    /// effective style set.
    ///
    /// Re-selecting the current mode is legal and re-runs the full
    /// apply; in surprise mode that draws a fresh palette. A failed
    /// persistence write degrades to in-memory application only.
    pub fn set_mode(&mut self, mode: Mode) {
        if let Err(err) = self.store.save(mode.as_str()) {
            tracing::warn!("Could not persist theme mode {mode}: {err:#}");
        }
        let styles = self.compute(mode);
        self.mode = mode;
        *self.context.borrow_mut() = styles;
    }

    /// Build the effective style set for `mode`
    fn compute(&mut self, mode: Mode) -> EffectiveStyles {
        let mut styles = EffectiveStyles::baseline(mode);
        if mode == Mode::Surprise {
            let palette = self.select_palette();
            styles.palette_name = Some(palette.name);
            styles.palette_style = Some(palette.style);
            styles.overrides = Some(Overrides::from_palette(palette));
        }
        styles
    }

    /// Uniform random pick from the registry, independent per call;
    /// repeats are allowed
    fn select_palette(&mut self) -> &'static Palette {
        let index = self.rng.gen_range(0..self.registry.len());
        &self.registry[index]
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::theme::store::{FileModeStore, MemoryModeStore};

    /// Two-palette registry with backgrounds on both sides of mid-gray
    static TWO_TONE: &[Palette] = &[
        Palette {
            name: "a",
            primary: Oklch::new(0.6, 0.1, 30.0),
            secondary: Oklch::new(0.5, 0.1, 90.0),
            background: Oklch::new(0.2, 0.0, 0.0),
            foreground: Oklch::new(0.9, 0.0, 0.0),
            card: Oklch::new(0.25, 0.0, 0.0),
            accent: Oklch::new(0.7, 0.1, 200.0),
            style: "dim",
        },
        Palette {
            name: "b",
            primary: Oklch::new(0.4, 0.1, 30.0),
            secondary: Oklch::new(0.5, 0.1, 90.0),
            background: Oklch::new(0.9, 0.0, 0.0),
            foreground: Oklch::new(0.2, 0.0, 0.0),
            card: Oklch::new(0.85, 0.0, 0.0),
            accent: Oklch::new(0.3, 0.1, 200.0),
            style: "bright",
        },
    ];

    /// Random source that counts how often it is drawn from
    struct CountingRng {
        draws: Rc<Cell<u64>>,
    }

    impl rand::RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws.set(self.draws.get() + 1);
            0
        }

        fn next_u64(&mut self) -> u64 {
            self.draws.set(self.draws.get() + 1);
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.draws.set(self.draws.get() + 1);
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn seeded_engine(store: Box<dyn ModeStore>) -> ThemeEngine {
        ThemeEngine::with_registry(store, Box::new(StdRng::seed_from_u64(7)), TWO_TONE).unwrap()
    }

    #[test]
    fn empty_registry_is_rejected_at_construction() {
        let result = ThemeEngine::with_registry(
            Box::new(MemoryModeStore::new()),
            Box::new(StdRng::seed_from_u64(0)),
            &[],
        );
        assert!(matches!(result, Err(ThemeError::EmptyRegistry)));
    }

    #[test]
    fn set_mode_persists_every_mode() {
        let store = Rc::new(MemoryModeStore::new());
        let mut engine = seeded_engine(Box::new(Rc::clone(&store)));

        for mode in Mode::ALL {
            engine.set_mode(mode);
            assert_eq!(store.load().unwrap(), Some(mode.as_str().to_string()));
        }
    }

    #[test]
    fn init_without_persisted_value_applies_and_persists_the_default() {
        let store = Rc::new(MemoryModeStore::new());
        let mut engine = seeded_engine(Box::new(Rc::clone(&store)));

        assert_eq!(engine.init(), DEFAULT_MODE);
        assert_eq!(store.load().unwrap(), Some(DEFAULT_MODE.as_str().to_string()));
    }

    #[test]
    fn init_with_unrecognised_value_falls_back_to_the_default() {
        let store = Rc::new(MemoryModeStore::with_value("sepia"));
        let mut engine = seeded_engine(Box::new(Rc::clone(&store)));

        assert_eq!(engine.init(), DEFAULT_MODE);
        assert_eq!(store.load().unwrap(), Some(DEFAULT_MODE.as_str().to_string()));
    }

    #[test]
    fn init_is_idempotent_without_an_intervening_set_mode() {
        let store = Rc::new(MemoryModeStore::with_value("light"));
        let mut engine = seeded_engine(Box::new(Rc::clone(&store)));

        assert_eq!(engine.init(), Mode::Light);
        assert_eq!(engine.init(), Mode::Light);
        assert_eq!(store.load().unwrap(), Some("light".to_string()));
    }

    #[test]
    fn init_with_dark_performs_no_palette_selection() {
        let draws = Rc::new(Cell::new(0));
        let rng = CountingRng { draws: Rc::clone(&draws) };
        let store = Box::new(MemoryModeStore::with_value("dark"));
        let mut engine = ThemeEngine::with_registry(store, Box::new(rng), TWO_TONE).unwrap();

        assert_eq!(engine.init(), Mode::Dark);
        assert_eq!(draws.get(), 0);
    }

    #[test]
    fn derivation_is_deterministic_per_palette() {
        for palette in palette::palettes() {
            assert_eq!(derive_muted(palette.background), derive_muted(palette.background));
        }
    }

    #[test]
    fn surprise_applies_all_palette_slots_plus_muted() {
        let mut engine = seeded_engine(Box::new(MemoryModeStore::new()));

        engine.set_mode(Mode::Surprise);
        let styles = engine.styles();
        let palette_slots = TWO_TONE[0].slots().len();
        assert_eq!(styles.override_count(), palette_slots + 1);

        engine.set_mode(Mode::Light);
        assert_eq!(engine.styles().override_count(), 0);
    }

    #[test]
    fn repeated_surprise_covers_the_registry_with_consistent_muted_values() {
        let mut engine = seeded_engine(Box::new(MemoryModeStore::new()));
        let mut seen_a = false;
        let mut seen_b = false;

        for _ in 0..50 {
            engine.set_mode(Mode::Surprise);
            let styles = engine.styles();
            let muted = styles.overrides.unwrap().muted;
            match styles.palette_name.unwrap() {
                "a" => {
                    seen_a = true;
                    assert!((muted.l - 0.3).abs() < 1e-6);
                }
                "b" => {
                    seen_b = true;
                    assert!((muted.l - 0.8).abs() < 1e-6);
                }
                other => panic!("unexpected palette {other}"),
            }
        }

        assert!(seen_a && seen_b, "50 draws should cover both palettes");
    }

    #[test]
    fn leaving_surprise_clears_every_tag_and_override() {
        let mut engine = seeded_engine(Box::new(MemoryModeStore::new()));

        engine.set_mode(Mode::Dark);
        engine.set_mode(Mode::Light);
        engine.set_mode(Mode::Surprise);
        engine.set_mode(Mode::Dark);

        let styles = engine.styles();
        assert_eq!(styles.mode, Mode::Dark);
        assert!(styles.dark);
        assert_eq!(styles.palette_name, None);
        assert_eq!(styles.palette_style, None);
        assert_eq!(styles.overrides, None);
    }

    #[test]
    fn context_handle_observes_every_apply() {
        let mut engine = seeded_engine(Box::new(MemoryModeStore::new()));
        let context = engine.context();

        engine.set_mode(Mode::Light);
        assert_eq!(context.borrow().mode, Mode::Light);
        assert!(!context.borrow().dark);

        engine.set_mode(Mode::Surprise);
        assert!(context.borrow().overrides.is_some());
    }

    #[test]
    fn persisted_mode_survives_engine_restarts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme-mode");

        let mut first = seeded_engine(Box::new(FileModeStore::at(&path)));
        first.set_mode(Mode::Light);
        drop(first);

        let mut second = seeded_engine(Box::new(FileModeStore::at(&path)));
        assert_eq!(second.init(), Mode::Light);
    }

    #[test]
    fn persistence_failure_still_applies_in_memory() {
        struct BrokenStore;

        impl ModeStore for BrokenStore {
            fn load(&self) -> anyhow::Result<Option<String>> {
                anyhow::bail!("storage unavailable")
            }

            fn save(&self, _value: &str) -> anyhow::Result<()> {
                anyhow::bail!("storage unavailable")
            }
        }

        let mut engine = ThemeEngine::with_registry(
            Box::new(BrokenStore),
            Box::new(StdRng::seed_from_u64(3)),
            TWO_TONE,
        )
        .unwrap();

        assert_eq!(engine.init(), DEFAULT_MODE);
        engine.set_mode(Mode::Surprise);
        assert!(engine.styles().overrides.is_some());
    }

    proptest! {
        #[test]
        fn muted_lightness_stays_in_range_and_opposes_the_background(l in 0.0f32..=1.0) {
            let muted = derive_muted(Oklch::new(l, 0.05, 120.0));
            prop_assert!((0.0..=1.0).contains(&muted.l));
            if l > 0.5 {
                prop_assert!(muted.l < l);
            } else {
                prop_assert!(muted.l > l);
            }
        }
    }
}
