//! OKLCH color values and their terminal projection
//!
//! Palettes are authored in OKLCH so the muted-tone derivation can work
//! directly on perceptual lightness. Conversion to 24-bit RGB goes
//! through OKLab and linear sRGB.

use std::fmt;

use ratatui::style::Color;

/// A color in OKLCH: lightness in `[0, 1]`, chroma, hue in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

impl Oklch {
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Convert to 24-bit sRGB, clamping out-of-gamut channels
    pub fn to_rgb(self) -> (u8, u8, u8) {
        // OKLCH -> OKLab
        let hue = self.h.to_radians();
        let a = self.c * hue.cos();
        let b = self.c * hue.sin();

        // OKLab -> LMS (cube the non-linear components)
        let l_ = self.l + 0.396_337_78 * a + 0.215_803_76 * b;
        let m_ = self.l - 0.105_561_346 * a - 0.063_854_17 * b;
        let s_ = self.l - 0.089_484_18 * a - 1.291_485_5 * b;
        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        // LMS -> linear sRGB
        let r = 4.076_741_7 * l - 3.307_711_6 * m + 0.230_969_94 * s;
        let g = -1.268_438 * l + 2.609_757_4 * m - 0.341_319_38 * s;
        let b = -0.004_196_086_3 * l - 0.703_418_6 * m + 1.707_614_7 * s;

        (channel(r), channel(g), channel(b))
    }
}

/// Gamma-encode one linear channel and quantize to a byte
fn channel(linear: f32) -> u8 {
    let clamped = linear.clamp(0.0, 1.0);
    let encoded = if clamped >= 0.003_130_8 {
        1.055 * clamped.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * clamped
    };
    (encoded.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<Oklch> for Color {
    fn from(value: Oklch) -> Self {
        let (r, g, b) = value.to_rgb();
        Color::Rgb(r, g, b)
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.4} {:.4} {:.4})", self.l, self.c, self.h)
    }
}
