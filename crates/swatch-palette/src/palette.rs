//! The base color behind every named color.
//!
//! A [`Palette`] starts from the canonical values of a [`Revision`] and may
//! have individual colors overridden (typically from a palette config).
//! The transparent sentinel is fixed.

use swatch_color::Color;

use crate::error::PaletteError;
use crate::named::NamedColor;
use crate::ramp::Revision;

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    revision: Revision,
    bases: [Color; NamedColor::COUNT],
}

impl Palette {
    /// The canonical palette of `revision`.
    #[must_use]
    pub fn new(revision: Revision) -> Self {
        Self {
            revision,
            bases: NamedColor::ALL.map(|color| color.canonical(revision).to_color()),
        }
    }

    #[must_use]
    pub const fn revision(&self) -> Revision {
        self.revision
    }

    /// The base (level 700) color of `color`.
    #[must_use]
    pub const fn base(&self, color: NamedColor) -> Color {
        self.bases[color.index()]
    }

    /// Replace the base of `color`.
    ///
    /// # Errors
    ///
    /// Fails for the transparent sentinel and for translucent bases.
    pub fn set(&mut self, color: NamedColor, base: Color) -> Result<(), PaletteError> {
        if color.is_transparent() {
            return Err(PaletteError::SentinelOverride);
        }
        if !base.is_opaque() {
            return Err(PaletteError::TranslucentBase { color });
        }
        self.bases[color.index()] = base;
        Ok(())
    }

    /// Replace the base of `color` from a hex string.
    ///
    /// # Errors
    ///
    /// As [`set`](Self::set), plus [`PaletteError::InvalidHex`] when `hex`
    /// does not parse.
    pub fn set_hex(&mut self, color: NamedColor, hex: &str) -> Result<(), PaletteError> {
        let base = Color::hex(hex).ok_or_else(|| PaletteError::InvalidHex {
            color,
            value: hex.to_string(),
        })?;
        self.set(color, base)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Revision::default())
    }
}
