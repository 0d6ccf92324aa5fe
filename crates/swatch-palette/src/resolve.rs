//! Color resolution: from a color reference to a concrete hex value.
//!
//! [`resolve`] is the pure entry point: it rebuilds the ramps on every call
//! and depends on nothing but its argument. [`Resolver`] resolves against a
//! configured [`Palette`] and memoizes whole scales; for the same palette
//! both paths return identical values.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::trace;
use parking_lot::RwLock;
use serde::{Serialize, Serializer};
use swatch_color::Color;

use crate::contrast::readable_on;
use crate::error::InvalidInputError;
use crate::lightness::Lightness;
use crate::named::NamedColor;
use crate::palette::Palette;
use crate::ramp::{Revision, Scale};

// ---------------------------------------------------------------------------
// ResolvedColor
// ---------------------------------------------------------------------------

/// A concrete 8-bit sRGB color, optionally with alpha.
///
/// Displays as `#RRGGBB`, or `#RRGGBBAA` when it carries alpha. Two resolved
/// colors are equal exactly when their hex strings are.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedColor {
    r: u8,
    g: u8,
    b: u8,
    alpha: Option<u8>,
}

impl ResolvedColor {
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    /// The transparent sentinel, `#FFFFFF00`.
    pub const TRANSPARENT: Self = Self::rgba(0xFF, 0xFF, 0xFF, 0x00);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, alpha: Some(a) }
    }

    /// Quantize a color to 8 bits per channel. Alpha is kept only when the
    /// color is not fully opaque.
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        let (r, g, b, a) = color.to_rgba8();
        if color.is_opaque() {
            Self::rgb(r, g, b)
        } else {
            Self::rgba(r, g, b, a)
        }
    }

    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    #[must_use]
    pub const fn alpha(self) -> Option<u8> {
        self.alpha
    }

    #[must_use]
    pub fn to_color(self) -> Color {
        match self.alpha {
            None => Color::rgb8(self.r, self.g, self.b),
            Some(a) => Color::rgba8(self.r, self.g, self.b, a),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResolvedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b, alpha } = *self;
        match alpha {
            None => write!(f, "#{r:02X}{g:02X}{b:02X}"),
            Some(a) => write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}"),
        }
    }
}

impl fmt::Debug for ResolvedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for ResolvedColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<ResolvedColor> for Color {
    fn from(color: ResolvedColor) -> Self {
        color.to_color()
    }
}

// ---------------------------------------------------------------------------
// ColorReference
// ---------------------------------------------------------------------------

/// What a component asks for: a named color at a lightness, or one of the
/// two unary sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorReference {
    /// A named color; `None` lightness means [`Lightness::BASE`].
    Named {
        color: NamedColor,
        lightness: Option<Lightness>,
    },
    White,
    Transparent,
}

impl ColorReference {
    /// A named color at its base lightness.
    #[must_use]
    pub const fn named(color: NamedColor) -> Self {
        Self::Named { color, lightness: None }
    }

    #[must_use]
    pub const fn at(color: NamedColor, lightness: Lightness) -> Self {
        Self::Named {
            color,
            lightness: Some(lightness),
        }
    }

    /// The lightness this reference resolves at.
    #[must_use]
    pub fn lightness(self) -> Lightness {
        match self {
            Self::Named { lightness, .. } => lightness.unwrap_or_default(),
            Self::White | Self::Transparent => Lightness::BASE,
        }
    }

    /// Whether this reference resolves to the transparent sentinel.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        matches!(
            self,
            Self::Transparent
                | Self::Named {
                    color: NamedColor::Transparent,
                    ..
                }
        )
    }
}

impl From<NamedColor> for ColorReference {
    fn from(color: NamedColor) -> Self {
        Self::named(color)
    }
}

impl From<(NamedColor, Lightness)> for ColorReference {
    fn from((color, lightness): (NamedColor, Lightness)) -> Self {
        Self::at(color, lightness)
    }
}

impl fmt::Display for ColorReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { color, lightness: None } => write!(f, "{color}"),
            Self::Named {
                color,
                lightness: Some(lightness),
            } => write!(f, "{color}.{lightness}"),
            Self::White => f.write_str("white"),
            Self::Transparent => f.write_str("transparent"),
        }
    }
}

/// Accepts `white`, `transparent`, `name`, and `name` followed by `.`, `/`
/// or `-` and a lightness (`primary.700`, `error/50`, `gray-1000`).
impl FromStr for ColorReference {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "white" => return Ok(Self::White),
            "transparent" => return Ok(Self::Transparent),
            _ => {}
        }

        let split = s
            .rsplit_once(['.', '/', '-'])
            .filter(|(_, level)| level.starts_with(|c: char| c.is_ascii_digit()));

        match split {
            Some((name, level)) => Ok(Self::at(name.parse()?, level.parse()?)),
            None => Ok(Self::named(s.parse()?)),
        }
    }
}

// ---------------------------------------------------------------------------
// Pure resolution
// ---------------------------------------------------------------------------

/// Resolve a reference against the canonical palette of the current
/// revision.
///
/// Deterministic and side-effect free. The ramps are rebuilt on every call;
/// use a [`Resolver`] to memoize.
#[must_use]
pub fn resolve(reference: ColorReference) -> ResolvedColor {
    let revision = Revision::default();
    resolve_by(reference, |color| {
        Scale::build(color.canonical(revision).to_color(), revision)
    })
}

/// Resolve a reference against `palette` without caching.
#[must_use]
pub fn resolve_with(palette: &Palette, reference: ColorReference) -> ResolvedColor {
    resolve_by(reference, |color| Scale::for_color(palette, color))
}

/// Resolve a reference given as an untyped name and level.
///
/// # Errors
///
/// [`InvalidInputError`] naming the field when `name` is not a named color
/// (or `white`/`transparent`) or `level` is not one of the eleven steps.
pub fn resolve_parts(name: &str, level: Option<u16>) -> Result<ResolvedColor, InvalidInputError> {
    let reference = match (name.trim().to_lowercase().as_str(), level) {
        ("white", None) => ColorReference::White,
        ("transparent", None) => ColorReference::Transparent,
        (_, None) => ColorReference::named(name.parse()?),
        (_, Some(level)) => ColorReference::at(name.parse()?, Lightness::try_from(level)?),
    };
    Ok(resolve(reference))
}

fn resolve_by(reference: ColorReference, scale: impl FnOnce(NamedColor) -> Scale) -> ResolvedColor {
    if reference.is_transparent() {
        return ResolvedColor::TRANSPARENT;
    }
    match reference {
        ColorReference::Named { color, .. } => scale(color).get(reference.lightness()),
        ColorReference::White | ColorReference::Transparent => ResolvedColor::WHITE,
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// A palette-bound resolver that memoizes scales.
///
/// Safe to share across threads. Readers take the cache lock shared; a miss
/// builds the scale without holding the lock and inserts it afterwards, so
/// two threads racing on the same color both end up with the first
/// inserted (and identical) scale.
#[derive(Debug, Default)]
pub struct Resolver {
    palette: Palette,
    scales: RwLock<HashMap<NamedColor, Scale>>,
}

impl Resolver {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            scales: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn resolve(&self, reference: ColorReference) -> ResolvedColor {
        resolve_by(reference, |color| self.scale(color))
    }

    /// Resolve a reference string such as `primary.700` or `white`.
    ///
    /// # Errors
    ///
    /// [`InvalidInputError`] when the string names an unknown color or
    /// lightness.
    pub fn resolve_str(&self, reference: &str) -> Result<ResolvedColor, InvalidInputError> {
        Ok(self.resolve(reference.parse()?))
    }

    /// All eleven levels of `color`.
    #[must_use]
    pub fn scale(&self, color: NamedColor) -> Scale {
        let cached = self.scales.read().get(&color).copied();
        if let Some(scale) = cached {
            trace!("{color} scale cache hit");
            return scale;
        }

        let built = Scale::for_color(&self.palette, color);
        *self.scales.write().entry(color).or_insert(built)
    }

    /// Text color for content drawn on `background`: white, or the darkest
    /// gray step, whichever has the higher contrast.
    ///
    /// Transparent backgrounds are judged against white, the page color.
    #[must_use]
    pub fn readable_text(&self, background: ColorReference) -> ResolvedColor {
        let bg = if background.is_transparent() {
            ResolvedColor::WHITE
        } else {
            self.resolve(background)
        };
        let dark = self.resolve(ColorReference::at(NamedColor::Gray, Lightness::L1000));
        let pick = readable_on(bg.to_color(), Color::WHITE, dark.to_color());
        if pick == Color::WHITE { ResolvedColor::WHITE } else { dark }
    }

    /// Number of scales currently memoized.
    #[must_use]
    pub fn cached_scales(&self) -> usize {
        self.scales.read().len()
    }

    pub fn clear_cache(&self) {
        self.scales.write().clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
