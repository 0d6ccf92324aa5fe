// SPDX-License-Identifier: MIT
//
// swatch color system: OKLCH storage with Oklab interpolation.
//
// Single-character variable names (r, g, b, l, c, h, a, s, m) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// Design-system scales are built by walking straight lines through Oklab
// (white → base → black). Colors are stored in OKLCH so lightness, chroma
// and hue stay inspectable, and converted to Cartesian Oklab whenever two
// colors are interpolated.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ hex
//
// Out-of-gamut results are clamped channel-wise when leaving linear sRGB.

use std::fmt;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A perceptual color stored in OKLCH space with alpha transparency.
///
/// OKLCH is the cylindrical form of Björn Ottosson's Oklab space. Equal
/// numerical steps in lightness produce roughly equal visual steps, which
/// is what a lightness scale needs.
///
/// # Examples
///
/// ```
/// use swatch_color::color::Color;
///
/// let primary = Color::hex("#4e4073").unwrap();
///
/// // Halfway between white and the base color, interpolated in Oklab.
/// let tint = Color::WHITE.mix_oklab(&primary, 0.5);
/// assert!(tint.l > primary.l);
///
/// assert_eq!(primary.to_hex(), "#4e4073");
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f32,

    /// Chroma (colorfulness): 0.0 (gray) to ~0.37 (most vivid).
    pub c: f32,

    /// Hue angle in degrees: 0.0 to 360.0.
    pub h: f32,

    /// Alpha (opacity): 0.0 (fully transparent) to 1.0 (fully opaque).
    pub alpha: f32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from OKLCH values.
    ///
    /// - `l`: Lightness, 0.0 to 1.0
    /// - `c`: Chroma, 0.0 to ~0.37
    /// - `h`: Hue angle in degrees, 0.0 to 360.0
    #[inline]
    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h, alpha: 1.0 }
    }

    /// Create a color from OKLCH values with alpha.
    #[inline]
    #[must_use]
    pub const fn oklcha(l: f32, c: f32, h: f32, alpha: f32) -> Self {
        Self { l, c, h, alpha }
    }

    /// Create a color from sRGB values (0.0 to 1.0 range).
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        Self::srgba(r, g, b, 1.0)
    }

    /// Create a color from sRGB values with alpha.
    #[must_use]
    pub fn srgba(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        let lab = linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
        Self::from_oklab(lab).with_alpha(alpha)
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Create a color from 8-bit sRGB values with alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::srgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Create a color from a hex string.
    ///
    /// Supports: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (with or without `#`).
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Create an opaque color from Cartesian Oklab coordinates.
    #[must_use]
    pub fn from_oklab(lab: Oklab) -> Self {
        let (c, h) = oklab_ab_to_oklch(lab.a, lab.b);
        Self::oklch(lab.l, c, h)
    }

    /// Pure black.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    /// Fully transparent white.
    pub const TRANSPARENT: Self = Self::oklcha(1.0, 0.0, 0.0, 0.0);

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Whether this color is fully opaque (alpha >= 1.0).
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Whether this color is fully transparent (alpha <= 0.0).
    #[inline]
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    /// Whether this color is achromatic (no visible chroma).
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-5
    }

    // ─── Interpolation ───────────────────────────────────────────────────

    /// Mix this color with another along a straight line in Oklab.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`. Unlike a mix in
    /// OKLCH this never travels around the hue wheel, so a white → color
    /// ramp keeps the base hue all the way and only gains chroma.
    #[must_use]
    pub fn mix_oklab(self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;
        let from = self.to_oklab();
        let to = other.to_oklab();

        let lab = Oklab {
            l: from.l.mul_add(inv_t, to.l * t),
            a: from.a.mul_add(inv_t, to.a * t),
            b: from.b.mul_add(inv_t, to.b * t),
        };
        Self::from_oklab(lab).with_alpha(self.alpha.mul_add(inv_t, other.alpha * t))
    }

    /// Compute the perceptual distance to another color.
    ///
    /// Euclidean distance in Oklab (Delta E OK). Values below ~0.02 are
    /// generally imperceptible.
    #[must_use]
    pub fn distance(self, other: &Self) -> f32 {
        let p = self.to_oklab();
        let q = other.to_oklab();
        let dl = p.l - q.l;
        let da = p.a - q.a;
        let db = p.b - q.b;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to Cartesian Oklab.
    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        let (a, b) = oklch_to_oklab_ab(self.c, self.h);
        Oklab { l: self.l, a, b }
    }

    /// Convert to sRGB with gamut mapping (values clamped to 0.0–1.0).
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let lab = self.to_oklab();
        let (lr, lg, lb) = oklab_to_linear_srgb(lab.l, lab.a, lab.b);
        (
            linear_to_srgb(lr).clamp(0.0, 1.0),
            linear_to_srgb(lg).clamp(0.0, 1.0),
            linear_to_srgb(lb).clamp(0.0, 1.0),
        )
    }

    /// Convert to 8-bit sRGB with gamut mapping.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to 8-bit sRGBA with gamut mapping.
    #[must_use]
    pub fn to_rgba8(self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb8();
        (r, g, b, to_u8(self.alpha.clamp(0.0, 1.0)))
    }

    /// Convert to hex string (`#rrggbb` or `#rrggbbaa` if alpha < 1.0).
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
        } else {
            write!(
                f,
                "Color::oklcha({:.4}, {:.4}, {:.1}, {:.2})",
                self.l, self.c, self.h, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f32 = 1e-5;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.alpha - other.alpha).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Oklab ───────────────────────────────────────────────────────────────────

/// Cartesian Oklab coordinates.
///
/// `l` is perceptual lightness; `a` runs green → red and `b` blue → yellow.
/// This is the space gradients are interpolated in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

// ─── Color Space Conversion Functions ────────────────────────────────────────
//
// These implement the Oklab color space math created by Björn Ottosson.
// Reference: https://bottosson.github.io/posts/oklab/

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Convert OKLCH chroma and hue to Oklab a, b components.
#[inline]
fn oklch_to_oklab_ab(c: f32, h: f32) -> (f32, f32) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

/// Convert Oklab a, b components to OKLCH chroma and hue.
#[inline]
fn oklab_ab_to_oklch(a: f32, b: f32) -> (f32, f32) {
    let c = a.hypot(b);
    let h = if c < 1e-8 {
        0.0 // achromatic, hue undefined
    } else {
        let h = b.atan2(a).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    };
    (c, h)
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// The conversion goes through an intermediate LMS (cone response) space.
// Matrices from Björn Ottosson's Oklab reference.

/// Convert Oklab (L, a, b) to linear sRGB.
#[inline]
fn oklab_to_linear_srgb(l_ok: f32, a: f32, b: f32) -> (f32, f32, f32) {
    // Oklab → LMS (cube roots)
    let l_ = 0.215_803_76f32.mul_add(b, 0.396_337_78f32.mul_add(a, l_ok));
    let m_ = 0.063_854_17f32.mul_add(-b, 0.105_561_346f32.mul_add(-a, l_ok));
    let s_ = 1.291_485_5f32.mul_add(-b, 0.089_484_18f32.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → Linear sRGB
    let r = 0.230_969_94f32.mul_add(s, 4.076_741_7f32.mul_add(l, -(3.307_711_6 * m)));
    let g = 0.341_319_38f32.mul_add(-s, (-1.268_438f32).mul_add(l, 2.609_757_4 * m));
    let bl = 1.707_614_7f32.mul_add(s, (-0.004_196_086_3f32).mul_add(l, -(0.703_418_6 * m)));

    (r, g, bl)
}

/// Convert linear sRGB to Oklab.
#[inline]
fn linear_srgb_to_oklab(r: f32, g: f32, b: f32) -> Oklab {
    // Linear sRGB → LMS
    let l = 0.051_445_995f32.mul_add(b, 0.412_221_47f32.mul_add(r, 0.536_332_55 * g));
    let m = 0.107_396_96f32.mul_add(b, 0.211_903_5f32.mul_add(r, 0.680_699_5 * g));
    let s = 0.629_978_7f32.mul_add(b, 0.088_302_46f32.mul_add(r, 0.281_718_84 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    Oklab {
        l: 0.004_072_047f32.mul_add(-s_, 0.210_454_26f32.mul_add(l_, 0.793_617_8 * m_)),
        a: 0.450_593_7f32.mul_add(s_, 1.977_998_5f32.mul_add(l_, -(2.428_592_2 * m_))),
        b: 0.808_675_77f32.mul_add(-s_, 0.025_904_037f32.mul_add(l_, 0.782_771_77 * m_)),
    }
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RGBA
        4 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            let a = parse_hex_digit(bytes[3])?;
            Some(Color::rgba8(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        // #RRGGBBAA
        8 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            let a = parse_hex_byte(&bytes[6..8])?;
            Some(Color::rgba8(r, g, b, a))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    // clamp keeps the value in 0.0..=255.0 before truncation
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    // Helper: assert RGB values are close (within ±1 out of 255).
    fn assert_rgb8_close(actual: (u8, u8, u8), expected: (u8, u8, u8)) {
        let (ar, ag, ab) = actual;
        let (er, eg, eb) = expected;
        assert!(
            ar.abs_diff(er) <= 1 && ag.abs_diff(eg) <= 1 && ab.abs_diff(eb) <= 1,
            "RGB mismatch: got ({ar}, {ag}, {ab}), expected ({er}, {eg}, {eb})"
        );
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn srgb_to_oklch_roundtrip() {
        let test_colors: [(f32, f32, f32); 8] = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 1.0, 0.0),
            (0.0, 1.0, 1.0),
            (1.0, 0.0, 1.0),
            (1.0, 1.0, 1.0),
            (0.0, 0.0, 0.0),
        ];

        for (r, g, b) in test_colors {
            let color = Color::srgb(r, g, b);
            let (rr, rg, rb) = color.to_srgb();
            assert!(
                approx_eq(r, rr, 0.005) && approx_eq(g, rg, 0.005) && approx_eq(b, rb, 0.005),
                "Roundtrip failed for ({r}, {g}, {b}): got ({rr:.4}, {rg:.4}, {rb:.4})"
            );
        }
    }

    #[test]
    fn design_hexes_roundtrip_exactly() {
        for hex in ["#4e4073", "#c62828", "#2e8540", "#d98e04", "#6b7280", "#1f9aa3"] {
            assert_eq!(Color::hex(hex).unwrap().to_hex(), hex);
        }
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::hex("#ff8000").unwrap();
        assert_rgb8_close(color.to_rgb8(), (255, 128, 0));
        assert!(color.is_opaque());
    }

    #[test]
    fn hex_parsing_short() {
        let color = Color::hex("#f80").unwrap();
        assert_rgb8_close(color.to_rgb8(), (255, 136, 0));
    }

    #[test]
    fn hex_parsing_with_alpha() {
        let color = Color::hex("#FFFFFF00").unwrap();
        assert!(color.is_transparent());
        assert_eq!(color.to_hex(), "#ffffff00");
    }

    #[test]
    fn hex_parsing_uppercase_no_hash() {
        let color = Color::hex("4E4073").unwrap();
        assert_eq!(color.to_rgb8(), (0x4e, 0x40, 0x73));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Color::hex("xyz").is_none());
        assert!(Color::hex("#12345").is_none());
        assert!(Color::hex("#gg0000").is_none());
        assert!(Color::hex("").is_none());
    }

    // ── Known Values ─────────────────────────────────────────────────────

    #[test]
    fn white_is_full_lightness() {
        let white = Color::srgb(1.0, 1.0, 1.0);
        assert!(approx_eq(white.l, 1.0, 0.001));
        assert!(approx_eq(white.c, 0.0, 0.001));
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn black_is_zero_lightness() {
        let black = Color::srgb(0.0, 0.0, 0.0);
        assert!(approx_eq(black.l, 0.0, 0.001));
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn transparent_keeps_white_channels() {
        assert_eq!(Color::TRANSPARENT.to_rgba8(), (255, 255, 255, 0));
    }

    // ── Oklab ────────────────────────────────────────────────────────────

    #[test]
    fn oklab_of_white_is_neutral() {
        let lab = Color::WHITE.to_oklab();
        assert!(approx_eq(lab.l, 1.0, 1e-6));
        assert!(approx_eq(lab.a, 0.0, 1e-6));
        assert!(approx_eq(lab.b, 0.0, 1e-6));
    }

    #[test]
    fn from_oklab_matches_to_oklab() {
        let color = Color::hex("#2f6fde").unwrap();
        let back = Color::from_oklab(color.to_oklab());
        assert_eq!(back.to_hex(), "#2f6fde");
    }

    // ── Mix ──────────────────────────────────────────────────────────────

    #[test]
    fn mix_endpoints_are_exact() {
        let base = Color::hex("#c62828").unwrap();
        assert_eq!(Color::WHITE.mix_oklab(&base, 0.0).to_hex(), "#ffffff");
        assert_eq!(Color::WHITE.mix_oklab(&base, 1.0).to_hex(), "#c62828");
        assert_eq!(base.mix_oklab(&Color::BLACK, 1.0).to_hex(), "#000000");
    }

    #[test]
    fn mix_is_linear_in_oklab_lightness() {
        let base = Color::hex("#4e4073").unwrap();
        let mid = Color::WHITE.mix_oklab(&base, 0.5);
        assert!(approx_eq(mid.l, (1.0 + base.l) * 0.5, 1e-5));
    }

    #[test]
    fn mix_toward_white_keeps_hue() {
        let base = Color::hex("#2f9e62").unwrap();
        let tint = Color::WHITE.mix_oklab(&base, 0.3);
        assert!(hue_diff(tint.h, base.h) < 0.01, "hue drifted: {} vs {}", tint.h, base.h);
        assert!(tint.c < base.c);
    }

    #[test]
    fn mix_clamps_t() {
        let base = Color::hex("#e0702d").unwrap();
        assert_eq!(Color::WHITE.mix_oklab(&base, 2.0).to_hex(), base.to_hex());
        assert_eq!(Color::WHITE.mix_oklab(&base, -1.0).to_hex(), "#ffffff");
    }

    #[test]
    fn mix_interpolates_alpha() {
        let mixed = Color::TRANSPARENT.mix_oklab(&Color::WHITE, 0.5);
        assert!(approx_eq(mixed.alpha, 0.5, 1e-6));
    }

    // ── Distance ─────────────────────────────────────────────────────────

    #[test]
    fn identical_colors_have_zero_distance() {
        let a = Color::oklch(0.5, 0.1, 90.0);
        assert!(a.distance(&a) < 0.001);
    }

    #[test]
    fn black_white_have_large_distance() {
        let dist = Color::BLACK.distance(&Color::WHITE);
        assert!(dist > 0.9, "Black-white distance was {dist}");
    }

    // ── Equality / Display ───────────────────────────────────────────────

    #[test]
    fn color_equality_achromatic_ignores_hue() {
        let a = Color::oklch(0.5, 0.0, 0.0);
        let b = Color::oklch(0.5, 0.0, 180.0);
        assert_eq!(a, b);
    }

    #[test]
    fn color_display_hex() {
        let red = Color::srgb(1.0, 0.0, 0.0);
        assert_eq!(format!("{red}"), "#ff0000");
    }

    #[test]
    fn color_debug_format() {
        let dbg = format!("{:?}", Color::oklch(0.5, 0.1, 90.0));
        assert!(dbg.starts_with("Color::oklch("));
        let dbg = format!("{:?}", Color::TRANSPARENT);
        assert!(dbg.starts_with("Color::oklcha("));
    }
}
