//! WCAG contrast helpers.
//!
//! Luminance and contrast are measured in sRGB relative luminance (the
//! WCAG definition), never in Oklab lightness.

use swatch_color::Color;
use swatch_color::color::srgb_to_linear;

/// Compute the relative luminance of a color per WCAG 2.1.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = f64::from(srgb_to_linear(r));
    let g_lin = f64::from(srgb_to_linear(g));
    let b_lin = f64::from(srgb_to_linear(b));
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0], independent of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick whichever of `light` and `dark` reads better on `bg`.
///
/// Ties go to `light`.
#[must_use]
pub fn readable_on(bg: Color, light: Color, dark: Color) -> Color {
    if contrast_ratio(light, bg) >= contrast_ratio(dark, bg) {
        light
    } else {
        dark
    }
}
