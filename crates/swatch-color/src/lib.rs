// SPDX-License-Identifier: MIT
//
// swatch-color — perceptual color core for the swatch design-system scales.
//
// Colors live in OKLCH, gradients are walked in Cartesian Oklab, and the
// only way out is 8-bit sRGB (hex). The crate has no runtime dependencies;
// everything above it (named colors, lightness levels, caching) lives in
// swatch-palette.

pub mod color;
pub mod gradient;

pub use color::{Color, Oklab};
pub use gradient::Gradient;
