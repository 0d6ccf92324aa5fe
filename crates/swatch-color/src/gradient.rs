// SPDX-License-Identifier: MIT
//
// Two-stop Oklab gradients sampled at evenly spaced positions.
//
// A gradient of `n` samples places sample `i` at `t = i / (n - 1)`, so the
// first sample is exactly `from` and the last is exactly `to`. Lightness
// scales pick individual samples out of these ramps by index.

use crate::color::Color;

/// A straight line through Oklab between two colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    from: Color,
    to: Color,
}

impl Gradient {
    #[must_use]
    pub const fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }

    /// The color at position `t` (clamped to 0.0–1.0).
    #[must_use]
    pub fn at_position(&self, t: f32) -> Color {
        self.from.mix_oklab(&self.to, t)
    }

    /// Sample `index` out of `count` evenly spaced samples.
    ///
    /// A single-sample gradient is just `from`. Indices past the end are
    /// clamped to `to`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn at(&self, index: usize, count: usize) -> Color {
        if count <= 1 {
            return self.from;
        }
        let last = count - 1;
        let t = index.min(last) as f32 / last as f32;
        self.at_position(t)
    }

    /// All `count` evenly spaced samples, `from` first.
    #[must_use]
    pub fn colors(&self, count: usize) -> Vec<Color> {
        (0..count).map(|i| self.at(i, count)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn primary() -> Color {
        Color::hex("#4e4073").unwrap()
    }

    #[test]
    fn endpoints_are_exact() {
        let ramp = Gradient::new(Color::WHITE, primary()).colors(18);
        assert_eq!(ramp.len(), 18);
        assert_eq!(ramp[0].to_hex(), "#ffffff");
        assert_eq!(ramp[17].to_hex(), "#4e4073");
    }

    #[test]
    fn empty_and_single_sample() {
        let g = Gradient::new(Color::WHITE, primary());
        assert!(g.colors(0).is_empty());
        assert_eq!(g.colors(1), vec![Color::WHITE]);
    }

    #[test]
    fn samples_are_evenly_spaced_in_lightness() {
        let base = primary();
        let ramp = Gradient::new(Color::WHITE, base).colors(8);
        let step = (1.0 - base.l) / 7.0;
        for pair in ramp.windows(2) {
            let delta = pair[0].l - pair[1].l;
            assert!((delta - step).abs() < 1e-4, "uneven step {delta} vs {step}");
        }
    }

    #[test]
    fn dark_ramp_descends_to_black() {
        let ramp = Gradient::new(primary(), Color::BLACK).colors(8);
        assert_eq!(ramp[7].to_hex(), "#000000");
        assert!(ramp.windows(2).all(|p| p[0].l > p[1].l));
    }

    #[test]
    fn at_matches_colors() {
        let g = Gradient::new(Color::WHITE, primary());
        let all = g.colors(28);
        assert_eq!(g.at(2, 28), all[2]);
        assert_eq!(g.at(99, 28).to_hex(), "#4e4073");
    }
}
