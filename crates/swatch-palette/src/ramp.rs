//! Ramp profiles: how a base color becomes an eleven-step scale.
//!
//! ```text
//! white ──── light ramp (N samples) ────▶ base ── dark ramp (M samples) ──▶ black
//!   50  100  200  300  400  500  600      700     800  900  1000
//! ```
//!
//! Each level is one sample picked out of a ramp by a hand-tuned index.
//! The tables were tuned visually against rendered swatches; they are data,
//! not a formula, and must stay that way.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use serde::ser::SerializeMap;
use swatch_color::{Color, Gradient};

use crate::error::ConfigError;
use crate::lightness::Lightness;
use crate::named::NamedColor;
use crate::palette::Palette;
use crate::resolve::ResolvedColor;

// ---------------------------------------------------------------------------
// Revision
// ---------------------------------------------------------------------------

/// Which generation of the scale tables (and status colors) to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Revision {
    /// Light 18 / dark 8 sampling.
    Legacy,
    /// Fine 28 / light 18 / dark 8 sampling, with a finer start near white.
    #[default]
    Current,
}

impl Revision {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Current => "current",
        }
    }

    /// Parse a revision from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|r| r.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Legacy, Self::Current]
    }

    /// The sampling profile of this revision.
    #[must_use]
    pub const fn profile(self) -> &'static RampProfile {
        match self {
            Self::Legacy => &LEGACY,
            Self::Current => &CURRENT,
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Revision {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ConfigError::UnknownRevision(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// RampProfile
// ---------------------------------------------------------------------------

/// One of the three ramps a scale is sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ramp {
    /// White → base, densely sampled; only the palest tints come from here.
    Fine,
    /// White → base.
    Light,
    /// Base → black.
    Dark,
}

/// A ramp and the sample index taken from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub ramp: Ramp,
    pub index: usize,
}

const fn fine(index: usize) -> Pick {
    Pick { ramp: Ramp::Fine, index }
}

const fn light(index: usize) -> Pick {
    Pick { ramp: Ramp::Light, index }
}

const fn dark(index: usize) -> Pick {
    Pick { ramp: Ramp::Dark, index }
}

/// Sample counts per ramp plus the level → sample table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RampProfile {
    /// Samples in the fine light ramp (0 when unused).
    pub fine_samples: usize,
    pub light_samples: usize,
    pub dark_samples: usize,
    /// One pick per [`Lightness`], lightest first.
    pub picks: [Pick; Lightness::COUNT],
}

impl RampProfile {
    /// The pick for a lightness level.
    #[must_use]
    pub const fn pick(&self, lightness: Lightness) -> Pick {
        self.picks[lightness.index()]
    }

    const fn samples(&self, ramp: Ramp) -> usize {
        match ramp {
            Ramp::Fine => self.fine_samples,
            Ramp::Light => self.light_samples,
            Ramp::Dark => self.dark_samples,
        }
    }
}

static LEGACY: RampProfile = RampProfile {
    fine_samples: 0,
    light_samples: 18,
    dark_samples: 8,
    picks: [
        light(2), light(3), light(5), light(8), light(10), light(12), light(14), light(17),
        dark(1), dark(2), dark(3),
    ],
};

static CURRENT: RampProfile = RampProfile {
    fine_samples: 28,
    light_samples: 18,
    dark_samples: 8,
    picks: [
        fine(1), fine(2),
        light(6), light(8), light(10), light(12), light(14), light(17),
        dark(1), dark(2), dark(3),
    ],
};

// ---------------------------------------------------------------------------
// Scale
// ---------------------------------------------------------------------------

/// The eleven resolved steps of one color, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale([ResolvedColor; Lightness::COUNT]);

impl Scale {
    /// Sample the ramps of `base` according to `revision`.
    #[must_use]
    pub fn build(base: Color, revision: Revision) -> Self {
        let profile = revision.profile();
        let ramps = [
            Gradient::new(Color::WHITE, base).colors(profile.samples(Ramp::Fine)),
            Gradient::new(Color::WHITE, base).colors(profile.samples(Ramp::Light)),
            Gradient::new(base, Color::BLACK).colors(profile.samples(Ramp::Dark)),
        ];

        Self(profile.picks.map(|pick| {
            let ramp = match pick.ramp {
                Ramp::Fine => &ramps[0],
                Ramp::Light => &ramps[1],
                Ramp::Dark => &ramps[2],
            };
            ResolvedColor::from_color(ramp[pick.index])
        }))
    }

    /// The scale of a named color in `palette`. The transparent sentinel
    /// is the same at every level.
    #[must_use]
    pub fn for_color(palette: &Palette, color: NamedColor) -> Self {
        if color.is_transparent() {
            return Self::uniform(ResolvedColor::TRANSPARENT);
        }
        debug!("building {color} scale ({} revision)", palette.revision());
        Self::build(palette.base(color), palette.revision())
    }

    /// A scale with the same color at every level.
    #[must_use]
    pub const fn uniform(color: ResolvedColor) -> Self {
        Self([color; Lightness::COUNT])
    }

    #[must_use]
    pub const fn get(&self, lightness: Lightness) -> ResolvedColor {
        self.0[lightness.index()]
    }

    /// Levels paired with their colors, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Lightness, ResolvedColor)> + '_ {
        Lightness::ALL.into_iter().zip(self.0.iter().copied())
    }

    #[must_use]
    pub const fn as_slice(&self) -> &[ResolvedColor] {
        &self.0
    }
}

/// Space-separated hex values, lightest first.
impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

/// Serializes as a `level → hex` map in ascending level order.
impl Serialize for Scale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Lightness::COUNT))?;
        for (level, color) in self.iter() {
            map.serialize_entry(&level.value(), &color)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hexes(scale: &Scale) -> Vec<String> {
        scale.as_slice().iter().map(|c| c.to_hex()).collect()
    }

    // ── Profiles ────────────────────────────────────────────────────

    #[test]
    fn every_pick_is_inside_its_ramp() {
        for &rev in Revision::all() {
            let profile = rev.profile();
            for pick in profile.picks {
                assert!(
                    pick.index < profile.samples(pick.ramp),
                    "{rev}: {pick:?} past the end of its ramp"
                );
            }
        }
    }

    #[test]
    fn base_level_is_the_last_light_sample() {
        for &rev in Revision::all() {
            let profile = rev.profile();
            assert_eq!(
                profile.pick(Lightness::BASE),
                light(profile.light_samples - 1),
                "{rev}"
            );
        }
    }

    #[test]
    fn current_table_matches_tuning() {
        let picks = Revision::Current.profile().picks;
        assert_eq!(picks[0], fine(1));
        assert_eq!(picks[1], fine(2));
        assert_eq!(picks[2], light(6));
        assert_eq!(picks[10], dark(3));
    }

    #[test]
    fn legacy_table_matches_tuning() {
        let indices: Vec<usize> = Revision::Legacy.profile().picks.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![2, 3, 5, 8, 10, 12, 14, 17, 1, 2, 3]);
    }

    // ── Revision ────────────────────────────────────────────────────

    #[test]
    fn revision_names_roundtrip() {
        for &rev in Revision::all() {
            assert_eq!(rev.name().parse::<Revision>().unwrap(), rev);
        }
        assert_eq!(Revision::default(), Revision::Current);
    }

    #[test]
    fn unknown_revision_is_an_error() {
        let err = "v3".parse::<Revision>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRevision(ref name) if name == "v3"));
    }

    // ── Scale ───────────────────────────────────────────────────────

    #[test]
    fn scale_anchors_on_base_at_700() {
        for &rev in Revision::all() {
            let scale = Scale::build(Color::hex("#4E4073").unwrap(), rev);
            assert_eq!(scale.get(Lightness::L700).to_hex(), "#4E4073");
        }
    }

    #[test]
    fn legacy_and_current_share_the_middle() {
        let base = Color::hex("#4E4073").unwrap();
        let legacy = hexes(&Scale::build(base, Revision::Legacy));
        let current = hexes(&Scale::build(base, Revision::Current));
        // 300 through 1000 come from the same samples.
        assert_eq!(legacy[3..], current[3..]);
        assert_ne!(legacy[0], current[0]);
    }

    #[test]
    fn legacy_primary_golden() {
        let scale = Scale::build(Color::hex("#4E4073").unwrap(), Revision::Legacy);
        assert_eq!(
            hexes(&scale),
            vec![
                "#E8E7EE", "#DDDBE6", "#C7C3D5", "#A7A1BC", "#928AAC", "#7E759B",
                "#6A5F8B", "#4E4073", "#3E325C", "#2E2547", "#201932",
            ]
        );
    }

    #[test]
    fn uniform_scale() {
        let scale = Scale::uniform(ResolvedColor::TRANSPARENT);
        assert!(scale.iter().all(|(_, c)| c == ResolvedColor::TRANSPARENT));
    }

    #[test]
    fn transparent_scale_skips_ramps() {
        let scale = Scale::for_color(&Palette::default(), NamedColor::Transparent);
        assert_eq!(scale, Scale::uniform(ResolvedColor::TRANSPARENT));
    }

    #[test]
    fn iter_pairs_levels_in_order() {
        let scale = Scale::for_color(&Palette::default(), NamedColor::Teal);
        let levels: Vec<u16> = scale.iter().map(|(l, _)| l.value()).collect();
        assert_eq!(levels, vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1000]);
    }

    #[test]
    fn display_joins_hexes() {
        let scale = Scale::uniform(ResolvedColor::WHITE);
        assert_eq!(scale.to_string(), vec!["#FFFFFF"; 11].join(" "));
    }
}
