//! Lightness levels: the eleven discrete steps of every color scale.
//!
//! A level is an index into a precomputed scale, not a continuous
//! parameter. 700 is the base appearance of a color; lower levels are
//! tints toward white, higher levels are shades toward black.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidInputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Lightness {
    L50,
    L100,
    L200,
    L300,
    L400,
    L500,
    L600,
    #[default]
    L700,
    L800,
    L900,
    L1000,
}

impl Lightness {
    pub const COUNT: usize = 11;

    /// Every level, lightest first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::L50, Self::L100, Self::L200, Self::L300, Self::L400, Self::L500,
        Self::L600, Self::L700, Self::L800, Self::L900, Self::L1000,
    ];

    /// The level a reference resolves at when none is given.
    pub const BASE: Self = Self::L700;

    /// The numeric step (50, 100, …, 1000).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::L50 => 50,
            Self::L100 => 100,
            Self::L200 => 200,
            Self::L300 => 300,
            Self::L400 => 400,
            Self::L500 => 500,
            Self::L600 => 600,
            Self::L700 => 700,
            Self::L800 => 800,
            Self::L900 => 900,
            Self::L1000 => 1000,
        }
    }

    /// Position of this level in a scale table (0 for 50, 10 for 1000).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::L50 => 0,
            Self::L100 => 1,
            Self::L200 => 2,
            Self::L300 => 3,
            Self::L400 => 4,
            Self::L500 => 5,
            Self::L600 => 6,
            Self::L700 => 7,
            Self::L800 => 8,
            Self::L900 => 9,
            Self::L1000 => 10,
        }
    }

    /// Look a level up by its numeric step.
    #[must_use]
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.iter().find(|l| l.value() == value).copied()
    }
}

impl fmt::Display for Lightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<u16> for Lightness {
    type Error = InvalidInputError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| InvalidInputError::lightness(value))
    }
}

impl FromStr for Lightness {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(Self::from_value)
            .ok_or_else(|| InvalidInputError::lightness(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputField;

    #[test]
    fn index_matches_position() {
        for (i, level) in Lightness::ALL.iter().enumerate() {
            assert_eq!(level.index(), i, "level {level}");
        }
    }

    #[test]
    fn fifty_and_hundred_do_not_collide() {
        assert_eq!(Lightness::L50.index(), 0);
        assert_eq!(Lightness::L100.index(), 1);
    }

    #[test]
    fn index_table_is_explicit() {
        let indices: Vec<usize> = Lightness::ALL.iter().map(|l| l.index()).collect();
        assert_eq!(indices, (0..Lightness::COUNT).collect::<Vec<_>>());
        assert_eq!(Lightness::L1000.index(), 10);
    }

    #[test]
    fn default_is_base() {
        assert_eq!(Lightness::default(), Lightness::BASE);
        assert_eq!(Lightness::BASE.value(), 700);
    }

    #[test]
    fn ordering_follows_value() {
        assert!(Lightness::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(Lightness::ALL.windows(2).all(|w| w[0].value() < w[1].value()));
    }

    #[test]
    fn try_from_accepts_every_step() {
        for level in Lightness::ALL {
            assert_eq!(Lightness::try_from(level.value()), Ok(level));
        }
    }

    #[test]
    fn off_grid_values_are_rejected() {
        for bad in [0, 25, 150, 750, 1100] {
            let err = Lightness::try_from(bad).unwrap_err();
            assert_eq!(err.field, InputField::Lightness);
            assert_eq!(err.value, bad.to_string());
        }
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("50".parse(), Ok(Lightness::L50));
        assert_eq!(" 1000 ".parse(), Ok(Lightness::L1000));
        assert!("light".parse::<Lightness>().is_err());
        assert!("-100".parse::<Lightness>().is_err());
    }
}
