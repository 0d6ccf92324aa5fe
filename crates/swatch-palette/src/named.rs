//! Named colors: the fixed brand, semantic and categorical identifiers.
//!
//! Every named color is bound to one canonical sRGB value per [`Revision`].
//! The revisions only disagree on the three status colors (success,
//! warning, error); everything else is shared.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidInputError;
use crate::ramp::Revision;
use crate::resolve::ResolvedColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedColor {
    // ── Brand ─────────────────────────────────────────────────
    Primary,
    Secondary,

    // ── Status ────────────────────────────────────────────────
    Success,
    Warning,
    Error,

    /// The transparent sentinel. Resolves to itself at every lightness.
    Transparent,

    // ── Categorical (chart series, tags, avatars) ─────────────
    Blue,
    Green,
    Orange,
    Pink,
    Purple,
    Teal,
    Yellow,
    Red,
    Gray,
}

impl NamedColor {
    pub const COUNT: usize = 15;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Primary, Self::Secondary,
        Self::Success, Self::Warning, Self::Error,
        Self::Transparent,
        Self::Blue, Self::Green, Self::Orange, Self::Pink, Self::Purple,
        Self::Teal, Self::Yellow, Self::Red, Self::Gray,
    ];

    const CATEGORICAL: [Self; 9] = [
        Self::Blue, Self::Orange, Self::Green, Self::Purple, Self::Teal,
        Self::Pink, Self::Yellow, Self::Red, Self::Gray,
    ];

    /// Position in [`NamedColor::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// All named colors, in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// The categorical colors in chart-series order.
    #[must_use]
    pub const fn categorical() -> &'static [Self] {
        &Self::CATEGORICAL
    }

    /// Color for the `i`-th data series, cycling through [`categorical`](Self::categorical).
    #[must_use]
    pub const fn series(i: usize) -> Self {
        Self::CATEGORICAL[i % Self::CATEGORICAL.len()]
    }

    #[must_use]
    pub const fn is_transparent(self) -> bool {
        matches!(self, Self::Transparent)
    }

    /// Kebab-case name, as used in configuration files and references.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Transparent => "transparent",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Teal => "teal",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }

    /// Parse a color from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::ALL.iter().find(|c| c.name() == lower).copied()
    }

    /// The canonical value of this color in the given revision.
    #[must_use]
    pub const fn canonical(self, revision: Revision) -> ResolvedColor {
        let (r, g, b) = match (self, revision) {
            (Self::Transparent, _) => return ResolvedColor::TRANSPARENT,
            (Self::Primary, _) => (0x4E, 0x40, 0x73),
            (Self::Secondary, _) => (0x3F, 0x7C, 0xAC),

            (Self::Success, Revision::Legacy) => (0x3B, 0xA5, 0x5C),
            (Self::Success, Revision::Current) => (0x2E, 0x85, 0x40),
            (Self::Warning, Revision::Legacy) => (0xF0, 0xB4, 0x29),
            (Self::Warning, Revision::Current) => (0xD9, 0x8E, 0x04),
            (Self::Error, Revision::Legacy) => (0xE5, 0x39, 0x35),
            (Self::Error, Revision::Current) => (0xC6, 0x28, 0x28),

            (Self::Blue, _) => (0x2F, 0x6F, 0xDE),
            (Self::Green, _) => (0x2F, 0x9E, 0x62),
            (Self::Orange, _) => (0xE0, 0x70, 0x2D),
            (Self::Pink, _) => (0xD4, 0x48, 0x7F),
            (Self::Purple, _) => (0x7B, 0x4F, 0xC9),
            (Self::Teal, _) => (0x1F, 0x9A, 0xA3),
            (Self::Yellow, _) => (0xC9, 0xA2, 0x27),
            (Self::Red, _) => (0xD2, 0x3C, 0x3C),
            (Self::Gray, _) => (0x6B, 0x72, 0x80),
        };
        ResolvedColor::rgb(r, g, b)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedColor {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| InvalidInputError::named_color(s))
    }
}
