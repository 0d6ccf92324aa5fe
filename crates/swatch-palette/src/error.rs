//! Error types for palette construction and runtime-checked references.
//!
//! Typed callers ([`NamedColor`], [`Lightness`](crate::Lightness)) can never
//! hit [`InvalidInputError`]; it only guards references built from strings
//! and integers. Nothing here ever falls back to a default color.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::named::NamedColor;

/// Which part of a color reference was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    NamedColor,
    Lightness,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NamedColor => "named color",
            Self::Lightness => "lightness level",
        })
    }
}

/// A color reference named a color or lightness outside the fixed sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: `{value}`")]
pub struct InvalidInputError {
    pub field: InputField,
    pub value: String,
}

impl InvalidInputError {
    pub fn named_color(value: impl Into<String>) -> Self {
        Self {
            field: InputField::NamedColor,
            value: value.into(),
        }
    }

    pub fn lightness(value: impl ToString) -> Self {
        Self {
            field: InputField::Lightness,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("`{value}` is not a valid hex color for {color}")]
    InvalidHex { color: NamedColor, value: String },

    #[error("base color for {color} must be fully opaque")]
    TranslucentBase { color: NamedColor },

    #[error("the transparent sentinel cannot be overridden")]
    SentinelOverride,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read palette config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid palette config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown revision `{0}`")]
    UnknownRevision(String),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Palette(#[from] PaletteError),
}
