//! Palette configuration files.
//!
//! ```toml
//! revision = "legacy"        # optional, defaults to "current"
//!
//! [colors]                   # optional base overrides (level 700)
//! primary = "#B3261E"
//! blue = "#1E5BC6"
//! ```
//!
//! Unknown keys are rejected rather than ignored, so a typo in a color
//! name or section never silently falls back to the canonical palette.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::named::NamedColor;
use crate::palette::Palette;
use crate::ramp::Revision;
use crate::resolve::Resolver;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteConfig {
    #[serde(default)]
    pub revision: Revision,
    /// Color name → base hex. Names are checked when the palette is built.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

impl PaletteConfig {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed TOML, unknown keys or an
    /// unknown revision name.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Build the palette this config describes.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidInput`] for an unknown color name,
    /// [`ConfigError::Palette`] for a bad or disallowed override.
    pub fn to_palette(&self) -> Result<Palette, ConfigError> {
        let mut palette = Palette::new(self.revision);
        for (name, hex) in &self.colors {
            let color: NamedColor = name.parse()?;
            palette.set_hex(color, hex)?;
            debug!("palette override: {color} = {hex}");
        }
        Ok(palette)
    }

    /// A caching resolver over [`to_palette`](Self::to_palette).
    ///
    /// # Errors
    ///
    /// As [`to_palette`](Self::to_palette).
    pub fn to_resolver(&self) -> Result<Resolver, ConfigError> {
        Ok(Resolver::new(self.to_palette()?))
    }
}
