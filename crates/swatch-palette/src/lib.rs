//! # swatch-palette — Design-System Color Scales
//!
//! Turns a small set of named base colors into eleven-step lightness
//! scales and resolves `(color, lightness)` references to hex strings.
//! Everything a component renders goes through one resolver, so the same
//! reference always produces the same color.
//!
//! # Architecture
//!
//! ```text
//! ColorReference (name + optional level) or "primary.700"
//!     │
//!     ▼
//! named.rs:     NamedColor → canonical base (per Revision)
//!     │
//!     ▼
//! palette.rs:   base per color, optionally overridden (config.rs)
//!     │
//!     ▼
//! ramp.rs:      Oklab ramps white→base→black, hand-tuned picks → Scale
//!     │
//!     ▼
//! resolve.rs:   Scale[lightness] → ResolvedColor ("#RRGGBB")
//! ```
//!
//! # Sentinels
//!
//! `white` resolves to `#FFFFFF` and `transparent` to `#FFFFFF00` at every
//! lightness. Neither goes through a ramp.

// Color channel math converts between u8, f32 and f64 constantly.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Single-letter channel names (r, g, b, l) are standard in color code.
#![allow(clippy::many_single_char_names)]

pub mod config;
pub mod contrast;
pub mod error;
pub mod lightness;
pub mod named;
pub mod palette;
pub mod ramp;
pub mod resolve;

pub use config::PaletteConfig;
pub use error::{ConfigError, InputField, InvalidInputError, PaletteError};
pub use lightness::Lightness;
pub use named::NamedColor;
pub use palette::Palette;
pub use ramp::{Revision, Scale};
pub use resolve::{ColorReference, ResolvedColor, Resolver, resolve, resolve_parts, resolve_with};
