//! Theme persistence for the lustre engine.
//!
//! A theme is a TOML document holding the global shading options, the
//! per-widget appearance table, an optional palette and the custom gradient
//! slots. Gradients use a compact `border,pos,value,...` string per slot.

mod document;
mod error;
mod gradient;

pub use document::{PaletteSection, ThemeDocument};
pub use error::{GradientFormatError, Result, ThemeError};
pub use gradient::{format_custom_gradient, parse_custom_gradient};
