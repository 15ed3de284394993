//! Color model shared by the compositor, the resolver, and callers.
//!
//! Scope:
//! - opaque 8-bit colors and blend helpers (`mid`, `tint`, `mix`)
//! - shade models and contrast shade tables
//! - gradient stop sets and the custom gradient library
//! - pixel buffers (strips and pixmaps)

pub mod color;
pub mod gradient;
pub mod library;
pub mod pixmap;
pub mod shade;
pub mod shade_table;

pub use color::{Color, DEFAULT_TINT_FACTOR, ParseColorError};
pub use gradient::{GradientStop, GradientStopSet};
pub use library::{
    CUSTOM_GRADIENT_SLOTS, CustomGradient, CustomSlot, GradientBorder, GradientLibrary,
};
pub use pixmap::{BYTES_PER_PIXEL, Pixmap, Rgba8, Strip};
pub use shade::{MAX_SHADE, MIN_SHADE, ShadeModel, clamp_shade, shade};
pub use shade_table::{ShadeCurve, ShadeTable};
