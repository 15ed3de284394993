//! Appearance resolution.
//!
//! Maps a widget, its interaction state and the global [`Options`] to an
//! [`AppearanceSpec`]: which curve to draw, from which shade table, and in which
//! orientation. Everything here is a pure function of its inputs.

mod kind;
mod options;
mod resolve;
mod shade_sets;

pub use kind::{AppearanceKind, BandLayout, InnerBands, UnknownAppearance, WidgetKind};
pub use options::{
    Appearances, DEFAULT_HIGHLIGHT_FACTOR, DefaultIndicator, HIGHLIGHT_FACTOR_RANGE, MouseOver,
    Options, Palette,
};
pub use resolve::{AppearanceSpec, InteractionFlags, ShadeSource, resolve};
pub use shade_sets::ShadeSets;
