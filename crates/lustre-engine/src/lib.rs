//! Lustre appearance engine.
//!
//! Turns a small palette of base colors and a set of style options into the
//! shaded, gradiented fills of widget skins, and memoizes the results.
//!
//! Layers, bottom-up:
//! - `paint`: colors, shade models, shade tables, gradient stops, pixmaps
//! - `render`: strip compositing (two-point ramps, custom and built-in curves)
//! - `appearance`: options and the widget/state → fill resolver
//! - `cache`: the cost-bounded derived-image cache
//! - [`AppearanceEngine`]: the consumer surface tying them together

pub mod appearance;
pub mod cache;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;

mod engine;

pub use engine::{AppearanceEngine, STRIP_THICKNESS};
