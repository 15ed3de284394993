//! Pixel-space geometry shared by the compositor, the cache, and callers.
//!
//! Canonical space:
//! - Integer device pixels
//! - Origin top-left
//! - +X right, +Y down

mod rect;

pub use rect::{Direction, Rect};
