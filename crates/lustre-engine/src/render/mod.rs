//! CPU rasterization of widget fills.
//!
//! Produces 1-D [`Strip`](crate::paint::Strip)s; the engine materializes and
//! tiles them into pixmaps.
//!
//! Convention:
//! - pixel 0 of a strip is the top (vertical) or left (horizontal) edge.
//! - an increasing strip runs from the top shade to the bottom shade.

mod compositor;

pub use compositor::{Compositor, STRIPE_SHADE, STRIPE_WIDTH, composite, composite_custom};
