use crate::appearance::{AppearanceKind, AppearanceSpec, WidgetKind};
use crate::coords::Direction;
use crate::paint::Color;

/// Identity of a rendered fill strip.
///
/// Every parameter that changes the strip's pixels is part of the key; shade
/// factors are stored as raw bits so equality and hashing are exact.
/// Configuration-wide inputs (shade model, border width, gradient library) are
/// not keyed: changing them clears the cache instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Strip length along the ramp direction.
    pub length: u32,
    /// Resolved fill color (already taken from the shade table).
    pub color: Color,
    pub direction: Direction,
    pub increasing: bool,
    pub kind: AppearanceKind,
    pub selected: bool,
    pub widget: WidgetKind,
    top_bits: u64,
    bottom_bits: u64,
    blend_bits: u64,
    pub sunken: bool,
    pub inverted: bool,
}

impl CacheKey {
    pub fn new(length: u32, color: Color, spec: &AppearanceSpec) -> Self {
        Self {
            length,
            color,
            direction: spec.direction,
            increasing: spec.increasing,
            kind: spec.kind,
            selected: spec.selected,
            widget: spec.widget,
            top_bits: spec.top_shade.to_bits(),
            bottom_bits: spec.bottom_shade.to_bits(),
            blend_bits: spec.selected_blend.to_bits(),
            sunken: spec.sunken,
            inverted: spec.inverted,
        }
    }

    #[inline]
    pub fn top_shade(&self) -> f64 {
        f64::from_bits(self.top_bits)
    }

    #[inline]
    pub fn bottom_shade(&self) -> f64 {
        f64::from_bits(self.bottom_bits)
    }
}
