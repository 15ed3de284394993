use std::rc::Rc;

use crate::appearance::{
    AppearanceSpec, InteractionFlags, Options, Palette, ShadeSets, WidgetKind, resolve,
};
use crate::cache::{CacheKey, CacheStats, DerivedImageCache};
use crate::coords::{Direction, Rect};
use crate::paint::{Color, CustomGradient, CustomSlot, GradientBorder, GradientStop, Pixmap, Strip};
use crate::render::{Compositor, composite};

/// Thickness of cached strips across their ramp direction.
///
/// Fills are tiled from strips this wide, so wide widgets cost no more cache
/// than narrow ones.
pub const STRIP_THICKNESS: u32 = 16;

/// The consumer-facing surface of the engine.
///
/// Owns the resolved configuration, its shade tables and the derived-image
/// cache. Single threaded: methods take `&mut self` where the cache is touched.
///
/// Any change to options or palette, and any effective edit of a custom
/// gradient, clears the cache. No-op edits leave it alone.
#[derive(Debug)]
pub struct AppearanceEngine {
    options: Options,
    palette: Palette,
    shades: ShadeSets,
    cache: DerivedImageCache,
}

impl Default for AppearanceEngine {
    fn default() -> Self {
        Self::new(Options::default(), Palette::default())
    }
}

impl AppearanceEngine {
    pub fn new(options: Options, palette: Palette) -> Self {
        let options = options.sanitized();
        let shades = ShadeSets::build(&palette, &options);
        let cache = DerivedImageCache::new(options.cache);
        Self { options, palette, shades, cache }
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn shades(&self) -> &ShadeSets {
        &self.shades
    }

    /// Installs new options. Returns whether anything changed.
    pub fn set_options(&mut self, options: Options) -> bool {
        let options = options.sanitized();
        if options == self.options {
            return false;
        }
        self.shades = ShadeSets::build(&self.palette, &options);
        self.cache.set_budget(options.cache.max_bytes);
        self.cache.clear();
        self.options = options;
        true
    }

    /// Installs a new palette. Returns whether anything changed.
    pub fn set_palette(&mut self, palette: Palette) -> bool {
        if palette == self.palette {
            return false;
        }
        self.shades = ShadeSets::build(&palette, &self.options);
        self.cache.clear();
        self.palette = palette;
        true
    }

    #[inline]
    pub fn resolve(
        &self,
        widget: WidgetKind,
        flags: InteractionFlags,
        direction: Direction,
    ) -> AppearanceSpec {
        resolve(widget, flags, direction, &self.options)
    }

    /// Fills `rect` for a widget of color `base` in the given state.
    ///
    /// The returned pixmap has the size of `rect` (zero-sized for an empty rect).
    pub fn render_bevel_fill(
        &mut self,
        base: Color,
        rect: Rect,
        direction: Direction,
        widget: WidgetKind,
        flags: InteractionFlags,
    ) -> Pixmap {
        let spec = self.resolve(widget, flags, direction);
        self.render_spec_fill(base, rect, &spec)
    }

    /// Fills `rect` from an already resolved spec.
    pub fn render_spec_fill(&mut self, base: Color, rect: Rect, spec: &AppearanceSpec) -> Pixmap {
        if rect.is_empty() {
            return Pixmap::new(rect.width, rect.height);
        }
        let strip = self.bevel_strip(base, rect.extent(spec.direction), spec);
        strip.tiled(rect.width, rect.height)
    }

    /// Cached strip image for `spec`, `length` pixels along its direction and
    /// [`STRIP_THICKNESS`] across.
    pub fn bevel_strip(&mut self, base: Color, length: u32, spec: &AppearanceSpec) -> Rc<Pixmap> {
        let table = self.shades.table(spec.source, base);
        let color = table[spec.fill];
        let key = CacheKey::new(length, color, spec);
        let compositor = Compositor::new(&self.options, self.palette.highlight);
        self.cache.get_or_insert_with(key, || {
            log::trace!(
                "render {:?}/{} strip, {length}px {:?}",
                spec.widget,
                spec.kind,
                spec.direction,
            );
            let strip = compositor.composite_bevel(color, length as usize, spec);
            Pixmap::from_strip(&strip, STRIP_THICKNESS)
        })
    }

    /// Uncached two-point ramp (sort indicators, list headers).
    #[inline]
    pub fn render_gradient_strip(
        &self,
        top: Color,
        bottom: Color,
        increasing: bool,
        length: usize,
        direction: Direction,
    ) -> Strip {
        composite(top, bottom, increasing, length, direction)
    }

    // ── gradient editing ──────────────────────────────────────────────────

    pub fn add_stop(&mut self, slot: CustomSlot, pos: f64, value: f64) -> bool {
        let changed = self.options.gradients.add_stop(slot, pos, value);
        self.gradient_edited(slot, changed)
    }

    pub fn remove_stop(&mut self, slot: CustomSlot, pos: f64, value: f64) -> bool {
        let changed = self.options.gradients.remove_stop(slot, pos, value);
        self.gradient_edited(slot, changed)
    }

    pub fn update_stop(
        &mut self,
        slot: CustomSlot,
        old_pos: f64,
        old_value: f64,
        new_pos: f64,
        new_value: f64,
    ) -> bool {
        let changed = self
            .options
            .gradients
            .update_stop(slot, old_pos, old_value, new_pos, new_value);
        self.gradient_edited(slot, changed)
    }

    pub fn set_custom_gradient(&mut self, slot: CustomSlot, gradient: CustomGradient) -> bool {
        let changed = self.options.gradients.set(slot, gradient);
        self.gradient_edited(slot, changed)
    }

    /// Changes only the border style of `slot`; its stops are kept.
    pub fn set_gradient_border(&mut self, slot: CustomSlot, border: GradientBorder) -> bool {
        let changed = self.options.gradients.set_border(slot, border);
        self.gradient_edited(slot, changed)
    }

    #[inline]
    pub fn list_stops(&self, slot: CustomSlot) -> &[GradientStop] {
        self.options.gradients.list_stops(slot)
    }

    fn gradient_edited(&mut self, slot: CustomSlot, changed: bool) -> bool {
        if changed {
            log::debug!("{slot} edited: {} stops", self.options.gradients.list_stops(slot).len());
            self.cache.clear();
        }
        changed
    }

    // ── cache ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
