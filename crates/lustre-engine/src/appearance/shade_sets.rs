use std::hash::BuildHasherDefault;
use std::num::NonZeroUsize;
use std::rc::Rc;

use lru::LruCache;
use rustc_hash::FxHasher;

use crate::paint::{Color, DEFAULT_TINT_FACTOR, ShadeCurve, ShadeModel, ShadeTable};

use super::options::{DefaultIndicator, Options, Palette};
use super::resolve::ShadeSource;

/// Most tables kept for base colors outside the palette.
pub const AD_HOC_TABLES: usize = 64;

/// Builds and deduplicates shade tables for one model, curve and hover factor.
///
/// Holds at most [`AD_HOC_TABLES`] tables; the least recently used one is
/// dropped first. Palette role tables stay alive through [`ShadeSets`].
#[derive(Debug)]
struct TableInterner {
    model: ShadeModel,
    curve: ShadeCurve,
    highlight: f64,
    tables: LruCache<Color, Rc<ShadeTable>, BuildHasherDefault<FxHasher>>,
}

impl TableInterner {
    fn new(model: ShadeModel, curve: ShadeCurve, highlight: f64) -> Self {
        let cap = NonZeroUsize::new(AD_HOC_TABLES).unwrap_or(NonZeroUsize::MIN);
        Self {
            model,
            curve,
            highlight,
            tables: LruCache::with_hasher(cap, BuildHasherDefault::default()),
        }
    }

    fn intern(&mut self, base: Color) -> Rc<ShadeTable> {
        if let Some(table) = self.tables.get(&base) {
            return Rc::clone(table);
        }
        let table = Rc::new(ShadeTable::build(base, self.model, &self.curve, self.highlight));
        self.tables.put(base, Rc::clone(&table));
        table
    }
}

/// Every shade table the engine paints from, built once per configuration.
///
/// Tables are interned by base color: two roles whose base colors coincide
/// (say, mouse-over and default-button when both tint the same button color)
/// hold the same `Rc`, so the table is computed once.
#[derive(Debug)]
pub struct ShadeSets {
    interner: TableInterner,
    palette: Palette,
    pub button: Rc<ShadeTable>,
    pub window: Rc<ShadeTable>,
    pub highlight: Rc<ShadeTable>,
    pub mouse_over: Rc<ShadeTable>,
    pub default_button: Rc<ShadeTable>,
}

/// Button×highlight tint used for hover and tinted default buttons.
#[inline]
fn accent(base: Color, highlight: Color) -> Color {
    base.tint(highlight, DEFAULT_TINT_FACTOR)
}

impl ShadeSets {
    pub fn build(palette: &Palette, options: &Options) -> Self {
        let mut interner = TableInterner::new(
            options.shading,
            options.shade_curve(),
            options.highlight(),
        );
        let button = interner.intern(palette.button);
        let window = interner.intern(palette.window);
        let highlight = interner.intern(palette.highlight);
        let mouse_over = interner.intern(accent(palette.button, palette.highlight));
        let default_button = match options.default_button {
            DefaultIndicator::Tint => interner.intern(accent(palette.button, palette.highlight)),
            _ => Rc::clone(&button),
        };
        log::debug!(
            "shade sets rebuilt: {} distinct tables (model {:?}, {:?})",
            interner.tables.len(),
            interner.model,
            interner.curve
        );
        Self {
            interner,
            palette: *palette,
            button,
            window,
            highlight,
            mouse_over,
            default_button,
        }
    }

    /// Shared table for `base`, building it on first use.
    #[inline]
    pub fn intern(&mut self, base: Color) -> Rc<ShadeTable> {
        self.interner.intern(base)
    }

    /// Table a resolved spec paints from.
    ///
    /// Palette colors get their prebuilt role table. Other colors are
    /// interned: `Base` uses `base` itself, the accent sources tint it toward
    /// the highlight color first, so any widget color gets a hover table.
    pub fn table(&mut self, source: ShadeSource, base: Color) -> Rc<ShadeTable> {
        if let Some(role) = self.role_table(source, base) {
            return Rc::clone(role);
        }
        match source {
            ShadeSource::Base => self.intern(base),
            ShadeSource::MouseOver | ShadeSource::DefaultButton => {
                self.intern(accent(base, self.palette.highlight))
            }
        }
    }

    fn role_table(&self, source: ShadeSource, base: Color) -> Option<&Rc<ShadeTable>> {
        let p = &self.palette;
        match source {
            ShadeSource::Base if base == p.button => Some(&self.button),
            ShadeSource::Base if base == p.window => Some(&self.window),
            ShadeSource::Base if base == p.highlight => Some(&self.highlight),
            ShadeSource::MouseOver if base == p.button => Some(&self.mouse_over),
            ShadeSource::DefaultButton if base == p.button => Some(&self.default_button),
            _ => None,
        }
    }

    /// Number of distinct tables currently interned.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.interner.tables.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::shade_table::ORIGINAL_SHADE;

    fn palette() -> Palette {
        Palette {
            button: Color::gray(200),
            window: Color::gray(200),
            highlight: Color::new(40, 120, 220),
        }
    }

    #[test]
    fn equal_bases_share_one_table() {
        let sets = ShadeSets::build(&palette(), &Options::default());
        assert!(Rc::ptr_eq(&sets.button, &sets.window));
        assert!(!Rc::ptr_eq(&sets.button, &sets.highlight));
    }

    #[test]
    fn tinted_default_button_shares_mouse_over_table() {
        let opts = Options { default_button: DefaultIndicator::Tint, ..Options::default() };
        let sets = ShadeSets::build(&palette(), &opts);
        assert!(Rc::ptr_eq(&sets.mouse_over, &sets.default_button));
        assert_eq!(sets.distinct(), 3);
    }

    #[test]
    fn untinted_default_button_uses_button_table() {
        let sets = ShadeSets::build(&palette(), &Options::default());
        assert!(Rc::ptr_eq(&sets.button, &sets.default_button));
    }

    #[test]
    fn mouse_over_table_is_tinted() {
        let p = palette();
        let sets = ShadeSets::build(&p, &Options::default());
        assert_eq!(
            sets.mouse_over[ORIGINAL_SHADE],
            p.button.tint(p.highlight, DEFAULT_TINT_FACTOR),
        );
    }

    #[test]
    fn ad_hoc_bases_are_interned_once() {
        let mut sets = ShadeSets::build(&palette(), &Options::default());
        let before = sets.distinct();
        let a = sets.table(ShadeSource::Base, Color::new(10, 20, 30));
        let b = sets.table(ShadeSource::Base, Color::new(10, 20, 30));
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(sets.distinct(), before + 1);
    }

    // ── role tables ───────────────────────────────────────────────────────

    #[test]
    fn palette_colors_resolve_to_role_tables() {
        let p = palette();
        let opts = Options { default_button: DefaultIndicator::Tint, ..Options::default() };
        let mut sets = ShadeSets::build(&p, &opts);
        assert!(Rc::ptr_eq(&sets.table(ShadeSource::Base, p.button), &sets.button));
        assert!(Rc::ptr_eq(&sets.table(ShadeSource::Base, p.highlight), &sets.highlight));
        assert!(Rc::ptr_eq(&sets.table(ShadeSource::MouseOver, p.button), &sets.mouse_over));
        assert!(Rc::ptr_eq(
            &sets.table(ShadeSource::DefaultButton, p.button),
            &sets.default_button
        ));
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn ad_hoc_tables_are_bounded() {
        let p = palette();
        let mut sets = ShadeSets::build(&p, &Options::default());
        for i in 0..5000u32 {
            let base = Color::new((i % 256) as u8, (i / 256) as u8, 7);
            sets.table(ShadeSource::Base, base);
        }
        assert!(sets.distinct() <= AD_HOC_TABLES);
        // Role tables survive eviction.
        assert_eq!(sets.table(ShadeSource::Base, p.button)[ORIGINAL_SHADE], p.button);
        assert!(Rc::ptr_eq(&sets.table(ShadeSource::Base, p.button), &sets.button));
    }
}
