use std::ops::Index;

use super::shade::clamp_shade;
use super::{Color, ShadeModel};

/// Number of contrast-driven shades in a table (excluding the original and the
/// derived highlight entries).
pub const STD_SHADE_COUNT: usize = 6;

/// Table index of the literal base color.
pub const ORIGINAL_SHADE: usize = 0;
/// `shade(base, highlight)`: mouse-over fill.
pub const ORIG_HIGHLIGHT: usize = STD_SHADE_COUNT + 1;
/// `shade(std_shade(4), highlight)`: pressed + mouse-over fill.
pub const SHADE_4_HIGHLIGHT: usize = STD_SHADE_COUNT + 2;
/// `shade(std_shade(2), highlight)`: hovered dark accents.
pub const SHADE_2_HIGHLIGHT: usize = STD_SHADE_COUNT + 3;
/// Fixed length of every [`ShadeTable`].
pub const SHADE_TABLE_LEN: usize = STD_SHADE_COUNT + 4;

/// Std shade used as the pressed/sunken fill.
pub const PRESSED_SHADE: usize = std_shade(4);

pub const DEFAULT_CONTRAST: i32 = 7;
pub const MAX_CONTRAST: i32 = 10;

/// Table index of contrast shade `i` (`0..STD_SHADE_COUNT`).
#[inline]
pub const fn std_shade(i: usize) -> usize {
    ORIGINAL_SHADE + 1 + i
}

/// Contrast curves, indexed `[simple/perceptual][contrast][shade]`.
///
/// Shades 0 and 1 lighten (highlights, top bevel), 2 to 5 darken (borders, pressed
/// fills, dark edges). Higher contrast spreads them further from `1.0`.
static SHADE_CURVES: [[[f64; STD_SHADE_COUNT]; 11]; 2] = [
    // simple
    [
        [1.07, 1.03, 0.91, 0.780, 0.834, 0.75],
        [1.08, 1.03, 0.91, 0.781, 0.835, 0.74],
        [1.09, 1.03, 0.91, 0.782, 0.836, 0.73],
        [1.10, 1.04, 0.91, 0.783, 0.837, 0.72],
        [1.11, 1.04, 0.91, 0.784, 0.838, 0.71],
        [1.12, 1.05, 0.91, 0.785, 0.840, 0.70],
        [1.13, 1.05, 0.91, 0.786, 0.842, 0.69],
        [1.14, 1.06, 0.91, 0.787, 0.844, 0.68],
        [1.16, 1.07, 0.91, 0.788, 0.846, 0.66],
        [1.18, 1.08, 0.91, 0.789, 0.848, 0.64],
        [1.20, 1.09, 0.91, 0.790, 0.850, 0.62],
    ],
    // hsl / hsv / hcy
    [
        [1.05, 1.04, 0.90, 0.800, 0.830, 0.82],
        [1.06, 1.04, 0.90, 0.790, 0.831, 0.78],
        [1.07, 1.04, 0.90, 0.785, 0.832, 0.75],
        [1.08, 1.05, 0.90, 0.782, 0.833, 0.72],
        [1.09, 1.05, 0.90, 0.782, 0.834, 0.70],
        [1.10, 1.06, 0.90, 0.782, 0.836, 0.68],
        [1.12, 1.06, 0.90, 0.782, 0.838, 0.63],
        [1.16, 1.07, 0.90, 0.782, 0.840, 0.62],
        [1.18, 1.07, 0.90, 0.783, 0.842, 0.60],
        [1.20, 1.08, 0.90, 0.784, 0.844, 0.58],
        [1.22, 1.08, 0.90, 0.786, 0.848, 0.55],
    ],
];

/// Out-of-range contrast falls back to [`DEFAULT_CONTRAST`] rather than the
/// nearest bound.
#[inline]
pub fn clamp_contrast(contrast: i32) -> i32 {
    if (0..=MAX_CONTRAST).contains(&contrast) { contrast } else { DEFAULT_CONTRAST }
}

/// Source of the contrast shade factors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShadeCurve {
    /// Static curve for a contrast level.
    Contrast(i32),
    /// User overrides, one factor per std shade.
    Custom([f64; STD_SHADE_COUNT]),
}

impl Default for ShadeCurve {
    fn default() -> Self {
        ShadeCurve::Contrast(DEFAULT_CONTRAST)
    }
}

impl ShadeCurve {
    /// Resolved factor sequence for `model`.
    pub fn factors(&self, model: ShadeModel) -> [f64; STD_SHADE_COUNT] {
        match *self {
            ShadeCurve::Contrast(c) => {
                SHADE_CURVES[model.is_perceptual() as usize][clamp_contrast(c) as usize]
            }
            ShadeCurve::Custom(values) => values.map(clamp_shade),
        }
    }
}

/// Pre-shaded colors for one base color.
///
/// Layout:
/// - `[ORIGINAL_SHADE]`: the base color, verbatim
/// - `[std_shade(0)..=std_shade(5)]`: contrast shades
/// - `[ORIG_HIGHLIGHT]`, `[SHADE_4_HIGHLIGHT]`, `[SHADE_2_HIGHLIGHT]`: hover variants
///
/// Tables are rebuilt wholesale when their inputs change and shared read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeTable {
    colors: [Color; SHADE_TABLE_LEN],
    model: ShadeModel,
}

impl ShadeTable {
    /// Builds the table for `base`.
    ///
    /// `highlight` is the hover factor (e.g. `1.03`).
    pub fn build(base: Color, model: ShadeModel, curve: &ShadeCurve, highlight: f64) -> Self {
        let mut colors = [base; SHADE_TABLE_LEN];
        for (i, factor) in curve.factors(model).into_iter().enumerate() {
            colors[std_shade(i)] = model.shade(base, factor);
        }
        colors[ORIGINAL_SHADE] = base;
        colors[ORIG_HIGHLIGHT] = model.shade(base, highlight);
        colors[SHADE_4_HIGHLIGHT] = model.shade(colors[std_shade(4)], highlight);
        colors[SHADE_2_HIGHLIGHT] = model.shade(colors[std_shade(2)], highlight);
        Self { colors, model }
    }

    #[inline]
    pub fn base(&self) -> Color {
        self.colors[ORIGINAL_SHADE]
    }

    #[inline]
    pub fn model(&self) -> ShadeModel {
        self.model
    }

    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}

impl Index<usize> for ShadeTable {
    type Output = Color;

    #[inline]
    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_table(base: Color, model: ShadeModel) -> ShadeTable {
        ShadeTable::build(base, model, &ShadeCurve::default(), 1.03)
    }

    #[test]
    fn original_shade_is_base_verbatim() {
        for model in [ShadeModel::Simple, ShadeModel::Hsl, ShadeModel::Hsv, ShadeModel::Hcy] {
            let base = Color::new(12, 200, 99);
            assert_eq!(default_table(base, model)[ORIGINAL_SHADE], base);
        }
    }

    #[test]
    fn contrast_seven_simple_gray_has_distinct_std_shades() {
        let table = default_table(Color::gray(128), ShadeModel::Simple);
        assert_eq!(table.as_slice().len(), SHADE_TABLE_LEN);
        assert_eq!(table[ORIGINAL_SHADE], Color::gray(128));

        let std: Vec<Color> = (0..STD_SHADE_COUNT).map(|i| table[std_shade(i)]).collect();
        for (i, a) in std.iter().enumerate() {
            assert_ne!(*a, table.base(), "std shade {i} aliases the base");
            for b in &std[i + 1..] {
                assert_ne!(a, b);
            }
        }
        // 128 * 1.14, 128 * 0.68
        assert_eq!(table[std_shade(0)], Color::gray(146));
        assert_eq!(table[std_shade(5)], Color::gray(87));
    }

    #[test]
    fn highlight_entries_are_derived() {
        let table = default_table(Color::gray(100), ShadeModel::Simple);
        assert_eq!(table[ORIG_HIGHLIGHT], ShadeModel::Simple.shade(Color::gray(100), 1.03));
        assert_eq!(
            table[SHADE_4_HIGHLIGHT],
            ShadeModel::Simple.shade(table[std_shade(4)], 1.03)
        );
        assert_eq!(
            table[SHADE_2_HIGHLIGHT],
            ShadeModel::Simple.shade(table[std_shade(2)], 1.03)
        );
    }

    #[test]
    fn out_of_range_contrast_uses_default() {
        assert_eq!(clamp_contrast(-3), DEFAULT_CONTRAST);
        assert_eq!(clamp_contrast(11), DEFAULT_CONTRAST);
        assert_eq!(clamp_contrast(0), 0);
        let base = Color::gray(150);
        let wild = ShadeTable::build(base, ShadeModel::Simple, &ShadeCurve::Contrast(42), 1.03);
        assert_eq!(wild, default_table(base, ShadeModel::Simple));
    }

    #[test]
    fn higher_contrast_spreads_shades() {
        let base = Color::gray(128);
        let low = ShadeTable::build(base, ShadeModel::Simple, &ShadeCurve::Contrast(0), 1.03);
        let high = ShadeTable::build(base, ShadeModel::Simple, &ShadeCurve::Contrast(10), 1.03);
        assert!(high[std_shade(0)].r > low[std_shade(0)].r);
        assert!(high[std_shade(5)].r < low[std_shade(5)].r);
    }

    #[test]
    fn custom_overrides_replace_curve_and_are_clamped() {
        let curve = ShadeCurve::Custom([0.5, 1.0, 1.5, 2.0, 9.0, -1.0]);
        let table = ShadeTable::build(Color::gray(100), ShadeModel::Simple, &curve, 1.0);
        assert_eq!(table[std_shade(0)], Color::gray(50));
        assert_eq!(table[std_shade(1)], Color::gray(100));
        assert_eq!(table[std_shade(2)], Color::gray(150));
        assert_eq!(table[std_shade(3)], Color::gray(200));
        assert_eq!(table[std_shade(4)], Color::gray(200)); // 9.0 clamped to 2.0
        assert_eq!(table[std_shade(5)], Color::BLACK); // -1.0 clamped to 0.0
    }

    #[test]
    fn perceptual_models_use_their_own_curve() {
        let simple = ShadeCurve::default().factors(ShadeModel::Simple);
        let hsl = ShadeCurve::default().factors(ShadeModel::Hsl);
        assert_ne!(simple, hsl);
        assert_eq!(hsl, ShadeCurve::default().factors(ShadeModel::Hcy));
    }
}
