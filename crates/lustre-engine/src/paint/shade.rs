//! Shade computation: a base color scaled by a numeric factor under one of
//! several color-space models.
//!
//! A factor of `1.0` always returns the base color unchanged. Factors below
//! `1.0` darken, factors above lighten.

use serde::{Deserialize, Serialize};

use super::Color;

/// Lowest shade factor accepted by editable models (gradient stops, overrides).
pub const MIN_SHADE: f64 = 0.0;
/// Highest shade factor accepted by editable models.
pub const MAX_SHADE: f64 = 2.0;

/// Clamps a shade factor into [`MIN_SHADE`]..=[`MAX_SHADE`]. `NaN` becomes `1.0`.
#[inline]
pub fn clamp_shade(value: f64) -> f64 {
    if value.is_nan() { 1.0 } else { value.clamp(MIN_SHADE, MAX_SHADE) }
}

/// How a shade factor is applied to a color.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadeModel {
    /// Linear scaling of the RGB channels.
    #[default]
    Simple,
    /// Scales HSL lightness.
    Hsl,
    /// Scales HSV value; overflow above full value desaturates instead.
    Hsv,
    /// Scales HCY luma (gamma-corrected, Rec. 709 weights).
    Hcy,
}

impl ShadeModel {
    /// Perceptual models share one contrast curve; `Simple` has its own.
    #[inline]
    pub const fn is_perceptual(self) -> bool {
        !matches!(self, ShadeModel::Simple)
    }

    /// Shades `base` by `factor`.
    pub fn shade(self, base: Color, factor: f64) -> Color {
        if factor.is_nan() || (factor - 1.0).abs() < f64::EPSILON {
            return base;
        }
        let k = factor.max(0.0);
        match self {
            ShadeModel::Simple => {
                let ch = |c: u8| c as f64 * k;
                Color::from_f64(ch(base.r), ch(base.g), ch(base.b))
            }
            ShadeModel::Hsl => {
                let (h, s, l) = rgb_to_hsl(base);
                hsl_to_rgb(h, s, (l * k).clamp(0.0, 1.0))
            }
            ShadeModel::Hsv => {
                let (h, mut s, mut v) = rgb_to_hsv(base);
                v *= k;
                if v > 1.0 {
                    s = (s - (v - 1.0)).max(0.0);
                    v = 1.0;
                }
                hsv_to_rgb(h, s, v)
            }
            ShadeModel::Hcy => {
                let (h, c, y) = rgb_to_hcy(base);
                hcy_to_rgb(h, c, (y * k).clamp(0.0, 1.0))
            }
        }
    }

    /// Mirrors a shade value around the neutral factor `1.0`.
    ///
    /// Used to flip a gradient authored for one orientation (top tabs) onto the
    /// opposite one (bottom tabs): a stop that lightened by `x` darkens by `x`.
    /// The reflection is applied to the factor itself, so it behaves the same for
    /// every model.
    #[inline]
    pub fn invert_shade(self, value: f64) -> f64 {
        clamp_shade(2.0 - value)
    }
}

/// Free-function form of [`ShadeModel::shade`].
#[inline]
pub fn shade(base: Color, factor: f64, model: ShadeModel) -> Color {
    model.shade(base, factor)
}

// ── HSL ───────────────────────────────────────────────────────────────────

/// Returns `(hue in 0..6, max, min, delta)` for unit-range channels.
fn hue_sextant(r: f64, g: f64, b: f64) -> (f64, f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let h = if delta <= 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    (h, max, min, delta)
}

/// Chroma/second-largest/offset to RGB, with `h` in `0..6`.
fn sextant_to_rgb(h: f64, c: f64, m: f64) -> Color {
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Color::from_unit(r + m, g + m, b + m)
}

fn rgb_to_hsl(color: Color) -> (f64, f64, f64) {
    let (r, g, b) = color.to_unit();
    let (h, max, min, delta) = hue_sextant(r, g, b);
    let l = (max + min) / 2.0;
    let s = if delta <= 0.0 { 0.0 } else { delta / (1.0 - (2.0 * l - 1.0).abs()) };
    (h, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    sextant_to_rgb(h, c, l - c / 2.0)
}

// ── HSV ───────────────────────────────────────────────────────────────────

fn rgb_to_hsv(color: Color) -> (f64, f64, f64) {
    let (r, g, b) = color.to_unit();
    let (h, max, _min, delta) = hue_sextant(r, g, b);
    let s = if max <= 0.0 { 0.0 } else { delta / max };
    (h, s, max)
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Color {
    let c = v * s;
    sextant_to_rgb(h, c, v - c)
}

// ── HCY ───────────────────────────────────────────────────────────────────

const HCY_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];
const HCY_GAMMA: f64 = 2.2;

#[inline]
fn gamma(n: f64) -> f64 {
    n.clamp(0.0, 1.0).powf(HCY_GAMMA)
}

#[inline]
fn igamma(n: f64) -> f64 {
    n.clamp(0.0, 1.0).powf(1.0 / HCY_GAMMA)
}

/// Returns `(hue in 0..1, chroma, luma)`.
fn rgb_to_hcy(color: Color) -> (f64, f64, f64) {
    let (r, g, b) = color.to_unit();
    let (r, g, b) = (gamma(r), gamma(g), gamma(b));
    let [wr, wg, wb] = HCY_WEIGHTS;
    let y = r * wr + g * wg + b * wb;

    let p = r.max(g).max(b);
    let n = r.min(g).min(b);
    let d = 6.0 * (p - n);
    let h = if p == n {
        0.0
    } else if r == p {
        (g - b) / d
    } else if g == p {
        (b - r) / d + 1.0 / 3.0
    } else {
        (r - g) / d + 2.0 / 3.0
    };

    let c = if p == n || y <= 0.0 || y >= 1.0 {
        0.0
    } else {
        ((y - n) / y).max((p - y) / (1.0 - y))
    };
    (h.rem_euclid(1.0), c, y)
}

fn hcy_to_rgb(h: f64, c: f64, y: f64) -> Color {
    let [wr, wg, wb] = HCY_WEIGHTS;
    let h = h.rem_euclid(1.0);
    let c = c.clamp(0.0, 1.0);
    let y = y.clamp(0.0, 1.0);

    let hs = h * 6.0;
    let (th, tm) = if hs < 1.0 {
        (hs, wr + wg * hs)
    } else if hs < 2.0 {
        let th = 2.0 - hs;
        (th, wg + wr * th)
    } else if hs < 3.0 {
        let th = hs - 2.0;
        (th, wg + wb * th)
    } else if hs < 4.0 {
        let th = 4.0 - hs;
        (th, wb + wg * th)
    } else if hs < 5.0 {
        let th = hs - 4.0;
        (th, wb + wr * th)
    } else {
        let th = 6.0 - hs;
        (th, wr + wb * th)
    };

    // tp/to/tn: largest, middle, smallest channel.
    let (tp, to, tn) = if tm >= y {
        (y + y * c * (1.0 - tm) / tm, y + y * c * (th - tm) / tm, y - y * c)
    } else {
        (
            y + (1.0 - y) * c,
            y + (1.0 - y) * c * (th - tm) / (1.0 - tm),
            y - (1.0 - y) * c * tm / (1.0 - tm),
        )
    };
    let (tp, to, tn) = (igamma(tp), igamma(to), igamma(tn));

    let (r, g, b) = if hs < 1.0 {
        (tp, to, tn)
    } else if hs < 2.0 {
        (to, tp, tn)
    } else if hs < 3.0 {
        (tn, tp, to)
    } else if hs < 4.0 {
        (tn, to, tp)
    } else if hs < 5.0 {
        (to, tn, tp)
    } else {
        (tp, tn, to)
    };
    Color::from_unit(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODELS: [ShadeModel; 4] =
        [ShadeModel::Simple, ShadeModel::Hsl, ShadeModel::Hsv, ShadeModel::Hcy];

    fn sample_colors() -> Vec<Color> {
        let mut out = vec![Color::BLACK, Color::WHITE, Color::gray(128)];
        for r in (0..=255u16).step_by(51) {
            for g in (0..=255u16).step_by(85) {
                for b in (0..=255u16).step_by(64) {
                    out.push(Color::new(r as u8, g as u8, b as u8));
                }
            }
        }
        out
    }

    fn close(a: Color, b: Color, tol: i32) -> bool {
        (a.r as i32 - b.r as i32).abs() <= tol
            && (a.g as i32 - b.g as i32).abs() <= tol
            && (a.b as i32 - b.b as i32).abs() <= tol
    }

    // ── identity ──────────────────────────────────────────────────────────

    #[test]
    fn unit_factor_is_identity_for_every_model() {
        for model in MODELS {
            for c in sample_colors() {
                assert_eq!(model.shade(c, 1.0), c, "{model:?} {c}");
            }
        }
    }

    // ── simple ────────────────────────────────────────────────────────────

    #[test]
    fn simple_scales_channels() {
        assert_eq!(shade(Color::gray(200), 0.5, ShadeModel::Simple), Color::gray(100));
        assert_eq!(
            shade(Color::new(100, 50, 10), 2.0, ShadeModel::Simple),
            Color::new(200, 100, 20),
        );
    }

    #[test]
    fn simple_clamps_at_white() {
        assert_eq!(shade(Color::gray(200), 1.5, ShadeModel::Simple), Color::WHITE);
    }

    #[test]
    fn simple_is_monotonic_in_factor() {
        let base = Color::new(90, 140, 30);
        let mut prev = shade(base, 0.1, ShadeModel::Simple);
        let mut f = 0.1;
        while f < 2.0 {
            f += 0.05;
            let next = shade(base, f, ShadeModel::Simple);
            assert!(next.r >= prev.r && next.g >= prev.g && next.b >= prev.b, "factor {f}");
            prev = next;
        }
    }

    // ── hsl / hsv / hcy ───────────────────────────────────────────────────

    #[test]
    fn hsl_round_trip_is_stable() {
        for c in sample_colors() {
            let (h, s, l) = rgb_to_hsl(c);
            assert!(close(hsl_to_rgb(h, s, l), c, 1), "{c}");
        }
    }

    #[test]
    fn hsv_round_trip_is_stable() {
        for c in sample_colors() {
            let (h, s, v) = rgb_to_hsv(c);
            assert!(close(hsv_to_rgb(h, s, v), c, 1), "{c}");
        }
    }

    #[test]
    fn hcy_round_trip_is_stable() {
        for c in sample_colors() {
            let (h, ch, y) = rgb_to_hcy(c);
            assert!(close(hcy_to_rgb(h, ch, y), c, 1), "{c}");
        }
    }

    #[test]
    fn hsl_halving_lightness_of_gray() {
        assert!(close(shade(Color::gray(200), 0.5, ShadeModel::Hsl), Color::gray(100), 1));
    }

    #[test]
    fn hsv_overflow_desaturates() {
        let c = shade(Color::new(200, 0, 0), 1.5, ShadeModel::Hsv);
        assert_eq!(c.r, 255);
        assert_eq!(c.g, c.b);
        assert!(c.g > 0);
    }

    #[test]
    fn perceptual_models_darken_below_one() {
        let base = Color::new(120, 160, 200);
        for model in [ShadeModel::Hsl, ShadeModel::Hsv, ShadeModel::Hcy] {
            let dark = model.shade(base, 0.7);
            assert!(dark.luma() < base.luma(), "{model:?}");
            let light = model.shade(base, 1.2);
            assert!(light.luma() > base.luma(), "{model:?}");
        }
    }

    #[test]
    fn hcy_keeps_gray_neutral() {
        let c = shade(Color::gray(128), 0.6, ShadeModel::Hcy);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
        assert!(c.r < 128);
    }

    // ── invert ────────────────────────────────────────────────────────────

    #[test]
    fn invert_shade_reflects_around_one() {
        for model in MODELS {
            assert_eq!(model.invert_shade(1.0), 1.0);
            assert!((model.invert_shade(1.2) - 0.8).abs() < 1e-12);
            assert_eq!(model.invert_shade(0.0), 2.0);
        }
    }

    #[test]
    fn clamp_shade_bounds_and_nan() {
        assert_eq!(clamp_shade(-1.0), 0.0);
        assert_eq!(clamp_shade(3.0), 2.0);
        assert_eq!(clamp_shade(f64::NAN), 1.0);
    }
}
