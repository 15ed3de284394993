use std::iter;

use crate::appearance::{AppearanceKind, AppearanceSpec, BandLayout, InnerBands, Options};
use crate::coords::Direction;
use crate::paint::{Color, GradientLibrary, GradientStop, GradientStopSet, ShadeModel, Strip};

/// Width of one band of a striped fill, in pixels.
pub const STRIPE_WIDTH: usize = 2;
/// Shade factor of the darker stripe band.
pub const STRIPE_SHADE: f64 = 0.95;

/// Share of the strip length taken by each end band of a bevelled fill.
const BEVEL_BAND_FRACTION: f64 = 0.1;

/// Fixed-point fraction bits used by the ramp interpolator.
const FRAC_BITS: u32 = 16;

/// Appends a linear ramp of `n` pixels from `from` to `to`, both ends inclusive.
///
/// Interpolation runs in 16.16 fixed point; the first pixel is exactly `from`
/// and the last exactly `to`.
fn ramp_into(out: &mut Vec<Color>, from: Color, to: Color, n: usize) {
    if n == 0 {
        return;
    }
    if from == to || n == 1 {
        out.extend(iter::repeat_n(from, n));
        return;
    }
    let steps = (n - 1) as i64;
    let start = from.channels().map(|c| (c as i64) << FRAC_BITS);
    let span = [
        (to.r as i64 - from.r as i64) << FRAC_BITS,
        (to.g as i64 - from.g as i64) << FRAC_BITS,
        (to.b as i64 - from.b as i64) << FRAC_BITS,
    ];
    let half = 1i64 << (FRAC_BITS - 1);
    out.extend((0..=steps).map(|i| {
        let ch = |k: usize| {
            ((start[k] + span[k] * i / steps + half) >> FRAC_BITS).clamp(0, 255) as u8
        };
        Color::new(ch(0), ch(1), ch(2))
    }));
}

#[inline]
fn flat(color: Color, length: usize, direction: Direction) -> Strip {
    Strip::new(direction, vec![color; length])
}

#[inline]
fn orient(strip: Strip, reverse: bool) -> Strip {
    if reverse { strip.reversed() } else { strip }
}

/// Pixel offset of a stop position along a strip of `length` pixels.
#[inline]
fn offset(pos: f64, length: usize) -> usize {
    ((pos * length as f64).round() as usize).min(length)
}

/// Two-point ramp from `top` to `bottom`.
///
/// `increasing == false` mirrors the result. Equal endpoints take a flat fast
/// path; a zero length yields an empty strip.
pub fn composite(
    top: Color,
    bottom: Color,
    increasing: bool,
    length: usize,
    direction: Direction,
) -> Strip {
    if top == bottom {
        return flat(top, length, direction);
    }
    let mut colors = Vec::with_capacity(length);
    ramp_into(&mut colors, top, bottom, length);
    orient(Strip::new(direction, colors), !increasing)
}

/// Renders a multi-stop gradient of `base`.
///
/// The stops are fixed to cover `[0, 1]` first. Each consecutive pair spans
/// the pixels between their rounded offsets; pairs that round to the same
/// pixel are skipped, but the first and last pixels always take the first and
/// last stop. With `reverse`, positions are mirrored and values
/// inverted, turning a top-lit curve into the matching bottom-lit one.
///
/// An empty stop set renders a flat fill of `base`.
pub fn composite_custom(
    base: Color,
    stops: &GradientStopSet,
    length: usize,
    direction: Direction,
    reverse: bool,
    model: ShadeModel,
) -> Strip {
    let fixed = stops.fix();
    if fixed.is_empty() || length == 0 {
        return flat(base, length, direction);
    }
    let stops: Vec<GradientStop> = if reverse {
        fixed
            .iter()
            .rev()
            .map(|s| GradientStop::new(1.0 - s.pos, model.invert_shade(s.value)))
            .collect()
    } else {
        fixed.as_slice().to_vec()
    };

    let mut colors = Vec::with_capacity(length);
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let (start, end) = (offset(a.pos, length), offset(b.pos, length));
        if end <= start {
            continue;
        }
        ramp_into(&mut colors, model.shade(base, a.value), model.shade(base, b.value), end - start);
    }
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return flat(base, length, direction);
    };
    let last = model.shade(base, last.value);
    colors.resize(length, last);
    // Sub-pixel end segments are skipped above; the ends still show their stops.
    colors[length - 1] = last;
    colors[0] = model.shade(base, first.value);
    Strip::new(direction, colors)
}

/// Renders widget fills for one configuration.
///
/// Borrowed view over the options a fill depends on; build one per call site
/// with [`Compositor::new`].
#[derive(Debug, Copy, Clone)]
pub struct Compositor<'a> {
    pub model: ShadeModel,
    pub gradients: &'a GradientLibrary,
    pub border_width: u32,
    /// Target of the selected-tab blend.
    pub highlight: Color,
}

impl<'a> Compositor<'a> {
    #[inline]
    pub fn new(options: &'a Options, highlight: Color) -> Self {
        Self {
            model: options.shading,
            gradients: &options.gradients,
            border_width: options.border_width,
            highlight,
        }
    }

    /// Renders the fill strip for `spec` over `base` (the resolved fill color).
    pub fn composite_bevel(&self, base: Color, length: usize, spec: &AppearanceSpec) -> Strip {
        let base = if spec.selected_blend > 0.0 {
            base.mix(self.highlight, spec.selected_blend)
        } else {
            base
        };
        let direction = spec.direction;

        if let AppearanceKind::Custom(slot) = spec.kind {
            let gradient = self.gradients.get(slot);
            if !gradient.is_defined() {
                return flat(base, length, direction);
            }
            let strip = composite_custom(
                base,
                &gradient.stops,
                length,
                direction,
                spec.inverted,
                self.model,
            );
            return orient(strip, spec.sunken ^ !spec.increasing);
        }

        // The resolver swapped the ends of sunken specs; curves are laid out
        // raised and the finished strip is mirrored instead.
        let (top, bottom) = if spec.sunken {
            (spec.bottom_shade, spec.top_shade)
        } else {
            (spec.top_shade, spec.bottom_shade)
        };
        let strip = match (spec.kind, spec.kind.inner_bands()) {
            (AppearanceKind::Flat | AppearanceKind::Raised, _) => {
                return flat(base, length, direction);
            }
            (AppearanceKind::Striped, _) => self.striped(base, length, direction),
            (_, Some(bands)) => self.banded(base, length, direction, (top, bottom), bands),
            (_, None) => composite(
                self.model.shade(base, top),
                self.model.shade(base, bottom),
                true,
                length,
                direction,
            ),
        };
        orient(strip, spec.sunken ^ !spec.increasing ^ spec.inverted)
    }

    fn striped(&self, base: Color, length: usize, direction: Direction) -> Strip {
        let dark = self.model.shade(base, STRIPE_SHADE);
        let colors = (0..length)
            .map(|i| if (i / STRIPE_WIDTH) % 2 == 0 { base } else { dark })
            .collect();
        Strip::new(direction, colors)
    }

    /// Four-stop curves: glass, split gradient, bevelled.
    fn banded(
        &self,
        base: Color,
        length: usize,
        direction: Direction,
        (top, bottom): (f64, f64),
        bands: InnerBands,
    ) -> Strip {
        let (upper_pos, lower_pos) = match bands.layout {
            BandLayout::Split => (0.499, 0.5),
            BandLayout::Bevel => {
                let band = ((length as f64 * BEVEL_BAND_FRACTION).round() as usize)
                    .max(self.border_width as usize);
                if length <= band * 2 {
                    return flat(base, length, direction);
                }
                let p = band as f64 / length as f64;
                (p, 1.0 - p)
            }
        };
        let stops = GradientStopSet::from_pairs([
            (0.0, top),
            (upper_pos, bands.upper),
            (lower_pos, bands.lower),
            (1.0, bottom),
        ]);
        composite_custom(base, &stops, length, direction, false, self.model)
    }
}
