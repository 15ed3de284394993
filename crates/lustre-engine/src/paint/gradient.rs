use super::shade::clamp_shade;

/// Decimal places at which stop positions and values are compared.
///
/// Two positions that agree to this precision address the same stop; the
/// editing UI and the theme file both work at this resolution.
const STOP_PRECISION: f64 = 1000.0;

#[inline]
fn quantize(v: f64) -> i64 {
    (v * STOP_PRECISION).round() as i64
}

/// A single control point of a custom gradient.
///
/// Invariant:
/// - `pos` is in `[0, 1]`, `value` in `[0, 2]` (enforced by [`GradientStop::new`]).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub pos: f64,
    /// Shade factor applied to the base color at `pos`.
    pub value: f64,
}

impl GradientStop {
    /// Creates a stop, clamping both fields into their editable range.
    /// A `NaN` position becomes `0.0`, a `NaN` value `1.0`.
    #[inline]
    pub fn new(pos: f64, value: f64) -> Self {
        let pos = if pos.is_nan() { 0.0 } else { pos.clamp(0.0, 1.0) };
        Self { pos, value: clamp_shade(value) }
    }

    #[inline]
    fn same_pos(&self, pos: f64) -> bool {
        quantize(self.pos) == quantize(pos)
    }

    #[inline]
    fn same_value(&self, value: f64) -> bool {
        quantize(self.value) == quantize(value)
    }
}

/// Ordered, position-unique set of gradient stops.
///
/// Stops are kept sorted by ascending position. Inserting at a position that
/// already holds a stop replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientStopSet {
    stops: Vec<GradientStop>,
}

impl GradientStopSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set by inserting `(pos, value)` pairs in order; later duplicates win.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut set = Self::new();
        for (pos, value) in pairs {
            set.insert(pos, value);
        }
        set
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[GradientStop] {
        &self.stops
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, GradientStop> {
        self.stops.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<&GradientStop> {
        self.stops.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&GradientStop> {
        self.stops.last()
    }

    /// Inserts a stop, or replaces the value of the stop at the same position.
    ///
    /// Returns `false` when the set is unchanged (same position and value after
    /// rounding), so callers can skip invalidation and change notifications.
    pub fn insert(&mut self, pos: f64, value: f64) -> bool {
        let stop = GradientStop::new(pos, value);
        if let Some(existing) = self.stops.iter_mut().find(|s| s.same_pos(stop.pos)) {
            if existing.same_value(stop.value) {
                return false;
            }
            existing.value = stop.value;
            return true;
        }
        let at = self.stops.partition_point(|s| s.pos < stop.pos);
        self.stops.insert(at, stop);
        true
    }

    /// Removes the stop matching both `pos` and `value`. Returns whether a stop was removed.
    pub fn remove(&mut self, pos: f64, value: f64) -> bool {
        let target = GradientStop::new(pos, value);
        match self
            .stops
            .iter()
            .position(|s| s.same_pos(target.pos) && s.same_value(target.value))
        {
            Some(i) => {
                self.stops.remove(i);
                true
            }
            None => false,
        }
    }

    /// Moves a stop: removes `(old_pos, old_value)` then inserts `(new_pos, new_value)`.
    ///
    /// Returns whether the set changed. If the old stop does not exist the new
    /// one is still inserted.
    pub fn update(&mut self, old_pos: f64, old_value: f64, new_pos: f64, new_value: f64) -> bool {
        let old = GradientStop::new(old_pos, old_value);
        let new = GradientStop::new(new_pos, new_value);
        if old.same_pos(new.pos) && old.same_value(new.value) {
            return false;
        }
        let removed = self.remove(old.pos, old.value);
        self.insert(new.pos, new.value) || removed
    }

    /// Returns a copy with boundary stops at `0.0` and `1.0`.
    ///
    /// Missing boundaries copy the value of the nearest existing stop. An empty
    /// set stays empty; callers render a flat fill for it.
    pub fn fix(&self) -> GradientStopSet {
        let mut fixed = self.clone();
        let (Some(first), Some(last)) = (self.first().copied(), self.last().copied()) else {
            return fixed;
        };
        if !first.same_pos(0.0) {
            fixed.stops.insert(0, GradientStop::new(0.0, first.value));
        }
        if !last.same_pos(1.0) {
            fixed.stops.push(GradientStop::new(1.0, last.value));
        }
        fixed
    }

    /// True when both sets hold the same stops at stop precision.
    pub fn approx_eq(&self, other: &GradientStopSet) -> bool {
        self.len() == other.len()
            && self
                .stops
                .iter()
                .zip(&other.stops)
                .all(|(a, b)| a.same_pos(b.pos) && a.same_value(b.value))
    }
}

impl<'a> IntoIterator for &'a GradientStopSet {
    type Item = &'a GradientStop;
    type IntoIter = std::slice::Iter<'a, GradientStop>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}
