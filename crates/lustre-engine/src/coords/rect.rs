/// Axis a gradient ramp runs along.
///
/// `Vertical` ramps change color from top to bottom (the usual fill of a
/// horizontal button or tab); `Horizontal` ramps change from left to right.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
}

/// Axis-aligned rectangle in device pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Extent along `direction` (the strip length of a ramp drawn into this rect).
    #[inline]
    pub fn extent(self, direction: Direction) -> u32 {
        match direction {
            Direction::Horizontal => self.width,
            Direction::Vertical => self.height,
        }
    }

    #[inline]
    fn right(self) -> i64 {
        self.x as i64 + self.width as i64
    }

    #[inline]
    fn bottom(self) -> i64 {
        self.y as i64 + self.height as i64
    }

    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && (x as i64) < self.right() && (y as i64) < self.bottom()
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x1 <= x0 as i64 || y1 <= y0 as i64 {
            None
        } else {
            Some(Rect::new(x0, y0, (x1 - x0 as i64) as u32, (y1 - y0 as i64) as u32))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: u32, h: u32) -> Rect { Rect::new(x, y, w, h) }

    // ── extent ────────────────────────────────────────────────────────────

    #[test]
    fn extent_follows_direction() {
        let rect = r(0, 0, 30, 12);
        assert_eq!(rect.extent(Direction::Horizontal), 30);
        assert_eq!(rect.extent(Direction::Vertical), 12);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0, 0, 10, 10).contains(0, 0));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        // Half-open [min, max): the max edge is not contained.
        assert!(!r(0, 0, 10, 10).contains(10, 10));
        assert!(r(0, 0, 10, 10).contains(9, 9));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0, 0, 10, 10).contains(-1, 5));
        assert!(!r(0, 0, 10, 10).contains(5, -1));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let i = r(0, 0, 10, 10).intersect(r(5, 5, 10, 10)).unwrap();
        assert_eq!(i, r(5, 5, 5, 5));
    }

    #[test]
    fn intersect_contained() {
        let outer = r(0, 0, 100, 100);
        let inner = r(10, 10, 20, 20);
        assert_eq!(outer.intersect(inner).unwrap(), inner);
    }

    #[test]
    fn intersect_negative_origin_is_clipped() {
        let i = r(-4, -2, 10, 10).intersect(r(0, 0, 50, 50)).unwrap();
        assert_eq!(i, r(0, 0, 6, 8));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        // Shared edge only; zero-width overlap is no intersection.
        assert!(r(0, 0, 10, 10).intersect(r(10, 0, 10, 10)).is_none());
    }

    #[test]
    fn intersect_disjoint_returns_none() {
        assert!(r(0, 0, 5, 5).intersect(r(20, 20, 5, 5)).is_none());
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0, 0, 0, 5).is_empty());
        assert!(r(0, 0, 5, 0).is_empty());
        assert!(!r(0, 0, 1, 1).is_empty());
    }
}
