use bytemuck::{Pod, Zeroable};

use crate::coords::{Direction, Rect};

use super::Color;

/// Bytes per [`Rgba8`] pixel; the unit of cache cost accounting.
pub const BYTES_PER_PIXEL: usize = 4;

/// Straight-alpha RGBA pixel, laid out for direct upload / encoding.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color> for Rgba8 {
    #[inline]
    fn from(c: Color) -> Self {
        Self { r: c.r, g: c.g, b: c.b, a: 255 }
    }
}

impl Rgba8 {
    #[inline]
    pub fn color(self) -> Color {
        Color::new(self.r, self.g, self.b)
    }
}

/// A 1-D color ramp: one color per pixel along `direction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pub direction: Direction,
    pub colors: Vec<Color>,
}

impl Strip {
    #[inline]
    pub fn new(direction: Direction, colors: Vec<Color>) -> Self {
        Self { direction, colors }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Mirrors the ramp end for end.
    #[inline]
    pub fn reversed(mut self) -> Self {
        self.colors.reverse();
        self
    }
}

/// Owned RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Pixmap {
    /// Transparent image of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, pixels: vec![Rgba8::default(); width as usize * height as usize] }
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self { width, height, pixels: vec![color.into(); width as usize * height as usize] }
    }

    /// Materializes a strip `thickness` pixels wide across its direction.
    pub fn from_strip(strip: &Strip, thickness: u32) -> Self {
        let len = strip.len() as u32;
        let (width, height) = match strip.direction {
            Direction::Horizontal => (len, thickness),
            Direction::Vertical => (thickness, len),
        };
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        match strip.direction {
            Direction::Horizontal => {
                for _ in 0..thickness {
                    pixels.extend(strip.colors.iter().map(|&c| Rgba8::from(c)));
                }
            }
            Direction::Vertical => {
                for &c in &strip.colors {
                    pixels.extend(std::iter::repeat_n(Rgba8::from(c), thickness as usize));
                }
            }
        }
        Self { width, height, pixels }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Memory cost in bytes (`width × height × BYTES_PER_PIXEL`).
    #[inline]
    pub fn cost(&self) -> usize {
        self.pixels.len() * BYTES_PER_PIXEL
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Tiles this image over a `width × height` area, wrapping in both axes.
    ///
    /// The source is left untouched; cached strips are shared read-only.
    pub fn tiled(&self, width: u32, height: u32) -> Pixmap {
        if self.is_empty() {
            return Pixmap::new(width, height);
        }
        let mut out = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            let row = (y % self.height) as usize * self.width as usize;
            out.extend((0..width).map(|x| self.pixels[row + (x % self.width) as usize]));
        }
        Pixmap { width, height, pixels: out }
    }

    /// Copies `src` with its top-left at `(x, y)`, clipped to this image.
    pub fn blit(&mut self, src: &Pixmap, x: i32, y: i32) {
        let bounds = Rect::from_size(self.width, self.height);
        let Some(dst) = bounds.intersect(Rect::new(x, y, src.width, src.height)) else {
            return;
        };
        let sx = (dst.x - x) as usize;
        let sy = (dst.y - y) as usize;
        for row in 0..dst.height as usize {
            let s = (sy + row) * src.width as usize + sx;
            let d = (dst.y as usize + row) * self.width as usize + dst.x as usize;
            self.pixels[d..d + dst.width as usize]
                .copy_from_slice(&src.pixels[s..s + dst.width as usize]);
        }
    }
}
