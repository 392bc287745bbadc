//! Two-plane monochrome canvas.
//!
//! Each [`Plane`] is a packed 1-bit buffer: row-major, most significant bit
//! first, every row padded to a whole byte. That is the layout tri-colour
//! e-paper controllers take for their black and red RAM, so a plane can be
//! handed to a driver without re-packing (see [`Plane::to_panel_bytes`]).
//!
//! Planes implement `DrawTarget<Color = BinaryColor>`, so every
//! embedded-graphics primitive and text style can draw onto them. Pixels
//! outside the plane are dropped silently.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

use crate::colors::{INK, Ink, PAPER};

/// One monochrome pixel plane.
#[derive(Clone, PartialEq, Eq)]
pub struct Plane {
    size: Size,
    stride: usize,
    bits: Vec<u8>,
}

impl Plane {
    /// Blank plane of `size`.
    pub fn new(size: Size) -> Self {
        let stride = (size.width as usize).div_ceil(8);
        Self {
            size,
            stride,
            bits: vec![0; stride * size.height as usize],
        }
    }

    #[inline]
    fn index(
        &self,
        x: u32,
        y: u32,
    ) -> (usize, u8) {
        let byte = y as usize * self.stride + (x / 8) as usize;
        let mask = 0x80 >> (x % 8);
        (byte, mask)
    }

    #[inline]
    fn contains(
        &self,
        point: Point,
    ) -> bool {
        point.x >= 0 && point.y >= 0 && (point.x as u32) < self.size.width && (point.y as u32) < self.size.height
    }

    /// Pixel at `point`; paper outside the plane.
    pub fn pixel(
        &self,
        point: Point,
    ) -> BinaryColor {
        if !self.contains(point) {
            return PAPER;
        }
        let (byte, mask) = self.index(point.x as u32, point.y as u32);
        if self.bits[byte] & mask != 0 { INK } else { PAPER }
    }

    /// Set the pixel at `point`. Out-of-bounds writes are ignored.
    pub fn set_pixel(
        &mut self,
        point: Point,
        color: BinaryColor,
    ) {
        if !self.contains(point) {
            return;
        }
        let (byte, mask) = self.index(point.x as u32, point.y as u32);
        if color.is_on() {
            self.bits[byte] |= mask;
        } else {
            self.bits[byte] &= !mask;
        }
    }

    /// Number of inked pixels.
    pub fn ink_count(&self) -> usize { self.bits.iter().map(|b| b.count_ones() as usize).sum() }

    /// Number of inked pixels inside `area`.
    pub fn ink_count_in(
        &self,
        area: &Rectangle,
    ) -> usize {
        area.points().filter(|p| self.pixel(*p).is_on()).count()
    }

    /// True when no pixel is inked.
    pub fn is_blank(&self) -> bool { self.bits.iter().all(|b| *b == 0) }

    /// Bytes per row, including padding.
    #[inline]
    pub const fn stride(&self) -> usize { self.stride }

    /// Packed bits, 1 = ink.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] { &self.bits }

    /// Packed bits in panel convention: 1 = paper, 0 = ink.
    ///
    /// Row padding bits are paper.
    pub fn to_panel_bytes(&self) -> Vec<u8> {
        let tail_bits = (self.size.width % 8) as u8;
        let pad_mask: u8 = if tail_bits == 0 { 0 } else { 0xFF >> tail_bits };
        let mut out: Vec<u8> = self.bits.iter().map(|b| !b).collect();
        if pad_mask != 0 {
            for row in out.chunks_mut(self.stride) {
                if let Some(last) = row.last_mut() {
                    *last |= pad_mask;
                }
            }
        }
        out
    }

    /// This plane turned 270 degrees counter-clockwise (90 clockwise).
    ///
    /// Width and height swap: a landscape `w x h` plane becomes a portrait
    /// `h x w` plane whose top row is the landscape plane's left column,
    /// read bottom to top.
    pub fn rotated_270(&self) -> Self {
        let (w, h) = (self.size.width, self.size.height);
        let mut out = Self::new(Size::new(h, w));
        for y in 0..h {
            for x in 0..w {
                let (byte, mask) = self.index(x, y);
                if self.bits[byte] & mask != 0 {
                    let (nx, ny) = (h - 1 - y, x);
                    let (obyte, omask) = out.index(nx, ny);
                    out.bits[obyte] |= omask;
                }
            }
        }
        out
    }
}

impl core::fmt::Debug for Plane {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Plane")
            .field("size", &self.size)
            .field("ink", &self.ink_count())
            .finish()
    }
}

impl OriginDimensions for Plane {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Plane {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }
}

/// The two planes of one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub primary: Plane,
    pub accent: Plane,
}

impl Canvas {
    /// Blank canvas with both planes of `size`.
    pub fn new(size: Size) -> Self {
        Self {
            primary: Plane::new(size),
            accent: Plane::new(size),
        }
    }

    /// Size shared by both planes.
    pub fn size(&self) -> Size { self.primary.size() }

    /// Plane for `ink`.
    pub fn plane_mut(
        &mut self,
        ink: Ink,
    ) -> &mut Plane {
        match ink {
            Ink::Primary => &mut self.primary,
            Ink::Accent => &mut self.accent,
        }
    }

    /// Both planes turned 270 degrees; see [`Plane::rotated_270`].
    pub fn rotated_270(&self) -> Self {
        Self {
            primary: self.primary.rotated_270(),
            accent: self.accent.rotated_270(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
