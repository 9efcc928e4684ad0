//! Pixel buffer: the render target every primitive draws into.

use log::debug;

use crate::error::RasterError;
use crate::raster::{self, PixelSink, Point};
use crate::types::Rgb;

/// 2D row-major buffer of RGB pixels.
///
/// `pixels.len() == width * height` holds at all times; pixel `(x, y)` lives at
/// index `x + y * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Allocate a zero-filled (black) buffer.
    ///
    /// Fails with [`RasterError::InvalidDimensions`] when either side is zero and
    /// with [`RasterError::Allocation`] when the backing store cannot be reserved.
    pub fn new(width: u16, height: u16) -> Result<Self, RasterError> {
        let pixels = alloc_pixels(width, height)?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the buffer.
    ///
    /// Unchanged geometry is a no-op that keeps the contents and returns
    /// `Ok(false)`. Otherwise a fresh zero-filled store replaces the old one and
    /// `Ok(true)` is returned. On error the buffer is left untouched.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<bool, RasterError> {
        if self.width == width && self.height == height {
            return Ok(false);
        }
        let pixels = alloc_pixels(width, height)?;
        debug!(
            "pixel buffer resized {}x{} -> {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
        self.pixels = pixels;
        Ok(true)
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// One full pixel row, or `None` past the bottom edge.
    pub fn row(&self, y: u16) -> Option<&[Rgb]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        Some(&self.pixels[start..start + w])
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel; coordinates outside `[0, width) x [0, height)` are rejected.
    pub fn set(&mut self, x: i32, y: i32, pixel: Rgb) -> Result<(), RasterError> {
        match self.idx(x, y) {
            Some(i) => {
                self.pixels[i] = pixel;
                Ok(())
            }
            None => Err(RasterError::OutOfBounds { x, y }),
        }
    }

    pub fn clear(&mut self, pixel: Rgb) {
        self.pixels.fill(pixel);
    }

    pub fn draw_line(&mut self, from: Point, to: Point, pixel: Rgb) {
        raster::draw_line(self, from, to, pixel);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, pixel: Rgb) {
        raster::fill_rect(self, x, y, w, h, pixel);
    }

    pub fn fill_triangle(&mut self, a: Point, b: Point, c: Point, pixel: Rgb) {
        raster::fill_triangle(self, a, b, c, pixel);
    }

    pub fn stroke_triangle(&mut self, a: Point, b: Point, c: Point, pixel: Rgb) {
        raster::stroke_triangle(self, a, b, c, pixel);
    }
}

impl PixelSink for PixelBuffer {
    #[inline]
    fn set(&mut self, x: i32, y: i32, pixel: Rgb) -> Result<(), RasterError> {
        PixelBuffer::set(self, x, y, pixel)
    }

    fn extent(&self) -> (i32, i32) {
        (i32::from(self.width), i32::from(self.height))
    }
}

fn alloc_pixels(width: u16, height: u16) -> Result<Vec<Rgb>, RasterError> {
    if width == 0 || height == 0 {
        return Err(RasterError::InvalidDimensions { width, height });
    }
    let len = (width as usize) * (height as usize);
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(len)
        .map_err(|source| RasterError::Allocation { len, source })?;
    pixels.resize(len, Rgb::BLACK);
    Ok(pixels)
}
