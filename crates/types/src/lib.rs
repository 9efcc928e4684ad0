//! Core types module - shared value types and constants
//!
//! This module defines the plain data used throughout the workspace.
//! Everything here is a pure value type with no external dependencies, so the
//! rasterizer, the terminal encoder and the demo programs can all share it.
//!
//! # Display Geometry
//!
//! A pixel buffer maps onto the terminal through half-block glyphs: every
//! character cell shows two vertically stacked pixels. A terminal with `rows`
//! text rows therefore needs a buffer `2 * rows` pixels tall.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 80 | Buffer width in pixels (= terminal columns) |
//! | `DEFAULT_HEIGHT` | 50 | Buffer height in pixels (= 25 terminal rows) |
//! | `PIXEL_ROWS_PER_CELL` | 2 | Pixel rows packed into one character row |
//! | `DEFAULT_FPS` | 20 | Frame pacing rate used by the demos |
//!
//! # Projection
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FOCAL_LENGTH` | 24 | Pinhole focal length in pixels |
//! | `DEFAULT_CAMERA_DISTANCE` | 30 | Distance pushed along +z before projecting |
//! | `MIN_DEPTH` | 0.1 | Depth clamp that keeps the divide finite |
//!
//! # Examples
//!
//! ```
//! use term_raster_types::{Rgb, Vec2, Vec3};
//!
//! let red = Rgb::new(255, 0, 0);
//! assert_eq!(red, Rgb { r: 255, g: 0, b: 0 });
//!
//! let edge = Vec2::new(4.0, 0.0);
//! // Perpendicular of (x, y) is (y, -x).
//! assert_eq!(edge.perpendicular(), Vec2::new(0.0, -4.0));
//! assert_eq!(edge.dot(Vec2::new(1.0, 1.0)), 4.0);
//!
//! let p = Vec3::new(1.0, 2.0, 3.0);
//! assert_eq!(p.z, 3.0);
//! ```

/// Default buffer width in pixels.
pub const DEFAULT_WIDTH: u16 = 80;

/// Default buffer height in pixels (two pixel rows per terminal row).
pub const DEFAULT_HEIGHT: u16 = 50;

/// Pixel rows packed into one character row by the half-block glyph.
pub const PIXEL_ROWS_PER_CELL: u16 = 2;

/// Default frame pacing rate in frames per second.
pub const DEFAULT_FPS: f32 = 20.0;

/// Default pinhole focal length used by [`Vec3`] projection in the demos.
pub const DEFAULT_FOCAL_LENGTH: f32 = 24.0;

/// Default distance a model is pushed along +z before projection.
pub const DEFAULT_CAMERA_DISTANCE: f32 = 30.0;

/// Smallest depth a point is projected at.
pub const MIN_DEPTH: f32 = 0.1;

/// 24-bit RGB color; one pixel of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// 2D float vector for client-side math.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// `(x, y)` rotated a quarter turn to `(y, -x)`.
    #[inline]
    pub fn perpendicular(self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// 3D float vector for client-side math.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}
