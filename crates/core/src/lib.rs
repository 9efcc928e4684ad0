//! Core raster module - pure, deterministic, and testable
//!
//! This crate owns the pixel buffer and the primitive rasterizer. It performs
//! **no terminal I/O**, which keeps it:
//!
//! - **Deterministic**: the same draw calls always produce the same pixels
//! - **Testable**: every primitive can be checked pixel by pixel
//! - **Portable**: any [`PixelSink`] can be a render target
//!
//! # Module Structure
//!
//! - [`fb`]: row-major RGB [`PixelBuffer`] with bounds-checked writes
//! - [`raster`]: line, rectangle and triangle rasterization over a [`PixelSink`]
//! - [`projection`]: pinhole projection and rotation helpers for 3D demos
//! - [`error`]: the [`RasterError`] taxonomy
//!
//! # Clipping
//!
//! Writes outside the buffer return [`RasterError::OutOfBounds`] from
//! [`PixelBuffer::set`], but the rasterizer drops them silently. Primitives may
//! therefore be drawn partially or entirely off-screen.
//!
//! # Example
//!
//! ```
//! use term_raster_core::PixelBuffer;
//! use term_raster_types::Rgb;
//!
//! let mut fb = PixelBuffer::new(10, 10).unwrap();
//! fb.fill_rect(5, 5, 3, 2, Rgb::WHITE);
//! fb.draw_line((0, 0), (3, 0), Rgb::new(255, 0, 0));
//! fb.fill_triangle((0, 4), (4, 4), (0, 8), Rgb::new(0, 255, 0));
//!
//! assert_eq!(fb.get(6, 6), Some(Rgb::WHITE));
//! assert_eq!(fb.get(3, 0), Some(Rgb::new(255, 0, 0)));
//! assert!(fb.set(10, 0, Rgb::WHITE).is_err());
//! ```

pub mod error;
pub mod fb;
pub mod projection;
pub mod raster;

pub use term_raster_types as types;

pub use error::RasterError;
pub use fb::PixelBuffer;
pub use projection::{rotate_x, rotate_y, rotate_z, Projection};
pub use raster::{draw_line, fill_rect, fill_triangle, stroke_triangle, PixelSink, Point};
