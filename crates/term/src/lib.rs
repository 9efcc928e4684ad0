//! Terminal output layer.
//!
//! This crate flushes a [`PixelBuffer`](crate::core::PixelBuffer) to a truecolor
//! ANSI terminal. It does no diffing: every frame is a full clear followed by
//! a complete redraw, two pixel rows per text row.
//!
//! Pieces:
//! - [`encoder`]: buffer to half-block ANSI bytes, pure and unit-tested
//! - [`session`]: buffer + writer lifecycle, resize and the frame loop
//! - [`pacer`]: fixed-rate sleep between frames
//! - [`geometry`]: terminal size queries

pub mod encoder;
pub mod geometry;
pub mod pacer;
pub mod session;

pub use term_raster_core as core;
pub use term_raster_types as types;

pub use encoder::{encode_frame, encode_frame_into, HALF_BLOCK, ROW_RESET};
pub use geometry::{buffer_size_for, FixedGeometry, GeometrySource, TerminalGeometry};
pub use pacer::{frame_interval, pace, FramePacer};
pub use session::{Session, SessionConfig};
