//! Error types for the raster core.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// A write targeted a pixel outside the buffer. Rasterizers drop these.
    #[error("pixel ({x}, {y}) is outside the buffer")]
    OutOfBounds { x: i32, y: i32 },

    #[error("invalid buffer dimensions {width}x{height}: both must be non-zero")]
    InvalidDimensions { width: u16, height: u16 },

    /// The backing store could not be allocated. Not recoverable by callers.
    #[error("failed to allocate {len} pixels")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}
