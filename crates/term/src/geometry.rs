//! Terminal geometry queries used by session resizing.

use std::io;

use crate::types::PIXEL_ROWS_PER_CELL;

/// Something that can report the terminal size as `(columns, rows)`.
pub trait GeometrySource {
    fn query(&self) -> io::Result<(u16, u16)>;
}

/// The real terminal, queried through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalGeometry;

impl GeometrySource for TerminalGeometry {
    fn query(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }
}

/// A constant geometry, for headless runs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGeometry {
    pub cols: u16,
    pub rows: u16,
}

impl FixedGeometry {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

impl GeometrySource for FixedGeometry {
    fn query(&self) -> io::Result<(u16, u16)> {
        Ok((self.cols, self.rows))
    }
}

/// Pixel buffer size filling a terminal of `cols` x `rows` cells.
///
/// The height is always even: two pixel rows per text row.
pub fn buffer_size_for(cols: u16, rows: u16) -> (u16, u16) {
    (cols, rows.min(u16::MAX / PIXEL_ROWS_PER_CELL) * PIXEL_ROWS_PER_CELL)
}
