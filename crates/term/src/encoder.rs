//! Frame encoder: turns a pixel buffer into one half-block ANSI frame.
//!
//! Every character cell shows two pixels: the upper-half-block glyph is drawn
//! in the top pixel's color (foreground) over the bottom pixel's color
//! (background). A buffer `h` pixels tall therefore needs `ceil(h / 2)` rows.
//!
//! The frame always starts with a full clear and a cursor home, so every frame
//! is a complete redraw.

use std::fmt;

use anyhow::Result;

use crossterm::{
    cursor,
    terminal::{self, ClearType},
    Command, QueueableCommand,
};

use crate::core::PixelBuffer;
use crate::types::Rgb;

/// Upper half block, U+2580.
pub const HALF_BLOCK: char = '\u{2580}';

/// Style reset and background reset closing every row.
pub const ROW_RESET: &str = "\x1b[0m\x1b[49m";

/// One half-block cell: truecolor foreground and background, then the glyph.
///
/// Written by hand rather than through crossterm's color commands so the
/// bytes stay fixed regardless of `NO_COLOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfBlockCell {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl Command for HalfBlockCell {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}",
            self.top.r, self.top.g, self.top.b, self.bottom.r, self.bottom.g, self.bottom.b, HALF_BLOCK
        )
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "half-block cells require an ANSI terminal",
        ))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

/// End of a row pair: reset styles, then a line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndRow;

impl Command for EndRow {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str(ROW_RESET)?;
        f.write_str("\r\n")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "row reset requires an ANSI terminal",
        ))
    }

    #[cfg(windows)]
    fn is_ansi_code_supported(&self) -> bool {
        true
    }
}

/// Number of text rows a buffer of `height` pixels occupies.
pub fn text_rows(height: u16) -> u16 {
    height / 2 + height % 2
}

/// Encode a full-frame redraw of `fb` into `out`.
///
/// Rows are paired `(0, 1)`, `(2, 3)`, ... With an odd height the last row has
/// no partner and is paired with itself.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(fb: &PixelBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for top_y in (0..fb.height()).step_by(2) {
        let Some(top) = fb.row(top_y) else {
            break;
        };
        let bottom = fb.row(top_y + 1).unwrap_or(top);

        for (&top, &bottom) in top.iter().zip(bottom) {
            out.queue(HalfBlockCell { top, bottom })?;
        }
        out.queue(EndRow)?;
    }

    Ok(())
}

/// Encode a frame into a fresh string. Convenient for tests and snapshots.
pub fn encode_frame(fb: &PixelBuffer) -> Result<String> {
    let mut out = Vec::with_capacity(estimated_frame_len(fb));
    encode_frame_into(fb, &mut out)?;
    Ok(String::from_utf8(out)?)
}

/// Upper bound on a frame's encoded size, used to presize output buffers.
pub fn estimated_frame_len(fb: &PixelBuffer) -> usize {
    // Two 19-byte truecolor escapes plus a 3-byte glyph per cell.
    const CELL_MAX: usize = 19 * 2 + 3;
    const ROW_END: usize = ROW_RESET.len() + 2;
    let rows = text_rows(fb.height()) as usize;
    16 + rows * (fb.width() as usize * CELL_MAX + ROW_END)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(frame: &str) -> &str {
        let start = frame.find("\x1b[38;2;").unwrap_or(frame.len());
        &frame[start..]
    }

    #[test]
    fn cell_bytes_are_fixed() {
        let mut out = Vec::new();
        out.queue(HalfBlockCell {
            top: Rgb::new(1, 2, 3),
            bottom: Rgb::new(40, 50, 60),
        })
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[38;2;1;2;3m\x1b[48;2;40;50;60m\u{2580}"
        );
    }

    #[test]
    fn frame_starts_with_clear() {
        let fb = PixelBuffer::new(2, 2).unwrap();
        let frame = encode_frame(&fb).unwrap();
        assert!(frame.starts_with("\x1b[2J"));
    }

    #[test]
    fn top_pixel_is_foreground_bottom_is_background() {
        let mut fb = PixelBuffer::new(1, 2).unwrap();
        fb.set(0, 0, Rgb::new(9, 8, 7)).unwrap();
        fb.set(0, 1, Rgb::new(1, 2, 3)).unwrap();
        let frame = encode_frame(&fb).unwrap();
        assert_eq!(
            body(&frame),
            "\x1b[38;2;9;8;7m\x1b[48;2;1;2;3m\u{2580}\x1b[0m\x1b[49m\r\n"
        );
    }

    #[test]
    fn odd_last_row_pairs_with_itself() {
        let mut fb = PixelBuffer::new(1, 3).unwrap();
        fb.set(0, 2, Rgb::new(5, 5, 5)).unwrap();
        let frame = encode_frame(&fb).unwrap();
        let rows: Vec<&str> = body(&frame).split_terminator("\r\n").collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            "\x1b[38;2;5;5;5m\x1b[48;2;5;5;5m\u{2580}\x1b[0m\x1b[49m"
        );
    }

    #[test]
    fn text_rows_rounds_up() {
        assert_eq!(text_rows(4), 2);
        assert_eq!(text_rows(5), 3);
        assert_eq!(text_rows(1), 1);
    }

    #[test]
    fn estimate_covers_worst_case_frame() {
        let mut fb = PixelBuffer::new(7, 5).unwrap();
        fb.clear(Rgb::new(255, 255, 255));
        let frame = encode_frame(&fb).unwrap();
        assert!(frame.len() <= estimated_frame_len(&fb));
    }
}
