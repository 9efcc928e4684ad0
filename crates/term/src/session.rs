//! Session: binds a pixel buffer to a terminal output stream.
//!
//! A session owns the buffer, the writer and a reusable byte buffer for
//! encoded frames. Drawing goes through [`Session::buffer_mut`] (or the frame
//! callback of [`Session::run`]); [`Session::present`] flushes one full frame.

use std::io::{self, Write};
use std::ops::ControlFlow;

use anyhow::{Context, Result};
use log::{debug, trace, warn};

use crossterm::{cursor, terminal, QueueableCommand};

use crate::core::PixelBuffer;
use crate::encoder::{encode_frame_into, estimated_frame_len};
use crate::geometry::{buffer_size_for, GeometrySource, TerminalGeometry};
use crate::pacer::FramePacer;
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Session construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Buffer width in pixels (terminal columns).
    pub width: u16,
    /// Buffer height in pixels (two per terminal row).
    pub height: u16,
    /// Draw on the alternate screen and restore the old one on close.
    pub alternate_screen: bool,
    /// Hide the cursor while the session is open.
    pub hide_cursor: bool,
    /// Resize to the terminal before every frame of [`Session::run`].
    pub follow_terminal: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            alternate_screen: false,
            hide_cursor: false,
            follow_terminal: false,
        }
    }
}

impl SessionConfig {
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_alternate_screen(mut self, on: bool) -> Self {
        self.alternate_screen = on;
        self
    }

    pub fn with_hidden_cursor(mut self, on: bool) -> Self {
        self.hide_cursor = on;
        self
    }

    pub fn with_follow_terminal(mut self, on: bool) -> Self {
        self.follow_terminal = on;
        self
    }
}

/// An open render target. Dropping a session without [`Session::close`]
/// still restores the terminal, ignoring write errors.
pub struct Session<W: Write = io::Stdout> {
    fb: PixelBuffer,
    /// `None` once the writer has been handed back by `close`.
    out: Option<W>,
    buf: Vec<u8>,
    config: SessionConfig,
    frames: u64,
}

impl Session<io::Stdout> {
    /// Open a `width` x `height` session on stdout with default settings.
    pub fn open(width: u16, height: u16) -> Result<Self> {
        Self::with_config(SessionConfig::default().with_size(width, height))
    }

    pub fn with_config(config: SessionConfig) -> Result<Self> {
        Session::with_writer(io::stdout(), config)
    }
}

impl<W: Write> Session<W> {
    /// Open a session rendering into `out`.
    ///
    /// Allocation failure of the pixel buffer is returned as an error; there is
    /// nothing sensible a session can do without its buffer.
    pub fn with_writer(out: W, config: SessionConfig) -> Result<Self> {
        let fb = PixelBuffer::new(config.width, config.height).with_context(|| {
            format!(
                "failed to create {}x{} pixel buffer",
                config.width, config.height
            )
        })?;
        let buf = Vec::with_capacity(estimated_frame_len(&fb));
        let mut session = Self {
            fb,
            out: Some(out),
            buf,
            config,
            frames: 0,
        };
        session.enter()?;
        debug!("session opened at {}x{}", config.width, config.height);
        Ok(session)
    }

    fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        if self.config.alternate_screen {
            self.buf.queue(terminal::EnterAlternateScreen)?;
        }
        if self.config.hide_cursor {
            self.buf.queue(cursor::Hide)?;
        }
        self.flush_buf()
    }

    fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.config.hide_cursor {
            self.buf.queue(cursor::Show)?;
        }
        if self.config.alternate_screen {
            self.buf.queue(terminal::LeaveAlternateScreen)?;
        }
        self.flush_buf()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.fb
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.fb
    }

    /// Frames flushed so far.
    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    /// Encode the buffer and write it out as one full-screen frame.
    pub fn present(&mut self) -> Result<()> {
        self.buf.clear();
        encode_frame_into(&self.fb, &mut self.buf)?;
        self.flush_buf()?;
        self.frames += 1;
        trace!("frame {} presented ({} bytes)", self.frames, self.buf.len());
        Ok(())
    }

    /// Resize the buffer to fill a `cols` x `rows` terminal.
    ///
    /// Returns `Ok(false)` and keeps the contents when the geometry already
    /// matches; otherwise the buffer is reallocated zero-filled.
    pub fn resize_to(&mut self, cols: u16, rows: u16) -> Result<bool> {
        let (width, height) = buffer_size_for(cols, rows);
        let changed = self.fb.resize(width, height)?;
        if changed {
            debug!("session resized to {cols}x{rows} cells");
        }
        Ok(changed)
    }

    /// Resize to the current terminal size.
    pub fn resize(&mut self) -> Result<bool> {
        self.resize_from(&TerminalGeometry)
    }

    /// Resize to the geometry reported by `geometry`.
    ///
    /// A failed query, or one reporting an empty terminal, leaves the session
    /// unchanged.
    pub fn resize_from<G: GeometrySource + ?Sized>(&mut self, geometry: &G) -> Result<bool> {
        match geometry.query() {
            Ok((cols, rows)) if cols > 0 && rows > 0 => self.resize_to(cols, rows),
            Ok((cols, rows)) => {
                warn!("ignoring empty terminal geometry {cols}x{rows}");
                Ok(false)
            }
            Err(err) => {
                warn!(
                    "terminal size query failed, keeping {}x{}: {err}",
                    self.fb.width(),
                    self.fb.height()
                );
                Ok(false)
            }
        }
    }

    /// Frame loop: draw, present, pace, until `frame` breaks.
    ///
    /// `frame` receives the buffer and the zero-based frame index. Returning
    /// [`ControlFlow::Break`] stops the loop before that frame is presented.
    /// Returns the number of frames presented.
    pub fn run<F>(&mut self, fps: f32, mut frame: F) -> Result<u64>
    where
        F: FnMut(&mut PixelBuffer, u64) -> ControlFlow<()>,
    {
        let pacer = FramePacer::new(fps);
        let mut index = 0;
        loop {
            if self.config.follow_terminal {
                self.resize()?;
            }
            if frame(&mut self.fb, index).is_break() {
                break;
            }
            self.present()?;
            index += 1;
            pacer.pace();
        }
        debug!("frame loop stopped after {index} frames");
        Ok(index)
    }

    /// Restore the terminal and release the buffer, handing back the writer.
    pub fn close(mut self) -> Result<W> {
        self.exit()?;
        self.out.take().context("session writer already released")
    }

    fn flush_buf(&mut self) -> Result<()> {
        let out = self
            .out
            .as_mut()
            .context("session writer already released")?;
        out.write_all(&self.buf)?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for Session<W> {
    fn drop(&mut self) {
        if self.out.is_none() {
            return;
        }
        if let Err(err) = self.exit() {
            warn!("failed to restore terminal on drop: {err:#}");
        }
    }
}
