//! Command-line options shared by the demo binaries.

use clap::Parser;

use crate::term::SessionConfig;

#[derive(Parser, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[command(version, about = "Half-block terminal raster demo")]
pub struct DemoOptions {
    /// Stop after this many frames (0 or absent runs until interrupted)
    pub frames: Option<u64>,

    /// Follow the terminal size every frame instead of the fixed 80x50 buffer
    #[arg(long)]
    pub fit: bool,

    /// Draw on the alternate screen with the cursor hidden
    #[arg(long)]
    pub alt_screen: bool,

    /// Draw triangle outlines instead of filled faces
    #[arg(long)]
    pub wireframe: bool,
}

impl DemoOptions {
    /// Frame limit, if any. Zero means unlimited.
    pub fn frame_limit(&self) -> Option<u64> {
        self.frames.filter(|&n| n > 0)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_alternate_screen(self.alt_screen)
            .with_hidden_cursor(self.alt_screen)
            .with_follow_terminal(self.fit)
    }

    /// Whether frame `index` is past the limit.
    pub fn done(&self, index: u64) -> bool {
        self.frame_limit().is_some_and(|limit| index >= limit)
    }
}
