//! Shape demo (default binary).
//!
//! Paints a red/green gradient and animates a growing line, rectangle and
//! triangle over it.

use std::ops::ControlFlow;

use anyhow::Result;
use clap::Parser;
use log::info;

use term_raster::cli::DemoOptions;
use term_raster::core::PixelBuffer;
use term_raster::term::Session;
use term_raster::types::{Rgb, DEFAULT_FPS};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = DemoOptions::parse();
    let mut session = Session::with_config(opts.session_config())?;

    let result = session.run(DEFAULT_FPS, |fb, frame| {
        if opts.done(frame) {
            return ControlFlow::Break(());
        }
        draw(fb, frame);
        ControlFlow::Continue(())
    });

    // Always try to restore terminal state.
    let closed = session.close();
    let frames = result?;
    closed?;
    info!("presented {frames} frames");
    Ok(())
}

fn draw(fb: &mut PixelBuffer, frame: u64) {
    let w = u32::from(fb.width());
    let h = u32::from(fb.height());
    for j in 0..h {
        for i in 0..w {
            let px = Rgb::new(channel(i, w), channel(j, h), 0);
            let _ = fb.set(i as i32, j as i32, px);
        }
    }

    let t = i32::try_from(frame).unwrap_or(i32::MAX);
    fb.draw_line((0, 0), (20, t), Rgb::BLACK);
    fb.fill_rect(20, 30, t, 5, Rgb::BLACK);
    fb.fill_triangle((20, 49), (25, 40), (30i32.saturating_add(t), 49), Rgb::BLACK);
}

/// Gradient step: `i * (255 / n)`, in whole steps.
fn channel(i: u32, n: u32) -> u8 {
    (i * (255 / n)).min(255) as u8
}
