//! Rotating cube demo.
//!
//! Projects a 20-unit cube through a pinhole camera and fills its twelve
//! triangles. Faces whose projected winding is counter-clockwise are skipped by
//! the rasterizer, which gives back-face culling for free. `--wireframe` draws
//! outlines instead.

use std::ops::ControlFlow;

use anyhow::Result;
use clap::Parser;
use log::info;

use term_raster::cli::DemoOptions;
use term_raster::core::{PixelBuffer, Projection};
use term_raster::term::Session;
use term_raster::types::{Rgb, Vec3, DEFAULT_FPS};

const CUBE_POINTS: [Vec3; 8] = [
    Vec3::new(-10.0, -10.0, 10.0),
    Vec3::new(10.0, -10.0, 10.0),
    Vec3::new(10.0, 10.0, 10.0),
    Vec3::new(-10.0, 10.0, 10.0),
    Vec3::new(-10.0, -10.0, -10.0),
    Vec3::new(10.0, -10.0, -10.0),
    Vec3::new(10.0, 10.0, -10.0),
    Vec3::new(-10.0, 10.0, -10.0),
];

#[rustfmt::skip]
const CUBE_TRIANGLES: [[usize; 3]; 12] = [
    [0, 1, 2], [0, 2, 3],
    [4, 5, 6], [4, 6, 7],
    [0, 3, 7], [0, 7, 4],
    [1, 5, 6], [1, 6, 2],
    [3, 2, 6], [3, 6, 7],
    [0, 1, 5], [0, 5, 4],
];

/// Radians turned per frame around both the x and y axes.
const SPIN_PER_FRAME: f32 = 0.04;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = DemoOptions::parse();
    let projection = Projection::default();
    let mut session = Session::with_config(opts.session_config())?;

    let result = session.run(DEFAULT_FPS, |fb, frame| {
        if opts.done(frame) {
            return ControlFlow::Break(());
        }
        draw_cube(fb, &projection, frame as f32 * SPIN_PER_FRAME, opts.wireframe);
        ControlFlow::Continue(())
    });

    // Always try to restore terminal state.
    let closed = session.close();
    let frames = result?;
    closed?;
    info!("presented {frames} frames");
    Ok(())
}

fn draw_cube(fb: &mut PixelBuffer, projection: &Projection, angle: f32, wireframe: bool) {
    fb.clear(Rgb::BLACK);

    let (w, h) = (fb.width(), fb.height());
    let screen = CUBE_POINTS.map(|p| {
        let projected = projection.project_rotated(p, angle, angle);
        Projection::to_screen(projected, w, h)
    });

    for [a, b, c] in CUBE_TRIANGLES {
        if wireframe {
            fb.stroke_triangle(screen[a], screen[b], screen[c], Rgb::WHITE);
        } else {
            fb.fill_triangle(screen[a], screen[b], screen[c], Rgb::WHITE);
        }
    }
}
