//! Primitive rasterizer: lines, rectangles and filled triangles.
//!
//! All primitives write through [`PixelSink::set`] and ignore its error, so
//! anything falling outside the target is clipped by omission. Rectangle and
//! triangle scans are limited to the sink's extent; this never changes which
//! pixels end up written.

use crate::error::RasterError;
use crate::types::Rgb;

/// Integer pixel coordinate `(x, y)`.
pub type Point = (i32, i32);

/// A render target the rasterizer can write into.
pub trait PixelSink {
    /// Write one pixel, or report [`RasterError::OutOfBounds`].
    fn set(&mut self, x: i32, y: i32, pixel: Rgb) -> Result<(), RasterError>;

    /// `(width, height)` of the writable area.
    fn extent(&self) -> (i32, i32);
}

#[inline]
fn plot<S: PixelSink + ?Sized>(sink: &mut S, x: i32, y: i32, pixel: Rgb) {
    let _ = sink.set(x, y, pixel);
}

/// Bresenham line from `from` to `to`, both endpoints included.
///
/// Step directions come from a strict `<` test, so an axis with equal start and
/// end coordinates gets direction `-1`. That axis never steps, but the choice is
/// kept so the output matches pixel for pixel. Exact error ties are resolved
/// in walking order, so a few shallow lines differ by one pixel from their
/// reverse.
///
/// A line whose bounding box misses the sink entirely is skipped. Otherwise the
/// walk costs `max(|dx|, |dy|) + 1` steps even when most of them land
/// off-screen.
pub fn draw_line<S: PixelSink + ?Sized>(sink: &mut S, from: Point, to: Point, pixel: Rgb) {
    let (mut x, mut y) = from;
    let (x2, y2) = to;

    let (ew, eh) = sink.extent();
    if x.max(x2) < 0 || y.max(y2) < 0 || x.min(x2) >= ew || y.min(y2) >= eh {
        return;
    }

    let dx = (i64::from(x2) - i64::from(x)).abs();
    let dy = -(i64::from(y2) - i64::from(y)).abs();
    let dir_x = if x < x2 { 1 } else { -1 };
    let dir_y = if y < y2 { 1 } else { -1 };
    let mut error = dx + dy;

    loop {
        plot(sink, x, y, pixel);
        let error_d = 2 * error;

        if error_d >= dy {
            if x == x2 {
                break;
            }
            error += dy;
            x += dir_x;
        }

        if error_d <= dx {
            if y == y2 {
                break;
            }
            error += dx;
            y += dir_y;
        }
    }
}

/// Fill every `(i, j)` with `x <= i < x + w` and `y <= j < y + h`.
///
/// Non-positive `w` or `h` draws nothing.
pub fn fill_rect<S: PixelSink + ?Sized>(sink: &mut S, x: i32, y: i32, w: i32, h: i32, pixel: Rgb) {
    if w <= 0 || h <= 0 {
        return;
    }
    let (ew, eh) = sink.extent();
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = x.saturating_add(w).min(ew);
    let y1 = y.saturating_add(h).min(eh);

    for j in y0..y1 {
        for i in x0..x1 {
            plot(sink, i, j, pixel);
        }
    }
}

/// One triangle edge as a half-plane: the edge start plus the perpendicular of
/// the edge vector.
///
/// Normals span up to 2^33 and offsets up to 2^32 for `i32` vertices, so the
/// products are taken in `i128`.
#[derive(Debug, Clone, Copy)]
struct Edge {
    origin: (i64, i64),
    normal: (i64, i64),
}

impl Edge {
    fn new(from: Point, to: Point) -> Self {
        let origin = (i64::from(from.0), i64::from(from.1));
        let dir = (i64::from(to.0) - origin.0, i64::from(to.1) - origin.1);
        Self {
            origin,
            normal: perpendicular(dir),
        }
    }

    #[inline]
    fn contains(&self, i: i32, j: i32) -> bool {
        let rel = (i64::from(i) - self.origin.0, i64::from(j) - self.origin.1);
        dot(self.normal, rel) <= 0
    }
}

#[inline]
fn perpendicular(v: (i64, i64)) -> (i64, i64) {
    (v.1, -v.0)
}

#[inline]
fn dot(a: (i64, i64), b: (i64, i64)) -> i128 {
    i128::from(a.0) * i128::from(b.0) + i128::from(a.1) * i128::from(b.1)
}

/// Fill the triangle `a`, `b`, `c` by half-plane tests over its bounding box.
///
/// A point is inside when it is on the non-positive side of all three edges
/// `ab`, `bc`, `ca`, edges included. Only clockwise-on-screen winding (with y
/// pointing down) fills; the opposite winding draws nothing. Collinear vertices
/// fill exactly the lattice points on the segment between them.
pub fn fill_triangle<S: PixelSink + ?Sized>(sink: &mut S, a: Point, b: Point, c: Point, pixel: Rgb) {
    let (ew, eh) = sink.extent();
    let min_x = a.0.min(b.0).min(c.0).max(0);
    let min_y = a.1.min(b.1).min(c.1).max(0);
    let max_x = a.0.max(b.0).max(c.0).min(ew - 1);
    let max_y = a.1.max(b.1).max(c.1).min(eh - 1);

    let edges = [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)];

    for j in min_y..=max_y {
        for i in min_x..=max_x {
            if edges.iter().all(|e| e.contains(i, j)) {
                plot(sink, i, j, pixel);
            }
        }
    }
}

/// Outline the triangle `a`, `b`, `c` with three lines. Winding does not matter.
pub fn stroke_triangle<S: PixelSink + ?Sized>(sink: &mut S, a: Point, b: Point, c: Point, pixel: Rgb) {
    draw_line(sink, a, b, pixel);
    draw_line(sink, b, c, pixel);
    draw_line(sink, c, a, pixel);
}
