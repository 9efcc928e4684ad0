use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_raster::core::PixelBuffer;
use term_raster::term::encode_frame_into;
use term_raster::types::Rgb;

fn bench_fill_triangle(c: &mut Criterion) {
    let mut fb = PixelBuffer::new(80, 50).unwrap();

    c.bench_function("fill_triangle_80x50", |b| {
        b.iter(|| {
            fb.fill_triangle(
                black_box((2, 2)),
                black_box((77, 10)),
                black_box((20, 47)),
                Rgb::WHITE,
            );
        })
    });
}

fn bench_draw_line(c: &mut Criterion) {
    let mut fb = PixelBuffer::new(80, 50).unwrap();

    c.bench_function("draw_line_diagonal", |b| {
        b.iter(|| {
            fb.draw_line(black_box((0, 0)), black_box((79, 49)), Rgb::WHITE);
        })
    });
}

fn bench_encode_frame(c: &mut Criterion) {
    let mut fb = PixelBuffer::new(80, 50).unwrap();
    for y in 0..50 {
        for x in 0..80 {
            let _ = fb.set(x, y, Rgb::new((x * 3) as u8, (y * 5) as u8, 0));
        }
    }
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_frame_80x50", |b| {
        b.iter(|| {
            out.clear();
            encode_frame_into(black_box(&fb), &mut out).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_fill_triangle,
    bench_draw_line,
    bench_encode_frame
);
criterion_main!(benches);
