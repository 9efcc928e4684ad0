use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use term_raster::core::PixelBuffer;
use term_raster::term::encode_frame_into;
use term_raster::types::Rgb;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn draw_and_encode_is_allocation_free_after_warmup() {
    let mut fb = PixelBuffer::new(80, 50).unwrap();
    let mut out = Vec::new();

    // Warm-up grows the output buffer to a full frame.
    fb.clear(Rgb::WHITE);
    encode_frame_into(&fb, &mut out).unwrap();

    let allocs = with_alloc_counting(|| {
        for frame in 0..100i32 {
            fb.clear(Rgb::BLACK);
            fb.draw_line((0, 0), (79, frame % 50), Rgb::WHITE);
            fb.fill_rect(10, 10, frame % 30, 5, Rgb::new(255, 0, 0));
            fb.fill_triangle((20, 49), (25, 40), (30 + frame % 40, 49), Rgb::new(0, 255, 0));
            out.clear();
            encode_frame_into(&fb, &mut out).unwrap();
        }
    });

    assert!(allocs == 0);
}
