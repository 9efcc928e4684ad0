use std::ops::ControlFlow;

use clap::Parser;

use term_raster::cli::DemoOptions;
use term_raster::term::{FixedGeometry, Session, SessionConfig, HALF_BLOCK};
use term_raster::types::Rgb;

#[test]
fn resize_to_unchanged_geometry_round_trips() {
    let config = SessionConfig::default().with_size(40, 20);
    let mut session = Session::with_writer(Vec::new(), config).unwrap();
    session.buffer_mut().fill_rect(0, 0, 40, 20, Rgb::WHITE);
    let before = session.buffer().clone();

    assert!(!session.resize_from(&FixedGeometry::new(40, 10)).unwrap());
    assert_eq!(session.buffer(), &before);
}

#[test]
fn resize_tracks_terminal_rows_at_double_height() {
    let mut session = Session::with_writer(Vec::new(), SessionConfig::default()).unwrap();
    assert!(session.resize_to(100, 30).unwrap());
    assert_eq!(session.buffer().width(), 100);
    assert_eq!(session.buffer().height(), 60);
}

#[test]
fn frame_limited_run_presents_each_frame() {
    let opts = DemoOptions::try_parse_from(["demo", "3"]).unwrap();
    let config = SessionConfig::default().with_size(4, 2);
    let mut session = Session::with_writer(Vec::new(), config).unwrap();

    let presented = session
        .run(0.0, |fb, frame| {
            if opts.done(frame) {
                return ControlFlow::Break(());
            }
            fb.draw_line((0, 0), (3, 1), Rgb::WHITE);
            ControlFlow::Continue(())
        })
        .unwrap();
    assert_eq!(presented, 3);

    let out = String::from_utf8(session.close().unwrap()).unwrap();
    assert_eq!(out.matches(HALF_BLOCK).count(), 3 * 4);
}
