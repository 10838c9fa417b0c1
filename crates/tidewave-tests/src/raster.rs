//! End-to-end rendering: views ticked on a manual clock, rasterised by the
//! software renderer.

use std::time::Duration;
use tidewave_bars::{BarArray, BarConfig};
use tidewave_core::{FrameClock, FrameRate, ManualClock, Size};
use tidewave_raster::SoftwareRenderer;
use tidewave_wave::{WaveformConfig, WaveformView};

const PHONE: Size = Size {
    width: 375.0,
    height: 150.0,
};

#[test]
fn reflection_renders_and_blurs_without_fallback() {
    let clock = ManualClock::new();
    let mut view = WaveformView::new(WaveformConfig::reflection());
    view.mount(PHONE, true, clock.now());
    clock.set(Duration::from_secs(1));

    let mut renderer = SoftwareRenderer::new();
    assert!(view.tick_into(clock.now(), &mut renderer));

    let fb = renderer.buffer();
    assert_eq!(fb.width, 375);
    // Band plus room for the active 30 px crest to overshoot.
    assert_eq!(fb.height, 156);
    assert!(fb.total_alpha() > 0.0);
    assert!(!view.diagnostics().has_reported("render.blur"));
}

#[test]
fn missing_blur_is_reported_once_per_mount() {
    let clock = ManualClock::new();
    let mut view = WaveformView::new(WaveformConfig::reflection());
    view.mount(PHONE, false, clock.now());

    let mut renderer = SoftwareRenderer::without_blur();
    for _ in 0..5 {
        clock.advance(FrameRate::default().frame_duration());
        assert!(view.tick_into(clock.now(), &mut renderer));
    }
    let blur_events = |view: &WaveformView| {
        view.diagnostics()
            .events()
            .iter()
            .filter(|e| e.key == "render.blur")
            .count()
    };
    assert_eq!(blur_events(&view), 1);
    assert!(renderer.buffer().total_alpha() > 0.0);

    view.unmount();
    view.mount(PHONE, false, clock.now());
    view.tick_into(clock.now(), &mut renderer);
    assert_eq!(blur_events(&view), 1);
}

#[test]
fn resized_view_renders_at_new_width() {
    let clock = ManualClock::new();
    let mut view = WaveformView::new(WaveformConfig::audio());
    view.mount(PHONE, false, clock.now());
    let mut renderer = SoftwareRenderer::new();
    view.tick_into(clock.now(), &mut renderer);
    assert_eq!(renderer.buffer().width, 375);

    view.resize(Size::new(768.0, 150.0));
    clock.advance(FrameRate::default().frame_duration());
    view.tick_into(clock.now(), &mut renderer);
    assert_eq!(renderer.buffer().width, 768);
}

#[test]
fn degenerate_container_paints_nothing() {
    let clock = ManualClock::new();
    let mut view = WaveformView::new(WaveformConfig::reflection());
    view.mount(Size::new(0.0, 150.0), true, clock.now());
    let mut renderer = SoftwareRenderer::new();
    assert!(view.tick_into(clock.now(), &mut renderer));
    assert_eq!(renderer.buffer().total_alpha(), 0.0);
}

#[test]
fn bar_frame_rasterises_inside_its_band() {
    let clock = ManualClock::new();
    let mut array = BarArray::new(BarConfig::deterministic(11));
    array.mount(Size::new(300.0, 80.0), true, clock.now());
    clock.set(Duration::from_millis(800));
    let frame = array.tick(clock.now()).unwrap();

    let mut renderer = SoftwareRenderer::new();
    renderer.draw_bars(&frame);
    let fb = renderer.buffer();
    assert_eq!((fb.width, fb.height), (300, 80));
    assert!(fb.total_alpha() > 0.0);
    // Nothing left of the row.
    let left = frame.band.x.floor() as u32;
    for y in 0..80 {
        assert_eq!(fb.pixel(left.saturating_sub(2), y).unwrap().a, 0.0);
    }
}
