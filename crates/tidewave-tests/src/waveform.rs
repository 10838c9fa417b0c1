//! Integration tests for the waveform pipeline.
//!
//! Drives `WaveformView` on a `ManualClock` the way a host's frame loop does,
//! and checks what reaches a render target.

use proptest::prelude::*;
use std::f64::consts::PI;
use std::time::Duration;
use tidewave_core::{FrameClock, FrameRate, ManualClock, Size, TAU};
use tidewave_wave::shape::WaveModel;
use tidewave_wave::{
    generate, Compositor, PhaseDriver, RenderTarget, WaveFrame, WaveformComposition,
    WaveformConfig, WaveformView,
};

// ── Helpers ────────────────────────────────────────────────────

const PHONE: Size = Size {
    width: 375.0,
    height: 150.0,
};

fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

fn mounted(config: WaveformConfig, speaking: bool, clock: &ManualClock) -> WaveformView {
    let mut view = WaveformView::new(config);
    view.mount(PHONE, speaking, clock.now());
    view
}

#[derive(Default)]
struct Recorder {
    frames: Vec<WaveFrame>,
}

impl RenderTarget for Recorder {
    fn supports_blur(&self) -> bool {
        true
    }

    fn draw_waves(&mut self, frame: &WaveFrame) {
        self.frames.push(frame.clone());
    }
}

// ── Seed scenarios ─────────────────────────────────────────────

#[test]
fn quiet_reflection_keeps_base_amplitude_and_sweeps_phase() {
    let clock = ManualClock::new();
    let mut view = mounted(WaveformConfig::reflection(), false, &clock);

    for step in 0..=50 {
        clock.set(Duration::from_millis(step * 100));
        view.tick(clock.now()).unwrap();
        assert_eq!(view.amplitudes()[0], 8.0);
    }

    view.tick(secs(2.5)).unwrap();
    assert!((view.phases()[0] - PI).abs() < 1e-12);
}

#[test]
fn speaking_flip_eases_in_over_half_a_second() {
    let clock = ManualClock::new();
    let mut view = mounted(WaveformConfig::reflection(), false, &clock);

    clock.set(secs(1.0));
    view.tick(clock.now());
    assert!(view.set_audio_signal(true, clock.now()));

    clock.set(secs(1.25));
    view.tick(clock.now());
    let expected = 8.0 + (30.0 - 8.0) * 0.5 * 0.5;
    assert!((view.amplitudes()[0] - expected).abs() < 1e-9);

    clock.set(secs(1.5));
    view.tick(clock.now());
    assert_eq!(view.amplitudes()[0], 30.0);
}

#[test]
fn audio_layer_one_follows_the_formula_at_both_edges() {
    let composition = WaveformComposition::audio();
    let layer = &composition.layers[0];
    assert_eq!(layer.base_amplitude, 3.0);
    assert_eq!(layer.active_amplitude, 10.0);
    assert_eq!(layer.frequency, 0.15);

    let size = Size::new(300.0, 120.0);
    let outline = generate(size, 0.0, 10.0, layer.frequency);
    let first = outline.upper[0];
    assert_eq!((first.x, first.y), (0.0, 60.0));

    // 300 px is 20/3 wavelengths, so the right edge is not a zero crossing.
    let theta = TAU * 300.0 / (300.0 * 0.15);
    let crest = 10.0 * theta.sin()
        + 4.0 * (1.8 * theta).sin()
        + 2.0 * (3.2 * theta).sin()
        + 0.7 * (300.0f64 / 2.5).sin();
    let last = outline.upper[300];
    assert_eq!(last.x, 300.0);
    assert!((last.y - (60.0 - crest)).abs() < 1e-6);
}

#[test]
fn resize_keeps_phase_and_amplitude() {
    let clock = ManualClock::new();
    let mut view = mounted(WaveformConfig::reflection(), true, &clock);

    clock.set(secs(2.0));
    view.tick(clock.now());
    let phases = view.phases().to_vec();
    let amplitudes = view.amplitudes().to_vec();

    view.resize(Size::new(768.0, 150.0));
    let frame = view.tick(clock.now()).unwrap();
    assert_eq!(view.phases(), phases.as_slice());
    assert_eq!(view.amplitudes(), amplitudes.as_slice());

    let layer = &frame.layers[0];
    assert_eq!(layer.outline.upper.len(), 769);
    let model = WaveModel::new(Size::new(768.0, 120.0), phases[0], amplitudes[0], 0.10);
    assert!((model.wavelength.unwrap() - 76.8).abs() < 1e-9);
    for x in [0usize, 100, 384, 768] {
        let expected = model.upper_vertex(x as f64).y + frame.band.y;
        assert!((layer.outline.upper[x].y - expected).abs() < 1e-9);
    }
}

#[test]
fn unmount_within_one_frame_emits_nothing() {
    let clock = ManualClock::new();
    let mut view = mounted(WaveformConfig::reflection(), false, &clock);
    view.unmount();

    // Three frame intervals pass with nothing drawn.
    let mut recorder = Recorder::default();
    for _ in 0..3 {
        clock.advance(FrameRate::FPS_60.frame_duration());
        assert!(!view.tick_into(clock.now(), &mut recorder));
        assert!(view.tick(clock.now()).is_none());
    }
    assert!(recorder.frames.is_empty());
    assert!(!view.set_audio_signal(true, clock.now()));
}

// ── Lifecycle ──────────────────────────────────────────────────

#[test]
fn mounted_view_draws_every_tick() {
    let clock = ManualClock::new();
    let mut view = mounted(WaveformConfig::audio(), false, &clock);
    let mut recorder = Recorder::default();
    for _ in 0..4 {
        clock.advance(FrameRate::FPS_60.frame_duration());
        assert!(view.tick_into(clock.now(), &mut recorder));
    }
    assert_eq!(recorder.frames.len(), 4);
    assert!(recorder.frames.iter().all(|f| f.layers.len() == 3));
    assert!(recorder.frames.iter().all(|f| f.blur_radius == 0.5));
}

#[test]
fn explicit_composition_overrides_the_config() {
    let mut composition = WaveformComposition::audio();
    composition.layers.truncate(1);
    let clock = ManualClock::new();
    let mut view = WaveformView::new(WaveformConfig::reflection());
    view.mount_with(PHONE, composition, true, clock.now());

    let frame = view.tick(clock.now()).unwrap();
    assert_eq!(frame.layers.len(), 1);
    assert_eq!(frame.layers[0].amplitude, 10.0);
    // Blur still comes from the config.
    assert_eq!(frame.blur_radius, 0.5);
}

#[test]
fn repeated_speaking_signal_is_idempotent() {
    let composition = WaveformComposition::reflection();
    let mut driver = PhaseDriver::new(&composition, false, Duration::from_millis(500), secs(0.0));
    assert!(driver.set_speaking(true, secs(1.0)));
    let targets: Vec<f64> = driver.eases().iter().map(|e| e.target()).collect();

    assert!(!driver.set_speaking(true, secs(1.2)));
    let again: Vec<f64> = driver.eases().iter().map(|e| e.target()).collect();
    assert_eq!(targets, again);
    assert_eq!(targets, vec![30.0, 22.0, 15.0, 8.0]);

    // The ease kept its original start, so it lands on time.
    driver.tick(secs(1.5));
    assert_eq!(driver.amplitudes()[0], 30.0);
}

#[test]
fn audio_layers_keep_their_phase_relationships() {
    let clock = ManualClock::new();
    let mut view = mounted(WaveformConfig::audio(), false, &clock);
    view.tick(clock.now());
    assert_eq!(view.phases()[0], 0.0);
    assert!((view.phases()[1] - PI / 4.0).abs() < 1e-12);

    // Layer three runs 1.5× faster than layer one.
    view.tick(secs(0.5));
    let phases = view.phases();
    assert!((phases[0] - PI / 2.0).abs() < 1e-9);
    assert!((phases[2] - 3.0 * PI / 4.0).abs() < 1e-9);
}

#[test]
fn invalid_layers_are_clamped_and_reported_once_per_mount() {
    let json = br#"{
        "waveCount": 3,
        "layers": [
            { "baseAmplitude": -4, "activeAmplitude": 2, "frequency": 0.1,
              "periodSeconds": 0, "opacity": 1.7,
              "gradientStops": [{ "color": { "r": 1, "g": 1, "b": 1, "a": 1 }, "position": 0 }] }
        ]
    }"#;
    let config = WaveformConfig::from_json(json).unwrap();
    let clock = ManualClock::new();
    let mut view = mounted(config, false, &clock);

    let composition = view.composition().unwrap();
    let layer = &composition.layers[0];
    assert_eq!(layer.base_amplitude, 0.0);
    assert_eq!(layer.opacity, 1.0);
    assert!(layer.period_seconds > 0.0);
    let reported = view.diagnostics().events().len();
    assert!(reported >= 3);

    // Ticking does not re-report.
    for _ in 0..5 {
        clock.advance(Duration::from_millis(16));
        view.tick(clock.now());
    }
    assert_eq!(view.diagnostics().events().len(), reported);
}

// ── Properties ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_composited_layer_is_closed(
        width in 1.0f64..1200.0,
        t in 0.0f64..30.0,
        speaking in any::<bool>(),
    ) {
        let composition = WaveformComposition::reflection();
        let mut driver = PhaseDriver::new(&composition, speaking, Duration::from_millis(500), Duration::ZERO);
        driver.tick(secs(t));
        let frame = Compositor::default().render(&composition, driver.phases(), driver.amplitudes(), width);
        prop_assert_eq!(frame.layers.len(), 4);
        for layer in &frame.layers {
            let points = layer.polygon.points();
            prop_assert_eq!(points.first(), points.last());
        }
    }

    #[test]
    fn ease_follows_quadratic_in(ms in 0u64..=500) {
        let composition = WaveformComposition::reflection();
        let mut driver = PhaseDriver::new(&composition, false, Duration::from_millis(500), Duration::ZERO);
        driver.set_speaking(true, secs(1.0));
        driver.tick(secs(1.0) + Duration::from_millis(ms));
        let u = ms as f64 / 500.0;
        let expected = 8.0 + 22.0 * u * u;
        prop_assert!((driver.amplitudes()[0] - expected).abs() < 1e-9);
    }
}
