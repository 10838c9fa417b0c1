//! Integration tests for the bar array.

use std::time::Duration;
use tidewave_bars::bar::STAGGER;
use tidewave_bars::config::{IDLE_SPREAD, MAX_HEIGHT, MIN_HEIGHT};
use tidewave_bars::{bar_color, ceiling, BarArray, BarConfig, BarState};
use tidewave_core::{palette, Color, FrameClock, ManualClock, Size};

// ── Helpers ────────────────────────────────────────────────────

fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

fn row() -> Size {
    Size::new(375.0, 100.0)
}

fn animating_array(clock: &ManualClock) -> BarArray {
    let mut array = BarArray::new(BarConfig::deterministic(7));
    array.mount(row(), true, clock.now());
    array
}

// ── Seed scenario ──────────────────────────────────────────────

#[test]
fn first_cycles_are_staggered_by_fifty_ms() {
    let clock = ManualClock::new();
    let mut array = animating_array(&clock);
    assert_eq!(array.len(), 30);

    array.tick(clock.now()).unwrap();
    assert_eq!(array.bars()[0].cycle_start(), Some(Duration::ZERO));
    assert_eq!(
        array.bars()[29].state(),
        BarState::Waiting {
            starts_at: Duration::from_millis(1450)
        }
    );

    clock.set(Duration::from_millis(1449));
    array.tick(clock.now());
    assert!(array.bars()[29].cycle_start().is_none());

    clock.set(Duration::from_millis(1450));
    array.tick(clock.now());
    assert_eq!(array.bars()[29].cycle_start(), Some(STAGGER * 29));
}

#[test]
fn centre_bar_has_the_largest_ceiling() {
    let clock = ManualClock::new();
    let array = animating_array(&clock);
    let tallest = array
        .bars()
        .iter()
        .max_by(|a, b| a.ceiling().total_cmp(&b.ceiling()))
        .unwrap();
    assert_eq!(tallest.index(), 15);
    assert_eq!(tallest.ceiling(), MIN_HEIGHT + MAX_HEIGHT);
}

// ── Invariants ─────────────────────────────────────────────────

#[test]
fn ceiling_never_grows_away_from_the_centre() {
    for distance in 0usize..15 {
        let nearer = [15 - distance, 15 + distance];
        let farther = [15 - distance - 1, (15 + distance + 1).min(29)];
        for &a in &nearer {
            for &b in &farther {
                if a.abs_diff(15) <= b.abs_diff(15) {
                    assert!(ceiling(a, 30) >= ceiling(b, 30), "bar {a} vs bar {b}");
                }
            }
        }
    }
}

#[test]
fn bars_sit_on_an_exact_pitch() {
    let clock = ManualClock::new();
    let mut array = animating_array(&clock);
    for t in [0.0, 0.7, 2.3, 5.9] {
        clock.set_secs(t);
        let frame = array.tick(clock.now()).unwrap();
        assert_eq!(frame.bars.len(), 30);
        for (i, bar) in frame.bars.iter().enumerate() {
            assert_eq!(bar.rect.x - frame.band.x, i as f64 * 8.0);
            assert_eq!(bar.rect.width, 4.0);
            assert!(bar.rect.height >= MIN_HEIGHT - 1e-9);
            // Cycles reverse to the idle height, which may sit above an edge
            // bar's ceiling.
            let top = ceiling(i, 30).max(MIN_HEIGHT + IDLE_SPREAD);
            assert!(bar.rect.height <= top + 1e-9);
        }
    }
}

#[test]
fn stopping_freezes_every_bar() {
    let clock = ManualClock::new();
    let mut array = animating_array(&clock);
    clock.set_secs(2.2);
    array.tick(clock.now());
    assert!(array.set_animating(false, clock.now()));
    let frozen = array.heights();

    for t in [2.3, 3.0, 10.0] {
        clock.set_secs(t);
        array.tick(clock.now());
        assert_eq!(array.heights(), frozen);
    }
}

#[test]
fn seeded_arrays_replay_identically() {
    let run = || {
        let clock = ManualClock::new();
        let mut array = animating_array(&clock);
        let mut samples = Vec::new();
        for step in 0..40 {
            clock.set(Duration::from_millis(step * 75));
            array.tick(clock.now());
            samples.push(array.heights());
        }
        samples
    };
    assert_eq!(run(), run());
}

#[test]
fn regenerating_restarts_animation() {
    let clock = ManualClock::new();
    let mut array = animating_array(&clock);
    clock.set_secs(1.0);
    array.set_bar_count(10, clock.now());
    assert_eq!(array.len(), 10);
    assert!(array.bars().iter().all(|b| b.is_animating()));

    // The first new bar starts at the regeneration instant.
    array.tick(clock.now());
    assert_eq!(array.bars()[0].cycle_start(), Some(secs(1.0)));
    let frame = array.tick(clock.now()).unwrap();
    assert_eq!(frame.bars.len(), 10);
}

#[test]
fn colours_run_across_the_three_anchors() {
    let [deep, cyan, violet] = palette::BAR_ANCHORS;
    assert_eq!(bar_color(0, 30), deep);
    assert_eq!(bar_color(15, 30), cyan);
    let last: Color = bar_color(29, 30);
    let expected = cyan.lerp(violet, (29.0f32 / 30.0 - 0.5) * 2.0);
    assert!((last.r - expected.r).abs() < 1e-6);
    assert!((last.b - expected.b).abs() < 1e-6);
}

#[test]
fn unmounted_array_emits_nothing() {
    let clock = ManualClock::new();
    let mut array = animating_array(&clock);
    array.unmount();
    clock.set_secs(0.5);
    assert!(array.tick(clock.now()).is_none());
    assert!(!array.set_animating(true, clock.now()));
}
