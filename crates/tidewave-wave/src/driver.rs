//! Phase driver and speaking-signal amplitude easing.
//!
//! Both are stepped from the same tick and both derive their state from
//! absolute time, so nothing accumulates between frames.

use std::time::Duration;
use tidewave_core::{wrap_phase, Easing, Tween, TAU};
use tracing::debug;

use crate::params::{WaveformComposition, MIN_PERIOD_SECONDS};

/// Default length of an amplitude transition.
pub const DEFAULT_AMPLITUDE_EASE: Duration = Duration::from_millis(500);

/// Phase of a layer `elapsed` seconds after the driver started.
#[inline]
pub fn phase_at(elapsed: f64, period_seconds: f64, offset: f64) -> f64 {
    let period = period_seconds.max(MIN_PERIOD_SECONDS);
    let progress = elapsed.max(0.0).rem_euclid(period) / period;
    wrap_phase(offset + progress * TAU)
}

/// Eases one layer's amplitude between its base and active values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmplitudeEase {
    base: f64,
    active: f64,
    speaking: bool,
    ease: Duration,
    tween: Tween,
}

impl AmplitudeEase {
    /// Start settled at the amplitude selected by `speaking`.
    pub fn new(base: f64, active: f64, speaking: bool, ease: Duration) -> Self {
        let value = if speaking { active } else { base };
        Self {
            base,
            active,
            speaking,
            ease,
            tween: Tween::settled(value),
        }
    }

    pub fn speaking(&self) -> bool {
        self.speaking
    }

    /// The amplitude the ease is heading to.
    pub fn target(&self) -> f64 {
        self.tween.to
    }

    /// Switch the signal at `now`. Returns `false` when the signal is unchanged,
    /// in which case any running ease is left alone.
    ///
    /// A flip in the middle of an ease restarts from the instantaneous value.
    pub fn set_speaking(&mut self, speaking: bool, now: Duration) -> bool {
        if speaking == self.speaking {
            return false;
        }
        let from = self.value_at(now);
        let to = if speaking { self.active } else { self.base };
        self.speaking = speaking;
        self.tween = Tween::new(from, to, now, self.ease, Easing::QuadIn);
        true
    }

    #[inline]
    pub fn value_at(&self, now: Duration) -> f64 {
        self.tween.value_at(now)
    }

    pub fn is_settled(&self, now: Duration) -> bool {
        self.tween.is_finished(now)
    }
}

#[derive(Debug, Clone, Copy)]
struct LayerClock {
    period_seconds: f64,
    offset: f64,
}

/// Advances every layer's phase and amplitude on each tick.
#[derive(Debug, Clone)]
pub struct PhaseDriver {
    started_at: Duration,
    clocks: Vec<LayerClock>,
    eases: Vec<AmplitudeEase>,
    phases: Vec<f64>,
    amplitudes: Vec<f64>,
}

impl PhaseDriver {
    /// Start driving `composition` at `started_at`.
    pub fn new(
        composition: &WaveformComposition,
        speaking: bool,
        ease: Duration,
        started_at: Duration,
    ) -> Self {
        let clocks: Vec<LayerClock> = composition
            .layers
            .iter()
            .map(|l| LayerClock {
                period_seconds: l.period_seconds,
                offset: l.phase_offset,
            })
            .collect();
        let eases: Vec<AmplitudeEase> = composition
            .layers
            .iter()
            .map(|l| AmplitudeEase::new(l.base_amplitude, l.active_amplitude, speaking, ease))
            .collect();
        let phases = clocks.iter().map(|c| wrap_phase(c.offset)).collect();
        let amplitudes = eases.iter().map(|e| e.value_at(started_at)).collect();
        Self {
            started_at,
            clocks,
            eases,
            phases,
            amplitudes,
        }
    }

    pub fn speaking(&self) -> bool {
        self.eases.first().is_some_and(AmplitudeEase::speaking)
    }

    /// Flip every layer's amplitude target. Returns `false` for a repeat of the
    /// current signal.
    pub fn set_speaking(&mut self, speaking: bool, now: Duration) -> bool {
        let mut changed = false;
        for ease in &mut self.eases {
            changed |= ease.set_speaking(speaking, now);
        }
        if changed {
            debug!(speaking, at = ?now, "amplitude ease restarted");
        }
        changed
    }

    /// Recompute phases and amplitudes for `now`.
    pub fn tick(&mut self, now: Duration) {
        let elapsed = now.saturating_sub(self.started_at).as_secs_f64();
        for (phase, clock) in self.phases.iter_mut().zip(&self.clocks) {
            *phase = phase_at(elapsed, clock.period_seconds, clock.offset);
        }
        for (amplitude, ease) in self.amplitudes.iter_mut().zip(&self.eases) {
            *amplitude = ease.value_at(now);
        }
    }

    /// Phases as of the last tick, one per layer, each in `[0, 2π)`.
    pub fn phases(&self) -> &[f64] {
        &self.phases
    }

    /// Amplitudes as of the last tick.
    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    pub fn eases(&self) -> &[AmplitudeEase] {
        &self.eases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn test_phase_half_period_is_pi() {
        assert_eq!(phase_at(2.5, 5.0, 0.0), PI);
        assert_eq!(phase_at(5.0, 5.0, 0.0), 0.0);
        assert!((phase_at(1.25, 5.0, 0.0) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_phase_offset_wraps() {
        let p = phase_at(0.0, 2.0, TAU + 0.5);
        assert!((p - 0.5).abs() < 1e-12);
        let p = phase_at(1.5, 2.0, PI);
        assert!((p - (PI * 2.5 - TAU)).abs() < 1e-9);
    }

    #[test]
    fn test_long_run_does_not_drift() {
        // A day of 60 fps frames lands on the same phase as the closed form.
        let elapsed = 86_400.0 + 1.25;
        assert!((phase_at(elapsed, 5.0, 0.0) - PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_ease_reaches_target_exactly() {
        let mut ease = AmplitudeEase::new(8.0, 30.0, false, DEFAULT_AMPLITUDE_EASE);
        assert_eq!(ease.value_at(secs(0.9)), 8.0);
        assert!(ease.set_speaking(true, secs(1.0)));
        assert!((ease.value_at(secs(1.25)) - 13.5).abs() < 1e-9);
        assert_eq!(ease.value_at(secs(1.5)), 30.0);
        assert!(ease.is_settled(secs(1.5)));
    }

    #[test]
    fn test_repeated_signal_is_idempotent() {
        let mut ease = AmplitudeEase::new(8.0, 30.0, false, DEFAULT_AMPLITUDE_EASE);
        ease.set_speaking(true, secs(1.0));
        let before = ease;
        assert!(!ease.set_speaking(true, secs(1.2)));
        assert_eq!(ease, before);
        assert_eq!(ease.target(), 30.0);
    }

    #[test]
    fn test_mid_ease_flip_restarts_from_current() {
        let mut ease = AmplitudeEase::new(8.0, 30.0, false, DEFAULT_AMPLITUDE_EASE);
        ease.set_speaking(true, secs(1.0));
        let mid = ease.value_at(secs(1.25));
        ease.set_speaking(false, secs(1.25));
        assert!((ease.value_at(secs(1.25)) - mid).abs() < 1e-12);
        assert_eq!(ease.value_at(secs(1.75)), 8.0);
    }

    #[test]
    fn test_driver_ticks_all_layers() {
        let comp = WaveformComposition::reflection();
        let mut driver = PhaseDriver::new(&comp, false, DEFAULT_AMPLITUDE_EASE, secs(10.0));
        driver.tick(secs(12.5));
        assert_eq!(driver.phases()[0], PI);
        assert_eq!(driver.amplitudes(), &[8.0, 6.0, 4.0, 2.0]);

        assert!(driver.set_speaking(true, secs(12.5)));
        assert!(!driver.set_speaking(true, secs(12.6)));
        driver.tick(secs(13.0));
        assert_eq!(driver.amplitudes(), &[30.0, 22.0, 15.0, 8.0]);
    }

    proptest! {
        #[test]
        fn prop_phase_in_range(elapsed in 0.0f64..1e6, period in 0.01f64..100.0, offset in -10.0f64..10.0) {
            let p = phase_at(elapsed, period, offset);
            prop_assert!((0.0..TAU).contains(&p));
        }

        #[test]
        fn prop_ease_stays_between_endpoints(t_ms in 0u64..2000) {
            let mut ease = AmplitudeEase::new(2.0, 8.0, false, DEFAULT_AMPLITUDE_EASE);
            ease.set_speaking(true, Duration::ZERO);
            let v = ease.value_at(Duration::from_millis(t_ms));
            prop_assert!((2.0..=8.0).contains(&v));
            if t_ms >= 500 {
                prop_assert_eq!(v, 8.0);
            } else {
                let u = t_ms as f64 / 500.0;
                prop_assert!((v - (2.0 + 6.0 * u * u)).abs() < 1e-9);
            }
        }
    }
}
