//! Per-bar animation state machine.
//!
//! ```text
//!            set_animating(true)          delay elapsed
//!   Idle ───────────────────────▶ Waiting ─────────────▶ Animating ─┐
//!    ▲                               │                      ▲       │ cycle end:
//!    └────── set_animating(false) ───┴──────────────────────┼───────┘ new target
//!            (height freezes)                               └─────────
//! ```
//!
//! One cycle eases from the cycle's base height up to a fresh random target
//! and back again, each half taking the bar's duration.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tidewave_core::{CubicBezier, Easing, Tween};

use crate::config::{BarConfig, IDLE_SPREAD, MAX_HEIGHT, MIN_HEIGHT};

/// Offset between consecutive bars' first cycles.
pub const STAGGER: Duration = Duration::from_millis(50);
/// Half-cycle durations are drawn from this range, in seconds.
pub const DURATION_RANGE: std::ops::RangeInclusive<f64> = 0.5..=1.0;

const CYCLE_EASING: Easing = Easing::Bezier(CubicBezier::EASE_IN_OUT);

/// Weight in `[0, 1]` that peaks at the middle of the row.
pub fn centre_factor(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 1.0;
    }
    let half = count as f64 / 2.0;
    (1.0 - (index as f64 - half).abs() / half).clamp(0.0, 1.0)
}

/// Tallest height bar `index` can ever be asked to reach.
pub fn ceiling(index: usize, count: usize) -> f64 {
    MIN_HEIGHT + MAX_HEIGHT * centre_factor(index, count)
}

/// Per-bar RNG. Deterministic mode mixes the seed with the index.
pub fn bar_rng(config: &BarConfig, index: usize) -> StdRng {
    if config.deterministic_bars {
        let mix = config.seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        StdRng::seed_from_u64(mix)
    } else {
        StdRng::from_entropy()
    }
}

/// Where a bar is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarState {
    Idle,
    /// Animation requested; the first cycle begins at `starts_at`.
    Waiting { starts_at: Duration },
    /// Running the cycle that began at `cycle_start`.
    Animating { cycle_start: Duration, rise: Tween },
}

#[derive(Debug, Clone)]
pub struct Bar {
    index: usize,
    ceiling: f64,
    height: f64,
    duration: Duration,
    state: BarState,
    rng: StdRng,
}

impl Bar {
    /// A new idle bar at a random resting height.
    pub fn new(index: usize, count: usize, mut rng: StdRng) -> Self {
        let height = rng.gen_range(MIN_HEIGHT..=MIN_HEIGHT + IDLE_SPREAD);
        Self {
            index,
            ceiling: ceiling(index, count),
            height,
            duration: Duration::ZERO,
            state: BarState::Idle,
            rng,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    pub fn state(&self) -> BarState {
        self.state
    }

    /// Duration of each half-cycle, fixed when animation starts.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// When the current cycle began, if one is running.
    pub fn cycle_start(&self) -> Option<Duration> {
        match self.state {
            BarState::Animating { cycle_start, .. } => Some(cycle_start),
            _ => None,
        }
    }

    pub fn is_animating(&self) -> bool {
        !matches!(self.state, BarState::Idle)
    }

    /// Schedule animation, first cycle delayed by the bar's stagger.
    pub fn start(&mut self, now: Duration) {
        if self.is_animating() {
            return;
        }
        self.duration = Duration::from_secs_f64(self.rng.gen_range(DURATION_RANGE));
        let delay = STAGGER * u32::try_from(self.index).unwrap_or(u32::MAX);
        self.state = BarState::Waiting {
            starts_at: now.saturating_add(delay),
        };
    }

    /// Abandon the running animation, keeping the height reached at `now`.
    pub fn stop(&mut self, now: Duration) {
        self.advance(now);
        self.state = BarState::Idle;
    }

    /// Step to `now` and return the current height.
    pub fn advance(&mut self, now: Duration) -> f64 {
        if let BarState::Waiting { starts_at } = self.state {
            if now < starts_at {
                return self.height;
            }
            self.state = BarState::Animating {
                cycle_start: starts_at,
                rise: self.next_rise(starts_at, self.height),
            };
        }

        let BarState::Animating {
            mut cycle_start,
            mut rise,
        } = self.state
        else {
            return self.height;
        };
        let cycle = self.duration * 2;
        if cycle.is_zero() {
            return self.height;
        }
        while now >= cycle_start + cycle {
            cycle_start += cycle;
            rise = self.next_rise(cycle_start, rise.from);
        }
        self.state = BarState::Animating { cycle_start, rise };

        let peak = rise.end();
        self.height = if now < peak {
            rise.value_at(now)
        } else {
            Tween::new(rise.to, rise.from, peak, self.duration, CYCLE_EASING).value_at(now)
        };
        self.height
    }

    fn next_rise(&mut self, at: Duration, base: f64) -> Tween {
        let target = self.rng.gen_range(MIN_HEIGHT..=self.ceiling);
        Tween::new(base, target, at, self.duration, CYCLE_EASING)
    }
}
