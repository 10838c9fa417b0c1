//! Bar array configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tidewave_core::{Diagnostics, Result, TidewaveError};

/// Shortest bar, in pixels.
pub const MIN_HEIGHT: f64 = 3.0;
/// Growth a centre bar may reach above [`MIN_HEIGHT`].
pub const MAX_HEIGHT: f64 = 40.0;
/// Idle heights fall in `[MIN_HEIGHT, MIN_HEIGHT + IDLE_SPREAD]`.
pub const IDLE_SPREAD: f64 = 12.0;
pub const CORNER_RADIUS: f64 = 3.0;

pub const DEFAULT_BAR_COUNT: i64 = 30;
pub const DEFAULT_BAR_WIDTH: f64 = 4.0;
pub const DEFAULT_BAR_GAP: f64 = 4.0;

/// Options recognised by a bar array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarConfig {
    pub bar_count: i64,
    pub bar_width: f64,
    pub bar_gap: f64,
    /// Seed every bar's RNG from `seed` and its index.
    pub deterministic_bars: bool,
    pub seed: u64,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            bar_count: DEFAULT_BAR_COUNT,
            bar_width: DEFAULT_BAR_WIDTH,
            bar_gap: DEFAULT_BAR_GAP,
            deterministic_bars: false,
            seed: 0,
        }
    }
}

impl BarConfig {
    /// Reproducible bars for tests and previews.
    pub fn deterministic(seed: u64) -> Self {
        Self {
            deterministic_bars: true,
            seed,
            ..Self::default()
        }
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data)
            .map_err(|e| TidewaveError::Serialization(format!("Invalid bar config: {}", e)))
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    pub fn sanitize(&mut self, diagnostics: &mut Diagnostics) {
        if self.bar_count < 1 {
            diagnostics.report(
                "barCount",
                format!("bar count {} raised to 1", self.bar_count),
            );
            self.bar_count = 1;
        }
        if !(self.bar_width.is_finite() && self.bar_width >= 0.0) {
            diagnostics.report(
                "barWidth",
                format!("bar width {} clamped to 0", self.bar_width),
            );
            self.bar_width = 0.0;
        }
        if !(self.bar_gap.is_finite() && self.bar_gap >= 0.0) {
            diagnostics.report("barGap", format!("bar gap {} clamped to 0", self.bar_gap));
            self.bar_gap = 0.0;
        }
    }

    /// Bar count as a length; at least one.
    pub fn count(&self) -> usize {
        usize::try_from(self.bar_count.max(1)).unwrap_or(1)
    }

    /// Horizontal distance between consecutive bar origins.
    pub fn pitch(&self) -> f64 {
        self.bar_width + self.bar_gap
    }

    /// Width of the whole row.
    pub fn row_width(&self) -> f64 {
        let n = self.count() as f64;
        n * self.bar_width + (n - 1.0) * self.bar_gap
    }

    /// Height of the band the bars are centred in.
    pub fn band_height(&self) -> f64 {
        MAX_HEIGHT + MIN_HEIGHT
    }
}
