//! Waveform configuration.
//!
//! JSON with camelCase keys. Every field is optional; missing fields take the
//! reference defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tidewave_core::{Diagnostics, Result, TidewaveError};

use crate::compositor::DEFAULT_BLUR_RADIUS;
use crate::params::{WaveParams, WaveformComposition};

pub const DEFAULT_WAVE_COUNT: f64 = 4.0;
pub const DEFAULT_AMPLITUDE_EASE_MS: i64 = 500;

/// Options recognised by a waveform view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaveformConfig {
    /// 3 selects the audio composition, 4 the reflection composition. Read as
    /// a plain number so any other value reaches `sanitize`.
    pub wave_count: f64,
    /// Replaces the reference layers when present.
    pub layers: Option<Vec<WaveParams>>,
    pub blur_radius: f64,
    pub amplitude_ease_ms: i64,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            wave_count: DEFAULT_WAVE_COUNT,
            layers: None,
            blur_radius: DEFAULT_BLUR_RADIUS,
            amplitude_ease_ms: DEFAULT_AMPLITUDE_EASE_MS,
        }
    }
}

impl WaveformConfig {
    pub fn reflection() -> Self {
        Self::default()
    }

    pub fn audio() -> Self {
        Self {
            wave_count: 3.0,
            ..Self::default()
        }
    }

    /// Deserialize from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data)
            .map_err(|e| TidewaveError::Serialization(format!("Invalid waveform config: {}", e)))
    }

    /// Serialize to pretty JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| {
            TidewaveError::Serialization(format!("Failed to serialize waveform config: {}", e))
        })
    }

    /// Load from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    /// Clamp out-of-range values in place, reporting each once.
    pub fn sanitize(&mut self, diagnostics: &mut Diagnostics) {
        if !(self.wave_count == 3.0 || self.wave_count == 4.0) {
            diagnostics.report(
                "waveCount",
                format!(
                    "unsupported wave count {}; using {DEFAULT_WAVE_COUNT}",
                    self.wave_count
                ),
            );
            self.wave_count = DEFAULT_WAVE_COUNT;
        }
        if !(self.blur_radius.is_finite() && self.blur_radius >= 0.0) {
            diagnostics.report(
                "blurRadius",
                format!("blur radius {} clamped to 0", self.blur_radius),
            );
            self.blur_radius = 0.0;
        }
        if self.amplitude_ease_ms < 0 {
            diagnostics.report(
                "amplitudeEaseMs",
                format!("amplitude ease {} ms clamped to 0", self.amplitude_ease_ms),
            );
            self.amplitude_ease_ms = 0;
        }
        if let Some(layers) = &mut self.layers {
            for (index, layer) in layers.iter_mut().enumerate() {
                layer.sanitize(index, diagnostics);
            }
        }
    }

    /// The composition this config selects. Custom layers keep the reference
    /// band height and offset.
    pub fn composition(&self) -> WaveformComposition {
        let reference = if self.wave_count == 3.0 {
            WaveformComposition::audio()
        } else {
            WaveformComposition::reflection()
        };
        match &self.layers {
            Some(layers) => WaveformComposition {
                layers: layers.clone(),
                ..reference
            },
            None => reference,
        }
    }

    pub fn amplitude_ease(&self) -> Duration {
        Duration::from_millis(self.amplitude_ease_ms.max(0).unsigned_abs())
    }
}
