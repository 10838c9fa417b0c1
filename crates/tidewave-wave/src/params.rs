//! Layer parameters and the reference compositions.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;
use tidewave_core::{palette, Diagnostics, GradientStop, LinearGradient};

/// Smallest accepted phase period.
pub const MIN_PERIOD_SECONDS: f64 = 0.001;

/// Parameters of one wave layer.
///
/// The animated phase itself is owned by the phase driver; `phase_offset` is
/// the phase the layer sits at when the driver starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveParams {
    #[serde(default)]
    pub phase_offset: f64,
    pub base_amplitude: f64,
    pub active_amplitude: f64,
    pub frequency: f64,
    pub gradient_stops: LinearGradient,
    pub opacity: f32,
    pub period_seconds: f64,
}

impl WaveParams {
    pub fn new(
        base_amplitude: f64,
        active_amplitude: f64,
        frequency: f64,
        period_seconds: f64,
        opacity: f32,
        gradient_stops: LinearGradient,
    ) -> Self {
        Self {
            phase_offset: 0.0,
            base_amplitude,
            active_amplitude,
            frequency,
            gradient_stops,
            opacity,
            period_seconds,
        }
    }

    pub fn with_phase_offset(mut self, phase_offset: f64) -> Self {
        self.phase_offset = phase_offset;
        self
    }

    /// Clamp every field into its valid range, reporting each fix once under
    /// `layers[<index>].<field>`.
    pub fn sanitize(&mut self, index: usize, diagnostics: &mut Diagnostics) {
        let key = |field: &str| format!("layers[{index}].{field}");

        if !self.phase_offset.is_finite() {
            diagnostics.report(key("phaseOffset"), "non-finite phase offset reset to 0");
            self.phase_offset = 0.0;
        }
        if !(self.base_amplitude.is_finite() && self.base_amplitude >= 0.0) {
            diagnostics.report(
                key("baseAmplitude"),
                format!("base amplitude {} clamped to 0", self.base_amplitude),
            );
            self.base_amplitude = 0.0;
        }
        if !self.active_amplitude.is_finite() || self.active_amplitude < 0.0 {
            diagnostics.report(
                key("activeAmplitude"),
                format!("active amplitude {} clamped to 0", self.active_amplitude),
            );
            self.active_amplitude = 0.0;
        }
        if self.active_amplitude < self.base_amplitude {
            diagnostics.report(
                key("activeAmplitude"),
                format!(
                    "active amplitude {} raised to base amplitude {}",
                    self.active_amplitude, self.base_amplitude
                ),
            );
            self.active_amplitude = self.base_amplitude;
        }
        if !(self.frequency.is_finite() && self.frequency >= 0.0) {
            diagnostics.report(
                key("frequency"),
                format!("frequency {} treated as flat", self.frequency),
            );
            self.frequency = 0.0;
        }
        if !(self.period_seconds.is_finite() && self.period_seconds > 0.0) {
            diagnostics.report(
                key("periodSeconds"),
                format!(
                    "period {} clamped to {MIN_PERIOD_SECONDS}",
                    self.period_seconds
                ),
            );
            self.period_seconds = MIN_PERIOD_SECONDS;
        } else if self.period_seconds < MIN_PERIOD_SECONDS {
            self.period_seconds = MIN_PERIOD_SECONDS;
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            let clamped = if self.opacity.is_nan() {
                0.0
            } else {
                self.opacity.clamp(0.0, 1.0)
            };
            diagnostics.report(
                key("opacity"),
                format!("opacity {} clamped to {clamped}", self.opacity),
            );
            self.opacity = clamped;
        }
    }
}

/// Ordered layers (back to front) sharing one band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveformComposition {
    pub layers: Vec<WaveParams>,
    /// Height of the visible band in pixels.
    pub height: f64,
    /// Downward shift of the band inside the host container.
    #[serde(default)]
    pub vertical_offset: f64,
}

/// Height of the band used by both reference compositions.
pub const REFERENCE_HEIGHT: f64 = 120.0;
/// Vertical offset used by both reference compositions.
pub const REFERENCE_OFFSET: f64 = 20.0;

impl WaveformComposition {
    pub fn new(layers: Vec<WaveParams>, height: f64) -> Self {
        Self {
            layers,
            height,
            vertical_offset: 0.0,
        }
    }

    pub fn with_vertical_offset(mut self, offset: f64) -> Self {
        self.vertical_offset = offset;
        self
    }

    /// Four-layer water reflection.
    pub fn reflection() -> Self {
        let layers = vec![
            WaveParams::new(
                8.0,
                30.0,
                0.10,
                5.0,
                0.85,
                LinearGradient::evenly_spaced(&[
                    palette::STEEL_BLUE,
                    palette::VIOLET,
                    palette::ROSE,
                ]),
            ),
            WaveParams::new(
                6.0,
                22.0,
                0.13,
                3.5,
                0.70,
                LinearGradient::evenly_spaced(&[
                    palette::SKY_BLUE,
                    palette::PURPLE,
                    palette::DUSTY_ROSE,
                ]),
            ),
            WaveParams::new(
                4.0,
                15.0,
                0.17,
                2.5,
                0.60,
                LinearGradient::evenly_spaced(&[
                    palette::AZURE,
                    palette::INDIGO,
                    palette::LAVENDER,
                ]),
            ),
            WaveParams::new(
                2.0,
                8.0,
                0.22,
                1.8,
                0.50,
                LinearGradient::evenly_spaced(&[
                    palette::CYAN,
                    palette::PALE_CYAN,
                    palette::ORCHID,
                ]),
            ),
        ];
        Self::new(layers, REFERENCE_HEIGHT).with_vertical_offset(REFERENCE_OFFSET)
    }

    /// Three-layer audio waveform. The third layer runs 1.5× faster and the
    /// second is shifted by a quarter of π.
    pub fn audio() -> Self {
        let two_stop = |[a, b]: [tidewave_core::Color; 2]| {
            LinearGradient::new([GradientStop::new(a, 0.0), GradientStop::new(b, 1.0)])
        };
        let layers = vec![
            WaveParams::new(3.0, 10.0, 0.15, 2.0, 0.8, two_stop(palette::AUDIO_1)),
            WaveParams::new(2.0, 7.0, 0.10, 2.0, 0.6, two_stop(palette::AUDIO_2))
                .with_phase_offset(FRAC_PI_4),
            WaveParams::new(1.5, 5.0, 0.20, 2.0 / 1.5, 0.4, two_stop(palette::AUDIO_3)),
        ];
        Self::new(layers, REFERENCE_HEIGHT).with_vertical_offset(REFERENCE_OFFSET)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Largest amplitude any layer can reach.
    pub fn max_amplitude(&self) -> f64 {
        self.layers
            .iter()
            .map(|l| l.active_amplitude.max(l.base_amplitude))
            .fold(0.0, f64::max)
    }

    pub fn sanitize(&mut self, diagnostics: &mut Diagnostics) {
        if !(self.height.is_finite() && self.height >= 0.0) {
            diagnostics.report("height", format!("band height {} clamped to 0", self.height));
            self.height = 0.0;
        }
        if !self.vertical_offset.is_finite() {
            diagnostics.report("verticalOffset", "non-finite vertical offset reset to 0");
            self.vertical_offset = 0.0;
        }
        for (index, layer) in self.layers.iter_mut().enumerate() {
            layer.sanitize(index, diagnostics);
        }
    }
}
