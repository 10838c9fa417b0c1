//! Mountable waveform component.
//!
//! The host owns the frame loop: it calls [`WaveformView::tick`] once per
//! frame with the current clock time and paints whatever frame comes back.
//! An unmounted view returns no frames, so unmounting stops all work.

use std::time::Duration;
use tidewave_core::{Diagnostics, Size};
use tracing::debug;

use crate::compositor::{present, Compositor, RenderTarget, WaveFrame};
use crate::config::WaveformConfig;
use crate::driver::PhaseDriver;
use crate::params::WaveformComposition;

#[derive(Debug, Clone)]
struct Mounted {
    container: Size,
    composition: WaveformComposition,
    driver: PhaseDriver,
}

/// A waveform bound to a container while mounted.
#[derive(Debug)]
pub struct WaveformView {
    config: WaveformConfig,
    diagnostics: Diagnostics,
    compositor: Compositor,
    mounted: Option<Mounted>,
}

impl Default for WaveformView {
    fn default() -> Self {
        Self::new(WaveformConfig::default())
    }
}

impl WaveformView {
    pub fn new(config: WaveformConfig) -> Self {
        Self {
            compositor: Compositor::new(config.blur_radius),
            config,
            diagnostics: Diagnostics::new(),
            mounted: None,
        }
    }

    pub fn config(&self) -> &WaveformConfig {
        &self.config
    }

    /// Mount with the composition selected by the config.
    pub fn mount(&mut self, container: Size, speaking: bool, now: Duration) {
        let config = self.sanitized_config();
        let composition = config.composition();
        self.mount_prepared(container, &config, composition, speaking, now);
    }

    /// Mount with an explicit composition; the config still supplies blur
    /// radius and ease length.
    pub fn mount_with(
        &mut self,
        container: Size,
        composition: WaveformComposition,
        speaking: bool,
        now: Duration,
    ) {
        let config = self.sanitized_config();
        self.mount_prepared(container, &config, composition, speaking, now);
    }

    /// Fresh diagnostics and a clamped copy of the config for a new mount.
    fn sanitized_config(&mut self) -> WaveformConfig {
        self.diagnostics.reset();
        let mut config = self.config.clone();
        config.sanitize(&mut self.diagnostics);
        config
    }

    fn mount_prepared(
        &mut self,
        container: Size,
        config: &WaveformConfig,
        mut composition: WaveformComposition,
        speaking: bool,
        now: Duration,
    ) {
        composition.sanitize(&mut self.diagnostics);
        self.compositor = Compositor::new(config.blur_radius);
        let driver = PhaseDriver::new(&composition, speaking, config.amplitude_ease(), now);
        debug!(
            layers = composition.len(),
            width = container.width,
            height = container.height,
            speaking,
            "waveform mounted"
        );
        self.mounted = Some(Mounted {
            container,
            composition,
            driver,
        });
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Flip the speaking signal. Repeating the current value does nothing.
    pub fn set_audio_signal(&mut self, speaking: bool, now: Duration) -> bool {
        match &mut self.mounted {
            Some(m) => m.driver.set_speaking(speaking, now),
            None => false,
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.mounted.as_ref().is_some_and(|m| m.driver.speaking())
    }

    /// Change the container. Phase and amplitude carry over untouched.
    pub fn resize(&mut self, container: Size) {
        if let Some(m) = &mut self.mounted {
            if m.container != container {
                debug!(width = container.width, height = container.height, "waveform resized");
                m.container = container;
            }
        }
    }

    /// Stop everything. Subsequent ticks return `None`.
    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            debug!("waveform unmounted");
        }
    }

    /// Step the driver to `now` and compose a frame.
    pub fn tick(&mut self, now: Duration) -> Option<WaveFrame> {
        let m = self.mounted.as_mut()?;
        m.driver.tick(now);
        let width = if m.container.is_degenerate() {
            0.0
        } else {
            m.container.width
        };
        Some(self.compositor.render(
            &m.composition,
            m.driver.phases(),
            m.driver.amplitudes(),
            width,
        ))
    }

    /// Tick and hand the frame to `target`. Returns whether anything was drawn.
    pub fn tick_into(&mut self, now: Duration, target: &mut dyn RenderTarget) -> bool {
        match self.tick(now) {
            Some(frame) => {
                present(target, &frame, &mut self.diagnostics);
                true
            }
            None => false,
        }
    }

    pub fn container(&self) -> Option<Size> {
        self.mounted.as_ref().map(|m| m.container)
    }

    pub fn composition(&self) -> Option<&WaveformComposition> {
        self.mounted.as_ref().map(|m| &m.composition)
    }

    /// Phases as of the last tick.
    pub fn phases(&self) -> &[f64] {
        self.mounted
            .as_ref()
            .map(|m| m.driver.phases())
            .unwrap_or_default()
    }

    /// Amplitudes as of the last tick.
    pub fn amplitudes(&self) -> &[f64] {
        self.mounted
            .as_ref()
            .map(|m| m.driver.amplitudes())
            .unwrap_or_default()
    }

    /// Diagnostics reported since the last mount.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn test_unmounted_view_emits_nothing() {
        let mut view = WaveformView::default();
        assert!(view.tick(secs(0.0)).is_none());
        view.mount(Size::new(375.0, 300.0), false, secs(0.0));
        assert!(view.tick(secs(0.016)).is_some());
        view.unmount();
        assert!(view.tick(secs(0.033)).is_none());
        assert!(view.tick(secs(0.050)).is_none());
        assert!(!view.set_audio_signal(true, secs(0.06)));
    }

    #[test]
    fn test_phase_survives_resize() {
        let mut view = WaveformView::default();
        view.mount(Size::new(375.0, 300.0), true, secs(0.0));
        let before = view.tick(secs(2.0)).unwrap();
        view.resize(Size::new(768.0, 300.0));
        let after = view.tick(secs(2.0)).unwrap();
        assert_eq!(before.layers[0].phase, after.layers[0].phase);
        assert_eq!(before.layers[0].amplitude, after.layers[0].amplitude);
        assert_eq!(after.band.width, 768.0);
        assert_eq!(after.layers[0].outline.upper.len(), 769);
    }

    #[test]
    fn test_mount_reports_config_problems_once_per_mount() {
        let config = WaveformConfig {
            wave_count: 9.0,
            ..WaveformConfig::default()
        };
        let mut view = WaveformView::new(config);
        view.mount(Size::new(100.0, 100.0), false, secs(0.0));
        assert!(view.diagnostics().has_reported("waveCount"));
        assert_eq!(view.composition().map(WaveformComposition::len), Some(4));

        view.unmount();
        view.mount(Size::new(100.0, 100.0), false, secs(1.0));
        assert_eq!(view.diagnostics().events().len(), 1);
    }

    #[test]
    fn test_audio_phase_offset_applies() {
        let mut view = WaveformView::new(WaveformConfig::audio());
        view.mount(Size::new(300.0, 200.0), false, secs(1.0));
        view.tick(secs(1.0));
        assert_eq!(view.phases()[0], 0.0);
        assert!((view.phases()[1] - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_container_renders_nothing() {
        let mut view = WaveformView::default();
        view.mount(Size::new(300.0, 0.0), false, secs(0.0));
        let frame = view.tick(secs(0.5)).unwrap();
        assert!(frame.is_empty());
    }
}
