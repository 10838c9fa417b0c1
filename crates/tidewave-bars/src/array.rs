//! Mountable bar array.

use std::time::Duration;
use tidewave_core::{palette, Color, Diagnostics, LinearGradient, Rect, Size};
use tracing::debug;

use crate::bar::{bar_rng, Bar};
use crate::config::{BarConfig, CORNER_RADIUS};

/// One bar ready to paint, in container coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BarPaint {
    pub index: usize,
    pub rect: Rect,
    pub corner_radius: f64,
    pub color: Color,
    /// Top-to-bottom fill.
    pub gradient: LinearGradient,
}

/// All bars for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BarFrame {
    pub container: Size,
    /// The row's band, centred in the container.
    pub band: Rect,
    pub bars: Vec<BarPaint>,
}

impl BarFrame {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Colour of bar `index` in a row of `count`.
pub fn bar_color(index: usize, count: usize) -> Color {
    let factor = if count == 0 {
        0.0
    } else {
        index as f32 / count as f32
    };
    Color::across_anchors(&palette::BAR_ANCHORS, factor)
}

#[derive(Debug, Clone, Copy)]
struct Mounted {
    container: Size,
    animating: bool,
}

/// A row of animated bars.
#[derive(Debug)]
pub struct BarArray {
    config: BarConfig,
    /// Clamped copy of `config` for the current mount.
    active: BarConfig,
    diagnostics: Diagnostics,
    bars: Vec<Bar>,
    mounted: Option<Mounted>,
}

impl Default for BarArray {
    fn default() -> Self {
        Self::new(BarConfig::default())
    }
}

impl BarArray {
    pub fn new(config: BarConfig) -> Self {
        Self {
            active: config.clone(),
            config,
            diagnostics: Diagnostics::new(),
            bars: Vec::new(),
            mounted: None,
        }
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// Clamp a copy of the raw config into `active`.
    fn sanitize_config(&mut self) {
        self.active = self.config.clone();
        self.active.sanitize(&mut self.diagnostics);
    }

    /// Build fresh idle bars and, if requested, start them at `now`.
    pub fn mount(&mut self, container: Size, animating: bool, now: Duration) {
        self.diagnostics.reset();
        self.sanitize_config();
        self.regenerate();
        self.mounted = Some(Mounted {
            container,
            animating: false,
        });
        debug!(bars = self.bars.len(), animating, "bar array mounted");
        self.set_animating(animating, now);
    }

    fn regenerate(&mut self) {
        let count = self.active.count();
        self.bars = (0..count)
            .map(|i| Bar::new(i, count, bar_rng(&self.active, i)))
            .collect();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.mounted.is_some_and(|m| m.animating)
    }

    /// Start or stop every bar. Stopping freezes each bar where it is.
    pub fn set_animating(&mut self, animating: bool, now: Duration) -> bool {
        let Some(m) = &mut self.mounted else {
            return false;
        };
        if m.animating == animating {
            return false;
        }
        m.animating = animating;
        for bar in &mut self.bars {
            if animating {
                bar.start(now);
            } else {
                bar.stop(now);
            }
        }
        debug!(animating, "bar animation toggled");
        true
    }

    /// Replace every bar with `count` new ones.
    pub fn set_bar_count(&mut self, count: usize, now: Duration) {
        self.config.bar_count = i64::try_from(count).unwrap_or(i64::MAX);
        self.sanitize_config();
        self.regenerate();
        debug!(bars = self.bars.len(), "bars regenerated");
        if self.is_animating() {
            for bar in &mut self.bars {
                bar.start(now);
            }
        }
    }

    pub fn resize(&mut self, container: Size) {
        if let Some(m) = &mut self.mounted {
            m.container = container;
        }
    }

    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            debug!("bar array unmounted");
        }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn heights(&self) -> Vec<f64> {
        self.bars.iter().map(Bar::height).collect()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Step every bar to `now` and lay out the frame.
    pub fn tick(&mut self, now: Duration) -> Option<BarFrame> {
        let m = self.mounted?;
        for bar in &mut self.bars {
            bar.advance(now);
        }

        let row = Size::new(self.active.row_width(), self.active.band_height());
        let band = Rect::new(
            (m.container.width - row.width) / 2.0,
            (m.container.height - row.height) / 2.0,
            row.width,
            row.height,
        );
        if m.container.is_degenerate() {
            return Some(BarFrame {
                container: m.container,
                band,
                bars: Vec::new(),
            });
        }

        let count = self.bars.len();
        let bars = self
            .bars
            .iter()
            .map(|bar| {
                let i = bar.index();
                let height = bar.height();
                let color = bar_color(i, count);
                BarPaint {
                    index: i,
                    rect: Rect::new(
                        band.x + i as f64 * self.active.pitch(),
                        band.y + (row.height - height) / 2.0,
                        self.active.bar_width,
                        height,
                    ),
                    corner_radius: CORNER_RADIUS.min(self.active.bar_width / 2.0),
                    color,
                    gradient: LinearGradient::solid(color),
                }
            })
            .collect();

        Some(BarFrame {
            container: m.container,
            band,
            bars,
        })
    }
}
