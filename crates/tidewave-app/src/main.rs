//! Tidewave gallery
//!
//! Hosts the reflection waveform, the audio waveform and the bar array, one
//! screen at a time.
//!
//! Usage: `tidewave-gallery [waveform.json] [bars.json]`

mod fonts;
mod screens;

use anyhow::Result;
use eframe::egui;
use screens::{AudioScreen, BarsScreen, ReflectionScreen, ScreenKind};
use std::path::{Path, PathBuf};
use tidewave_bars::BarConfig;
use tidewave_core::{FrameClock, MonotonicClock};
use tidewave_ui::Theme;
use tidewave_wave::WaveformConfig;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    // RUST_LOG wins over the default level
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Tidewave gallery starting...");

    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let waveform = load_waveform_config(args.next().as_deref());
    let bars = load_bar_config(args.next().as_deref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 780.0])
            .with_title("Tidewave"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Tidewave",
        options,
        Box::new(move |cc| Ok(Box::new(GalleryApp::new(cc, waveform, bars)))),
    )?;

    Ok(())
}

/// Load the reflection screen's config, falling back to the reference one.
fn load_waveform_config(path: Option<&Path>) -> WaveformConfig {
    let Some(path) = path else {
        return WaveformConfig::reflection();
    };
    match WaveformConfig::load_from_file(path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded waveform config");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "waveform config unusable, using defaults");
            WaveformConfig::reflection()
        }
    }
}

fn load_bar_config(path: Option<&Path>) -> BarConfig {
    let Some(path) = path else {
        return BarConfig::default();
    };
    match BarConfig::load_from_file(path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded bar config");
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "bar config unusable, using defaults");
            BarConfig::default()
        }
    }
}

struct GalleryApp {
    clock: MonotonicClock,
    current: ScreenKind,
    reflection: ReflectionScreen,
    audio: AudioScreen,
    bars: BarsScreen,
}

impl GalleryApp {
    fn new(cc: &eframe::CreationContext<'_>, waveform: WaveformConfig, bars: BarConfig) -> Self {
        Theme::apply(&cc.egui_ctx);
        fonts::install_cjk_fallback(&cc.egui_ctx);
        Self {
            clock: MonotonicClock::new(),
            current: ScreenKind::default(),
            reflection: ReflectionScreen::new(waveform),
            audio: AudioScreen::new(WaveformConfig::audio()),
            bars: BarsScreen::new(bars),
        }
    }

    fn switch_to(&mut self, kind: ScreenKind) {
        if kind == self.current {
            return;
        }
        match self.current {
            ScreenKind::Reflection => self.reflection.disappear(),
            ScreenKind::Audio => self.audio.disappear(),
            ScreenKind::Bars => self.bars.disappear(),
        }
        info!(screen = kind.title(), "screen switched");
        self.current = kind;
    }

    fn is_animating(&self) -> bool {
        match self.current {
            ScreenKind::Reflection => self.reflection.flags().is_animating,
            ScreenKind::Audio => self.audio.is_animating(),
            ScreenKind::Bars => self.bars.is_animating(),
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.clock.now();

        egui::TopBottomPanel::top("screens").show(ctx, |ui| {
            ui.add_space(Theme::SPACE_SM);
            ui.horizontal(|ui| {
                for kind in ScreenKind::ALL {
                    if ui
                        .selectable_label(self.current == kind, kind.title())
                        .clicked()
                    {
                        self.switch_to(kind);
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (text, color) = if self.is_animating() {
                        ("live", Theme::accent())
                    } else {
                        ("idle", Theme::text_dim())
                    };
                    ui.label(egui::RichText::new(text).size(Theme::FONT_SM).color(color));
                });
            });
            ui.add_space(Theme::SPACE_SM);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(Theme::SPACE_MD);
            match self.current {
                ScreenKind::Reflection => self.reflection.show(ui, now),
                ScreenKind::Audio => self.audio.show(ui, now),
                ScreenKind::Bars => self.bars.show(ui, now),
            }
        });
    }
}
