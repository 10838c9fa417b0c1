//! Gallery screens.
//!
//! Each screen owns its animated component plus the host flags that drive it.
//! Screens mount lazily on first show, with the size the layout hands them,
//! and unmount when the gallery switches away.

use egui::{RichText, Vec2};
use std::time::Duration;
use tidewave_bars::{BarArray, BarConfig};
use tidewave_core::Size;
use tidewave_ui::{bar_array_view, record_button, toggle_row, waveform_view, Theme};
use tidewave_wave::{WaveformConfig, WaveformView};
use tracing::debug;

/// Delay between mounting the reflection screen and its first speaking flip.
pub const AUTO_START_DELAY: Duration = Duration::from_secs(2);

/// Allocated height of the waveform area; the band itself is 120 px.
const WAVE_AREA_HEIGHT: f32 = 150.0;
const BAR_AREA_HEIGHT: f32 = 100.0;
const MAX_BAR_COUNT: usize = 60;

const ORIGINAL_TEXT: &str = "How can I cook for you? Rare Well";
const TRANSLATED_TEXT: &str = "我可以为您推荐我们的招牌菜，我们这里的菜非常好吃，鱼不错，鸡肉不错，必须点的，\
如果你喜欢吃点辣的，可以来这个剁椒鱼头，您觉得如何？请您告诉我您喜欢哪些？";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenKind {
    #[default]
    Reflection,
    Audio,
    Bars,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 3] = [Self::Reflection, Self::Audio, Self::Bars];

    pub fn title(self) -> &'static str {
        match self {
            Self::Reflection => "Reflection waveform",
            Self::Audio => "Audio waveform",
            Self::Bars => "Bar array",
        }
    }
}

/// Flags owned by the host, not by the components.
///
/// The two are independent: stopping the animation never hides or shows the
/// translation by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostFlags {
    pub is_animating: bool,
    pub show_translation: bool,
}

impl Default for HostFlags {
    fn default() -> Self {
        Self {
            is_animating: false,
            show_translation: true,
        }
    }
}

fn container(size: Vec2) -> Size {
    Size::new(size.x as f64, size.y as f64)
}

fn title(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(text).size(Theme::FONT_LG).strong());
    });
}

fn prompt(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Please speak,").size(Theme::FONT_LG * 1.8).strong());
        ui.label(RichText::new("I'm listening").size(Theme::FONT_LG * 1.8).strong());
        ui.label(
            RichText::new("请说话，我在听")
                .size(Theme::FONT_MD)
                .color(Theme::text_dim()),
        );
    });
}

fn text_block(ui: &mut egui::Ui, text: &str) {
    Theme::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(text).size(Theme::FONT_MD));
    });
}

/// Prompt while listening, or the original and translated text blocks.
fn translation_panel(ui: &mut egui::Ui, show_translation: bool) {
    if show_translation {
        text_block(ui, ORIGINAL_TEXT);
        ui.add_space(Theme::SPACE_SM);
        text_block(ui, TRANSLATED_TEXT);
    } else {
        prompt(ui);
    }
}

/// Four-layer reflection waveform under a translation panel. Speaking starts
/// on its own two seconds after the screen appears.
pub struct ReflectionScreen {
    view: WaveformView,
    flags: HostFlags,
    auto_start_at: Option<Duration>,
}

impl ReflectionScreen {
    pub fn new(config: WaveformConfig) -> Self {
        Self {
            view: WaveformView::new(config),
            flags: HostFlags::default(),
            auto_start_at: None,
        }
    }

    pub fn flags(&self) -> HostFlags {
        self.flags
    }

    #[cfg(test)]
    pub fn view(&self) -> &WaveformView {
        &self.view
    }

    pub fn appear(&mut self, container: Size, now: Duration) {
        self.flags = HostFlags::default();
        self.view.mount(container, self.flags.is_animating, now);
        self.auto_start_at = Some(now + AUTO_START_DELAY);
    }

    pub fn disappear(&mut self) {
        self.view.unmount();
        self.auto_start_at = None;
    }

    /// Fire the pending auto-start once its instant has passed. The ease is
    /// anchored at the scheduled instant, not at the frame that noticed it.
    pub fn update(&mut self, now: Duration) {
        let Some(at) = self.auto_start_at else {
            return;
        };
        if now < at {
            return;
        }
        self.auto_start_at = None;
        self.flags.is_animating = true;
        self.view.set_audio_signal(true, at);
        debug!(at = ?at, "auto-start fired");
    }

    /// Stop button. Also cancels a pending auto-start.
    pub fn toggle_animating(&mut self, now: Duration) {
        self.auto_start_at = None;
        self.flags.is_animating = !self.flags.is_animating;
        self.view.set_audio_signal(self.flags.is_animating, now);
    }

    pub fn set_show_translation(&mut self, show: bool) {
        if self.flags.show_translation != show {
            debug!(show, "translation visibility changed");
            self.flags.show_translation = show;
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, now: Duration) {
        self.update(now);
        title(ui, ScreenKind::Reflection.title());
        ui.add_space(Theme::SPACE_LG);
        translation_panel(ui, self.flags.show_translation);
        ui.add_space(Theme::SPACE_LG);

        let size = Vec2::new(ui.available_width(), WAVE_AREA_HEIGHT);
        if !self.view.is_mounted() {
            self.appear(container(size), now);
        }
        waveform_view(ui, &mut self.view, size, now);

        ui.add_space(Theme::SPACE_MD);
        ui.vertical_centered(|ui| {
            if record_button(ui, self.flags.is_animating) {
                self.toggle_animating(now);
            }
        });
        ui.add_space(Theme::SPACE_MD);
        let mut show = self.flags.show_translation;
        if toggle_row(ui, "Show translation", &mut show) {
            self.set_show_translation(show);
        }
    }
}

/// Three-layer audio waveform with a start/stop button.
pub struct AudioScreen {
    view: WaveformView,
    is_animating: bool,
}

impl AudioScreen {
    pub fn new(config: WaveformConfig) -> Self {
        Self {
            view: WaveformView::new(config),
            is_animating: false,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    #[cfg(test)]
    pub fn view(&self) -> &WaveformView {
        &self.view
    }

    pub fn appear(&mut self, container: Size, now: Duration) {
        self.view.mount(container, self.is_animating, now);
    }

    pub fn disappear(&mut self) {
        self.view.unmount();
    }

    pub fn toggle(&mut self, now: Duration) {
        self.is_animating = !self.is_animating;
        self.view.set_audio_signal(self.is_animating, now);
    }

    pub fn show(&mut self, ui: &mut egui::Ui, now: Duration) {
        title(ui, ScreenKind::Audio.title());
        ui.add_space(Theme::SPACE_LG);
        prompt(ui);
        ui.add_space(Theme::SPACE_LG);

        let size = Vec2::new(ui.available_width(), WAVE_AREA_HEIGHT);
        if !self.view.is_mounted() {
            self.appear(container(size), now);
        }
        waveform_view(ui, &mut self.view, size, now);

        ui.add_space(Theme::SPACE_MD);
        ui.vertical_centered(|ui| {
            let label = if self.is_animating { "Stop" } else { "Start" };
            if ui.button(RichText::new(label).size(Theme::FONT_MD)).clicked() {
                self.toggle(now);
            }
        });
    }
}

/// Row of centre-biased bars with a bar-count slider.
pub struct BarsScreen {
    bars: BarArray,
    is_animating: bool,
    bar_count: usize,
}

impl BarsScreen {
    pub fn new(config: BarConfig) -> Self {
        let bar_count = config.count();
        Self {
            bars: BarArray::new(config),
            is_animating: false,
            bar_count,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    #[cfg(test)]
    pub fn bars(&self) -> &BarArray {
        &self.bars
    }

    pub fn appear(&mut self, container: Size, now: Duration) {
        self.bars.mount(container, self.is_animating, now);
        if self.bars.len() != self.bar_count {
            self.bars.set_bar_count(self.bar_count, now);
        }
    }

    pub fn disappear(&mut self) {
        self.bars.unmount();
    }

    pub fn toggle(&mut self, now: Duration) {
        self.is_animating = !self.is_animating;
        self.bars.set_animating(self.is_animating, now);
    }

    pub fn set_bar_count(&mut self, count: usize, now: Duration) {
        let count = count.clamp(1, MAX_BAR_COUNT);
        if count != self.bar_count {
            self.bar_count = count;
            self.bars.set_bar_count(count, now);
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, now: Duration) {
        title(ui, ScreenKind::Bars.title());
        ui.add_space(Theme::SPACE_LG);

        let size = Vec2::new(ui.available_width(), BAR_AREA_HEIGHT);
        if !self.bars.is_mounted() {
            self.appear(container(size), now);
        }
        bar_array_view(ui, &mut self.bars, size, now);

        ui.add_space(Theme::SPACE_MD);
        let mut count = self.bar_count;
        ui.horizontal(|ui| {
            ui.label(RichText::new("Bars").size(Theme::FONT_SM));
            ui.add(egui::Slider::new(&mut count, 1..=MAX_BAR_COUNT));
        });
        self.set_bar_count(count, now);

        ui.add_space(Theme::SPACE_MD);
        ui.vertical_centered(|ui| {
            if record_button(ui, self.is_animating) {
                self.toggle(now);
            }
        });
    }
}
