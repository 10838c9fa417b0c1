//! Night-water theme for the waveform gallery.

use egui::{Color32, Rounding, Stroke};
use tidewave_core::Color;

/// Gallery colours, spacing and frames.
pub struct Theme;

impl Theme {
    // ── Typography ─────────────────────────────────────────────
    pub const FONT_SM: f32 = 13.0; // captions, hints
    pub const FONT_MD: f32 = 16.0; // translation text
    pub const FONT_LG: f32 = 22.0; // screen titles

    // ── Spacing ────────────────────────────────────────────────
    pub const SPACE_SM: f32 = 8.0;
    pub const SPACE_MD: f32 = 16.0;
    pub const SPACE_LG: f32 = 24.0;

    pub const RADIUS: f32 = 10.0;
    pub const RADIUS_PILL: f32 = 22.0;

    // ── Backgrounds ────────────────────────────────────────────
    pub const fn bg() -> Color32 {
        Color32::from_rgb(10, 12, 24)
    }
    pub const fn card() -> Color32 {
        Color32::from_rgb(22, 26, 46)
    }

    // ── Text ───────────────────────────────────────────────────
    pub const fn text() -> Color32 {
        Color32::from_rgb(236, 238, 250)
    }
    pub const fn text_dim() -> Color32 {
        Color32::from_rgba_premultiplied(150, 152, 170, 200)
    }

    // ── Controls ───────────────────────────────────────────────
    pub const fn accent() -> Color32 {
        Color32::from_rgb(66, 193, 247)
    }
    pub const fn stop() -> Color32 {
        Color32::from_rgb(232, 84, 102)
    }

    /// Return a color with replaced alpha.
    pub const fn with_alpha(c: Color32, a: u8) -> Color32 {
        Color32::from_rgba_premultiplied(
            (c.r() as u16 * a as u16 / 255) as u8,
            (c.g() as u16 * a as u16 / 255) as u8,
            (c.b() as u16 * a as u16 / 255) as u8,
            a,
        )
    }

    /// Convert a straight-alpha tidewave colour.
    pub fn color32(color: Color) -> Color32 {
        let [r, g, b, a] = color.to_rgba8();
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    /// Card behind text blocks.
    pub fn card_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Self::card())
            .stroke(Stroke::new(0.5, Self::with_alpha(Self::text(), 24)))
            .rounding(Rounding::same(Self::RADIUS))
            .inner_margin(egui::Margin::same(Self::SPACE_MD))
    }

    /// Apply the theme to an egui context.
    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let visuals = &mut style.visuals;
        *visuals = egui::Visuals::dark();

        visuals.panel_fill = Self::bg();
        visuals.window_fill = Self::card();
        visuals.extreme_bg_color = Self::bg();
        visuals.override_text_color = Some(Self::text());

        visuals.widgets.inactive.bg_fill = Self::card();
        visuals.widgets.inactive.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::accent());
        visuals.widgets.hovered.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, Self::accent());
        visuals.widgets.active.rounding = Rounding::same(Self::RADIUS);

        visuals.selection.bg_fill = Self::with_alpha(Self::accent(), 40);
        visuals.selection.stroke = Stroke::new(1.0, Self::accent());

        ctx.set_style(style);
    }
}
