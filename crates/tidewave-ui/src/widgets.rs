//! Gallery controls: toggle switch and the round start/stop button.

use crate::theme::Theme;
use egui::{self, Pos2, Rounding, Stroke, Vec2};

/// Toggle switch widget. Returns `true` if clicked (toggled).
pub fn toggle_switch(ui: &mut egui::Ui, on: bool) -> bool {
    let desired_size = Vec2::new(36.0, 20.0);
    let (resp, painter) = ui.allocate_painter(desired_size, egui::Sense::click());
    let rect = resp.rect;

    let pill = Rounding::same(rect.height() / 2.0);
    let track = if on {
        Theme::with_alpha(Theme::accent(), 110)
    } else {
        Theme::with_alpha(Theme::text(), 20)
    };
    painter.rect_filled(rect, pill, track);

    let thumb_radius = 7.0;
    let t = ui
        .ctx()
        .animate_bool_with_time(resp.id.with("toggle_anim"), on, 0.15);
    let thumb_x = egui::lerp(
        rect.left() + thumb_radius + 3.0..=rect.right() - thumb_radius - 3.0,
        t,
    );
    painter.circle_filled(Pos2::new(thumb_x, rect.center().y), thumb_radius, Theme::text());

    resp.clicked()
}

/// Labelled row with a toggle on the right. Returns `true` if toggled.
pub fn toggle_row(ui: &mut egui::Ui, label: &str, on: &mut bool) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).size(Theme::FONT_SM));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if toggle_switch(ui, *on) {
                *on = !*on;
                clicked = true;
            }
        });
    });
    clicked
}

/// Round record button: a square stop glyph while running, a dot otherwise.
/// Returns `true` if clicked.
pub fn record_button(ui: &mut egui::Ui, running: bool) -> bool {
    let size = Vec2::splat(Theme::RADIUS_PILL * 2.0);
    let (resp, painter) = ui.allocate_painter(size, egui::Sense::click());
    let rect = resp.rect;
    let centre = rect.center();

    let ring = if resp.hovered() {
        Theme::accent()
    } else {
        Theme::with_alpha(Theme::text(), 160)
    };
    painter.circle_stroke(centre, Theme::RADIUS_PILL - 1.0, Stroke::new(2.0, ring));

    if running {
        let glyph = egui::Rect::from_center_size(centre, Vec2::splat(14.0));
        painter.rect_filled(glyph, Rounding::same(3.0), Theme::stop());
    } else {
        painter.circle_filled(centre, 9.0, Theme::stop());
    }

    resp.clicked()
}
