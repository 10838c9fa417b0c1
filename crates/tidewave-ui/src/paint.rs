//! Paint tidewave frames into an egui [`Painter`].
//!
//! Wave layers become vertex-coloured triangle meshes: each upper crest vertex
//! is paired with the underside vertex at the same column, so the left-to-right
//! gradient is carried by per-vertex colours. egui has no blur, so this target
//! reports no blur capability and the compositor's fallback applies.

use egui::{epaint::Mesh, Color32, Painter, Pos2, Rect, Rounding, Shape, Vec2};
use std::time::Duration;
use tidewave_bars::{BarArray, BarFrame};
use tidewave_core::{FrameRate, Point};
use tidewave_wave::{LayerPaint, RenderTarget, WaveFrame, WaveformView};

use crate::theme::Theme;

#[inline]
fn pos(origin: Pos2, p: Point) -> Pos2 {
    Pos2::new(origin.x + p.x as f32, origin.y + p.y as f32)
}

fn layer_color(layer: &LayerPaint, x: f64) -> Color32 {
    let rect = layer.gradient_rect;
    let t = if rect.width > 0.0 {
        ((x - rect.x) / rect.width) as f32
    } else {
        0.0
    };
    Theme::color32(layer.gradient.sample(t).with_opacity(layer.opacity))
}

/// Triangulate one layer, with surface coordinates offset by `origin`.
pub fn wave_mesh(layer: &LayerPaint, origin: Pos2) -> Mesh {
    let mut mesh = Mesh::default();
    let outline = &layer.outline;
    if outline.is_empty() || layer.opacity <= 0.0 {
        return mesh;
    }
    let columns = outline.upper.len().min(outline.lower.len());

    for i in 0..columns {
        let top = outline.upper[i];
        let bottom = outline.lower[outline.lower.len() - 1 - i];
        mesh.colored_vertex(pos(origin, top), layer_color(layer, top.x));
        mesh.colored_vertex(pos(origin, bottom), layer_color(layer, bottom.x));
    }
    for i in 0..columns.saturating_sub(1) as u32 {
        let (t0, b0, t1, b1) = (2 * i, 2 * i + 1, 2 * i + 2, 2 * i + 3);
        mesh.add_triangle(t0, b0, t1);
        mesh.add_triangle(t1, b0, b1);
    }

    // Close the left edge through the start vertex and the right edge through
    // the hinge.
    let start = mesh.vertices.len() as u32;
    mesh.colored_vertex(pos(origin, outline.start), layer_color(layer, outline.start.x));
    mesh.colored_vertex(pos(origin, outline.hinge), layer_color(layer, outline.hinge.x));
    if columns > 0 {
        let last = columns as u32 - 1;
        mesh.add_triangle(start, 0, 1);
        mesh.add_triangle(start + 1, 2 * last, 2 * last + 1);
    }
    mesh
}

/// A [`RenderTarget`] backed by an egui painter.
pub struct EguiWaveTarget<'a> {
    painter: &'a Painter,
    /// Container position of the band's top-left corner.
    origin: Pos2,
}

impl<'a> EguiWaveTarget<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }
}

impl RenderTarget for EguiWaveTarget<'_> {
    fn supports_blur(&self) -> bool {
        false
    }

    fn draw_waves(&mut self, frame: &WaveFrame) {
        let surface = frame.surface_origin();
        let origin = self.origin + Vec2::new(surface.x as f32, surface.y as f32);
        for layer in &frame.layers {
            let mesh = wave_mesh(layer, origin);
            if !mesh.is_empty() {
                self.painter.add(Shape::mesh(mesh));
            }
        }
    }
}

/// Paint a bar frame with `origin` as the container's top-left corner.
pub fn paint_bars(painter: &Painter, origin: Pos2, frame: &BarFrame) {
    for bar in &frame.bars {
        let min = pos(origin, Point::new(bar.rect.x, bar.rect.y));
        let size = Vec2::new(bar.rect.width as f32, bar.rect.height as f32);
        let rect = Rect::from_min_size(min, size);
        painter.rect_filled(
            rect,
            Rounding::same(bar.corner_radius as f32),
            Theme::color32(bar.color),
        );
    }
}

/// Allocate `size`, tick `view` at `now` and paint the frame. The waveform is
/// laid out from the top of the allocation.
pub fn waveform_view(
    ui: &mut egui::Ui,
    view: &mut WaveformView,
    size: Vec2,
    now: Duration,
) -> egui::Response {
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;
    view.resize(tidewave_core::Size::new(rect.width() as f64, rect.height() as f64));
    let mut target = EguiWaveTarget::new(&painter, rect.min);
    if view.tick_into(now, &mut target) {
        ui.ctx().request_repaint_after(FrameRate::FPS_60.frame_duration());
    }
    response
}

/// Allocate `size`, tick `bars` at `now` and paint them centred.
pub fn bar_array_view(
    ui: &mut egui::Ui,
    bars: &mut BarArray,
    size: Vec2,
    now: Duration,
) -> egui::Response {
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;
    bars.resize(tidewave_core::Size::new(rect.width() as f64, rect.height() as f64));
    if let Some(frame) = bars.tick(now) {
        paint_bars(&painter, rect.min, &frame);
        if bars.is_animating() {
            ui.ctx().request_repaint_after(FrameRate::FPS_60.frame_duration());
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidewave_wave::{Compositor, WaveformComposition};

    fn frame(width: f64) -> WaveFrame {
        Compositor::default().render(
            &WaveformComposition::audio(),
            &[0.0, 0.7, 1.4],
            &[10.0, 7.0, 5.0],
            width,
        )
    }

    #[test]
    fn test_mesh_covers_every_column() {
        let frame = frame(100.0);
        let mesh = wave_mesh(&frame.layers[0], Pos2::ZERO);
        // 101 column pairs plus start and hinge.
        assert_eq!(mesh.vertices.len(), 101 * 2 + 2);
        assert_eq!(mesh.indices.len(), (100 * 2 + 2) * 3);
        assert!(mesh.is_valid());
    }

    #[test]
    fn test_mesh_colors_follow_gradient() {
        let frame = frame(100.0);
        let layer = &frame.layers[0];
        let mesh = wave_mesh(layer, Pos2::ZERO);
        let left = mesh.vertices[0].color;
        let right = mesh.vertices[200].color;
        let first = layer.gradient.stops()[0].color.with_opacity(layer.opacity);
        assert_eq!(left, Theme::color32(first));
        assert_ne!(left, right);
    }

    #[test]
    fn test_empty_layer_gives_empty_mesh() {
        let frame = frame(0.0);
        assert!(frame.layers.is_empty() || wave_mesh(&frame.layers[0], Pos2::ZERO).is_empty());
    }

    #[test]
    fn test_egui_target_has_no_blur() {
        let ctx = egui::Context::default();
        let painter = Painter::new(ctx, egui::LayerId::background(), Rect::EVERYTHING);
        let target = EguiWaveTarget::new(&painter, Pos2::ZERO);
        assert!(!target.supports_blur());
    }
}
