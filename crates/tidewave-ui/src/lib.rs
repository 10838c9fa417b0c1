//! Tidewave UI - egui widgets for waveforms and bar arrays
//!
//! Provides:
//! - An egui [`tidewave_wave::RenderTarget`] that paints wave layers as meshes
//! - Bar-array painting with rounded rectangles
//! - Gallery theme and controls

pub mod paint;
pub mod theme;
pub mod widgets;

pub use paint::{bar_array_view, paint_bars, wave_mesh, waveform_view, EguiWaveTarget};
pub use theme::Theme;
pub use widgets::{record_button, toggle_row, toggle_switch};
