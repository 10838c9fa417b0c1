//! Tidewave Wave - Layered procedural waveform
//!
//! - [`shape`]: the closed outline of one wave layer
//! - [`compositor`]: stacks layers into a [`WaveFrame`] and hands it to a
//!   [`RenderTarget`]
//! - [`driver`]: per-layer phase and speaking-signal amplitude easing
//! - [`view`]: the mountable component a host drives once per frame

pub mod compositor;
pub mod config;
pub mod driver;
pub mod params;
pub mod shape;
pub mod view;

pub use compositor::{present, Compositor, LayerPaint, RenderTarget, WaveFrame};
pub use config::WaveformConfig;
pub use driver::{AmplitudeEase, PhaseDriver};
pub use params::{WaveParams, WaveformComposition};
pub use shape::{generate, WaveOutline};
pub use view::WaveformView;
