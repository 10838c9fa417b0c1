//! Tidewave Raster - CPU software renderer
//!
//! Rasterises [`tidewave_wave::WaveFrame`]s and [`tidewave_bars::BarFrame`]s
//! into premultiplied RGBA frame buffers. Used for offline rendering, tests
//! and hosts without a vector canvas.

pub mod blur;
pub mod fill;
pub mod renderer;

pub use blur::{gaussian_blur, gaussian_kernel};
pub use renderer::SoftwareRenderer;
