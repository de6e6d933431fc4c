mod context;
mod filters;
mod paint_kernel;
mod render_pass;
mod renderer;
mod surface;
mod target;
mod textures;

pub use context::GpuContext;
pub use filters::{GaussianBlur, ThresholdBinary, gaussian_weights};
pub use paint_kernel::{PAINT_KERNEL_ENTRY, PaintKernel};
pub use renderer::GpuPaintPipeline;
pub use target::{Frame, PresentTarget};
pub use textures::{CANVAS_FORMAT, CanvasTexture, CanvasTextures};

use crate::error::{PaintError, Result};

/// Runs `build` inside a validation error scope so shader and pipeline
/// failures come back as errors instead of hitting the uncaptured handler.
pub(crate) fn validated<T>(
    device: &wgpu::Device,
    label: &'static str,
    build: impl FnOnce() -> T,
) -> Result<T> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = build();
    match pollster::block_on(device.pop_error_scope()) {
        Some(error) => Err(PaintError::PipelineCreation {
            label,
            message: error.to_string(),
        }),
        None => Ok(value),
    }
}
