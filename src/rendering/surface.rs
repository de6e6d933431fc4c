use log::{info, warn};

use crate::error::{PaintError, Result};

/// Configures `surface` for the first time and returns the configuration
/// so it can be reapplied on resize.
pub(crate) fn configure_surface(
    device: &wgpu::Device,
    size: &winit::dpi::PhysicalSize<u32>,
    surface: &wgpu::Surface<'static>,
    surface_caps: &wgpu::SurfaceCapabilities,
) -> Result<wgpu::SurfaceConfiguration> {
    // Threshold output is either 0 or max, so the sRGB curve is irrelevant;
    // prefer a linear format when one is offered
    let format = surface_caps
        .formats
        .iter()
        .copied()
        .find(|format| !format.is_srgb())
        .or_else(|| surface_caps.formats.first().copied())
        .ok_or(PaintError::UnsupportedSurface)?;

    let alpha_mode = surface_caps
        .alpha_modes
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto);

    let surface_config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: size.width.max(1),
        height: size.height.max(1),
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(device, &surface_config);
    info!(
        "surface configured: {:?} {}x{}",
        format, surface_config.width, surface_config.height
    );

    Ok(surface_config)
}

/// Fetches the next swapchain texture, or `None` when the surface has
/// nothing to give this tick.
pub(crate) fn acquire_surface_texture(
    device: &wgpu::Device,
    surface: &wgpu::Surface<'static>,
    surface_config: &wgpu::SurfaceConfiguration,
) -> Option<wgpu::SurfaceTexture> {
    match surface.get_current_texture() {
        Ok(surface_texture) => Some(surface_texture),
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            warn!("surface lost or outdated; reconfiguring");
            surface.configure(device, surface_config);
            None
        }
        Err(err) => {
            warn!("failed to acquire surface texture: {err}");
            None
        }
    }
}
