use log::warn;

use crate::rendering::surface::acquire_surface_texture;

/// Where the thresholded image ends up each frame.
pub enum PresentTarget {
    Window {
        surface: wgpu::Surface<'static>,
        config: wgpu::SurfaceConfiguration,
    },
    /// Plain texture standing in for a swapchain
    Offscreen {
        texture: wgpu::Texture,
        format: wgpu::TextureFormat,
        // Cleared to simulate a surface with nothing to give
        available: bool,
    },
}

/// A presentable image acquired for one frame.
pub struct Frame {
    pub view: wgpu::TextureView,
    surface_texture: Option<wgpu::SurfaceTexture>,
}

impl Frame {
    pub fn present(self) {
        if let Some(surface_texture) = self.surface_texture {
            surface_texture.present();
        }
    }
}

impl PresentTarget {
    pub fn offscreen(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let format = wgpu::TextureFormat::Rgba8Unorm;
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Offscreen Target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        PresentTarget::Offscreen {
            texture,
            format,
            available: true,
        }
    }

    /// Makes an offscreen target refuse frames until re-enabled. Window
    /// targets are unaffected.
    pub fn set_available(&mut self, value: bool) {
        if let PresentTarget::Offscreen { available, .. } = self {
            *available = value;
        }
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        match self {
            PresentTarget::Window { config, .. } => config.format,
            PresentTarget::Offscreen { format, .. } => *format,
        }
    }

    pub fn acquire(&mut self, device: &wgpu::Device) -> Option<Frame> {
        match self {
            PresentTarget::Window { surface, config } => {
                let surface_texture = acquire_surface_texture(device, surface, config)?;
                let view = surface_texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                Some(Frame {
                    view,
                    surface_texture: Some(surface_texture),
                })
            }
            PresentTarget::Offscreen { available: false, .. } => {
                warn!("offscreen target unavailable");
                None
            }
            PresentTarget::Offscreen { texture, .. } => Some(Frame {
                view: texture.create_view(&wgpu::TextureViewDescriptor::default()),
                surface_texture: None,
            }),
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let PresentTarget::Window { surface, config } = self {
            config.width = width;
            config.height = height;
            surface.configure(device, config);
        }
    }
}
