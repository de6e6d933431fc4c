/// Format shared by the ink and intermediate textures.
pub const CANVAS_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// A canvas-sized texture with the view every pass binds.
pub struct CanvasTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl CanvasTexture {
    fn new(device: &wgpu::Device, width: u32, height: u32, label: &str) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: CANVAS_FORMAT,
            usage: wgpu::TextureUsages::STORAGE_BINDING
                | wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { texture, view }
    }
}

/// Raw ink written by the paint kernel and its blurred copy.
pub struct CanvasTextures {
    pub ink: CanvasTexture,
    pub intermediate: CanvasTexture,
    pub width: u32,
    pub height: u32,
}

impl CanvasTextures {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        Self {
            ink: CanvasTexture::new(device, width, height, "Ink Texture"),
            intermediate: CanvasTexture::new(device, width, height, "Intermediate Texture"),
            width,
            height,
        }
    }
}
