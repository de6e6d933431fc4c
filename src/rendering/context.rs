use log::info;

use crate::error::Result;

/// Adapter, device and queue shared by every pipeline stage.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub adapter: wgpu::Adapter,
    // Outlives device and queue; fields drop in declaration order
    pub instance: wgpu::Instance,
}

impl GpuContext {
    pub fn create_instance() -> wgpu::Instance {
        // Backends::PRIMARY => Vulkan + Metal + DX12 + Browser WebGPU
        wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        })
    }

    /// Selects an adapter able to present to `compatible_surface`, when given.
    pub async fn new(
        instance: wgpu::Instance,
        compatible_surface: Option<&wgpu::Surface<'_>>,
    ) -> Result<Self> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface,
                force_fallback_adapter: false,
            })
            .await?;

        let adapter_info = adapter.get_info();
        info!(
            "using adapter {} ({:?}, {:?})",
            adapter_info.name, adapter_info.backend, adapter_info.device_type
        );

        // Storage textures and compute are part of the default limits
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("mercurial-paint"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        Ok(Self {
            device,
            queue,
            adapter,
            instance,
        })
    }

    /// Context with no surface, for offscreen runs and tests.
    pub fn headless() -> Result<Self> {
        pollster::block_on(Self::new(Self::create_instance(), None))
    }
}
