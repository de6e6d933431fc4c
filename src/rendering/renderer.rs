use std::sync::Arc;

use log::info;
use winit::window::Window;

use crate::error::Result;
use crate::paint::{
    DispatchShape, FrameStatus, PARTICLE_COUNT, PaintBackend, PaintConfig, ParticleStore,
    TouchUniform,
};
use crate::rendering::context::GpuContext;
use crate::rendering::filters::{GaussianBlur, ThresholdBinary};
use crate::rendering::paint_kernel::PaintKernel;
use crate::rendering::surface::configure_surface;
use crate::rendering::target::PresentTarget;
use crate::rendering::textures::CanvasTextures;

/// Host side of the effect: every GPU object, built up front.
pub struct GpuPaintPipeline {
    window: Option<Arc<Window>>,
    particles: ParticleStore,
    kernel: PaintKernel,
    blur: GaussianBlur,
    threshold: ThresholdBinary,
    textures: CanvasTextures,
    target: PresentTarget,
    context: GpuContext,
}

impl GpuPaintPipeline {
    pub async fn for_window(window: Arc<Window>, config: &PaintConfig) -> Result<Self> {
        config.validate()?;

        let instance = GpuContext::create_instance();
        let surface = instance.create_surface(window.clone())?;
        let context = GpuContext::new(instance, Some(&surface)).await?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&context.adapter);
        let surface_config = configure_surface(&context.device, &size, &surface, &surface_caps)?;
        let target = PresentTarget::Window {
            surface,
            config: surface_config,
        };

        Self::build(context, target, config, Some(window))
    }

    /// Renders into an offscreen texture the size of the canvas.
    pub fn headless(config: &PaintConfig) -> Result<Self> {
        config.validate()?;

        let context = GpuContext::headless()?;
        let target = PresentTarget::offscreen(&context.device, config.canvas_width, config.canvas_height);
        Self::build(context, target, config, None)
    }

    fn build(
        context: GpuContext,
        target: PresentTarget,
        config: &PaintConfig,
        window: Option<Arc<Window>>,
    ) -> Result<Self> {
        let shape = DispatchShape::for_particles(PARTICLE_COUNT, config.workgroup_width)?;
        let particles = ParticleStore::new();
        let textures = CanvasTextures::new(&context.device, config.canvas_width, config.canvas_height);

        let kernel = PaintKernel::new(&context.device, &particles, &textures.ink.view, shape)?;
        let blur = GaussianBlur::new(&context.device, &textures, config.blur_sigma)?;
        let threshold = ThresholdBinary::new(
            &context.device,
            &textures,
            target.format(),
            config.threshold,
            config.threshold_max,
        )?;

        info!(
            "paint pipeline ready: {}x{} canvas, sigma {}, threshold {}",
            textures.width, textures.height, config.blur_sigma, config.threshold
        );

        Ok(Self {
            window,
            particles,
            kernel,
            blur,
            threshold,
            textures,
            target,
            context,
        })
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    pub fn particle_buffer(&self) -> &wgpu::Buffer {
        self.kernel.particle_buffer()
    }

    pub fn textures(&self) -> &CanvasTextures {
        &self.textures
    }

    pub fn target(&self) -> &PresentTarget {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut PresentTarget {
        &mut self.target
    }

    pub fn context(&self) -> &GpuContext {
        &self.context
    }
}

impl PaintBackend for GpuPaintPipeline {
    fn render_frame(&mut self, touch: &TouchUniform) -> Result<FrameStatus> {
        let device = &self.context.device;
        self.kernel.write_touch(&self.context.queue, touch);

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Mercurial Paint Command Encoder"),
        });

        self.kernel.encode(&mut encoder);
        self.blur.encode(&mut encoder);

        // Ink keeps accumulating even when there is nowhere to show it
        let frame = self.target.acquire(device);
        if let Some(frame) = &frame {
            self.threshold.encode(&mut encoder, &frame.view);
        }

        // Fire and forget; presentation is queued behind the GPU work
        self.context.queue.submit(std::iter::once(encoder.finish()));

        let Some(frame) = frame else {
            return Ok(FrameStatus::Skipped);
        };
        if let Some(window) = &self.window {
            window.pre_present_notify();
        }
        frame.present();

        Ok(FrameStatus::Presented)
    }

    fn dispatch_shape(&self) -> DispatchShape {
        self.kernel.shape()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.target.resize(&self.context.device, width, height);
    }
}
