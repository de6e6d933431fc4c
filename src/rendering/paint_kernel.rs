use log::info;
use wgpu::util::DeviceExt;

use crate::error::{PaintError, Result};
use crate::paint::{DispatchShape, ParticleStore, TouchUniform};
use crate::rendering::textures::CANVAS_FORMAT;
use crate::rendering::validated;

/// Entry point of the paint kernel in mercurial_paint.wgsl.
pub const PAINT_KERNEL_ENTRY: &str = "mercurial_paint";

/// Compiled paint kernel plus the buffers bound to it.
///
/// The particle buffer is uploaded once here and never rewritten; only
/// the touch uniform changes between frames.
pub struct PaintKernel {
    pipeline: wgpu::ComputePipeline,
    bind_group: wgpu::BindGroup,
    touch_buffer: wgpu::Buffer,
    particle_buffer: wgpu::Buffer,
    shape: DispatchShape,
}

impl PaintKernel {
    pub fn new(
        device: &wgpu::Device,
        particles: &ParticleStore,
        ink_view: &wgpu::TextureView,
        shape: DispatchShape,
    ) -> Result<Self> {
        check_workgroup_limits(&device.limits(), shape.workgroup_width)?;

        let particle_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Particle Buffer"),
            contents: particles.as_bytes(),
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
        });

        let touch_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Touch Uniform Buffer"),
            contents: bytemuck::cast_slice(&[TouchUniform::RELEASED]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        // Width is baked into the source before compilation
        let shader_source = include_str!("../shaders/mercurial_paint.wgsl")
            .replace("{{WG_X}}", &shape.workgroup_width.to_string());

        let (pipeline, bind_group) = validated(device, "paint kernel", || {
            let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Mercurial Paint Shader"),
                source: wgpu::ShaderSource::Wgsl(shader_source.into()),
            });

            let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Paint Bind Group Layout"),
                entries: &[
                    // particles
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Storage { read_only: true },
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    // touch
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    // ink
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::COMPUTE,
                        ty: wgpu::BindingType::StorageTexture {
                            access: wgpu::StorageTextureAccess::WriteOnly,
                            format: CANVAS_FORMAT,
                            view_dimension: wgpu::TextureViewDimension::D2,
                        },
                        count: None,
                    },
                ],
            });

            let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Paint Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

            let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
                label: Some("Paint Compute Pipeline"),
                layout: Some(&pipeline_layout),
                module: &shader_module,
                entry_point: Some(PAINT_KERNEL_ENTRY),
                compilation_options: Default::default(),
                cache: None,
            });

            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Paint Bind Group"),
                layout: &bind_group_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: particle_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: touch_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::TextureView(ink_view),
                    },
                ],
            });

            (pipeline, bind_group)
        })?;

        info!(
            "paint kernel ready: {} groups x {} threads",
            shape.workgroup_count, shape.workgroup_width
        );

        Ok(Self {
            pipeline,
            bind_group,
            touch_buffer,
            particle_buffer,
            shape,
        })
    }

    pub fn write_touch(&self, queue: &wgpu::Queue, touch: &TouchUniform) {
        queue.write_buffer(&self.touch_buffer, 0, bytemuck::cast_slice(&[*touch]));
    }

    pub fn encode(&self, encoder: &mut wgpu::CommandEncoder) {
        let mut compute_pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("Paint Compute Pass"),
            timestamp_writes: None,
        });

        compute_pass.set_pipeline(&self.pipeline);
        compute_pass.set_bind_group(0, &self.bind_group, &[]);
        compute_pass.dispatch_workgroups(self.shape.workgroup_count, 1, 1);
    }

    pub fn shape(&self) -> DispatchShape {
        self.shape
    }

    pub fn particle_buffer(&self) -> &wgpu::Buffer {
        &self.particle_buffer
    }
}

fn check_workgroup_limits(limits: &wgpu::Limits, width: u32) -> Result<()> {
    let max = limits
        .max_compute_workgroup_size_x
        .min(limits.max_compute_invocations_per_workgroup);
    if width > max {
        return Err(PaintError::WorkgroupTooLarge { width, max });
    }
    Ok(())
}
