//! Error types for the paint pipeline

use thiserror::Error;

/// Errors raised while building or driving the paint effect.
///
/// Everything here is fatal. A frame with no presentable surface is not an
/// error; it is reported as [`crate::paint::FrameStatus::Skipped`].
#[derive(Error, Debug)]
pub enum PaintError {
    /// No GPU adapter matched the request
    #[error("no compatible GPU adapter: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),

    /// The adapter refused to create a device
    #[error("GPU device request failed: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),

    /// The window could not be turned into a surface
    #[error("failed to create presentation surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// The surface reports no formats for the chosen adapter
    #[error("surface is not supported by the selected adapter")]
    UnsupportedSurface,

    /// Particle count does not split into whole workgroups
    #[error("{count} particles cannot be split evenly into workgroups of width {width}")]
    UnevenDispatch { count: usize, width: u32 },

    /// Workgroup width exceeds what the device accepts
    #[error("workgroup width {width} exceeds device limit of {max}")]
    WorkgroupTooLarge { width: u32, max: u32 },

    /// Shader or pipeline failed validation
    #[error("GPU pipeline creation failed for {label}: {message}")]
    PipelineCreation { label: &'static str, message: String },

    /// Configuration rejected before any GPU work
    #[error("invalid paint configuration: {0}")]
    InvalidConfig(String),

    /// The frame driver dropped its end of the contact channel
    #[error("contact event channel closed")]
    ChannelClosed,

    /// Failed to create or run the event loop
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Failed to create the host window
    #[error("window creation failed: {0}")]
    WindowCreation(#[from] winit::error::OsError),
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
