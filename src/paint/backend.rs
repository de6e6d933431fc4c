use crate::error::Result;
use crate::paint::dispatch::DispatchShape;
use crate::paint::types::TouchUniform;

/// What happened to the presentable surface on one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Presented,
    /// No surface was available; the next tick retries
    Skipped,
}

/// A trait that defines how a frame is issued to the GPU
pub trait PaintBackend {
    /// Encode paint dispatch and filter chain, submit, and present
    fn render_frame(&mut self, touch: &TouchUniform) -> Result<FrameStatus>;

    /// Grid shape used for every paint dispatch
    fn dispatch_shape(&self) -> DispatchShape;

    /// Presentable surface changed size
    fn resize(&mut self, _width: u32, _height: u32) {}
}
