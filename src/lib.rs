//! Touch-driven particle painting on a wgpu compute pipeline.
//!
//! Contacts feed a paint kernel that scatters ink around each touch using a
//! fixed buffer of particle seeds. Every frame the ink is blurred, then
//! thresholded, and the result is presented. [`paint`] holds the host-side
//! orchestration and [`rendering`] the GPU objects behind it.

pub mod app;
pub mod error;
pub mod paint;
pub mod rendering;

pub use error::{PaintError, Result};
