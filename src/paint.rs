mod backend;
mod config;
mod dispatch;
mod driver;
mod input;
mod particles;
mod types;

pub use backend::{FrameStatus, PaintBackend};
pub use config::PaintConfig;
pub use dispatch::DispatchShape;
pub use driver::{DrawState, FrameDriver, TickOutcome};
pub use input::{Axis, ContactDevice, ContactEvent, ContactSender, InputSampler, SENTINEL_POINT};
pub use particles::{PARTICLE_ALIGNMENT, PARTICLE_COUNT, PARTICLE_SEED_BOUND, ParticleStore};
pub use types::{NO_CONTACT, TOUCH_LANES, TouchUniform};

pub(crate) use types::{BlurParams, ThresholdParams};
