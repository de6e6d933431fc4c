use log::{debug, warn};

use crate::error::Result;
use crate::paint::backend::{FrameStatus, PaintBackend};
use crate::paint::config::PaintConfig;
use crate::paint::input::{ContactEvent, ContactReceiver, ContactSender, InputSampler, contact_channel};

/// Whether a contact is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawState {
    /// Rendering paused, no GPU work issued
    #[default]
    Idle,
    /// One frame per display tick
    Active,
}

impl DrawState {
    pub fn on_event(self, event: &ContactEvent) -> Self {
        match event {
            ContactEvent::Began { .. } => DrawState::Active,
            ContactEvent::Ended => DrawState::Idle,
            ContactEvent::Moved { .. } => self,
        }
    }

    pub fn is_active(self) -> bool {
        self == DrawState::Active
    }
}

/// Result of one display tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Presented,
    Skipped,
}

/// Sequences input, dispatch and presentation once per display tick.
pub struct FrameDriver<B: PaintBackend> {
    backend: B,
    sampler: InputSampler,
    contacts: ContactReceiver,
    state: DrawState,
}

impl<B: PaintBackend> FrameDriver<B> {
    pub fn new(backend: B, config: &PaintConfig) -> (Self, ContactSender) {
        let (sender, contacts) = contact_channel();
        let driver = Self {
            backend,
            sampler: InputSampler::new(config),
            contacts,
            state: DrawState::Idle,
        };
        (driver, sender)
    }

    pub fn tick(&mut self) -> Result<TickOutcome> {
        let was_active = self.state.is_active();
        let mut began = false;

        for event in self.contacts.drain() {
            began |= matches!(event, ContactEvent::Began { .. });
            self.sampler.apply(&event);
            let next = self.state.on_event(&event);
            if next != self.state {
                debug!("draw state {:?} -> {:?}", self.state, next);
                self.state = next;
            }
        }

        // A frame already running when the contact ended still goes out, and
        // a contact that began and ended within one tick still gets its frame
        if !was_active && !began && !self.state.is_active() {
            return Ok(TickOutcome::Idle);
        }

        let touch = self.sampler.snapshot();
        match self.backend.render_frame(&touch)? {
            FrameStatus::Presented => Ok(TickOutcome::Presented),
            FrameStatus::Skipped => {
                warn!("no presentable surface this tick; frame skipped");
                Ok(TickOutcome::Skipped)
            }
        }
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn sampler(&self) -> &InputSampler {
        &self.sampler
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn moved_does_not_change_state() {
        let moved = ContactEvent::Moved {
            points: vec![Vec2::ONE],
            device: crate::paint::input::ContactDevice::Finger,
        };
        assert_eq!(DrawState::Idle.on_event(&moved), DrawState::Idle);
        assert_eq!(DrawState::Active.on_event(&moved), DrawState::Active);
    }

    #[test]
    fn began_and_ended_toggle_state() {
        let began = ContactEvent::Began {
            point: Vec2::ZERO,
            device: crate::paint::input::ContactDevice::Finger,
        };
        assert_eq!(DrawState::Idle.on_event(&began), DrawState::Active);
        assert_eq!(DrawState::Active.on_event(&ContactEvent::Ended), DrawState::Idle);
    }
}
