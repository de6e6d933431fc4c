use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use glam::Vec2;

use crate::error::{PaintError, Result};
use crate::paint::config::PaintConfig;
use crate::paint::types::{NO_CONTACT, TOUCH_LANES, TouchUniform};

/// Tracked position that stands for "no contact".
pub const SENTINEL_POINT: Vec2 = Vec2::new(-1.0, -1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// The kind of pointer that produced a contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactDevice {
    /// No force reading; pressure falls back to the configured default
    Finger,
    /// Variable-pressure device reporting raw force and its maximum
    Stylus { force: f32, max_force: f32 },
}

/// Pointer input as delivered by the host's input subsystem.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactEvent {
    Began { point: Vec2, device: ContactDevice },
    /// Ordered coalesced samples since the previous move
    Moved { points: Vec<Vec2>, device: ContactDevice },
    Ended,
}

/// Turns contact events into the fixed-width vectors the paint kernel reads.
#[derive(Debug, Clone)]
pub struct InputSampler {
    points: Vec<Vec2>,
    pressure: f32,
    default_pressure: f32,
    scale: f32,
}

impl InputSampler {
    pub fn new(config: &PaintConfig) -> Self {
        Self {
            points: vec![SENTINEL_POINT; TOUCH_LANES],
            pressure: 0.0,
            default_pressure: config.default_pressure,
            scale: config.touch_scale,
        }
    }

    pub fn apply(&mut self, event: &ContactEvent) {
        match event {
            ContactEvent::Began { point, device } => {
                self.pressure = self.sample_pressure(device);
                self.points = vec![*point];
            }
            ContactEvent::Moved { points, device } => {
                if points.is_empty() {
                    return;
                }
                // Latest move wins; earlier coalesced lists are dropped
                self.pressure = self.sample_pressure(device);
                self.points = points.clone();
            }
            ContactEvent::Ended => {
                self.points = vec![SENTINEL_POINT; TOUCH_LANES];
                self.pressure = 0.0;
            }
        }
    }

    fn sample_pressure(&self, device: &ContactDevice) -> f32 {
        match *device {
            ContactDevice::Stylus { force, max_force } if max_force > 0.0 => {
                (force / max_force).clamp(0.0, 1.0)
            }
            _ => self.default_pressure,
        }
    }

    /// Maps the tracked points onto four lanes, -1 for every empty lane.
    pub fn lane_vector(&self, axis: Axis) -> [i32; TOUCH_LANES] {
        std::array::from_fn(|lane| match self.points.get(lane) {
            Some(point) if *point != SENTINEL_POINT => {
                let value = match axis {
                    Axis::X => point.x,
                    Axis::Y => point.y,
                };
                (value * self.scale) as i32
            }
            _ => NO_CONTACT,
        })
    }

    /// Both axes and pressure captured together.
    pub fn snapshot(&self) -> TouchUniform {
        TouchUniform::new(
            self.lane_vector(Axis::X),
            self.lane_vector(Axis::Y),
            self.pressure,
        )
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn pressure(&self) -> f32 {
        self.pressure
    }
}

/// Producer half of the contact channel, held by the input callback.
#[derive(Debug, Clone)]
pub struct ContactSender {
    sender: Sender<ContactEvent>,
}

impl ContactSender {
    pub fn send(&self, event: ContactEvent) -> Result<()> {
        self.sender.send(event).map_err(|_| PaintError::ChannelClosed)
    }

    pub fn began(&self, point: Vec2, device: ContactDevice) -> Result<()> {
        self.send(ContactEvent::Began { point, device })
    }

    pub fn moved(&self, points: Vec<Vec2>, device: ContactDevice) -> Result<()> {
        self.send(ContactEvent::Moved { points, device })
    }

    pub fn ended(&self) -> Result<()> {
        self.send(ContactEvent::Ended)
    }
}

/// Consumer half, drained by the frame driver at the start of each tick.
#[derive(Debug)]
pub(crate) struct ContactReceiver {
    receiver: Receiver<ContactEvent>,
}

impl ContactReceiver {
    /// Everything queued so far, in arrival order.
    pub(crate) fn drain(&self) -> Vec<ContactEvent> {
        let mut events = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        events
    }
}

pub(crate) fn contact_channel() -> (ContactSender, ContactReceiver) {
    let (sender, receiver) = channel();
    (ContactSender { sender }, ContactReceiver { receiver })
}
