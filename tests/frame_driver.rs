use std::collections::VecDeque;

use glam::Vec2;
use mercurial_paint::paint::{
    ContactDevice, DispatchShape, DrawState, FrameDriver, FrameStatus, PARTICLE_COUNT,
    PaintBackend, PaintConfig, TickOutcome, TouchUniform,
};
use mercurial_paint::Result;

/// Records every frame it is asked to render instead of touching a GPU.
struct RecordingBackend {
    shape: DispatchShape,
    frames: Vec<(DispatchShape, TouchUniform)>,
    // Per-tick surface availability; true once exhausted
    surfaces: VecDeque<bool>,
}

impl RecordingBackend {
    fn new() -> Self {
        Self {
            shape: DispatchShape::for_particles(PARTICLE_COUNT, 64).unwrap(),
            frames: Vec::new(),
            surfaces: VecDeque::new(),
        }
    }
}

impl PaintBackend for RecordingBackend {
    fn render_frame(&mut self, touch: &TouchUniform) -> Result<FrameStatus> {
        self.frames.push((self.shape, *touch));
        if self.surfaces.pop_front().unwrap_or(true) {
            Ok(FrameStatus::Presented)
        } else {
            Ok(FrameStatus::Skipped)
        }
    }

    fn dispatch_shape(&self) -> DispatchShape {
        self.shape
    }
}

fn driver() -> (FrameDriver<RecordingBackend>, mercurial_paint::paint::ContactSender) {
    FrameDriver::new(RecordingBackend::new(), &PaintConfig::default())
}

#[test]
fn idle_ticks_issue_no_dispatch() {
    let (mut driver, _contacts) = driver();
    for _ in 0..5 {
        assert_eq!(driver.tick().unwrap(), TickOutcome::Idle);
    }
    assert!(driver.backend().frames.is_empty());
    assert_eq!(driver.state(), DrawState::Idle);
}

#[test]
fn one_dispatch_per_active_tick() {
    let (mut driver, contacts) = driver();
    contacts.began(Vec2::new(10.0, 10.0), ContactDevice::Finger).unwrap();

    for tick in 1..=4 {
        assert_eq!(driver.tick().unwrap(), TickOutcome::Presented);
        assert_eq!(driver.backend().frames.len(), tick);
    }
    assert!(driver.is_active());
}

#[test]
fn idle_active_idle_renders_final_frame_then_pauses() {
    let (mut driver, contacts) = driver();
    assert_eq!(driver.tick().unwrap(), TickOutcome::Idle);

    contacts.began(Vec2::new(100.0, 200.0), ContactDevice::Finger).unwrap();
    assert_eq!(driver.tick().unwrap(), TickOutcome::Presented);
    assert_eq!(driver.tick().unwrap(), TickOutcome::Presented);

    // Frame in flight when the contact ends still completes
    contacts.ended().unwrap();
    assert_eq!(driver.tick().unwrap(), TickOutcome::Presented);
    assert_eq!(driver.state(), DrawState::Idle);

    assert_eq!(driver.tick().unwrap(), TickOutcome::Idle);
    assert_eq!(driver.tick().unwrap(), TickOutcome::Idle);
    assert_eq!(driver.backend().frames.len(), 3);

    let (_, last) = driver.backend().frames.last().copied().unwrap();
    assert_eq!(last, TouchUniform::RELEASED);
}

#[test]
fn first_active_frame_carries_scaled_contact() {
    let (mut driver, contacts) = driver();
    contacts.began(Vec2::new(100.0, 200.0), ContactDevice::Finger).unwrap();
    driver.tick().unwrap();

    let (_, touch) = driver.backend().frames[0];
    assert_eq!(touch.x, [200, -1, -1, -1]);
    assert_eq!(touch.y, [400, -1, -1, -1]);
    assert_eq!(touch.pressure, 0.5);
}

#[test]
fn dispatch_shape_never_changes_across_ticks() {
    let (mut driver, contacts) = driver();
    contacts.began(Vec2::new(1.0, 2.0), ContactDevice::Finger).unwrap();
    driver.tick().unwrap();
    for step in 0..6 {
        let point = Vec2::new(step as f32 * 5.0, 40.0);
        contacts.moved(vec![point, point + Vec2::ONE], ContactDevice::Finger).unwrap();
        driver.tick().unwrap();
    }

    let expected = driver.backend().dispatch_shape();
    assert_eq!(expected.invocations() as usize, PARTICLE_COUNT);
    assert!(driver.backend().frames.iter().all(|(shape, _)| *shape == expected));
    // Inputs did vary
    let first = driver.backend().frames[1].1;
    let last = driver.backend().frames.last().unwrap().1;
    assert_ne!(first, last);
}

#[test]
fn driver_stays_active_across_a_skipped_frame() {
    let (mut driver, contacts) = driver();
    driver.backend_mut().surfaces = VecDeque::from([true, false, true]);

    contacts.began(Vec2::new(5.0, 5.0), ContactDevice::Finger).unwrap();
    assert_eq!(driver.tick().unwrap(), TickOutcome::Presented);
    assert_eq!(driver.tick().unwrap(), TickOutcome::Skipped);
    assert_eq!(driver.tick().unwrap(), TickOutcome::Presented);

    assert!(driver.is_active());
    let shape = driver.backend().dispatch_shape();
    assert!(driver.backend().frames.iter().all(|(s, _)| *s == shape));
}

#[test]
fn events_between_ticks_apply_in_order_and_latest_move_wins() {
    let (mut driver, contacts) = driver();
    contacts.began(Vec2::new(1.0, 1.0), ContactDevice::Finger).unwrap();
    contacts
        .moved(vec![Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)], ContactDevice::Finger)
        .unwrap();
    contacts.moved(vec![Vec2::new(9.0, 8.0)], ContactDevice::Finger).unwrap();
    driver.tick().unwrap();

    let (_, touch) = driver.backend().frames[0];
    assert_eq!(touch.x, [18, -1, -1, -1]);
    assert_eq!(touch.y, [16, -1, -1, -1]);
}

#[test]
fn tap_within_one_tick_still_renders_one_frame() {
    let (mut driver, contacts) = driver();
    contacts.began(Vec2::new(1.0, 1.0), ContactDevice::Finger).unwrap();
    contacts.ended().unwrap();

    assert_eq!(driver.tick().unwrap(), TickOutcome::Presented);
    assert_eq!(driver.state(), DrawState::Idle);
    assert_eq!(driver.backend().frames.len(), 1);
    assert_eq!(driver.backend().frames[0].1, TouchUniform::RELEASED);

    assert_eq!(driver.tick().unwrap(), TickOutcome::Idle);
    assert_eq!(driver.backend().frames.len(), 1);
}
