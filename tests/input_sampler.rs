use glam::Vec2;
use mercurial_paint::paint::{
    Axis, ContactDevice, ContactEvent, InputSampler, PaintConfig, SENTINEL_POINT, TouchUniform,
};

fn began(x: f32, y: f32, device: ContactDevice) -> ContactEvent {
    ContactEvent::Began {
        point: Vec2::new(x, y),
        device,
    }
}

fn moved(points: &[(f32, f32)]) -> ContactEvent {
    ContactEvent::Moved {
        points: points.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
        device: ContactDevice::Finger,
    }
}

#[test]
fn single_finger_contact_is_scaled_into_first_lane() {
    let mut sampler = InputSampler::new(&PaintConfig::default());
    sampler.apply(&began(100.0, 200.0, ContactDevice::Finger));

    assert_eq!(sampler.pressure(), 0.5);
    assert_eq!(sampler.lane_vector(Axis::X), [200, -1, -1, -1]);
    assert_eq!(sampler.lane_vector(Axis::Y), [400, -1, -1, -1]);
}

#[test]
fn lanes_past_tracked_points_are_empty() {
    let mut sampler = InputSampler::new(&PaintConfig::default());
    for count in 1..=4 {
        let points: Vec<(f32, f32)> = (0..count).map(|i| (i as f32 + 1.0, 7.0)).collect();
        sampler.apply(&moved(&points));

        let lanes = sampler.lane_vector(Axis::X);
        assert_eq!(lanes.len(), 4);
        assert!(lanes[..count].iter().all(|&lane| lane > 0));
        assert!(lanes[count..].iter().all(|&lane| lane == -1));
        assert_eq!(sampler.snapshot().active_lanes(), count);
    }
}

#[test]
fn points_beyond_the_fourth_are_dropped() {
    let mut sampler = InputSampler::new(&PaintConfig::default());
    sampler.apply(&began(0.0, 0.0, ContactDevice::Finger));
    sampler.apply(&moved(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0), (5.0, 5.0), (6.0, 6.0)]));

    assert_eq!(sampler.points().len(), 6);
    assert_eq!(sampler.lane_vector(Axis::X), [2, 4, 6, 8]);
    assert_eq!(sampler.lane_vector(Axis::Y), [2, 4, 6, 8]);
}

#[test]
fn contact_end_clears_any_prior_state() {
    let histories = [
        vec![],
        vec![began(3.0, 3.0, ContactDevice::Finger)],
        vec![
            began(3.0, 3.0, ContactDevice::Stylus {
                force: 1.0,
                max_force: 2.0,
            }),
            moved(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]),
        ],
        vec![ContactEvent::Ended],
    ];

    for history in histories {
        let mut sampler = InputSampler::new(&PaintConfig::default());
        for event in &history {
            sampler.apply(event);
        }
        sampler.apply(&ContactEvent::Ended);

        assert_eq!(sampler.points(), &[SENTINEL_POINT; 4]);
        assert_eq!(sampler.pressure(), 0.0);
        assert_eq!(sampler.snapshot(), TouchUniform::RELEASED);
    }
}

#[test]
fn custom_scale_and_default_pressure_apply() {
    let config = PaintConfig {
        touch_scale: 3.0,
        default_pressure: 0.25,
        ..PaintConfig::default()
    };
    let mut sampler = InputSampler::new(&config);
    sampler.apply(&began(10.0, 20.0, ContactDevice::Finger));

    assert_eq!(sampler.pressure(), 0.25);
    assert_eq!(sampler.lane_vector(Axis::X), [30, -1, -1, -1]);
    assert_eq!(sampler.lane_vector(Axis::Y), [60, -1, -1, -1]);
}
