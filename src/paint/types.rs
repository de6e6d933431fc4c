use bytemuck::{Pod, Zeroable};

/// Number of contact lanes the paint kernel reads per axis.
pub const TOUCH_LANES: usize = 4;

/// Lane value meaning "no contact".
pub const NO_CONTACT: i32 = -1;

// Per-frame input for the paint kernel, laid out to match `Touch` in
// mercurial_paint.wgsl (vec4<i32>, vec4<i32>, f32, padded to 16 bytes)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TouchUniform {
    pub x: [i32; TOUCH_LANES],
    pub y: [i32; TOUCH_LANES],
    pub pressure: f32,
    pub _padding: [f32; 3],
}

impl TouchUniform {
    /// All lanes empty, zero pressure.
    pub const RELEASED: Self = Self {
        x: [NO_CONTACT; TOUCH_LANES],
        y: [NO_CONTACT; TOUCH_LANES],
        pressure: 0.0,
        _padding: [0.0; 3],
    };

    pub fn new(x: [i32; TOUCH_LANES], y: [i32; TOUCH_LANES], pressure: f32) -> Self {
        Self {
            x,
            y,
            pressure,
            _padding: [0.0; 3],
        }
    }

    /// Number of leading lanes that carry a contact.
    pub fn active_lanes(&self) -> usize {
        self.x
            .iter()
            .zip(self.y.iter())
            .take_while(|(x, y)| **x != NO_CONTACT && **y != NO_CONTACT)
            .count()
    }
}

// Gaussian blur parameters, matches `BlurParams` in gaussian_blur.wgsl
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct BlurParams {
    pub radius: u32,
    pub width: u32,
    pub height: u32,
    pub _padding: u32,
}

// Threshold parameters, matches `ThresholdParams` in threshold_binary.wgsl
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct ThresholdParams {
    pub threshold: f32,
    pub maximum: f32,
    pub _padding: [f32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_uniform_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<TouchUniform>(), 48);
        assert_eq!(std::mem::size_of::<BlurParams>(), 16);
        assert_eq!(std::mem::size_of::<ThresholdParams>(), 16);
    }

    #[test]
    fn released_has_no_active_lanes() {
        assert_eq!(TouchUniform::RELEASED.active_lanes(), 0);
        let two = TouchUniform::new([10, 20, -1, -1], [5, 6, -1, -1], 0.5);
        assert_eq!(two.active_lanes(), 2);
    }
}
