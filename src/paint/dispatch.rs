use crate::error::{PaintError, Result};

/// One-dimensional compute grid for the paint kernel.
///
/// `workgroup_width * workgroup_count` always equals the particle count the
/// shape was built for, so no invocation falls off the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchShape {
    pub workgroup_width: u32,
    pub workgroup_count: u32,
}

impl DispatchShape {
    pub fn for_particles(count: usize, width: u32) -> Result<Self> {
        if width == 0 || count % width as usize != 0 {
            return Err(PaintError::UnevenDispatch { count, width });
        }

        Ok(Self {
            workgroup_width: width,
            workgroup_count: (count / width as usize) as u32,
        })
    }

    /// Total kernel invocations per dispatch.
    pub fn invocations(&self) -> u32 {
        self.workgroup_width * self.workgroup_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::particles::PARTICLE_COUNT;

    #[test]
    fn native_widths_divide_particle_count() {
        for width in [1, 8, 16, 32, 64, 128, 256] {
            let shape = DispatchShape::for_particles(PARTICLE_COUNT, width).unwrap();
            assert_eq!(shape.invocations() as usize, PARTICLE_COUNT);
            assert_eq!(shape.workgroup_width, width);
        }
    }

    #[test]
    fn width_64_gives_32_groups() {
        let shape = DispatchShape::for_particles(PARTICLE_COUNT, 64).unwrap();
        assert_eq!(shape.workgroup_count, 32);
    }

    #[test]
    fn uneven_width_is_rejected() {
        let err = DispatchShape::for_particles(PARTICLE_COUNT, 48).unwrap_err();
        assert!(matches!(
            err,
            PaintError::UnevenDispatch { count: PARTICLE_COUNT, width: 48 }
        ));
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(DispatchShape::for_particles(PARTICLE_COUNT, 0).is_err());
    }
}
