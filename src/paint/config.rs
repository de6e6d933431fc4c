use crate::error::{PaintError, Result};
use crate::paint::dispatch::DispatchShape;
use crate::paint::particles::PARTICLE_COUNT;

/// Construction-time parameters for the paint effect.
///
/// Filter settings are fixed once the pipeline is built.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintConfig {
    /// Paint kernel workgroup width; must divide the particle count
    pub workgroup_width: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub blur_sigma: f32,
    pub threshold: f32,
    pub threshold_max: f32,
    /// Pressure used for contacts that cannot report force
    pub default_pressure: f32,
    /// Point to canvas pixel factor
    pub touch_scale: f32,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            workgroup_width: 64,
            canvas_width: 750,
            canvas_height: 1334,
            blur_sigma: 3.0,
            threshold: 0.5,
            threshold_max: 1.0,
            default_pressure: 0.5,
            touch_scale: 2.0,
        }
    }
}

impl PaintConfig {
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(invalid(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if !self.blur_sigma.is_finite() || self.blur_sigma <= 0.0 {
            return Err(invalid(format!("blur sigma must be positive, got {}", self.blur_sigma)));
        }
        for (name, value) in [
            ("threshold", self.threshold),
            ("threshold_max", self.threshold_max),
            ("default_pressure", self.default_pressure),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{name} must lie in [0, 1], got {value}")));
            }
        }
        if !self.touch_scale.is_finite() || self.touch_scale <= 0.0 {
            return Err(invalid(format!("touch scale must be positive, got {}", self.touch_scale)));
        }

        DispatchShape::for_particles(PARTICLE_COUNT, self.workgroup_width)?;
        Ok(())
    }

    /// Window size in logical points that maps 1:1 onto the canvas.
    pub fn logical_window_size(&self) -> (f32, f32) {
        (
            self.canvas_width as f32 / self.touch_scale,
            self.canvas_height as f32 / self.touch_scale,
        )
    }
}

fn invalid(message: String) -> PaintError {
    PaintError::InvalidConfig(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        PaintConfig::default().validate().unwrap();
    }

    #[test]
    fn default_window_is_half_the_canvas() {
        assert_eq!(PaintConfig::default().logical_window_size(), (375.0, 667.0));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let config = PaintConfig {
            threshold: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PaintError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_non_positive_sigma() {
        let config = PaintConfig {
            blur_sigma: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_width_that_leaves_a_remainder() {
        let config = PaintConfig {
            workgroup_width: 96,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PaintError::UnevenDispatch { .. })));
    }
}
