//! Output size planning for wallpaper captures

// Use 3rd party
use thiserror::Error;

// Use internal modules
use crate::model::device::DeviceProfile;

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("invalid geometry: cannot scale a {width}x{height} surface")]
    InvalidGeometry { width: f64, height: f64 },
}

/// Uniform magnification of a rendered surface toward a device target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePlan {
    pub target_width: u32,
    pub target_height: u32,
    pub rendered_width: f64,
    pub rendered_height: f64,
    pub scale: f64,
}

impl ScalePlan {
    pub fn output_width(&self) -> f64 {
        self.rendered_width * self.scale
    }

    pub fn output_height(&self) -> f64 {
        self.rendered_height * self.scale
    }

    /// Output size in whole pixels.
    pub fn output_pixels(&self) -> (u32, u32) {
        (
            self.output_width().round() as u32,
            self.output_height().round() as u32,
        )
    }
}

/// Computes the largest uniform scale that keeps the rendered surface
/// inside the device's target resolution.
///
/// ```
/// use spotwall::model::device::DeviceProfile;
/// use spotwall::planner::plan_scale;
///
/// let plan = plan_scale(DeviceProfile::Mobile, 300.0, 500.0).unwrap();
/// assert_eq!(plan.output_pixels(), (1440, 2400));
/// ```
pub fn plan_scale(
    device: DeviceProfile,
    rendered_width: f64,
    rendered_height: f64,
) -> Result<ScalePlan, PlanError> {
    let invalid = || PlanError::InvalidGeometry {
        width: rendered_width,
        height: rendered_height,
    };
    let valid = |side: f64| side.is_finite() && side > 0.0;
    if !valid(rendered_width) || !valid(rendered_height) {
        return Err(invalid());
    }

    let target = device.resolution();
    let scale_x = f64::from(target.width) / rendered_width;
    let scale_y = f64::from(target.height) / rendered_height;

    let plan = ScalePlan {
        target_width: target.width,
        target_height: target.height,
        rendered_width,
        rendered_height,
        scale: scale_x.min(scale_y),
    };

    // Subnormal sizes overflow the division; lopsided ones scale to nothing
    let whole_pixel = |side: f64| side.is_finite() && side.round() >= 1.0;
    if !plan.scale.is_finite()
        || !whole_pixel(plan.output_width())
        || !whole_pixel(plan.output_height())
    {
        return Err(invalid());
    }
    Ok(plan)
}
