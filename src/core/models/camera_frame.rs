use crate::core::models::{CaptureParameters, WorldBounds, WorldPoint};
use crate::global_constants::LOG_TAG_CAMERA;
use crate::utils::ceil_power_of_two;

// Orthographic, square, 1:1 aspect. The texture side is the next power of two
// that fits the padded selection at the requested scale, so the framed region
// always lands centered with the overshoot masked out later.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrame {
    pub center: WorldPoint,
    pub texture_size: u32,
    pub orthographic_half_height: f32,
}

impl CameraFrame {
    pub fn fit_bounds(bounds: &WorldBounds, parameters: &CaptureParameters) -> Self {
        let required_pixels =
            ((bounds.size.longest_side() + parameters.margin()) * parameters.pixels_per_unit())
                as u32;
        let texture_size = ceil_power_of_two(required_pixels);
        let orthographic_half_height = texture_size as f32 / parameters.pixels_per_unit() / 2.0;

        log::debug!(
            "{} framing ({}, {}) into {}px texture, half-height {}",
            LOG_TAG_CAMERA,
            bounds.center.x,
            bounds.center.y,
            texture_size,
            orthographic_half_height
        );

        Self {
            center: bounds.center,
            texture_size,
            orthographic_half_height,
        }
    }
}
