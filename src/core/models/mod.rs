mod camera_frame;
mod capture_parameters;
mod layer_mask;
mod pixel_buffer;
mod pixel_rect;
mod world_bounds;

pub use camera_frame::CameraFrame;
pub use capture_parameters::CaptureParameters;
pub use layer_mask::{LayerMask, NamedLayer};
pub use pixel_buffer::PixelBuffer;
pub use pixel_rect::PixelRect;
pub use world_bounds::{WorldBounds, WorldPoint, WorldRect, WorldSize};
