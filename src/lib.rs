mod global_constants;

pub mod core;
pub mod export_settings;
pub mod ports;
pub mod utils;


pub use crate::core::compositor::CaptureCompositor;
pub use crate::core::models::{
    CameraFrame, CaptureParameters, LayerMask, NamedLayer, PixelBuffer, PixelRect, WorldBounds,
    WorldPoint, WorldRect, WorldSize,
};
pub use crate::core::orchestrators::{
    CaptureOrchestrator, CaptureOutcome, CaptureRequest, SelectionSession,
};
pub use crate::core::trimming::{trim_to_colliders_bounds, TrimOutcome};
pub use crate::export_settings::ExportSettings;
