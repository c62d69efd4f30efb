use anyhow::Result;

use crate::core::models::{CameraFrame, LayerMask, PixelBuffer};

pub trait SceneRenderer: Send + Sync {
    fn render_with_layers(&self, frame: &CameraFrame, layers: LayerMask) -> Result<PixelBuffer>;
}
