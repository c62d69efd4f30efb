use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::compositor::CaptureCompositor;
use crate::core::interfaces::ports::{CaptureOutput, LayerNameResolver, SceneRenderer, SpatialQuery};
use crate::core::models::{
    CameraFrame, CaptureParameters, LayerMask, PixelBuffer, WorldBounds,
};
use crate::core::trimming::{trim_to_colliders_bounds, TrimOutcome};
use crate::global_constants::{
    DEFAULT_CLEAR_COLOR_RGBA, ERROR_CONTEXT_WRITE_CAPTURE, LOG_TAG_EXPORT,
    MESSAGE_EXPORT_CANCELLED,
};
use crate::utils::suffix_path_with_layer;

#[derive(Clone, Debug)]
pub struct CaptureRequest {
    pub selection: WorldBounds,
    pub parameters: CaptureParameters,
    pub layer_mask: LayerMask,
    pub split_by_layer: bool,
    pub trim_to_colliders: bool,
    pub clear_color: [u8; 4],
    pub output_path: Option<PathBuf>,
}

impl CaptureRequest {
    pub fn for_selection(selection: WorldBounds, parameters: CaptureParameters) -> Self {
        Self {
            selection,
            parameters,
            layer_mask: LayerMask::all(),
            split_by_layer: false,
            trim_to_colliders: false,
            clear_color: DEFAULT_CLEAR_COLOR_RGBA,
            output_path: None,
        }
    }

    pub fn saving_to(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CaptureOutcome {
    Saved { files: Vec<PathBuf> },
    Cancelled,
}

pub struct CaptureOrchestrator {
    scene_renderer: Arc<dyn SceneRenderer>,
    layer_resolver: Arc<dyn LayerNameResolver>,
    spatial_query: Arc<dyn SpatialQuery>,
    capture_output: Arc<dyn CaptureOutput>,
    compositor: CaptureCompositor,
}

impl CaptureOrchestrator {
    pub fn build(
        scene_renderer: Arc<dyn SceneRenderer>,
        layer_resolver: Arc<dyn LayerNameResolver>,
        spatial_query: Arc<dyn SpatialQuery>,
        capture_output: Arc<dyn CaptureOutput>,
    ) -> Self {
        Self {
            scene_renderer,
            layer_resolver,
            spatial_query,
            capture_output,
            compositor: CaptureCompositor::initialize(),
        }
    }

    pub fn export_region(&self, request: &CaptureRequest) -> Result<CaptureOutcome> {
        let Some(output_path) = &request.output_path else {
            log::info!("{} {}", LOG_TAG_EXPORT, MESSAGE_EXPORT_CANCELLED);
            return Ok(CaptureOutcome::Cancelled);
        };

        let capture_bounds = if request.trim_to_colliders {
            self.resolve_trimmed_bounds(&request.selection, request.layer_mask)
        } else {
            request.selection
        };

        let frame = CameraFrame::fit_bounds(&capture_bounds, &request.parameters);
        log::info!(
            "{} exporting {}x{} world units into {}px texture",
            LOG_TAG_EXPORT,
            capture_bounds.size.width,
            capture_bounds.size.height,
            frame.texture_size
        );

        if request.split_by_layer {
            self.export_each_layer(request, &capture_bounds, &frame, output_path)
        } else {
            self.export_combined(request, &capture_bounds, &frame, output_path)
        }
    }

    fn resolve_trimmed_bounds(&self, selection: &WorldBounds, mask: LayerMask) -> WorldBounds {
        let collider_rects = self
            .spatial_query
            .collider_bounds_in_region(selection, mask);
        log::debug!(
            "{} spatial query returned {} collider bounds",
            LOG_TAG_EXPORT,
            collider_rects.len()
        );

        match trim_to_colliders_bounds(&collider_rects, selection) {
            TrimOutcome::Trimmed(trimmed_bounds) => trimmed_bounds,
            TrimOutcome::NoMatch | TrimOutcome::TooLarge => *selection,
        }
    }

    fn export_combined(
        &self,
        request: &CaptureRequest,
        capture_bounds: &WorldBounds,
        frame: &CameraFrame,
        output_path: &Path,
    ) -> Result<CaptureOutcome> {
        let mut buffer = self
            .scene_renderer
            .render_with_layers(frame, request.layer_mask)?;

        let encoded_bytes =
            self.composite_and_encode(&mut buffer, capture_bounds, request)?;
        self.capture_output
            .write_capture(output_path, &encoded_bytes)
            .with_context(|| ERROR_CONTEXT_WRITE_CAPTURE)?;

        log::info!(
            "{} saved combined capture to {:?}",
            LOG_TAG_EXPORT,
            output_path
        );

        Ok(CaptureOutcome::Saved {
            files: vec![output_path.to_path_buf()],
        })
    }

    fn export_each_layer(
        &self,
        request: &CaptureRequest,
        capture_bounds: &WorldBounds,
        frame: &CameraFrame,
        output_path: &Path,
    ) -> Result<CaptureOutcome> {
        let named_layers = self.layer_resolver.named_layers_in_mask(request.layer_mask);
        if named_layers.is_empty() {
            log::warn!(
                "{} no named layers in mask {:#010x}, nothing to export",
                LOG_TAG_EXPORT,
                request.layer_mask.bits()
            );
            return Ok(CaptureOutcome::Saved { files: Vec::new() });
        }

        let mut written_files = Vec::with_capacity(named_layers.len());
        for layer in named_layers {
            let mut buffer = self
                .scene_renderer
                .render_with_layers(frame, layer.mask())?;

            let encoded_bytes =
                self.composite_and_encode(&mut buffer, capture_bounds, request)?;

            let layer_path = suffix_path_with_layer(output_path, &layer.name);
            self.capture_output
                .write_capture(&layer_path, &encoded_bytes)
                .with_context(|| ERROR_CONTEXT_WRITE_CAPTURE)?;

            log::info!(
                "{} saved layer '{}' capture to {:?}",
                LOG_TAG_EXPORT,
                layer.name,
                layer_path
            );
            written_files.push(layer_path);
        }

        Ok(CaptureOutcome::Saved {
            files: written_files,
        })
    }

    fn composite_and_encode(
        &self,
        buffer: &mut PixelBuffer,
        capture_bounds: &WorldBounds,
        request: &CaptureRequest,
    ) -> Result<Vec<u8>> {
        let visible_rect = self.compositor.compute_visible_rect(
            buffer.width,
            buffer.height,
            capture_bounds,
            &request.parameters,
        );
        self.compositor
            .clear_outside_rect(buffer, &visible_rect, request.clear_color)?;
        self.compositor.encode(buffer)
    }
}
