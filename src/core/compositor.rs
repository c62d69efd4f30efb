use std::io::Cursor;

use anyhow::{Context, Result};

use crate::core::models::{CaptureParameters, PixelBuffer, PixelRect, WorldBounds};
use crate::global_constants::{ERROR_CONTEXT_ENCODE_PNG, LOG_TAG_COMPOSITOR};

pub struct CaptureCompositor;

impl CaptureCompositor {
    pub fn initialize() -> Self {
        log::debug!("{} initializing capture compositor", LOG_TAG_COMPOSITOR);
        Self
    }

    // The result is intentionally unclamped: a selection wider than the
    // buffer yields a negative origin, which clear_outside_rect tolerates by
    // clamping before it decomposes the border.
    pub fn compute_visible_rect(
        &self,
        buffer_width: u32,
        buffer_height: u32,
        bounds: &WorldBounds,
        parameters: &CaptureParameters,
    ) -> PixelRect {
        let visible_width_pixels =
            (bounds.size.width + parameters.margin()) * parameters.pixels_per_unit();
        let visible_height_pixels =
            (bounds.size.height + parameters.margin()) * parameters.pixels_per_unit();

        let visible_rect = PixelRect::from_origin_and_size(
            (buffer_width as f32 / 2.0 - visible_width_pixels / 2.0) as i32,
            (buffer_height as f32 / 2.0 - visible_height_pixels / 2.0) as i32,
            visible_width_pixels as i32,
            visible_height_pixels as i32,
        );

        log::debug!(
            "{} visible rect {:?} inside {}x{} buffer",
            LOG_TAG_COMPOSITOR,
            visible_rect,
            buffer_width,
            buffer_height
        );

        visible_rect
    }

    pub fn clear_outside_rect(
        &self,
        buffer: &mut PixelBuffer,
        visible: &PixelRect,
        clear_color: [u8; 4],
    ) -> Result<()> {
        if buffer.width == 0 || buffer.height == 0 {
            anyhow::bail!(
                "buffer dimensions must be positive, got {}x{}",
                buffer.width,
                buffer.height
            );
        }

        let clamped = visible.clamped_to(buffer.width, buffer.height);
        let border_regions = clamped.border_regions(buffer.width, buffer.height);

        let mut cleared_pixels: i64 = 0;
        for region in border_regions {
            if region.is_empty() {
                continue;
            }

            buffer.fill_rect(
                region.x as u32,
                region.y as u32,
                region.width as u32,
                region.height as u32,
                clear_color,
            );
            cleared_pixels += region.area();
        }

        log::debug!(
            "{} cleared {} border pixels around {:?}",
            LOG_TAG_COMPOSITOR,
            cleared_pixels,
            clamped
        );

        Ok(())
    }

    pub fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>> {
        if buffer.width == 0 || buffer.height == 0 {
            anyhow::bail!(
                "buffer dimensions must be positive, got {}x{}",
                buffer.width,
                buffer.height
            );
        }

        let rgba_image =
            image::RgbaImage::from_raw(buffer.width, buffer.height, buffer.as_raw().to_vec())
                .with_context(|| ERROR_CONTEXT_ENCODE_PNG)?;

        let mut encoded_bytes = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(rgba_image)
            .write_to(&mut encoded_bytes, image::ImageFormat::Png)
            .with_context(|| ERROR_CONTEXT_ENCODE_PNG)?;

        log::info!(
            "{} encoded {}x{} buffer into {} PNG bytes",
            LOG_TAG_COMPOSITOR,
            buffer.width,
            buffer.height,
            encoded_bytes.get_ref().len()
        );

        Ok(encoded_bytes.into_inner())
    }
}
