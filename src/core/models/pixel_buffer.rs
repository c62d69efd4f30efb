use anyhow::Result;

use crate::global_constants::{LOG_TAG_BUFFER, RGBA_BYTES_PER_PIXEL};

#[derive(Clone)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl PixelBuffer {
    pub fn build_from_raw_data(
        width_pixels: u32,
        height_pixels: u32,
        raw_rgba_data: Vec<u8>,
    ) -> Result<Self> {
        let expected_length =
            width_pixels as usize * height_pixels as usize * RGBA_BYTES_PER_PIXEL;
        if raw_rgba_data.len() != expected_length {
            anyhow::bail!(
                "raw data length {} does not match {}x{} RGBA buffer",
                raw_rgba_data.len(),
                width_pixels,
                height_pixels
            );
        }

        log::debug!(
            "{} building buffer: {}x{}",
            LOG_TAG_BUFFER,
            width_pixels,
            height_pixels
        );

        Ok(Self {
            width: width_pixels,
            height: height_pixels,
            raw_data: raw_rgba_data,
        })
    }

    pub fn filled_with_color(width_pixels: u32, height_pixels: u32, color: [u8; 4]) -> Self {
        let pixel_count = width_pixels as usize * height_pixels as usize;
        let mut raw_data = Vec::with_capacity(pixel_count * RGBA_BYTES_PER_PIXEL);
        for _ in 0..pixel_count {
            raw_data.extend_from_slice(&color);
        }

        Self {
            width: width_pixels,
            height: height_pixels,
            raw_data,
        }
    }

    pub fn pixel_at(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * self.width as usize + x as usize) * RGBA_BYTES_PER_PIXEL;
        [
            self.raw_data[offset],
            self.raw_data[offset + 1],
            self.raw_data[offset + 2],
            self.raw_data[offset + 3],
        ]
    }

    // Caller guarantees the rect lies inside the buffer.
    pub fn fill_rect(&mut self, x: u32, y: u32, rect_width: u32, rect_height: u32, color: [u8; 4]) {
        for row in y..(y + rect_height) {
            let row_start =
                (row as usize * self.width as usize + x as usize) * RGBA_BYTES_PER_PIXEL;

            for column in 0..rect_width as usize {
                let offset = row_start + column * RGBA_BYTES_PER_PIXEL;
                self.raw_data[offset..offset + RGBA_BYTES_PER_PIXEL].copy_from_slice(&color);
            }
        }
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.raw_data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.raw_data
    }
}
