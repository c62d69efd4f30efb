use anyhow::Result;

use crate::global_constants::{DEFAULT_MARGIN_WORLD_UNITS, DEFAULT_PIXELS_PER_UNIT, LOG_TAG_EXPORT};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureParameters {
    pixels_per_unit: f32,
    margin: f32,
}

impl Default for CaptureParameters {
    fn default() -> Self {
        Self {
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            margin: DEFAULT_MARGIN_WORLD_UNITS,
        }
    }
}

impl CaptureParameters {
    pub fn with_scale_and_margin(pixels_per_unit: f32, margin: f32) -> Result<Self> {
        if pixels_per_unit <= 0.0 {
            anyhow::bail!("pixels_per_unit must be positive, got {}", pixels_per_unit);
        }
        if margin < 0.0 {
            anyhow::bail!("margin must not be negative, got {}", margin);
        }

        log::debug!(
            "{} parameters: {} px/unit, margin {} units",
            LOG_TAG_EXPORT,
            pixels_per_unit,
            margin
        );

        Ok(Self {
            pixels_per_unit,
            margin,
        })
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn set_pixels_per_unit(&mut self, pixels_per_unit: f32) -> Result<()> {
        if pixels_per_unit <= 0.0 {
            anyhow::bail!("pixels_per_unit must be positive, got {}", pixels_per_unit);
        }

        self.pixels_per_unit = pixels_per_unit;
        Ok(())
    }

    pub fn set_margin(&mut self, margin: f32) -> Result<()> {
        if margin < 0.0 {
            anyhow::bail!("margin must not be negative, got {}", margin);
        }

        self.margin = margin;
        Ok(())
    }
}
