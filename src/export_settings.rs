use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::models::{CaptureParameters, LayerMask};
use crate::global_constants::{
    self, DEFAULT_CLEAR_COLOR_RGBA, DEFAULT_MARGIN_WORLD_UNITS, DEFAULT_PIXELS_PER_UNIT,
    LOG_TAG_SETTINGS,
};

fn default_clear_color() -> [u8; 4] {
    DEFAULT_CLEAR_COLOR_RGBA
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    pub pixels_per_unit: f32,
    pub margin: f32,
    pub layer_mask: LayerMask,
    #[serde(default)]
    pub split_by_layer: bool,
    #[serde(default)]
    pub trim_to_colliders: bool,
    #[serde(default = "default_clear_color")]
    pub clear_color: [u8; 4],
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            margin: DEFAULT_MARGIN_WORLD_UNITS,
            layer_mask: LayerMask::all(),
            split_by_layer: false,
            trim_to_colliders: false,
            clear_color: DEFAULT_CLEAR_COLOR_RGBA,
        }
    }
}

impl ExportSettings {
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("{} no settings file found, using defaults", LOG_TAG_SETTINGS);
            let default_settings = Self::default();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: ExportSettings = serde_json::from_str(&contents)?;

        log::info!(
            "{} loaded settings from {:?}",
            LOG_TAG_SETTINGS,
            settings_path
        );
        log::debug!(
            "{} {} px/unit, margin {}, mask {:#010x}",
            LOG_TAG_SETTINGS,
            settings.pixels_per_unit,
            settings.margin,
            settings.layer_mask.bits()
        );

        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!("{} saved settings to {:?}", LOG_TAG_SETTINGS, settings_path);
        Ok(())
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

    pub fn set_layer_mask(&mut self, layer_mask: LayerMask) {
        self.layer_mask = layer_mask;
    }

    pub fn set_split_by_layer(&mut self, split_by_layer: bool) {
        self.split_by_layer = split_by_layer;
    }

    pub fn set_trim_to_colliders(&mut self, trim_to_colliders: bool) {
        self.trim_to_colliders = trim_to_colliders;
    }

    pub fn set_clear_color(&mut self, clear_color: [u8; 4]) {
        self.clear_color = clear_color;
    }

    pub fn capture_parameters(&self) -> Result<CaptureParameters> {
        CaptureParameters::with_scale_and_margin(self.pixels_per_unit, self.margin)
    }

    fn get_settings_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
