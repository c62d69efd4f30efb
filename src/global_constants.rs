#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "scene-snap";

pub const LOG_TAG_COMPOSITOR: &str = "[COMPOSITOR]";
pub const LOG_TAG_TRIM: &str = "[TRIM]";
pub const LOG_TAG_EXPORT: &str = "[EXPORT]";
pub const LOG_TAG_CAMERA: &str = "[CAMERA]";
pub const LOG_TAG_LAYERS: &str = "[LAYERS]";
pub const LOG_TAG_OUTPUT: &str = "[OUTPUT]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_SESSION: &str = "[SESSION]";
pub const LOG_TAG_COLLIDERS: &str = "[COLLIDERS]";
pub const LOG_TAG_BUFFER: &str = "[PIXEL_BUFFER]";

pub const MESSAGE_EXPORT_CANCELLED: &str = "no output path chosen, capture cancelled";
pub const MESSAGE_TRIM_NO_MATCH: &str = "no collider bounds in region, keeping selection";
pub const MESSAGE_TRIM_TOO_LARGE: &str = "collider union exceeds selection, keeping selection";

pub const ERROR_CONTEXT_ENCODE_PNG: &str = "Unable to encode capture as PNG";
pub const ERROR_CONTEXT_WRITE_CAPTURE: &str = "Unable to write capture file";
pub const ERROR_CONTEXT_CREATE_OUTPUT_DIR: &str = "Unable to create output directory";

pub const LAYER_SLOT_COUNT: u8 = 32;
pub const RGBA_BYTES_PER_PIXEL: usize = 4;

pub const DEFAULT_PIXELS_PER_UNIT: f32 = 100.0;
pub const DEFAULT_MARGIN_WORLD_UNITS: f32 = 0.0;
pub const DEFAULT_CLEAR_COLOR_RGBA: [u8; 4] = [0, 0, 0, 0];

pub const SETTINGS_FILE_NAME: &str = "settings.json";
