use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::interfaces::ports::CaptureOutput;
use crate::global_constants::{ERROR_CONTEXT_CREATE_OUTPUT_DIR, LOG_TAG_OUTPUT};

pub struct FilesystemCaptureOutput;

impl FilesystemCaptureOutput {
    pub fn initialize() -> Self {
        log::debug!("{} initializing filesystem capture output", LOG_TAG_OUTPUT);
        Self
    }
}

impl CaptureOutput for FilesystemCaptureOutput {
    fn write_capture(&self, path: &Path, encoded_bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| ERROR_CONTEXT_CREATE_OUTPUT_DIR)?;
            }
        }

        fs::write(path, encoded_bytes)
            .with_context(|| format!("failed to write capture to {:?}", path))?;

        log::info!(
            "{} wrote {} bytes to {:?}",
            LOG_TAG_OUTPUT,
            encoded_bytes.len(),
            path
        );

        Ok(())
    }
}
