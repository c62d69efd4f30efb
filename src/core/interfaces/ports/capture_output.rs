use std::path::Path;

use anyhow::Result;

pub trait CaptureOutput: Send + Sync {
    fn write_capture(&self, path: &Path, encoded_bytes: &[u8]) -> Result<()>;
}
