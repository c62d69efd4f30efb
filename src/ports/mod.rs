mod collider_index;
mod filesystem_capture_output;
mod layer_table_resolver;

pub use collider_index::{ColliderEntry, ColliderIndex};
pub use filesystem_capture_output::FilesystemCaptureOutput;
pub use layer_table_resolver::{LayerTable, LayerTableResolver};
