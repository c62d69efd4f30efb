use std::path::{Path, PathBuf};

pub fn ceil_power_of_two(value: u32) -> u32 {
    if value < 2 {
        return 1;
    }
    1u32 << ((value - 1).ilog2() + 1)
}

pub fn suffix_path_with_layer(path: &Path, layer_name: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let suffixed_name = match path.extension() {
        Some(extension) => format!("{}_{}.{}", stem, layer_name, extension.to_string_lossy()),
        None => format!("{}_{}", stem, layer_name),
    };

    match path.parent() {
        Some(parent) => parent.join(suffixed_name),
        None => PathBuf::from(suffixed_name),
    }
}
