use crate::core::models::{LayerMask, NamedLayer};

pub trait LayerNameResolver: Send + Sync {
    fn named_layers_in_mask(&self, mask: LayerMask) -> Vec<NamedLayer>;
}
