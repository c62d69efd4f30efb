use crate::core::models::{LayerMask, WorldBounds, WorldRect};

pub trait SpatialQuery: Send + Sync {
    fn collider_bounds_in_region(&self, region: &WorldBounds, mask: LayerMask) -> Vec<WorldRect>;
}
