use crate::core::interfaces::ports::SpatialQuery;
use crate::core::models::{LayerMask, WorldBounds, WorldRect};
use crate::global_constants::LOG_TAG_COLLIDERS;

#[derive(Clone, Debug)]
pub struct ColliderEntry {
    pub layer_slot: u8,
    pub bounds: WorldRect,
}

#[derive(Default)]
pub struct ColliderIndex {
    entries: Vec<ColliderEntry>,
}

impl ColliderIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<ColliderEntry>) -> Self {
        log::debug!(
            "{} building index with {} colliders",
            LOG_TAG_COLLIDERS,
            entries.len()
        );
        Self { entries }
    }

    pub fn add_collider(&mut self, layer_slot: u8, bounds: WorldRect) {
        self.entries.push(ColliderEntry { layer_slot, bounds });
    }
}

impl SpatialQuery for ColliderIndex {
    fn collider_bounds_in_region(&self, region: &WorldBounds, mask: LayerMask) -> Vec<WorldRect> {
        let region_rect = region.to_rect();

        let matching_bounds: Vec<WorldRect> = self
            .entries
            .iter()
            .filter(|entry| mask.contains(entry.layer_slot))
            .filter(|entry| entry.bounds.overlaps(&region_rect))
            .map(|entry| entry.bounds)
            .collect();

        log::debug!(
            "{} {} of {} colliders overlap query region",
            LOG_TAG_COLLIDERS,
            matching_bounds.len(),
            self.entries.len()
        );

        matching_bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{WorldPoint, WorldSize};

    fn region_around_origin(width: f32, height: f32) -> WorldBounds {
        WorldBounds::centered_at(
            WorldPoint::at_coordinates(0.0, 0.0),
            WorldSize::with_dimensions(width, height),
        )
    }

    #[test]
    fn test_query_returns_only_overlapping_colliders() {
        let mut index = ColliderIndex::empty();
        index.add_collider(0, WorldRect::from_min_and_size(-1.0, -1.0, 2.0, 2.0));
        index.add_collider(0, WorldRect::from_min_and_size(50.0, 50.0, 2.0, 2.0));

        let results = index.collider_bounds_in_region(&region_around_origin(4.0, 4.0), LayerMask::all());

        assert_eq!(results.len(), 1);
        assert_eq!(results[0], WorldRect::from_min_and_size(-1.0, -1.0, 2.0, 2.0));
    }

    #[test]
    fn test_query_filters_by_layer_mask() {
        let mut index = ColliderIndex::empty();
        index.add_collider(0, WorldRect::from_min_and_size(-1.0, -1.0, 1.0, 1.0));
        index.add_collider(4, WorldRect::from_min_and_size(0.0, 0.0, 1.0, 1.0));

        let results =
            index.collider_bounds_in_region(&region_around_origin(4.0, 4.0), LayerMask::single(4));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0], WorldRect::from_min_and_size(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_query_on_empty_index_returns_nothing() {
        let index = ColliderIndex::empty();

        let results =
            index.collider_bounds_in_region(&region_around_origin(4.0, 4.0), LayerMask::all());

        assert!(results.is_empty());
    }

    #[test]
    fn test_query_includes_collider_touching_region_edge() {
        let mut index = ColliderIndex::empty();
        index.add_collider(0, WorldRect::from_min_and_size(2.0, 0.0, 1.0, 1.0));

        let results =
            index.collider_bounds_in_region(&region_around_origin(4.0, 4.0), LayerMask::all());

        assert_eq!(results.len(), 1);
    }
}
