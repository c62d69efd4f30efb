use crate::core::models::{WorldBounds, WorldRect};
use crate::global_constants::{LOG_TAG_TRIM, MESSAGE_TRIM_NO_MATCH, MESSAGE_TRIM_TOO_LARGE};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrimOutcome {
    Trimmed(WorldBounds),
    NoMatch,
    TooLarge,
}

impl TrimOutcome {
    pub fn bounds_or(&self, fallback: WorldBounds) -> WorldBounds {
        match self {
            TrimOutcome::Trimmed(bounds) => *bounds,
            TrimOutcome::NoMatch | TrimOutcome::TooLarge => fallback,
        }
    }
}

// Trimming only ever shrinks or preserves the capture region, never grows it.
pub fn trim_to_colliders_bounds(
    candidate_rects: &[WorldRect],
    current_bounds: &WorldBounds,
) -> TrimOutcome {
    let Some((first_rect, remaining_rects)) = candidate_rects.split_first() else {
        log::info!("{} {}", LOG_TAG_TRIM, MESSAGE_TRIM_NO_MATCH);
        return TrimOutcome::NoMatch;
    };

    let union_rect = remaining_rects
        .iter()
        .fold(*first_rect, |union, rect| union.union_with(rect));

    if union_rect.width > current_bounds.size.width
        || union_rect.height > current_bounds.size.height
    {
        log::info!("{} {}", LOG_TAG_TRIM, MESSAGE_TRIM_TOO_LARGE);
        return TrimOutcome::TooLarge;
    }

    let trimmed_bounds = union_rect.to_bounds();
    log::info!(
        "{} trimmed selection to {}x{} at ({}, {})",
        LOG_TAG_TRIM,
        trimmed_bounds.size.width,
        trimmed_bounds.size.height,
        trimmed_bounds.center.x,
        trimmed_bounds.center.y
    );

    TrimOutcome::Trimmed(trimmed_bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{WorldPoint, WorldSize};

    fn selection_of_size(width: f32, height: f32) -> WorldBounds {
        WorldBounds::centered_at(
            WorldPoint::at_coordinates(0.0, 0.0),
            WorldSize::with_dimensions(width, height),
        )
    }

    #[test]
    fn test_trim_with_empty_set_returns_no_match() {
        let current_bounds = selection_of_size(4.0, 4.0);

        let outcome = trim_to_colliders_bounds(&[], &current_bounds);

        assert_eq!(outcome, TrimOutcome::NoMatch);
        assert_eq!(outcome.bounds_or(current_bounds), current_bounds);
    }

    #[test]
    fn test_trim_with_single_rect_centers_on_union() {
        let current_bounds = selection_of_size(4.0, 4.0);
        let collider_rect = WorldRect::from_min_and_size(0.0, 0.0, 2.0, 2.0);

        let outcome = trim_to_colliders_bounds(&[collider_rect], &current_bounds);

        let expected = WorldBounds::centered_at(
            WorldPoint::at_coordinates(1.0, 1.0),
            WorldSize::with_dimensions(2.0, 2.0),
        );
        assert_eq!(outcome, TrimOutcome::Trimmed(expected));
    }

    #[test]
    fn test_trim_with_oversized_union_returns_too_large() {
        let current_bounds = selection_of_size(4.0, 4.0);
        let left_rect = WorldRect::from_min_and_size(-3.0, 0.0, 1.0, 1.0);
        let right_rect = WorldRect::from_min_and_size(3.0, 0.0, 1.0, 1.0);

        let outcome = trim_to_colliders_bounds(&[left_rect, right_rect], &current_bounds);

        assert_eq!(outcome, TrimOutcome::TooLarge);
        assert_eq!(outcome.bounds_or(current_bounds), current_bounds);
    }

    #[test]
    fn test_trim_too_large_on_single_axis_keeps_selection() {
        let current_bounds = selection_of_size(4.0, 4.0);
        let tall_rect = WorldRect::from_min_and_size(0.0, -3.0, 1.0, 6.0);

        let outcome = trim_to_colliders_bounds(&[tall_rect], &current_bounds);

        assert_eq!(outcome, TrimOutcome::TooLarge);
    }

    #[test]
    fn test_trim_union_exactly_matching_selection_is_kept() {
        let current_bounds = selection_of_size(4.0, 4.0);
        let matching_rect = WorldRect::from_min_and_size(-2.0, -2.0, 4.0, 4.0);

        let outcome = trim_to_colliders_bounds(&[matching_rect], &current_bounds);

        assert_eq!(outcome, TrimOutcome::Trimmed(current_bounds));
    }
}
