use crate::core::models::{WorldBounds, WorldPoint};
use crate::global_constants::LOG_TAG_SESSION;

// One session per drag interaction; state is discarded when the drag resolves.
#[derive(Debug, Default)]
pub struct SelectionSession {
    drag_start: Option<WorldPoint>,
    drag_current: Option<WorldPoint>,
}

impl SelectionSession {
    pub fn begin() -> Self {
        Self::default()
    }

    pub fn begin_drag(&mut self, point: WorldPoint) {
        log::debug!(
            "{} drag started at ({}, {})",
            LOG_TAG_SESSION,
            point.x,
            point.y
        );

        self.drag_start = Some(point);
        self.drag_current = Some(point);
    }

    pub fn update_drag(&mut self, point: WorldPoint) {
        if self.drag_start.is_none() {
            log::warn!("{} ignoring drag update before drag start", LOG_TAG_SESSION);
            return;
        }

        self.drag_current = Some(point);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    pub fn finish_drag(&mut self) -> Option<WorldBounds> {
        let drag_start = self.drag_start.take()?;
        let drag_end = self.drag_current.take()?;

        let bounds = WorldBounds::from_corners(drag_start, drag_end);
        if bounds.size.width == 0.0 || bounds.size.height == 0.0 {
            log::info!("{} drag collapsed to a degenerate rectangle", LOG_TAG_SESSION);
            return None;
        }

        log::info!(
            "{} drag finished: {}x{} centered ({}, {})",
            LOG_TAG_SESSION,
            bounds.size.width,
            bounds.size.height,
            bounds.center.x,
            bounds.center.y
        );

        Some(bounds)
    }

    pub fn cancel(&mut self) {
        log::debug!("{} selection cancelled", LOG_TAG_SESSION);

        self.drag_start = None;
        self.drag_current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::WorldSize;

    #[test]
    fn test_finish_drag_normalizes_reversed_drag_direction() {
        let mut session = SelectionSession::begin();

        session.begin_drag(WorldPoint::at_coordinates(5.0, 6.0));
        session.update_drag(WorldPoint::at_coordinates(1.0, 2.0));
        let bounds = session.finish_drag().unwrap();

        assert_eq!(bounds.center, WorldPoint::at_coordinates(3.0, 4.0));
        assert_eq!(bounds.size, WorldSize::with_dimensions(4.0, 4.0));
    }

    #[test]
    fn test_finish_drag_without_start_returns_none() {
        let mut session = SelectionSession::begin();

        assert!(session.finish_drag().is_none());
    }

    #[test]
    fn test_finish_drag_with_degenerate_rectangle_returns_none() {
        let mut session = SelectionSession::begin();

        session.begin_drag(WorldPoint::at_coordinates(2.0, 2.0));
        session.update_drag(WorldPoint::at_coordinates(2.0, 5.0));

        assert!(session.finish_drag().is_none());
    }

    #[test]
    fn test_update_drag_before_start_is_ignored() {
        let mut session = SelectionSession::begin();

        session.update_drag(WorldPoint::at_coordinates(3.0, 3.0));

        assert!(!session.is_dragging());
        assert!(session.finish_drag().is_none());
    }

    #[test]
    fn test_cancel_clears_drag_state() {
        let mut session = SelectionSession::begin();
        session.begin_drag(WorldPoint::at_coordinates(0.0, 0.0));
        session.update_drag(WorldPoint::at_coordinates(4.0, 4.0));

        session.cancel();

        assert!(!session.is_dragging());
        assert!(session.finish_drag().is_none());
    }
}
