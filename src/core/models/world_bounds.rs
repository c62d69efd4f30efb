use crate::global_constants::LOG_TAG_TRIM;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
}

impl WorldPoint {
    pub fn at_coordinates(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldSize {
    pub width: f32,
    pub height: f32,
}

impl WorldSize {
    pub fn with_dimensions(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn longest_side(&self) -> f32 {
        self.width.max(self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub center: WorldPoint,
    pub size: WorldSize,
}

impl WorldBounds {
    pub fn centered_at(center: WorldPoint, size: WorldSize) -> Self {
        Self { center, size }
    }

    pub fn from_corners(first: WorldPoint, second: WorldPoint) -> Self {
        let min_x = first.x.min(second.x);
        let min_y = first.y.min(second.y);
        let max_x = first.x.max(second.x);
        let max_y = first.y.max(second.y);

        Self {
            center: WorldPoint::at_coordinates((min_x + max_x) / 2.0, (min_y + max_y) / 2.0),
            size: WorldSize::with_dimensions(max_x - min_x, max_y - min_y),
        }
    }

    pub fn to_rect(&self) -> WorldRect {
        WorldRect {
            x: self.center.x - self.size.width / 2.0,
            y: self.center.y - self.size.height / 2.0,
            width: self.size.width,
            height: self.size.height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl WorldRect {
    pub fn from_min_and_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }

    pub fn union_with(&self, other: &WorldRect) -> WorldRect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.x_max().max(other.x_max());
        let max_y = self.y_max().max(other.y_max());

        WorldRect::from_min_and_size(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    pub fn overlaps(&self, other: &WorldRect) -> bool {
        self.x <= other.x_max()
            && self.x_max() >= other.x
            && self.y <= other.y_max()
            && self.y_max() >= other.y
    }

    pub fn to_bounds(&self) -> WorldBounds {
        log::debug!(
            "{} converting rect at ({}, {}) size {}x{} to bounds",
            LOG_TAG_TRIM,
            self.x,
            self.y,
            self.width,
            self.height
        );

        WorldBounds::centered_at(
            WorldPoint::at_coordinates(self.x + self.width / 2.0, self.y + self.height / 2.0),
            WorldSize::with_dimensions(self.width, self.height),
        )
    }
}
