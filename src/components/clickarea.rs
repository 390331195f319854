use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Rectangular hit region for pointer picking, relative to the entity's
/// screen position.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct ClickArea {
    pub size: Vector2,
    pub offset: Vector2,
}

impl ClickArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2 {
                x: width,
                y: height,
            },
            offset: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the hit rectangle for a given entity position.
    /// Handles negative sizes by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = Vector2 {
            x: position.x + self.offset.x,
            y: position.y + self.offset.y,
        };
        let p1 = Vector2 {
            x: p0.x + self.size.x,
            y: p0.y + self.size.y,
        };
        let min = Vector2 {
            x: p0.x.min(p1.x),
            y: p0.y.min(p1.y),
        };
        let max = Vector2 {
            x: p0.x.max(p1.x),
            y: p0.y.max(p1.y),
        };
        (min, max)
    }

    /// Point containment in screen space. Edges count as hits.
    pub fn contains_point(&self, position: Vector2, point: Vector2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
