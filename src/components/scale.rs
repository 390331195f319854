use bevy_ecs::prelude::Component;

/// Uniform draw scale for a sprite. Written by the pop animation.
#[derive(Component, Clone, Copy, Debug)]
pub struct Scale {
    pub factor: f32,
}

impl Default for Scale {
    fn default() -> Self {
        Scale { factor: 1.0 }
    }
}
