use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// A textured quad identified by a texture key, drawn at a fixed size.
/// The origin is the pivot point (in pixels from the quad's top-left) used
/// for placement and scaling when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
}
