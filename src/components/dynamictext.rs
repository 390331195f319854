use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Text drawn in screen space with the built-in font.
#[derive(Component, Clone, Debug)]
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Color of the text.
    pub color: Color,
}

impl DynamicText {
    pub fn new(content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
        }
    }
}
