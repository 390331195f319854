//! The transient verdict banner.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

/// Verdict text shown near the top of the screen after a guess.
///
/// Only the progression observer writes it; the renderer and the countdown
/// system read it. An expired banner keeps its last color, which is
/// irrelevant once the text is empty.
#[derive(Resource, Debug, Clone)]
pub struct FeedbackBanner {
    pub text: String,
    pub color: Color,
    pub remaining: f32,
}

impl Default for FeedbackBanner {
    fn default() -> Self {
        FeedbackBanner {
            text: String::new(),
            color: Color::YELLOW,
            remaining: 0.0,
        }
    }
}

impl FeedbackBanner {
    /// Overwrites any in-flight message.
    pub fn set(&mut self, text: impl Into<String>, color: Color, duration: f32) {
        self.text = text.into();
        self.color = color;
        self.remaining = duration;
    }

    pub fn is_visible(&self) -> bool {
        self.remaining > 0.0 && !self.text.is_empty()
    }
}
