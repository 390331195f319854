//! Soundboard replay-button component.

use crate::resources::roster::AnimalId;
use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Gap between the play/pause icon and the button's right edge, pixels.
const ICON_PADDING: f32 = 12.0;

/// Per-animal replay control on the soundboard panel.
///
/// Lock state is not stored here: renderer and picking read it from the
/// animal's roster record, so every unlock path reaches the button without
/// a mirrored flag. `playing` tracks whether the button's preview is
/// currently rendering audio; it is reconciled against the device each
/// frame.
#[derive(Component, Clone, Debug)]
pub struct SoundButton {
    pub animal: AnimalId,
    pub playing: bool,
    pub width: f32,
    pub height: f32,
    pub icon_size: f32,
}

impl SoundButton {
    pub fn new(animal: AnimalId, width: f32, height: f32, icon_size: f32) -> Self {
        SoundButton {
            animal,
            playing: false,
            width,
            height,
            icon_size,
        }
    }

    /// Top-left of the icon, relative to the button origin. The play/pause
    /// toggle sits at the right edge; the lock icon sits centered.
    pub fn icon_offset(&self, locked: bool) -> Vector2 {
        let y = (self.height - self.icon_size) * 0.5;
        if locked {
            Vector2 {
                x: (self.width - self.icon_size) * 0.5,
                y,
            }
        } else {
            Vector2 {
                x: self.width - self.icon_size - ICON_PADDING,
                y,
            }
        }
    }
}
