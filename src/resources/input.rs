//! Per-frame pointer state.
//!
//! Captures the mouse position and primary-button edges once per frame and
//! exposes them via the [`PointerState`] resource. `just_pressed` is the
//! click edge: true only on the frame the button went down, so holding the
//! button never repeats a click.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Boolean button state with press/release edge flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    /// Button is currently held.
    pub down: bool,
    /// Button went down this frame.
    pub just_pressed: bool,
    /// Button went up this frame.
    pub just_released: bool,
}

/// Resource capturing the per-frame pointer state relevant to gameplay.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PointerState {
    /// Cursor position in window pixels.
    pub pos: Vector2,
    /// Primary (left) button.
    pub left: ButtonState,
}

impl Default for PointerState {
    fn default() -> Self {
        PointerState {
            pos: Vector2 { x: 0.0, y: 0.0 },
            left: ButtonState::default(),
        }
    }
}
