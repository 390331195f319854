//! Pointer input system.
//!
//! [`update_pointer_state`] reads the mouse from Raylib each frame and
//! writes position and button edges into
//! [`PointerState`](crate::resources::input::PointerState).

use bevy_ecs::prelude::*;
use raylib::prelude::MouseButton;

use crate::resources::input::PointerState;

/// Poll Raylib for the mouse position and primary-button edges.
pub fn update_pointer_state(
    mut pointer: ResMut<PointerState>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    pointer.pos = rl.get_mouse_position();
    pointer.left.down = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
    pointer.left.just_pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
    pointer.left.just_released = rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT);
}
