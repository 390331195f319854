//! Pointer picking: turns click edges into game events.
//!
//! Animals are tested before sound buttons and the first hit consumes the
//! click, mirroring the scene's layering. A hit on a locked animal still
//! swallows the click (the observer then ignores it); locked buttons are
//! skipped entirely so clicks on their lock icon do nothing.

use bevy_ecs::prelude::*;

use crate::components::animal::Animal;
use crate::components::clickarea::ClickArea;
use crate::components::screenposition::ScreenPosition;
use crate::components::soundbutton::SoundButton;
use crate::events::click::{AnimalClicked, PlayToggleClicked};
use crate::resources::input::PointerState;
use crate::resources::roster::Roster;

/// Hit-test the click edge against animal sprites, then button toggles.
pub fn pointer_picking(
    pointer: Res<PointerState>,
    roster: Res<Roster>,
    animals: Query<(&Animal, &ScreenPosition, &ClickArea)>,
    buttons: Query<(Entity, &SoundButton, &ScreenPosition, &ClickArea)>,
    mut commands: Commands,
) {
    if !pointer.left.just_pressed {
        return;
    }
    let point = pointer.pos;

    for (animal, position, area) in animals.iter() {
        if area.contains_point(position.pos, point) {
            commands.trigger(AnimalClicked { id: animal.id });
            return;
        }
    }

    for (entity, button, position, area) in buttons.iter() {
        let unlocked = roster
            .get(button.animal)
            .is_some_and(|record| record.unlocked());
        if unlocked && area.contains_point(position.pos, point) {
            commands.trigger(PlayToggleClicked { button: entity });
            return;
        }
    }
}
