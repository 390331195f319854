//! Click events produced by pointer picking.
//!
//! [`pointer_picking`](crate::systems::picking::pointer_picking) hit-tests
//! the click edge and triggers one of these; the progression and soundboard
//! observers react.

use crate::resources::roster::AnimalId;
use bevy_ecs::prelude::*;

/// An animal sprite was clicked. Fired for locked animals too; the
/// progression observer decides what the click means.
#[derive(Event, Debug, Clone, Copy)]
pub struct AnimalClicked {
    pub id: AnimalId,
}

/// The play/pause toggle of an unlocked sound button was clicked.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayToggleClicked {
    pub button: Entity,
}
