use crate::resources::roster::AnimalId;
use bevy_ecs::prelude::Component;

/// Ties a sprite entity to its record in the
/// [`Roster`](crate::resources::roster::Roster).
#[derive(Component, Clone, Copy, Debug)]
pub struct Animal {
    pub id: AnimalId,
}
