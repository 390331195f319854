//! Z-index component for render ordering.

use bevy_ecs::prelude::Component;

/// Rendering order hint: higher values are drawn later (on top).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
