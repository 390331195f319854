//! Pop animation system.
//!
//! Advances every playing [`Pop`] and writes the resulting factor into the
//! entity's [`Scale`]. The pulse is a triangle ramp: 1.0 up to the peak over
//! the first half of the duration, back down over the second half, and
//! exactly 1.0 when it ends.

use bevy_ecs::prelude::*;

use crate::components::pop::Pop;
use crate::components::scale::Scale;
use crate::resources::worldtime::WorldTime;

/// Scale factor of a pop at time `t` into a pulse of the given duration.
pub fn pop_scale(t: f32, duration: f32, peak: f32) -> f32 {
    let progress = (t / duration).clamp(0.0, 1.0);
    if progress < 0.5 {
        1.0 + (peak - 1.0) * (progress * 2.0)
    } else {
        peak - (peak - 1.0) * ((progress - 0.5) * 2.0)
    }
}

/// Advance playing pops and write the sprite scale.
pub fn pop_system(time: Res<WorldTime>, mut query: Query<(&mut Pop, &mut Scale)>) {
    let dt = time.delta.max(0.0);
    for (mut pop, mut scale) in query.iter_mut() {
        if !pop.playing {
            continue;
        }
        pop.time += dt;
        if pop.time >= pop.duration {
            pop.playing = false;
            scale.factor = 1.0;
        } else {
            scale.factor = pop_scale(pop.time, pop.duration, pop.peak);
        }
    }
}
