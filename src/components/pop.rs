//! Pop animation component.
//!
//! A brief scale pulse played when an animal is clicked: the sprite grows
//! from 1.0 to a peak factor over the first half of the duration and shrinks
//! back over the second half. See [`crate::systems::pop`] for the update
//! system.

use bevy_ecs::prelude::Component;

/// Scale-pulse state for one animal sprite.
///
/// Overlapping triggers are not queued: retriggering restarts the pulse
/// from the beginning.
#[derive(Component, Clone, Debug)]
pub struct Pop {
    /// Total pulse length in seconds.
    pub duration: f32,
    /// Peak scale factor reached at the halfway point.
    pub peak: f32,
    /// Time into the current pulse.
    pub time: f32,
    /// Whether a pulse is in progress.
    pub playing: bool,
}

impl Pop {
    pub fn new(duration: f32, peak: f32) -> Self {
        Pop {
            duration,
            peak,
            time: 0.0,
            playing: false,
        }
    }

    /// Start (or restart) the pulse.
    pub fn trigger(&mut self) {
        self.playing = true;
        self.time = 0.0;
    }
}

impl Default for Pop {
    fn default() -> Self {
        Pop::new(0.5, 1.3)
    }
}
