//! Verdict banner countdown.

use bevy_ecs::prelude::*;

use crate::resources::feedback::FeedbackBanner;
use crate::resources::worldtime::WorldTime;

/// Decrement the banner's remaining time; clear the text the moment it
/// reaches zero so the renderer draws nothing.
pub fn feedback_banner_system(time: Res<WorldTime>, mut banner: ResMut<FeedbackBanner>) {
    if banner.remaining > 0.0 {
        banner.remaining -= time.delta;
        if banner.remaining <= 0.0 {
            banner.text.clear();
        }
    }
}
