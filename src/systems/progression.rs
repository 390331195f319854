//! The guessing game itself: click judging and the deferred unlock.
//!
//! [`animal_clicked_observer`] implements the progression contract:
//! - Clicks on locked animals are ignored outright.
//! - Any click on an unlocked animal pops the sprite and replays its call.
//! - A click on the expected animal marks it found, shows "CORRECT!", and
//!   schedules the successor's unlock after a fixed delay; the successor
//!   stays locked until the delay elapses.
//! - A click on an animal that was already found is a quiet acknowledgment:
//!   no verdict, no chime, no banner.
//! - Any other unlocked click shows "WRONG!" and changes nothing.
//!
//! [`pending_unlock_system`] ticks the single deferred-unlock slot and
//! performs the unlock when the countdown runs out.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Color;

use crate::components::animal::Animal;
use crate::components::pop::Pop;
use crate::events::audio::AudioCmd;
use crate::events::click::AnimalClicked;
use crate::resources::feedback::FeedbackBanner;
use crate::resources::oneshots::OneShots;
use crate::resources::pendingunlock::PendingUnlock;
use crate::resources::roster::Roster;
use crate::resources::worldtime::WorldTime;

/// Seconds between a correct guess and the successor becoming interactive.
pub const UNLOCK_DELAY: f32 = 2.0;
/// Seconds the verdict banner stays on screen.
pub const FEEDBACK_DURATION: f32 = 2.0;
/// Sound id of the correct-guess chime.
pub const CORRECT_CHIME: &str = "correct";
/// Sound id of the wrong-guess chime.
pub const INCORRECT_CHIME: &str = "incorrect";

const CORRECT_COLOR: Color = Color::YELLOW;
const WRONG_COLOR: Color = Color::RED;

/// Judge a click on an animal sprite.
pub fn animal_clicked_observer(
    trigger: On<AnimalClicked>,
    mut roster: ResMut<Roster>,
    mut banner: ResMut<FeedbackBanner>,
    mut pending: ResMut<PendingUnlock>,
    mut oneshots: ResMut<OneShots>,
    mut audio_cmds: MessageWriter<AudioCmd>,
    mut pops: Query<(&Animal, &mut Pop)>,
) {
    let clicked = trigger.event().id;
    let Some(record) = roster.get(clicked) else {
        return;
    };
    if !record.unlocked() {
        return;
    }
    let clicked_name = record.name.clone();
    let already_found = record.found;

    // Visual acknowledgment plus the animal's own call, for any unlocked click.
    for (animal, mut pop) in pops.iter_mut() {
        if animal.id == clicked {
            pop.trigger();
        }
    }
    audio_cmds.write(AudioCmd::PlayOneShot {
        id: clicked_name.clone(),
        handle: oneshots.issue(),
    });

    if roster.expected() == Some(clicked) {
        roster.mark_found(clicked);
        banner.set("CORRECT!", CORRECT_COLOR, FEEDBACK_DURATION);
        audio_cmds.write(AudioCmd::PlayOneShot {
            id: CORRECT_CHIME.into(),
            handle: oneshots.issue(),
        });
        if let Some(next) = roster.successor(clicked) {
            pending.schedule(next, UNLOCK_DELAY);
            info!("'{clicked_name}' found, next animal unlocks in {UNLOCK_DELAY}s");
        } else {
            info!("'{clicked_name}' found; the whole roster is identified");
        }
    } else if already_found {
        debug!("'{clicked_name}' clicked again after being found");
    } else {
        banner.set("WRONG!", WRONG_COLOR, FEEDBACK_DURATION);
        audio_cmds.write(AudioCmd::PlayOneShot {
            id: INCORRECT_CHIME.into(),
            handle: oneshots.issue(),
        });
    }
}

/// Tick the deferred-unlock slot. On expiry the target becomes interactive:
/// sprite and sound button both read the same roster record, so one unlock
/// reaches them all.
pub fn pending_unlock_system(
    time: Res<WorldTime>,
    mut pending: ResMut<PendingUnlock>,
    mut roster: ResMut<Roster>,
) {
    let PendingUnlock::Pending { target, remaining } = *pending else {
        return;
    };
    let remaining = remaining - time.delta;
    if remaining <= 0.0 {
        roster.unlock(target);
        if let Some(record) = roster.get(target) {
            info!("'{}' unlocked", record.name);
        }
        *pending = PendingUnlock::Idle;
    } else {
        *pending = PendingUnlock::Pending { target, remaining };
    }
}
