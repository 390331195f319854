//! Soundboard systems: preview toggling and device-state reconcile.
//!
//! The soundboard is independent of the guessing game: toggling a preview
//! never touches the roster or the progression machinery.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::soundbutton::SoundButton;
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::events::click::PlayToggleClicked;
use crate::resources::roster::Roster;

/// Start or stop a button's preview. If its audio is currently rendering,
/// stop it and mark paused; otherwise start it and mark playing.
pub fn play_toggle_observer(
    trigger: On<PlayToggleClicked>,
    roster: Res<Roster>,
    mut buttons: Query<&mut SoundButton>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let Ok(mut button) = buttons.get_mut(trigger.event().button) else {
        return;
    };
    let Some(record) = roster.get(button.animal) else {
        return;
    };
    if !record.unlocked() {
        return;
    }
    if button.playing {
        audio_cmds.write(AudioCmd::StopPreview {
            id: record.name.clone(),
        });
        button.playing = false;
    } else {
        audio_cmds.write(AudioCmd::PlayPreview {
            id: record.name.clone(),
        });
        button.playing = true;
    }
}

/// Reset the `playing` flag of buttons whose preview the device reports
/// stopped or finished. Runs once per frame after the audio messages have
/// been pumped.
pub fn reconcile_soundboard(
    roster: Res<Roster>,
    mut buttons: Query<&mut SoundButton>,
    mut messages: MessageReader<AudioMessage>,
) {
    for message in messages.read() {
        let id = match message {
            AudioMessage::PreviewFinished { id } | AudioMessage::PreviewStopped { id } => id,
            _ => continue,
        };
        let Some(animal) = roster.index_of(id) else {
            continue;
        };
        for mut button in buttons.iter_mut() {
            if button.animal == animal && button.playing {
                debug!("preview of '{id}' ended; resetting its button");
                button.playing = false;
            }
        }
    }
}
