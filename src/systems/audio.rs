//! Audio system backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that
//! bridge it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio
//!   device, and processes [`AudioCmd`] values, emitting [`AudioMessage`]
//!   responses.
//! - [`forward_audio_cmds`] pushes commands written to the ECS message
//!   queue over the channel to the thread.
//! - [`poll_audio_messages`] non-blockingly drains the thread's responses
//!   into the ECS message queue each frame.
//! - [`reclaim_oneshots`] releases one-shot handles the device finished.
//!
//! Keeping every Raylib audio call on one thread sidesteps the device's
//! thread-affinity; the game thread only ever touches channels.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};
use raylib::core::audio::RaylibAudio;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use crate::resources::oneshots::OneShots;
use crate::wav;

/// Advance the ECS message queue for [`AudioCmd`] so this frame's writes
/// become readable. Run before [`forward_audio_cmds`].
pub fn update_audio_cmds(mut messages: ResMut<Messages<AudioCmd>>) {
    messages.update();
}

/// Forward queued [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Send errors only happen during shutdown; nothing to do about them.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Drain pending responses from the audio thread into the ECS queue.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`]. Run after
/// [`poll_audio_messages`] so same-frame readers observe the drain.
pub fn update_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Release the handles of one-shots the device finished playing.
pub fn reclaim_oneshots(mut oneshots: ResMut<OneShots>, mut messages: MessageReader<AudioMessage>) {
    for message in messages.read() {
        if let AudioMessage::OneShotFinished { handle } = message {
            oneshots.release(*handle);
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// The thread owns the audio device and every loaded handle:
/// - `musics`: looping streams, pumped each iteration and restarted when
///   they run out.
/// - `fx`: the fire-and-forget bank. Each play is tagged with a caller
///   handle; when the device stops rendering the sound, an
///   [`AudioMessage::OneShotFinished`] releases it.
/// - `previews`: a second instance of each animal call for the soundboard,
///   so a preview and a guess one-shot of the same animal don't fight over
///   one handle.
///
/// Effects must be plain PCM WAV; the [`wav`] probe rejects anything else
/// before the file reaches the device. The loop blocks until
/// [`AudioCmd::Shutdown`] arrives, then unloads everything and exits.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            panic!("Failed to initialize audio device: {}", e);
        }
    };

    info!(
        "audio thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut musics = FxHashMap::default();
    let mut music_playing: FxHashSet<String> = FxHashSet::default();
    let mut fx = FxHashMap::default();
    let mut previews = FxHashMap::default();
    let mut oneshots_live: Vec<(u64, String)> = Vec::new();
    let mut previews_live: FxHashSet<String> = FxHashSet::default();
    let mut fx_volume: f32 = 1.0;

    'run: loop {
        // 1) Drain commands
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        debug!("[audio] music loaded id='{id}' path='{path}'");
                        musics.insert(id.clone(), music);
                        let _ = tx_msg.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        warn!("[audio] music load failed id='{id}' path='{path}': {e}");
                        let _ = tx_msg.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayMusic { id, volume } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("[audio] music start id='{id}' volume={volume}");
                        music.set_volume(volume);
                        music.seek_stream(0.0);
                        music.play_stream();
                        music_playing.insert(id);
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("[audio] music stop id='{id}'");
                        music.stop_stream();
                        music_playing.remove(&id);
                    }
                }
                AudioCmd::LoadFx { id, path } => match wav::probe(&path) {
                    Ok(spec) => match audio.new_sound(&path) {
                        Ok(sound) => {
                            debug!(
                                "[audio] fx loaded id='{id}' ({} ch, {} Hz, {}-bit)",
                                spec.channels, spec.sample_rate, spec.bits_per_sample
                            );
                            sound.set_volume(fx_volume);
                            fx.insert(id.clone(), sound);
                            let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                        }
                        Err(e) => {
                            warn!("[audio] fx load failed id='{id}' path='{path}': {e}");
                            let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                                id,
                                error: e.to_string(),
                            });
                        }
                    },
                    Err(e) => {
                        warn!("[audio] fx rejected id='{id}' path='{path}': {e}");
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::LoadPreview { id, path } => match wav::probe(&path) {
                    Ok(_) => match audio.new_sound(&path) {
                        Ok(sound) => {
                            debug!("[audio] preview loaded id='{id}'");
                            sound.set_volume(fx_volume);
                            previews.insert(id.clone(), sound);
                            let _ = tx_msg.send(AudioMessage::PreviewLoaded { id });
                        }
                        Err(e) => {
                            warn!("[audio] preview load failed id='{id}' path='{path}': {e}");
                            let _ = tx_msg.send(AudioMessage::PreviewLoadFailed {
                                id,
                                error: e.to_string(),
                            });
                        }
                    },
                    Err(e) => {
                        warn!("[audio] preview rejected id='{id}' path='{path}': {e}");
                        let _ = tx_msg.send(AudioMessage::PreviewLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayOneShot { id, handle } => {
                    if let Some(sound) = fx.get(&id) {
                        debug!("[audio] one-shot id='{id}' handle={handle}");
                        sound.play();
                        oneshots_live.push((handle, id));
                    } else {
                        warn!("[audio] one-shot '{id}' not loaded; releasing handle {handle}");
                        let _ = tx_msg.send(AudioMessage::OneShotFinished { handle });
                    }
                }
                AudioCmd::PlayPreview { id } => {
                    if let Some(sound) = previews.get(&id) {
                        debug!("[audio] preview start id='{id}'");
                        sound.play();
                        previews_live.insert(id.clone());
                        let _ = tx_msg.send(AudioMessage::PreviewStarted { id });
                    }
                }
                AudioCmd::StopPreview { id } => {
                    if let Some(sound) = previews.get(&id) {
                        debug!("[audio] preview stop id='{id}'");
                        sound.stop();
                        previews_live.remove(&id);
                        let _ = tx_msg.send(AudioMessage::PreviewStopped { id });
                    }
                }
                AudioCmd::FxVolume { volume } => {
                    fx_volume = volume;
                    for sound in fx.values() {
                        sound.set_volume(volume);
                    }
                    for sound in previews.values() {
                        sound.set_volume(volume);
                    }
                }
                AudioCmd::Shutdown => {
                    info!("[audio] shutdown requested");
                    musics.clear();
                    music_playing.clear();
                    fx.clear();
                    previews.clear();
                    oneshots_live.clear();
                    previews_live.clear();
                    break 'run;
                }
            }
        }

        // 2) Pump playing streams; everything here loops, so a stream that
        //    ran out restarts from the top.
        for id in music_playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else {
                    music.seek_stream(0.0);
                    music.play_stream();
                }
            }
        }

        // 3) One-shot end detection: report each finished handle exactly once.
        oneshots_live.retain(|(handle, id)| {
            let still_playing = fx.get(id).map(|sound| sound.is_playing()).unwrap_or(false);
            if !still_playing {
                debug!("[audio] one-shot finished handle={handle}");
                let _ = tx_msg.send(AudioMessage::OneShotFinished { handle: *handle });
            }
            still_playing
        });

        // 4) Preview end detection for the soundboard reconcile.
        previews_live.retain(|id| {
            let still_playing = previews
                .get(id)
                .map(|sound| sound.is_playing())
                .unwrap_or(false);
            if !still_playing {
                debug!("[audio] preview finished id='{id}'");
                let _ = tx_msg.send(AudioMessage::PreviewFinished { id: id.clone() });
            }
            still_playing
        });

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    info!(
        "audio thread exiting (id={:?})",
        std::thread::current().id()
    );

    // Handle maps drop before `audio`, satisfying the device lifetime.
}
