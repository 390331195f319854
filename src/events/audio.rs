//! Commands and messages crossing the audio-thread boundary.
//!
//! The main thread never touches the audio device directly: it sends
//! [`AudioCmd`] values and reacts to [`AudioMessage`] values. Both also flow
//! through ECS message queues so observers and systems can write commands
//! and read playback state without holding the bridge.

use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    LoadMusic {
        id: String,
        path: String,
    },
    /// Start a looping music stream at the given volume.
    PlayMusic {
        id: String,
        volume: f32,
    },
    StopMusic {
        id: String,
    },
    /// Load a sound effect into the fire-and-forget bank.
    LoadFx {
        id: String,
        path: String,
    },
    /// Load an animal call into the preview bank used by the soundboard.
    LoadPreview {
        id: String,
        path: String,
    },
    /// Fire a one-shot. The handle comes from
    /// [`OneShots`](crate::resources::oneshots::OneShots) and is reported
    /// back when playback ends.
    PlayOneShot {
        id: String,
        handle: u64,
    },
    PlayPreview {
        id: String,
    },
    StopPreview {
        id: String,
    },
    /// Volume applied to every effect in both banks.
    FxVolume {
        volume: f32,
    },
    Shutdown,
}

/// Messages sent *back* from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
    PreviewLoaded { id: String },
    PreviewLoadFailed { id: String, error: String },
    /// A one-shot stopped rendering audio; its handle can be released.
    OneShotFinished { handle: u64 },
    PreviewStarted { id: String },
    PreviewStopped { id: String },
    /// A preview ran to its natural end.
    PreviewFinished { id: String },
}
