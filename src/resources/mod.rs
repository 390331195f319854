//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world: the animal roster and the
//! progression timers, the pointer snapshot, asset stores, the audio-thread
//! bridge, timing, and configuration.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `feedback` – the transient verdict banner
//! - `gameconfig` – window/audio settings loaded from INI
//! - `input` – per-frame pointer position and click edges
//! - `oneshots` – live fire-and-forget playback handles
//! - `pendingunlock` – the single deferred-unlock slot
//! - `roster` – ordered animal records and the expected-animal scan
//! - `texturestore` – loaded textures keyed by string ids
//! - `worldtime` – simulation time and delta

pub mod audio;
pub mod feedback;
pub mod gameconfig;
pub mod input;
pub mod oneshots;
pub mod pendingunlock;
pub mod roster;
pub mod texturestore;
pub mod worldtime;
