//! Game systems.
//!
//! One frame runs: pointer input → picking (which triggers the click
//! observers) → progression timers and animations → audio bridge pumping →
//! soundboard reconcile and one-shot reclaim → render.
//!
//! Submodules overview
//! - [`audio`] – the audio thread plus the systems bridging it to the world
//! - [`feedback`] – verdict banner countdown
//! - [`input`] – poll the mouse into [`crate::resources::input::PointerState`]
//! - [`picking`] – hit-test click edges into game events
//! - [`pop`] – advance pop animations into sprite scales
//! - [`progression`] – click judging and the deferred unlock
//! - [`render`] – draw the whole scene with Raylib
//! - [`soundboard`] – preview toggling and play-flag reconcile
//! - [`time`] – update simulation time and delta

pub mod audio;
pub mod feedback;
pub mod input;
pub mod picking;
pub mod pop;
pub mod progression;
pub mod render;
pub mod soundboard;
pub mod time;
