//! Event and message types exchanged across systems.
//!
//! Submodules:
//! - [`audio`] – commands to and messages from the audio thread
//! - [`click`] – pointer-picking events consumed by observers

pub mod audio;
pub mod click;
