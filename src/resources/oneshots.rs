//! Live fire-and-forget playback handles.
//!
//! Every guess fires one-shot sounds (the animal's call and a verdict
//! chime). Each gets a fresh handle from this resource; the handle travels
//! with the play command to the audio thread, which reports back when the
//! device stops rendering it.
//! [`reclaim_oneshots`](crate::systems::audio::reclaim_oneshots) then
//! releases the handle here, once per frame, in no particular order.

use bevy_ecs::prelude::Resource;
use smallvec::SmallVec;

/// Issues unique playback handles and tracks the live set.
#[derive(Resource, Debug, Default)]
pub struct OneShots {
    active: SmallVec<[u64; 8]>,
    next: u64,
}

impl OneShots {
    /// Issue a fresh handle and mark it live. Handles are never reused.
    pub fn issue(&mut self) -> u64 {
        let handle = self.next;
        self.next += 1;
        self.active.push(handle);
        handle
    }

    /// Drop a handle from the live set. Unknown handles are a no-op.
    pub fn release(&mut self, handle: u64) {
        if let Some(index) = self.active.iter().position(|&h| h == handle) {
            self.active.swap_remove(index);
        }
    }

    pub fn live(&self) -> usize {
        self.active.len()
    }

    pub fn is_live(&self, handle: u64) -> bool {
        self.active.contains(&handle)
    }
}
