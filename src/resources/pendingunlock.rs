//! The deferred-unlock slot.
//!
//! A correct guess does not unlock the successor immediately: it parks the
//! target here with a countdown, and
//! [`pending_unlock_system`](crate::systems::progression::pending_unlock_system)
//! performs the unlock when the countdown runs out. Exactly one slot exists.

use crate::resources::roster::AnimalId;
use bevy_ecs::prelude::Resource;
use log::warn;

/// State of the one deferred unlock.
///
/// Sequential unlocking keeps the successor locked until the slot resolves,
/// so a second `schedule` while one is in flight cannot happen in normal
/// play; if it does, the in-flight unlock wins and the new request is
/// dropped with a warning.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum PendingUnlock {
    #[default]
    Idle,
    Pending { target: AnimalId, remaining: f32 },
}

impl PendingUnlock {
    pub fn schedule(&mut self, target: AnimalId, delay: f32) {
        if let PendingUnlock::Pending {
            target: in_flight, ..
        } = self
        {
            warn!("unlock of {in_flight:?} already pending; dropping schedule of {target:?}");
            return;
        }
        *self = PendingUnlock::Pending {
            target,
            remaining: delay,
        };
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PendingUnlock::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_fills_the_slot() {
        let mut pending = PendingUnlock::default();
        assert!(pending.is_idle());
        pending.schedule(AnimalId(1), 2.0);
        assert_eq!(
            pending,
            PendingUnlock::Pending {
                target: AnimalId(1),
                remaining: 2.0
            }
        );
    }

    #[test]
    fn second_schedule_keeps_the_first() {
        let mut pending = PendingUnlock::default();
        pending.schedule(AnimalId(1), 2.0);
        pending.schedule(AnimalId(2), 2.0);
        assert_eq!(
            pending,
            PendingUnlock::Pending {
                target: AnimalId(1),
                remaining: 2.0
            }
        );
    }
}
