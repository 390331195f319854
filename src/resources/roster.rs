//! The animal roster: the ordered catalog driving unlock progression.
//!
//! The roster is the authoritative game state. Its `Vec` order IS the unlock
//! order: the first record starts unlocked, every later one becomes
//! interactive only after its predecessor has been identified. Lookups go
//! through [`AnimalId`] indices rather than name strings, so the
//! expected-animal scan is a plain ordered walk over a fixed-size slice.
//!
//! Catalog contents are data, not code: [`RosterDef`] deserializes
//! `assets/animals.json` and [`Roster::from_defs`] turns it into live
//! records at setup.

use bevy_ecs::prelude::Resource;
use serde::Deserialize;

/// Index of an animal in the unlock order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimalId(pub usize);

/// Whether an animal (sprite and sound button alike) can be interacted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LockState {
    #[default]
    Locked,
    Unlocked,
}

/// One animal as described by the catalog file.
///
/// `x`/`y` are the sprite center in window pixels; `texture` and `sound`
/// are file names relative to the assets directory.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimalDef {
    pub name: String,
    pub display_name: String,
    pub texture: String,
    pub sound: String,
    pub x: f32,
    pub y: f32,
}

/// The catalog file: entry order is the unlock order.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterDef {
    pub animals: Vec<AnimalDef>,
}

/// Mutable progression state of one animal.
#[derive(Debug, Clone)]
pub struct AnimalRecord {
    pub name: String,
    pub display_name: String,
    pub lock: LockState,
    pub found: bool,
}

impl AnimalRecord {
    pub fn unlocked(&self) -> bool {
        self.lock == LockState::Unlocked
    }
}

/// Ordered animal records. Mutated only by the progression observer and the
/// deferred-unlock tick; everything else reads.
#[derive(Resource, Debug, Clone, Default)]
pub struct Roster {
    records: Vec<AnimalRecord>,
}

impl Roster {
    /// Build live records from catalog entries. The first entry starts
    /// unlocked, the rest locked, nothing found.
    pub fn from_defs(defs: &[AnimalDef]) -> Self {
        let records = defs
            .iter()
            .enumerate()
            .map(|(index, def)| AnimalRecord {
                name: def.name.clone(),
                display_name: def.display_name.clone(),
                lock: if index == 0 {
                    LockState::Unlocked
                } else {
                    LockState::Locked
                },
                found: false,
            })
            .collect();
        Roster { records }
    }

    /// Build a roster from `(name, display_name)` pairs. Convenient for
    /// tests and hand-assembled rosters; same initial state as
    /// [`Roster::from_defs`].
    pub fn from_names(names: &[(&str, &str)]) -> Self {
        let records = names
            .iter()
            .enumerate()
            .map(|(index, (name, display_name))| AnimalRecord {
                name: name.to_string(),
                display_name: display_name.to_string(),
                lock: if index == 0 {
                    LockState::Unlocked
                } else {
                    LockState::Locked
                },
                found: false,
            })
            .collect();
        Roster { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: AnimalId) -> Option<&AnimalRecord> {
        self.records.get(id.0)
    }

    pub fn get_mut(&mut self, id: AnimalId) -> Option<&mut AnimalRecord> {
        self.records.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnimalId, &AnimalRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (AnimalId(index), record))
    }

    /// Id of the animal with the given catalog name.
    pub fn index_of(&self, name: &str) -> Option<AnimalId> {
        self.records
            .iter()
            .position(|record| record.name == name)
            .map(AnimalId)
    }

    /// The animal the player is meant to identify next: the first unlocked,
    /// not-yet-found record in order. `None` means no click can match,
    /// either because the roster is fully found or because the next animal
    /// is still locked behind a pending unlock.
    pub fn expected(&self) -> Option<AnimalId> {
        self.records
            .iter()
            .position(|record| record.unlocked() && !record.found)
            .map(AnimalId)
    }

    /// The next animal in unlock order, if any.
    pub fn successor(&self, id: AnimalId) -> Option<AnimalId> {
        let next = id.0 + 1;
        (next < self.records.len()).then_some(AnimalId(next))
    }

    pub fn unlock(&mut self, id: AnimalId) {
        if let Some(record) = self.records.get_mut(id.0) {
            record.lock = LockState::Unlocked;
        }
    }

    pub fn mark_found(&mut self, id: AnimalId) {
        if let Some(record) = self.records.get_mut(id.0) {
            record.found = true;
        }
    }

    /// True once every animal has been identified.
    pub fn is_complete(&self) -> bool {
        self.records.iter().all(|record| record.found)
    }
}
