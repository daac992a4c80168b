//! In-memory player roster with last-in-first-out ordering.
//!
//! Records live in a single `Vec` whose end is the top. Push and pop work on
//! that end; lookups by id walk from the top down, so the first match is the
//! most recently inserted record with that id. Update and delete touch that
//! record in place and leave every other record where it was.

use crate::error::RosterError;
use crate::player::{PlayerRecord, PlayerUpdate};

#[derive(Debug, Default)]
pub struct RosterManager {
    players: Vec<PlayerRecord>,
}

impl RosterManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster by pushing `seed` in order, so the last entry ends up on top
    pub fn from_seed(seed: &[PlayerRecord]) -> Result<Self, RosterError> {
        let mut manager = Self::new();
        for record in seed {
            manager.insert_top(record.clone())?;
        }
        Ok(manager)
    }

    /// Push a record onto the top. Rejects an id that is already present.
    pub fn insert_top(&mut self, record: PlayerRecord) -> Result<(), RosterError> {
        if self.find_by_id(record.id).is_some() {
            return Err(RosterError::DuplicateIdentifier(record.id));
        }
        self.players.push(record);
        Ok(())
    }

    /// Remove and return the most recently inserted record
    pub fn remove_top(&mut self) -> Option<PlayerRecord> {
        self.players.pop()
    }

    pub fn find_by_id(&self, id: i32) -> Option<&PlayerRecord> {
        self.players.iter().rev().find(|p| p.id == id)
    }

    /// Replace the mutable fields of the topmost record with `id`.
    /// Returns false and changes nothing when no record matches.
    pub fn update_by_id(&mut self, id: i32, update: PlayerUpdate) -> bool {
        match self.position_from_top(id) {
            Some(idx) => {
                self.players[idx].apply(update);
                true
            }
            None => false,
        }
    }

    /// Remove the topmost record with `id`, keeping the others in order
    pub fn delete_by_id(&mut self, id: i32) -> bool {
        match self.position_from_top(id) {
            Some(idx) => {
                self.players.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Snapshot of all records, most recently inserted first
    pub fn list_top_to_bottom(&self) -> Vec<PlayerRecord> {
        self.players.iter().rev().cloned().collect()
    }

    fn position_from_top(&self, id: i32) -> Option<usize> {
        self.players.iter().rposition(|p| p.id == id)
    }
}
