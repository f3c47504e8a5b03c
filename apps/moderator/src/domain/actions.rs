//! Action Queue: committed decisions for the current night, in wake order.

use serde::{Deserialize, Serialize};

use crate::domain::roles::{RoleId, WakeTypeId};
use crate::domain::state::Position;

/// One committed decision. Immutable once queued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Position in the night's queue (0-based).
    pub seq: u32,
    /// Index of the wake that produced this action.
    pub wake_index: usize,
    pub wake_type: WakeTypeId,
    pub roles: Vec<RoleId>,
    /// Living holders of the wake at commit time.
    pub actors: Vec<Position>,
    pub targets: Vec<Position>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionQueue {
    actions: Vec<Action>,
}

impl ActionQueue {
    pub fn append(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Sequence number the next appended action will carry.
    pub fn next_seq(&self) -> u32 {
        self.actions.len() as u32
    }

    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    pub fn pop_last(&mut self) -> Option<Action> {
        self.actions.pop()
    }

    /// Hand over the whole night, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
