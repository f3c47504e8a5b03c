//! Selection Buffer: the targets picked so far for the active wake.

use serde::{Deserialize, Serialize};

use crate::domain::actions::Action;
use crate::domain::state::Position;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionBuffer {
    /// Insertion order is kept; resolvers may care which target came first.
    targets: Vec<Position>,
}

impl SelectionBuffer {
    pub fn targets(&self) -> &[Position] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.targets.contains(&position)
    }

    pub fn is_full(&self, limit: u8) -> bool {
        self.targets.len() >= limit as usize
    }

    /// Add `position` unless that would exceed `limit`.
    pub fn try_select(&mut self, position: Position, limit: u8) -> Result<(), DomainError> {
        if self.contains(position) {
            return Ok(());
        }
        if self.is_full(limit) {
            return Err(DomainError::validation(
                ValidationKind::ChoiceLimitExceeded,
                format!("wake takes at most {limit} target(s)"),
            ));
        }
        self.targets.push(position);
        Ok(())
    }

    /// Deselect if present, otherwise select. Returns whether the buffer changed.
    pub fn toggle(&mut self, position: Position, limit: u8) -> bool {
        if let Some(idx) = self.targets.iter().position(|&p| p == position) {
            self.targets.remove(idx);
            return true;
        }
        self.try_select(position, limit).is_ok()
    }

    /// Empty the buffer, handing back what was in it.
    pub fn take(&mut self) -> Vec<Position> {
        std::mem::take(&mut self.targets)
    }

    pub fn restore(&mut self, targets: Vec<Position>) {
        self.targets = targets;
    }
}

/// What the caller renders after a toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub selected: Vec<Position>,
    pub at_limit: bool,
    /// This toggle put a new target into the buffer.
    #[serde(skip)]
    pub added: bool,
    /// Set when the toggle filled the buffer and the game auto-confirmed it.
    pub committed: Option<Action>,
}
