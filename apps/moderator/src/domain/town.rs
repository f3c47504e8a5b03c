//! Town: the per-night engine state (wake order, cursor, selections, queue).
//!
//! `Town` is also the persisted record for a game. It can be rebuilt from
//! the registry if lost; only the queue and buffer are genuinely transient.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::actions::{Action, ActionQueue};
use crate::domain::players::PlayerRegistry;
use crate::domain::selection::{SelectionBuffer, SelectionState};
use crate::domain::state::Position;
use crate::domain::wakes::{NightScheduler, Wake};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Town {
    scheduler: NightScheduler,
    selection: SelectionBuffer,
    queue: ActionQueue,
}

/// Serialized form of a game's night engine.
pub type TownRecord = Town;

impl Town {
    pub fn for_night(wakes: Vec<Wake>, players: &PlayerRegistry) -> Self {
        Self {
            scheduler: NightScheduler::new(wakes, players),
            selection: SelectionBuffer::default(),
            queue: ActionQueue::default(),
        }
    }

    pub fn scheduler(&self) -> &NightScheduler {
        &self.scheduler
    }

    pub fn selection(&self) -> &SelectionBuffer {
        &self.selection
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    pub fn current_wake(&self) -> Option<&Wake> {
        self.scheduler.current()
    }

    pub fn is_complete(&self) -> bool {
        self.scheduler.is_complete()
    }

    fn require_wake(&self) -> Result<&Wake, DomainError> {
        self.scheduler.current().ok_or_else(|| {
            DomainError::validation(ValidationKind::NoActiveWake, "night is complete")
        })
    }

    pub fn selection_state(&self) -> SelectionState {
        let at_limit = self
            .current_wake()
            .map(|w| self.selection.is_full(w.choice))
            .unwrap_or(true);
        SelectionState {
            selected: self.selection.targets().to_vec(),
            at_limit,
            added: false,
            committed: None,
        }
    }

    /// Toggle a target for the active wake. Adding past the limit is ignored.
    pub fn toggle(
        &mut self,
        players: &PlayerRegistry,
        position: Position,
    ) -> Result<SelectionState, DomainError> {
        let choice = self.require_wake()?.choice;
        let present = self.selection.contains(position);
        if !present {
            players.require_living(position)?;
        }
        let changed = self.selection.toggle(position, choice);
        if !changed {
            debug!(position, choice, "Selection at limit; toggle ignored");
        }
        let mut state = self.selection_state();
        state.added = changed && !present;
        Ok(state)
    }

    /// Clear the buffer without consuming the wake.
    pub fn cancel_selection(&mut self) -> Result<(), DomainError> {
        self.require_wake()?;
        if self.selection.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::NothingToCancel,
                "no targets selected",
            ));
        }
        self.selection.take();
        Ok(())
    }

    /// Commit the buffer as an action and move to the next wake.
    pub fn confirm(&mut self, players: &PlayerRegistry) -> Result<Action, DomainError> {
        let index = self.scheduler.cursor();
        let wake = self.require_wake()?;
        if self.selection.len() != wake.choice as usize {
            return Err(DomainError::validation(
                ValidationKind::ConfirmationNotReady,
                format!(
                    "{} of {} target(s) selected",
                    self.selection.len(),
                    wake.choice
                ),
            ));
        }

        let action = Action {
            seq: self.queue.next_seq(),
            wake_index: index,
            wake_type: wake.wake_type.clone(),
            roles: wake.roles.clone(),
            actors: wake
                .holders
                .iter()
                .copied()
                .filter(|&p| players.is_alive(p))
                .collect(),
            targets: self.selection.take(),
        };
        self.queue.append(action.clone());
        self.scheduler.advance(players);
        Ok(action)
    }

    /// Pass on the active wake without committing anything.
    pub fn skip(&mut self, players: &PlayerRegistry) -> Result<(), DomainError> {
        self.require_wake()?;
        if !self.selection.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::SelectionPending,
                "cancel the current selection before skipping",
            ));
        }
        self.scheduler.advance(players);
        Ok(())
    }

    /// Undo the newest action: rewind to its wake and reload its targets.
    ///
    /// If every holder of that wake has died since, the cursor moves on to
    /// the next live wake and the buffer stays empty.
    pub fn cancel_last(&mut self, players: &PlayerRegistry) -> Result<Action, DomainError> {
        let action = self.queue.pop_last().ok_or_else(|| {
            DomainError::validation(ValidationKind::NothingToCancel, "no committed actions")
        })?;
        self.selection.take();
        if self.scheduler.rewind_to(action.wake_index, players) {
            self.selection.restore(action.targets.clone());
        }
        Ok(action)
    }

    pub fn actions(&self) -> &[Action] {
        self.queue.as_slice()
    }

    pub fn drain(&mut self) -> Vec<Action> {
        self.queue.drain()
    }

    /// Check a restored record against the registry it will run with.
    pub fn validate(&self, players: &PlayerRegistry) -> Result<(), DomainError> {
        for wake in self.scheduler.wakes() {
            for &pos in &wake.holders {
                players.require(pos)?;
            }
        }
        for &pos in self.selection.targets() {
            players.require(pos)?;
        }
        Ok(())
    }
}
