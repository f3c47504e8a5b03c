//! Player Registry: seats, liveness and role assignment for one game.
//!
//! Positions are handed out in seating order and are never reused. A kicked
//! player keeps its position (marked dead) so committed actions that
//! reference it stay meaningful.

use serde::{Deserialize, Serialize};

use crate::domain::roles::RoleId;
use crate::domain::state::Position;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub name: String,
    pub alive: bool,
    pub role: Option<RoleId>,
    #[serde(default)]
    pub kicked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegistry {
    /// Index `i` holds position `i + 1`.
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat a new player at the next free position.
    pub fn seat(&mut self, name: impl Into<String>) -> Position {
        let position = (self.players.len() + 1) as Position;
        self.players.push(Player {
            position,
            name: name.into(),
            alive: true,
            role: None,
            kicked: false,
        });
        position
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn all(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, position: Position) -> Option<&Player> {
        (position as usize)
            .checked_sub(1)
            .and_then(|idx| self.players.get(idx))
    }

    fn get_mut(&mut self, position: Position) -> Option<&mut Player> {
        (position as usize)
            .checked_sub(1)
            .and_then(|idx| self.players.get_mut(idx))
    }

    pub fn require(&self, position: Position) -> Result<&Player, DomainError> {
        self.get(position)
            .ok_or_else(|| DomainError::unknown_position(position))
    }

    /// Lookup that also rejects dead seats; used for target validation.
    pub fn require_living(&self, position: Position) -> Result<&Player, DomainError> {
        self.get(position)
            .filter(|p| p.alive)
            .ok_or_else(|| DomainError::unknown_position(position))
    }

    pub fn is_alive(&self, position: Position) -> bool {
        self.get(position).is_some_and(|p| p.alive)
    }

    pub fn living(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.alive)
    }

    /// `(alive, total)` for status lines.
    pub fn alive_summary(&self) -> (usize, usize) {
        (self.living().count(), self.players.len())
    }

    /// Returns whether liveness actually changed.
    pub fn set_alive(&mut self, position: Position, alive: bool) -> Result<bool, DomainError> {
        let player = self
            .get_mut(position)
            .ok_or_else(|| DomainError::unknown_position(position))?;
        let changed = player.alive != alive;
        player.alive = alive;
        Ok(changed)
    }

    /// Returns the previously held role.
    pub fn assign_role(
        &mut self,
        position: Position,
        role: impl Into<RoleId>,
    ) -> Result<Option<RoleId>, DomainError> {
        let player = self
            .get_mut(position)
            .ok_or_else(|| DomainError::unknown_position(position))?;
        Ok(player.role.replace(role.into()))
    }

    pub fn kick(&mut self, position: Position) -> Result<(), DomainError> {
        let player = self
            .get_mut(position)
            .ok_or_else(|| DomainError::unknown_position(position))?;
        player.kicked = true;
        player.alive = false;
        Ok(())
    }

    /// Lifts a kick. Liveness is left to the host.
    pub fn unkick(&mut self, position: Position) -> Result<(), DomainError> {
        let player = self
            .get_mut(position)
            .ok_or_else(|| DomainError::unknown_position(position))?;
        player.kicked = false;
        Ok(())
    }

    pub fn kicked(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.kicked)
    }
}
