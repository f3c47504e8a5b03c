//! Pairing Table: which physical actor occupies each seat.
//!
//! Pairings are independent of role assignment. Canonical order is by
//! position; any display reordering happens in the presentation layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::state::{ChatId, Position};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

pub type ConnectionId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeatActor {
    /// A human chat session.
    Human { chat_id: ChatId },
    /// An automated stand-in; `profile` names an entry in the AI registry.
    Automated { profile: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub position: Position,
    pub actor: SeatActor,
    /// Actor acknowledged its role reveal.
    pub notified: bool,
}

impl Connection {
    pub fn is_automated(&self) -> bool {
        matches!(self.actor, SeatActor::Automated { .. })
    }

    pub fn chat_id(&self) -> Option<ChatId> {
        match self.actor {
            SeatActor::Human { chat_id } => Some(chat_id),
            SeatActor::Automated { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingTable {
    connections: BTreeMap<Position, Connection>,
    next_id: ConnectionId,
}

impl PairingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(
        &mut self,
        position: Position,
        actor: SeatActor,
    ) -> Result<ConnectionId, DomainError> {
        if self.connections.contains_key(&position) {
            return Err(DomainError::conflict(
                ConflictKind::SeatTaken,
                format!("position {position} is already paired"),
            ));
        }
        if let SeatActor::Human { chat_id } = &actor {
            if let Some(other) = self.by_chat(*chat_id) {
                return Err(DomainError::conflict(
                    ConflictKind::SeatTaken,
                    format!("chat {chat_id} already holds position {}", other.position),
                ));
            }
        }
        self.next_id += 1;
        let id = self.next_id;
        self.connections.insert(
            position,
            Connection {
                id,
                position,
                actor,
                notified: false,
            },
        );
        Ok(id)
    }

    pub fn unbind(&mut self, position: Position) -> Option<Connection> {
        self.connections.remove(&position)
    }

    pub fn get(&self, position: Position) -> Option<&Connection> {
        self.connections.get(&position)
    }

    pub fn by_id(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.values().find(|c| c.id == id)
    }

    pub fn by_chat(&self, chat_id: ChatId) -> Option<&Connection> {
        self.connections
            .values()
            .find(|c| c.chat_id() == Some(chat_id))
    }

    pub fn is_automated(&self, position: Position) -> bool {
        self.get(position).is_some_and(Connection::is_automated)
    }

    pub fn mark_notified(&mut self, position: Position) -> Result<(), DomainError> {
        self.set_notified(position, true)
    }

    pub fn set_notified(&mut self, position: Position, notified: bool) -> Result<(), DomainError> {
        let conn = self.connections.get_mut(&position).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Connection,
                format!("no connection at position {position}"),
            )
        })?;
        conn.notified = notified;
        Ok(())
    }

    /// Flip the acknowledgement; the host does this for automated seats.
    pub fn toggle_notified(&mut self, position: Position) -> Result<bool, DomainError> {
        let next = !self.is_notified(position);
        self.set_notified(position, next)?;
        Ok(next)
    }

    pub fn is_notified(&self, position: Position) -> bool {
        self.get(position).is_some_and(|c| c.notified)
    }

    /// Number of connections that acknowledged their role.
    pub fn acknowledged(&self) -> usize {
        self.connections.values().filter(|c| c.notified).count()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Paired positions in canonical (ascending) order.
    pub fn positions(&self) -> Vec<Position> {
        self.connections.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }
}
