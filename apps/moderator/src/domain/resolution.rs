//! Seam to the external resolver that turns a night's actions into effects.
//!
//! Role abilities live outside the engine. At the Night → Day transition the
//! resolver sees the queue in commit order and answers with liveness and role
//! changes, which the game writes back before Day begins.

use serde::{Deserialize, Serialize};

use crate::domain::actions::Action;
use crate::domain::players::PlayerRegistry;
use crate::domain::roles::RoleId;
use crate::domain::state::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    SetLiveness { position: Position, alive: bool },
    AssignRole { position: Position, role: RoleId },
}

pub trait NightResolver: Send {
    /// Resolve `actions` (in queue order) against the current registry.
    fn resolve(
        &mut self,
        night: u32,
        actions: &[Action],
        players: &PlayerRegistry,
    ) -> Vec<Effect>;
}

/// Resolver that applies nothing; the host adjusts liveness by hand.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualResolution;

impl NightResolver for ManualResolution {
    fn resolve(
        &mut self,
        _night: u32,
        _actions: &[Action],
        _players: &PlayerRegistry,
    ) -> Vec<Effect> {
        Vec::new()
    }
}

/// Outcome of one night, returned by the Night → Day transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightReport {
    pub night: u32,
    pub actions: Vec<Action>,
    pub effects: Vec<Effect>,
}
