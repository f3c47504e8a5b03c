//! Phase Controller: one game's lifecycle and the entry points that mutate it.
//!
//! Lobby → Night → Day → Night … with Reveal (frozen) and Ended reachable by
//! host request. Every transition is synchronous and re-requesting the phase
//! the game is already in is a no-op.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::actions::Action;
use crate::domain::pairings::PairingTable;
use crate::domain::players::PlayerRegistry;
use crate::domain::resolution::{Effect, NightReport, NightResolver};
use crate::domain::roles::{RoleCatalog, RoleId};
use crate::domain::selection::SelectionState;
use crate::domain::state::{ChatId, GameId, Phase, Position};
use crate::domain::town::{Town, TownRecord};
use crate::domain::wakes::{build_wakes, Wake};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone)]
pub struct Game {
    pub id: GameId,
    pub host: ChatId,
    phase: Phase,
    /// Nights started so far; the first night is 1.
    night: u32,
    /// When false, a toggle that fills the selection commits it immediately.
    confirmation_required: bool,
    catalog: Arc<RoleCatalog>,
    players: PlayerRegistry,
    pairings: PairingTable,
    town: Town,
}

impl Game {
    pub fn new(id: GameId, host: ChatId, catalog: Arc<RoleCatalog>) -> Self {
        Self {
            id,
            host,
            phase: Phase::Lobby,
            night: 0,
            confirmation_required: true,
            catalog,
            players: PlayerRegistry::new(),
            pairings: PairingTable::new(),
            town: Town::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn night(&self) -> u32 {
        self.night
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    pub fn pairings(&self) -> &PairingTable {
        &self.pairings
    }

    pub fn pairings_mut(&mut self) -> Result<&mut PairingTable, DomainError> {
        self.ensure_mutable("change pairings")?;
        Ok(&mut self.pairings)
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn confirmation_required(&self) -> bool {
        self.confirmation_required
    }

    pub fn set_confirmation_required(&mut self, required: bool) {
        self.confirmation_required = required;
    }

    fn ensure_mutable(&self, what: &str) -> Result<(), DomainError> {
        if self.phase.is_frozen() {
            return Err(DomainError::invalid_transition(format!(
                "cannot {what} while the game is {}",
                self.phase
            )));
        }
        Ok(())
    }

    fn ensure_night(&self, what: &str) -> Result<(), DomainError> {
        self.ensure_mutable(what)?;
        if self.phase != Phase::Night {
            return Err(DomainError::validation(
                ValidationKind::NoActiveWake,
                format!("no night in progress (phase is {})", self.phase),
            ));
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Seating and host overrides
    // ---------------------------------------------------------------------

    pub fn seat_player(&mut self, name: impl Into<String>) -> Result<Position, DomainError> {
        if self.phase != Phase::Lobby {
            return Err(DomainError::invalid_transition(
                "players can only be seated in the lobby",
            ));
        }
        Ok(self.players.seat(name))
    }

    pub fn assign_role(&mut self, position: Position, role: &str) -> Result<(), DomainError> {
        self.ensure_mutable("assign roles")?;
        self.catalog.require_role(role)?;
        let previous = self.players.assign_role(position, role)?;
        debug!(game_id = self.id, position, role, ?previous, "Role assigned");
        Ok(())
    }

    pub fn set_liveness(&mut self, position: Position, alive: bool) -> Result<(), DomainError> {
        self.ensure_mutable("change liveness")?;
        if self.players.set_alive(position, alive)? {
            info!(game_id = self.id, position, alive, "Liveness changed");
        }
        Ok(())
    }

    /// Remove a player from play; the seat stays, dead, and loses its pairing.
    pub fn kick(&mut self, position: Position) -> Result<(), DomainError> {
        self.ensure_mutable("kick players")?;
        self.players.kick(position)?;
        self.pairings.unbind(position);
        info!(game_id = self.id, position, "Player kicked");
        Ok(())
    }

    pub fn unkick(&mut self, position: Position) -> Result<(), DomainError> {
        self.ensure_mutable("restore players")?;
        self.players.unkick(position)
    }

    // ---------------------------------------------------------------------
    // Phase transitions
    // ---------------------------------------------------------------------

    /// Lobby/Day → Night, rebuilding the wake list from the current registry.
    pub fn start_night(&mut self) -> Result<Phase, DomainError> {
        match self.phase {
            Phase::Night => return Ok(Phase::Night),
            Phase::Lobby | Phase::Day => {}
            Phase::Reveal | Phase::Ended => {
                return Err(DomainError::invalid_transition(format!(
                    "cannot start a night from {}",
                    self.phase
                )))
            }
        }

        let wakes = build_wakes(&self.players, &self.catalog);
        self.night += 1;
        self.town = Town::for_night(wakes, &self.players);
        self.phase = Phase::Night;
        info!(
            game_id = self.id,
            night = self.night,
            wakes = self.town.scheduler().len(),
            complete = self.town.is_complete(),
            "Night started"
        );
        Ok(Phase::Night)
    }

    /// Night → Day once every wake has been handled.
    ///
    /// Effects from `resolver` are validated before anything is written, so a
    /// bad resolution leaves the night exactly as it was. Already in Day, this
    /// is a no-op returning an empty report.
    pub fn end_night_to_day(
        &mut self,
        resolver: &mut dyn NightResolver,
    ) -> Result<NightReport, DomainError> {
        match self.phase {
            Phase::Day => {
                return Ok(NightReport {
                    night: self.night,
                    actions: Vec::new(),
                    effects: Vec::new(),
                })
            }
            Phase::Night => {}
            _ => {
                return Err(DomainError::invalid_transition(format!(
                    "cannot go to day from {}",
                    self.phase
                )))
            }
        }

        if let Some(wake) = self.town.current_wake() {
            return Err(DomainError::invalid_transition(format!(
                "wake '{}' still pending; confirm or skip it first",
                wake.wake_type
            )));
        }

        let effects = resolver.resolve(self.night, self.town.actions(), &self.players);
        self.validate_effects(&effects)?;
        for effect in &effects {
            self.apply_effect(effect)?;
        }

        let actions = self.town.drain();
        self.phase = Phase::Day;
        info!(
            game_id = self.id,
            night = self.night,
            actions = actions.len(),
            effects = effects.len(),
            "Day started"
        );
        Ok(NightReport {
            night: self.night,
            actions,
            effects,
        })
    }

    /// Idempotent "go to day".
    pub fn start_day(&mut self, resolver: &mut dyn NightResolver) -> Result<Phase, DomainError> {
        self.end_night_to_day(resolver)?;
        Ok(self.phase)
    }

    pub fn force_reveal(&mut self) -> Result<Phase, DomainError> {
        match self.phase {
            Phase::Reveal => Ok(Phase::Reveal),
            Phase::Night | Phase::Day => {
                self.phase = Phase::Reveal;
                info!(game_id = self.id, night = self.night, "Game revealed");
                Ok(Phase::Reveal)
            }
            Phase::Lobby | Phase::Ended => Err(DomainError::invalid_transition(format!(
                "cannot reveal from {}",
                self.phase
            ))),
        }
    }

    pub fn terminate(&mut self) -> Phase {
        if self.phase != Phase::Ended {
            info!(game_id = self.id, from = %self.phase, "Game terminated");
            self.phase = Phase::Ended;
        }
        Phase::Ended
    }

    fn validate_effects(&self, effects: &[Effect]) -> Result<(), DomainError> {
        for effect in effects {
            match effect {
                Effect::SetLiveness { position, .. } => {
                    self.players.require(*position)?;
                }
                Effect::AssignRole { position, role } => {
                    self.players.require(*position)?;
                    self.catalog.require_role(role)?;
                }
            }
        }
        Ok(())
    }

    fn apply_effect(&mut self, effect: &Effect) -> Result<(), DomainError> {
        match effect {
            Effect::SetLiveness { position, alive } => {
                self.players.set_alive(*position, *alive)?;
            }
            Effect::AssignRole { position, role } => {
                self.players.assign_role(*position, role.clone())?;
            }
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Night actions
    // ---------------------------------------------------------------------

    /// Active wake, or `None` when the night is complete (or not night).
    pub fn current_wake(&self) -> Option<&Wake> {
        if self.phase != Phase::Night {
            return None;
        }
        self.town.current_wake()
    }

    pub fn toggle_selection(&mut self, position: Position) -> Result<SelectionState, DomainError> {
        self.ensure_night("select targets")?;
        let mut state = self.town.toggle(&self.players, position)?;
        debug!(game_id = self.id, position, selected = ?state.selected, "Selection toggled");

        if !self.confirmation_required && state.added && state.at_limit {
            let action = self.confirm_selection()?;
            state.committed = Some(action);
        }
        Ok(state)
    }

    pub fn cancel_selection(&mut self) -> Result<(), DomainError> {
        self.ensure_night("cancel the selection")?;
        self.town.cancel_selection()
    }

    pub fn confirm_selection(&mut self) -> Result<Action, DomainError> {
        self.ensure_night("confirm the selection")?;
        let action = self.town.confirm(&self.players)?;
        info!(
            game_id = self.id,
            night = self.night,
            seq = action.seq,
            wake = %action.wake_type,
            targets = ?action.targets,
            "Action committed"
        );
        Ok(action)
    }

    pub fn skip_current_wake(&mut self) -> Result<(), DomainError> {
        self.ensure_night("skip a wake")?;
        let wake = self.town.current_wake().map(|w| w.wake_type.clone());
        self.town.skip(&self.players)?;
        info!(game_id = self.id, night = self.night, ?wake, "Wake skipped");
        Ok(())
    }

    pub fn cancel_last_action(&mut self) -> Result<Action, DomainError> {
        self.ensure_night("cancel an action")?;
        let action = self.town.cancel_last(&self.players)?;
        info!(
            game_id = self.id,
            seq = action.seq,
            wake = %action.wake_type,
            "Action cancelled"
        );
        Ok(action)
    }

    // ---------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------

    pub fn town_record(&self) -> TownRecord {
        self.town.clone()
    }

    pub fn restore_town(&mut self, record: TownRecord) -> Result<(), DomainError> {
        record.validate(&self.players)?;
        self.town = record;
        Ok(())
    }

    /// Rebuild the night engine from the registry after the record was lost.
    ///
    /// The wake list restarts from the top; the queue and selection are gone.
    pub fn recover_town(&mut self) {
        self.town = if self.phase == Phase::Night {
            Town::for_night(build_wakes(&self.players, &self.catalog), &self.players)
        } else {
            Town::default()
        };
    }

    pub fn role_of(&self, position: Position) -> Option<&RoleId> {
        self.players.get(position).and_then(|p| p.role.as_ref())
    }
}
