//! Seating, pairings, host overrides and settings.

use tracing::info;

use super::mutation::Automation;
use super::GameFlowMutationResult;
use crate::ai::by_name;
use crate::config::host::HostOption;
use crate::domain::day_view::DayView;
use crate::domain::pairings::{ConnectionId, SeatActor};
use crate::domain::state::{ChatId, GameId, Position};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::errors::ErrorCode;
use crate::services::game_flow::GameFlowService;

impl GameFlowService {
    pub async fn seat_player(
        &self,
        game_id: GameId,
        name: impl Into<String>,
    ) -> Result<GameFlowMutationResult<Position>, AppError> {
        let name = name.into();
        self.run_mutation(game_id, Automation::Never, |_, entry| {
            Ok(entry.game.seat_player(name)?)
        })
        .await
    }

    pub async fn bind_human(
        &self,
        game_id: GameId,
        position: Position,
        chat_id: ChatId,
    ) -> Result<GameFlowMutationResult<ConnectionId>, AppError> {
        self.bind(game_id, position, SeatActor::Human { chat_id }).await
    }

    /// Pair a seat with a registered stand-in profile.
    pub async fn bind_automated(
        &self,
        game_id: GameId,
        position: Position,
        profile: &str,
    ) -> Result<GameFlowMutationResult<ConnectionId>, AppError> {
        let factory = by_name(profile).ok_or_else(|| {
            AppError::not_found(ErrorCode::NotFound, format!("stand-in profile '{profile}'"))
        })?;
        let actor = SeatActor::Automated {
            profile: factory.name.to_string(),
        };
        self.bind(game_id, position, actor).await
    }

    async fn bind(
        &self,
        game_id: GameId,
        position: Position,
        actor: SeatActor,
    ) -> Result<GameFlowMutationResult<ConnectionId>, AppError> {
        self.run_mutation(game_id, Automation::OnWakeChange, |_, entry| {
            entry.game.players().require(position)?;
            let id = entry.game.pairings_mut()?.bind(position, actor)?;
            info!(game_id, position, connection_id = id, "Seat paired");
            Ok(id)
        })
        .await
    }

    pub async fn unbind(
        &self,
        game_id: GameId,
        position: Position,
    ) -> Result<GameFlowMutationResult<()>, AppError> {
        self.run_mutation(game_id, Automation::Never, |_, entry| {
            entry.game.pairings_mut()?.unbind(position).ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Connection,
                    format!("no connection at position {position}"),
                )
            })?;
            Ok(())
        })
        .await
    }

    /// A player confirms they have seen their role.
    pub async fn acknowledge_role(
        &self,
        game_id: GameId,
        chat_id: ChatId,
    ) -> Result<GameFlowMutationResult<Position>, AppError> {
        self.run_mutation(game_id, Automation::Never, |_, entry| {
            let position = entry
                .game
                .pairings()
                .by_chat(chat_id)
                .map(|c| c.position)
                .ok_or_else(|| AppError::forbidden(format!("chat {chat_id} is not seated")))?;
            entry.game.pairings_mut()?.mark_notified(position)?;
            Ok(position)
        })
        .await
    }

    /// Host flips the acknowledgement of an automated seat.
    pub async fn toggle_notified(
        &self,
        game_id: GameId,
        position: Position,
    ) -> Result<GameFlowMutationResult<bool>, AppError> {
        self.run_mutation(game_id, Automation::Never, |_, entry| {
            if !entry.game.pairings().is_automated(position) {
                return Err(AppError::forbidden(
                    "only automated seats are acknowledged by the host",
                ));
            }
            Ok(entry.game.pairings_mut()?.toggle_notified(position)?)
        })
        .await
    }

    pub async fn set_liveness(
        &self,
        game_id: GameId,
        position: Position,
        alive: bool,
    ) -> Result<GameFlowMutationResult<()>, AppError> {
        self.run_mutation(game_id, Automation::OnWakeChange, |_, entry| {
            Ok(entry.game.set_liveness(position, alive)?)
        })
        .await
    }

    pub async fn assign_role(
        &self,
        game_id: GameId,
        position: Position,
        role: &str,
    ) -> Result<GameFlowMutationResult<()>, AppError> {
        self.run_mutation(game_id, Automation::Never, |_, entry| {
            Ok(entry.game.assign_role(position, role)?)
        })
        .await
    }

    pub async fn kick(
        &self,
        game_id: GameId,
        position: Position,
    ) -> Result<GameFlowMutationResult<()>, AppError> {
        self.run_mutation(game_id, Automation::OnWakeChange, |_, entry| {
            Ok(entry.game.kick(position)?)
        })
        .await
    }

    pub async fn unkick(
        &self,
        game_id: GameId,
        position: Position,
    ) -> Result<GameFlowMutationResult<()>, AppError> {
        self.run_mutation(game_id, Automation::Never, |_, entry| {
            Ok(entry.game.unkick(position)?)
        })
        .await
    }

    /// Flip a host option; returns its new value.
    pub async fn toggle_setting(
        &self,
        game_id: GameId,
        option: HostOption,
    ) -> Result<GameFlowMutationResult<bool>, AppError> {
        let automation = if option == HostOption::AutoPlayBots {
            Automation::Always
        } else {
            Automation::Never
        };
        self.run_mutation(game_id, automation, |_, entry| {
            let value = entry.settings.toggle(option);
            entry.apply_settings();
            info!(game_id, ?option, value, "Host setting toggled");
            Ok(value)
        })
        .await
    }

    pub async fn cycle_day_view(
        &self,
        game_id: GameId,
    ) -> Result<GameFlowMutationResult<DayView>, AppError> {
        self.run_mutation(game_id, Automation::Never, |_, entry| {
            Ok(entry.settings.cycle_day_view())
        })
        .await
    }

    /// Seed automated seats so their choices repeat across runs.
    pub fn seed_automation(&self, game_id: GameId, seed: u64) -> Result<(), AppError> {
        self.repo.with_game(game_id, |entry| {
            entry.automation_seed = Some(seed);
            Ok(())
        })
    }
}
