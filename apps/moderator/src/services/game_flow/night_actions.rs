use super::mutation::Automation;
use super::GameFlowMutationResult;
use crate::domain::actions::Action;
use crate::domain::selection::SelectionState;
use crate::domain::state::{GameId, Position};
use crate::domain::wakes::Wake;
use crate::error::AppError;
use crate::services::game_flow::GameFlowService;

impl GameFlowService {
    /// The active wake, or `None` once the night is complete.
    pub fn current_wake(&self, game_id: GameId) -> Result<Option<Wake>, AppError> {
        self.repo
            .with_game(game_id, |entry| Ok(entry.game.current_wake().cloned()))
    }

    pub async fn toggle_selection(
        &self,
        game_id: GameId,
        position: Position,
    ) -> Result<GameFlowMutationResult<SelectionState>, AppError> {
        self.run_mutation(game_id, Automation::OnWakeChange, |_, entry| {
            Ok(entry.game.toggle_selection(position)?)
        })
        .await
    }

    pub async fn confirm_selection(
        &self,
        game_id: GameId,
    ) -> Result<GameFlowMutationResult<Action>, AppError> {
        self.run_mutation(game_id, Automation::OnWakeChange, |_, entry| {
            Ok(entry.game.confirm_selection()?)
        })
        .await
    }

    pub async fn skip_current_wake(
        &self,
        game_id: GameId,
    ) -> Result<GameFlowMutationResult<()>, AppError> {
        self.run_mutation(game_id, Automation::OnWakeChange, |_, entry| {
            Ok(entry.game.skip_current_wake()?)
        })
        .await
    }

    pub async fn cancel_selection(
        &self,
        game_id: GameId,
    ) -> Result<GameFlowMutationResult<()>, AppError> {
        self.run_mutation(game_id, Automation::OnWakeChange, |_, entry| {
            Ok(entry.game.cancel_selection()?)
        })
        .await
    }

    /// Undo the newest action. The rewound wake is left to the host even if
    /// automated seats hold it.
    pub async fn cancel_last_action(
        &self,
        game_id: GameId,
    ) -> Result<GameFlowMutationResult<Action>, AppError> {
        self.run_mutation(game_id, Automation::Never, |_, entry| {
            Ok(entry.game.cancel_last_action()?)
        })
        .await
    }
}
