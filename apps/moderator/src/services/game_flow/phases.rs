use std::sync::Arc;

use tracing::{debug, info};

use super::mutation::Automation;
use super::GameFlowMutationResult;
use crate::config::host::HostSettings;
use crate::domain::resolution::NightReport;
use crate::domain::roles::RoleCatalog;
use crate::domain::state::{ChatId, GameId, Phase};
use crate::error::AppError;
use crate::services::game_flow::GameFlowService;
use crate::services::games::ArchivedGame;

impl GameFlowService {
    pub fn create_game(
        &self,
        host: ChatId,
        catalog: Arc<RoleCatalog>,
        settings: HostSettings,
    ) -> GameId {
        self.repo.create(host, catalog, settings)
    }

    pub async fn start_night(
        &self,
        game_id: GameId,
    ) -> Result<GameFlowMutationResult<Phase>, AppError> {
        self.run_mutation(game_id, Automation::OnWakeChange, |_, entry| {
            Ok(entry.game.start_night()?)
        })
        .await
    }

    pub async fn end_night_to_day(
        &self,
        game_id: GameId,
    ) -> Result<GameFlowMutationResult<NightReport>, AppError> {
        self.run_mutation(game_id, Automation::OnWakeChange, |svc, entry| {
            let mut resolver = svc.resolver.lock();
            Ok(entry.game.end_night_to_day(&mut **resolver)?)
        })
        .await
    }

    pub async fn start_day(
        &self,
        game_id: GameId,
    ) -> Result<GameFlowMutationResult<Phase>, AppError> {
        self.run_mutation(game_id, Automation::OnWakeChange, |svc, entry| {
            let mut resolver = svc.resolver.lock();
            Ok(entry.game.start_day(&mut **resolver)?)
        })
        .await
    }

    pub async fn force_reveal(
        &self,
        game_id: GameId,
    ) -> Result<GameFlowMutationResult<Phase>, AppError> {
        self.run_mutation(game_id, Automation::OnWakeChange, |_, entry| {
            Ok(entry.game.force_reveal()?)
        })
        .await
    }

    /// End the game, render the final view and move it to the archive.
    ///
    /// Terminating an archived game renders its final view again and
    /// returns the existing record.
    pub async fn terminate(
        &self,
        game_id: GameId,
    ) -> Result<GameFlowMutationResult<ArchivedGame>, AppError> {
        if let Some(archived) = self.repo.archived_game(game_id) {
            return Ok(self.rerender_archived(archived).await);
        }
        let result = match self
            .run_mutation(game_id, Automation::OnWakeChange, |_, entry| {
                Ok(entry.game.terminate())
            })
            .await
        {
            Ok(result) => result,
            // Lost a race with another terminate.
            Err(err) => match self.repo.archived_game(game_id) {
                Some(archived) => return Ok(self.rerender_archived(archived).await),
                None => return Err(err),
            },
        };
        let archived = match self.repo.archive(game_id) {
            Ok(archived) => archived,
            Err(err) => self.repo.archived_game(game_id).ok_or(err)?,
        };
        info!(game_id, "Game released");
        Ok(result.map(|_| archived))
    }

    async fn rerender_archived(
        &self,
        archived: ArchivedGame,
    ) -> GameFlowMutationResult<ArchivedGame> {
        debug!(game_id = archived.id, "Game already archived");
        let rendered = self.render(&archived.final_view).await;
        GameFlowMutationResult {
            view: archived.final_view.clone(),
            value: archived,
            transitions: Vec::new(),
            automated: Vec::new(),
            rendered,
        }
    }
}
