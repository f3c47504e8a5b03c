use tracing::{debug, warn};

use crate::domain::actions::Action;
use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use crate::domain::state::GameId;
use crate::error::AppError;
use crate::protocol::town_view::TownView;
use crate::services::game_flow::GameFlowService;
use crate::services::games::GameEntry;

#[derive(Debug)]
pub struct GameFlowMutationResult<T> {
    pub value: T,
    pub view: TownView,
    pub transitions: Vec<GameTransition>,
    /// Actions committed by automated seats after the request itself.
    pub automated: Vec<Action>,
    /// False when the gateway failed; the mutation stands either way.
    pub rendered: bool,
}

impl<T> GameFlowMutationResult<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> GameFlowMutationResult<U> {
        GameFlowMutationResult {
            value: f(self.value),
            view: self.view,
            transitions: self.transitions,
            automated: self.automated,
            rendered: self.rendered,
        }
    }
}

/// Whether automated seats may act after the mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Automation {
    /// Only if the active wake moved during the mutation.
    OnWakeChange,
    /// Even if the wake stayed put (e.g. the host just enabled auto-play).
    Always,
    /// Never; used when the host rewinds onto a wake to redo it by hand.
    Never,
}

impl GameFlowService {
    pub(super) async fn run_mutation<T, F>(
        &self,
        game_id: GameId,
        automation: Automation,
        mutation: F,
    ) -> Result<GameFlowMutationResult<T>, AppError>
    where
        F: FnOnce(&GameFlowService, &mut GameEntry) -> Result<T, AppError>,
    {
        let (value, view, transitions, automated) = {
            let shared = self.repo.get(game_id)?;
            let mut entry = shared.lock();

            let before = GameLifecycleView::of(&entry.game);
            let value = mutation(self, &mut *entry)?;

            let wake_moved = GameLifecycleView::of(&entry.game).wake != before.wake;
            let automate = match automation {
                Automation::OnWakeChange => wake_moved,
                Automation::Always => true,
                Automation::Never => false,
            };
            let automated = if automate {
                self.run_automation(&mut entry)
            } else {
                Vec::new()
            };

            let after = GameLifecycleView::of(&entry.game);
            let transitions = derive_game_transitions(&before, &after);
            let view = TownView::build(&entry.game, &entry.settings, transitions.clone());
            (value, view, transitions, automated)
        };

        for transition in &transitions {
            debug!(game_id, ?transition, "Game transition");
        }

        let rendered = self.render(&view).await;
        Ok(GameFlowMutationResult {
            value,
            view,
            transitions,
            automated,
            rendered,
        })
    }

    pub(super) async fn render(&self, view: &TownView) -> bool {
        match self.gateway.render(view).await {
            Ok(()) => true,
            Err(err) => {
                warn!(game_id = view.game_id, error = %err, "Render failed; state kept");
                false
            }
        }
    }

    /// Current view without mutating anything.
    pub fn view(&self, game_id: GameId) -> Result<TownView, AppError> {
        self.repo.with_game(game_id, |entry| {
            Ok(TownView::build(&entry.game, &entry.settings, Vec::new()))
        })
    }
}
