//! Intent dispatch: authorise the sender, run the operation, render.

use serde::Serialize;
use tracing::debug;

use super::mutation::Automation;
use super::GameFlowMutationResult;
use crate::domain::actions::Action;
use crate::domain::resolution::NightReport;
use crate::domain::selection::SelectionState;
use crate::domain::state::{ChatId, Phase};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::protocol::intent::{Intent, IntentEnvelope};
use crate::services::game_flow::GameFlowService;
use crate::services::games::GameEntry;

/// What an intent did, for callers that want more than the rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntentOutcome {
    Selection(SelectionState),
    Committed(Action),
    Skipped,
    SelectionCleared,
    Undone(Action),
    NightStarted,
    DayStarted(NightReport),
}

impl GameFlowService {
    pub async fn dispatch(
        &self,
        envelope: IntentEnvelope,
    ) -> Result<GameFlowMutationResult<IntentOutcome>, AppError> {
        let IntentEnvelope {
            game_id,
            actor,
            intent,
        } = envelope;
        debug!(game_id, actor, ?intent, "Dispatching intent");

        let automation = match intent {
            Intent::CancelLast => Automation::Never,
            _ => Automation::OnWakeChange,
        };
        self.run_mutation(game_id, automation, |svc, entry| {
            authorize(entry, actor, &intent)?;
            svc.apply_intent(entry, intent)
        })
        .await
    }

    fn apply_intent(
        &self,
        entry: &mut GameEntry,
        intent: Intent,
    ) -> Result<IntentOutcome, AppError> {
        let game = &mut entry.game;
        let outcome = match intent {
            Intent::Toggle { position } => {
                let state = game.toggle_selection(position)?;
                match state.committed {
                    Some(action) => IntentOutcome::Committed(action),
                    None => IntentOutcome::Selection(state),
                }
            }
            Intent::Confirm => IntentOutcome::Committed(game.confirm_selection()?),
            Intent::Skip => {
                game.skip_current_wake()?;
                IntentOutcome::Skipped
            }
            Intent::Cancel => {
                game.cancel_selection()?;
                IntentOutcome::SelectionCleared
            }
            Intent::CancelLast => IntentOutcome::Undone(game.cancel_last_action()?),
            Intent::Advance => match game.phase() {
                Phase::Lobby | Phase::Day => {
                    game.start_night()?;
                    IntentOutcome::NightStarted
                }
                Phase::Night => {
                    let mut resolver = self.resolver.lock();
                    IntentOutcome::DayStarted(game.end_night_to_day(&mut **resolver)?)
                }
                Phase::Reveal | Phase::Ended => {
                    return Err(DomainError::invalid_transition(format!(
                        "nothing follows {}",
                        game.phase()
                    ))
                    .into())
                }
            },
        };
        Ok(outcome)
    }
}

/// The host may do anything. A seated human may only drive selection
/// intents, and only while holding the active wake.
fn authorize(entry: &GameEntry, actor: ChatId, intent: &Intent) -> Result<(), AppError> {
    let game = &entry.game;
    if actor == game.host {
        return Ok(());
    }

    let connection = game
        .pairings()
        .by_chat(actor)
        .ok_or_else(|| AppError::forbidden(format!("chat {actor} is not part of this game")))?;

    if !intent.is_selection() {
        return Err(AppError::forbidden("only the host can do that"));
    }

    let holds_wake = game.current_wake().is_some_and(|wake| {
        wake.holders.contains(&connection.position)
            && game.players().is_alive(connection.position)
    });
    if !holds_wake {
        return Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            format!("position {} does not hold the active wake", connection.position),
        )
        .into());
    }
    Ok(())
}
