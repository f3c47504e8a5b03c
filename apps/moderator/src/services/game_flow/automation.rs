//! Automated seats playing their own wakes.

use tracing::{info, warn};

use crate::ai::{by_name, AutoPlayer, RandomPlayer, WakeView};
use crate::domain::actions::Action;
use crate::domain::game::Game;
use crate::domain::pairings::SeatActor;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::game_flow::GameFlowService;
use crate::services::games::GameEntry;

impl GameFlowService {
    /// Let automated seats play every consecutive wake they fully hold.
    ///
    /// Stops at the first wake with a human holder, when auto-play is off,
    /// or when the host already has targets selected. A failing stand-in is
    /// logged and leaves its wake for the host.
    pub(super) fn run_automation(&self, entry: &mut GameEntry) -> Vec<Action> {
        let mut committed = Vec::new();
        if !entry.settings.auto_play_bots {
            return committed;
        }

        while entry.game.town().selection().is_empty() {
            let Some(profile) = automated_profile(&entry.game) else {
                break;
            };
            match play_wake(entry, &profile) {
                Ok(action) => {
                    info!(
                        game_id = entry.game.id,
                        wake = %action.wake_type,
                        profile = %profile,
                        targets = ?action.targets,
                        "Automated seat acted"
                    );
                    committed.push(action);
                }
                Err(err) => {
                    warn!(
                        game_id = entry.game.id,
                        profile = %profile,
                        error = %err,
                        "Automated seat failed"
                    );
                    break;
                }
            }
        }
        committed
    }
}

/// Profile of the active wake's speaker, when every living holder is automated.
fn automated_profile(game: &Game) -> Option<String> {
    let wake = game.current_wake()?;
    let players = game.players();
    let pairings = game.pairings();

    let living: Vec<_> = wake
        .holders
        .iter()
        .copied()
        .filter(|&p| players.is_alive(p))
        .collect();
    if !living.iter().all(|&p| pairings.is_automated(p)) {
        return None;
    }
    match &pairings.get(*living.first()?)?.actor {
        SeatActor::Automated { profile } => Some(profile.clone()),
        SeatActor::Human { .. } => None,
    }
}

fn play_wake(entry: &mut GameEntry, profile: &str) -> Result<Action, AppError> {
    let view = WakeView::of(&entry.game).ok_or_else(|| {
        DomainError::validation(ValidationKind::NoActiveWake, "night is complete")
    })?;
    let cursor = entry.game.town().scheduler().cursor();
    let seed = entry
        .automation_seed
        .map(|base| wake_seed(base, view.night, cursor));

    let player: Box<dyn AutoPlayer> = match by_name(profile) {
        Some(factory) => (factory.make)(seed),
        None => {
            warn!(profile, "Unknown stand-in profile; using RandomPlayer");
            Box::new(RandomPlayer::new(seed))
        }
    };

    let targets = player.choose_targets(&view)?;
    for target in targets {
        if let Some(action) = entry.game.toggle_selection(target)?.committed {
            return Ok(action);
        }
    }
    Ok(entry.game.confirm_selection()?)
}

/// Per-wake seed so each decision is reproducible on its own.
fn wake_seed(base: u64, night: u32, cursor: usize) -> u64 {
    base.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(u64::from(night) << 32)
        .wrapping_add(cursor as u64)
}
