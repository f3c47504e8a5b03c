use serde::Serialize;

use crate::domain::game::Game;
use crate::domain::roles::WakeTypeId;
use crate::domain::state::Phase;

/// The slice of a game the flow service compares before and after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub phase: Phase,
    pub night: u32,
    /// Cursor and wake type of the active wake, if any.
    pub wake: Option<(usize, WakeTypeId)>,
    pub queued: usize,
}

impl GameLifecycleView {
    pub fn of(game: &Game) -> Self {
        let wake = game
            .current_wake()
            .map(|w| (game.town().scheduler().cursor(), w.wake_type.clone()));
        Self {
            phase: game.phase(),
            night: game.night(),
            wake,
            queued: game.town().queue().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: a new night began.
    NightStarted { night: u32 },

    /// Edge-triggered: the active wake changed (forwards or back on undo).
    WakeBecame { index: usize, wake_type: WakeTypeId },

    /// Edge-triggered: every wake of the night has been handled.
    NightComplete { night: u32 },

    /// Edge-triggered: Night -> Day
    DayStarted { night: u32 },

    /// Edge-triggered: game frozen for the reveal
    Revealed,

    /// Edge-triggered: game terminated
    Ended,
}

/// Derive transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. New night
    let night_started = after.phase == Phase::Night
        && (before.phase != Phase::Night || before.night != after.night);
    if night_started {
        transitions.push(GameTransition::NightStarted { night: after.night });
    }

    // 2. Wake change
    if let Some((index, wake_type)) = &after.wake {
        if night_started || before.wake.as_ref() != after.wake.as_ref() {
            transitions.push(GameTransition::WakeBecame {
                index: *index,
                wake_type: wake_type.clone(),
            });
        }
    }

    // 3. Night ran out of wakes
    let was_pending = before.phase == Phase::Night && before.wake.is_some();
    if after.phase == Phase::Night && after.wake.is_none() && (was_pending || night_started) {
        transitions.push(GameTransition::NightComplete { night: after.night });
    }

    // 4. Night -> Day
    if before.phase == Phase::Night && after.phase == Phase::Day {
        transitions.push(GameTransition::DayStarted { night: after.night });
    }

    // 5. Reveal
    if before.phase != Phase::Reveal && after.phase == Phase::Reveal {
        transitions.push(GameTransition::Revealed);
    }

    // 6. Ended
    if before.phase != Phase::Ended && after.phase == Phase::Ended {
        transitions.push(GameTransition::Ended);
    }

    transitions
}
