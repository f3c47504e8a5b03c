//! Night flow through `Game`: selection, confirmation, skips and undo.

use crate::domain::resolution::{Effect, ManualResolution, NightResolver};
use crate::domain::test_state_helpers::{current_wake_type, night_with_roles};
use crate::domain::{Action, Phase, PlayerRegistry};
use crate::errors::domain::ValidationKind;

#[test]
fn two_wakes_single_target_confirm_advances() {
    let mut game = night_with_roles(&["mafia", "doctor", "citizen"]);
    assert_eq!(current_wake_type(&game).as_deref(), Some("mafia"));

    game.toggle_selection(2).unwrap();
    let action = game.confirm_selection().unwrap();
    assert_eq!(action.targets, vec![2]);
    assert_eq!(action.actors, vec![1]);
    assert_eq!(action.seq, 0);
    assert_eq!(current_wake_type(&game).as_deref(), Some("doctor"));
}

#[test]
fn third_toggle_at_two_target_limit_is_ignored() {
    let mut game = night_with_roles(&["matchmaker", "-", "-", "-", "-"]);
    assert_eq!(game.current_wake().map(|w| w.choice), Some(2));

    game.toggle_selection(1).unwrap();
    game.toggle_selection(3).unwrap();
    let state = game.toggle_selection(5).unwrap();
    assert_eq!(state.selected, vec![1, 3]);
    assert!(state.at_limit);

    let action = game.confirm_selection().unwrap();
    assert_eq!(action.targets, vec![1, 3]);
}

#[test]
fn night_without_waking_roles_is_complete_immediately() {
    let mut game = night_with_roles(&["citizen", "-", "citizen"]);
    assert!(game.current_wake().is_none());
    assert!(game.town().is_complete());
    assert!(game.town().actions().is_empty());

    let report = game.end_night_to_day(&mut ManualResolution).unwrap();
    assert!(report.actions.is_empty());
    assert_eq!(game.phase(), Phase::Day);
}

#[test]
fn cancel_last_on_empty_queue_leaves_state_alone() {
    let mut game = night_with_roles(&["mafia", "doctor"]);
    game.toggle_selection(2).unwrap();
    let before = game.town_record();

    let err = game.cancel_last_action().unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::NothingToCancel));
    assert_eq!(game.town_record(), before);
}

#[test]
fn confirm_requires_exact_choice_count() {
    let mut game = night_with_roles(&["matchmaker", "-", "-"]);
    game.toggle_selection(2).unwrap();
    let err = game.confirm_selection().unwrap_err();
    assert_eq!(
        err.validation_kind(),
        Some(&ValidationKind::ConfirmationNotReady)
    );
    assert_eq!(current_wake_type(&game).as_deref(), Some("lovers"));
}

#[test]
fn zero_choice_wake_confirms_with_empty_buffer() {
    let mut game = night_with_roles(&["witness", "-"]);
    assert_eq!(game.current_wake().map(|w| w.choice), Some(0));

    // Any add is over the limit and ignored.
    let state = game.toggle_selection(2).unwrap();
    assert!(state.selected.is_empty());

    let action = game.confirm_selection().unwrap();
    assert!(action.targets.is_empty());
    assert!(game.current_wake().is_none());
}

#[test]
fn cancel_last_restores_cursor_and_buffer() {
    let mut game = night_with_roles(&["mafia", "doctor", "citizen"]);
    game.toggle_selection(3).unwrap();
    game.confirm_selection().unwrap();
    assert_eq!(current_wake_type(&game).as_deref(), Some("doctor"));

    let undone = game.cancel_last_action().unwrap();
    assert_eq!(undone.targets, vec![3]);
    assert_eq!(current_wake_type(&game).as_deref(), Some("mafia"));
    assert_eq!(game.town().selection().targets(), &[3]);
    assert!(game.town().actions().is_empty());

    // The restored selection can be committed again as-is.
    let again = game.confirm_selection().unwrap();
    assert_eq!(again.targets, vec![3]);
    assert_eq!(again.seq, 0);
}

#[test]
fn cancel_last_after_skipped_wake_rewinds_past_it() {
    let mut game = night_with_roles(&["mafia", "doctor", "detective", "citizen"]);
    game.toggle_selection(4).unwrap();
    game.confirm_selection().unwrap();
    game.skip_current_wake().unwrap();
    assert_eq!(current_wake_type(&game).as_deref(), Some("detective"));

    game.cancel_last_action().unwrap();
    assert_eq!(current_wake_type(&game).as_deref(), Some("mafia"));
}

#[test]
fn auto_confirm_when_confirmation_not_required() {
    let mut game = night_with_roles(&["mafia", "doctor", "citizen"]);
    game.set_confirmation_required(false);

    let state = game.toggle_selection(3).unwrap();
    let committed = state.committed.expect("full selection commits");
    assert_eq!(committed.targets, vec![3]);
    assert_eq!(current_wake_type(&game).as_deref(), Some("doctor"));
}

#[test]
fn auto_confirm_waits_for_full_selection() {
    let mut game = night_with_roles(&["matchmaker", "-", "-"]);
    game.set_confirmation_required(false);

    let partial = game.toggle_selection(2).unwrap();
    assert!(partial.committed.is_none());
    let full = game.toggle_selection(3).unwrap();
    assert_eq!(full.committed.map(|a| a.targets), Some(vec![2, 3]));
}

#[test]
fn tap_past_the_limit_after_undo_does_not_recommit() {
    let mut game = night_with_roles(&["mafia", "doctor", "citizen"]);
    game.set_confirmation_required(false);
    assert!(game.toggle_selection(3).unwrap().committed.is_some());

    game.cancel_last_action().unwrap();
    assert_eq!(game.town().selection().targets(), &[3]);

    let state = game.toggle_selection(2).unwrap();
    assert!(state.committed.is_none());
    assert_eq!(state.selected, vec![3]);
    assert_eq!(current_wake_type(&game).as_deref(), Some("mafia"));
    assert!(game.town().actions().is_empty());

    // Revising the pick commits the new target.
    game.toggle_selection(3).unwrap();
    let state = game.toggle_selection(2).unwrap();
    assert_eq!(state.committed.map(|a| a.targets), Some(vec![2]));
    assert_eq!(current_wake_type(&game).as_deref(), Some("doctor"));
}

#[test]
fn undo_onto_a_wake_whose_holders_died_moves_on() {
    let mut game = night_with_roles(&["mafia", "doctor", "citizen"]);
    game.toggle_selection(3).unwrap();
    game.confirm_selection().unwrap();
    game.set_liveness(1, false).unwrap();

    let undone = game.cancel_last_action().unwrap();
    assert_eq!(undone.wake_type, "mafia");
    assert_eq!(current_wake_type(&game).as_deref(), Some("doctor"));
    assert!(game.town().selection().is_empty());
    assert!(game.town().actions().is_empty());
}

#[test]
fn wake_is_skipped_when_its_holders_die_mid_night() {
    let mut game = night_with_roles(&["mafia", "doctor", "citizen"]);
    game.toggle_selection(2).unwrap();
    game.set_liveness(2, false).unwrap();
    game.confirm_selection().unwrap();

    // The doctor died before its turn, so the night is over.
    assert!(game.current_wake().is_none());
    assert_eq!(game.town().actions().len(), 1);
}

#[test]
fn dead_target_is_rejected() {
    let mut game = night_with_roles(&["mafia", "citizen", "citizen"]);
    game.set_liveness(3, false).unwrap();
    let err = game.toggle_selection(3).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::UnknownPosition));
    let err = game.toggle_selection(42).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::UnknownPosition));
}

struct KillFirstTarget;

impl NightResolver for KillFirstTarget {
    fn resolve(
        &mut self,
        _night: u32,
        actions: &[Action],
        _players: &PlayerRegistry,
    ) -> Vec<Effect> {
        actions
            .iter()
            .filter(|a| a.wake_type == "mafia")
            .filter_map(|a| a.targets.first())
            .map(|&position| Effect::SetLiveness {
                position,
                alive: false,
            })
            .collect()
    }
}

#[test]
fn resolver_effects_shape_the_next_night() {
    let mut game = night_with_roles(&["mafia", "doctor", "citizen"]);
    game.toggle_selection(2).unwrap();
    game.confirm_selection().unwrap();
    game.toggle_selection(3).unwrap();
    game.confirm_selection().unwrap();

    let report = game.end_night_to_day(&mut KillFirstTarget).unwrap();
    assert_eq!(report.actions.len(), 2);
    assert_eq!(
        report.effects,
        vec![Effect::SetLiveness {
            position: 2,
            alive: false
        }]
    );
    assert!(!game.players().is_alive(2));
    assert!(game.town().actions().is_empty());

    game.start_night().unwrap();
    assert_eq!(game.night(), 2);
    let order: Vec<_> = game
        .town()
        .scheduler()
        .wakes()
        .iter()
        .map(|w| w.wake_type.as_str())
        .collect();
    assert_eq!(order, vec!["mafia"]);
}

struct BadResolver;

impl NightResolver for BadResolver {
    fn resolve(&mut self, _: u32, _: &[Action], _: &PlayerRegistry) -> Vec<Effect> {
        vec![
            Effect::SetLiveness {
                position: 1,
                alive: false,
            },
            Effect::AssignRole {
                position: 1,
                role: "vampire".into(),
            },
        ]
    }
}

#[test]
fn rejected_effects_leave_the_night_untouched() {
    let mut game = night_with_roles(&["witness", "citizen"]);
    game.confirm_selection().unwrap();

    assert!(game.end_night_to_day(&mut BadResolver).is_err());
    assert_eq!(game.phase(), Phase::Night);
    assert!(game.players().is_alive(1));
    assert_eq!(game.town().actions().len(), 1);
}

#[test]
fn recover_town_restarts_the_wake_list() {
    let mut game = night_with_roles(&["mafia", "doctor", "citizen"]);
    game.toggle_selection(3).unwrap();
    game.confirm_selection().unwrap();

    game.recover_town();
    assert_eq!(current_wake_type(&game).as_deref(), Some("mafia"));
    assert!(game.town().actions().is_empty());
}

#[test]
fn town_record_round_trips_through_json() {
    let mut game = night_with_roles(&["mafia", "doctor", "citizen"]);
    game.toggle_selection(3).unwrap();
    game.confirm_selection().unwrap();
    game.toggle_selection(1).unwrap();

    let json = serde_json::to_string(&game.town_record()).unwrap();
    let record = serde_json::from_str(&json).unwrap();

    let mut other = night_with_roles(&["mafia", "doctor", "citizen"]);
    other.restore_town(record).unwrap();
    assert_eq!(other.town(), game.town());
    assert_eq!(current_wake_type(&other).as_deref(), Some("doctor"));
}
