//! Phase Controller transitions and the frozen phases.

use crate::domain::resolution::ManualResolution;
use crate::domain::test_state_helpers::{lobby_with_roles, night_with_roles};
use crate::domain::Phase;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

fn is_invalid_transition(err: &DomainError) -> bool {
    err.validation_kind() == Some(&ValidationKind::InvalidTransition)
}

#[test]
fn start_night_is_idempotent() {
    let mut game = night_with_roles(&["mafia", "citizen"]);
    game.toggle_selection(2).unwrap();
    let before = game.town_record();

    assert_eq!(game.start_night().unwrap(), Phase::Night);
    assert_eq!(game.night(), 1);
    assert_eq!(game.town_record(), before);
}

#[test]
fn end_night_rejected_while_a_wake_is_pending() {
    let mut game = night_with_roles(&["mafia", "citizen"]);
    let err = game.end_night_to_day(&mut ManualResolution).unwrap_err();
    assert!(is_invalid_transition(&err));
    assert_eq!(game.phase(), Phase::Night);

    game.skip_current_wake().unwrap();
    game.end_night_to_day(&mut ManualResolution).unwrap();
    assert_eq!(game.phase(), Phase::Day);
}

#[test]
fn start_day_is_a_no_op_in_day() {
    let mut game = night_with_roles(&["citizen"]);
    assert_eq!(game.start_day(&mut ManualResolution).unwrap(), Phase::Day);
    assert_eq!(game.start_day(&mut ManualResolution).unwrap(), Phase::Day);
    let report = game.end_night_to_day(&mut ManualResolution).unwrap();
    assert!(report.actions.is_empty());
}

#[test]
fn start_day_from_lobby_is_invalid() {
    let mut game = lobby_with_roles(&["citizen"]);
    let err = game.start_day(&mut ManualResolution).unwrap_err();
    assert!(is_invalid_transition(&err));
}

#[test]
fn day_to_night_increments_counter_and_rebuilds() {
    let mut game = night_with_roles(&["doctor", "citizen"]);
    game.skip_current_wake().unwrap();
    game.start_day(&mut ManualResolution).unwrap();

    game.assign_role(2, "detective").unwrap();
    game.start_night().unwrap();
    assert_eq!(game.night(), 2);
    let order: Vec<_> = game
        .town()
        .scheduler()
        .wakes()
        .iter()
        .map(|w| w.wake_type.clone())
        .collect();
    assert_eq!(order, vec!["doctor".to_string(), "detective".to_string()]);
}

#[test]
fn reveal_freezes_every_mutation() {
    let mut game = night_with_roles(&["mafia", "citizen"]);
    assert_eq!(game.force_reveal().unwrap(), Phase::Reveal);
    assert_eq!(game.force_reveal().unwrap(), Phase::Reveal);

    assert!(is_invalid_transition(&game.set_liveness(1, false).unwrap_err()));
    assert!(is_invalid_transition(&game.assign_role(1, "doctor").unwrap_err()));
    assert!(is_invalid_transition(&game.kick(2).unwrap_err()));
    assert!(is_invalid_transition(&game.start_night().unwrap_err()));
    assert!(is_invalid_transition(&game.toggle_selection(2).unwrap_err()));
    assert!(is_invalid_transition(&game.cancel_selection().unwrap_err()));
    assert!(is_invalid_transition(&game.confirm_selection().unwrap_err()));
    assert!(is_invalid_transition(&game.skip_current_wake().unwrap_err()));
    assert!(is_invalid_transition(&game.cancel_last_action().unwrap_err()));
    assert!(game.players().is_alive(1));

    game.terminate();
    assert!(is_invalid_transition(&game.toggle_selection(2).unwrap_err()));
    assert!(is_invalid_transition(&game.cancel_last_action().unwrap_err()));
}

#[test]
fn reveal_needs_a_started_game() {
    let mut game = lobby_with_roles(&["citizen"]);
    assert!(is_invalid_transition(&game.force_reveal().unwrap_err()));
}

#[test]
fn terminate_from_any_phase() {
    let mut lobby = lobby_with_roles(&["citizen"]);
    assert_eq!(lobby.terminate(), Phase::Ended);
    assert_eq!(lobby.terminate(), Phase::Ended);

    let mut night = night_with_roles(&["mafia", "citizen"]);
    night.force_reveal().unwrap();
    assert_eq!(night.terminate(), Phase::Ended);
    assert!(is_invalid_transition(&night.force_reveal().unwrap_err()));
    assert!(is_invalid_transition(
        &night.end_night_to_day(&mut ManualResolution).unwrap_err()
    ));
}

#[test]
fn seating_is_lobby_only() {
    let mut game = night_with_roles(&["citizen"]);
    assert!(is_invalid_transition(&game.seat_player("late").unwrap_err()));
}

#[test]
fn assign_role_checks_the_catalogue() {
    let mut game = lobby_with_roles(&["-"]);
    let err = game.assign_role(1, "vampire").unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Role, _)));
    assert!(game.role_of(1).is_none());
}

#[test]
fn kick_drops_pairing_and_wake() {
    use crate::domain::pairings::SeatActor;

    let mut game = lobby_with_roles(&["mafia", "doctor", "citizen"]);
    game.pairings_mut()
        .unwrap()
        .bind(2, SeatActor::Human { chat_id: 22 })
        .unwrap();
    game.kick(2).unwrap();
    assert!(game.pairings().get(2).is_none());

    game.start_night().unwrap();
    let order: Vec<_> = game
        .town()
        .scheduler()
        .wakes()
        .iter()
        .map(|w| w.wake_type.as_str())
        .collect();
    assert_eq!(order, vec!["mafia"]);
}

#[test]
fn selection_operations_outside_night_report_no_active_wake() {
    let mut game = lobby_with_roles(&["mafia", "citizen"]);
    let err = game.toggle_selection(2).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::NoActiveWake));
    assert!(game.current_wake().is_none());
}
