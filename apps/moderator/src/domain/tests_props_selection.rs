//! Property tests for selection, confirmation and undo.
//!
//! Contract:
//! - Toggling the same position twice restores the buffer
//! - The buffer never exceeds the active wake's choice count
//! - confirm followed by cancel_last restores buffer and cursor
//! - The queue never outgrows the wake list, and is shorter when a wake is skipped

use proptest::prelude::*;

use crate::domain::test_gens::role_table;
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::night_with_roles;

/// A night with at least one waking role.
fn busy_table() -> impl Strategy<Value = Vec<&'static str>> {
    role_table().prop_map(|mut table| {
        table.push("mafia");
        table
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: toggle is its own inverse while below the limit.
    #[test]
    fn prop_double_toggle_is_identity(table in busy_table(), pick in 0usize..16) {
        let mut game = night_with_roles(&table);
        let target = (pick % table.len()) as u16 + 1;
        let before = game.town().selection().clone();

        game.toggle_selection(target).unwrap();
        game.toggle_selection(target).unwrap();
        prop_assert_eq!(game.town().selection(), &before);
    }

    /// Property: the buffer is capped at the wake's choice count.
    #[test]
    fn prop_buffer_never_exceeds_choice(
        table in busy_table(),
        picks in prop::collection::vec(0usize..16, 0..20),
    ) {
        let mut game = night_with_roles(&table);
        let choice = game.current_wake().map(|w| w.choice as usize).unwrap();
        for pick in picks {
            let target = (pick % table.len()) as u16 + 1;
            game.toggle_selection(target).unwrap();
            prop_assert!(game.town().selection().len() <= choice);
        }
    }

    /// Property: undoing a confirm restores the pre-confirm buffer and cursor.
    #[test]
    fn prop_confirm_then_cancel_last_restores(table in busy_table()) {
        let mut game = night_with_roles(&table);
        let choice = game.current_wake().map(|w| w.choice as usize).unwrap();
        for position in 1..=choice.min(table.len()) {
            game.toggle_selection(position as u16).unwrap();
        }
        prop_assume!(game.town().selection().len() == choice);

        let cursor = game.town().scheduler().cursor();
        let buffer = game.town().selection().clone();
        game.confirm_selection().unwrap();
        game.cancel_last_action().unwrap();

        prop_assert_eq!(game.town().scheduler().cursor(), cursor);
        prop_assert_eq!(game.town().selection(), &buffer);
        prop_assert!(game.town().actions().is_empty());
    }

    /// Property: one action per confirmed wake, none for skipped ones.
    #[test]
    fn prop_queue_bounded_by_wakes(
        table in busy_table(),
        skips in prop::collection::vec(any::<bool>(), 8),
    ) {
        let mut game = night_with_roles(&table);
        let wakes = game.town().scheduler().len();
        let mut skipped = 0;

        for skip in skips.iter().cycle().take(wakes) {
            let Some(choice) = game.current_wake().map(|w| w.choice as usize) else {
                break;
            };
            if *skip || choice > table.len() {
                game.skip_current_wake().unwrap();
                skipped += 1;
                continue;
            }
            for position in 1..=choice {
                game.toggle_selection(position as u16).unwrap();
            }
            game.confirm_selection().unwrap();
        }

        prop_assert!(game.current_wake().is_none());
        let queued = game.town().actions().len();
        prop_assert!(queued <= wakes);
        if skipped > 0 {
            prop_assert!(queued < wakes);
        }
        prop_assert_eq!(queued + skipped, wakes);
    }
}
