//! Property tests for wake list construction (pure domain).
//!
//! Contract:
//! - Only wake types with at least one living holder are listed
//! - Order is by (priority, wake type id)
//! - Every living player with a waking role sits in exactly one wake
//! - A fresh night starts at cursor 0, or complete when nothing wakes

use proptest::prelude::*;

use crate::domain::roles::RoleCatalog;
use crate::domain::test_gens::{role_table, role_table_with_liveness};
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::lobby_with_roles;
use crate::domain::wakes::build_wakes;
use crate::domain::PlayerRegistry;

fn registry(table: &[(&str, bool)]) -> PlayerRegistry {
    let mut reg = PlayerRegistry::new();
    for (role, alive) in table {
        let pos = reg.seat(role.to_string());
        reg.assign_role(pos, *role).unwrap();
        reg.set_alive(pos, *alive).unwrap();
    }
    reg
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every listed wake has a living holder and the list is sorted.
    #[test]
    fn prop_wakes_are_living_and_ordered(table in role_table_with_liveness()) {
        let catalog = RoleCatalog::classic();
        let reg = registry(&table);
        let wakes = build_wakes(&reg, &catalog);

        for wake in &wakes {
            prop_assert!(!wake.holders.is_empty());
            prop_assert!(wake.holders.iter().all(|&p| reg.is_alive(p)),
                "wake {} lists a dead holder", wake.wake_type);
        }
        for pair in wakes.windows(2) {
            prop_assert!(
                (pair[0].priority, &pair[0].wake_type) < (pair[1].priority, &pair[1].wake_type),
                "wakes out of order: {} before {}", pair[0].wake_type, pair[1].wake_type
            );
        }
    }

    /// Property: each living waking player appears in exactly one wake.
    #[test]
    fn prop_each_waking_player_in_one_wake(table in role_table_with_liveness()) {
        let catalog = RoleCatalog::classic();
        let reg = registry(&table);
        let wakes = build_wakes(&reg, &catalog);

        for player in reg.all() {
            let wakes_in = wakes.iter().filter(|w| w.holders.contains(&player.position)).count();
            let should_wake = player.alive
                && player.role.as_deref().and_then(|r| catalog.wake_for_role(r)).is_some();
            prop_assert_eq!(wakes_in, usize::from(should_wake));
        }
    }

    /// Property: a started night points at the first wake.
    #[test]
    fn prop_night_starts_at_first_wake(table in role_table()) {
        let mut game = lobby_with_roles(&table);
        game.start_night().unwrap();
        let scheduler = game.town().scheduler();
        if scheduler.is_empty() {
            prop_assert!(scheduler.is_complete());
        } else {
            prop_assert_eq!(scheduler.cursor(), 0);
            prop_assert_eq!(game.current_wake(), scheduler.wakes().first());
        }
    }
}
