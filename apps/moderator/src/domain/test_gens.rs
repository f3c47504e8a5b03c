// Proptest generators for domain types.

use proptest::prelude::*;

/// Roles from the classic catalogue, including the non-waking citizen.
pub fn classic_role() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("citizen"),
        Just("matchmaker"),
        Just("mafia"),
        Just("don"),
        Just("doctor"),
        Just("detective"),
        Just("witness"),
    ]
}

/// A table of 1..=12 seats with a role each.
pub fn role_table() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(classic_role(), 1..=12)
}

/// Table plus a liveness flag per seat.
pub fn role_table_with_liveness() -> impl Strategy<Value = Vec<(&'static str, bool)>> {
    prop::collection::vec((classic_role(), any::<bool>()), 1..=12)
}
