//! Registered stand-in profiles.
//!
//! Automated seats name a profile; the flow service builds the stand-in
//! through this table. Keep names stable, they are persisted in pairings.

use crate::ai::{AutoPlayer, RandomPlayer, SteadyPlayer};

/// Factory definition for constructing stand-ins.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AutoPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        name: SteadyPlayer::NAME,
        version: SteadyPlayer::VERSION,
        make: make_steady_player,
    },
];

/// Returns the statically registered stand-in factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AutoPlayer> {
    Box::new(RandomPlayer::new(seed))
}

fn make_steady_player(seed: Option<u64>) -> Box<dyn AutoPlayer> {
    Box::new(SteadyPlayer::new(seed))
}
