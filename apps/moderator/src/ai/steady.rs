//! Deterministic stand-in: always the lowest eligible positions.

use super::trait_def::{AiError, AutoPlayer, WakeView};
use crate::domain::state::Position;

/// Picks the lowest-numbered living players outside its own wake.
///
/// Useful for scripted demos and tests that need a predictable night.
#[derive(Debug, Default)]
pub struct SteadyPlayer;

impl SteadyPlayer {
    pub const NAME: &'static str = "SteadyPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(_seed: Option<u64>) -> Self {
        Self
    }
}

impl AutoPlayer for SteadyPlayer {
    fn choose_targets(&self, view: &WakeView) -> Result<Vec<Position>, AiError> {
        let needed = view.choice as usize;
        let mut pool = view.others();
        if pool.len() < needed {
            pool.extend(view.actors.iter().copied());
        }
        if pool.len() < needed {
            return Err(AiError::NotEnoughCandidates {
                needed: view.choice,
                available: pool.len(),
            });
        }
        pool.truncate(needed);
        Ok(pool)
    }
}
