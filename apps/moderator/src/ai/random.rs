//! Random stand-in: picks uniformly among living players.

use parking_lot::Mutex;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::trait_def::{AiError, AutoPlayer, WakeView};
use crate::domain::state::Position;

/// Stand-in that picks random living targets.
///
/// Prefers players outside its own wake and falls back to the whole table
/// only when there are too few of those. A seed makes it reproducible.
pub struct RandomPlayer {
    rng: Mutex<ChaCha8Rng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub const fn name() -> &'static str {
        Self::NAME
    }

    pub const fn version() -> &'static str {
        Self::VERSION
    }

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AutoPlayer for RandomPlayer {
    fn choose_targets(&self, view: &WakeView) -> Result<Vec<Position>, AiError> {
        let needed = view.choice as usize;
        if needed == 0 {
            return Ok(Vec::new());
        }

        let others = view.others();
        let pool = if others.len() >= needed {
            others
        } else {
            view.candidates.clone()
        };
        if pool.len() < needed {
            return Err(AiError::NotEnoughCandidates {
                needed: view.choice,
                available: pool.len(),
            });
        }

        let mut rng = self.rng.lock();
        Ok(pool.choose_multiple(&mut *rng, needed).copied().collect())
    }
}
