//! In-memory night simulator.
//!
//! Drives the domain `Game` directly, without the flow service or a gateway:
//! every seat is played by one stand-in profile and a small rule set resolves
//! each night.

use std::sync::Arc;

use moderator::ai::{by_name, AutoPlayer, WakeView};
use moderator::domain::{Action, Effect, Game, NightResolver, PlayerRegistry, RoleCatalog};
use moderator::AppError;
use moderator::ErrorCode;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::types::{Profile, Winner};

const MAFIA_ROLES: [&str; 2] = ["mafia", "don"];

/// Mafia kill unless the doctor covered the same seat.
#[derive(Debug, Default)]
pub struct ClassicRules;

impl NightResolver for ClassicRules {
    fn resolve(&mut self, _night: u32, actions: &[Action], _players: &PlayerRegistry) -> Vec<Effect> {
        let target_of = |wake: &str| {
            actions
                .iter()
                .rev()
                .find(|a| a.wake_type == wake)
                .and_then(|a| a.targets.first().copied())
        };
        match (target_of("mafia"), target_of("doctor")) {
            (Some(victim), saved) if saved != Some(victim) => vec![Effect::SetLiveness {
                position: victim,
                alive: false,
            }],
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameResult {
    pub nights: u32,
    pub actions: usize,
    pub skipped: usize,
    pub deaths: usize,
    pub winner: Option<Winner>,
}

pub struct Simulator {
    game_num: i64,
    seed: u64,
    players: u16,
    max_nights: u32,
}

impl Simulator {
    pub fn new(game_num: i64, seed: u64, players: u16, max_nights: u32) -> Self {
        Self {
            game_num,
            seed,
            players,
            max_nights,
        }
    }

    pub fn simulate_game(&self, profile: Profile) -> Result<GameResult, AppError> {
        let factory = by_name(profile.name()).ok_or_else(|| {
            AppError::not_found(ErrorCode::NotFound, format!("stand-in '{}'", profile.name()))
        })?;
        let player = (factory.make)(Some(self.seed));

        let mut game = Game::new(self.game_num, 0, Arc::new(RoleCatalog::classic()));
        for (idx, role) in self.deal().into_iter().enumerate() {
            let position = game.seat_player(format!("bot-{}", idx + 1))?;
            game.assign_role(position, role)?;
        }

        let mut rules = ClassicRules;
        let mut result = GameResult {
            nights: 0,
            actions: 0,
            skipped: 0,
            deaths: 0,
            winner: None,
        };

        while result.nights < self.max_nights {
            game.start_night()?;
            result.nights = game.night();
            while let Some(view) = WakeView::of(&game) {
                if play_wake(&mut game, player.as_ref(), &view)? {
                    result.actions += 1;
                } else {
                    result.skipped += 1;
                }
            }
            let report = game.end_night_to_day(&mut rules)?;
            result.deaths += report.effects.len();

            result.winner = winner(game.players());
            if result.winner.is_some() {
                break;
            }
        }

        game.terminate();
        Ok(result)
    }

    /// Roles for the table: a quarter mafia headed by the don, then one of
    /// each specialist as the table grows, citizens for the rest.
    fn deal(&self) -> Vec<&'static str> {
        let n = self.players as usize;
        let mafia = (n / 4).max(1);
        let mut roles: Vec<&'static str> = Vec::with_capacity(n);
        roles.push("don");
        roles.extend(std::iter::repeat("mafia").take(mafia - 1));
        for (min_players, role) in [(4, "doctor"), (5, "detective"), (7, "matchmaker"), (9, "witness")] {
            if n >= min_players {
                roles.push(role);
            }
        }
        roles.resize(n.max(roles.len()), "citizen");
        roles.truncate(n);

        let mut rng = StdRng::seed_from_u64(self.seed);
        roles.shuffle(&mut rng);
        roles
    }
}

/// Let the stand-in play the active wake. Returns false when it was skipped.
fn play_wake(game: &mut Game, player: &dyn AutoPlayer, view: &WakeView) -> Result<bool, AppError> {
    let targets = match player.choose_targets(view) {
        Ok(targets) => targets,
        Err(err) => {
            debug!(wake = %view.wake_type, error = %err, "Stand-in passed");
            game.skip_current_wake()?;
            return Ok(false);
        }
    };
    for position in targets {
        game.toggle_selection(position)?;
    }
    if game.confirm_selection().is_err() {
        game.cancel_selection()?;
        game.skip_current_wake()?;
        return Ok(false);
    }
    Ok(true)
}

fn winner(players: &PlayerRegistry) -> Option<Winner> {
    let (mafia, town) = players.living().fold((0usize, 0usize), |(m, t), p| {
        match p.role.as_deref() {
            Some(role) if MAFIA_ROLES.contains(&role) => (m + 1, t),
            _ => (m, t + 1),
        }
    });
    if mafia == 0 {
        Some(Winner::Town)
    } else if mafia >= town {
        Some(Winner::Mafia)
    } else {
        None
    }
}
