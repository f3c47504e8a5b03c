//! Per-game metrics written as one JSON line each.

use serde::Serialize;

use crate::simulator::GameResult;
use crate::types::Winner;

#[derive(Debug, Serialize)]
pub struct GameMetrics {
    pub game: u32,
    pub seed: u64,
    pub profile: &'static str,
    pub players: u16,
    pub nights: u32,
    pub actions: usize,
    pub skipped: usize,
    pub deaths: usize,
    pub winner: Option<Winner>,
    pub duration_ms: f64,
}

pub struct MetricsInput<'a> {
    pub game: u32,
    pub seed: u64,
    pub profile: &'static str,
    pub players: u16,
    pub result: &'a GameResult,
    pub duration_ms: f64,
}

pub fn build_game_metrics(input: MetricsInput<'_>) -> GameMetrics {
    GameMetrics {
        game: input.game,
        seed: input.seed,
        profile: input.profile,
        players: input.players,
        nights: input.result.nights,
        actions: input.result.actions,
        skipped: input.result.skipped,
        deaths: input.result.deaths,
        winner: input.result.winner,
        duration_ms: input.duration_ms,
    }
}
