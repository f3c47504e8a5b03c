//! Shared types for the simulator.

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Profile {
    Random,
    Steady,
}

impl Profile {
    /// Registry name of the stand-in.
    pub fn name(self) -> &'static str {
        match self {
            Profile::Random => "RandomPlayer",
            Profile::Steady => "SteadyPlayer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Town,
    Mafia,
}
