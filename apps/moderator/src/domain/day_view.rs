use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::players::Player;

/// Which players the day listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayView {
    #[default]
    All,
    Alive,
    Dead,
}

impl DayView {
    pub fn filter(self, player: &Player) -> bool {
        match self {
            DayView::All => true,
            DayView::Alive => player.alive,
            DayView::Dead => !player.alive,
        }
    }

    /// Cycle to the next filter (the host taps one button repeatedly).
    pub fn next(self) -> Self {
        match self {
            DayView::All => DayView::Alive,
            DayView::Alive => DayView::Dead,
            DayView::Dead => DayView::All,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DayView::All => "all",
            DayView::Alive => "alive",
            DayView::Dead => "dead",
        }
    }
}

impl FromStr for DayView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(DayView::All),
            "alive" => Ok(DayView::Alive),
            "dead" => Ok(DayView::Dead),
            other => Err(format!("unknown day view '{other}'")),
        }
    }
}
