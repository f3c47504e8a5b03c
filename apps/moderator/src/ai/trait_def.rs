//! Automated stand-in trait definition.

use std::fmt;

use crate::domain::game::Game;
use crate::domain::roles::WakeTypeId;
use crate::domain::state::Position;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Errors that can occur while a stand-in decides.
#[derive(Debug)]
pub enum AiError {
    /// Stand-in encountered an internal error
    Internal(String),
    /// Not enough living candidates to satisfy the wake
    NotEnoughCandidates { needed: u8, available: usize },
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "stand-in internal error: {msg}"),
            AiError::NotEnoughCandidates { needed, available } => write!(
                f,
                "stand-in needs {needed} target(s) but only {available} candidate(s) exist"
            ),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(ErrorCode::AutomationFailed, format!("AI error: {err}"))
    }
}

/// What a stand-in gets to see when its wake is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WakeView {
    pub night: u32,
    pub wake_type: WakeTypeId,
    pub choice: u8,
    /// Living holders of the wake.
    pub actors: Vec<Position>,
    /// Every living position, ascending.
    pub candidates: Vec<Position>,
}

impl WakeView {
    /// View of the active wake, or `None` outside a pending wake.
    pub fn of(game: &Game) -> Option<Self> {
        let wake = game.current_wake()?;
        let players = game.players();
        Some(Self {
            night: game.night(),
            wake_type: wake.wake_type.clone(),
            choice: wake.choice,
            actors: wake
                .holders
                .iter()
                .copied()
                .filter(|&p| players.is_alive(p))
                .collect(),
            candidates: players.living().map(|p| p.position).collect(),
        })
    }

    /// Candidates that are not themselves acting in this wake.
    pub fn others(&self) -> Vec<Position> {
        self.candidates
            .iter()
            .copied()
            .filter(|p| !self.actors.contains(p))
            .collect()
    }
}

/// Trait for automated stand-ins.
///
/// Implementations must return exactly `view.choice` distinct living
/// positions, or an error.
pub trait AutoPlayer: Send + Sync {
    fn choose_targets(&self, view: &WakeView) -> Result<Vec<Position>, AiError>;
}
