use serde::{Deserialize, Serialize};

pub type GameId = i64;
/// Seat number in the Town, 1-based and stable for the whole game.
pub type Position = u16;
/// Identity of a human chat session.
pub type ChatId = i64;

/// Overall game lifecycle.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Players are being seated and roles handed out.
    Lobby,
    /// Night-acting roles wake in order and pick targets.
    Night,
    /// Discussion and voting (external).
    Day,
    /// Host forced early termination; everything is frozen.
    Reveal,
    /// Game released.
    Ended,
}

impl Phase {
    /// No mutation of players, pairings or the night engine is allowed.
    pub fn is_frozen(self) -> bool {
        matches!(self, Phase::Reveal | Phase::Ended)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Lobby => "lobby",
            Phase::Night => "night",
            Phase::Day => "day",
            Phase::Reveal => "reveal",
            Phase::Ended => "ended",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
