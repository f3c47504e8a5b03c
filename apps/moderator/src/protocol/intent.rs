//! Inbound host/player requests.

use serde::{Deserialize, Serialize};

use crate::domain::state::{ChatId, GameId, Position};

/// One button press (or scripted step) against a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Toggle a target in the active wake's selection.
    Toggle { position: Position },
    /// Commit the selection as an action.
    Confirm,
    /// Pass on the active wake.
    Skip,
    /// Clear the selection.
    Cancel,
    /// Undo the newest committed action.
    CancelLast,
    /// Move the game on: Lobby/Day → Night, completed Night → Day.
    Advance,
}

impl Intent {
    /// Intents a seated player may send while holding the active wake.
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            Intent::Toggle { .. } | Intent::Confirm | Intent::Skip | Intent::Cancel
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentEnvelope {
    pub game_id: GameId,
    /// Chat the request came from.
    pub actor: ChatId,
    pub intent: Intent,
}
