//! Services: the game repository and the flow service that drives games.

pub mod game_flow;
pub mod games;

pub use game_flow::{GameFlowMutationResult, GameFlowService, IntentOutcome};
pub use games::{ArchivedGame, GameEntry, GameRepository};
