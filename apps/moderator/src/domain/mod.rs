//! Domain layer: the night engine and its pure game logic types.

pub mod actions;
pub mod day_view;
pub mod game;
pub mod game_transition;
pub mod pairings;
pub mod players;
pub mod resolution;
pub mod roles;
pub mod selection;
pub mod state;
pub mod town;
pub mod wakes;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_night_flow;
#[cfg(test)]
mod tests_phases;
#[cfg(test)]
mod tests_props_selection;
#[cfg(test)]
mod tests_props_wakes;

// Re-exports for ergonomics
pub use actions::{Action, ActionQueue};
pub use day_view::DayView;
pub use game::Game;
pub use game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
pub use pairings::{Connection, ConnectionId, PairingTable, SeatActor};
pub use players::{Player, PlayerRegistry};
pub use resolution::{Effect, ManualResolution, NightReport, NightResolver};
pub use roles::{RoleCatalog, RoleDef, RoleId, WakeType, WakeTypeId};
pub use selection::{SelectionBuffer, SelectionState};
pub use state::{ChatId, GameId, Phase, Position};
pub use town::{Town, TownRecord};
pub use wakes::{build_wakes, NightScheduler, Wake};
