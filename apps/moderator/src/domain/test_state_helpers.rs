//! Test-only game builders for domain unit tests.

use std::sync::Arc;

use crate::domain::game::Game;
use crate::domain::roles::RoleCatalog;

/// A lobby game with one seat per role, seated in order (position 1 first).
///
/// `"-"` seats a player without a role.
pub fn lobby_with_roles(roles: &[&str]) -> Game {
    let mut game = Game::new(1, 100, Arc::new(RoleCatalog::classic()));
    for (idx, role) in roles.iter().enumerate() {
        let pos = game.seat_player(format!("player-{}", idx + 1)).unwrap();
        if *role != "-" {
            game.assign_role(pos, role).unwrap();
        }
    }
    game
}

/// Same as [`lobby_with_roles`] with the first night already started.
pub fn night_with_roles(roles: &[&str]) -> Game {
    let mut game = lobby_with_roles(roles);
    game.start_night().unwrap();
    game
}

pub fn current_wake_type(game: &Game) -> Option<String> {
    game.current_wake().map(|w| w.wake_type.clone())
}
