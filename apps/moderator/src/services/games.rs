//! Game repository: owns every live game and the archive of finished ones.
//!
//! Each game sits behind its own mutex, so mutations on one game are
//! serialized while other games proceed independently.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::config::host::HostSettings;
use crate::domain::game::Game;
use crate::domain::players::Player;
use crate::domain::roles::RoleCatalog;
use crate::domain::state::{ChatId, GameId};
use crate::domain::town::TownRecord;
use crate::error::AppError;
use crate::protocol::town_view::TownView;

/// A live game with the host settings it runs under.
#[derive(Debug)]
pub struct GameEntry {
    pub game: Game,
    pub settings: HostSettings,
    /// Base seed for automated seats; `None` draws from OS entropy.
    pub automation_seed: Option<u64>,
}

impl GameEntry {
    pub fn new(game: Game, settings: HostSettings) -> Self {
        let mut entry = Self {
            game,
            settings,
            automation_seed: None,
        };
        entry.apply_settings();
        entry
    }

    /// Push settings that the engine itself needs down into the game.
    pub fn apply_settings(&mut self) {
        self.game
            .set_confirmation_required(self.settings.confirm_night_selection);
    }
}

pub type SharedGame = Arc<Mutex<GameEntry>>;

/// A terminated game, kept for the host's history.
#[derive(Debug, Clone, Serialize)]
pub struct ArchivedGame {
    pub id: GameId,
    pub host: ChatId,
    pub nights: u32,
    pub players: Vec<Player>,
    pub played_at: OffsetDateTime,
    /// View rendered when the game ended.
    pub final_view: TownView,
}

#[derive(Debug)]
pub struct GameRepository {
    games: DashMap<GameId, SharedGame>,
    archive: Mutex<Vec<ArchivedGame>>,
    next_id: AtomicI64,
}

impl Default for GameRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRepository {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
            archive: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Open a new lobby for `host`.
    pub fn create(
        &self,
        host: ChatId,
        catalog: Arc<RoleCatalog>,
        settings: HostSettings,
    ) -> GameId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let entry = GameEntry::new(Game::new(id, host, catalog), settings);
        self.games.insert(id, Arc::new(Mutex::new(entry)));
        info!(game_id = id, host, "Game created");
        id
    }

    pub fn get(&self, game_id: GameId) -> Result<SharedGame, AppError> {
        self.games
            .get(&game_id)
            .map(|slot| Arc::clone(slot.value()))
            .ok_or_else(|| AppError::game_not_found(game_id))
    }

    /// Lock the game and run `f` against it.
    pub fn with_game<T>(
        &self,
        game_id: GameId,
        f: impl FnOnce(&mut GameEntry) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let shared = self.get(game_id)?;
        let mut entry = shared.lock();
        f(&mut *entry)
    }

    pub fn contains(&self, game_id: GameId) -> bool {
        self.games.contains_key(&game_id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Live games hosted from `host`.
    pub fn hosted_by(&self, host: ChatId) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self
            .games
            .iter()
            .filter(|slot| slot.value().lock().game.host == host)
            .map(|slot| *slot.key())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Drop the game from the live set and record it in the archive.
    pub fn archive(&self, game_id: GameId) -> Result<ArchivedGame, AppError> {
        let (_, shared) = self
            .games
            .remove(&game_id)
            .ok_or_else(|| AppError::game_not_found(game_id))?;
        let entry = shared.lock();
        let record = ArchivedGame {
            id: game_id,
            host: entry.game.host,
            nights: entry.game.night(),
            players: entry.game.players().all().to_vec(),
            played_at: OffsetDateTime::now_utc(),
            final_view: TownView::build(&entry.game, &entry.settings, Vec::new()),
        };
        self.archive.lock().push(record.clone());
        info!(game_id, nights = record.nights, "Game archived");
        Ok(record)
    }

    pub fn archived(&self) -> Vec<ArchivedGame> {
        self.archive.lock().clone()
    }

    pub fn archived_game(&self, game_id: GameId) -> Option<ArchivedGame> {
        self.archive
            .lock()
            .iter()
            .find(|record| record.id == game_id)
            .cloned()
    }

    /// Serialize the game's night engine for storage.
    pub fn save_town(&self, game_id: GameId) -> Result<String, AppError> {
        self.with_game(game_id, |entry| {
            Ok(serde_json::to_string(&entry.game.town_record())?)
        })
    }

    /// Restore a stored night engine, rebuilding it from the registry when
    /// the record is missing or unusable.
    ///
    /// Returns whether the stored record was used.
    pub fn load_town(&self, game_id: GameId, stored: Option<&str>) -> Result<bool, AppError> {
        self.with_game(game_id, |entry| {
            let Some(raw) = stored else {
                entry.game.recover_town();
                return Ok(false);
            };
            let restored = serde_json::from_str::<TownRecord>(raw)
                .map_err(AppError::from)
                .and_then(|record| entry.game.restore_town(record).map_err(AppError::from));
            if let Err(err) = restored {
                warn!(game_id, error = %err, "Town record unusable; rebuilding from registry");
                entry.game.recover_town();
                return Ok(false);
            }
            Ok(true)
        })
    }
}
