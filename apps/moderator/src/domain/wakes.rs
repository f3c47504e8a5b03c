//! Night Scheduler: the wake order for one night and the cursor walking it.
//!
//! The wake list is rebuilt from the registry at the start of every night
//! and never carried over, so deaths and role changes between nights are
//! always reflected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::players::PlayerRegistry;
use crate::domain::roles::{RoleCatalog, RoleId, WakeTypeId};
use crate::domain::state::Position;

/// One scheduled turn-slot: every living holder of one wake type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wake {
    pub wake_type: WakeTypeId,
    pub priority: i32,
    pub choice: u8,
    /// Distinct roles in this group, sorted.
    pub roles: Vec<RoleId>,
    /// Holders that were alive when the night was built, ascending.
    pub holders: Vec<Position>,
}

impl Wake {
    /// Seat that speaks for the group (lowest living position).
    pub fn actor(&self, players: &PlayerRegistry) -> Option<Position> {
        self.holders
            .iter()
            .copied()
            .find(|&pos| players.is_alive(pos))
    }

    pub fn has_living_holder(&self, players: &PlayerRegistry) -> bool {
        self.actor(players).is_some()
    }

    pub fn requires_targets(&self) -> bool {
        self.choice > 0
    }
}

/// Group living players by wake type and order by `(priority, wake type id)`.
pub fn build_wakes(players: &PlayerRegistry, catalog: &RoleCatalog) -> Vec<Wake> {
    let mut groups: BTreeMap<&str, Wake> = BTreeMap::new();

    for player in players.living() {
        let Some(role_id) = player.role.as_deref() else {
            continue;
        };
        let Some(wake_type) = catalog.wake_for_role(role_id) else {
            continue;
        };

        let entry = groups.entry(wake_type.id.as_str()).or_insert_with(|| Wake {
            wake_type: wake_type.id.clone(),
            priority: wake_type.priority,
            choice: wake_type.choice,
            roles: Vec::new(),
            holders: Vec::new(),
        });
        if !entry.roles.iter().any(|r| r == role_id) {
            entry.roles.push(role_id.to_string());
        }
        entry.holders.push(player.position);
    }

    let mut wakes: Vec<Wake> = groups.into_values().collect();
    for wake in &mut wakes {
        wake.roles.sort();
        wake.holders.sort_unstable();
    }
    // BTreeMap already yields ids in order, so a stable sort on priority
    // leaves ties ordered by wake type id.
    wakes.sort_by_key(|w| w.priority);
    wakes
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightScheduler {
    wakes: Vec<Wake>,
    /// Always in `0..=wakes.len()`; `wakes.len()` means the night is complete.
    cursor: usize,
}

impl NightScheduler {
    /// Start walking `wakes`, skipping any leading wake with no living holder.
    pub fn new(wakes: Vec<Wake>, players: &PlayerRegistry) -> Self {
        let mut scheduler = Self { wakes, cursor: 0 };
        scheduler.skip_vacant(players);
        scheduler
    }

    /// Restore a persisted scheduler; an out-of-range cursor is clamped.
    pub fn from_parts(wakes: Vec<Wake>, cursor: usize) -> Self {
        let cursor = cursor.min(wakes.len());
        Self { wakes, cursor }
    }

    pub fn wakes(&self) -> &[Wake] {
        &self.wakes
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.wakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wakes.is_empty()
    }

    pub fn current(&self) -> Option<&Wake> {
        self.wakes.get(self.cursor)
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.wakes.len()
    }

    /// Move past the current wake, then past any wake left without holders.
    pub fn advance(&mut self, players: &PlayerRegistry) {
        if !self.is_complete() {
            self.cursor += 1;
        }
        self.skip_vacant(players);
    }

    /// Point the cursor back at `index` (used when undoing an action).
    ///
    /// Returns false when that wake has no living holder any more; the cursor
    /// then continues to the next wake that does.
    pub fn rewind_to(&mut self, index: usize, players: &PlayerRegistry) -> bool {
        self.cursor = index.min(self.wakes.len());
        let live = self
            .current()
            .is_some_and(|wake| wake.has_living_holder(players));
        if !live {
            self.skip_vacant(players);
        }
        live
    }

    fn skip_vacant(&mut self, players: &PlayerRegistry) {
        while let Some(wake) = self.current() {
            if wake.has_living_holder(players) {
                break;
            }
            debug!(
                wake = %wake.wake_type,
                cursor = self.cursor,
                "Skipping wake with no living holders"
            );
            self.cursor += 1;
        }
    }
}
