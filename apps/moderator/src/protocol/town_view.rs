use serde::Serialize;

use crate::config::host::HostSettings;
use crate::domain::game::Game;
use crate::domain::game_transition::GameTransition;
use crate::domain::roles::{RoleId, WakeTypeId};
use crate::domain::state::{GameId, Phase, Position};
use crate::protocol::layout::target_rows;

/// Everything a gateway needs to redraw the host's screen for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TownView {
    pub game_id: GameId,
    pub phase: Phase,
    pub night: u32,
    pub alive: usize,
    pub total: usize,
    /// Players shown in the listing (day filter applied during Day).
    pub players: Vec<PlayerLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wake: Option<WakeLine>,
    pub queued_actions: usize,
    pub acknowledged: usize,
    pub paired: usize,
    pub menu: Vec<MenuButton>,
    pub transitions: Vec<GameTransition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerLine {
    pub position: Position,
    pub name: String,
    pub alive: bool,
    /// Hidden when the host runs with `hide_roles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleId>,
    pub automated: bool,
    pub notified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WakeLine {
    pub index: usize,
    pub wake_type: WakeTypeId,
    pub roles: Vec<RoleId>,
    pub actors: Vec<Position>,
    pub choice: u8,
    pub selected: Vec<Position>,
    /// Living targets laid out as keyboard rows.
    pub target_rows: Vec<Vec<Position>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuButton {
    StartNight,
    CancelLast,
    Skip,
    CancelSelection,
    Confirm,
    GoToDay,
    Reveal,
    Terminate,
}

impl TownView {
    pub fn build(
        game: &Game,
        settings: &HostSettings,
        transitions: Vec<GameTransition>,
    ) -> Self {
        let players = game.players();
        let pairings = game.pairings();
        let (alive, total) = players.alive_summary();

        let listing = players
            .all()
            .iter()
            .filter(|p| game.phase() != Phase::Day || settings.day_view.filter(p))
            .map(|p| PlayerLine {
                position: p.position,
                name: p.name.clone(),
                alive: p.alive,
                role: if settings.hide_roles {
                    None
                } else {
                    p.role.clone()
                },
                automated: pairings.is_automated(p.position),
                notified: pairings.is_notified(p.position),
            })
            .collect();

        let wake = game.current_wake().map(|w| {
            let living: Vec<Position> = players.living().map(|p| p.position).collect();
            WakeLine {
                index: game.town().scheduler().cursor(),
                wake_type: w.wake_type.clone(),
                roles: w.roles.clone(),
                actors: w
                    .holders
                    .iter()
                    .copied()
                    .filter(|&p| players.is_alive(p))
                    .collect(),
                choice: w.choice,
                selected: game.town().selection().targets().to_vec(),
                target_rows: target_rows(&living, settings.double_column_night),
            }
        });

        Self {
            game_id: game.id,
            phase: game.phase(),
            night: game.night(),
            alive,
            total,
            players: listing,
            menu: menu_for(game, settings, wake.as_ref()),
            wake,
            queued_actions: game.town().queue().len(),
            acknowledged: pairings.acknowledged(),
            paired: pairings.len(),
            transitions,
        }
    }
}

fn menu_for(game: &Game, settings: &HostSettings, wake: Option<&WakeLine>) -> Vec<MenuButton> {
    let mut menu = Vec::new();
    match game.phase() {
        Phase::Lobby => menu.push(MenuButton::StartNight),
        Phase::Night => {
            if !game.town().queue().is_empty() {
                menu.push(MenuButton::CancelLast);
            }
            match wake {
                Some(wake) if wake.selected.is_empty() && wake.choice > 0 => {
                    menu.push(MenuButton::Skip);
                }
                Some(wake) => {
                    if wake.choice > 0 {
                        menu.push(MenuButton::CancelSelection);
                    } else {
                        menu.push(MenuButton::Skip);
                    }
                    let full = wake.selected.len() == wake.choice as usize;
                    if settings.confirm_night_selection && full {
                        menu.push(MenuButton::Confirm);
                    }
                }
                None => menu.push(MenuButton::GoToDay),
            }
            menu.push(MenuButton::Reveal);
        }
        Phase::Day => {
            if !settings.hide_roles {
                menu.push(MenuButton::StartNight);
            }
            menu.push(MenuButton::Reveal);
        }
        Phase::Reveal => menu.push(MenuButton::Terminate),
        Phase::Ended => {}
    }
    menu
}
