//! Per-host settings that change how a night is moderated and shown.
//!
//! Settings load from `MODERATOR_*` environment variables with serde
//! defaults, and the host can flip any boolean option from the settings menu.

use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::day_view::DayView;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Require an explicit confirm once the selection is full.
    pub confirm_night_selection: bool,
    /// Let automated seats pick and confirm their own targets.
    pub auto_play_bots: bool,
    /// Lay the night target list out in two columns.
    pub double_column_night: bool,
    /// Keep role names out of the host's view.
    pub hide_roles: bool,
    pub day_view: DayView,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            confirm_night_selection: true,
            auto_play_bots: false,
            double_column_night: true,
            hide_roles: false,
            day_view: DayView::All,
        }
    }
}

/// Boolean options the host can toggle from the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostOption {
    ConfirmNightSelection,
    AutoPlayBots,
    DoubleColumnNight,
    HideRoles,
}

impl HostOption {
    pub const ALL: [HostOption; 4] = [
        HostOption::ConfirmNightSelection,
        HostOption::AutoPlayBots,
        HostOption::DoubleColumnNight,
        HostOption::HideRoles,
    ];

    pub const fn env_var(self) -> &'static str {
        match self {
            HostOption::ConfirmNightSelection => "MODERATOR_CONFIRM_NIGHT_SELECTION",
            HostOption::AutoPlayBots => "MODERATOR_AUTO_PLAY_BOTS",
            HostOption::DoubleColumnNight => "MODERATOR_DOUBLE_COLUMN_NIGHT",
            HostOption::HideRoles => "MODERATOR_HIDE_ROLES",
        }
    }
}

const DAY_VIEW_VAR: &str = "MODERATOR_DAY_VIEW";

impl HostSettings {
    /// Defaults overridden by whichever `MODERATOR_*` variables are set.
    pub fn from_env() -> Result<Self, AppError> {
        let mut settings = Self::default();
        for option in HostOption::ALL {
            if let Some(value) = bool_var(option.env_var())? {
                *settings.slot(option) = value;
            }
        }
        if let Ok(raw) = env::var(DAY_VIEW_VAR) {
            settings.day_view = raw
                .parse()
                .map_err(|e: String| AppError::config(format!("{DAY_VIEW_VAR}: {e}")))?;
        }
        Ok(settings)
    }

    pub fn get(&self, option: HostOption) -> bool {
        match option {
            HostOption::ConfirmNightSelection => self.confirm_night_selection,
            HostOption::AutoPlayBots => self.auto_play_bots,
            HostOption::DoubleColumnNight => self.double_column_night,
            HostOption::HideRoles => self.hide_roles,
        }
    }

    /// Flip `option`, returning its new value.
    pub fn toggle(&mut self, option: HostOption) -> bool {
        let slot = self.slot(option);
        *slot = !*slot;
        *slot
    }

    /// Advance the day listing filter.
    pub fn cycle_day_view(&mut self) -> DayView {
        self.day_view = self.day_view.next();
        self.day_view
    }

    fn slot(&mut self, option: HostOption) -> &mut bool {
        match option {
            HostOption::ConfirmNightSelection => &mut self.confirm_night_selection,
            HostOption::AutoPlayBots => &mut self.auto_play_bots,
            HostOption::DoubleColumnNight => &mut self.double_column_night,
            HostOption::HideRoles => &mut self.hide_roles,
        }
    }
}

fn bool_var(name: &str) -> Result<Option<bool>, AppError> {
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        other => Err(AppError::config(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}
