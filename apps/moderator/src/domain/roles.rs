//! Role catalogue: which roles exist and how they wake at night.
//!
//! Roles are data. A role either has no night action, or belongs to a
//! wake type that fixes its ordering priority and how many targets it picks.
//! Several roles may share one wake type and then wake together.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

pub type RoleId = String;
pub type WakeTypeId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WakeType {
    pub id: WakeTypeId,
    /// Lower wakes first.
    pub priority: i32,
    /// Targets to pick: 0 = none, 1 = single, N = several.
    pub choice: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDef {
    pub id: RoleId,
    pub display_name: String,
    #[serde(default)]
    pub wake_type: Option<WakeTypeId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCatalog {
    wake_types: Vec<WakeType>,
    roles: Vec<RoleDef>,
}

impl RoleCatalog {
    /// Build a catalogue, rejecting duplicate ids and dangling wake types.
    pub fn new(wake_types: Vec<WakeType>, roles: Vec<RoleDef>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for wake in &wake_types {
            if !seen.insert(wake.id.as_str()) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidCatalog,
                    format!("wake type '{}' defined twice", wake.id),
                ));
            }
        }

        let mut role_ids = HashSet::new();
        for role in &roles {
            if !role_ids.insert(role.id.as_str()) {
                return Err(DomainError::conflict(
                    ConflictKind::DuplicateRole,
                    format!("role '{}' defined twice", role.id),
                ));
            }
            if let Some(wake) = &role.wake_type {
                if !seen.contains(wake.as_str()) {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidCatalog,
                        format!("role '{}' references unknown wake type '{wake}'", role.id),
                    ));
                }
            }
        }

        Ok(Self { wake_types, roles })
    }

    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let parsed: RoleCatalog = serde_json::from_str(raw).map_err(|err| {
            DomainError::validation(
                ValidationKind::InvalidCatalog,
                format!("unreadable catalogue: {err}"),
            )
        })?;
        Self::new(parsed.wake_types, parsed.roles)
    }

    pub fn roles(&self) -> &[RoleDef] {
        &self.roles
    }

    pub fn wake_types(&self) -> &[WakeType] {
        &self.wake_types
    }

    pub fn role(&self, id: &str) -> Option<&RoleDef> {
        self.roles.iter().find(|r| r.id == id)
    }

    pub fn require_role(&self, id: &str) -> Result<&RoleDef, DomainError> {
        self.role(id)
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Role, format!("role '{id}'")))
    }

    pub fn wake_type(&self, id: &str) -> Option<&WakeType> {
        self.wake_types.iter().find(|w| w.id == id)
    }

    /// Wake type a role acts in, if it acts at night at all.
    pub fn wake_for_role(&self, role_id: &str) -> Option<&WakeType> {
        self.role(role_id)
            .and_then(|r| r.wake_type.as_deref())
            .and_then(|w| self.wake_type(w))
    }

    /// Built-in Town setup used by the demo binary and the simulator.
    pub fn classic() -> Self {
        let wake = |id: &str, priority, choice| WakeType {
            id: id.to_string(),
            priority,
            choice,
        };
        let role = |id: &str, name: &str, wake: Option<&str>| RoleDef {
            id: id.to_string(),
            display_name: name.to_string(),
            wake_type: wake.map(str::to_string),
        };

        Self {
            wake_types: vec![
                wake("lovers", 5, 2),
                wake("mafia", 10, 1),
                wake("doctor", 20, 1),
                wake("detective", 30, 1),
                wake("witness", 40, 0),
            ],
            roles: vec![
                role("citizen", "Citizen", None),
                role("matchmaker", "Matchmaker", Some("lovers")),
                role("mafia", "Mafia", Some("mafia")),
                role("don", "Don", Some("mafia")),
                role("doctor", "Doctor", Some("doctor")),
                role("detective", "Detective", Some("detective")),
                role("witness", "Witness", Some("witness")),
            ],
        }
    }
}
