//! Error codes for the moderator engine.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! handed to the presentation gateway.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Engine rejections
    /// Phase change not legal from the current phase
    InvalidTransition,
    /// Selection would exceed the wake's choice count
    ChoiceLimitExceeded,
    /// Nothing to cancel
    NothingToCancel,
    /// Selection size does not match the required choice count
    ConfirmationNotReady,
    /// Target is not a living player position
    UnknownPosition,
    /// No wake is currently active
    NoActiveWake,
    /// Targets still selected
    SelectionPending,
    /// Actor may not drive the active wake
    NotYourTurn,
    /// Role catalogue is malformed
    InvalidCatalog,
    /// General validation error
    ValidationError,

    // Authorization
    /// Actor is neither the host nor a seated player
    Forbidden,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Role not found
    RoleNotFound,
    /// Connection not found
    ConnectionNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Seat already bound to a connection
    SeatTaken,
    /// Role id defined twice
    DuplicateRole,
    /// Generic conflict
    Conflict,

    // System Errors
    /// Automated stand-in failed to decide
    AutomationFailed,
    /// Snapshot (de)serialization failed
    SnapshotError,
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTransition => "INVALID_TRANSITION",
            Self::ChoiceLimitExceeded => "CHOICE_LIMIT_EXCEEDED",
            Self::NothingToCancel => "NOTHING_TO_CANCEL",
            Self::ConfirmationNotReady => "CONFIRMATION_NOT_READY",
            Self::UnknownPosition => "UNKNOWN_POSITION",
            Self::NoActiveWake => "NO_ACTIVE_WAKE",
            Self::SelectionPending => "SELECTION_PENDING",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::InvalidCatalog => "INVALID_CATALOG",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::Forbidden => "FORBIDDEN",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::RoleNotFound => "ROLE_NOT_FOUND",
            Self::ConnectionNotFound => "CONNECTION_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::SeatTaken => "SEAT_TAKEN",
            Self::DuplicateRole => "DUPLICATE_ROLE",
            Self::Conflict => "CONFLICT",

            Self::AutomationFailed => "AUTOMATION_FAILED",
            Self::SnapshotError => "SNAPSHOT_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
