//! Domain-level error type used across the engine and services.
//!
//! This error type is transport- and storage-agnostic. Services return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.
//!
//! Every variant is recoverable: callers re-render the current state after
//! a rejection and the game carries on.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Reasons an engine operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Phase change (or mutation) not legal from the current phase.
    InvalidTransition,
    /// Selection would exceed the active wake's choice count.
    ChoiceLimitExceeded,
    /// Queue or buffer is empty.
    NothingToCancel,
    /// Buffer size does not match the wake's required choice count.
    ConfirmationNotReady,
    /// Target is not a valid (living) player position.
    UnknownPosition,
    /// The night has no active wake (complete, or not night at all).
    NoActiveWake,
    /// Skip requested while targets are still selected.
    SelectionPending,
    /// Actor is not allowed to drive the active wake.
    NotYourTurn,
    /// Role catalogue is malformed or references unknown entries.
    InvalidCatalog,
    Other(String),
}

/// Domain-level not found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Game,
    Role,
    Connection,
    Other(String),
}

/// Domain-level conflict kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    SeatTaken,
    DuplicateRole,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Rule violation; the request is rejected and state is left unchanged
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn invalid_transition(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::InvalidTransition, detail)
    }

    pub fn unknown_position(position: u16) -> Self {
        Self::validation(
            ValidationKind::UnknownPosition,
            format!("No living player at position {position}"),
        )
    }

    /// Validation kind, if this is a rejection.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }
}
