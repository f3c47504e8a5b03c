use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;

/// Service-boundary error handed back to the presentation gateway.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rejected: {detail}")]
    Rejected { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Forbidden: {detail}")]
    Forbidden { detail: String },
    #[error("Configuration error: {detail}")]
    Config {
        detail: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
    #[error("Internal error: {detail}")]
    Internal {
        code: ErrorCode,
        detail: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AppError {
    /// Helper method to extract error code from any error variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Rejected { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Forbidden { .. } => ErrorCode::Forbidden,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { code, .. } => *code,
        }
    }

    /// Helper method to extract error detail from any error variant
    pub fn detail(&self) -> String {
        match self {
            AppError::Rejected { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Forbidden { detail }
            | AppError::Config { detail, .. }
            | AppError::Internal { detail, .. } => detail.clone(),
        }
    }

    /// Rejections leave the game untouched; the caller re-renders and moves on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Config { .. } | AppError::Internal { .. })
    }

    pub fn rejected(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Rejected {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::Forbidden {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
            source: None,
        }
    }

    pub fn internal(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Internal {
            code,
            detail: detail.into(),
            source: None,
        }
    }

    pub fn game_not_found(game_id: i64) -> Self {
        Self::not_found(ErrorCode::GameNotFound, format!("Game {game_id} not found"))
    }
}

fn validation_code(kind: &ValidationKind) -> ErrorCode {
    match kind {
        ValidationKind::InvalidTransition => ErrorCode::InvalidTransition,
        ValidationKind::ChoiceLimitExceeded => ErrorCode::ChoiceLimitExceeded,
        ValidationKind::NothingToCancel => ErrorCode::NothingToCancel,
        ValidationKind::ConfirmationNotReady => ErrorCode::ConfirmationNotReady,
        ValidationKind::UnknownPosition => ErrorCode::UnknownPosition,
        ValidationKind::NoActiveWake => ErrorCode::NoActiveWake,
        ValidationKind::SelectionPending => ErrorCode::SelectionPending,
        ValidationKind::NotYourTurn => ErrorCode::NotYourTurn,
        ValidationKind::InvalidCatalog => ErrorCode::InvalidCatalog,
        ValidationKind::Other(_) => ErrorCode::ValidationError,
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => AppError::Rejected {
                code: validation_code(&kind),
                detail,
            },
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::Game => ErrorCode::GameNotFound,
                    NotFoundKind::Role => ErrorCode::RoleNotFound,
                    NotFoundKind::Connection => ErrorCode::ConnectionNotFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::NotFound { code, detail }
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::SeatTaken => ErrorCode::SeatTaken,
                    ConflictKind::DuplicateRole => ErrorCode::DuplicateRole,
                    ConflictKind::Other(_) => ErrorCode::Conflict,
                };
                AppError::Conflict { code, detail }
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal {
            code: ErrorCode::SnapshotError,
            detail: format!("snapshot serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}
