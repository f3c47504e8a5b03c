// Unit tests for error mapping - pure domain logic without transport dependencies
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_engine_rejections() {
    let cases = [
        (ValidationKind::InvalidTransition, ErrorCode::InvalidTransition),
        (ValidationKind::NothingToCancel, ErrorCode::NothingToCancel),
        (
            ValidationKind::ConfirmationNotReady,
            ErrorCode::ConfirmationNotReady,
        ),
        (ValidationKind::UnknownPosition, ErrorCode::UnknownPosition),
        (ValidationKind::NoActiveWake, ErrorCode::NoActiveWake),
        (ValidationKind::Other("X".into()), ErrorCode::ValidationError),
    ];

    for (kind, expected) in cases {
        let app: AppError = DomainError::validation(kind, "rejected").into();
        assert_eq!(app.code(), expected);
        assert!(app.is_recoverable());
        assert!(matches!(app, AppError::Rejected { .. }));
    }
}

#[test]
fn maps_conflicts() {
    let seat = DomainError::conflict(ConflictKind::SeatTaken, "seat taken");
    let app: AppError = seat.into();
    assert_eq!(app.code().as_str(), "SEAT_TAKEN");

    let other = DomainError::conflict(ConflictKind::Other("x".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.detail(), "generic conflict");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Game, "no game");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");

    let nf = DomainError::not_found(NotFoundKind::Role, "no role");
    let app: AppError = nf.into();
    assert_eq!(app.code(), ErrorCode::RoleNotFound);
}

#[test]
fn system_errors_are_not_recoverable() {
    assert!(!AppError::config("bad env").is_recoverable());
    assert!(!AppError::internal(ErrorCode::Internal, "boom").is_recoverable());
    assert!(AppError::forbidden("not host").is_recoverable());
}
