use crate::error::{ErrorSeverity, GameError};
use crate::state::{RoomCoord, RoomOffset};

/// Reasons a room transition request is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionError {
    #[error("transition {pending} is already pending")]
    AlreadyPending { pending: RoomOffset },

    #[error("no room at {target}")]
    RoomNotFound { target: RoomCoord },
}

impl GameError for TransitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            TransitionError::AlreadyPending { .. } => "TRANSITION_ALREADY_PENDING",
            TransitionError::RoomNotFound { .. } => "TRANSITION_ROOM_NOT_FOUND",
        }
    }
}

/// Reasons a second player cannot join.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpawnError {
    #[error("session is not loaded")]
    NotLoaded,

    #[error("session already runs two players")]
    AlreadyTwoPlayers,

    #[error("scoreboard does not allow a second player yet")]
    NotAllowed,

    #[error("no living first player to promote")]
    NoLivingPlayer,
}

impl GameError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            SpawnError::NotLoaded => "SPAWN_NOT_LOADED",
            SpawnError::AlreadyTwoPlayers => "SPAWN_ALREADY_TWO_PLAYERS",
            SpawnError::NotAllowed => "SPAWN_NOT_ALLOWED",
            SpawnError::NoLivingPlayer => "SPAWN_NO_LIVING_PLAYER",
        }
    }
}

/// Errors raised while starting a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationError {
    #[error("map has no starting room at {0}")]
    StartingRoomMissing(RoomCoord),

    #[error("session is already loaded")]
    AlreadyLoaded,
}

impl GameError for NavigationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            NavigationError::StartingRoomMissing(_) => ErrorSeverity::Fatal,
            NavigationError::AlreadyLoaded => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            NavigationError::StartingRoomMissing(_) => "NAVIGATION_STARTING_ROOM_MISSING",
            NavigationError::AlreadyLoaded => "NAVIGATION_ALREADY_LOADED",
        }
    }
}
