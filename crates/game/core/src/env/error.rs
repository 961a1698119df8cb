//! Map data errors.
//!
//! Raised while building the map repository from loaded content. Once a map
//! exists, lookups never fail: an unknown coordinate is simply "no room".

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::RoomCoord;

/// Errors that occur while validating room data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapError {
    /// Room grid does not have the fixed number of rows.
    #[error("room {room} has {rows} rows, expected {}", GameConfig::ROOM_ROWS)]
    InvalidRowCount { room: RoomCoord, rows: usize },

    /// A row of the room grid does not have the fixed number of columns.
    #[error(
        "room {room} row {row} has {columns} columns, expected {}",
        GameConfig::ROOM_COLUMNS
    )]
    InvalidColumnCount {
        room: RoomCoord,
        row: usize,
        columns: usize,
    },

    /// Tile id outside the accepted range (`-1` and above).
    #[error("room {room} has invalid tile {tile} at row {row}, column {column}")]
    InvalidTile {
        room: RoomCoord,
        row: usize,
        column: usize,
        tile: i32,
    },

    /// Room coordinate whose pixel rectangle does not fit in `i32`.
    #[error("room coordinate {0} is outside the addressable map")]
    CoordinateOutOfRange(RoomCoord),

    /// Two rooms were defined at the same coordinate.
    #[error("more than one room defined at {0}")]
    DuplicateRoom(RoomCoord),
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use MapError::*;
        match self {
            InvalidRowCount { .. } => "MAP_INVALID_ROW_COUNT",
            InvalidColumnCount { .. } => "MAP_INVALID_COLUMN_COUNT",
            InvalidTile { .. } => "MAP_INVALID_TILE",
            CoordinateOutOfRange(_) => "MAP_COORDINATE_OUT_OF_RANGE",
            DuplicateRoom(_) => "MAP_DUPLICATE_ROOM",
        }
    }
}
