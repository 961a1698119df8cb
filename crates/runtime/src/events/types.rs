//! Event payloads grouped by topic.

use game_core::{PlayerSlot, Point, PositionChanged, RoomCoord, RoomOffset, TilePlacement};
use serde::{Deserialize, Serialize};

/// Events about the active room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomEvent {
    /// Tiles of a room were handed to the canvas.
    Materialized {
        room: RoomCoord,
        tiles: Vec<TilePlacement>,
    },

    /// The camera was pointed at a room.
    CameraMoved { room: RoomCoord, origin: Point },

    /// The active room switched.
    Changed {
        from: RoomCoord,
        to: RoomCoord,
        offset: RoomOffset,
    },
}

/// Events about individual players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// A committed position change, forced or collision-checked.
    Moved(PositionChanged),

    /// A player asked to leave the room through an edge.
    ExitRequested { slot: PlayerSlot, offset: RoomOffset },

    Died { slot: PlayerSlot },

    Removed { slot: PlayerSlot },
}

/// Session lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The starting room is live and the solo player stands at `spawn`.
    Loaded { room: RoomCoord, spawn: Point },

    /// The scoreboard's "press to join" prompt was taken down.
    JoinPromptHidden,

    SecondPlayerJoined,

    /// Every player is dead or gone; `cleared` is the pending transition
    /// that was dropped, if any.
    AllPlayersDown { cleared: Option<RoomOffset> },
}
