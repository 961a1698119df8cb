//! Navigation and collision core for a room-partitioned tile world.
//!
//! `game-core` defines the canonical rules for one or two local players moving
//! through a map of fixed-size rooms: which room is active, whether a step is
//! legal against that room's tiles, and when the players switch rooms. It
//! performs no I/O; rendering, camera and score overlays are reached through
//! the ports in [`navigation`], and map data arrives through [`env::MapOracle`].
pub mod collision;
pub mod config;
pub mod env;
pub mod error;
pub mod movement;
pub mod navigation;
pub mod player;
pub mod state;

pub use collision::{Walkability, WalkabilityGrid};
pub use config::GameConfig;
pub use env::{MapError, MapOracle, Room, RoomMap, RoomTiles, TileId, TilePlacement};
pub use error::{ErrorSeverity, GameError};
pub use movement::{Entity, MoveError, PositionChanged, PositionObserver};
pub use navigation::{
    Agreement, Camera, NavigationError, Ports, Readiness, RoomNavigator, Scoreboard, SessionMode,
    SpawnError, TickOutcome, TileCanvas, TransitionError, evaluate_agreement,
};
pub use player::{Player, PlayerMode, PlayerSlot, RoomRequest};
pub use state::{EntityId, Point, RoomBounds, RoomCoord, RoomOffset};
