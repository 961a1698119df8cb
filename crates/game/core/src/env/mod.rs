//! Read-only world data.
//!
//! The map repository is loaded once at startup and never mutated. Everything
//! else in the crate reaches rooms through the [`MapOracle`] trait so the
//! storage behind it can be swapped freely.
mod error;
mod map;

pub use error::MapError;
pub use map::{MapOracle, Room, RoomMap, RoomTiles, TileId, TilePlacement};
