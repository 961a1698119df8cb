//! Geometry and identifiers shared by every layer of the navigation core.
//!
//! World positions are pixel [`Point`]s; rooms are addressed by [`RoomCoord`]
//! and moved between with [`RoomOffset`]s.
mod common;

pub use common::{EntityId, Point, RoomBounds, RoomCoord, RoomOffset};
